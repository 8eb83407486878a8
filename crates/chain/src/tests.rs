use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use proptest::prelude::*;
use rstest::rstest;

use super::*;

fn text_chain() -> Chain<String> {
	Chain::new("text")
		.with("to-upper", transform(|s: String| s.to_uppercase()))
		.with("trim", transform(|s: String| s.trim().to_string()))
		.with("reject-if-empty", reject_if(|s: &String| s.is_empty()))
}

#[rstest]
#[case("  hi  ", Outcome::Completed("HI".to_string()))]
#[case("mixed Case", Outcome::Completed("MIXED CASE".to_string()))]
#[case("   ", Outcome::Halted(Halted { index: 2, handler: "reject-if-empty".into(), value: String::new() }))]
#[case("", Outcome::Halted(Halted { index: 2, handler: "reject-if-empty".into(), value: String::new() }))]
fn test_text_pipeline(#[case] input: &str, #[case] expected: Outcome<String>) {
	assert_eq!(text_chain().run(input.to_string()), expected);
}

#[test]
fn test_empty_chain_returns_input() {
	let chain: Chain<i32> = Chain::new("empty");
	assert!(chain.is_empty());
	assert_eq!(chain.run(7), Outcome::Completed(7));
}

#[test]
fn test_halt_prevents_later_handlers() {
	let calls: Vec<Arc<AtomicUsize>> = (0..4).map(|_| Arc::new(AtomicUsize::new(0))).collect();
	let mut chain = Chain::new("counted");
	for (i, counter) in calls.iter().enumerate() {
		let counter = Arc::clone(counter);
		chain.append(format!("h{i}"), move |value: u32| {
			counter.fetch_add(1, Ordering::SeqCst);
			if i == 1 { Step::Halt(value + 100) } else { Step::Next(value + 1) }
		});
	}

	let outcome = chain.run(0);
	assert_eq!(outcome.halted_by(), Some("h1"));
	assert_eq!(outcome.into_value(), 101);

	let counts: Vec<_> = calls.iter().map(|c| c.load(Ordering::SeqCst)).collect();
	assert_eq!(counts, vec![1, 1, 0, 0]);
}

#[test]
fn test_forward_leaves_value_unchanged() {
	let chain = Chain::new("noop").with("a", forward()).with("b", forward());
	assert_eq!(chain.run("same"), Outcome::Completed("same"));
	assert_eq!(chain.names().collect::<Vec<_>>(), vec!["a", "b"]);
}

#[test]
fn test_dispatch_returns_claiming_handler() {
	let access = Chain::new("access")
		.with("guest", |role: &'static str| if role == "guest" { Step::Halt("read") } else { Step::Next(role) })
		.with("editor", |role: &'static str| if role == "editor" { Step::Halt("write") } else { Step::Next(role) })
		.with("admin", |role: &'static str| if role == "admin" { Step::Halt("all") } else { Step::Next(role) });

	let claimed = access.dispatch("editor").unwrap();
	assert_eq!((claimed.index, &*claimed.handler, claimed.value), (1, "editor", "write"));

	let err = access.dispatch("intruder").unwrap_err();
	assert_eq!(err, Error::EmptyChainResult { chain: "access".into() });
}

#[test]
fn test_dispatch_on_empty_chain_fails() {
	let chain: Chain<()> = Chain::new("nobody");
	assert_eq!(chain.dispatch(()).unwrap_err().kind(), ErrorKind::EmptyChainResult);
}

#[test]
fn test_step_helpers() {
	assert_eq!(Step::Next(2).map(|n| n * 3), Step::Next(6));
	assert!(Step::Halt(1).is_halt());
	assert_eq!(Step::Halt("x").into_inner(), "x");
}

proptest! {
	#[test]
	fn forwarding_chain_equals_direct_composition(
		input in any::<i64>(),
		ops in prop::collection::vec((0u8..3, -50i64..50), 0..12),
	) {
		fn apply(op: u8, operand: i64, value: i64) -> i64 {
			match op {
				0 => value.wrapping_add(operand),
				1 => value.wrapping_mul(operand),
				_ => value ^ operand,
			}
		}

		let mut chain = Chain::new("arith");
		for (i, &(op, operand)) in ops.iter().enumerate() {
			chain.append(format!("op{i}"), transform(move |v: i64| apply(op, operand, v)));
		}

		let expected = ops.iter().fold(input, |acc, &(op, operand)| apply(op, operand, acc));
		prop_assert_eq!(chain.run(input), Outcome::Completed(expected));
	}
}
