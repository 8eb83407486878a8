use std::io::{BufRead, Write};

use tracing::debug;
use trellis_layer::{Admission, Invoke, Stack, invoke_fn, map_output};

use crate::cli::{DecorateArgs, LayerKind};

pub(super) fn run(args: &DecorateArgs, input: impl BufRead, output: &mut impl Write) -> anyhow::Result<()> {
	let stack = build(&args.layers, args.deny.as_deref());
	debug!(depth = stack.depth(), "layer stack ready");

	for line in input.lines() {
		writeln!(output, "{}", stack.invoke(line?))?;
	}
	Ok(())
}

/// Builds the stack with `layers` innermost first and the deny gate, if
/// any, outermost.
pub(super) fn build(layers: &[LayerKind], deny: Option<&str>) -> Stack<String, String> {
	let mut stack = Stack::new(invoke_fn(|line: String| line));
	for layer in layers {
		stack = match layer {
			LayerKind::Trim => stack.wrap(map_output(|line: String| line.trim().to_string())),
			LayerKind::Upper => stack.wrap(map_output(|line: String| line.to_uppercase())),
			LayerKind::Lower => stack.wrap(map_output(|line: String| line.to_lowercase())),
			LayerKind::Brackets => stack.wrap(map_output(|line: String| format!("[{line}]"))),
			LayerKind::Quote => stack.wrap(map_output(|line: String| format!("\"{line}\""))),
		};
	}

	if let Some(word) = deny {
		let word = word.to_lowercase();
		stack = stack.guard(move |line: &String| {
			if line.to_lowercase().contains(&word) {
				Admission::Deny(format!("blocked: contains {word:?}"))
			} else {
				Admission::Admit
			}
		});
	}
	stack
}
