use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use pretty_assertions::assert_eq;
use rstest::rstest;

use super::*;

#[derive(Debug, PartialEq, Eq)]
struct Widget {
	name: &'static str,
	serial: usize,
}

fn counting_factory(
	name: &'static str,
	counter: &Arc<AtomicUsize>,
) -> impl Fn() -> Widget + Send + Sync + 'static {
	let counter = Arc::clone(counter);
	move || Widget {
		name,
		serial: counter.fetch_add(1, Ordering::SeqCst),
	}
}

#[derive(Debug, PartialEq, Eq)]
struct Robot {
	model: String,
	parts: Vec<String>,
}

impl Prototype for Robot {
	fn duplicate(&self) -> Self {
		Robot {
			model: self.model.clone(),
			parts: self.parts.clone(),
		}
	}
}

fn robot() -> Robot {
	Robot {
		model: "rx-1".into(),
		parts: vec!["arm".into(), "wheel".into()],
	}
}

#[test]
fn test_cached_and_fresh_resolution() {
	let mut registry = Registry::new("widgets");
	registry
		.register("A", || Widget { name: "a", serial: 0 }, Caching::Cached)
		.unwrap();
	registry
		.register("B", || Widget { name: "b", serial: 0 }, Caching::Fresh)
		.unwrap();

	let a1 = registry.resolve("A").unwrap();
	let a2 = registry.resolve("A").unwrap();
	assert!(a1.is_shared());
	assert!(Instance::ptr_eq(&a1, &a2));

	let b1 = registry.resolve("B").unwrap();
	let b2 = registry.resolve("B").unwrap();
	assert!(!b1.is_shared());
	assert_eq!(*b1, *b2);
	assert!(!Instance::ptr_eq(&b1, &b2));

	let err = registry.resolve("C").unwrap_err();
	assert_eq!(err.kind(), ErrorKind::UnknownKey);
	assert_eq!(err, Error::unknown_key("widgets", "C"));
}

#[test]
fn test_cached_entry_builds_once() {
	let built = Arc::new(AtomicUsize::new(0));
	let mut registry = Registry::new("widgets");
	registry
		.register("shared", counting_factory("shared", &built), Caching::Cached)
		.unwrap();

	assert!(!registry.is_cached("shared"));
	for _ in 0..5 {
		let widget = registry.resolve("shared").unwrap();
		assert_eq!(widget.serial, 0);
	}
	assert!(registry.is_cached("shared"));
	assert_eq!(built.load(Ordering::SeqCst), 1);
}

#[test]
fn test_fresh_entry_builds_every_time() {
	let built = Arc::new(AtomicUsize::new(0));
	let mut registry = Registry::new("widgets");
	registry
		.register("fresh", counting_factory("fresh", &built), Caching::Fresh)
		.unwrap();

	let serials: Vec<_> = (0..3)
		.map(|_| registry.resolve("fresh").unwrap().into_owned().unwrap().serial)
		.collect();
	assert_eq!(serials, vec![0, 1, 2]);
	assert!(!registry.is_cached("fresh"));
}

#[test]
fn test_cached_entry_builds_once_across_threads() {
	let built = Arc::new(AtomicUsize::new(0));
	let mut registry = Registry::new("widgets");
	registry
		.register("shared", counting_factory("shared", &built), Caching::Cached)
		.unwrap();

	let registry = &registry;
	std::thread::scope(|scope| {
		for _ in 0..8 {
			scope.spawn(move || {
				registry.resolve("shared").unwrap();
			});
		}
	});
	assert_eq!(built.load(Ordering::SeqCst), 1);
}

#[rstest]
#[case(DuplicatePolicy::KeepExisting, InsertAction::KeptExisting, "first")]
#[case(DuplicatePolicy::Replace, InsertAction::ReplacedExisting, "second")]
fn test_duplicate_policy(
	#[case] policy: DuplicatePolicy,
	#[case] action: InsertAction,
	#[case] winner: &'static str,
) {
	let mut registry = Registry::with_policy("names", policy);
	assert_eq!(
		registry.register("k", || "first", Caching::Fresh).unwrap(),
		InsertAction::InsertedNew
	);
	assert_eq!(registry.register("k", || "second", Caching::Fresh).unwrap(), action);
	assert_eq!(*registry.resolve("k").unwrap(), winner);
	assert_eq!(registry.len(), 1);
}

#[test]
fn test_reject_duplicate_by_default() {
	let mut registry = Registry::new("names");
	registry.register("k", || 1, Caching::Fresh).unwrap();

	let err = registry.register("k", || 2, Caching::Fresh).unwrap_err();
	assert_eq!(err, Error::duplicate_key("names", "k"));
	assert_eq!(*registry.resolve("k").unwrap(), 1);
}

#[test]
fn test_replace_drops_cached_instance() {
	let mut registry = Registry::new("names");
	registry.register("k", || 1, Caching::Cached).unwrap();
	let before = registry.resolve("k").unwrap();

	assert_eq!(registry.replace("k", || 2, Caching::Cached), InsertAction::ReplacedExisting);
	assert_eq!(registry.replace("new", || 3, Caching::Fresh), InsertAction::InsertedNew);

	let after = registry.resolve("k").unwrap();
	assert_eq!((*before, *after), (1, 2));
	assert!(!Instance::ptr_eq(&before, &after));
}

#[test]
fn test_keys_keep_registration_order() {
	let mut registry = Registry::new("names");
	for key in ["zeta", "alpha", "mid"] {
		registry.register(key, || (), Caching::Fresh).unwrap();
	}
	assert_eq!(registry.keys().collect::<Vec<_>>(), vec!["zeta", "alpha", "mid"]);
	assert!(registry.contains("alpha"));
	assert!(!registry.is_empty());
}

#[test]
fn test_copy_uses_declared_contract() {
	let mut registry = Registry::new("robots");
	registry
		.register_prototype("rx", robot, Caching::Cached)
		.unwrap();

	let original = registry.resolve("rx").unwrap();
	let mut copy = registry.copy("rx", &original).unwrap();
	copy.parts.push("laser".into());

	assert_eq!(original.parts, vec!["arm".to_string(), "wheel".to_string()]);
	assert_eq!(copy.parts.len(), 3);
}

#[test]
fn test_copy_without_contract_is_not_cloneable() {
	let mut registry = Registry::new("robots");
	registry.register("plain", robot, Caching::Fresh).unwrap();

	let instance = registry.resolve("plain").unwrap();
	let err = registry.copy("plain", &instance).unwrap_err();
	assert_eq!(err.kind(), ErrorKind::NotCloneable);
	assert_eq!(registry.spawn("plain").unwrap_err().kind(), ErrorKind::NotCloneable);
	assert_eq!(registry.spawn("missing").unwrap_err().kind(), ErrorKind::UnknownKey);
}

#[test]
fn test_spawn_leaves_cached_prototype_untouched() {
	let mut registry = Registry::new("robots");
	registry
		.register_prototype("rx", robot, Caching::Cached)
		.unwrap();

	let mut spawned = registry.spawn("rx").unwrap();
	spawned.model = "rx-2".into();

	assert_eq!(registry.resolve("rx").unwrap().model, "rx-1");
	assert_eq!(spawned, Robot {
		model: "rx-2".into(),
		parts: vec!["arm".into(), "wheel".into()],
	});
}

#[test]
fn test_custom_copier() {
	let mut registry = Registry::new("numbers");
	registry
		.register_entry("n", Entry::new(|| 21, Caching::Fresh).with_copier(|n| n * 2))
		.unwrap();

	assert_eq!(registry.spawn("n").unwrap(), 42);
	assert!(registry.get("n").unwrap().is_cloneable());
}

#[test]
fn test_pool_shares_by_intrinsic_state() {
	let mut pool = Pool::new();
	let mut built = 0;
	let glyphs: Vec<_> = "hello"
		.chars()
		.map(|c| {
			pool.intern(c, |&c| {
				built += 1;
				c.to_ascii_uppercase()
			})
		})
		.collect();

	assert_eq!(pool.len(), 4);
	assert_eq!(built, 4);
	assert!(Arc::ptr_eq(&glyphs[2], &glyphs[3]));
	assert_eq!(pool.get(&'h').as_deref(), Some(&'H'));
	assert!(pool.get(&'z').is_none());
}

#[test]
fn test_pool_purge_unused() {
	let mut pool: Pool<u8, String> = Pool::default();
	let kept = pool.intern(1, |n| n.to_string());
	pool.intern(2, |n| n.to_string());

	assert_eq!(pool.purge_unused(), 1);
	assert_eq!(pool.len(), 1);
	assert_eq!(*kept, "1");
}
