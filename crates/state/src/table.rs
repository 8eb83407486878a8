use std::fmt::Debug;
use std::hash::Hash;

use indexmap::IndexMap;
use rustc_hash::{FxBuildHasher, FxHashMap};
use trellis_core::{Error, Result};

const LABEL: &str = "transitions";

/// Declared `(state, event) -> state` triples.
///
/// Events leaving a state are kept in declaration order.
#[derive(Clone)]
pub struct TransitionTable<S, E> {
	edges: FxHashMap<S, IndexMap<E, S, FxBuildHasher>>,
	len: usize,
}

impl<S, E> TransitionTable<S, E>
where
	S: Clone + Eq + Hash + Debug,
	E: Clone + Eq + Hash + Debug,
{
	/// Creates an empty table.
	pub fn new() -> Self {
		Self {
			edges: FxHashMap::default(),
			len: 0,
		}
	}

	/// Declares that `event` moves `from` to `to`.
	///
	/// Re-declaring an identical triple is a no-op. Declaring the same
	/// `(from, event)` pair with a different target fails with
	/// [`Error::DuplicateKey`] and leaves the table unchanged.
	pub fn allow(&mut self, from: S, event: E, to: S) -> Result<&mut Self> {
		let targets = self.edges.entry(from).or_default();
		match targets.get(&event) {
			Some(existing) if *existing == to => {}
			Some(existing) => {
				let key = format!("{event:?} -> {existing:?}");
				return Err(Error::duplicate_key(LABEL, key));
			}
			None => {
				targets.insert(event, to);
				self.len += 1;
			}
		}
		Ok(self)
	}

	/// Builder form of [`allow`](Self::allow).
	pub fn with(mut self, from: S, event: E, to: S) -> Result<Self> {
		self.allow(from, event, to)?;
		Ok(self)
	}

	/// Returns the state `event` leads to from `state`.
	///
	/// Fails with [`Error::IllegalTransition`] if the pair is not declared.
	pub fn transition(&self, state: &S, event: &E) -> Result<S> {
		self.target(state, event)
			.cloned()
			.ok_or_else(|| Error::illegal_transition(state, event))
	}

	/// Returns true if `event` is declared for `state`.
	pub fn allows(&self, state: &S, event: &E) -> bool {
		self.target(state, event).is_some()
	}

	/// Iterates over the events declared for `state`, in declaration order.
	pub fn events(&self, state: &S) -> impl Iterator<Item = &E> {
		self.edges.get(state).into_iter().flat_map(IndexMap::keys)
	}

	/// Returns the number of declared transitions.
	pub fn len(&self) -> usize {
		self.len
	}

	/// Returns true if no transition is declared.
	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	fn target(&self, state: &S, event: &E) -> Option<&S> {
		self.edges.get(state)?.get(event)
	}
}

impl<S, E> Default for TransitionTable<S, E>
where
	S: Clone + Eq + Hash + Debug,
	E: Clone + Eq + Hash + Debug,
{
	fn default() -> Self {
		Self::new()
	}
}

impl<S: Debug, E: Debug> Debug for TransitionTable<S, E> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("TransitionTable")
			.field("edges", &self.edges)
			.finish()
	}
}
