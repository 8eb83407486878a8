use std::fmt::Debug;
use std::hash::Hash;

use trellis_core::Result;

use crate::table::TransitionTable;

/// A current state driven by a [`TransitionTable`].
#[derive(Debug, Clone)]
pub struct Machine<S, E> {
	table: TransitionTable<S, E>,
	current: S,
}

impl<S, E> Machine<S, E>
where
	S: Clone + Eq + Hash + Debug,
	E: Clone + Eq + Hash + Debug,
{
	/// Creates a machine resting in `initial`.
	///
	/// `initial` need not appear in the table; a state with no declared
	/// events is terminal.
	pub fn new(table: TransitionTable<S, E>, initial: S) -> Self {
		Self {
			table,
			current: initial,
		}
	}

	/// Returns the current state.
	pub fn current(&self) -> &S {
		&self.current
	}

	/// Applies `event` and returns the new current state.
	///
	/// On [`Error::IllegalTransition`](trellis_core::Error::IllegalTransition)
	/// the current state is unchanged.
	pub fn fire(&mut self, event: &E) -> Result<&S> {
		self.current = self.table.transition(&self.current, event)?;
		Ok(&self.current)
	}

	/// Returns true if `event` is legal in the current state.
	pub fn can_fire(&self, event: &E) -> bool {
		self.table.allows(&self.current, event)
	}

	/// Events legal in the current state, in declaration order.
	pub fn events(&self) -> Vec<&E> {
		self.table.events(&self.current).collect()
	}

	pub fn table(&self) -> &TransitionTable<S, E> {
		&self.table
	}

	/// Consumes the machine, returning its table and current state.
	pub fn into_parts(self) -> (TransitionTable<S, E>, S) {
		(self.table, self.current)
	}
}
