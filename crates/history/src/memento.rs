use indexmap::IndexMap;
use indexmap::map::Entry;
use trellis_core::{Error, Result};

const LABEL: &str = "checkpoints";

/// A value that can capture and reinstate its own state.
pub trait Originator {
	/// Opaque snapshot type.
	type Memento;

	fn save(&self) -> Self::Memento;

	fn restore(&mut self, memento: &Self::Memento);
}

/// Stores snapshots under labels, in checkpoint order.
#[derive(Debug, Clone)]
pub struct Caretaker<M> {
	snapshots: IndexMap<String, M>,
}

impl<M> Caretaker<M> {
	pub fn new() -> Self {
		Self {
			snapshots: IndexMap::new(),
		}
	}

	/// Saves `originator` under `label`.
	///
	/// Fails with [`Error::DuplicateKey`] if the label is taken.
	pub fn checkpoint<O>(&mut self, label: impl Into<String>, originator: &O) -> Result<()>
	where
		O: Originator<Memento = M>,
	{
		match self.snapshots.entry(label.into()) {
			Entry::Occupied(slot) => Err(Error::duplicate_key(LABEL, slot.key().as_str())),
			Entry::Vacant(slot) => {
				slot.insert(originator.save());
				Ok(())
			}
		}
	}

	/// Reinstates the snapshot stored under `label`.
	///
	/// Fails with [`Error::UnknownKey`] if no such checkpoint exists.
	pub fn restore<O>(&self, label: &str, originator: &mut O) -> Result<()>
	where
		O: Originator<Memento = M>,
	{
		let memento = self
			.snapshots
			.get(label)
			.ok_or_else(|| Error::unknown_key(LABEL, label))?;
		originator.restore(memento);
		Ok(())
	}

	pub fn get(&self, label: &str) -> Option<&M> {
		self.snapshots.get(label)
	}

	/// Checkpoint labels, oldest first.
	pub fn labels(&self) -> impl Iterator<Item = &str> {
		self.snapshots.keys().map(String::as_str)
	}

	/// Removes and returns the snapshot under `label`.
	pub fn discard(&mut self, label: &str) -> Option<M> {
		self.snapshots.shift_remove(label)
	}

	pub fn len(&self) -> usize {
		self.snapshots.len()
	}

	pub fn is_empty(&self) -> bool {
		self.snapshots.is_empty()
	}
}

impl<M> Default for Caretaker<M> {
	fn default() -> Self {
		Self::new()
	}
}
