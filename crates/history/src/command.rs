use std::borrow::Cow;
use std::collections::VecDeque;

/// An operation on a receiver `R` that knows how to reverse itself.
///
/// `undo` is only called after a matching `execute`, and `execute` is called
/// again on redo. Implementations may record whatever they need during
/// `execute` to make `undo` exact.
pub trait Command<R> {
	fn execute(&mut self, receiver: &mut R);

	fn undo(&mut self, receiver: &mut R);

	/// Human-readable name, used for listings.
	fn label(&self) -> Cow<'_, str> {
		Cow::Borrowed(std::any::type_name::<Self>())
	}
}

/// A [`Command`] built from a pair of closures.
pub struct FnCommand<F, U> {
	label: Cow<'static, str>,
	execute: F,
	undo: U,
}

/// Builds a [`Command`] from `execute` and `undo` closures.
pub fn command<R, F, U>(label: impl Into<Cow<'static, str>>, execute: F, undo: U) -> FnCommand<F, U>
where
	F: FnMut(&mut R),
	U: FnMut(&mut R),
{
	FnCommand {
		label: label.into(),
		execute,
		undo,
	}
}

impl<R, F, U> Command<R> for FnCommand<F, U>
where
	F: FnMut(&mut R),
	U: FnMut(&mut R),
{
	fn execute(&mut self, receiver: &mut R) {
		(self.execute)(receiver)
	}

	fn undo(&mut self, receiver: &mut R) {
		(self.undo)(receiver)
	}

	fn label(&self) -> Cow<'_, str> {
		Cow::Borrowed(&self.label)
	}
}

/// Undo/redo stacks of executed commands.
///
/// Executing a new command clears the redo stack. With a limit set, the
/// oldest undo entries are dropped once the stack grows past it.
pub struct History<R> {
	undo_stack: VecDeque<Box<dyn Command<R>>>,
	redo_stack: Vec<Box<dyn Command<R>>>,
	limit: Option<usize>,
}

impl<R> History<R> {
	/// Creates an unbounded history.
	pub fn new() -> Self {
		Self {
			undo_stack: VecDeque::new(),
			redo_stack: Vec::new(),
			limit: None,
		}
	}

	/// Creates a history that keeps at most `limit` undo entries.
	pub fn with_limit(limit: usize) -> Self {
		Self {
			limit: Some(limit),
			..Self::new()
		}
	}

	/// Returns the undo limit, if any.
	pub fn limit(&self) -> Option<usize> {
		self.limit
	}

	/// Runs `command` against `receiver` and records it for undo.
	pub fn execute(&mut self, receiver: &mut R, command: impl Command<R> + 'static) {
		let mut command: Box<dyn Command<R>> = Box::new(command);
		command.execute(receiver);
		self.undo_stack.push_back(command);
		self.redo_stack.clear();
		self.enforce_limit();
	}

	/// Reverses the most recent command.
	///
	/// Returns false if there is nothing to undo.
	pub fn undo(&mut self, receiver: &mut R) -> bool {
		let Some(mut command) = self.undo_stack.pop_back() else {
			return false;
		};
		command.undo(receiver);
		self.redo_stack.push(command);
		true
	}

	/// Re-applies the most recently undone command.
	///
	/// Returns false if there is nothing to redo.
	pub fn redo(&mut self, receiver: &mut R) -> bool {
		let Some(mut command) = self.redo_stack.pop() else {
			return false;
		};
		command.execute(receiver);
		self.undo_stack.push_back(command);
		self.enforce_limit();
		true
	}

	pub fn can_undo(&self) -> bool {
		!self.undo_stack.is_empty()
	}

	pub fn can_redo(&self) -> bool {
		!self.redo_stack.is_empty()
	}

	pub fn undo_len(&self) -> usize {
		self.undo_stack.len()
	}

	pub fn redo_len(&self) -> usize {
		self.redo_stack.len()
	}

	/// Labels on the undo stack, oldest first.
	pub fn undo_labels(&self) -> Vec<String> {
		self.undo_stack.iter().map(|command| command.label().into_owned()).collect()
	}

	/// Forgets every recorded command without touching the receiver.
	pub fn clear(&mut self) {
		self.undo_stack.clear();
		self.redo_stack.clear();
	}

	fn enforce_limit(&mut self) {
		if let Some(limit) = self.limit {
			while self.undo_stack.len() > limit {
				self.undo_stack.pop_front();
			}
		}
	}
}

impl<R> Default for History<R> {
	fn default() -> Self {
		Self::new()
	}
}

impl<R> std::fmt::Debug for History<R> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("History")
			.field("undo", &self.undo_labels())
			.field("redo_len", &self.redo_stack.len())
			.field("limit", &self.limit)
			.finish()
	}
}
