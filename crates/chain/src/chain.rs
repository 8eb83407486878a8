use std::borrow::Cow;

use trellis_core::{Error, Result};

use crate::handler::{Handler, Step};

/// A named handler owned by its chain.
struct HandlerNode<T> {
	name: Cow<'static, str>,
	handler: Box<dyn Handler<T>>,
}

/// Ordered sequence of handlers.
///
/// Insertion order is execution order. The chain owns its nodes and is
/// traversed front to back; there is no way to form a cycle.
pub struct Chain<T> {
	label: Cow<'static, str>,
	nodes: Vec<HandlerNode<T>>,
}

/// Where and with what value a chain was halted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Halted<T> {
	/// Position of the halting handler.
	pub index: usize,
	/// Name of the halting handler.
	pub handler: Cow<'static, str>,
	/// Value returned by the halting handler.
	pub value: T,
}

/// Result of [`Chain::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
	/// Every handler forwarded; carries the final value.
	Completed(T),
	/// A handler halted the chain.
	Halted(Halted<T>),
}

impl<T> Outcome<T> {
	/// Returns the carried value.
	pub fn value(&self) -> &T {
		match self {
			Outcome::Completed(value) => value,
			Outcome::Halted(halted) => &halted.value,
		}
	}

	/// Consumes the outcome, returning the carried value.
	pub fn into_value(self) -> T {
		match self {
			Outcome::Completed(value) => value,
			Outcome::Halted(halted) => halted.value,
		}
	}

	/// Returns true if a handler halted the chain.
	pub fn is_halted(&self) -> bool {
		matches!(self, Outcome::Halted(_))
	}

	/// Returns the name of the halting handler, if any.
	pub fn halted_by(&self) -> Option<&str> {
		match self {
			Outcome::Completed(_) => None,
			Outcome::Halted(halted) => Some(&*halted.handler),
		}
	}
}

impl<T> Chain<T> {
	/// Creates an empty chain.
	///
	/// The label identifies the chain in [`Error::EmptyChainResult`].
	pub fn new(label: impl Into<Cow<'static, str>>) -> Self {
		Self {
			label: label.into(),
			nodes: Vec::new(),
		}
	}

	/// Returns the chain label.
	pub fn label(&self) -> &str {
		&self.label
	}

	/// Appends a handler at the tail.
	pub fn append<H>(&mut self, name: impl Into<Cow<'static, str>>, handler: H) -> &mut Self
	where
		H: Handler<T> + 'static,
	{
		self.nodes.push(HandlerNode {
			name: name.into(),
			handler: Box::new(handler),
		});
		self
	}

	/// Builder form of [`append`](Self::append).
	pub fn with<H>(mut self, name: impl Into<Cow<'static, str>>, handler: H) -> Self
	where
		H: Handler<T> + 'static,
	{
		self.append(name, handler);
		self
	}

	/// Runs `input` through the handlers until one halts or the chain ends.
	pub fn run(&self, input: T) -> Outcome<T> {
		let mut value = input;
		for (index, node) in self.nodes.iter().enumerate() {
			match node.handler.handle(value) {
				Step::Next(next) => value = next,
				Step::Halt(halted) => {
					return Outcome::Halted(Halted {
						index,
						handler: node.name.clone(),
						value: halted,
					});
				}
			}
		}
		Outcome::Completed(value)
	}

	/// Runs `input` and requires some handler to claim it by halting.
	///
	/// Fails with [`Error::EmptyChainResult`] when every handler forwarded,
	/// which includes the empty chain.
	pub fn dispatch(&self, input: T) -> Result<Halted<T>> {
		match self.run(input) {
			Outcome::Halted(halted) => Ok(halted),
			Outcome::Completed(_) => Err(Error::EmptyChainResult {
				chain: self.label.to_string(),
			}),
		}
	}

	/// Returns the handler names in execution order.
	pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
		self.nodes.iter().map(|node| &*node.name)
	}

	/// Returns the number of handlers.
	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	/// Returns true if the chain has no handlers.
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}
}

impl<T> std::fmt::Debug for Chain<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Chain")
			.field("label", &self.label)
			.field("handlers", &self.names().collect::<Vec<_>>())
			.finish()
	}
}
