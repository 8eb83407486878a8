use crate::decorate::{Decorator, Gate, guard, wrap};
use crate::invoke::Invoke;

type BoxInvoke<I, O> = Box<dyn Invoke<I, Output = O> + Send + Sync>;

/// Layer stack assembled at runtime.
///
/// Same onion semantics as [`wrap`] and [`guard`], with the concrete types
/// erased so that the number and kind of layers can depend on input.
pub struct Stack<I, O> {
	outermost: BoxInvoke<I, O>,
	depth: usize,
}

impl<I: 'static, O: 'static> Stack<I, O> {
	/// Creates a stack around `base` with no layers.
	pub fn new<S>(base: S) -> Self
	where
		S: Invoke<I, Output = O> + Send + Sync + 'static,
	{
		Self {
			outermost: Box::new(base),
			depth: 0,
		}
	}

	/// Adds `decorator` as the new outermost layer.
	pub fn wrap<D>(self, decorator: D) -> Self
	where
		D: Decorator<I, O> + Send + Sync + 'static,
	{
		Self {
			outermost: Box::new(wrap(self.outermost, decorator)),
			depth: self.depth + 1,
		}
	}

	/// Adds `gate` as the new outermost layer.
	pub fn guard<G>(self, gate: G) -> Self
	where
		G: Gate<I, O> + Send + Sync + 'static,
	{
		Self {
			outermost: Box::new(guard(self.outermost, gate)),
			depth: self.depth + 1,
		}
	}

	/// Returns the number of layers around the base.
	pub fn depth(&self) -> usize {
		self.depth
	}
}

impl<I, O> Invoke<I> for Stack<I, O> {
	type Output = O;

	fn invoke(&self, input: I) -> O {
		self.outermost.invoke(input)
	}
}

impl<I, O> std::fmt::Debug for Stack<I, O> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Stack").field("depth", &self.depth).finish()
	}
}
