/// What a handler does with the value it received.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step<T> {
	/// Pass the value on to the next handler.
	Next(T),
	/// Stop the chain; no later handler runs.
	Halt(T),
}

impl<T> Step<T> {
	/// Returns the carried value.
	pub fn into_inner(self) -> T {
		match self {
			Step::Next(value) | Step::Halt(value) => value,
		}
	}

	/// Returns true for [`Step::Halt`].
	pub fn is_halt(&self) -> bool {
		matches!(self, Step::Halt(_))
	}

	/// Transforms the carried value, keeping the step kind.
	pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Step<U> {
		match self {
			Step::Next(value) => Step::Next(f(value)),
			Step::Halt(value) => Step::Halt(f(value)),
		}
	}
}

/// One link in a [`Chain`](crate::Chain).
///
/// Any `Fn(T) -> Step<T>` closure is a handler.
pub trait Handler<T>: Send + Sync {
	/// Handles `value`, deciding whether the chain continues.
	fn handle(&self, value: T) -> Step<T>;
}

impl<T, F> Handler<T> for F
where
	F: Fn(T) -> Step<T> + Send + Sync,
{
	fn handle(&self, value: T) -> Step<T> {
		self(value)
	}
}

/// Handler that always forwards `value` unchanged.
pub fn forward<T>() -> impl Handler<T> {
	Step::Next
}

/// Handler that applies `f` and forwards the result.
pub fn transform<T, F>(f: F) -> impl Handler<T>
where
	F: Fn(T) -> T + Send + Sync,
{
	move |value: T| Step::Next(f(value))
}

/// Handler that halts when `predicate` holds and forwards otherwise.
pub fn reject_if<T, P>(predicate: P) -> impl Handler<T>
where
	P: Fn(&T) -> bool + Send + Sync,
{
	move |value: T| {
		if predicate(&value) {
			Step::Halt(value)
		} else {
			Step::Next(value)
		}
	}
}
