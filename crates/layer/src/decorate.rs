use tower_layer::Layer;

use crate::invoke::Invoke;

/// Augmenting layer run around a wrapped behavior.
///
/// Both hooks default to the identity. A decorator has no way to skip the
/// behavior it wraps; use a [`Gate`] for that.
pub trait Decorator<I, O> {
	/// Sees (and may rewrite) the input before it reaches the wrapped behavior.
	fn before(&self, input: I) -> I {
		input
	}

	/// Sees (and may rewrite) the output after the wrapped behavior returns.
	fn after(&self, output: O) -> O {
		output
	}
}

/// Verdict of a [`Gate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission<O> {
	/// Delegate to the wrapped behavior.
	Admit,
	/// Answer with this output; the wrapped behavior does not run.
	Deny(O),
}

/// Terminal layer that may refuse to delegate.
///
/// Any `Fn(&I) -> Admission<O>` closure is a gate.
pub trait Gate<I, O> {
	/// Decides whether `input` reaches the wrapped behavior.
	fn admit(&self, input: &I) -> Admission<O>;
}

impl<I, O, F> Gate<I, O> for F
where
	F: Fn(&I) -> Admission<O>,
{
	fn admit(&self, input: &I) -> Admission<O> {
		self(input)
	}
}

/// A behavior wrapped by a [`Decorator`].
#[derive(Clone, Debug)]
pub struct Decorated<D, S> {
	decorator: D,
	inner: S,
}

impl<D, S> Decorated<D, S> {
	/// Returns the wrapped behavior.
	pub fn inner(&self) -> &S {
		&self.inner
	}

	/// Unwraps into the decorator and the wrapped behavior.
	pub fn into_parts(self) -> (D, S) {
		(self.decorator, self.inner)
	}
}

impl<I, D, S> Invoke<I> for Decorated<D, S>
where
	S: Invoke<I>,
	D: Decorator<I, S::Output>,
{
	type Output = S::Output;

	fn invoke(&self, input: I) -> Self::Output {
		let input = self.decorator.before(input);
		let output = self.inner.invoke(input);
		self.decorator.after(output)
	}
}

/// A behavior behind a [`Gate`].
#[derive(Clone, Debug)]
pub struct Guarded<G, S> {
	gate: G,
	inner: S,
}

impl<G, S> Guarded<G, S> {
	/// Returns the guarded behavior.
	pub fn inner(&self) -> &S {
		&self.inner
	}
}

impl<I, G, S> Invoke<I> for Guarded<G, S>
where
	S: Invoke<I>,
	G: Gate<I, S::Output>,
{
	type Output = S::Output;

	fn invoke(&self, input: I) -> Self::Output {
		match self.gate.admit(&input) {
			Admission::Admit => self.inner.invoke(input),
			Admission::Deny(output) => output,
		}
	}
}

/// Wraps `base` with `decorator`, which becomes the new outermost layer.
pub fn wrap<S, D>(base: S, decorator: D) -> Decorated<D, S> {
	Decorated {
		decorator,
		inner: base,
	}
}

/// Puts `base` behind `gate`, which becomes the new outermost layer.
pub fn guard<S, G>(base: S, gate: G) -> Guarded<G, S> {
	Guarded { gate, inner: base }
}

/// Decorator rewriting only the input.
#[derive(Clone, Copy, Debug)]
pub struct MapInput<F>(F);

/// Builds a decorator that rewrites the input with `f`.
pub fn map_input<I, F>(f: F) -> MapInput<F>
where
	F: Fn(I) -> I,
{
	MapInput(f)
}

impl<I, O, F> Decorator<I, O> for MapInput<F>
where
	F: Fn(I) -> I,
{
	fn before(&self, input: I) -> I {
		(self.0)(input)
	}
}

/// Decorator rewriting only the output.
#[derive(Clone, Copy, Debug)]
pub struct MapOutput<F>(F);

/// Builds a decorator that rewrites the output with `f`.
pub fn map_output<O, F>(f: F) -> MapOutput<F>
where
	F: Fn(O) -> O,
{
	MapOutput(f)
}

impl<I, O, F> Decorator<I, O> for MapOutput<F>
where
	F: Fn(O) -> O,
{
	fn after(&self, output: O) -> O {
		(self.0)(output)
	}
}

/// [`Layer`] that wraps services with a clone of its decorator.
#[derive(Clone, Debug)]
pub struct DecorateLayer<D> {
	decorator: D,
}

impl<D> DecorateLayer<D> {
	/// Creates a layer applying `decorator`.
	pub fn new(decorator: D) -> Self {
		Self { decorator }
	}
}

impl<S, D: Clone> Layer<S> for DecorateLayer<D> {
	type Service = Decorated<D, S>;

	fn layer(&self, inner: S) -> Self::Service {
		wrap(inner, self.decorator.clone())
	}
}

/// [`Layer`] that puts services behind a clone of its gate.
#[derive(Clone, Debug)]
pub struct GuardLayer<G> {
	gate: G,
}

impl<G> GuardLayer<G> {
	/// Creates a layer applying `gate`.
	pub fn new(gate: G) -> Self {
		Self { gate }
	}
}

impl<S, G: Clone> Layer<S> for GuardLayer<G> {
	type Service = Guarded<G, S>;

	fn layer(&self, inner: S) -> Self::Service {
		guard(inner, self.gate.clone())
	}
}
