/// A callable behavior: the base of a layer stack or any wrapped level of it.
pub trait Invoke<I> {
	/// What the behavior returns.
	type Output;

	/// Runs the behavior.
	fn invoke(&self, input: I) -> Self::Output;
}

/// Adapter turning a closure into an [`Invoke`] behavior.
#[derive(Clone, Copy, Debug)]
pub struct InvokeFn<F>(F);

/// Wraps `f` as a behavior.
pub fn invoke_fn<I, O, F>(f: F) -> InvokeFn<F>
where
	F: Fn(I) -> O,
{
	InvokeFn(f)
}

impl<I, O, F> Invoke<I> for InvokeFn<F>
where
	F: Fn(I) -> O,
{
	type Output = O;

	fn invoke(&self, input: I) -> O {
		(self.0)(input)
	}
}

impl<I, S: Invoke<I> + ?Sized> Invoke<I> for Box<S> {
	type Output = S::Output;

	fn invoke(&self, input: I) -> Self::Output {
		(**self).invoke(input)
	}
}

impl<I, S: Invoke<I> + ?Sized> Invoke<I> for std::sync::Arc<S> {
	type Output = S::Output;

	fn invoke(&self, input: I) -> Self::Output {
		(**self).invoke(input)
	}
}
