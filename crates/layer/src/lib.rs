//! Decorator composition.
//!
//! A behavior is anything implementing [`Invoke`]. [`wrap`] puts a
//! [`Decorator`] around a behavior: the decorator's `before` sees the input,
//! the wrapped behavior runs, then the decorator's `after` sees the output.
//! Wrapping nests like an onion, so for `wrap(wrap(base, a), b)` the order is
//! `b.before`, `a.before`, `base`, `a.after`, `b.after`.
//!
//! Decorators cannot skip the behavior they wrap. The only layer allowed to
//! answer on its own is a [`Gate`], attached with [`guard`], which either
//! admits the input or denies it with a replacement output.
//!
//! The same wrappers are available as [`tower_layer::Layer`]s
//! ([`DecorateLayer`], [`GuardLayer`]), and [`Stack`] offers a boxed form for
//! stacks assembled at runtime.
//!
//! ```rust
//! use trellis_layer::{Admission, Invoke, guard, invoke_fn, map_output, wrap};
//!
//! let send = invoke_fn(|msg: String| format!("sent: {msg}"));
//! let signed = wrap(send, map_output(|out: String| format!("{out} -- regards")));
//! let filtered = guard(signed, |msg: &String| {
//! 	if msg.contains("buy now") {
//! 		Admission::Deny("blocked".to_string())
//! 	} else {
//! 		Admission::Admit
//! 	}
//! });
//!
//! assert_eq!(filtered.invoke("hello".into()), "sent: hello -- regards");
//! assert_eq!(filtered.invoke("buy now".into()), "blocked");
//! ```

mod decorate;
mod invoke;
mod stack;

pub use decorate::{
	Admission, DecorateLayer, Decorated, Decorator, Gate, GuardLayer, Guarded, MapInput,
	MapOutput, guard, map_input, map_output, wrap,
};
pub use invoke::{Invoke, InvokeFn, invoke_fn};
pub use stack::Stack;
