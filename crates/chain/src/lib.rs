//! Chain of handlers.
//!
//! A [`Chain`] runs a value through its handlers in insertion order. Each
//! handler returns a [`Step`]: [`Step::Next`] forwards a (possibly
//! transformed) value to the next handler, [`Step::Halt`] stops the chain.
//!
//! Two ways to run a chain:
//!
//! - [`Chain::run`] treats the chain as a pipeline. Exhausting it is the
//!   normal case and yields [`Outcome::Completed`]; a halt yields
//!   [`Outcome::Halted`]. An empty chain completes with its input unchanged.
//! - [`Chain::dispatch`] treats the chain as a chain of responsibility. Some
//!   handler must halt to claim the request; otherwise the call fails with
//!   [`Error::EmptyChainResult`].
//!
//! ```rust
//! use trellis_chain::{Chain, Outcome, reject_if, transform};
//!
//! let chain = Chain::new("clean")
//! 	.with("upper", transform(|s: String| s.to_uppercase()))
//! 	.with("trim", transform(|s: String| s.trim().to_string()))
//! 	.with("reject-empty", reject_if(|s: &String| s.is_empty()));
//!
//! assert_eq!(chain.run("  hi  ".to_string()), Outcome::Completed("HI".to_string()));
//! assert_eq!(chain.run("   ".to_string()).halted_by(), Some("reject-empty"));
//! ```

mod chain;
mod handler;

pub use chain::{Chain, Halted, Outcome};
pub use handler::{Handler, Step, forward, reject_if, transform};
pub use trellis_core::{Error, ErrorKind, Result};

#[cfg(test)]
mod tests;
