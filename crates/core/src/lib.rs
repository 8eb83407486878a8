//! Shared infrastructure for the trellis toolkit.
//!
//! Every component crate reports failures through the same taxonomy:
//! - [`Error`]: typed, recoverable failure with context
//! - [`ErrorKind`]: fieldless discriminant of an [`Error`], for matching and display
//! - [`Result`]: alias defaulting the error type to [`Error`]

mod error;

pub use error::{Error, ErrorKind, Result};
