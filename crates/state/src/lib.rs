//! Table-driven finite state machines.
//!
//! A [`TransitionTable`] declares which `(state, event)` pairs are legal and
//! where each one leads. Lookup through [`TransitionTable::transition`] is a
//! pure function of the table. A [`Machine`] pairs a table with exactly one
//! current state and only moves when the table allows it.
//!
//! ```rust
//! use trellis_state::{Machine, TransitionTable};
//!
//! let mut table = TransitionTable::new();
//! table.allow("idle", "coin", "ready").unwrap();
//! table.allow("ready", "push", "idle").unwrap();
//!
//! let mut turnstile = Machine::new(table, "idle");
//! assert!(turnstile.fire(&"push").is_err());
//! assert_eq!(turnstile.fire(&"coin").unwrap(), &"ready");
//! assert_eq!(turnstile.current(), &"ready");
//! ```

mod machine;
mod table;

pub use machine::Machine;
pub use table::TransitionTable;
pub use trellis_core::{Error, ErrorKind, Result};
