//! Undoable commands and labelled snapshots.
//!
//! [`History`] runs [`Command`]s against a receiver and keeps them on
//! undo/redo stacks. [`Caretaker`] stores opaque snapshots taken from an
//! [`Originator`] under caller-chosen labels, without inspecting them.

mod command;
mod memento;

pub use command::{Command, FnCommand, History, command};
pub use memento::{Caretaker, Originator};
pub use trellis_core::{Error, ErrorKind, Result};
