//! Subcommand drivers.
//!
//! Every driver reads events line by line from `input` and writes results to
//! `output`, so the binary and the tests share one code path.

mod chain;
mod decorate;
mod dispatch;
mod registry;
mod state;


use std::io::{BufRead, Write};

use crate::cli::Command;
use crate::config::Settings;

/// Runs `command` to completion.
pub fn run(command: &Command, settings: &Settings, input: impl BufRead, mut output: impl Write) -> anyhow::Result<()> {
	match command {
		Command::Chain(args) => chain::run(args, input, &mut output)?,
		Command::Registry(args) => registry::run(args, settings, input, &mut output)?,
		Command::Decorate(args) => decorate::run(args, input, &mut output)?,
		Command::Dispatch(args) => dispatch::run(args, input, &mut output)?,
		Command::State(args) => state::run(args, settings, input, &mut output)?,
	}
	output.flush()?;
	Ok(())
}
