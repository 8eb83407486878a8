use std::io::{BufRead, Write};

use anyhow::Context;
use tracing::debug;
use trellis_state::{Machine, TransitionTable};

use crate::cli::StateArgs;
use crate::config::Settings;

pub(super) fn run(args: &StateArgs, settings: &Settings, input: impl BufRead, output: &mut impl Write) -> anyhow::Result<()> {
	let mut machine = build(args, settings)?;
	debug!(initial = %machine.current(), transitions = machine.table().len(), "machine ready");

	for line in input.lines() {
		let line = line?;
		let event = line.trim();
		if event.is_empty() {
			continue;
		}
		let state = machine.fire(&event.to_string())?;
		writeln!(output, "{state}")?;
	}
	Ok(())
}

/// Builds the machine from the config file transitions followed by `--allow`.
///
/// The initial state is `--initial`, else the config's `machine.initial`,
/// else the source state of the first declared transition.
pub(super) fn build(args: &StateArgs, settings: &Settings) -> anyhow::Result<Machine<String, String>> {
	let declared: Vec<_> = settings.machine.transitions.iter().chain(&args.allow).collect();

	let mut table = TransitionTable::new();
	for transition in &declared {
		table.allow(
			transition.from.clone(),
			transition.event.clone(),
			transition.to.clone(),
		)?;
	}

	let initial = args
		.initial
		.clone()
		.or_else(|| settings.machine.initial.clone())
		.or_else(|| declared.first().map(|transition| transition.from.clone()))
		.context("no initial state: pass --initial or declare a transition")?;
	Ok(Machine::new(table, initial))
}
