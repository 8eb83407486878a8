use std::io::{BufRead, Write};

use tracing::debug;
use trellis_chain::{Chain, Outcome, reject_if, transform};

use crate::cli::{ChainArgs, StepKind};

pub(super) fn run(args: &ChainArgs, input: impl BufRead, output: &mut impl Write) -> anyhow::Result<()> {
	let chain = build(&args.steps);
	debug!(steps = ?chain.names().collect::<Vec<_>>(), dispatch = args.dispatch, "chain ready");

	for line in input.lines() {
		let line = line?;
		if args.dispatch {
			let claimed = chain.dispatch(line)?;
			writeln!(output, "claimed by {}: {}", claimed.handler, claimed.value)?;
			continue;
		}
		match chain.run(line) {
			Outcome::Completed(value) => writeln!(output, "{value}")?,
			Outcome::Halted(halted) => writeln!(output, "rejected by {}", halted.handler)?,
		}
	}
	Ok(())
}

pub(super) fn build(steps: &[StepKind]) -> Chain<String> {
	let mut chain = Chain::new("cli");
	for &step in steps {
		let name = step.name();
		match step {
			StepKind::Upper => chain.append(name, transform(|line: String| line.to_uppercase())),
			StepKind::Lower => chain.append(name, transform(|line: String| line.to_lowercase())),
			StepKind::Trim => chain.append(name, transform(|line: String| line.trim().to_string())),
			StepKind::StripPunct => chain.append(
				name,
				transform(|line: String| line.chars().filter(|c| !c.is_ascii_punctuation()).collect()),
			),
			StepKind::RejectEmpty => chain.append(name, reject_if(|line: &String| line.is_empty())),
		};
	}
	chain
}
