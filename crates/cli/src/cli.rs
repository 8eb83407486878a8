use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "trellis")]
#[command(about = "Drive registries, chains, layers, dispatchers and state machines from stdin")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Configuration file (defaults to the user config directory)
	#[arg(long, short = 'c', value_name = "PATH", global = true)]
	pub config: Option<PathBuf>,

	/// Verbose logging
	#[arg(long, short, global = true)]
	pub verbose: bool,

	/// Component to exercise.
	#[command(subcommand)]
	pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
	/// Run each line through a handler chain
	Chain(ChainArgs),
	/// Resolve each line as a registry key
	Registry(RegistryArgs),
	/// Run each line through a layer stack
	Decorate(DecorateArgs),
	/// Publish each line to a set of subscribers
	Dispatch(DispatchArgs),
	/// Fire each line as a state machine event
	State(StateArgs),
}

#[derive(Args, Debug)]
pub struct ChainArgs {
	/// Handlers, in the order they see each line
	#[arg(long = "step", value_enum, num_args = 1.., required = true)]
	pub steps: Vec<StepKind>,

	/// Require some handler to claim each line
	#[arg(long)]
	pub dispatch: bool,
}

/// Built-in chain handlers.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepKind {
	Upper,
	Lower,
	Trim,
	/// Drop ASCII punctuation
	StripPunct,
	/// Halt on lines that are empty after previous steps
	RejectEmpty,
}

impl StepKind {
	/// Handler name as shown in output.
	pub fn name(self) -> &'static str {
		match self {
			Self::Upper => "upper",
			Self::Lower => "lower",
			Self::Trim => "trim",
			Self::StripPunct => "strip-punct",
			Self::RejectEmpty => "reject-empty",
		}
	}
}

#[derive(Args, Debug)]
pub struct RegistryArgs {
	/// Keys whose instance is built once and shared
	#[arg(long, value_name = "KEY", num_args = 1..)]
	pub cached: Vec<String>,

	/// Keys that build a new instance on every resolve
	#[arg(long, value_name = "KEY", num_args = 1..)]
	pub fresh: Vec<String>,
}

#[derive(Args, Debug)]
pub struct DecorateArgs {
	/// Layers, innermost first
	#[arg(long = "layer", value_enum, num_args = 1..)]
	pub layers: Vec<LayerKind>,

	/// Block lines containing this word (case-insensitive)
	#[arg(long, value_name = "WORD")]
	pub deny: Option<String>,
}

/// Built-in decorators.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayerKind {
	Trim,
	Upper,
	Lower,
	/// Surround with `[` and `]`
	Brackets,
	/// Surround with double quotes
	Quote,
}

#[derive(Args, Debug)]
pub struct DispatchArgs {
	/// Subscriber identities, in delivery order
	#[arg(long = "subscriber", value_name = "ID", num_args = 1.., required = true)]
	pub subscribers: Vec<String>,

	/// Subscribers whose callback fails
	#[arg(long, value_name = "ID", num_args = 1..)]
	pub failing: Vec<String>,
}

#[derive(Args, Debug)]
pub struct StateArgs {
	/// Initial state (overrides the config file)
	#[arg(long, value_name = "STATE")]
	pub initial: Option<String>,

	/// Extra transition, written `from:event:to`
	#[arg(long, value_name = "FROM:EVENT:TO", value_parser = parse_transition)]
	pub allow: Vec<Transition>,
}

/// One `from:event:to` triple.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
pub struct Transition {
	pub from: String,
	pub event: String,
	pub to: String,
}

fn parse_transition(raw: &str) -> Result<Transition, String> {
	let parts: Vec<&str> = raw.split(':').collect();
	match parts.as_slice() {
		[from, event, to] if [from, event, to].iter().all(|part| !part.trim().is_empty()) => Ok(Transition {
			from: from.trim().to_string(),
			event: event.trim().to_string(),
			to: to.trim().to_string(),
		}),
		_ => Err(format!("expected FROM:EVENT:TO, got {raw:?}")),
	}
}
