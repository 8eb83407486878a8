//! `trellis` binary.
//!
//! Exit codes: 0 on success, 1 when a command fails, 2 on usage errors
//! (reported by clap).

mod cli;
mod commands;
mod config;

use std::io;
use std::process::ExitCode;

use clap::Parser;
use cli::Cli;
use config::Settings;
use tracing::debug;

fn main() -> ExitCode {
	let cli = Cli::parse();
	match run(&cli) {
		Ok(()) => ExitCode::SUCCESS,
		Err(err) => {
			eprintln!("{}", diagnostic(&err));
			ExitCode::FAILURE
		}
	}
}

fn run(cli: &Cli) -> anyhow::Result<()> {
	let settings = Settings::load(cli.config.as_deref())?;
	setup_tracing(cli.verbose, settings.log.filter.as_deref());
	debug!(command = ?cli.command, "starting");

	commands::run(&cli.command, &settings, io::stdin().lock(), io::stdout().lock())
}

/// Renders `err` for stderr, tagging toolkit errors with their kind.
fn diagnostic(err: &anyhow::Error) -> String {
	match err.downcast_ref::<trellis_core::Error>() {
		Some(declared) => format!("error[{}]: {declared}", declared.kind()),
		None => format!("error: {err:#}"),
	}
}

/// Picks the log filter: `RUST_LOG`, then `--verbose`, then the config file,
/// then `warn`.
fn filter_directives(env: Option<&str>, verbose: bool, configured: Option<&str>) -> String {
	match (env, verbose, configured) {
		(Some(env), _, _) if !env.trim().is_empty() => env.to_string(),
		(_, true, _) => "debug".to_string(),
		(_, _, Some(configured)) => configured.to_string(),
		_ => "warn".to_string(),
	}
}

fn setup_tracing(verbose: bool, configured: Option<&str>) {
	use tracing_subscriber::EnvFilter;

	let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
	let filter = EnvFilter::new(filter_directives(env.as_deref(), verbose, configured));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(io::stderr)
		.with_target(false)
		.init();
}
