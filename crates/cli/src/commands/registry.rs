use std::io::{BufRead, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use tracing::debug;
use trellis_registry::{Caching, Registry};

use crate::cli::RegistryArgs;
use crate::config::Settings;

/// Value built by the CLI factories; `serial` counts constructions.
#[derive(Debug)]
pub(super) struct Widget {
	pub key: String,
	pub serial: usize,
}

pub(super) fn run(args: &RegistryArgs, settings: &Settings, input: impl BufRead, output: &mut impl Write) -> anyhow::Result<()> {
	let registry = build(args, settings)?;

	for line in input.lines() {
		let line = line?;
		let widget = registry.resolve(line.trim())?;
		let sharing = if widget.is_shared() { "shared" } else { "fresh" };
		writeln!(output, "{} #{} {sharing}", widget.key, widget.serial)?;
	}
	Ok(())
}

pub(super) fn build(args: &RegistryArgs, settings: &Settings) -> anyhow::Result<Registry<Widget>> {
	let serial = Arc::new(AtomicUsize::new(0));
	let mut registry = Registry::with_policy("cli", settings.registry.duplicates()?);

	let keys = args
		.cached
		.iter()
		.map(|key| (key, Caching::Cached))
		.chain(args.fresh.iter().map(|key| (key, Caching::Fresh)));
	for (key, caching) in keys {
		let action = registry.register(key.as_str(), factory(key, &serial), caching)?;
		debug!(key = %key, ?caching, ?action, "registered");
	}
	Ok(registry)
}

fn factory(key: &str, serial: &Arc<AtomicUsize>) -> impl Fn() -> Widget + Send + Sync + 'static {
	let key = key.to_string();
	let serial = Arc::clone(serial);
	move || Widget {
		key: key.clone(),
		serial: serial.fetch_add(1, Ordering::Relaxed) + 1,
	}
}
