use std::io::{BufRead, Write};
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, warn};
use trellis_dispatch::{Dispatcher, SubscriberError};

use crate::cli::DispatchArgs;

type Deliveries = Arc<Mutex<Vec<String>>>;

pub(super) fn run(args: &DispatchArgs, input: impl BufRead, output: &mut impl Write) -> anyhow::Result<()> {
	let deliveries = Deliveries::default();
	let hub = build(args, &deliveries)?;

	for line in input.lines() {
		let line = line?;
		let report = hub.publish(&line);

		let delivered = std::mem::take(&mut *deliveries.lock());
		for delivery in delivered {
			writeln!(output, "{delivery}")?;
		}
		for failure in report.failures() {
			warn!(subscriber = %failure.subscriber, error = %failure.error, "delivery failed");
		}
		debug!(delivered = report.delivered(), attempted = report.attempted(), "published");
	}
	Ok(())
}

pub(super) fn build(args: &DispatchArgs, deliveries: &Deliveries) -> anyhow::Result<Dispatcher<String>> {
	let hub = Dispatcher::new();
	for id in &args.subscribers {
		let failing = args.failing.contains(id);
		let name = id.clone();
		let deliveries = Arc::clone(deliveries);
		hub.subscribe(id.as_str(), move |event: &String| {
			if failing {
				return Err(SubscriberError::boxed(format!("{name} refused {event:?}")));
			}
			deliveries.lock().push(format!("{name} <- {event}"));
			Ok(())
		})?;
	}

	for id in args.failing.iter().filter(|id| !hub.contains(id)) {
		warn!(subscriber = %id, "ignoring --failing for an unknown subscriber");
	}
	Ok(hub)
}
