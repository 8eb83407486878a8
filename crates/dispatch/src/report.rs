use thiserror::Error;

use crate::dispatcher::SubscriberId;

/// Error type returned by subscriber callbacks.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A plain-message subscriber failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct SubscriberError(pub String);

impl SubscriberError {
	/// Boxes a message as a callback error.
	pub fn boxed(message: impl Into<String>) -> BoxError {
		Box::new(Self(message.into()))
	}
}

/// One failed delivery.
#[derive(Debug)]
pub struct DeliveryFailure {
	/// Subscriber whose callback failed.
	pub subscriber: SubscriberId,
	/// Error returned by the callback.
	pub error: BoxError,
}

/// Outcome of one publish call.
#[derive(Debug, Default)]
pub struct PublishReport {
	delivered: usize,
	failures: Vec<DeliveryFailure>,
}

impl PublishReport {
	pub(crate) fn record(&mut self, subscriber: &SubscriberId, result: Result<(), BoxError>) {
		match result {
			Ok(()) => self.delivered += 1,
			Err(error) => self.failures.push(DeliveryFailure {
				subscriber: subscriber.clone(),
				error,
			}),
		}
	}

	/// Number of callbacks that returned `Ok`.
	pub fn delivered(&self) -> usize {
		self.delivered
	}

	/// Number of callbacks invoked, successful or not.
	pub fn attempted(&self) -> usize {
		self.delivered + self.failures.len()
	}

	/// Failed deliveries in delivery order.
	pub fn failures(&self) -> &[DeliveryFailure] {
		&self.failures
	}

	/// Consumes the report, returning the failures.
	pub fn into_failures(self) -> Vec<DeliveryFailure> {
		self.failures
	}

	/// Returns true if every callback succeeded.
	pub fn is_clean(&self) -> bool {
		self.failures.is_empty()
	}
}
