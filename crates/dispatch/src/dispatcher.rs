use std::borrow::Borrow;
use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::Mutex;
use trellis_core::{Error, Result};

use crate::report::{BoxError, PublishReport};

type Callback<E> = dyn Fn(&E) -> Result<(), BoxError> + Send + Sync;

/// Identity of a subscription.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriberId(Arc<str>);

impl SubscriberId {
	/// Returns the identity as a string slice.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl Borrow<str> for SubscriberId {
	fn borrow(&self) -> &str {
		&self.0
	}
}

impl From<&str> for SubscriberId {
	fn from(id: &str) -> Self {
		Self(Arc::from(id))
	}
}

impl From<String> for SubscriberId {
	fn from(id: String) -> Self {
		Self(Arc::from(id))
	}
}

impl std::fmt::Display for SubscriberId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.0)
	}
}

/// Publish/subscribe hub for events of type `E`.
pub struct Dispatcher<E> {
	subscribers: Mutex<IndexMap<SubscriberId, Arc<Callback<E>>>>,
}

impl<E> Dispatcher<E> {
	/// Creates a dispatcher with no subscribers.
	pub fn new() -> Self {
		Self {
			subscribers: Mutex::new(IndexMap::new()),
		}
	}

	/// Adds a subscriber at the end of the delivery order.
	///
	/// Fails with [`Error::DuplicateSubscriber`] if `id` is already subscribed.
	pub fn subscribe<F>(&self, id: impl Into<SubscriberId>, callback: F) -> Result<()>
	where
		F: Fn(&E) -> Result<(), BoxError> + Send + Sync + 'static,
	{
		let id = id.into();
		let mut subscribers = self.subscribers.lock();
		if subscribers.contains_key(&id) {
			return Err(Error::DuplicateSubscriber(id.to_string()));
		}
		subscribers.insert(id, Arc::new(callback));
		Ok(())
	}

	/// Removes the subscriber `id`.
	///
	/// Idempotent: returns false if `id` was not subscribed.
	pub fn unsubscribe(&self, id: &str) -> bool {
		self.subscribers.lock().shift_remove(id).is_some()
	}

	/// Delivers `event` to every subscriber, in subscription order.
	pub fn publish(&self, event: &E) -> PublishReport {
		self.deliver(event, None)
	}

	/// Delivers `event` to every subscriber except `sender`.
	pub fn publish_from(&self, sender: &str, event: &E) -> PublishReport {
		self.deliver(event, Some(sender))
	}

	/// Returns true if `id` is subscribed.
	pub fn contains(&self, id: &str) -> bool {
		self.subscribers.lock().contains_key(id)
	}

	/// Returns the subscriber identities in delivery order.
	pub fn subscribers(&self) -> Vec<SubscriberId> {
		self.subscribers.lock().keys().cloned().collect()
	}

	/// Returns the number of subscribers.
	pub fn len(&self) -> usize {
		self.subscribers.lock().len()
	}

	/// Returns true if nobody is subscribed.
	pub fn is_empty(&self) -> bool {
		self.subscribers.lock().is_empty()
	}

	fn deliver(&self, event: &E, skip: Option<&str>) -> PublishReport {
		let snapshot: Vec<_> = self
			.subscribers
			.lock()
			.iter()
			.filter(|(id, _)| skip != Some(id.as_str()))
			.map(|(id, callback)| (id.clone(), Arc::clone(callback)))
			.collect();

		let mut report = PublishReport::default();
		for (id, callback) in &snapshot {
			report.record(id, callback(event));
		}
		report
	}
}

impl<E> Default for Dispatcher<E> {
	fn default() -> Self {
		Self::new()
	}
}

impl<E> std::fmt::Debug for Dispatcher<E> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Dispatcher")
			.field("subscribers", &self.subscribers())
			.finish()
	}
}
