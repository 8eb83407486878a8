//! Publish/subscribe hub.
//!
//! A [`Dispatcher`] delivers events to its subscribers synchronously, in
//! subscription order. Delivery is failure tolerant: a callback returning an
//! error does not stop the remaining deliveries, and every failure is
//! collected in the [`PublishReport`].
//!
//! The subscriber set is snapshotted when a publish starts and the lock is
//! released before any callback runs, so callbacks may subscribe or
//! unsubscribe (themselves included) while an event is in flight. Such
//! changes take effect from the next publish.
//!
//! ```rust
//! use trellis_dispatch::Dispatcher;
//!
//! let room = Dispatcher::<String>::new();
//! room.subscribe("alice", |msg: &String| {
//! 	assert_eq!(msg, "hi");
//! 	Ok(())
//! })
//! .unwrap();
//! room.subscribe("bob", |_: &String| Ok(())).unwrap();
//!
//! // Mediator style: the sender does not hear its own message.
//! let report = room.publish_from("bob", &"hi".to_string());
//! assert_eq!(report.delivered(), 1);
//! ```

mod dispatcher;
mod report;

pub use dispatcher::{Dispatcher, SubscriberId};
pub use report::{BoxError, DeliveryFailure, PublishReport, SubscriberError};
pub use trellis_core::{Error, ErrorKind, Result};

#[cfg(test)]
mod tests;
