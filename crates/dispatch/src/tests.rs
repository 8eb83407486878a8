use std::sync::{Arc, Mutex};

use pretty_assertions::assert_eq;

use super::*;

type Log = Arc<Mutex<Vec<String>>>;

fn logging(log: &Log, name: &'static str) -> impl Fn(&u32) -> Result<(), BoxError> + Send + Sync + 'static {
	let log = Arc::clone(log);
	move |event: &u32| {
		log.lock().unwrap().push(format!("{name}:{event}"));
		Ok(())
	}
}

#[test]
fn test_publish_delivers_in_subscription_order() {
	let log = Log::default();
	let hub = Dispatcher::new();
	hub.subscribe("s1", logging(&log, "s1")).unwrap();
	hub.subscribe("s2", logging(&log, "s2")).unwrap();

	let report = hub.publish(&7);

	assert_eq!(*log.lock().unwrap(), vec!["s1:7", "s2:7"]);
	assert_eq!(report.delivered(), 2);
	assert!(report.is_clean());
}

#[test]
fn test_duplicate_subscriber_is_rejected() {
	let hub = Dispatcher::<u32>::new();
	hub.subscribe("s1", |_: &u32| Ok(())).unwrap();

	let err = hub.subscribe("s1", |_: &u32| Ok(())).unwrap_err();
	assert_eq!(err, Error::DuplicateSubscriber("s1".to_string()));
	assert_eq!(err.kind(), ErrorKind::DuplicateSubscriber);
	assert_eq!(hub.len(), 1);
}

#[test]
fn test_unsubscribe_is_idempotent() {
	let log = Log::default();
	let hub = Dispatcher::new();
	hub.subscribe("s1", logging(&log, "s1")).unwrap();
	hub.subscribe("s2", logging(&log, "s2")).unwrap();

	assert!(hub.unsubscribe("s1"));
	assert!(!hub.unsubscribe("s1"));
	assert!(!hub.unsubscribe("never"));

	hub.publish(&1);
	assert_eq!(*log.lock().unwrap(), vec!["s2:1"]);
	assert!(!hub.contains("s1"));
}

#[test]
fn test_failure_does_not_stop_delivery() {
	let log = Log::default();
	let hub = Dispatcher::new();
	hub.subscribe("first", logging(&log, "first")).unwrap();
	hub.subscribe("broken", |_: &u32| Err(SubscriberError::boxed("disk full")))
		.unwrap();
	hub.subscribe("last", logging(&log, "last")).unwrap();

	let report = hub.publish(&3);

	assert_eq!(*log.lock().unwrap(), vec!["first:3", "last:3"]);
	assert_eq!(report.delivered(), 2);
	assert_eq!(report.attempted(), 3);
	let failures = report.into_failures();
	assert_eq!(failures.len(), 1);
	assert_eq!(failures[0].subscriber.as_str(), "broken");
	assert_eq!(failures[0].error.to_string(), "disk full");
}

#[test]
fn test_subscriber_added_during_publish_waits_for_next_event() {
	let log = Log::default();
	let hub = Arc::new(Dispatcher::<u32>::new());
	{
		let weak = Arc::downgrade(&hub);
		let late = logging(&log, "late");
		let late = Arc::new(late);
		hub.subscribe("recruiter", move |_: &u32| {
			if let Some(hub) = weak.upgrade()
				&& !hub.contains("late")
			{
				let late = Arc::clone(&late);
				hub.subscribe("late", move |event: &u32| late(event))?;
			}
			Ok(())
		})
		.unwrap();
	}

	hub.publish(&1);
	assert!(log.lock().unwrap().is_empty());
	assert!(hub.contains("late"));

	hub.publish(&2);
	assert_eq!(*log.lock().unwrap(), vec!["late:2"]);
}

#[test]
fn test_unsubscribe_during_publish_keeps_in_flight_delivery() {
	let log = Log::default();
	let hub = Arc::new(Dispatcher::<u32>::new());
	{
		let weak = Arc::downgrade(&hub);
		hub.subscribe("remover", move |_: &u32| {
			if let Some(hub) = weak.upgrade() {
				hub.unsubscribe("remover");
				hub.unsubscribe("victim");
			}
			Ok(())
		})
		.unwrap();
	}
	hub.subscribe("victim", logging(&log, "victim")).unwrap();

	let report = hub.publish(&1);
	assert_eq!(report.delivered(), 2);
	assert_eq!(*log.lock().unwrap(), vec!["victim:1"]);
	assert!(hub.is_empty());

	assert_eq!(hub.publish(&2).attempted(), 0);
	assert_eq!(log.lock().unwrap().len(), 1);
}

#[test]
fn test_publish_from_skips_sender() {
	let log = Log::default();
	let room = Dispatcher::new();
	for name in ["alice", "bob", "carol"] {
		room.subscribe(name, logging(&log, name)).unwrap();
	}

	let report = room.publish_from("bob", &9);

	assert_eq!(*log.lock().unwrap(), vec!["alice:9", "carol:9"]);
	assert_eq!(report.delivered(), 2);
}

#[test]
fn test_subscribers_listed_in_order() {
	let hub = Dispatcher::<u32>::new();
	for name in ["c", "a", "b"] {
		hub.subscribe(name, |_: &u32| Ok(())).unwrap();
	}
	hub.unsubscribe("a");
	hub.subscribe("a", |_: &u32| Ok(())).unwrap();

	let ids: Vec<String> = hub.subscribers().iter().map(ToString::to_string).collect();
	assert_eq!(ids, vec!["c", "b", "a"]);
}
