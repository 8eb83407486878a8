use thiserror::Error;

/// Result alias used across the toolkit.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors produced by toolkit operations.
///
/// All variants are recoverable by the caller. Operations fail fast and
/// never substitute a silent default.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
	/// No entry is registered under the key.
	#[error("unknown key in {registry}: {key:?}")]
	UnknownKey {
		/// Label of the collection that was searched.
		registry: String,
		/// The missing key.
		key: String,
	},
	/// The key is already taken and overwrite was not requested.
	#[error("duplicate key in {registry}: {key:?}")]
	DuplicateKey {
		/// Label of the collection that rejected the key.
		registry: String,
		/// The conflicting key.
		key: String,
	},
	/// The entry declares no copy contract.
	#[error("entry {key:?} in {registry} declares no copy contract")]
	NotCloneable {
		/// Label of the registry holding the entry.
		registry: String,
		/// Key of the entry.
		key: String,
	},
	/// A subscriber with the same identity is already subscribed.
	#[error("subscriber {0:?} is already subscribed")]
	DuplicateSubscriber(String),
	/// The transition table has no entry for the `(state, event)` pair.
	#[error("illegal transition: event {event} in state {state}")]
	IllegalTransition {
		/// Debug rendering of the current state.
		state: String,
		/// Debug rendering of the rejected event.
		event: String,
	},
	/// No handler in the chain claimed the request.
	#[error("no handler in chain {chain:?} claimed the request")]
	EmptyChainResult {
		/// Label of the chain.
		chain: String,
	},
}

impl Error {
	/// Builds an [`Error::UnknownKey`].
	pub fn unknown_key(registry: impl Into<String>, key: impl Into<String>) -> Self {
		Self::UnknownKey {
			registry: registry.into(),
			key: key.into(),
		}
	}

	/// Builds an [`Error::DuplicateKey`].
	pub fn duplicate_key(registry: impl Into<String>, key: impl Into<String>) -> Self {
		Self::DuplicateKey {
			registry: registry.into(),
			key: key.into(),
		}
	}

	/// Builds an [`Error::NotCloneable`].
	pub fn not_cloneable(registry: impl Into<String>, key: impl Into<String>) -> Self {
		Self::NotCloneable {
			registry: registry.into(),
			key: key.into(),
		}
	}

	/// Builds an [`Error::IllegalTransition`] from the debug renderings of its parts.
	pub fn illegal_transition(state: &impl std::fmt::Debug, event: &impl std::fmt::Debug) -> Self {
		Self::IllegalTransition {
			state: format!("{state:?}"),
			event: format!("{event:?}"),
		}
	}

	/// Returns the fieldless kind of this error.
	pub fn kind(&self) -> ErrorKind {
		match self {
			Self::UnknownKey { .. } => ErrorKind::UnknownKey,
			Self::DuplicateKey { .. } => ErrorKind::DuplicateKey,
			Self::NotCloneable { .. } => ErrorKind::NotCloneable,
			Self::DuplicateSubscriber(_) => ErrorKind::DuplicateSubscriber,
			Self::IllegalTransition { .. } => ErrorKind::IllegalTransition,
			Self::EmptyChainResult { .. } => ErrorKind::EmptyChainResult,
		}
	}
}

/// Discriminant of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
	UnknownKey,
	DuplicateKey,
	NotCloneable,
	DuplicateSubscriber,
	IllegalTransition,
	EmptyChainResult,
}

impl ErrorKind {
	/// Returns the kind's name as it appears in diagnostics.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::UnknownKey => "UnknownKey",
			Self::DuplicateKey => "DuplicateKey",
			Self::NotCloneable => "NotCloneable",
			Self::DuplicateSubscriber => "DuplicateSubscriber",
			Self::IllegalTransition => "IllegalTransition",
			Self::EmptyChainResult => "EmptyChainResult",
		}
	}
}

impl std::fmt::Display for ErrorKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}
