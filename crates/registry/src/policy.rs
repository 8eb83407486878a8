/// Policy for handling a registration whose key is already taken.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
	/// Fail with [`DuplicateKey`](trellis_core::Error::DuplicateKey).
	#[default]
	Reject,
	/// Keep the first entry registered for a key.
	KeepExisting,
	/// Overwrite with the last entry registered for a key.
	Replace,
}

impl DuplicatePolicy {
	/// Parses the config spelling of a policy (`reject`, `keep-existing`, `replace`).
	pub fn from_name(name: &str) -> Option<Self> {
		match name {
			"reject" => Some(Self::Reject),
			"keep-existing" => Some(Self::KeepExisting),
			"replace" => Some(Self::Replace),
			_ => None,
		}
	}
}

impl std::fmt::Display for DuplicatePolicy {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			DuplicatePolicy::Reject => write!(f, "reject"),
			DuplicatePolicy::KeepExisting => write!(f, "keep-existing"),
			DuplicatePolicy::Replace => write!(f, "replace"),
		}
	}
}

/// Result of a successful registration.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum InsertAction {
	/// Key was new; entry inserted.
	InsertedNew,
	/// Key existed; kept the existing entry (policy chose existing).
	KeptExisting,
	/// Key existed; replaced with the new entry (policy chose new).
	ReplacedExisting,
}
