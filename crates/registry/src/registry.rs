use indexmap::IndexMap;
use indexmap::map::Entry as Slot;
use rustc_hash::FxBuildHasher;
use trellis_core::{Error, Result};

use crate::entry::{Caching, Entry, Instance};
use crate::policy::{DuplicatePolicy, InsertAction};
use crate::prototype::Prototype;

/// Keyed collection of factories.
///
/// Keys are unique. What happens when a key is registered twice is decided by
/// the registry's [`DuplicatePolicy`]; [`Registry::replace`] always
/// overwrites. Iteration order is registration order.
pub struct Registry<T> {
	label: String,
	policy: DuplicatePolicy,
	entries: IndexMap<String, Entry<T>, FxBuildHasher>,
}

impl<T> Registry<T> {
	/// Creates an empty registry that rejects duplicate keys.
	///
	/// The label identifies the registry in error messages.
	pub fn new(label: impl Into<String>) -> Self {
		Self::with_policy(label, DuplicatePolicy::default())
	}

	/// Creates an empty registry with a custom duplicate policy.
	pub fn with_policy(label: impl Into<String>, policy: DuplicatePolicy) -> Self {
		Self {
			label: label.into(),
			policy,
			entries: IndexMap::with_hasher(FxBuildHasher),
		}
	}

	/// Returns the registry label.
	pub fn label(&self) -> &str {
		&self.label
	}

	/// Returns the duplicate policy applied by [`register`](Self::register).
	pub fn policy(&self) -> DuplicatePolicy {
		self.policy
	}

	/// Registers a factory under `key`.
	///
	/// With the default policy an existing key fails with
	/// [`Error::DuplicateKey`].
	pub fn register<F>(&mut self, key: impl Into<String>, factory: F, caching: Caching) -> Result<InsertAction>
	where
		F: Fn() -> T + Send + Sync + 'static,
	{
		self.register_entry(key, Entry::new(factory, caching))
	}

	/// Registers a factory whose values can be copied through [`Prototype`].
	pub fn register_prototype<F>(
		&mut self,
		key: impl Into<String>,
		factory: F,
		caching: Caching,
	) -> Result<InsertAction>
	where
		T: Prototype + 'static,
		F: Fn() -> T + Send + Sync + 'static,
	{
		self.register_entry(key, Entry::prototype(factory, caching))
	}

	/// Registers a prepared [`Entry`], applying the duplicate policy.
	pub fn register_entry(&mut self, key: impl Into<String>, entry: Entry<T>) -> Result<InsertAction> {
		match self.entries.entry(key.into()) {
			Slot::Vacant(slot) => {
				slot.insert(entry);
				Ok(InsertAction::InsertedNew)
			}
			Slot::Occupied(mut slot) => match self.policy {
				DuplicatePolicy::Reject => Err(Error::duplicate_key(&self.label, slot.key().as_str())),
				DuplicatePolicy::KeepExisting => Ok(InsertAction::KeptExisting),
				DuplicatePolicy::Replace => {
					slot.insert(entry);
					Ok(InsertAction::ReplacedExisting)
				}
			},
		}
	}

	/// Registers `factory` under `key`, overwriting any existing entry and
	/// dropping its cached instance.
	pub fn replace<F>(&mut self, key: impl Into<String>, factory: F, caching: Caching) -> InsertAction
	where
		F: Fn() -> T + Send + Sync + 'static,
	{
		match self.entries.insert(key.into(), Entry::new(factory, caching)) {
			Some(_) => InsertAction::ReplacedExisting,
			None => InsertAction::InsertedNew,
		}
	}

	/// Returns the instance for `key`.
	///
	/// Cached entries build their value on first use and share it afterwards.
	/// Fresh entries run the factory on every call.
	pub fn resolve(&self, key: &str) -> Result<Instance<T>> {
		Ok(self.entry(key)?.produce())
	}

	/// Copies `instance` using the copy contract declared for `key`.
	///
	/// Fails with [`Error::NotCloneable`] if the entry declares none.
	pub fn copy(&self, key: &str, instance: &T) -> Result<T> {
		self.entry(key)?
			.copy_of(instance)
			.ok_or_else(|| Error::not_cloneable(&self.label, key))
	}

	/// Resolves `key` and returns an independent copy of the result.
	///
	/// The registered instance acts as the prototype; for cached entries it
	/// stays untouched in the cache.
	pub fn spawn(&self, key: &str) -> Result<T> {
		let entry = self.entry(key)?;
		if !entry.is_cloneable() {
			return Err(Error::not_cloneable(&self.label, key));
		}
		let prototype = entry.produce();
		entry
			.copy_of(&prototype)
			.ok_or_else(|| Error::not_cloneable(&self.label, key))
	}

	/// Returns the entry registered under `key`.
	pub fn get(&self, key: &str) -> Option<&Entry<T>> {
		self.entries.get(key)
	}

	/// Returns true if `key` is registered.
	pub fn contains(&self, key: &str) -> bool {
		self.entries.contains_key(key)
	}

	/// Returns true if `key` is registered and its shared instance has been built.
	pub fn is_cached(&self, key: &str) -> bool {
		self.entries.get(key).is_some_and(Entry::is_cached)
	}

	/// Returns the registered keys in registration order.
	pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
		self.entries.keys().map(String::as_str)
	}

	/// Returns the number of registered keys.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns true if nothing is registered.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	fn entry(&self, key: &str) -> Result<&Entry<T>> {
		self.entries
			.get(key)
			.ok_or_else(|| Error::unknown_key(&self.label, key))
	}
}

impl<T> std::fmt::Debug for Registry<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Registry")
			.field("label", &self.label)
			.field("policy", &self.policy)
			.field("entries", &self.entries)
			.finish()
	}
}

impl<T> Default for Registry<T> {
	fn default() -> Self {
		Self::new("registry")
	}
}
