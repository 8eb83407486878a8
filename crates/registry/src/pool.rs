use std::hash::Hash;
use std::sync::Arc;

use rustc_hash::FxHashMap;

/// Interning pool for flyweights keyed by their intrinsic state.
///
/// Unlike [`Registry`](crate::Registry), keys do not need to be registered
/// up front: the first [`intern`](Self::intern) for a key builds the value and
/// every later call shares it.
#[derive(Debug)]
pub struct Pool<K, V> {
	items: FxHashMap<K, Arc<V>>,
}

impl<K: Eq + Hash, V> Pool<K, V> {
	/// Creates an empty pool.
	pub fn new() -> Self {
		Self {
			items: FxHashMap::default(),
		}
	}

	/// Returns the shared value for `key`, building it with `make` if absent.
	pub fn intern<F>(&mut self, key: K, make: F) -> Arc<V>
	where
		F: FnOnce(&K) -> V,
	{
		if let Some(existing) = self.items.get(&key) {
			return Arc::clone(existing);
		}
		let value = Arc::new(make(&key));
		self.items.insert(key, Arc::clone(&value));
		value
	}

	/// Returns the shared value for `key` if it has been interned.
	pub fn get(&self, key: &K) -> Option<Arc<V>> {
		self.items.get(key).cloned()
	}

	/// Returns the number of distinct values held.
	pub fn len(&self) -> usize {
		self.items.len()
	}

	/// Returns true if nothing has been interned.
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// Drops values no longer referenced outside the pool.
	///
	/// Returns the number of values removed.
	pub fn purge_unused(&mut self) -> usize {
		let before = self.items.len();
		self.items.retain(|_, value| Arc::strong_count(value) > 1);
		before - self.items.len()
	}
}

impl<K: Eq + Hash, V> Default for Pool<K, V> {
	fn default() -> Self {
		Self::new()
	}
}
