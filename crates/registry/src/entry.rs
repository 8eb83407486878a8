use std::ops::Deref;
use std::sync::{Arc, OnceLock};

use crate::Prototype;

type Factory<T> = Box<dyn Fn() -> T + Send + Sync>;
type Copier<T> = Box<dyn Fn(&T) -> T + Send + Sync>;

/// Whether an entry shares one instance or builds a new one per resolve.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Caching {
	/// Build once, then hand out the same shared instance (flyweight).
	Cached,
	/// Run the factory on every resolve and transfer ownership.
	#[default]
	Fresh,
}

/// A registry record: factory, caching mode, optional copy contract and the
/// cache slot.
///
/// Everything but the cache slot is fixed at construction.
pub struct Entry<T> {
	factory: Factory<T>,
	caching: Caching,
	copier: Option<Copier<T>>,
	cache: OnceLock<Arc<T>>,
}

impl<T> Entry<T> {
	/// Creates an entry without a copy contract.
	pub fn new<F>(factory: F, caching: Caching) -> Self
	where
		F: Fn() -> T + Send + Sync + 'static,
	{
		Self {
			factory: Box::new(factory),
			caching,
			copier: None,
			cache: OnceLock::new(),
		}
	}

	/// Creates an entry whose copy contract is [`Prototype::duplicate`].
	pub fn prototype<F>(factory: F, caching: Caching) -> Self
	where
		T: Prototype + 'static,
		F: Fn() -> T + Send + Sync + 'static,
	{
		Self::new(factory, caching).with_copier(T::duplicate)
	}

	/// Declares a custom copy contract for this entry.
	pub fn with_copier<C>(mut self, copier: C) -> Self
	where
		C: Fn(&T) -> T + Send + Sync + 'static,
	{
		self.copier = Some(Box::new(copier));
		self
	}

	/// Returns the caching mode.
	pub fn caching(&self) -> Caching {
		self.caching
	}

	/// Returns true if the entry declares a copy contract.
	pub fn is_cloneable(&self) -> bool {
		self.copier.is_some()
	}

	/// Returns true if a shared instance has been built.
	pub fn is_cached(&self) -> bool {
		self.cache.get().is_some()
	}

	pub(crate) fn produce(&self) -> Instance<T> {
		match self.caching {
			Caching::Cached => {
				let shared = self.cache.get_or_init(|| Arc::new((self.factory)()));
				Instance::Shared(Arc::clone(shared))
			}
			Caching::Fresh => Instance::Owned((self.factory)()),
		}
	}

	pub(crate) fn copy_of(&self, value: &T) -> Option<T> {
		self.copier.as_ref().map(|copy| copy(value))
	}
}

impl<T> std::fmt::Debug for Entry<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Entry")
			.field("caching", &self.caching)
			.field("cloneable", &self.is_cloneable())
			.field("cached", &self.is_cached())
			.finish()
	}
}

/// A value handed out by [`Registry::resolve`](crate::Registry::resolve).
///
/// Shared instances must be treated as read-only; there is no way to obtain
/// `&mut T` through this handle.
#[derive(Debug)]
pub enum Instance<T> {
	/// Shared with the registry and every other caller of a cached entry.
	Shared(Arc<T>),
	/// Freshly built and owned by the caller.
	Owned(T),
}

impl<T> Instance<T> {
	/// Returns true for [`Instance::Shared`].
	pub fn is_shared(&self) -> bool {
		matches!(self, Instance::Shared(_))
	}

	/// Returns the owned value, or `None` for a shared instance.
	pub fn into_owned(self) -> Option<T> {
		match self {
			Instance::Owned(value) => Some(value),
			Instance::Shared(_) => None,
		}
	}

	/// Converts into a shared handle, wrapping owned values in a new [`Arc`].
	pub fn into_shared(self) -> Arc<T> {
		match self {
			Instance::Shared(shared) => shared,
			Instance::Owned(value) => Arc::new(value),
		}
	}

	/// Returns true if both handles point at the same value.
	pub fn ptr_eq(a: &Self, b: &Self) -> bool {
		std::ptr::eq(a.deref(), b.deref())
	}
}

impl<T> Deref for Instance<T> {
	type Target = T;

	fn deref(&self) -> &T {
		match self {
			Instance::Shared(shared) => shared,
			Instance::Owned(value) => value,
		}
	}
}

impl<T> AsRef<T> for Instance<T> {
	fn as_ref(&self) -> &T {
		self
	}
}
