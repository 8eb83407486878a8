//! Keyed object registry.
//!
//! A [`Registry`] maps string keys to factories. Each entry decides whether
//! the values it produces are shared or handed out fresh:
//!
//! - [`Caching::Cached`] entries build their value once and return the same
//!   [`Instance::Shared`] handle on every [`Registry::resolve`] (flyweight).
//! - [`Caching::Fresh`] entries run the factory on every resolve and transfer
//!   ownership through [`Instance::Owned`].
//!
//! Entries may also declare a copy contract ([`Prototype`]), which enables
//! [`Registry::copy`] and [`Registry::spawn`]. For flyweights keyed by
//! intrinsic state rather than by a registered name, see [`Pool`].
//!
//! ```rust
//! use trellis_registry::{Caching, Registry};
//!
//! let mut shapes = Registry::new("shapes");
//! shapes.register("unit", || vec![1.0_f32], Caching::Cached).unwrap();
//!
//! let a = shapes.resolve("unit").unwrap();
//! let b = shapes.resolve("unit").unwrap();
//! assert!(trellis_registry::Instance::ptr_eq(&a, &b));
//! ```

mod entry;
mod policy;
mod pool;
mod prototype;
mod registry;

pub use entry::{Caching, Entry, Instance};
pub use policy::{DuplicatePolicy, InsertAction};
pub use pool::Pool;
pub use prototype::Prototype;
pub use registry::Registry;
pub use trellis_core::{Error, ErrorKind, Result};

#[cfg(test)]
mod tests;
