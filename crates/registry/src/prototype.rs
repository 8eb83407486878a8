/// Explicit copy contract for prototype-style entries.
///
/// Implementations build the copy field by field so that owned sub-objects
/// are duplicated rather than aliased. Types opt in individually; nothing is
/// derived from [`Clone`].
///
/// ```rust
/// use trellis_registry::Prototype;
///
/// struct Robot {
/// 	model: String,
/// 	parts: Vec<String>,
/// }
///
/// impl Prototype for Robot {
/// 	fn duplicate(&self) -> Self {
/// 		Robot {
/// 			model: self.model.clone(),
/// 			parts: self.parts.iter().cloned().collect(),
/// 		}
/// 	}
/// }
/// ```
pub trait Prototype: Sized {
	/// Returns an independent copy of `self`.
	fn duplicate(&self) -> Self;
}

impl<T: Prototype> Prototype for Option<T> {
	fn duplicate(&self) -> Self {
		self.as_ref().map(T::duplicate)
	}
}

impl<T: Prototype> Prototype for Vec<T> {
	fn duplicate(&self) -> Self {
		self.iter().map(T::duplicate).collect()
	}
}
