//! The type-keyed dependency container

use crate::errors::{DiError, DiResult};
use crate::inject::InjectFn;
use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;

/// A library of dependencies, holding at most one value per concrete type.
///
/// Values are keyed by [`TypeId`], so lookup is by exact type with no
/// subtype matching. The container is unsynchronized: wiring is expected
/// to happen once, at setup time, from a single thread.
///
/// # Examples
///
/// ```
/// use dynamis_di::DependencyLibrary;
///
/// let mut library = DependencyLibrary::new();
/// library.add("x".to_string()).unwrap();
///
/// assert!(library.contains_type::<String>());
/// assert!(!library.contains(&"str".to_string()));
/// assert_eq!(library.get::<String>().unwrap(), "x");
/// ```
#[derive(Default)]
pub struct DependencyLibrary {
	entries: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl DependencyLibrary {
	pub fn new() -> Self {
		Self {
			entries: HashMap::new(),
		}
	}

	/// Adds a dependency, keyed by its concrete type.
	///
	/// Returns [`DiError::Duplicate`] when a value of that exact type is
	/// already present; existing wiring is never overwritten.
	pub fn add<T: Any + Send + Sync>(&mut self, value: T) -> DiResult<()> {
		if self.entries.contains_key(&TypeId::of::<T>()) {
			return Err(DiError::Duplicate {
				type_name: type_name::<T>(),
			});
		}
		tracing::trace!(dependency = type_name::<T>(), "added to library");
		self.entries.insert(TypeId::of::<T>(), Box::new(value));
		Ok(())
	}

	/// Looks up the registered value of type `T`.
	pub fn get<T: Any>(&self) -> DiResult<&T> {
		tracing::trace!(dependency = type_name::<T>(), "looking up");
		self.entries
			.get(&TypeId::of::<T>())
			.and_then(|entry| entry.downcast_ref::<T>())
			.ok_or(DiError::NotFound {
				type_name: type_name::<T>(),
			})
	}

	/// Returns `true` when a value of type `T` is registered.
	pub fn contains_type<T: Any>(&self) -> bool {
		self.entries.contains_key(&TypeId::of::<T>())
	}

	/// Returns `true` when the registered value of the argument's type
	/// equals the argument.
	pub fn contains<T: Any + PartialEq>(&self, value: &T) -> bool {
		self.get::<T>().is_ok_and(|registered| registered == value)
	}

	/// Number of registered dependencies.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Calls `f`, resolving every parameter from the library.
	///
	/// Parameters of type `&T` are required and fail with
	/// [`DiError::NotFound`] before `f` runs; `Option<&T>` parameters
	/// resolve to `None` when unregistered. Arguments the caller wants to
	/// supply directly become closure captures.
	///
	/// # Examples
	///
	/// ```
	/// use dynamis_di::DependencyLibrary;
	///
	/// struct Config {
	/// 	retries: u32,
	/// }
	///
	/// let mut library = DependencyLibrary::new();
	/// library.add(Config { retries: 3 }).unwrap();
	///
	/// let retries = library
	/// 	.inject(|config: &Config| config.retries)
	/// 	.unwrap();
	/// assert_eq!(retries, 3);
	/// ```
	pub fn inject<'a, Args, F>(&'a self, f: F) -> DiResult<F::Output>
	where
		F: InjectFn<'a, Args>,
	{
		f.invoke(self)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[derive(Debug, PartialEq)]
	struct Marker(u8);

	#[test]
	fn add_then_get() {
		let mut library = DependencyLibrary::new();
		library.add(Marker(1)).unwrap();
		assert_eq!(library.get::<Marker>().unwrap(), &Marker(1));
	}

	#[test]
	fn duplicate_add_is_rejected_and_keeps_original() {
		let mut library = DependencyLibrary::new();
		library.add(Marker(1)).unwrap();
		let err = library.add(Marker(2)).unwrap_err();
		assert!(matches!(err, DiError::Duplicate { .. }));
		assert_eq!(library.get::<Marker>().unwrap(), &Marker(1));
	}

	#[test]
	fn contains_checks_value_equality() {
		let mut library = DependencyLibrary::new();
		library.add("x".to_string()).unwrap();

		assert!(library.contains_type::<String>());
		assert!(library.contains(&"x".to_string()));
		assert!(!library.contains(&"str".to_string()));
		assert!(!library.contains(&7u32));
	}

	#[test]
	fn missing_lookup_fails() {
		let library = DependencyLibrary::new();
		assert!(matches!(
			library.get::<Marker>(),
			Err(DiError::NotFound { .. })
		));
	}
}
