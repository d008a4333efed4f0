//! Error types for the dependency library

/// Errors raised by dependency registration and lookup.
#[derive(Debug, thiserror::Error)]
pub enum DiError {
	/// No value of the requested type is registered.
	#[error("no dependency of type '{type_name}' in library")]
	NotFound { type_name: &'static str },
	/// A value of this concrete type is already registered; the library
	/// rejects duplicates rather than overwriting setup-time wiring.
	#[error("dependency of type '{type_name}' already in library")]
	Duplicate { type_name: &'static str },
}

pub type DiResult<T> = Result<T, DiError>;
