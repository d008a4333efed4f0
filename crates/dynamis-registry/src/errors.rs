//! Error types for the export registry

/// Errors raised by module scanning and path traversal.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
	/// No member is exported under the given path or below it.
	#[error("no module named '{path}' in the export registry")]
	ModuleNotFound { path: String },
	/// A top-level module has no parent.
	#[error("'{module}' does not have a parent")]
	NoParent { module: String },
}

pub type RegistryResult<T> = Result<T, RegistryError>;
