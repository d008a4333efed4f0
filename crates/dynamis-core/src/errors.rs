//! Error types for model hydration

/// Errors raised while hydrating a model from a mapping.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
	/// A required field was absent from both the input and the defaults.
	#[error("model '{model}' is missing required field '{field}'")]
	MissingField {
		model: &'static str,
		field: &'static str,
	},
	/// A supplied value could not be converted into the field's type,
	/// either by the configured cast or by [`FromValue`](crate::FromValue).
	/// The underlying conversion failure is preserved as the source.
	#[error("cannot convert value for field '{field}' of model '{model}': {source}")]
	Cast {
		model: &'static str,
		field: &'static str,
		#[source]
		source: FieldError,
	},
}

pub type ModelResult<T> = Result<T, ModelError>;

/// Errors raised by a single value conversion.
#[derive(Debug, thiserror::Error)]
pub enum FieldError {
	/// The value's JSON kind does not match the target type.
	#[error("expected {expected}, got {found}")]
	TypeMismatch {
		expected: &'static str,
		found: &'static str,
	},
	/// A cast function rejected the value.
	#[error("{0}")]
	Invalid(String),
	/// Hydration of a nested model failed.
	#[error(transparent)]
	Model(Box<ModelError>),
}

pub type FieldResult<T> = Result<T, FieldError>;
