//! Per-field configuration and resolution

use crate::errors::{FieldResult, ModelError, ModelResult};
use crate::value::{FromValue, Mapping, Value};

/// Creates an empty field configuration.
///
/// Used on the right-hand side of a [`model!`](crate::model!) field to
/// attach a default, a default factory, or a cast:
///
/// ```
/// use dynamis_core::{field, model, Model};
/// use serde_json::Map;
///
/// model! {
/// 	pub struct Article {
/// 		pub views: u64 = field().default(0),
/// 	}
/// }
///
/// let article = Article::from_dict(&Map::new()).unwrap();
/// assert_eq!(article.views, 0);
/// ```
pub fn field<T>() -> FieldOptions<T> {
	FieldOptions::new()
}

enum DefaultSource<T> {
	Value(T),
	Factory(Box<dyn Fn() -> T>),
}

/// Configuration for a single model field.
///
/// A field with neither a default nor a default factory is required;
/// hydration fails with [`ModelError::MissingField`] when it is absent
/// from the input.
pub struct FieldOptions<T> {
	default: Option<DefaultSource<T>>,
	cast: Option<Box<dyn Fn(&Value) -> FieldResult<T>>>,
}

impl<T> FieldOptions<T> {
	pub fn new() -> Self {
		Self {
			default: None,
			cast: None,
		}
	}

	/// Sets a static fallback used when the field is absent from the input.
	///
	/// A field holds at most one default source: calling this after
	/// [`default_factory`](Self::default_factory) replaces the factory.
	pub fn default(mut self, value: T) -> Self {
		self.default = Some(DefaultSource::Value(value));
		self
	}

	/// Sets a producer invoked fresh on every hydration where the field is
	/// absent, so instances never share a fallback container.
	///
	/// A field holds at most one default source: calling this after
	/// [`default`](Self::default) replaces the static value.
	pub fn default_factory(mut self, factory: impl Fn() -> T + 'static) -> Self {
		self.default = Some(DefaultSource::Factory(Box::new(factory)));
		self
	}

	/// Sets a cast applied to a supplied value in place of the
	/// [`FromValue`] conversion. Cast failures surface unchanged as the
	/// source of the resulting [`ModelError::Cast`].
	pub fn cast(mut self, cast: impl Fn(&Value) -> FieldResult<T> + 'static) -> Self {
		self.cast = Some(Box::new(cast));
		self
	}
}

impl<T> Default for FieldOptions<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T: FromValue> FieldOptions<T> {
	/// Resolves the field against an input mapping.
	///
	/// A key present in the input always wins, even when its value is
	/// `Null`: default resolution only applies to absent keys.
	pub fn resolve(
		self,
		values: &Mapping,
		field: &'static str,
		model: &'static str,
	) -> ModelResult<T> {
		match values.get(field) {
			Some(value) => match &self.cast {
				Some(cast) => cast(value),
				None => T::from_value(value),
			}
			.map_err(|source| ModelError::Cast {
				model,
				field,
				source,
			}),
			None => match self.default {
				Some(DefaultSource::Value(value)) => Ok(value),
				Some(DefaultSource::Factory(factory)) => Ok(factory()),
				None => Err(ModelError::MissingField { model, field }),
			},
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::errors::FieldError;
	use serde_json::json;

	fn mapping(value: serde_json::Value) -> Mapping {
		value.as_object().unwrap().clone()
	}

	#[test]
	fn supplied_value_converts() {
		let values = mapping(json!({"views": 3}));
		let views: u64 = field().resolve(&values, "views", "Article").unwrap();
		assert_eq!(views, 3);
	}

	#[test]
	fn absent_field_uses_default() {
		let values = Mapping::new();
		let views: u64 = field().default(9).resolve(&values, "views", "Article").unwrap();
		assert_eq!(views, 9);
	}

	#[test]
	fn absent_field_without_default_is_missing() {
		let values = Mapping::new();
		let err = field::<u64>()
			.resolve(&values, "views", "Article")
			.unwrap_err();
		assert!(matches!(err, ModelError::MissingField { field: "views", model: "Article" }));
	}

	#[test]
	fn later_default_setter_wins() {
		let values = Mapping::new();
		let views: u64 = field()
			.default_factory(|| 1)
			.default(2)
			.resolve(&values, "views", "Article")
			.unwrap();
		assert_eq!(views, 2);
	}

	#[test]
	fn cast_replaces_conversion() {
		let values = mapping(json!({"views": "12"}));
		let views: u64 = field()
			.cast(|value| {
				value
					.as_str()
					.and_then(|text| text.parse().ok())
					.ok_or_else(|| FieldError::Invalid("not a numeric string".into()))
			})
			.resolve(&values, "views", "Article")
			.unwrap();
		assert_eq!(views, 12);
	}

	#[test]
	fn cast_failure_names_field_and_keeps_source() {
		let values = mapping(json!({"views": "nope"}));
		let err = field::<u64>()
			.cast(|_| Err(FieldError::Invalid("not a numeric string".into())))
			.resolve(&values, "views", "Article")
			.unwrap_err();
		match err {
			ModelError::Cast { field, model, source } => {
				assert_eq!(field, "views");
				assert_eq!(model, "Article");
				assert_eq!(source.to_string(), "not a numeric string");
			}
			other => panic!("unexpected error: {other}"),
		}
	}

	#[test]
	fn explicit_null_bypasses_default() {
		let values = mapping(json!({"note": null}));
		let note: Option<String> = field()
			.default(Some("fallback".to_string()))
			.resolve(&values, "note", "Article")
			.unwrap();
		assert_eq!(note, None);
	}
}
