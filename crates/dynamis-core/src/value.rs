//! Dynamic values and the conversion capability

use crate::errors::{FieldError, FieldResult};
use std::collections::{BTreeMap, HashMap};

pub use serde_json::Value;

/// The in-memory mapping models hydrate from.
pub type Mapping = serde_json::Map<String, Value>;

/// Returns the JSON kind of a value, for error messages.
///
/// # Examples
///
/// ```
/// use dynamis_core::kind_of;
/// use serde_json::json;
///
/// assert_eq!(kind_of(&json!(1)), "number");
/// assert_eq!(kind_of(&json!({"a": 1})), "object");
/// ```
pub fn kind_of(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "boolean",
		Value::Number(_) => "number",
		Value::String(_) => "string",
		Value::Array(_) => "array",
		Value::Object(_) => "object",
	}
}

/// Conversion from a dynamic [`Value`] into a concrete type.
///
/// This is the explicit capability behind nested model hydration: a field
/// whose type implements `FromValue` through [`model!`](crate::model!) is
/// rebuilt from a nested mapping, while built-in containers and scalars
/// convert directly and are never treated as models.
pub trait FromValue: Sized {
	fn from_value(value: &Value) -> FieldResult<Self>;
}

macro_rules! from_value_via_serde {
	($($ty:ty => $expected:literal),* $(,)?) => {
		$(
			impl FromValue for $ty {
				fn from_value(value: &Value) -> FieldResult<Self> {
					serde_json::from_value(value.clone()).map_err(|_| FieldError::TypeMismatch {
						expected: $expected,
						found: kind_of(value),
					})
				}
			}
		)*
	};
}

from_value_via_serde! {
	bool => "boolean",
	i8 => "integer",
	i16 => "integer",
	i32 => "integer",
	i64 => "integer",
	u8 => "integer",
	u16 => "integer",
	u32 => "integer",
	u64 => "integer",
	f32 => "number",
	f64 => "number",
	String => "string",
}

impl FromValue for Value {
	fn from_value(value: &Value) -> FieldResult<Self> {
		Ok(value.clone())
	}
}

/// `Null` becomes `None`; anything else converts as `T`.
impl<T: FromValue> FromValue for Option<T> {
	fn from_value(value: &Value) -> FieldResult<Self> {
		match value {
			Value::Null => Ok(None),
			other => T::from_value(other).map(Some),
		}
	}
}

impl<T: FromValue> FromValue for Vec<T> {
	fn from_value(value: &Value) -> FieldResult<Self> {
		match value {
			Value::Array(items) => items.iter().map(T::from_value).collect(),
			other => Err(FieldError::TypeMismatch {
				expected: "array",
				found: kind_of(other),
			}),
		}
	}
}

impl<T: FromValue> FromValue for HashMap<String, T> {
	fn from_value(value: &Value) -> FieldResult<Self> {
		match value {
			Value::Object(map) => map
				.iter()
				.map(|(key, item)| Ok((key.clone(), T::from_value(item)?)))
				.collect(),
			other => Err(FieldError::TypeMismatch {
				expected: "object",
				found: kind_of(other),
			}),
		}
	}
}

impl<T: FromValue> FromValue for BTreeMap<String, T> {
	fn from_value(value: &Value) -> FieldResult<Self> {
		match value {
			Value::Object(map) => map
				.iter()
				.map(|(key, item)| Ok((key.clone(), T::from_value(item)?)))
				.collect(),
			other => Err(FieldError::TypeMismatch {
				expected: "object",
				found: kind_of(other),
			}),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[test]
	fn scalars_convert() {
		assert_eq!(u64::from_value(&json!(7)).unwrap(), 7);
		assert_eq!(f64::from_value(&json!(1.5)).unwrap(), 1.5);
		assert!(bool::from_value(&json!(true)).unwrap());
		assert_eq!(String::from_value(&json!("hi")).unwrap(), "hi");
	}

	#[test]
	fn integer_widens_to_float() {
		assert_eq!(f64::from_value(&json!(3)).unwrap(), 3.0);
	}

	#[rstest]
	#[case(json!("x"), "integer", "string")]
	#[case(json!(1), "string", "number")]
	#[case(json!([1]), "boolean", "array")]
	#[case(json!(null), "number", "null")]
	fn mismatches_name_both_kinds(
		#[case] value: Value,
		#[case] expected: &str,
		#[case] found: &str,
	) {
		let err = match expected {
			"integer" => i64::from_value(&value).unwrap_err(),
			"string" => String::from_value(&value).unwrap_err(),
			"boolean" => bool::from_value(&value).unwrap_err(),
			_ => f64::from_value(&value).unwrap_err(),
		};
		assert_eq!(err.to_string(), format!("expected {expected}, got {found}"));
	}

	#[test]
	fn option_treats_null_as_none() {
		assert_eq!(Option::<u32>::from_value(&json!(null)).unwrap(), None);
		assert_eq!(Option::<u32>::from_value(&json!(4)).unwrap(), Some(4));
		assert!(Option::<u32>::from_value(&json!("no")).is_err());
	}

	#[test]
	fn containers_convert_elementwise() {
		let tags = Vec::<String>::from_value(&json!(["a", "b"])).unwrap();
		assert_eq!(tags, vec!["a".to_string(), "b".to_string()]);

		let scores = HashMap::<String, i64>::from_value(&json!({"a": 1})).unwrap();
		assert_eq!(scores["a"], 1);

		assert!(Vec::<String>::from_value(&json!(["a", 1])).is_err());
	}

	#[test]
	fn value_converts_to_itself() {
		let value = json!({"anything": [1, 2]});
		assert_eq!(Value::from_value(&value).unwrap(), value);
	}
}
