//! Model contract and the `model!` declaration macro

use crate::errors::ModelResult;
use crate::value::Mapping;

/// A structured record hydrated from a mapping.
///
/// Implementations are normally generated by [`model!`](crate::model!),
/// which resolves every declared field in declaration order. Hydration is
/// all-or-nothing; extra keys in the input are ignored.
pub trait Model: Sized {
	/// The model's type name, used in error messages.
	const NAME: &'static str;

	/// Declared field names, in declaration order.
	const FIELDS: &'static [&'static str];

	/// Builds an instance from a mapping.
	///
	/// Nested fields whose types are themselves models are rebuilt from
	/// their nested mappings, transitively.
	fn from_dict(values: &Mapping) -> ModelResult<Self>;
}

/// Declares a model struct together with its [`Model`] and
/// [`FromValue`](crate::FromValue) implementations.
///
/// Each field may carry configuration after `=`, built with
/// [`field()`](crate::field):
///
/// ```
/// use dynamis_core::{field, model, Model};
/// use serde_json::json;
///
/// model! {
/// 	#[derive(Debug, PartialEq)]
/// 	pub struct Article {
/// 		pub title: String,
/// 		pub views: u64 = field().default(0),
/// 		pub tags: Vec<String> = field().default_factory(Vec::new),
/// 	}
/// }
///
/// let values = json!({"title": "T"});
/// let article = Article::from_dict(values.as_object().unwrap()).unwrap();
/// assert_eq!(article.views, 0);
/// assert_eq!(Article::FIELDS, ["title", "views", "tags"]);
/// ```
///
/// Attributes before the struct (derives, docs) pass through unchanged.
#[macro_export]
macro_rules! model {
	(
		$(#[$meta:meta])*
		$vis:vis struct $name:ident {
			$(
				$(#[$fmeta:meta])*
				$fvis:vis $fname:ident : $fty:ty $(= $fopts:expr)?
			),* $(,)?
		}
	) => {
		$(#[$meta])*
		$vis struct $name {
			$(
				$(#[$fmeta])*
				$fvis $fname: $fty,
			)*
		}

		impl $crate::Model for $name {
			const NAME: &'static str = ::core::stringify!($name);
			const FIELDS: &'static [&'static str] = &[$(::core::stringify!($fname)),*];

			fn from_dict(
				values: &$crate::Mapping,
			) -> ::core::result::Result<Self, $crate::ModelError> {
				::core::result::Result::Ok(Self {
					$(
						$fname: $crate::__model_field_options!($($fopts)?).resolve(
							values,
							::core::stringify!($fname),
							<Self as $crate::Model>::NAME,
						)?,
					)*
				})
			}
		}

		impl $crate::FromValue for $name {
			fn from_value(
				value: &$crate::Value,
			) -> ::core::result::Result<Self, $crate::FieldError> {
				match value.as_object() {
					::core::option::Option::Some(map) => {
						<$name as $crate::Model>::from_dict(map).map_err(|err| {
							$crate::FieldError::Model(::std::boxed::Box::new(err))
						})
					}
					::core::option::Option::None => {
						::core::result::Result::Err($crate::FieldError::TypeMismatch {
							expected: "object",
							found: $crate::kind_of(value),
						})
					}
				}
			}
		}
	};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __model_field_options {
	() => {
		$crate::field()
	};
	($opts:expr) => {
		$opts
	};
}
