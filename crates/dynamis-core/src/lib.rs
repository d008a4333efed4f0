//! # Dynamis Core
//!
//! Declarative data models hydrated from in-memory mappings.
//!
//! ## Overview
//!
//! This crate provides the model layer of the dynamis toolkit:
//!
//! - **[`FromValue`]**: the conversion capability a type implements to be
//!   buildable from a [`Value`]
//! - **[`field`]**: per-field configuration (default, default factory, cast)
//! - **[`Model`]**: the hydration contract (`from_dict` over a [`Mapping`])
//! - **[`model!`]**: declares a struct together with its `Model` and
//!   `FromValue` implementations
//!
//! ## Quick Start
//!
//! ```rust
//! use dynamis_core::{field, model, Model};
//! use serde_json::json;
//!
//! model! {
//! 	#[derive(Debug, PartialEq)]
//! 	pub struct User {
//! 		pub gid: u64,
//! 		pub name: String,
//! 	}
//! }
//!
//! model! {
//! 	#[derive(Debug, PartialEq)]
//! 	pub struct Post {
//! 		pub title: String,
//! 		pub author: User,
//! 		pub tags: Vec<String> = field().default_factory(Vec::new),
//! 	}
//! }
//!
//! let values = json!({
//! 	"title": "T",
//! 	"author": {"gid": 1, "name": "A"},
//! });
//! let post = Post::from_dict(values.as_object().unwrap()).unwrap();
//! assert_eq!(post.author.gid, 1);
//! assert!(post.tags.is_empty());
//! ```
//!
//! Hydration is all-or-nothing: the first missing required field or failed
//! conversion aborts construction with an error naming the field and the
//! model type.

pub mod errors;
pub mod field;
pub mod model;
pub mod value;

pub use errors::{FieldError, FieldResult, ModelError, ModelResult};
pub use field::{FieldOptions, field};
pub use model::Model;
pub use value::{FromValue, Mapping, Value, kind_of};
