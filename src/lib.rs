//! # Dynamis
//!
//! A registry-driven wiring toolkit: declarative data models, a type-keyed
//! dependency library with callable injection, and a link-time
//! module-export registry scanned by a dynamic loader with widget
//! dispatch.
//!
//! Dynamis follows Rust's composition patterns instead of runtime
//! reflection: field tables are declared with [`model!`], injection is
//! resolved through the [`FromLibrary`] extractor trait, and module
//! scanning walks members exported at compile time with
//! [`export_member!`].
//!
//! ## The pieces
//!
//! - **Models** (`dynamis-core`): [`model!`] declares a struct hydrated
//!   from an in-memory mapping, with per-field defaults, factories, and
//!   casts via [`field()`](field). Nested model fields rebuild from nested
//!   mappings, transitively.
//! - **Dependencies** (`dynamis-di`): a [`DependencyLibrary`] stores at
//!   most one value per concrete type and
//!   [injects](DependencyLibrary::inject) them into callables by
//!   parameter type.
//! - **Loading** (`dynamis-registry`): a [`DynamicLoader`] scans a
//!   module path and dispatches each member to every matching
//!   `(selector, handler)` pair; widget handlers receive the widget
//!   instances attached to members.
//!
//! ## Quick Example
//!
//! ```rust
//! use dynamis::{DependencyLibrary, DynamicLoader, Member, Model, export_member, model};
//! use serde_json::json;
//!
//! model! {
//! 	#[derive(Debug, PartialEq)]
//! 	pub struct Greeting {
//! 		pub text: String,
//! 	}
//! }
//!
//! fn shout(greeting: &Greeting) -> String {
//! 	greeting.text.to_uppercase()
//! }
//!
//! export_member!("app::handlers", shout, || {
//! 	Member::new(shout as fn(&Greeting) -> String)
//! });
//!
//! // Hydrate configuration, wire it, and scan the handler module.
//! let values = json!({"text": "hello"});
//! let greeting = Greeting::from_dict(values.as_object().unwrap()).unwrap();
//!
//! let mut library = DependencyLibrary::new();
//! library.add(greeting).unwrap();
//! assert_eq!(library.inject(shout).unwrap(), "HELLO");
//!
//! let mut loader = DynamicLoader::new();
//! loader.register_handler(|name, _| println!("scanned {name}"));
//! loader.load_module("app::handlers").unwrap();
//! ```

// Re-export from dynamis-core
pub use dynamis_core::{
	FieldError, FieldOptions, FieldResult, FromValue, Mapping, Model, ModelError, ModelResult,
	Value, field, kind_of, model,
};

// Re-export from dynamis-di
pub use dynamis_di::{DependencyLibrary, DiError, DiResult, FromLibrary, InjectFn};

// Re-export from dynamis-registry
pub use dynamis_registry::{
	DynamicLoader, ExportedMember, Handler, Member, RegistryError, RegistryResult, Selector,
	Widget, export_member, is_package, module_exists, parent_module, submodules_of,
};

// Re-export inventory for macro usage
pub use dynamis_registry::inventory;

/// Convenience imports for typical wiring code.
pub mod prelude {
	pub use dynamis_core::{FromValue, Model, field, model};
	pub use dynamis_di::DependencyLibrary;
	pub use dynamis_registry::{DynamicLoader, Member, Widget, export_member};
}
