//! # Dynamis Registry
//!
//! A link-time module-export registry with a scanning loader and widget
//! dispatch.
//!
//! ## Overview
//!
//! Modules are `::`-separated paths under which values are exported at
//! compile time with [`export_member!`]. A [`DynamicLoader`] scans a
//! module's members and invokes every registered `(selector, handler)`
//! pair that matches; [`register_widget_handler`](DynamicLoader::register_widget_handler)
//! dispatches on the widget instances attached to members instead of the
//! raw values.
//!
//! ## Quick Start
//!
//! ```rust
//! use dynamis_registry::{DynamicLoader, Member, export_member};
//!
//! fn ping() -> &'static str {
//! 	"pong"
//! }
//!
//! export_member!("demo::commands", ping, || {
//! 	Member::new(ping as fn() -> &'static str)
//! });
//!
//! let mut loader = DynamicLoader::new();
//! loader.register_handler(|name, _member| println!("found {name}"));
//! let scanned = loader.load_module("demo::commands").unwrap();
//! assert_eq!(scanned, 1);
//! ```
//!
//! Handlers run for side effects only; their return values are discarded.
//! Scanning an unknown module path fails with
//! [`RegistryError::ModuleNotFound`] — nothing is retried or swallowed.

pub mod errors;
pub mod loader;
pub mod member;
pub mod utils;
pub mod widgets;

// Re-export inventory for macro usage
pub use inventory;

pub use errors::{RegistryError, RegistryResult};
pub use loader::{DynamicLoader, Handler, Selector};
pub use member::{ExportedMember, Member};
pub use utils::{is_package, module_exists, parent_module, submodules_of};
pub use widgets::Widget;
