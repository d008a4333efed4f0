//! # Dynamis Dependency Injection
//!
//! A type-keyed dependency library with lookup-based injection into
//! callables.
//!
//! ## Overview
//!
//! - **[`DependencyLibrary`]**: stores at most one value per concrete type,
//!   keyed by [`TypeId`](std::any::TypeId)
//! - **[`FromLibrary`]**: per-parameter resolution (`&T` required,
//!   `Option<&T>` optional)
//! - **[`InjectFn`]**: implemented for functions of up to eight parameters,
//!   so [`DependencyLibrary::inject`] can assemble the arguments and call
//!   them
//!
//! ## Quick Start
//!
//! ```rust
//! use dynamis_di::DependencyLibrary;
//!
//! fn shout(message: &String) -> String {
//! 	message.to_uppercase()
//! }
//!
//! let mut library = DependencyLibrary::new();
//! library.add("Hello".to_string()).unwrap();
//!
//! assert!(library.contains_type::<String>());
//! assert_eq!(library.inject(shout).unwrap(), "HELLO");
//! ```
//!
//! Dependencies are matched by exact type; there is no subtype or trait
//! dispatch. Setup-time wiring is assumed single-threaded, and all
//! failures surface immediately — nothing is retried or silently skipped.

pub mod errors;
pub mod inject;
pub mod library;

pub use errors::{DiError, DiResult};
pub use inject::{FromLibrary, InjectFn};
pub use library::DependencyLibrary;
