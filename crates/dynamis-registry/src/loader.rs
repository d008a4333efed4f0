//! Scanning loader with selector/handler dispatch

use crate::errors::{RegistryError, RegistryResult};
use crate::member::{Member, member_index, within};
use std::any::{Any, type_name};

/// Predicate over `(name, member)` deciding whether a handler applies.
pub type Selector = Box<dyn Fn(&str, &Member) -> bool>;

/// Callback invoked once per matching scanned member, for side effects.
pub type Handler = Box<dyn Fn(&str, &Member)>;

/// Scans exported modules and dispatches their members to registered
/// handlers.
///
/// Handlers are kept in registration order and run in that order for each
/// scanned member. Every call to [`load_module`](Self::load_module)
/// re-scans; there is no hidden module cache.
///
/// # Examples
///
/// ```
/// use dynamis_registry::{DynamicLoader, Member, export_member};
///
/// export_member!("app::constants", answer, || Member::new(42u32));
///
/// let mut loader = DynamicLoader::new();
/// loader.register_handler_with(
/// 	|_name, member| member.downcast_ref::<u32>().is_some(),
/// 	|name, member| {
/// 		let value = member.downcast_ref::<u32>().unwrap();
/// 		println!("{name} = {value}");
/// 	},
/// );
/// loader.load_module("app::constants").unwrap();
/// ```
#[derive(Default)]
pub struct DynamicLoader {
	handlers: Vec<(Selector, Handler)>,
}

impl DynamicLoader {
	pub fn new() -> Self {
		Self {
			handlers: Vec::new(),
		}
	}

	/// Registers a handler that applies to every scanned member.
	pub fn register_handler(&mut self, handler: impl Fn(&str, &Member) + 'static) {
		self.register_handler_with(|_, _| true, handler);
	}

	/// Registers a handler gated by a selector.
	pub fn register_handler_with(
		&mut self,
		selector: impl Fn(&str, &Member) -> bool + 'static,
		handler: impl Fn(&str, &Member) + 'static,
	) {
		self.handlers.push((Box::new(selector), Box::new(handler)));
	}

	/// Registers a handler for members carrying a widget of type `W`.
	///
	/// The handler receives the attached widget instance, not the raw
	/// member.
	pub fn register_widget_handler<W: Any>(&mut self, handler: impl Fn(&str, &W) + 'static) {
		self.register_handler_with(
			|_, member| member.has_widget::<W>(),
			move |name, member| {
				if let Some(widget) = member.widget::<W>() {
					tracing::debug!(
						member = name,
						widget = type_name::<W>(),
						"dispatching widget handler"
					);
					handler(name, widget);
				}
			},
		);
	}

	/// Scans the members exported directly under `path` and returns how
	/// many were scanned.
	///
	/// Fails with [`RegistryError::ModuleNotFound`] when nothing is
	/// exported under `path` or below it. A package path with members
	/// only in submodules scans zero members; use
	/// [`load_module_recursive`](Self::load_module_recursive) to descend.
	pub fn load_module(&self, path: &str) -> RegistryResult<usize> {
		self.scan(path, false)
	}

	/// Scans `path` and every module below it.
	pub fn load_module_recursive(&self, path: &str) -> RegistryResult<usize> {
		self.scan(path, true)
	}

	fn scan(&self, path: &str, recursive: bool) -> RegistryResult<usize> {
		if !crate::utils::module_exists(path) {
			return Err(RegistryError::ModuleNotFound {
				path: path.to_string(),
			});
		}

		let members: Vec<_> = member_index()
			.iter()
			.filter(|member| within(member.module, path, recursive))
			.collect();
		tracing::debug!(
			module = path,
			members = members.len(),
			recursive,
			"scanning module"
		);

		for exported in &members {
			let member = (exported.build)();
			for (selector, handler) in &self.handlers {
				if selector(exported.name, &member) {
					handler(exported.name, &member);
				}
			}
		}
		Ok(members.len())
	}
}
