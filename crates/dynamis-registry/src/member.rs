//! Exported members and the link-time registry

use once_cell::sync::Lazy;
use std::any::{Any, TypeId};

/// One scanned module binding: a dynamically typed value plus the widget
/// instances attached to it.
///
/// Widgets are the side-table replacement for stashing metadata on a
/// callable: at most one widget per concrete widget type is attached, and
/// attaching a second of the same type replaces the first (last write
/// wins). Distinct widget types coexist, so builders may stack.
pub struct Member {
	value: Box<dyn Any>,
	widgets: Vec<(TypeId, Box<dyn Any>)>,
}

impl Member {
	/// Wraps an exported value.
	///
	/// # Examples
	///
	/// ```
	/// use dynamis_registry::Member;
	///
	/// let member = Member::new(42u32);
	/// assert_eq!(member.downcast_ref::<u32>(), Some(&42));
	/// assert_eq!(member.downcast_ref::<i64>(), None);
	/// ```
	pub fn new<T: Any>(value: T) -> Self {
		Self {
			value: Box::new(value),
			widgets: Vec::new(),
		}
	}

	/// Attaches a widget instance, replacing any existing widget of the
	/// same concrete type.
	pub fn with_widget<W: Any>(mut self, widget: W) -> Self {
		let id = TypeId::of::<W>();
		if let Some(slot) = self.widgets.iter_mut().find(|(existing, _)| *existing == id) {
			slot.1 = Box::new(widget);
		} else {
			self.widgets.push((id, Box::new(widget)));
		}
		self
	}

	/// The exported value.
	pub fn value(&self) -> &dyn Any {
		self.value.as_ref()
	}

	/// The exported value, downcast to a concrete type.
	pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
		self.value.downcast_ref()
	}

	/// The attached widget of type `W`, if any.
	pub fn widget<W: Any>(&self) -> Option<&W> {
		self.widgets
			.iter()
			.find(|(id, _)| *id == TypeId::of::<W>())
			.and_then(|(_, widget)| widget.downcast_ref())
	}

	pub fn has_widget<W: Any>(&self) -> bool {
		self.widget::<W>().is_some()
	}
}

/// A compile-time export: a named binding under a module path, built on
/// demand when the module is scanned.
///
/// The builder is a plain `fn` pointer so submissions stay
/// const-constructible; the boxed value and widgets are created per scan.
pub struct ExportedMember {
	pub module: &'static str,
	pub name: &'static str,
	pub build: fn() -> Member,
}

inventory::collect!(ExportedMember);

/// Exports a named member under a module path.
///
/// # Examples
///
/// ```rust,ignore
/// use dynamis_registry::{export_member, Member};
///
/// fn greet(name: &str) -> String {
/// 	format!("Hello, {name}!")
/// }
///
/// export_member!("bot::commands", greet, || {
/// 	Member::new(greet as fn(&str) -> String)
/// 		.with_widget(Command::new("greet", greet).description("Greets someone"))
/// });
/// ```
#[macro_export]
macro_rules! export_member {
	($module:expr, $name:ident, $build:expr) => {
		$crate::inventory::submit! {
			$crate::ExportedMember {
				module: $module,
				name: ::core::stringify!($name),
				build: $build,
			}
		}
	};
}

static MEMBER_INDEX: Lazy<Vec<&'static ExportedMember>> = Lazy::new(|| {
	let mut members: Vec<_> = inventory::iter::<ExportedMember>().collect();
	members.sort_by_key(|member| (member.module, member.name));
	members
});

/// All exported members, sorted by `(module, name)` so scans are
/// deterministic regardless of link order.
pub(crate) fn member_index() -> &'static [&'static ExportedMember] {
	&MEMBER_INDEX
}

/// Whether `module` is `path` itself, or a descendant when `recursive`.
pub(crate) fn within(module: &str, path: &str, recursive: bool) -> bool {
	module == path
		|| (recursive
			&& module
				.strip_prefix(path)
				.is_some_and(|rest| rest.starts_with("::")))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[derive(Debug, PartialEq)]
	struct Tag(&'static str);

	#[derive(Debug, PartialEq)]
	struct Badge(u8);

	#[test]
	fn same_widget_type_overwrites() {
		let member = Member::new(()).with_widget(Tag("first")).with_widget(Tag("second"));
		assert_eq!(member.widget::<Tag>(), Some(&Tag("second")));
	}

	#[test]
	fn distinct_widget_types_coexist() {
		let member = Member::new(()).with_widget(Tag("t")).with_widget(Badge(3));
		assert_eq!(member.widget::<Tag>(), Some(&Tag("t")));
		assert_eq!(member.widget::<Badge>(), Some(&Badge(3)));
		assert!(!member.has_widget::<String>());
	}

	#[test]
	fn within_matches_exact_and_descendants() {
		assert!(within("bot", "bot", false));
		assert!(!within("bot::commands", "bot", false));
		assert!(within("bot::commands", "bot", true));
		assert!(within("bot::tasks::cleanup", "bot", true));
		// Sibling prefixes are not descendants.
		assert!(!within("bottle", "bot", true));
	}
}
