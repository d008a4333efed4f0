//! Module-path traversal over the export registry

use crate::errors::{RegistryError, RegistryResult};
use crate::member::{member_index, within};

/// Returns the parent of a `::`-separated module path.
///
/// # Examples
///
/// ```
/// use dynamis_registry::parent_module;
///
/// assert_eq!(parent_module("bot::commands::admin").unwrap(), "bot::commands");
/// assert!(parent_module("bot").is_err());
/// ```
pub fn parent_module(path: &str) -> RegistryResult<&str> {
	path.rfind("::")
		.map(|index| &path[..index])
		.ok_or_else(|| RegistryError::NoParent {
			module: path.to_string(),
		})
}

/// Whether any member is exported under `path` or below it.
pub fn module_exists(path: &str) -> bool {
	member_index()
		.iter()
		.any(|member| within(member.module, path, true))
}

/// Whether `path` has registered submodules.
///
/// A module whose members all live directly under it is not a package.
pub fn is_package(path: &str) -> bool {
	member_index()
		.iter()
		.any(|member| member.module != path && within(member.module, path, true))
}

/// The direct submodule paths of `path`, sorted and deduplicated.
///
/// A path with no submodules yields an empty list.
pub fn submodules_of(path: &str) -> Vec<&'static str> {
	let mut children: Vec<&'static str> = member_index()
		.iter()
		.filter_map(|member| {
			let rest = member.module.strip_prefix(path)?.strip_prefix("::")?;
			let segment_end = rest.find("::").unwrap_or(rest.len());
			// Slice the child path out of the member's static module path.
			Some(&member.module[..path.len() + 2 + segment_end])
		})
		.collect();
	children.sort_unstable();
	children.dedup();
	children
}
