//! Widget contract for callback-carrying metadata

use std::any::Any;

/// A widget: an immutable bundle of configuration attached to a callable
/// at export time and consumed later by a widget handler.
///
/// Each widget type defines its own builder for the options it carries;
/// attachment happens through
/// [`Member::with_widget`](crate::Member::with_widget) inside an
/// [`export_member!`](crate::export_member) block. Attaching a widget
/// never changes how the callable itself is invoked — only scanning tools
/// see it.
///
/// Widget lookup on a member requires only [`Any`], so plain metadata
/// structs may be attached too; this trait is the convention for widgets
/// that wrap the callback they describe.
///
/// # Examples
///
/// ```
/// use dynamis_registry::Widget;
///
/// struct Command {
/// 	callback: fn() -> String,
/// 	name: &'static str,
/// 	description: Option<&'static str>,
/// }
///
/// impl Command {
/// 	fn new(name: &'static str, callback: fn() -> String) -> Self {
/// 		Self { callback, name, description: None }
/// 	}
///
/// 	fn description(mut self, text: &'static str) -> Self {
/// 		self.description = Some(text);
/// 		self
/// 	}
/// }
///
/// impl Widget for Command {
/// 	type Callback = fn() -> String;
///
/// 	fn callback(&self) -> &Self::Callback {
/// 		&self.callback
/// 	}
/// }
///
/// fn pong() -> String {
/// 	"pong".to_string()
/// }
///
/// let widget = Command::new("ping", pong).description("Replies with pong");
/// assert_eq!((widget.callback())(), "pong");
/// ```
pub trait Widget: Any {
	/// The callback type this widget wraps.
	type Callback;

	/// The callable this widget was attached for.
	fn callback(&self) -> &Self::Callback;
}
