//! Presentation-facing notifications for option changes.

use vellum_registry::OptionValue;

/// Receives changes to options that affect what is drawn.
///
/// Only the side-effecting setter notifies; reads and temporary context
/// switches never do.
pub trait PresentationObserver {
	/// Called after `name` changed, with its new effective value.
	fn option_changed(&mut self, name: &'static str, value: &OptionValue);
}

/// Observer that ignores every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullPresentation;

impl PresentationObserver for NullPresentation {
	fn option_changed(&mut self, _name: &'static str, _value: &OptionValue) {}
}
