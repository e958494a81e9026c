use vellum_registry::OptionStore;

use super::{BufferId, WindowId};

/// A window showing one buffer.
#[derive(Debug, Clone)]
pub struct Window {
	pub id: WindowId,
	/// Buffer currently displayed in this window.
	pub buffer: BufferId,
	/// Window-local option values.
	pub options: OptionStore,
	/// Set once teardown has begun; such a window can no longer be entered.
	closing: bool,
	/// Focus counter value when this window was last focused.
	last_focused: u64,
}

impl Window {
	pub(crate) fn new(id: WindowId, buffer: BufferId, options: OptionStore, tick: u64) -> Self {
		Self {
			id,
			buffer,
			options,
			closing: false,
			last_focused: tick,
		}
	}

	pub fn is_closing(&self) -> bool {
		self.closing
	}

	pub(crate) fn mark_closing(&mut self) {
		self.closing = true;
	}

	pub fn last_focused(&self) -> u64 {
		self.last_focused
	}

	pub(crate) fn touch(&mut self, tick: u64) {
		self.last_focused = tick;
	}
}
