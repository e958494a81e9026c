use vellum_registry::OptionStore;

use super::BufferId;

/// A text buffer as far as option resolution is concerned.
#[derive(Debug, Clone, PartialEq)]
pub struct Buffer {
	pub id: BufferId,
	/// Display name, empty for scratch buffers.
	pub name: String,
	/// Buffer-local option values.
	pub options: OptionStore,
	/// Listed buffers show up in the buffer list.
	listed: bool,
	/// Ephemeral buffers never show up in any enumeration.
	ephemeral: bool,
}

impl Buffer {
	pub(crate) fn new(id: BufferId, name: String, options: OptionStore, listed: bool) -> Self {
		Self {
			id,
			name,
			options,
			listed,
			ephemeral: false,
		}
	}

	pub(crate) fn ephemeral(id: BufferId, options: OptionStore) -> Self {
		Self {
			id,
			name: String::new(),
			options,
			listed: false,
			ephemeral: true,
		}
	}

	pub fn is_listed(&self) -> bool {
		self.listed
	}

	pub fn is_ephemeral(&self) -> bool {
		self.ephemeral
	}
}
