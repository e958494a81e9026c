use rustc_hash::FxHashMap as HashMap;
use vellum_registry::{OptionIndex, OptionValue};

use super::{FiletypeContext, FiletypeHook, HookError};

/// Buffer-local values applied per filetype, usually from `[filetype.<name>]`
/// configuration tables.
#[derive(Debug, Clone, Default)]
pub struct FiletypeDefaults {
	by_filetype: HashMap<String, Vec<(OptionIndex, OptionValue)>>,
}

impl FiletypeDefaults {
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a value for `filetype`. Values apply in insertion order.
	pub fn insert(&mut self, filetype: impl Into<String>, idx: OptionIndex, value: OptionValue) {
		self.by_filetype
			.entry(filetype.into())
			.or_default()
			.push((idx, value));
	}

	pub fn get(&self, filetype: &str) -> &[(OptionIndex, OptionValue)] {
		self.by_filetype.get(filetype).map_or(&[], Vec::as_slice)
	}

	pub fn is_empty(&self) -> bool {
		self.by_filetype.is_empty()
	}
}

impl FiletypeHook for FiletypeDefaults {
	fn name(&self) -> &str {
		"filetype-defaults"
	}

	fn attach(&self, ctx: &mut FiletypeContext<'_>, filetype: &str) -> Result<(), HookError> {
		for (idx, value) in self.get(filetype) {
			ctx.set_index(*idx, value.clone())
				.map_err(|e| HookError::new(self.name(), e))?;
		}
		Ok(())
	}
}
