//! Layered option resolution.
//!
//! The [`OptionResolver`] resolves the effective value of an option through
//! the storage layers that can hold it, from most specific to least specific.
//!
//! # Resolution Order
//!
//! 1. Local value (window or buffer store, set via `:setlocal` or inherited)
//! 2. Global value (registry global store)
//! 3. Compile-time default

use crate::options::{OptionDef, OptionIndex, OptionStore, OptionValue};


/// Resolves option values through a layered hierarchy.
///
/// The resolver is stateless and created per-resolution.
#[derive(Default)]
pub struct OptionResolver<'a> {
	local: Option<&'a OptionStore>,
	global: Option<&'a OptionStore>,
}

impl<'a> OptionResolver<'a> {
	/// Creates a new resolver with no stores configured.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a window or buffer local store (highest priority).
	pub fn with_local(mut self, store: &'a OptionStore) -> Self {
		self.local = Some(store);
		self
	}

	/// Adds the global store.
	pub fn with_global(mut self, store: &'a OptionStore) -> Self {
		self.global = Some(store);
		self
	}

	/// Resolves an option through the hierarchy.
	///
	/// Checks local, then global, then falls back to the definition default.
	pub fn resolve(&self, idx: OptionIndex, def: &OptionDef) -> OptionValue {
		if let Some(store) = self.local
			&& let Some(v) = store.get(idx)
		{
			return v.clone();
		}
		if let Some(store) = self.global
			&& let Some(v) = store.get(idx)
		{
			return v.clone();
		}
		def.default.to_value()
	}
}
