//! Option definitions indexed by name, plus the global value slots.

use rustc_hash::FxHashMap as HashMap;

use crate::options::{
	OptionAttributes, OptionDef, OptionError, OptionIndex, OptionStore, OptionValue,
};


/// Registry of option definitions and their global values.
///
/// Every option has a global slot, initialised from its default. Window and
/// buffer local slots live with the window or buffer that owns them; use
/// [`OptionsRegistry::local_defaults`] to seed a fresh local store.
pub struct OptionsRegistry {
	defs: Vec<OptionDef>,
	by_name: HashMap<&'static str, OptionIndex>,
	global: OptionStore,
}

impl core::fmt::Debug for OptionsRegistry {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("OptionsRegistry")
			.field("len", &self.defs.len())
			.finish()
	}
}

impl Default for OptionsRegistry {
	fn default() -> Self {
		Self::builtin()
	}
}

impl OptionsRegistry {
	/// Builds a registry from definitions.
	///
	/// # Panics
	///
	/// Panics if two definitions share a full or short name.
	pub fn new(defs: Vec<OptionDef>) -> Self {
		let mut by_name = HashMap::default();
		let mut global = OptionStore::new();

		for (i, def) in defs.iter().enumerate() {
			let idx = OptionIndex(i as u32);
			for key in std::iter::once(def.name).chain(def.shortname) {
				if by_name.insert(key, idx).is_some() {
					panic!("duplicate option name {key:?} for {}", def.name);
				}
			}
			global.init(idx, def.default.to_value());
		}

		Self {
			defs,
			by_name,
			global,
		}
	}

	/// Registry populated with the builtin option table.
	pub fn builtin() -> Self {
		Self::new(crate::options::builtins::defs())
	}

	/// Looks up an option by full or short name. Hidden options are found too.
	#[inline]
	pub fn find(&self, name: &str) -> Option<OptionIndex> {
		self.by_name.get(name).copied()
	}

	#[inline]
	pub fn def(&self, idx: OptionIndex) -> &OptionDef {
		&self.defs[idx.as_usize()]
	}

	/// Scopes the option supports; empty for hidden options.
	pub fn attributes(&self, idx: OptionIndex) -> OptionAttributes {
		self.def(idx).attributes()
	}

	pub fn is_hidden(&self, idx: OptionIndex) -> bool {
		self.def(idx).is_hidden()
	}

	pub fn len(&self) -> usize {
		self.defs.len()
	}

	pub fn is_empty(&self) -> bool {
		self.defs.is_empty()
	}

	/// Iterates over all definitions in registration order.
	pub fn iter(&self) -> impl Iterator<Item = (OptionIndex, &OptionDef)> {
		self.defs
			.iter()
			.enumerate()
			.map(|(i, def)| (OptionIndex(i as u32), def))
	}

	/// Global value slots.
	pub fn global(&self) -> &OptionStore {
		&self.global
	}

	pub fn global_mut(&mut self) -> &mut OptionStore {
		&mut self.global
	}

	/// Builds the initial local store for a new window or buffer.
	///
	/// Options local to `scope` that are not global-local start with a copy of
	/// their current global value. Global-local options start unset.
	pub fn local_defaults(&self, scope: crate::options::OptionScope) -> OptionStore {
		let mut store = OptionStore::new();
		for (idx, def) in self.iter() {
			if def.scope == scope
				&& def.copies_global_to_local()
				&& let Some(value) = self.global.get(idx)
			{
				store.init(idx, value.clone());
			}
		}
		store
	}

	/// Validates a value against the definition's type and validator.
	pub fn validate(&self, idx: OptionIndex, value: &OptionValue) -> Result<(), OptionError> {
		let def = self.def(idx);
		if !value.matches_type(def.value_type) {
			return Err(OptionError::TypeMismatch {
				option: def.name.to_string(),
				expected: def.value_type,
				got: value.type_name(),
			});
		}
		if let Some(validator) = def.validator {
			validator(value).map_err(|reason| OptionError::InvalidValue {
				option: def.name.to_string(),
				reason,
			})?;
		}
		Ok(())
	}

	/// Suggests a similar visible option name using fuzzy matching.
	pub fn suggest(&self, name: &str) -> Option<&'static str> {
		self.defs
			.iter()
			.filter(|def| !def.is_hidden())
			.map(|def| def.name)
			.min_by_key(|k| strsim::levenshtein(name, k))
			.filter(|k| strsim::levenshtein(name, k) <= 2)
	}
}
