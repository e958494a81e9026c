use serde::Serialize;

use super::value::{OptionDefault, OptionType, OptionValue};

pub type OptionValidator = fn(&OptionValue) -> Result<(), String>;

/// Dense index of an option definition inside an [`OptionsRegistry`].
///
/// [`OptionsRegistry`]: crate::options::OptionsRegistry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OptionIndex(pub(crate) u32);

impl OptionIndex {
	#[inline]
	pub fn as_usize(self) -> usize {
		self.0 as usize
	}
}

/// Where the local value of an option lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OptionScope {
	/// Only a global value exists.
	Global,
	/// Each window carries its own value.
	Window,
	/// Each buffer carries its own value.
	Buffer,
}

impl OptionScope {
	/// Scope name as reported by option introspection.
	pub fn api_name(self) -> &'static str {
		match self {
			OptionScope::Global => "global",
			OptionScope::Window => "win",
			OptionScope::Buffer => "buf",
		}
	}

	pub fn is_local(self) -> bool {
		!matches!(self, OptionScope::Global)
	}
}

bitflags::bitflags! {
	/// Static behaviour flags of an option definition.
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
	pub struct OptionFlags: u8 {
		/// Not accessible through the scoped option API.
		const HIDDEN = 1 << 0;
		/// Changing the value affects a presentation surface.
		const REDRAW = 1 << 1;
		/// Value is a comma separated list.
		const COMMA_LIST = 1 << 2;
		/// Value is a list of single character flags.
		const FLAG_LIST = 1 << 3;
		/// List values may not repeat.
		const NO_DUPLICATES = 1 << 4;
	}
}

bitflags::bitflags! {
	/// Scopes an option can be addressed in.
	///
	/// Empty for hidden options, which makes them indistinguishable from
	/// unknown ones at the API boundary.
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
	pub struct OptionAttributes: u8 {
		const GLOBAL = 1 << 0;
		const WINDOW = 1 << 1;
		const BUFFER = 1 << 2;
	}
}

impl OptionAttributes {
	/// Describes the supported scopes, e.g. `"global window-local "`.
	///
	/// Every word carries a trailing space so the result can be spliced in
	/// front of the word "option".
	pub fn describe(self) -> String {
		let mut out = String::new();
		if self.contains(Self::GLOBAL) {
			out.push_str("global ");
		}
		if self.contains(Self::BUFFER) {
			out.push_str("buffer-local ");
		} else if self.contains(Self::WINDOW) {
			out.push_str("window-local ");
		}
		out
	}
}

/// Definition of a configurable option.
#[derive(Clone, Copy)]
pub struct OptionDef {
	pub name: &'static str,
	pub shortname: Option<&'static str>,
	pub description: &'static str,
	pub value_type: OptionType,
	pub default: OptionDefault,
	pub scope: OptionScope,
	/// A window or buffer option that also keeps an independent global value
	/// which the local value only shadows when set.
	pub global_local: bool,
	pub flags: OptionFlags,
	pub validator: Option<OptionValidator>,
}

impl core::fmt::Debug for OptionDef {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("OptionDef")
			.field("name", &self.name)
			.field("scope", &self.scope)
			.field("global_local", &self.global_local)
			.finish()
	}
}

impl OptionDef {
	pub fn new(name: &'static str, scope: OptionScope, default: OptionDefault) -> Self {
		Self {
			name,
			shortname: None,
			description: "",
			value_type: default.value_type(),
			default,
			scope,
			global_local: false,
			flags: OptionFlags::empty(),
			validator: None,
		}
	}

	pub fn short(mut self, shortname: &'static str) -> Self {
		self.shortname = Some(shortname);
		self
	}

	pub fn describe(mut self, description: &'static str) -> Self {
		self.description = description;
		self
	}

	pub fn global_local(mut self) -> Self {
		debug_assert!(self.scope.is_local(), "global-local requires a local scope");
		self.global_local = true;
		self
	}

	pub fn flags(mut self, flags: OptionFlags) -> Self {
		self.flags |= flags;
		self
	}

	pub fn validator(mut self, validator: OptionValidator) -> Self {
		self.validator = Some(validator);
		self
	}

	pub fn is_hidden(&self) -> bool {
		self.flags.contains(OptionFlags::HIDDEN)
	}

	/// Scopes this option can be addressed in.
	pub fn attributes(&self) -> OptionAttributes {
		if self.is_hidden() {
			return OptionAttributes::empty();
		}
		let mut attrs = OptionAttributes::empty();
		if self.scope == OptionScope::Global || self.global_local {
			attrs |= OptionAttributes::GLOBAL;
		}
		match self.scope {
			OptionScope::Window => attrs |= OptionAttributes::WINDOW,
			OptionScope::Buffer => attrs |= OptionAttributes::BUFFER,
			OptionScope::Global => {}
		}
		attrs
	}

	/// Whether local stores start out with a copy of the global value.
	///
	/// Global-local options start unset so the global value shows through.
	pub fn copies_global_to_local(&self) -> bool {
		self.scope.is_local() && !self.global_local
	}
}
