//! Options registry

pub mod builtins;
pub mod def;
pub mod parse;
mod registry;
mod resolver;
mod store;
pub mod validators;
mod value;

pub use def::{
	OptionAttributes, OptionDef, OptionFlags, OptionIndex, OptionScope, OptionValidator,
};
pub use registry::OptionsRegistry;
pub use resolver::OptionResolver;
pub use store::{API_CLIENT_SID, CONFIG_SID, OptionStore, SetInfo};
use thiserror::Error;
pub use value::{OptionDefault, OptionType, OptionValue};

/// Which value(s) of an option an access touches.
///
/// Mirrors `:set`, `:setlocal` and `:setglobal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccessScope {
	/// Reads the local value if present, else the global one. Writes both
	/// (for global-local options: writes global and clears the local value).
	#[default]
	Effective,
	/// Only the local value of the current window or buffer.
	Local,
	/// Only the global value.
	Global,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionError {
	#[error("unknown option: {0}")]
	UnknownOption(String),
	#[error("type mismatch for option '{option}': expected {expected}, got {got}")]
	TypeMismatch {
		option: String,
		expected: OptionType,
		got: &'static str,
	},
	#[error("invalid value for option '{option}': {reason}")]
	InvalidValue { option: String, reason: String },
	/// The current window or buffer that would hold a local value is gone.
	#[error("no current {scope} to hold the local value of '{option}'")]
	NoLocalStore { option: String, scope: &'static str },
}
