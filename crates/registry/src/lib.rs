//! Option definitions, values and storage slots.
//!
//! The registry knows every option by name, which scopes it can be addressed
//! in and how its values are validated. It owns the global value slots; the
//! editor owns window and buffer slots and combines them through
//! [`options::OptionResolver`].

pub mod options;

pub use options::{
	API_CLIENT_SID, AccessScope, CONFIG_SID, OptionAttributes, OptionDef, OptionDefault,
	OptionError, OptionFlags, OptionIndex, OptionResolver, OptionScope, OptionStore, OptionType,
	OptionValue, OptionsRegistry, SetInfo,
};
