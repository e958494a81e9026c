//! TOML configuration.
//!
//! ```toml
//! [options]
//! tabstop = 4
//!
//! [filetype.rust]
//! shiftwidth = 4
//!
//! [limits]
//! max_buffers = 4096
//! ```
//!
//! `[options]` sets initial global values. `[filetype.<name>]` tables become
//! buffer-local defaults applied by the [`FiletypeDefaults`] hook when a
//! buffer gets that filetype.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use vellum_registry::{OptionError, OptionIndex, OptionScope, OptionValue, OptionsRegistry};

use crate::hooks::FiletypeDefaults;
use crate::workspace::DEFAULT_MAX_BUFFERS;


/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	#[error("I/O error reading {path}: {error}")]
	Io {
		path: PathBuf,
		error: std::io::Error,
	},

	#[error("unknown option: {key}{}", suggestion.as_ref().map(|s| format!(" (did you mean '{s}'?)")).unwrap_or_default())]
	UnknownOption {
		key: String,
		suggestion: Option<&'static str>,
	},

	#[error("type mismatch for option '{option}': expected {expected}, got {got}")]
	OptionTypeMismatch {
		option: String,
		expected: &'static str,
		got: &'static str,
	},

	#[error("invalid value for option '{option}': {reason}")]
	InvalidValue { option: String, reason: String },
}

/// Non-fatal problem found while resolving configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
	/// An option was placed in a table that cannot hold it.
	ScopeMismatch {
		option: String,
		/// Table the option was found in, e.g. `"[filetype.rust]"`.
		found_in: String,
		expected: &'static str,
	},
}

impl std::fmt::Display for ConfigWarning {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			ConfigWarning::ScopeMismatch {
				option,
				found_in,
				expected,
			} => write!(
				f,
				"'{option}' in {found_in} will be ignored (should be in {expected})"
			),
		}
	}
}

/// Raw configuration file contents.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
	pub options: BTreeMap<String, toml::Value>,
	pub filetype: BTreeMap<String, BTreeMap<String, toml::Value>>,
	pub limits: Limits,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Limits {
	/// Cap on live buffers, probe buffers included.
	pub max_buffers: usize,
}

impl Default for Limits {
	fn default() -> Self {
		Self {
			max_buffers: DEFAULT_MAX_BUFFERS,
		}
	}
}

/// Configuration checked against an option registry.
#[derive(Debug)]
pub struct ParsedConfig {
	/// Initial global values.
	pub globals: Vec<(OptionIndex, OptionValue)>,
	pub filetypes: FiletypeDefaults,
	pub limits: Limits,
	pub warnings: Vec<ConfigWarning>,
}

impl Config {
	pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
		Ok(toml::from_str(text)?)
	}

	pub fn load(path: &Path) -> Result<Self, ConfigError> {
		let text = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		Self::from_toml(&text)
	}

	/// Checks every key and value against `registry`.
	///
	/// # Errors
	///
	/// Unknown keys, values of the wrong type, and values the option's
	/// validator rejects are errors. Non-buffer options inside a filetype
	/// table are skipped with a warning.
	pub fn resolve(&self, registry: &OptionsRegistry) -> Result<ParsedConfig, ConfigError> {
		let mut warnings = Vec::new();

		let globals = self
			.options
			.iter()
			.map(|(key, value)| parse_entry(registry, key, value))
			.collect::<Result<Vec<_>, _>>()?;

		let mut filetypes = FiletypeDefaults::new();
		for (filetype, table) in &self.filetype {
			for (key, value) in table {
				let (idx, value) = parse_entry(registry, key, value)?;
				if registry.def(idx).scope != OptionScope::Buffer {
					warnings.push(ConfigWarning::ScopeMismatch {
						option: key.clone(),
						found_in: format!("[filetype.{filetype}]"),
						expected: "[options]",
					});
					continue;
				}
				filetypes.insert(filetype.clone(), idx, value);
			}
		}

		Ok(ParsedConfig {
			globals,
			filetypes,
			limits: self.limits,
			warnings,
		})
	}
}

fn parse_entry(
	registry: &OptionsRegistry,
	key: &str,
	value: &toml::Value,
) -> Result<(OptionIndex, OptionValue), ConfigError> {
	let idx = registry
		.find(key)
		.filter(|&idx| !registry.is_hidden(idx))
		.ok_or_else(|| ConfigError::UnknownOption {
			key: key.to_string(),
			suggestion: registry.suggest(key),
		})?;
	let def = registry.def(idx);

	let opt_value = match value {
		toml::Value::Boolean(b) => Some(OptionValue::Bool(*b)),
		toml::Value::Integer(i) => Some(OptionValue::Int(*i)),
		toml::Value::String(s) => Some(OptionValue::String(s.clone())),
		_ => None,
	}
	.filter(|v| v.matches_type(def.value_type))
	.ok_or_else(|| ConfigError::OptionTypeMismatch {
		option: key.to_string(),
		expected: def.value_type.name(),
		got: value.type_str(),
	})?;

	registry
		.validate(idx, &opt_value)
		.map_err(|e| ConfigError::InvalidValue {
			option: key.to_string(),
			reason: match e {
				OptionError::InvalidValue { reason, .. } => reason,
				other => other.to_string(),
			},
		})?;
	Ok((idx, opt_value))
}
