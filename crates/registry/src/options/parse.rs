//! Shared parsing utilities for option values.
//!
//! Used by configuration loading and the command line front end.

use crate::options::{OptionError, OptionType, OptionValue, OptionsRegistry};

/// Parse a string value into an [`OptionValue`] based on the option's declared type.
pub fn parse_value(reg: &OptionsRegistry, name: &str, value: &str) -> Result<OptionValue, OptionError> {
	let idx = reg
		.find(name)
		.filter(|&idx| !reg.is_hidden(idx))
		.ok_or_else(|| OptionError::UnknownOption(name.to_string()))?;
	let def = reg.def(idx);

	let opt_value = parse_value_for_type(value, def.value_type).map_err(|reason| {
		OptionError::InvalidValue {
			option: def.name.to_string(),
			reason,
		}
	})?;

	reg.validate(idx, &opt_value)?;
	Ok(opt_value)
}

/// Parse a string value into an [`OptionValue`] for a known type.
pub fn parse_value_for_type(value: &str, ty: OptionType) -> Result<OptionValue, String> {
	match ty {
		OptionType::Bool => parse_bool(value).map(OptionValue::Bool),
		OptionType::Int => parse_int(value).map(OptionValue::Int),
		OptionType::String => Ok(OptionValue::String(value.to_string())),
	}
}

/// Parse a boolean value from common string representations.
pub fn parse_bool(value: &str) -> Result<bool, String> {
	match value.to_lowercase().as_str() {
		"true" | "1" | "yes" | "on" => Ok(true),
		"false" | "0" | "no" | "off" => Ok(false),
		_ => Err(format!(
			"invalid boolean: '{value}' (expected true/false, yes/no, on/off, 1/0)"
		)),
	}
}

/// Parse an integer value.
pub fn parse_int(value: &str) -> Result<i64, String> {
	value
		.parse::<i64>()
		.map_err(|_| format!("invalid integer: '{value}'"))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_by_declared_type() {
		let reg = OptionsRegistry::builtin();
		assert_eq!(parse_value(&reg, "ts", "4"), Ok(OptionValue::Int(4)));
		assert_eq!(parse_value(&reg, "number", "on"), Ok(OptionValue::Bool(true)));
		assert_eq!(
			parse_value(&reg, "filetype", "rust"),
			Ok(OptionValue::from("rust"))
		);
	}

	#[test]
	fn test_parse_rejects_hidden_and_bad_input() {
		let reg = OptionsRegistry::builtin();
		assert_eq!(
			parse_value(&reg, "compatible", "true"),
			Err(OptionError::UnknownOption("compatible".into()))
		);
		assert!(matches!(
			parse_value(&reg, "tabstop", "wide"),
			Err(OptionError::InvalidValue { .. })
		));
		assert!(parse_bool("maybe").is_err());
	}
}
