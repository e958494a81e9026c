//! Standard validators for option values.
//!
//! These functions can be used as validators in [`OptionDef`](crate::options::OptionDef).

use crate::options::OptionValue;


/// Validates that an integer is positive (>= 1).
pub fn positive_int(value: &OptionValue) -> Result<(), String> {
	match value {
		OptionValue::Int(n) if *n >= 1 => Ok(()),
		OptionValue::Int(n) => Err(format!("must be at least 1, got {n}")),
		_ => Err("expected integer".to_string()),
	}
}

/// Validates that an integer is zero or positive.
pub fn non_negative_int(value: &OptionValue) -> Result<(), String> {
	match value {
		OptionValue::Int(n) if *n >= 0 => Ok(()),
		OptionValue::Int(n) => Err(format!("must not be negative, got {n}")),
		_ => Err("expected integer".to_string()),
	}
}

/// Validates the statusline visibility mode (0 to 3).
pub fn laststatus(value: &OptionValue) -> Result<(), String> {
	match value {
		OptionValue::Int(0..=3) => Ok(()),
		OptionValue::Int(n) => Err(format!("must be between 0 and 3, got {n}")),
		_ => Err("expected integer".to_string()),
	}
}

pub fn background(value: &OptionValue) -> Result<(), String> {
	one_of(value, &["dark", "light"])
}

pub fn buftype(value: &OptionValue) -> Result<(), String> {
	one_of(
		value,
		&["", "nofile", "nowrite", "acwrite", "help", "quickfix", "terminal", "prompt"],
	)
}

pub fn bufhidden(value: &OptionValue) -> Result<(), String> {
	one_of(value, &["", "hide", "unload", "delete", "wipe"])
}

/// Validates that a flag list only repeats no flag.
pub fn unique_flags(value: &OptionValue) -> Result<(), String> {
	let Some(s) = value.as_str() else {
		return Err("expected string".to_string());
	};
	for (i, c) in s.char_indices() {
		if s[..i].contains(c) {
			return Err(format!("duplicate flag '{c}'"));
		}
	}
	Ok(())
}

fn one_of(value: &OptionValue, allowed: &[&str]) -> Result<(), String> {
	match value.as_str() {
		Some(s) if allowed.contains(&s) => Ok(()),
		Some(s) => Err(format!("invalid value '{s}'")),
		None => Err("expected string".to_string()),
	}
}
