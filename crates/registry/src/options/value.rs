use serde::Serialize;

/// The value of an option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum OptionValue {
	/// Boolean value (true/false).
	Bool(bool),
	/// Integer value.
	Int(i64),
	/// String value.
	String(String),
}

impl OptionValue {
	/// Returns the boolean value if this is a `Bool` variant.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			OptionValue::Bool(v) => Some(*v),
			_ => None,
		}
	}

	/// Returns the integer value if this is an `Int` variant.
	pub fn as_int(&self) -> Option<i64> {
		match self {
			OptionValue::Int(v) => Some(*v),
			_ => None,
		}
	}

	/// Returns the string value if this is a `String` variant.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			OptionValue::String(v) => Some(v),
			_ => None,
		}
	}

	/// Returns true if this value matches the given type.
	pub fn matches_type(&self, ty: OptionType) -> bool {
		self.value_type() == ty
	}

	/// Returns the [`OptionType`] of this value.
	pub fn value_type(&self) -> OptionType {
		match self {
			OptionValue::Bool(_) => OptionType::Bool,
			OptionValue::Int(_) => OptionType::Int,
			OptionValue::String(_) => OptionType::String,
		}
	}

	/// Returns the type name of this value.
	pub fn type_name(&self) -> &'static str {
		self.value_type().name()
	}
}

impl From<bool> for OptionValue {
	fn from(v: bool) -> Self {
		OptionValue::Bool(v)
	}
}

impl From<i64> for OptionValue {
	fn from(v: i64) -> Self {
		OptionValue::Int(v)
	}
}

impl From<String> for OptionValue {
	fn from(v: String) -> Self {
		OptionValue::String(v)
	}
}

impl From<&str> for OptionValue {
	fn from(v: &str) -> Self {
		OptionValue::String(v.to_string())
	}
}

/// The type of an option's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
	/// Boolean type.
	Bool,
	/// Integer type.
	Int,
	/// String type.
	String,
}

impl OptionType {
	/// Short type name used in error messages.
	pub fn name(self) -> &'static str {
		match self {
			OptionType::Bool => "bool",
			OptionType::Int => "int",
			OptionType::String => "string",
		}
	}

	/// Type name as reported by option introspection.
	pub fn api_name(self) -> &'static str {
		match self {
			OptionType::Bool => "boolean",
			OptionType::Int => "number",
			OptionType::String => "string",
		}
	}
}

impl core::fmt::Display for OptionType {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.write_str(self.name())
	}
}

/// Typed carrier for option default values.
///
/// Unlike [`OptionValue`], this encodes the variant type at the Rust level via
/// function pointers, so a definition's default always matches its declared
/// [`OptionType`] and no value has to be allocated until it is needed.
#[derive(Clone, Copy)]
pub enum OptionDefault {
	/// Boolean default value factory.
	Bool(fn() -> bool),
	/// Integer default value factory.
	Int(fn() -> i64),
	/// String default value factory.
	String(fn() -> String),
}

impl core::fmt::Debug for OptionDefault {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		match self {
			OptionDefault::Bool(_) => f.write_str("OptionDefault::Bool(..)"),
			OptionDefault::Int(_) => f.write_str("OptionDefault::Int(..)"),
			OptionDefault::String(_) => f.write_str("OptionDefault::String(..)"),
		}
	}
}

impl OptionDefault {
	/// Returns the [`OptionType`] produced by this default.
	pub fn value_type(self) -> OptionType {
		match self {
			OptionDefault::Bool(_) => OptionType::Bool,
			OptionDefault::Int(_) => OptionType::Int,
			OptionDefault::String(_) => OptionType::String,
		}
	}

	/// Invokes the factory function and returns the value as an [`OptionValue`].
	pub fn to_value(self) -> OptionValue {
		match self {
			OptionDefault::Bool(f) => OptionValue::Bool(f()),
			OptionDefault::Int(f) => OptionValue::Int(f()),
			OptionDefault::String(f) => OptionValue::String(f()),
		}
	}
}
