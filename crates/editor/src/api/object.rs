use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use vellum_registry::OptionValue;

/// A value as exchanged with API clients.
///
/// Only `Boolean`, `Integer` and `String` carry option values. `Nil` on a
/// read means "no local value"; on a write it clears a local value where
/// that is meaningful.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Object {
	#[default]
	Nil,
	Boolean(bool),
	Integer(i64),
	Float(f64),
	String(String),
	Array(Vec<Object>),
	Dictionary(BTreeMap<String, Object>),
}

impl Object {
	pub fn type_name(&self) -> &'static str {
		match self {
			Object::Nil => "Nil",
			Object::Boolean(_) => "Boolean",
			Object::Integer(_) => "Integer",
			Object::Float(_) => "Float",
			Object::String(_) => "String",
			Object::Array(_) => "Array",
			Object::Dictionary(_) => "Dict",
		}
	}

	pub fn is_nil(&self) -> bool {
		matches!(self, Object::Nil)
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("expected valid option type, got {0}")]
pub struct ObjectTypeError(pub &'static str);

impl TryFrom<Object> for OptionValue {
	type Error = ObjectTypeError;

	fn try_from(obj: Object) -> Result<Self, Self::Error> {
		match obj {
			Object::Boolean(b) => Ok(OptionValue::Bool(b)),
			Object::Integer(i) => Ok(OptionValue::Int(i)),
			Object::String(s) => Ok(OptionValue::String(s)),
			other => Err(ObjectTypeError(other.type_name())),
		}
	}
}

impl From<OptionValue> for Object {
	fn from(value: OptionValue) -> Self {
		match value {
			OptionValue::Bool(b) => Object::Boolean(b),
			OptionValue::Int(i) => Object::Integer(i),
			OptionValue::String(s) => Object::String(s),
		}
	}
}

impl From<Option<OptionValue>> for Object {
	fn from(value: Option<OptionValue>) -> Self {
		value.map_or(Object::Nil, Object::from)
	}
}

impl From<bool> for Object {
	fn from(b: bool) -> Self {
		Object::Boolean(b)
	}
}

impl From<i64> for Object {
	fn from(i: i64) -> Self {
		Object::Integer(i)
	}
}

impl From<&str> for Object {
	fn from(s: &str) -> Self {
		Object::String(s.to_string())
	}
}
