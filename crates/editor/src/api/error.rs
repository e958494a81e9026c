use serde::{Serialize, Serializer};
use thiserror::Error;
use vellum_registry::OptionError;

use super::object::ObjectTypeError;
use crate::context::SwitchError;
use crate::hooks::HookError;
use crate::workspace::WorkspaceError;

/// Stable classification of an [`ApiError`], suitable for clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
	InvalidParameterCombination,
	UnknownOption,
	UnsupportedScope,
	HandleNotFound,
	SwitchFailure,
	ValueTypeMismatch,
	InvalidValue,
	HookFailure,
	EphemeralBufferAllocationFailure,
}

/// Errors returned by the option API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
	#[error("invalid 'scope': expected 'local' or 'global', got '{0}'")]
	InvalidScope(String),
	#[error("{0}")]
	ConflictingParameters(&'static str),
	#[error("unknown option '{name}'{}", suggestion.as_ref().map(|s| format!(" (did you mean '{s}'?)")).unwrap_or_default())]
	UnknownOption {
		name: String,
		suggestion: Option<&'static str>,
	},
	/// `supported` already ends in a space, e.g. `"global "`.
	#[error("'{param}' cannot be passed for {supported}option '{name}'")]
	UnsupportedScope {
		param: &'static str,
		supported: String,
		name: String,
	},
	#[error("{0}")]
	HandleNotFound(WorkspaceError),
	#[error("problem while switching context: {0}")]
	SwitchFailure(#[from] SwitchError),
	#[error("invalid 'value': {0}")]
	InvalidValueType(#[from] ObjectTypeError),
	#[error(transparent)]
	Option(#[from] OptionError),
	#[error(transparent)]
	Hook(#[from] HookError),
	#[error("could not create internal buffer: {0}")]
	EphemeralBufferAllocation(WorkspaceError),
}

impl ApiError {
	pub fn kind(&self) -> ErrorKind {
		match self {
			ApiError::InvalidScope(_) | ApiError::ConflictingParameters(_) => {
				ErrorKind::InvalidParameterCombination
			}
			ApiError::UnknownOption { .. } | ApiError::Option(OptionError::UnknownOption(_)) => {
				ErrorKind::UnknownOption
			}
			ApiError::UnsupportedScope { .. } => ErrorKind::UnsupportedScope,
			ApiError::HandleNotFound(_) | ApiError::Option(OptionError::NoLocalStore { .. }) => {
				ErrorKind::HandleNotFound
			}
			ApiError::SwitchFailure(_) => ErrorKind::SwitchFailure,
			ApiError::InvalidValueType(_) | ApiError::Option(OptionError::TypeMismatch { .. }) => {
				ErrorKind::ValueTypeMismatch
			}
			ApiError::Option(OptionError::InvalidValue { .. }) => ErrorKind::InvalidValue,
			ApiError::Hook(_) => ErrorKind::HookFailure,
			ApiError::EphemeralBufferAllocation(_) => ErrorKind::EphemeralBufferAllocationFailure,
		}
	}

	/// Wire form: `{"kind": ..., "message": ...}`.
	pub fn to_response(&self) -> ErrorResponse {
		ErrorResponse {
			kind: self.kind(),
			message: self.to_string(),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
	pub kind: ErrorKind,
	pub message: String,
}

impl Serialize for ApiError {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		self.to_response().serialize(serializer)
	}
}
