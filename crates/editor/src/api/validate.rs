//! Request validation: turns raw request parameters into a [`ResolvedScope`].
//!
//! Checks run in a fixed order so the same bad request always produces the
//! same error:
//!
//! 1. `scope` is absent, `"local"` or `"global"`
//! 2. `filetype` is alone, and only used for reads
//! 3. `scope` and `buf` are exclusive
//! 4. `win` and `buf` are exclusive
//! 5. `win`/`buf` handles resolve
//! 6. the option exists and is not hidden
//! 7. the option supports the addressed scope

use serde::{Deserialize, Serialize};
use vellum_registry::{AccessScope, OptionAttributes, OptionIndex};

use super::ApiError;
use crate::Editor;
use crate::context::ScopeTarget;
use crate::workspace::{BufferId, WindowId};

/// Parameters accompanying an option get, set or info request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OptionRequest {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub scope: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub win: Option<WindowId>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub buf: Option<BufferId>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub filetype: Option<String>,
}

impl OptionRequest {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn scope(mut self, scope: impl Into<String>) -> Self {
		self.scope = Some(scope.into());
		self
	}

	pub fn win(mut self, win: WindowId) -> Self {
		self.win = Some(win);
		self
	}

	pub fn buf(mut self, buf: BufferId) -> Self {
		self.buf = Some(buf);
		self
	}

	pub fn filetype(mut self, filetype: impl Into<String>) -> Self {
		self.filetype = Some(filetype.into());
		self
	}
}

/// What a validated request is allowed to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
	Get,
	Set,
	Info,
}

/// A fully validated request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedScope {
	pub option: OptionIndex,
	/// Where the access runs.
	pub target: ScopeTarget,
	/// `Effective` when the caller gave no scope and no buffer.
	pub scope: AccessScope,
	/// Probe a fresh buffer of this filetype instead of a real one.
	pub filetype: Option<String>,
}

impl ResolvedScope {
	/// Scope a write must use.
	///
	/// A write addressed at a window with no explicit scope only sets the
	/// window-local value of an option that also has a global value, so it
	/// does not leak into other windows.
	pub fn write_scope(&self, attributes: OptionAttributes) -> AccessScope {
		match (self.target, self.scope) {
			(ScopeTarget::Window(_), AccessScope::Effective)
				if attributes.contains(OptionAttributes::GLOBAL) =>
			{
				AccessScope::Local
			}
			(_, scope) => scope,
		}
	}
}

/// Validates `opts` for an access to option `name`.
pub fn validate(
	editor: &Editor,
	name: &str,
	opts: &OptionRequest,
	access: Access,
) -> Result<ResolvedScope, ApiError> {
	let mut scope = match opts.scope.as_deref() {
		None => AccessScope::Effective,
		Some("local") => AccessScope::Local,
		Some("global") => AccessScope::Global,
		Some(other) => return Err(ApiError::InvalidScope(other.to_string())),
	};

	if opts.filetype.is_some() {
		if opts.scope.is_some() || opts.win.is_some() || opts.buf.is_some() {
			return Err(ApiError::ConflictingParameters(
				"cannot use 'filetype' with 'scope', 'buf' or 'win'",
			));
		}
		if access != Access::Get {
			return Err(ApiError::ConflictingParameters(
				"'filetype' can only be used when getting an option",
			));
		}
	}
	if opts.scope.is_some() && opts.buf.is_some() {
		return Err(ApiError::ConflictingParameters(
			"cannot use both 'scope' and 'buf'",
		));
	}
	if opts.win.is_some() && opts.buf.is_some() {
		return Err(ApiError::ConflictingParameters(
			"cannot use both 'buf' and 'win'",
		));
	}

	let target = if let Some(win) = opts.win {
		editor
			.workspace
			.resolve_window(win)
			.map_err(ApiError::HandleNotFound)?;
		ScopeTarget::Window(win)
	} else if let Some(buf) = opts.buf {
		editor
			.workspace
			.resolve_buffer(buf)
			.map_err(ApiError::HandleNotFound)?;
		scope = AccessScope::Local;
		ScopeTarget::Buffer(buf)
	} else {
		ScopeTarget::Global
	};

	let option = editor
		.registry
		.find(name)
		.filter(|&idx| !editor.registry.is_hidden(idx))
		.ok_or_else(|| ApiError::UnknownOption {
			name: name.to_string(),
			suggestion: editor.registry.suggest(name),
		})?;

	let attributes = editor.registry.attributes(option);
	let required = match target {
		ScopeTarget::Global => None,
		ScopeTarget::Window(_) => Some(("win", OptionAttributes::WINDOW)),
		ScopeTarget::Buffer(_) => Some(("buf", OptionAttributes::BUFFER)),
	};
	if let Some((param, attribute)) = required
		&& !attributes.contains(attribute)
	{
		return Err(ApiError::UnsupportedScope {
			param,
			supported: attributes.describe(),
			name: name.to_string(),
		});
	}

	Ok(ResolvedScope {
		option,
		target,
		scope,
		filetype: opts.filetype.clone(),
	})
}
