//! Scope-aware option API.
//!
//! Every entry point validates its request completely before touching any
//! state, then runs the access inside a [`ContextGuard`] so the current
//! window and buffer are restored on every exit path.
//!
//! [`ContextGuard`]: crate::ContextGuard

mod accessor;
mod error;
mod info;
mod object;
mod validate;

use std::collections::BTreeMap;

pub use error::{ApiError, ErrorKind, ErrorResponse};
pub use info::OptionInfo;
pub use object::{Object, ObjectTypeError};
use tracing::debug;
pub use validate::{Access, OptionRequest, ResolvedScope, validate};
use vellum_registry::{AccessScope, OptionValue, SetInfo};

use crate::Editor;
use crate::context::{Context, ScopeTarget};


/// Reads option `name` as addressed by `opts`.
///
/// Returns [`Object::Nil`] when the addressed slot holds no value, which only
/// happens for a local read of an unset global-local option.
pub fn get_option_value(
	editor: &mut Editor,
	name: &str,
	opts: &OptionRequest,
) -> Result<Object, ApiError> {
	let resolved = validate(editor, name, opts, Access::Get)?;
	accessor::get(editor, resolved).map(Object::from)
}

/// Writes option `name` as addressed by `opts`, on behalf of API client
/// `channel`.
pub fn set_option_value(
	editor: &mut Editor,
	channel: u64,
	name: &str,
	value: Object,
	opts: &OptionRequest,
) -> Result<(), ApiError> {
	let resolved = validate(editor, name, opts, Access::Set)?;
	let value = match value {
		Object::Nil => None,
		other => Some(OptionValue::try_from(other)?),
	};
	accessor::set(editor, resolved, value, SetInfo::api_client(channel))
}

/// Reads `name` only if it has a value in exactly the slot `target` names.
///
/// Returns [`Object::Nil`] when the option has no such slot, e.g. the global
/// value of a window-local option.
pub fn get_option_value_strict(
	editor: &mut Editor,
	name: &str,
	target: ScopeTarget,
) -> Result<Object, ApiError> {
	let opts = match target {
		ScopeTarget::Global => OptionRequest::new(),
		ScopeTarget::Window(win) => OptionRequest::new().win(win),
		ScopeTarget::Buffer(buf) => OptionRequest::new().buf(buf),
	};
	// Unsupported scope reads as Nil.
	let option = match validate(editor, name, &opts, Access::Get) {
		Ok(resolved) => resolved.option,
		Err(ApiError::UnsupportedScope { .. }) => return Ok(Object::Nil),
		Err(e) => return Err(e),
	};
	accessor::get_strict(editor, option, target).map(Object::from)
}

/// Introspection record for `name`. An explicit scope selects which slot's
/// last-set information is reported.
pub fn get_option_info(
	editor: &Editor,
	name: &str,
	opts: &OptionRequest,
) -> Result<OptionInfo, ApiError> {
	let resolved = validate(editor, name, opts, Access::Info)?;
	let current = editor.context;
	let ctx = match resolved.target {
		ScopeTarget::Global => current,
		ScopeTarget::Window(window) => Context {
			window,
			buffer: editor
				.workspace
				.window(window)
				.map_or(current.buffer, |w| w.buffer),
		},
		ScopeTarget::Buffer(buffer) => Context {
			window: current.window,
			buffer,
		},
	};
	debug!(domain = "options", option = name, "option info");
	Ok(info::option_info(editor, resolved.option, resolved.scope, ctx))
}

/// Introspection records for every visible option, keyed by full name.
pub fn get_all_options_info(editor: &Editor) -> BTreeMap<&'static str, OptionInfo> {
	editor
		.registry
		.iter()
		.filter(|(_, def)| !def.is_hidden())
		.map(|(idx, def)| {
			(
				def.name,
				info::option_info(editor, idx, AccessScope::Effective, editor.context),
			)
		})
		.collect()
}
