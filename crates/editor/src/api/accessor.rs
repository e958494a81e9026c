//! Reads and writes that run inside an acquired context.

use tracing::{debug, trace};
use vellum_registry::{AccessScope, OptionFlags, OptionIndex, OptionScope, OptionValue, SetInfo};

use super::{ApiError, ResolvedScope};
use crate::context::{ContextGuard, ScopeKind, ScopeTarget};
use crate::{Editor, probe};

/// Reads the option a validated request addresses. `None` means no value in
/// that scope.
pub(crate) fn get(
	editor: &mut Editor,
	resolved: ResolvedScope,
) -> Result<Option<OptionValue>, ApiError> {
	let ResolvedScope {
		option,
		target,
		scope,
		filetype,
	} = resolved;

	let value = match filetype {
		Some(filetype) => probe::with_filetype(editor, &filetype, |ed| {
			read(ed, option, target, scope)
		})?,
		None => read(editor, option, target, scope)?,
	};
	debug!(
		domain = "options",
		option = editor.registry.def(option).name,
		target = ?target,
		scope = ?scope,
		nil = value.is_none(),
		"option get"
	);
	Ok(value)
}

fn read(
	editor: &mut Editor,
	option: OptionIndex,
	target: ScopeTarget,
	scope: AccessScope,
) -> Result<Option<OptionValue>, ApiError> {
	let guard = ContextGuard::acquire(editor, target)?;
	let value = guard.option_value(option, scope);
	trace!(domain = "options", switched = guard.switched(), "read option in context");
	Ok(value)
}

/// Writes the option a validated request addresses.
///
/// `None` clears the local value of a global-local option written with local
/// scope; anywhere else it is a type error.
pub(crate) fn set(
	editor: &mut Editor,
	resolved: ResolvedScope,
	value: Option<OptionValue>,
	info: SetInfo,
) -> Result<(), ApiError> {
	let option = resolved.option;
	let def = *editor.registry.def(option);
	let scope = resolved.write_scope(def.attributes());

	match value {
		None if def.global_local && scope == AccessScope::Local => {
			let mut guard = ContextGuard::acquire(editor, resolved.target)?;
			guard.clear_local_option(option);
		}
		None => return Err(super::ObjectTypeError("Nil").into()),
		Some(value) => {
			let mut guard = ContextGuard::acquire(editor, resolved.target)?;
			if def.flags.contains(OptionFlags::REDRAW) {
				guard.set_option_and_notify(option, value, scope, info)?;
			} else {
				guard.set_option(option, value, scope, info)?;
			}
		}
	}

	debug!(
		domain = "options",
		option = def.name,
		target = ?resolved.target,
		scope = ?scope,
		channel = info.channel,
		"option set"
	);
	Ok(())
}

/// Whether `def` keeps a value in exactly the `kind` slot.
///
/// Window-local options have no global value of their own for this purpose.
pub(crate) fn has_scope(editor: &Editor, option: OptionIndex, kind: ScopeKind) -> bool {
	let def = editor.registry.def(option);
	if def.is_hidden() {
		return false;
	}
	match kind {
		ScopeKind::Global => !(def.scope == OptionScope::Window && !def.global_local),
		ScopeKind::Window => def.scope == OptionScope::Window,
		ScopeKind::Buffer => def.scope == OptionScope::Buffer,
	}
}

/// Reads `option` from exactly the slot `target` names, or `None`.
pub(crate) fn get_strict(
	editor: &mut Editor,
	option: OptionIndex,
	target: ScopeTarget,
) -> Result<Option<OptionValue>, ApiError> {
	if !has_scope(editor, option, target.kind()) {
		return Ok(None);
	}
	let scope = match target {
		ScopeTarget::Global => AccessScope::Global,
		ScopeTarget::Window(_) | ScopeTarget::Buffer(_) => AccessScope::Local,
	};
	read(editor, option, target, scope)
}
