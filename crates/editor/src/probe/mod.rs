//! Filetype probing.
//!
//! Answers "what would this option be for a buffer of filetype X" without
//! touching any real buffer. A throwaway buffer is allocated, given the
//! filetype so the filetype hooks run against it, read from, and wiped.
//! Nothing of it is observable afterwards: it never resolves as a handle,
//! never shows up in enumeration, and is removed on every exit path.

use core::ops::{Deref, DerefMut};

use tracing::{debug, trace, warn};
use vellum_registry::{AccessScope, OptionValue, SetInfo};

use crate::api::ApiError;
use crate::context::{ContextGuard, ScopeTarget, SwitchError};
use crate::Editor;
use crate::workspace::BufferId;


/// Options forced on every probe buffer so it never behaves like a file.
fn baseline() -> [(&'static str, OptionValue); 5] {
	[
		("bufhidden", OptionValue::from("hide")),
		("buftype", OptionValue::from("nofile")),
		("swapfile", OptionValue::Bool(false)),
		("undofile", OptionValue::Bool(false)),
		("modeline", OptionValue::Bool(false)),
	]
}

/// An unlisted, invisible buffer that is wiped when dropped.
pub(crate) struct EphemeralBuffer<'a> {
	editor: &'a mut Editor,
	id: BufferId,
}

impl<'a> EphemeralBuffer<'a> {
	pub(crate) fn allocate(editor: &'a mut Editor) -> Result<Self, ApiError> {
		let Editor {
			registry,
			workspace,
			..
		} = &mut *editor;
		let id = workspace
			.create_ephemeral(registry)
			.map_err(ApiError::EphemeralBufferAllocation)?;
		debug!(domain = "options", buffer = %id, "allocated probe buffer");
		Ok(Self { editor, id })
	}

	pub(crate) fn id(&self) -> BufferId {
		self.id
	}
}

impl Deref for EphemeralBuffer<'_> {
	type Target = Editor;

	fn deref(&self) -> &Editor {
		self.editor
	}
}

impl DerefMut for EphemeralBuffer<'_> {
	fn deref_mut(&mut self) -> &mut Editor {
		self.editor
	}
}

impl Drop for EphemeralBuffer<'_> {
	fn drop(&mut self) {
		let editor = &mut *self.editor;
		if editor.context.buffer == self.id {
			warn!(domain = "options", buffer = %self.id, "probe buffer still current at teardown");
			if let Some(window) = editor.workspace.window(editor.context.window) {
				editor.context.buffer = window.buffer;
			}
		}
		if editor.workspace.wipe_ephemeral(self.id).is_some() {
			debug!(domain = "options", buffer = %self.id, "wiped probe buffer");
		} else {
			warn!(domain = "options", buffer = %self.id, "probe buffer vanished before teardown");
		}
	}
}

/// Runs `read` with the editor switched into a fresh buffer of `filetype`.
///
/// The probe buffer is prepared and hooked before `read` runs. Context is
/// restored and the buffer wiped whether `read` succeeds or not.
pub(crate) fn with_filetype<T>(
	editor: &mut Editor,
	filetype: &str,
	read: impl FnOnce(&mut Editor) -> Result<T, ApiError>,
) -> Result<T, ApiError> {
	let mut probe = EphemeralBuffer::allocate(editor)?;
	let id = probe.id();
	let mut guard = ContextGuard::acquire(&mut probe, ScopeTarget::Buffer(id))?;
	prepare(&mut guard, id, filetype)?;
	read(&mut *guard)
}

fn prepare(editor: &mut Editor, id: BufferId, filetype: &str) -> Result<(), ApiError> {
	for (name, value) in baseline() {
		let Some(idx) = editor.registry.find(name) else {
			trace!(domain = "options", option = name, "baseline option not registered");
			continue;
		};
		editor.set_option(idx, value, AccessScope::Local, SetInfo::default())?;
	}
	if let Some(idx) = editor.registry.find("filetype") {
		editor.set_option(idx, OptionValue::from(filetype), AccessScope::Local, SetInfo::default())?;
	}

	let Editor {
		registry,
		workspace,
		hooks,
		..
	} = editor;
	let buffer = workspace
		.buffer_mut(id)
		.ok_or(SwitchError::BufferUnreachable(id))?;
	hooks.run(registry, buffer, filetype)?;
	trace!(domain = "options", buffer = %id, filetype, "probe buffer prepared");
	Ok(())
}
