//! Scoped switching of the current window/buffer.
//!
//! Option accessors are scope-unaware: they read and write the local slots of
//! whatever window and buffer the [`Editor`] currently considers active. To
//! address another window or buffer, callers acquire a [`ContextGuard`],
//! which redirects the current context and restores it when dropped. Because
//! restoration lives in `Drop`, it runs on `?` propagation and unwinding
//! alike; no exit path can leave the context pointing somewhere else.
//!
//! Switching never fires activation hooks and never changes focus order.

use core::ops::{Deref, DerefMut};

use serde::Serialize;
use thiserror::Error;
use tracing::{trace, warn};

use crate::Editor;
use crate::workspace::{BufferId, WindowId};


/// The current window and buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Context {
	pub window: WindowId,
	pub buffer: BufferId,
}

/// Kind of storage slot a request addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScopeKind {
	Global,
	Window,
	Buffer,
}

/// Where an option access has to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeTarget {
	/// The global slot; no switch needed.
	Global,
	Window(WindowId),
	Buffer(BufferId),
}

impl ScopeTarget {
	pub fn kind(self) -> ScopeKind {
		match self {
			ScopeTarget::Global => ScopeKind::Global,
			ScopeTarget::Window(_) => ScopeKind::Window,
			ScopeTarget::Buffer(_) => ScopeKind::Buffer,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SwitchError {
	#[error("window {0} is being closed")]
	WindowClosing(WindowId),
	#[error("window {0} is not reachable")]
	WindowUnreachable(WindowId),
	#[error("buffer {0} is not reachable")]
	BufferUnreachable(BufferId),
}

/// Pre-switch context, released exactly once by the guard that owns it.
#[derive(Debug)]
struct SwitchToken {
	saved: Context,
	kind: ScopeKind,
}

/// Holds the editor switched into a window or buffer.
///
/// Dereferences to the [`Editor`], so scope-unaware accessors called through
/// the guard see the switched context. Dropping the guard restores the
/// previous context; when no switch was needed, dropping does nothing.
pub struct ContextGuard<'a> {
	editor: &'a mut Editor,
	token: Option<SwitchToken>,
}

impl<'a> ContextGuard<'a> {
	/// Switches into `target` if it is not already current.
	///
	/// On failure the context is left exactly as it was.
	pub fn acquire(editor: &'a mut Editor, target: ScopeTarget) -> Result<Self, SwitchError> {
		let token = match target {
			ScopeTarget::Global => None,
			ScopeTarget::Window(win) => enter_window(editor, win)?,
			ScopeTarget::Buffer(buf) => enter_buffer(editor, buf)?,
		};
		Ok(Self { editor, token })
	}

	/// Whether acquiring actually changed the context.
	pub fn switched(&self) -> bool {
		self.token.is_some()
	}
}

impl Deref for ContextGuard<'_> {
	type Target = Editor;

	fn deref(&self) -> &Editor {
		self.editor
	}
}

impl DerefMut for ContextGuard<'_> {
	fn deref_mut(&mut self) -> &mut Editor {
		self.editor
	}
}

impl Drop for ContextGuard<'_> {
	fn drop(&mut self) {
		if let Some(token) = self.token.take() {
			release(self.editor, token);
		}
	}
}

fn enter_window(editor: &mut Editor, win: WindowId) -> Result<Option<SwitchToken>, SwitchError> {
	let saved = editor.context;
	if win == saved.window {
		return Ok(None);
	}

	// Everything is checked before the context is touched, so a failed switch
	// has nothing to roll back.
	let buffer = match editor.workspace.window(win) {
		Some(w) if w.is_closing() => return Err(SwitchError::WindowClosing(win)),
		Some(w) => w.buffer,
		None => return Err(SwitchError::WindowUnreachable(win)),
	};
	if editor.workspace.buffer(buffer).is_none() {
		return Err(SwitchError::BufferUnreachable(buffer));
	}

	editor.context = Context {
		window: win,
		buffer,
	};
	trace!(
		domain = "options",
		from_window = %saved.window,
		to_window = %win,
		"switched window context"
	);
	Ok(Some(SwitchToken {
		saved,
		kind: ScopeKind::Window,
	}))
}

fn enter_buffer(editor: &mut Editor, buf: BufferId) -> Result<Option<SwitchToken>, SwitchError> {
	let saved = editor.context;
	if buf == saved.buffer {
		return Ok(None);
	}
	if editor.workspace.buffer(buf).is_none() {
		return Err(SwitchError::BufferUnreachable(buf));
	}

	// Prefer a window that already shows the buffer so window-local reads stay
	// coherent; otherwise borrow the current window.
	let window = editor.workspace.window_showing(buf).unwrap_or(saved.window);
	editor.context = Context {
		window,
		buffer: buf,
	};
	trace!(
		domain = "options",
		from_buffer = %saved.buffer,
		to_buffer = %buf,
		window = %window,
		"switched buffer context"
	);
	Ok(Some(SwitchToken {
		saved,
		kind: ScopeKind::Buffer,
	}))
}

fn release(editor: &mut Editor, token: SwitchToken) {
	let SwitchToken { saved, kind } = token;

	let window = if editor.workspace.window(saved.window).is_some() {
		saved.window
	} else if let Some(fallback) = editor.workspace.most_recent_window() {
		warn!(
			domain = "options",
			saved = %saved.window,
			fallback = %fallback,
			"saved window disappeared while switched; restoring most recent window"
		);
		fallback
	} else {
		warn!(
			domain = "options",
			saved = %saved.window,
			"no window left to restore"
		);
		saved.window
	};

	let buffer = if window == saved.window && editor.workspace.buffer(saved.buffer).is_some() {
		saved.buffer
	} else {
		editor
			.workspace
			.window(window)
			.map(|w| w.buffer)
			.unwrap_or(saved.buffer)
	};

	editor.context = Context { window, buffer };
	trace!(
		domain = "options",
		kind = ?kind,
		window = %window,
		buffer = %buffer,
		"restored context"
	);
}
