//! Window and buffer storage, handle allocation, and focus tracking.
//!
//! [`Workspace`] is the handle directory: it owns every window and buffer,
//! resolves handles coming in from requests, and enumerates what is visible.
//! Ephemeral buffers live in the same arena but are filtered out of every
//! enumeration and handle lookup.

mod buffer;
mod handle;
mod window;

use std::cmp::Reverse;

pub use buffer::Buffer;
pub use handle::{BufferId, HandleKind, WindowId};
use rustc_hash::FxHashMap as HashMap;
use thiserror::Error;
use vellum_registry::{OptionScope, OptionsRegistry};
pub use window::Window;


/// First handle handed out to a window, keeping window and buffer handles
/// visually distinct.
pub const FIRST_WINDOW_ID: u64 = 1000;

/// Default cap on the number of live buffers.
pub const DEFAULT_MAX_BUFFERS: usize = 4096;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkspaceError {
	#[error("invalid {kind} id: {id}")]
	NotFound { kind: HandleKind, id: u64 },
	#[error("buffer limit of {0} reached")]
	BufferLimit(usize),
	#[error("buffer handle space exhausted")]
	HandlesExhausted,
	#[error("cannot close the last window")]
	LastWindow,
	#[error("buffer {0} is displayed in a window")]
	BufferInUse(BufferId),
}

impl WorkspaceError {
	fn window(id: WindowId) -> Self {
		Self::NotFound {
			kind: HandleKind::Window,
			id: id.0,
		}
	}

	fn buffer(id: BufferId) -> Self {
		Self::NotFound {
			kind: HandleKind::Buffer,
			id: id.0,
		}
	}
}

/// Owns windows and buffers, generates unique handles, tracks focus order.
#[derive(Debug)]
pub struct Workspace {
	buffers: HashMap<BufferId, Buffer>,
	windows: HashMap<WindowId, Window>,
	next_buffer_id: u64,
	next_window_id: u64,
	/// Monotonic counter stamped onto windows when they gain focus.
	focus_tick: u64,
	max_buffers: usize,
}

impl Workspace {
	/// Creates a workspace with one listed scratch buffer shown in one window.
	pub fn new(registry: &OptionsRegistry, max_buffers: usize) -> Self {
		let buffer_id = BufferId(1);
		let window_id = WindowId(FIRST_WINDOW_ID);

		let mut buffers = HashMap::default();
		buffers.insert(
			buffer_id,
			Buffer::new(
				buffer_id,
				String::new(),
				registry.local_defaults(OptionScope::Buffer),
				true,
			),
		);

		let mut windows = HashMap::default();
		windows.insert(
			window_id,
			Window::new(
				window_id,
				buffer_id,
				registry.local_defaults(OptionScope::Window),
				1,
			),
		);

		Self {
			buffers,
			windows,
			next_buffer_id: 2,
			next_window_id: FIRST_WINDOW_ID + 1,
			focus_tick: 1,
			max_buffers: max_buffers.max(1),
		}
	}

	/// The window and buffer the workspace starts out with.
	pub fn initial(&self) -> (WindowId, BufferId) {
		(WindowId(FIRST_WINDOW_ID), BufferId(1))
	}

	fn alloc_buffer_id(&mut self) -> Result<BufferId, WorkspaceError> {
		if self.buffers.len() >= self.max_buffers {
			return Err(WorkspaceError::BufferLimit(self.max_buffers));
		}
		let id = BufferId(self.next_buffer_id);
		self.next_buffer_id = self
			.next_buffer_id
			.checked_add(1)
			.ok_or(WorkspaceError::HandlesExhausted)?;
		Ok(id)
	}

	/// Creates a new buffer. Does not display it anywhere.
	pub fn create_buffer(
		&mut self,
		registry: &OptionsRegistry,
		name: impl Into<String>,
		listed: bool,
	) -> Result<BufferId, WorkspaceError> {
		let id = self.alloc_buffer_id()?;
		let options = registry.local_defaults(OptionScope::Buffer);
		self.buffers
			.insert(id, Buffer::new(id, name.into(), options, listed));
		Ok(id)
	}

	/// Allocates an unlisted buffer that no enumeration or handle lookup can see.
	pub(crate) fn create_ephemeral(
		&mut self,
		registry: &OptionsRegistry,
	) -> Result<BufferId, WorkspaceError> {
		let id = self.alloc_buffer_id()?;
		let options = registry.local_defaults(OptionScope::Buffer);
		self.buffers.insert(id, Buffer::ephemeral(id, options));
		Ok(id)
	}

	/// Removes an ephemeral buffer. Returns `None` for unknown or regular buffers.
	pub(crate) fn wipe_ephemeral(&mut self, id: BufferId) -> Option<Buffer> {
		if !self.buffers.get(&id)?.is_ephemeral() {
			return None;
		}
		self.buffers.remove(&id)
	}

	/// Removes a buffer that no window displays.
	pub fn wipe_buffer(&mut self, id: BufferId) -> Result<Buffer, WorkspaceError> {
		self.resolve_buffer(id)?;
		if self.windows.values().any(|w| w.buffer == id) {
			return Err(WorkspaceError::BufferInUse(id));
		}
		self.buffers.remove(&id).ok_or(WorkspaceError::buffer(id))
	}

	/// Opens a new window displaying `buffer`. Does not change focus.
	pub fn open_window(
		&mut self,
		registry: &OptionsRegistry,
		buffer: BufferId,
	) -> Result<WindowId, WorkspaceError> {
		self.resolve_buffer(buffer)?;
		let id = WindowId(self.next_window_id);
		self.next_window_id = self
			.next_window_id
			.checked_add(1)
			.ok_or(WorkspaceError::HandlesExhausted)?;
		let options = registry.local_defaults(OptionScope::Window);
		self.windows
			.insert(id, Window::new(id, buffer, options, 0));
		Ok(id)
	}

	/// Displays `buffer` in `window`.
	pub fn set_window_buffer(
		&mut self,
		window: WindowId,
		buffer: BufferId,
	) -> Result<(), WorkspaceError> {
		self.resolve_buffer(buffer)?;
		let win = self
			.windows
			.get_mut(&window)
			.ok_or(WorkspaceError::window(window))?;
		win.buffer = buffer;
		Ok(())
	}

	/// Marks a window as being torn down. It stays resolvable but can no
	/// longer be entered.
	pub fn begin_close_window(&mut self, id: WindowId) -> Result<(), WorkspaceError> {
		let win = self
			.windows
			.get_mut(&id)
			.ok_or(WorkspaceError::window(id))?;
		win.mark_closing();
		Ok(())
	}

	/// Removes a window. The last window cannot be closed.
	pub fn close_window(&mut self, id: WindowId) -> Result<Window, WorkspaceError> {
		if !self.windows.contains_key(&id) {
			return Err(WorkspaceError::window(id));
		}
		if self.windows.len() == 1 {
			return Err(WorkspaceError::LastWindow);
		}
		self.windows.remove(&id).ok_or(WorkspaceError::window(id))
	}

	/// Records that `id` gained focus.
	pub fn touch_window(&mut self, id: WindowId) -> Result<(), WorkspaceError> {
		let win = self
			.windows
			.get_mut(&id)
			.ok_or(WorkspaceError::window(id))?;
		self.focus_tick += 1;
		win.touch(self.focus_tick);
		Ok(())
	}

	/// Resolves a window handle from outside the subsystem.
	pub fn resolve_window(&self, id: WindowId) -> Result<&Window, WorkspaceError> {
		self.windows.get(&id).ok_or(WorkspaceError::window(id))
	}

	/// Resolves a buffer handle from outside the subsystem. Ephemeral buffers
	/// do not resolve.
	pub fn resolve_buffer(&self, id: BufferId) -> Result<&Buffer, WorkspaceError> {
		self.buffers
			.get(&id)
			.filter(|b| !b.is_ephemeral())
			.ok_or(WorkspaceError::buffer(id))
	}

	pub fn window(&self, id: WindowId) -> Option<&Window> {
		self.windows.get(&id)
	}

	pub fn window_mut(&mut self, id: WindowId) -> Option<&mut Window> {
		self.windows.get_mut(&id)
	}

	pub(crate) fn buffer(&self, id: BufferId) -> Option<&Buffer> {
		self.buffers.get(&id)
	}

	pub(crate) fn buffer_mut(&mut self, id: BufferId) -> Option<&mut Buffer> {
		self.buffers.get_mut(&id)
	}

	/// All visible buffers, listed or not, ordered by handle.
	pub fn buffers(&self) -> Vec<&Buffer> {
		let mut out: Vec<_> = self
			.buffers
			.values()
			.filter(|b| !b.is_ephemeral())
			.collect();
		out.sort_by_key(|b| b.id);
		out
	}

	/// Live buffers including ephemeral ones.
	#[cfg(test)]
	pub(crate) fn live_buffers(&self) -> usize {
		self.buffers.len()
	}

	/// Listed buffers, ordered by handle.
	pub fn list_buffers(&self) -> Vec<BufferId> {
		self.buffers()
			.into_iter()
			.filter(|b| b.is_listed())
			.map(|b| b.id)
			.collect()
	}

	/// All windows, ordered by handle.
	pub fn windows(&self) -> Vec<&Window> {
		let mut out: Vec<_> = self.windows.values().collect();
		out.sort_by_key(|w| w.id);
		out
	}

	/// Lowest-handle enterable window displaying `buffer`.
	pub fn window_showing(&self, buffer: BufferId) -> Option<WindowId> {
		self.windows
			.values()
			.filter(|w| w.buffer == buffer && !w.is_closing())
			.map(|w| w.id)
			.min()
	}

	/// Most recently focused window, preferring ones that are not being torn
	/// down. A closing window is only returned when every window is closing.
	///
	/// Ties are broken by the lowest handle so the choice never depends on
	/// map iteration order.
	pub fn most_recent_window(&self) -> Option<WindowId> {
		self.windows
			.values()
			.max_by_key(|w| (!w.is_closing(), w.last_focused(), Reverse(w.id)))
			.map(|w| w.id)
	}
}
