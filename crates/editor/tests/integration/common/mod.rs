//! Common utilities for editor integration tests.

use vellum_editor::Editor;
use vellum_editor::workspace::{BufferId, WindowId};

/// Editor with the builtin options, after installing a test subscriber.
pub fn editor() -> Editor {
	let _ = tracing_subscriber::fmt::try_init();
	Editor::new()
}

/// Layout used by most tests: the initial window and buffer plus a second
/// buffer shown in a second, unfocused window.
pub struct Layout {
	pub first_window: WindowId,
	pub first_buffer: BufferId,
	pub second_window: WindowId,
	pub second_buffer: BufferId,
}

pub fn two_windows(editor: &mut Editor) -> Layout {
	let (first_window, first_buffer) = editor.workspace().initial();
	let second_buffer = editor.create_buffer("second", true).unwrap();
	let second_window = editor.open_window(second_buffer).unwrap();
	Layout {
		first_window,
		first_buffer,
		second_window,
		second_buffer,
	}
}
