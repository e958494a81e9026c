//! The current window and buffer survive every API call unchanged.

use pretty_assertions::assert_eq;
use vellum_editor::api::{
	Object, OptionRequest, get_option_info, get_option_value, get_option_value_strict,
	set_option_value,
};
use vellum_editor::workspace::{BufferId, WindowId};
use vellum_editor::{Context, ContextGuard, ScopeTarget};

use crate::common::{editor, two_windows};

#[test]
fn mixed_sequence_with_invalid_handle_restores_context() {
	let mut ed = editor();
	let layout = two_windows(&mut ed);
	let before = ed.context();

	let requests = [
		OptionRequest::new().win(layout.second_window),
		OptionRequest::new().buf(layout.second_buffer),
		OptionRequest::new().win(WindowId(4242)),
		OptionRequest::new().buf(BufferId(4242)),
		OptionRequest::new().filetype("rust"),
		OptionRequest::new().scope("global"),
		OptionRequest::new().scope("bogus"),
	];

	for opts in &requests {
		let _ = get_option_value(&mut ed, "tabstop", opts);
		assert_eq!(ed.context(), before, "after get with {opts:?}");
		let _ = set_option_value(&mut ed, 1, "tabstop", Object::Integer(4), opts);
		assert_eq!(ed.context(), before, "after set with {opts:?}");
		let _ = get_option_info(&ed, "tabstop", opts);
	}

	let _ = get_option_value_strict(&mut ed, "number", ScopeTarget::Window(layout.second_window));
	let _ = get_option_value_strict(&mut ed, "tabstop", ScopeTarget::Buffer(BufferId(4242)));
	assert_eq!(ed.context(), before);
}

#[test]
fn failed_write_inside_switch_restores_context() {
	let mut ed = editor();
	let layout = two_windows(&mut ed);
	let before = ed.context();

	let err = set_option_value(
		&mut ed,
		1,
		"tabstop",
		Object::Integer(-1),
		&OptionRequest::new().buf(layout.second_buffer),
	);
	assert!(err.is_err());
	assert_eq!(ed.context(), before);
}

#[test]
fn guard_restores_to_most_recent_window_when_saved_one_is_closed() {
	let mut ed = editor();
	let layout = two_windows(&mut ed);
	let third = ed.open_window(layout.first_buffer).unwrap();
	ed.focus_window(layout.second_window).unwrap();
	ed.focus_window(layout.first_window).unwrap();

	{
		let mut guard = ContextGuard::acquire(&mut ed, ScopeTarget::Window(third)).unwrap();
		guard.close_window(layout.first_window).unwrap();
	}

	assert_eq!(
		ed.context(),
		Context {
			window: layout.second_window,
			buffer: layout.second_buffer,
		}
	);
}

#[test]
fn guard_restores_on_panic() {
	let mut ed = editor();
	let layout = two_windows(&mut ed);
	let before = ed.context();

	let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
		let _guard = ContextGuard::acquire(&mut ed, ScopeTarget::Window(layout.second_window))
			.unwrap();
		panic!("accessor blew up");
	}));

	assert!(result.is_err());
	assert_eq!(ed.context(), before);
}

#[test]
fn local_round_trip_after_closing_last_open_window() {
	let mut ed = editor();
	let layout = two_windows(&mut ed);
	ed.begin_close_window(layout.second_window).unwrap();
	ed.close_window(layout.first_window).unwrap();

	let ctx = ed.context();
	assert_eq!(ctx.window, layout.second_window);
	assert!(ed.workspace().resolve_window(ctx.window).is_ok());

	let local = OptionRequest::new().scope("local");
	set_option_value(&mut ed, 1, "number", Object::Boolean(true), &local).unwrap();
	assert_eq!(get_option_value(&mut ed, "number", &local), Ok(Object::Boolean(true)));
	assert_eq!(ed.context(), ctx);
}
