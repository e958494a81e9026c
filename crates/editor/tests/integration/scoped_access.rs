//! Scope resolution through the public option API.

use std::cell::RefCell;
use std::rc::Rc;

use pretty_assertions::assert_eq;
use vellum_editor::api::{
	ErrorKind, Object, OptionRequest, get_option_value, set_option_value,
};
use vellum_editor::presentation::PresentationObserver;
use vellum_editor::registry::OptionValue;
use vellum_editor::workspace::{BufferId, WindowId};

use crate::common::{editor, two_windows};

#[derive(Clone, Default)]
struct Recording(Rc<RefCell<Vec<(&'static str, OptionValue)>>>);

impl PresentationObserver for Recording {
	fn option_changed(&mut self, name: &'static str, value: &OptionValue) {
		self.0.borrow_mut().push((name, value.clone()));
	}
}

#[test]
fn window_write_without_scope_stays_local_for_global_local_option() {
	let mut ed = editor();
	let layout = two_windows(&mut ed);
	let win = OptionRequest::new().win(layout.second_window);

	set_option_value(&mut ed, 1, "scrolloff", Object::Integer(5), &win).unwrap();

	assert_eq!(
		get_option_value(&mut ed, "scrolloff", &win.clone().scope("local")),
		Ok(Object::Integer(5))
	);
	assert_eq!(
		get_option_value(&mut ed, "scrolloff", &OptionRequest::new().scope("global")),
		Ok(Object::Integer(0))
	);
	assert_eq!(
		get_option_value(&mut ed, "scrolloff", &OptionRequest::new().win(layout.first_window)),
		Ok(Object::Integer(0))
	);
}

#[test]
fn window_write_of_pure_window_option_sets_that_window() {
	let mut ed = editor();
	let layout = two_windows(&mut ed);
	let win = OptionRequest::new().win(layout.second_window);

	set_option_value(&mut ed, 1, "number", Object::Boolean(true), &win).unwrap();

	assert_eq!(get_option_value(&mut ed, "number", &win), Ok(Object::Boolean(true)));
	assert_eq!(
		get_option_value(&mut ed, "number", &OptionRequest::new()),
		Ok(Object::Boolean(false))
	);
}

#[test]
fn buffer_and_scope_together_are_rejected_without_switching() {
	let mut ed = editor();
	let before = ed.context();
	let opts = OptionRequest::new().buf(BufferId(1)).scope("local");

	let err = get_option_value(&mut ed, "tabstop", &opts).unwrap_err();
	assert_eq!(err.kind(), ErrorKind::InvalidParameterCombination);
	assert_eq!(ed.context(), before);
}

#[test]
fn filetype_with_other_selectors_is_rejected() {
	let mut ed = editor();
	let (win, buf) = ed.workspace().initial();
	for opts in [
		OptionRequest::new().filetype("rust").buf(buf),
		OptionRequest::new().filetype("rust").win(win),
		OptionRequest::new().filetype("rust").scope("global"),
	] {
		let err = get_option_value(&mut ed, "shiftwidth", &opts).unwrap_err();
		assert_eq!(err.kind(), ErrorKind::InvalidParameterCombination);
	}
}

#[test]
fn buffer_round_trip_on_fifth_buffer() {
	let mut ed = editor();
	let mut last = BufferId(1);
	while last < BufferId(5) {
		last = ed.create_buffer(format!("buf{}", last.0 + 1), true).unwrap();
	}
	let opts = OptionRequest::new().buf(BufferId(5));

	set_option_value(&mut ed, 1, "tabstop", Object::Integer(3), &opts).unwrap();
	assert_eq!(get_option_value(&mut ed, "tabstop", &opts), Ok(Object::Integer(3)));
	assert_eq!(
		get_option_value(&mut ed, "tabstop", &OptionRequest::new()),
		Ok(Object::Integer(8))
	);
}

#[test]
fn global_option_with_buffer_names_supported_scope() {
	let mut ed = editor();
	let err =
		get_option_value(&mut ed, "columns", &OptionRequest::new().buf(BufferId(1))).unwrap_err();
	assert_eq!(err.kind(), ErrorKind::UnsupportedScope);
	assert!(err.to_string().contains("global"), "{err}");
}

#[test]
fn unknown_option_on_get_and_set() {
	let mut ed = editor();
	let opts = OptionRequest::new();
	assert_eq!(
		get_option_value(&mut ed, "frobnicate", &opts).map_err(|e| e.kind()),
		Err(ErrorKind::UnknownOption)
	);
	assert_eq!(
		set_option_value(&mut ed, 1, "frobnicate", Object::Boolean(true), &opts)
			.map_err(|e| e.kind()),
		Err(ErrorKind::UnknownOption)
	);
}

#[test]
fn stale_handles_are_not_found() {
	let mut ed = editor();
	let layout = two_windows(&mut ed);
	ed.close_window(layout.second_window).unwrap();

	let err = get_option_value(&mut ed, "number", &OptionRequest::new().win(layout.second_window))
		.unwrap_err();
	assert_eq!(err.kind(), ErrorKind::HandleNotFound);

	let err =
		get_option_value(&mut ed, "number", &OptionRequest::new().win(WindowId(1))).unwrap_err();
	assert_eq!(err.kind(), ErrorKind::HandleNotFound);
}

#[test]
fn closing_window_cannot_be_targeted() {
	let mut ed = editor();
	let layout = two_windows(&mut ed);
	let before = ed.context();
	ed.begin_close_window(layout.second_window).unwrap();

	let err = get_option_value(&mut ed, "number", &OptionRequest::new().win(layout.second_window))
		.unwrap_err();
	assert_eq!(err.kind(), ErrorKind::SwitchFailure);
	assert_eq!(ed.context(), before);
}

#[test]
fn presentation_hears_only_redraw_writes() {
	let recording = Recording::default();
	let mut ed = editor().with_presentation(recording.clone());
	let layout = two_windows(&mut ed);

	set_option_value(&mut ed, 1, "tabstop", Object::Integer(2), &OptionRequest::new()).unwrap();
	get_option_value(&mut ed, "columns", &OptionRequest::new()).unwrap();
	assert!(recording.0.borrow().is_empty());

	set_option_value(&mut ed, 1, "columns", Object::Integer(132), &OptionRequest::new()).unwrap();
	set_option_value(
		&mut ed,
		1,
		"wrap",
		Object::Boolean(false),
		&OptionRequest::new().win(layout.second_window),
	)
	.unwrap();

	assert_eq!(
		*recording.0.borrow(),
		vec![
			("columns", OptionValue::Int(132)),
			("wrap", OptionValue::Bool(false)),
		]
	);
}
