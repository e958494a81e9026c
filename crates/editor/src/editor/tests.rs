use pretty_assertions::assert_eq;
use rstest::rstest;
use vellum_registry::{AccessScope, OptionError, OptionIndex, OptionValue, SetInfo};

use super::*;

fn idx(ed: &Editor, name: &str) -> OptionIndex {
	ed.registry().find(name).unwrap()
}

#[test]
fn test_new_editor_context_is_initial_layout() {
	let ed = Editor::new();
	let (window, buffer) = ed.workspace().initial();
	assert_eq!(ed.context(), Context { window, buffer });
}

#[test]
fn test_effective_set_of_local_option_writes_both_slots() {
	let mut ed = Editor::new();
	let ts = idx(&ed, "tabstop");
	ed.set_option(ts, OptionValue::Int(4), AccessScope::Effective, SetInfo::default())
		.unwrap();

	assert_eq!(ed.option_value(ts, AccessScope::Local), Some(OptionValue::Int(4)));
	assert_eq!(ed.option_value(ts, AccessScope::Global), Some(OptionValue::Int(4)));
}

#[rstest]
#[case(AccessScope::Local, 8, 3)]
#[case(AccessScope::Global, 3, 8)]
fn test_scoped_set_touches_one_slot(
	#[case] scope: AccessScope,
	#[case] global: i64,
	#[case] local: i64,
) {
	let mut ed = Editor::new();
	let ts = idx(&ed, "tabstop");
	ed.set_option(ts, OptionValue::Int(3), scope, SetInfo::default())
		.unwrap();

	assert_eq!(ed.option_value(ts, AccessScope::Global), Some(OptionValue::Int(global)));
	assert_eq!(ed.option_value(ts, AccessScope::Local), Some(OptionValue::Int(local)));
}

#[test]
fn test_global_local_effective_set_clears_local_value() {
	let mut ed = Editor::new();
	let so = idx(&ed, "scrolloff");
	ed.set_option(so, OptionValue::Int(5), AccessScope::Local, SetInfo::default())
		.unwrap();
	assert_eq!(ed.option_value(so, AccessScope::Effective), Some(OptionValue::Int(5)));

	ed.set_option(so, OptionValue::Int(2), AccessScope::Effective, SetInfo::default())
		.unwrap();
	assert_eq!(ed.option_value(so, AccessScope::Local), None);
	assert_eq!(ed.option_value(so, AccessScope::Effective), Some(OptionValue::Int(2)));
}

#[test]
fn test_unset_global_local_reads_nil_locally() {
	let ed = Editor::new();
	let mp = idx(&ed, "makeprg");
	assert_eq!(ed.option_value(mp, AccessScope::Local), None);
	assert_eq!(
		ed.option_value(mp, AccessScope::Effective),
		Some(OptionValue::String("make".into()))
	);
}

#[test]
fn test_global_only_option_ignores_scope() {
	let mut ed = Editor::new();
	let columns = idx(&ed, "columns");
	ed.set_option(columns, OptionValue::Int(120), AccessScope::Local, SetInfo::default())
		.unwrap();
	assert_eq!(ed.option_value(columns, AccessScope::Local), Some(OptionValue::Int(120)));
	assert_eq!(ed.option_value(columns, AccessScope::Global), Some(OptionValue::Int(120)));
}

#[test]
fn test_invalid_value_leaves_state_untouched() {
	let mut ed = Editor::new();
	let ts = idx(&ed, "tabstop");
	assert!(
		ed.set_option(ts, OptionValue::Int(0), AccessScope::Effective, SetInfo::default())
			.is_err()
	);
	assert!(
		ed.set_option(ts, OptionValue::Bool(true), AccessScope::Effective, SetInfo::default())
			.is_err()
	);
	assert_eq!(ed.option_value(ts, AccessScope::Effective), Some(OptionValue::Int(8)));
}

#[test]
fn test_clear_local_option_only_for_global_local() {
	let mut ed = Editor::new();
	let ts = idx(&ed, "tabstop");
	let ul = idx(&ed, "undolevels");
	ed.set_option(ul, OptionValue::Int(10), AccessScope::Local, SetInfo::default())
		.unwrap();

	assert!(!ed.clear_local_option(ts));
	assert!(ed.clear_local_option(ul));
	assert!(!ed.clear_local_option(ul));
	assert_eq!(ed.option_value(ts, AccessScope::Local), Some(OptionValue::Int(8)));
}

#[test]
fn test_focus_and_close_window() {
	let mut ed = Editor::new();
	let (first, buf) = ed.workspace().initial();
	let other = ed.open_window(buf).unwrap();

	ed.focus_window(other).unwrap();
	assert_eq!(ed.context().window, other);

	ed.close_window(other).unwrap();
	assert_eq!(ed.context().window, first);
}

#[test]
fn test_edit_buffer_updates_context_and_window() {
	let mut ed = Editor::new();
	let buf = ed.create_buffer("notes", true).unwrap();
	ed.edit_buffer(buf).unwrap();

	let ctx = ed.context();
	assert_eq!(ctx.buffer, buf);
	assert_eq!(ed.workspace().resolve_window(ctx.window).unwrap().buffer, buf);
}

#[test]
fn test_closing_current_window_focuses_closing_one_when_nothing_else_is_left() {
	let mut ed = Editor::new();
	let (first, buf) = ed.workspace().initial();
	let other = ed.open_window(buf).unwrap();

	ed.begin_close_window(other).unwrap();
	ed.close_window(first).unwrap();

	assert_eq!(ed.context(), Context { window: other, buffer: buf });
	assert!(ed.workspace().resolve_window(ed.context().window).is_ok());

	let nu = idx(&ed, "number");
	ed.set_option(nu, OptionValue::Bool(true), AccessScope::Local, SetInfo::default())
		.unwrap();
	assert_eq!(ed.option_value(nu, AccessScope::Local), Some(OptionValue::Bool(true)));
}

#[test]
fn test_local_write_without_current_window_fails() {
	let mut ed = Editor::new();
	let (first, buf) = ed.workspace().initial();
	let other = ed.open_window(buf).unwrap();
	ed.focus_window(other).unwrap();
	ed.workspace.close_window(other).unwrap();
	assert_eq!(ed.context().window, other);

	let nu = idx(&ed, "number");
	for scope in [AccessScope::Local, AccessScope::Effective] {
		assert_eq!(
			ed.set_option(nu, OptionValue::Bool(true), scope, SetInfo::default()),
			Err(OptionError::NoLocalStore {
				option: "number".into(),
				scope: "window",
			})
		);
	}
	assert_eq!(ed.option_value(nu, AccessScope::Global), Some(OptionValue::Bool(false)));

	ed.set_option(nu, OptionValue::Bool(true), AccessScope::Global, SetInfo::default())
		.unwrap();
	ed.focus_window(first).unwrap();
	assert_eq!(ed.option_value(nu, AccessScope::Global), Some(OptionValue::Bool(true)));
}
