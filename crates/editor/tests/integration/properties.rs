//! Property tests for round-trips, read idempotence and context restoration.

use proptest::prelude::*;
use vellum_editor::api::{Object, OptionRequest, get_option_value, set_option_value};
use vellum_editor::workspace::{BufferId, WindowId};

use crate::common::{editor, two_windows};

/// Options that accept any value of their type.
const BOOL_OPTIONS: &[&str] = &["expandtab", "list", "number", "wrap", "undofile"];
const INT_OPTIONS: &[&str] = &["scrolloff", "shiftwidth", "undolevels", "cmdheight"];

fn request(selector: u8, win: WindowId, buf: BufferId) -> OptionRequest {
	match selector % 8 {
		0 => OptionRequest::new(),
		1 => OptionRequest::new().scope("local"),
		2 => OptionRequest::new().scope("global"),
		3 => OptionRequest::new().win(win),
		4 => OptionRequest::new().buf(buf),
		5 => OptionRequest::new().win(WindowId(9000 + u64::from(selector))),
		6 => OptionRequest::new().filetype("rust"),
		_ => OptionRequest::new().win(win).scope("local"),
	}
}

proptest! {
	#[test]
	fn local_bool_round_trip(idx in 0..BOOL_OPTIONS.len(), value: bool) {
		let mut ed = editor();
		let name = BOOL_OPTIONS[idx];
		let layout = two_windows(&mut ed);
		let opts = if name == "expandtab" || name == "undofile" {
			OptionRequest::new().buf(layout.second_buffer)
		} else {
			OptionRequest::new().win(layout.second_window).scope("local")
		};

		set_option_value(&mut ed, 1, name, Object::Boolean(value), &opts).unwrap();
		prop_assert_eq!(get_option_value(&mut ed, name, &opts), Ok(Object::Boolean(value)));
	}

	#[test]
	fn local_int_round_trip(idx in 0..INT_OPTIONS.len(), value in 0i64..10_000) {
		let mut ed = editor();
		let name = INT_OPTIONS[idx];
		let opts = OptionRequest::new().scope("local");

		set_option_value(&mut ed, 1, name, Object::Integer(value), &opts).unwrap();
		prop_assert_eq!(get_option_value(&mut ed, name, &opts), Ok(Object::Integer(value)));
	}

	#[test]
	fn reads_are_idempotent(selector: u8, idx in 0..INT_OPTIONS.len()) {
		let mut ed = editor();
		let layout = two_windows(&mut ed);
		let opts = request(selector, layout.second_window, layout.second_buffer);
		let name = INT_OPTIONS[idx];

		let first = get_option_value(&mut ed, name, &opts);
		let second = get_option_value(&mut ed, name, &opts);
		prop_assert_eq!(first, second);
	}

	#[test]
	fn context_survives_any_request_sequence(
		steps in prop::collection::vec((any::<u8>(), any::<bool>(), 0..INT_OPTIONS.len(), -2i64..50), 1..24)
	) {
		let mut ed = editor();
		let layout = two_windows(&mut ed);
		let before = ed.context();

		for (selector, write, idx, value) in steps {
			let opts = request(selector, layout.second_window, layout.second_buffer);
			let name = INT_OPTIONS[idx];
			if write {
				let _ = set_option_value(&mut ed, 1, name, Object::Integer(value), &opts);
			} else {
				let _ = get_option_value(&mut ed, name, &opts);
			}
			prop_assert_eq!(ed.context(), before);
			prop_assert_eq!(ed.workspace().buffers().len(), 2);
		}
	}
}
