//! Filetype default probes.

use std::cell::RefCell;
use std::rc::Rc;

use pretty_assertions::assert_eq;
use vellum_editor::Editor;
use vellum_editor::api::{ErrorKind, Object, OptionRequest, get_option_value};
use vellum_editor::config::Config;
use vellum_editor::hooks::{FiletypeContext, FiletypeHook, HookError};
use vellum_editor::workspace::BufferId;

use crate::common::editor;

const CONFIG: &str = r#"
[options]
shiftwidth = 2

[filetype.rust]
shiftwidth = 4
expandtab = true
"#;

fn configured() -> Editor {
	let _ = tracing_subscriber::fmt::try_init();
	Editor::from_config(&Config::from_toml(CONFIG).unwrap()).unwrap()
}

/// Records which buffers hooks ran against.
#[derive(Clone, Default)]
struct Seen(Rc<RefCell<Vec<(BufferId, String)>>>);

impl FiletypeHook for Seen {
	fn name(&self) -> &str {
		"seen"
	}

	fn attach(&self, ctx: &mut FiletypeContext<'_>, filetype: &str) -> Result<(), HookError> {
		self.0.borrow_mut().push((ctx.buffer_id(), filetype.to_string()));
		Ok(())
	}
}

#[test]
fn probe_returns_filetype_defaults() {
	let mut ed = configured();
	let rust = OptionRequest::new().filetype("rust");

	assert_eq!(get_option_value(&mut ed, "shiftwidth", &rust), Ok(Object::Integer(4)));
	assert_eq!(get_option_value(&mut ed, "et", &rust), Ok(Object::Boolean(true)));
	assert_eq!(
		get_option_value(&mut ed, "shiftwidth", &OptionRequest::new().filetype("go")),
		Ok(Object::Integer(2))
	);
	assert_eq!(
		get_option_value(&mut ed, "shiftwidth", &OptionRequest::new()),
		Ok(Object::Integer(2))
	);
}

#[test]
fn probe_sees_baseline_and_filetype() {
	let mut ed = editor();
	let opts = OptionRequest::new().filetype("markdown");
	assert_eq!(get_option_value(&mut ed, "filetype", &opts), Ok(Object::from("markdown")));
	assert_eq!(get_option_value(&mut ed, "buftype", &opts), Ok(Object::from("nofile")));
	assert_eq!(get_option_value(&mut ed, "swapfile", &opts), Ok(Object::Boolean(false)));
	assert_eq!(get_option_value(&mut ed, "modeline", &opts), Ok(Object::Boolean(false)));
}

#[test]
fn probe_buffer_is_never_observable() {
	let seen = Seen::default();
	let mut ed = editor().with_hook(seen.clone());
	let before_buffers: Vec<_> = ed.workspace().buffers().iter().map(|b| b.id).collect();
	let before_listed = ed.workspace().list_buffers();
	let before_ctx = ed.context();

	get_option_value(&mut ed, "tabstop", &OptionRequest::new().filetype("rust")).unwrap();

	let probes = seen.0.borrow().clone();
	assert_eq!(probes.len(), 1);
	let (probe, filetype) = &probes[0];
	assert_eq!(filetype, "rust");
	assert!(!before_buffers.contains(probe));

	let after_buffers: Vec<_> = ed.workspace().buffers().iter().map(|b| b.id).collect();
	assert_eq!(after_buffers, before_buffers);
	assert_eq!(ed.workspace().list_buffers(), before_listed);
	assert_eq!(ed.context(), before_ctx);

	let err = get_option_value(&mut ed, "tabstop", &OptionRequest::new().buf(*probe)).unwrap_err();
	assert_eq!(err.kind(), ErrorKind::HandleNotFound);
}

#[test]
fn probe_handles_are_not_reused() {
	let seen = Seen::default();
	let mut ed = editor().with_hook(seen.clone());
	let opts = OptionRequest::new().filetype("c");
	get_option_value(&mut ed, "tabstop", &opts).unwrap();
	get_option_value(&mut ed, "tabstop", &opts).unwrap();
	let real = ed.create_buffer("real", true).unwrap();

	let ids: Vec<BufferId> = seen.0.borrow().iter().map(|(id, _)| *id).collect();
	assert_ne!(ids[0], ids[1]);
	assert!(!ids.contains(&real));
}

#[test]
fn probe_does_not_touch_real_buffers() {
	let mut ed = configured();
	let (_, buf) = ed.workspace().initial();
	get_option_value(&mut ed, "shiftwidth", &OptionRequest::new().filetype("rust")).unwrap();

	assert_eq!(
		get_option_value(&mut ed, "shiftwidth", &OptionRequest::new().buf(buf)),
		Ok(Object::Integer(2))
	);
	assert_eq!(
		get_option_value(&mut ed, "filetype", &OptionRequest::new().buf(buf)),
		Ok(Object::from(""))
	);
}
