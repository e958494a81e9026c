//! JSON-lines request loop.
//!
//! Each input line is one request object tagged by `method`; each answer is
//! one line, either `{"result": ...}` or `{"error": {"kind", "message"}}`.
//! A bad line produces an error answer and the loop carries on.
//!
//! ```text
//! {"method": "create_buffer", "name": "notes"}
//! {"method": "set", "name": "tabstop", "value": 4, "opts": {"buf": 2}}
//! {"method": "get", "name": "shiftwidth", "opts": {"filetype": "rust"}}
//! ```

use std::io::{BufRead, Write};

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::{debug, warn};
use vellum_editor::api::{self, Object, OptionRequest};
use vellum_editor::workspace::{BufferId, WindowId};
use vellum_editor::{Editor, ScopeTarget};


fn listed_default() -> bool {
	true
}

#[derive(Debug, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum Request {
	Get {
		name: String,
		#[serde(default)]
		opts: OptionRequest,
	},
	Set {
		name: String,
		value: Object,
		#[serde(default)]
		opts: OptionRequest,
	},
	GetStrict {
		name: String,
		#[serde(default)]
		win: Option<WindowId>,
		#[serde(default)]
		buf: Option<BufferId>,
	},
	Info {
		#[serde(default)]
		name: Option<String>,
		#[serde(default)]
		opts: OptionRequest,
	},
	CreateBuffer {
		#[serde(default)]
		name: String,
		#[serde(default = "listed_default")]
		listed: bool,
	},
	OpenWindow {
		buf: BufferId,
	},
	FocusWindow {
		win: WindowId,
	},
	CloseWindow {
		win: WindowId,
	},
	Context,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Response {
	Result(Value),
	Error(Value),
}

impl Response {
	fn error(kind: &str, message: impl ToString) -> Self {
		Response::Error(json!({ "kind": kind, "message": message.to_string() }))
	}
}

/// Answers one request line.
pub fn handle_line(editor: &mut Editor, channel: u64, line: &str) -> Response {
	match serde_json::from_str::<Request>(line) {
		Ok(request) => handle(editor, channel, request),
		Err(e) => {
			warn!(domain = "batch", error = %e, "malformed request");
			Response::error("InvalidRequest", e)
		}
	}
}

pub fn handle(editor: &mut Editor, channel: u64, request: Request) -> Response {
	debug!(domain = "batch", request = ?request, "handling request");
	let result = match request {
		Request::Get { name, opts } => api::get_option_value(editor, &name, &opts).map(respond),
		Request::Set { name, value, opts } => {
			api::set_option_value(editor, channel, &name, value, &opts)
				.map(|()| Response::Result(Value::Null))
		}
		Request::GetStrict { name, win, buf } => {
			let target = match (win, buf) {
				(Some(_), Some(_)) => {
					return Response::error("InvalidParameterCombination", "cannot use both 'buf' and 'win'");
				}
				(Some(win), None) => ScopeTarget::Window(win),
				(None, Some(buf)) => ScopeTarget::Buffer(buf),
				(None, None) => ScopeTarget::Global,
			};
			api::get_option_value_strict(editor, &name, target).map(respond)
		}
		Request::Info { name: Some(name), opts } => {
			api::get_option_info(editor, &name, &opts).map(respond)
		}
		Request::Info { name: None, .. } => Ok(respond(api::get_all_options_info(editor))),
		Request::CreateBuffer { name, listed } => {
			return workspace_result(editor.create_buffer(name, listed));
		}
		Request::OpenWindow { buf } => return workspace_result(editor.open_window(buf)),
		Request::FocusWindow { win } => return workspace_result(editor.focus_window(win)),
		Request::CloseWindow { win } => return workspace_result(editor.close_window(win)),
		Request::Context => Ok(respond(editor.context())),
	};

	result.unwrap_or_else(|e| match serde_json::to_value(e.to_response()) {
		Ok(error) => Response::Error(error),
		Err(e) => serialization_failure(e),
	})
}

fn workspace_result<T: Serialize, E: ToString>(result: Result<T, E>) -> Response {
	match result {
		Ok(value) => respond(value),
		Err(e) => Response::error("Workspace", e),
	}
}

/// Wraps `value` as a result line, or reports why it could not be encoded.
fn respond(value: impl Serialize) -> Response {
	match serde_json::to_value(value) {
		Ok(value) => Response::Result(value),
		Err(e) => serialization_failure(e),
	}
}

fn serialization_failure(error: serde_json::Error) -> Response {
	warn!(domain = "batch", %error, "response could not be encoded");
	Response::error("SerializationFailure", error)
}

/// Answers every non-blank line of `input` on `output`.
pub fn run(
	editor: &mut Editor,
	channel: u64,
	input: impl BufRead,
	mut output: impl Write,
) -> std::io::Result<usize> {
	let mut handled = 0;
	for line in input.lines() {
		let line = line?;
		if line.trim().is_empty() {
			continue;
		}
		let response = handle_line(editor, channel, &line);
		serde_json::to_writer(&mut output, &response)?;
		output.write_all(b"\n")?;
		handled += 1;
	}
	output.flush()?;
	Ok(handled)
}
