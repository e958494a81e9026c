//! CLI schema for the vellum binary.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use vellum_editor::api::{Object, OptionRequest};
use vellum_editor::registry::OptionsRegistry;
use vellum_editor::registry::options::parse;
use vellum_editor::workspace::{BufferId, WindowId};

#[derive(Parser, Debug)]
#[command(name = "vellum")]
#[command(about = "Query and change editor options by scope")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Configuration file (TOML)
	#[arg(short, long, value_name = "PATH", global = true)]
	pub config: Option<PathBuf>,

	/// Verbose logging
	#[arg(short, long, global = true)]
	pub verbose: bool,

	/// Subcommand to execute.
	#[command(subcommand)]
	pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
	/// Print an option value as JSON
	Get {
		name: String,
		#[command(flatten)]
		scope: ScopeArgs,
		/// Probe the default for a buffer of this filetype
		#[arg(long, conflicts_with_all = ["scope", "win", "buf"])]
		filetype: Option<String>,
	},
	/// Set an option; VALUE is parsed by the option's type, then as JSON
	Set {
		name: String,
		value: String,
		#[command(flatten)]
		scope: ScopeArgs,
	},
	/// Print introspection data for one option, or for all of them
	Info {
		name: Option<String>,
		#[command(flatten)]
		scope: ScopeArgs,
	},
	/// Read JSON-lines requests from stdin and answer each on stdout
	Batch {
		/// Channel id recorded as the origin of values set in this session
		#[arg(long, default_value_t = 1)]
		channel: u64,
	},
}

/// Scope selection shared by get, set and info.
#[derive(Args, Debug, Default, Clone)]
pub struct ScopeArgs {
	/// "local" or "global"
	#[arg(long)]
	pub scope: Option<String>,
	/// Window handle
	#[arg(long, conflicts_with = "buf")]
	pub win: Option<u64>,
	/// Buffer handle
	#[arg(long)]
	pub buf: Option<u64>,
}

impl ScopeArgs {
	pub fn request(&self) -> OptionRequest {
		OptionRequest {
			scope: self.scope.clone(),
			win: self.win.map(WindowId),
			buf: self.buf.map(BufferId),
			filetype: None,
		}
	}
}

/// Parses a command-line value for option `name`.
///
/// `null` clears a local value. Otherwise the option's declared type decides
/// (`on`, `yes` and `1` are booleans for a boolean option). Values the
/// registry rejects fall back to JSON, then to a plain string, so the API
/// reports the real error.
pub fn parse_value(registry: &OptionsRegistry, name: &str, raw: &str) -> Object {
	if raw == "null" {
		return Object::Nil;
	}
	if let Ok(value) = parse::parse_value(registry, name, raw) {
		return value.into();
	}
	serde_json::from_str(raw).unwrap_or_else(|_| Object::String(raw.to_string()))
}
