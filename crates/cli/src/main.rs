//! vellum: query and change editor options by scope.

mod batch;
mod cli;

use std::io;

use anyhow::Context as _;
use clap::Parser;
use cli::{Cli, Command};
use tracing::{debug, info};
use vellum_editor::Editor;
use vellum_editor::api::{self, OptionRequest};
use vellum_editor::config::Config;

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();
	setup_tracing(cli.verbose);

	let mut editor = match &cli.config {
		Some(path) => {
			let config = Config::load(path)?;
			Editor::from_config(&config)
				.with_context(|| format!("invalid configuration in {}", path.display()))?
		}
		None => Editor::new(),
	};
	debug!(context = ?editor.context(), "editor ready");

	match cli.command {
		Command::Get {
			name,
			scope,
			filetype,
		} => {
			let opts = OptionRequest {
				filetype,
				..scope.request()
			};
			let value = api::get_option_value(&mut editor, &name, &opts)?;
			print_json(&value)?;
		}
		Command::Set { name, value, scope } => {
			let value = cli::parse_value(editor.registry(), &name, &value);
			let opts = scope.request();
			api::set_option_value(&mut editor, 0, &name, value, &opts)?;
			let effective = api::get_option_value(&mut editor, &name, &opts)?;
			print_json(&effective)?;
		}
		Command::Info {
			name: Some(name),
			scope,
		} => print_json(&api::get_option_info(&editor, &name, &scope.request())?)?,
		Command::Info { name: None, .. } => print_json(&api::get_all_options_info(&editor))?,
		Command::Batch { channel } => {
			info!(channel, "reading requests from stdin");
			let handled = batch::run(&mut editor, channel, io::stdin().lock(), io::stdout().lock())?;
			debug!(handled, "batch finished");
		}
	}

	Ok(())
}

fn print_json(value: &impl serde::Serialize) -> anyhow::Result<()> {
	println!("{}", serde_json::to_string_pretty(value)?);
	Ok(())
}

fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_env("VELLUM_LOG")
		.or_else(|_| EnvFilter::try_from_default_env())
		.unwrap_or_else(|_| {
			if verbose {
				EnvFilter::new("vellum_editor=trace,debug")
			} else {
				EnvFilter::new("warn")
			}
		});

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(io::stderr)
		.init();
}
