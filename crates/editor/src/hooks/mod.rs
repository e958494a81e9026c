//! Filetype hooks.
//!
//! When a buffer's `filetype` is set, the editor runs every registered
//! [`FiletypeHook`] so buffer-local defaults for that filetype can be
//! applied. Hooks run in ascending priority; ties keep registration order.
//!
//! ```ignore
//! struct RustIndent;
//!
//! impl FiletypeHook for RustIndent {
//!     fn name(&self) -> &str { "rust-indent" }
//!
//!     fn attach(&self, ctx: &mut FiletypeContext<'_>, filetype: &str) -> Result<(), HookError> {
//!         if filetype == "rust" {
//!             ctx.set("shiftwidth", 4.into()).map_err(|e| HookError::new(self.name(), e))?;
//!         }
//!         Ok(())
//!     }
//! }
//! ```

mod defaults;

pub use defaults::FiletypeDefaults;
use thiserror::Error;
use tracing::{debug, warn};
use vellum_registry::{
	OptionError, OptionIndex, OptionScope, OptionValue, OptionsRegistry, SetInfo,
};

use crate::workspace::{Buffer, BufferId};


/// Default hook priority.
pub const DEFAULT_PRIORITY: i16 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("filetype hook '{hook}' failed: {message}")]
pub struct HookError {
	pub hook: String,
	pub message: String,
}

impl HookError {
	pub fn new(hook: impl Into<String>, message: impl ToString) -> Self {
		Self {
			hook: hook.into(),
			message: message.to_string(),
		}
	}
}

/// Reacts to a buffer's filetype being set.
pub trait FiletypeHook {
	/// Name used in logs and errors.
	fn name(&self) -> &str;

	/// Lower runs first.
	fn priority(&self) -> i16 {
		DEFAULT_PRIORITY
	}

	fn attach(&self, ctx: &mut FiletypeContext<'_>, filetype: &str) -> Result<(), HookError>;
}

/// What a hook may touch: the buffer whose filetype was set.
pub struct FiletypeContext<'a> {
	registry: &'a OptionsRegistry,
	buffer: &'a mut Buffer,
}

impl<'a> FiletypeContext<'a> {
	pub(crate) fn new(registry: &'a OptionsRegistry, buffer: &'a mut Buffer) -> Self {
		Self { registry, buffer }
	}

	pub fn buffer_id(&self) -> BufferId {
		self.buffer.id
	}

	/// The buffer-local value of `name`, if it has one.
	pub fn get(&self, name: &str) -> Option<&OptionValue> {
		let idx = self.registry.find(name)?;
		self.buffer.options.get(idx)
	}

	/// Sets a buffer-local option by name.
	pub fn set(&mut self, name: &str, value: OptionValue) -> Result<(), OptionError> {
		let idx = self
			.registry
			.find(name)
			.filter(|&idx| !self.registry.is_hidden(idx))
			.ok_or_else(|| OptionError::UnknownOption(name.to_string()))?;
		self.set_index(idx, value)
	}

	/// Sets a buffer-local option. Options of any other scope are refused.
	pub fn set_index(&mut self, idx: OptionIndex, value: OptionValue) -> Result<(), OptionError> {
		let def = self.registry.def(idx);
		if def.scope != OptionScope::Buffer {
			return Err(OptionError::InvalidValue {
				option: def.name.to_string(),
				reason: format!("{} option cannot be set per filetype", def.scope.api_name()),
			});
		}
		self.registry.validate(idx, &value)?;
		self.buffer.options.set(idx, value, SetInfo::default());
		Ok(())
	}
}

/// Registered filetype hooks, kept in run order.
#[derive(Default)]
pub struct HookChain {
	hooks: Vec<Box<dyn FiletypeHook>>,
}

impl HookChain {
	pub fn register(&mut self, hook: Box<dyn FiletypeHook>) {
		debug!(domain = "hooks", hook = hook.name(), priority = hook.priority(), "registered filetype hook");
		self.hooks.push(hook);
		self.hooks.sort_by_key(|h| h.priority());
	}

	pub fn len(&self) -> usize {
		self.hooks.len()
	}

	pub fn is_empty(&self) -> bool {
		self.hooks.is_empty()
	}

	/// Runs every hook against `buffer`, stopping at the first failure.
	pub(crate) fn run(
		&self,
		registry: &OptionsRegistry,
		buffer: &mut Buffer,
		filetype: &str,
	) -> Result<(), HookError> {
		let mut ctx = FiletypeContext::new(registry, buffer);
		for hook in &self.hooks {
			debug!(domain = "hooks", hook = hook.name(), filetype, buffer = %ctx.buffer_id(), "running filetype hook");
			hook.attach(&mut ctx, filetype).inspect_err(|error| {
				warn!(domain = "hooks", hook = hook.name(), filetype, %error, "filetype hook failed");
			})?;
		}
		Ok(())
	}
}
