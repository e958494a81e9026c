//! Editor core structure.
//!
//! The [`Editor`] owns the option registry, the workspace of windows and
//! buffers, and the current [`Context`]. Option access is split across:
//!
//! - [`options`] - scope-unaware accessors that act on the current context
//! - [`crate::context`] - scoped switching into another window or buffer
//! - [`crate::api`] - the public, scope-aware get/set surface

mod options;

use tracing::{debug, warn};
use vellum_registry::{OptionsRegistry, SetInfo};

use crate::config::{Config, ConfigError, ParsedConfig};
use crate::context::Context;
use crate::hooks::{FiletypeHook, HookChain};
use crate::presentation::{NullPresentation, PresentationObserver};
use crate::workspace::{BufferId, WindowId, Workspace, WorkspaceError};

#[cfg(test)]
mod tests;

/// Option registry, windows, buffers and the current window/buffer.
pub struct Editor {
	pub(crate) registry: OptionsRegistry,
	pub(crate) workspace: Workspace,
	/// Current window and buffer. Only focus changes and [`ContextGuard`]
	/// write this.
	///
	/// [`ContextGuard`]: crate::ContextGuard
	pub(crate) context: Context,
	pub(crate) hooks: HookChain,
	pub(crate) presentation: Box<dyn PresentationObserver>,
}

impl core::fmt::Debug for Editor {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("Editor")
			.field("context", &self.context)
			.field("registry", &self.registry)
			.field("hooks", &self.hooks.len())
			.finish_non_exhaustive()
	}
}

impl Default for Editor {
	fn default() -> Self {
		Self::new()
	}
}

impl Editor {
	/// Creates an editor with the builtin options and one scratch buffer.
	pub fn new() -> Self {
		Self::with_registry(OptionsRegistry::builtin())
	}

	/// Creates an editor over a custom option table.
	pub fn with_registry(registry: OptionsRegistry) -> Self {
		Self::from_parts(
			registry,
			crate::workspace::DEFAULT_MAX_BUFFERS,
			HookChain::default(),
		)
	}

	fn from_parts(registry: OptionsRegistry, max_buffers: usize, hooks: HookChain) -> Self {
		let workspace = Workspace::new(&registry, max_buffers);
		let (window, buffer) = workspace.initial();
		Self {
			registry,
			workspace,
			context: Context { window, buffer },
			hooks,
			presentation: Box::new(NullPresentation),
		}
	}

	/// Creates an editor from a configuration file's contents.
	///
	/// Configuration warnings are logged and otherwise ignored.
	pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
		let registry = OptionsRegistry::builtin();
		let parsed = config.resolve(&registry)?;
		for warning in &parsed.warnings {
			warn!(domain = "config", %warning, "configuration warning");
		}
		Ok(Self::from_parsed(registry, parsed))
	}

	/// Creates an editor from an already resolved configuration.
	///
	/// Global values are applied before the initial window and buffer exist,
	/// so their local copies start from the configured values.
	pub fn from_parsed(mut registry: OptionsRegistry, parsed: ParsedConfig) -> Self {
		for (idx, value) in parsed.globals {
			registry.global_mut().set(idx, value, SetInfo::config());
		}
		let mut hooks = HookChain::default();
		if !parsed.filetypes.is_empty() {
			hooks.register(Box::new(parsed.filetypes));
		}
		debug!(
			domain = "config",
			max_buffers = parsed.limits.max_buffers,
			hooks = hooks.len(),
			"editor configured"
		);
		Self::from_parts(registry, parsed.limits.max_buffers, hooks)
	}

	/// Adds a filetype hook.
	pub fn with_hook(mut self, hook: impl FiletypeHook + 'static) -> Self {
		self.hooks.register(Box::new(hook));
		self
	}

	/// Replaces the presentation observer.
	pub fn with_presentation(mut self, observer: impl PresentationObserver + 'static) -> Self {
		self.presentation = Box::new(observer);
		self
	}

	/// The current window and buffer.
	pub fn context(&self) -> Context {
		self.context
	}

	pub fn registry(&self) -> &OptionsRegistry {
		&self.registry
	}

	pub fn workspace(&self) -> &Workspace {
		&self.workspace
	}

	/// Creates a buffer without displaying it.
	pub fn create_buffer(
		&mut self,
		name: impl Into<String>,
		listed: bool,
	) -> Result<BufferId, WorkspaceError> {
		self.workspace.create_buffer(&self.registry, name, listed)
	}

	/// Opens a window on `buffer` without focusing it.
	pub fn open_window(&mut self, buffer: BufferId) -> Result<WindowId, WorkspaceError> {
		self.workspace.open_window(&self.registry, buffer)
	}

	/// Makes `window` current, updating focus order.
	///
	/// This is a user-visible activation, unlike the temporary switches made by
	/// [`ContextGuard`](crate::ContextGuard).
	pub fn focus_window(&mut self, window: WindowId) -> Result<(), WorkspaceError> {
		let buffer = self.workspace.resolve_window(window)?.buffer;
		self.workspace.touch_window(window)?;
		self.context = Context { window, buffer };
		debug!(domain = "workspace", window = %window, buffer = %buffer, "focused window");
		Ok(())
	}

	/// Displays `buffer` in the current window.
	pub fn edit_buffer(&mut self, buffer: BufferId) -> Result<(), WorkspaceError> {
		self.workspace
			.set_window_buffer(self.context.window, buffer)?;
		self.context.buffer = buffer;
		Ok(())
	}

	/// Marks a window as closing without removing it yet.
	pub fn begin_close_window(&mut self, window: WindowId) -> Result<(), WorkspaceError> {
		self.workspace.begin_close_window(window)
	}

	/// Closes a window. Closing the current window focuses the most recently
	/// focused remaining one.
	pub fn close_window(&mut self, window: WindowId) -> Result<(), WorkspaceError> {
		self.workspace.close_window(window)?;
		if self.context.window == window
			&& let Some(next) = self.workspace.most_recent_window()
		{
			self.focus_window(next)?;
		}
		debug!(domain = "workspace", window = %window, "closed window");
		Ok(())
	}
}
