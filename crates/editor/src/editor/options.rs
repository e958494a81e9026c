//! Option accessors bound to the current window and buffer.
//!
//! These are the primitives behind `:set`, `:setlocal` and `:setglobal`.
//! They know nothing about request parameters: window- and buffer-local
//! slots always mean the slots of [`Editor::context`]. Reaching any other
//! window or buffer goes through a [`ContextGuard`](crate::ContextGuard).

use tracing::debug;
use vellum_registry::{
	AccessScope, OptionError, OptionFlags, OptionIndex, OptionResolver, OptionScope, OptionStore,
	OptionValue, SetInfo,
};

use crate::Editor;
use crate::context::Context;

impl Editor {
	/// Local store for `scope` in `ctx`; `None` for global-only options.
	pub(crate) fn store_in(&self, scope: OptionScope, ctx: Context) -> Option<&OptionStore> {
		match scope {
			OptionScope::Global => None,
			OptionScope::Window => self.workspace.window(ctx.window).map(|w| &w.options),
			OptionScope::Buffer => self.workspace.buffer(ctx.buffer).map(|b| &b.options),
		}
	}

	fn local_store_mut(&mut self, scope: OptionScope) -> Option<&mut OptionStore> {
		match scope {
			OptionScope::Global => None,
			OptionScope::Window => self
				.workspace
				.window_mut(self.context.window)
				.map(|w| &mut w.options),
			OptionScope::Buffer => self
				.workspace
				.buffer_mut(self.context.buffer)
				.map(|b| &mut b.options),
		}
	}

	/// Reads an option in the current context.
	///
	/// Returns `None` only for a local read of a global-local option that has
	/// no local value. Global-only options ignore `scope`.
	pub fn option_value(&self, idx: OptionIndex, scope: AccessScope) -> Option<OptionValue> {
		let def = self.registry.def(idx);
		let global = self.registry.global();
		let Some(local) = self.store_in(def.scope, self.context) else {
			return global.get(idx).cloned();
		};

		match scope {
			AccessScope::Global => global.get(idx).cloned(),
			AccessScope::Local => local.get(idx).cloned(),
			AccessScope::Effective => Some(
				OptionResolver::new()
					.with_local(local)
					.with_global(global)
					.resolve(idx, def),
			),
		}
	}

	/// Writes an option in the current context without side effects.
	///
	/// The value is validated before anything is stored. A write that needs a
	/// local slot fails when the current window or buffer no longer exists.
	pub fn set_option(
		&mut self,
		idx: OptionIndex,
		value: OptionValue,
		scope: AccessScope,
		info: SetInfo,
	) -> Result<(), OptionError> {
		self.registry.validate(idx, &value)?;
		let def = *self.registry.def(idx);

		let (global, local, clear_local) = match (def.scope.is_local(), scope) {
			(false, _) | (true, AccessScope::Global) => (true, false, false),
			(true, AccessScope::Local) => (false, true, false),
			(true, AccessScope::Effective) if def.global_local => (true, false, true),
			(true, AccessScope::Effective) => (true, true, false),
		};

		if local && self.local_store_mut(def.scope).is_none() {
			return Err(OptionError::NoLocalStore {
				option: def.name.to_string(),
				scope: match def.scope {
					OptionScope::Buffer => "buffer",
					_ => "window",
				},
			});
		}

		if global {
			self.registry.global_mut().set(idx, value.clone(), info);
		}
		if let Some(store) = self.local_store_mut(def.scope) {
			if local {
				store.set(idx, value, info);
			} else if clear_local {
				store.remove(idx);
			}
		}

		debug!(
			domain = "options",
			option = def.name,
			scope = ?scope,
			window = %self.context.window,
			buffer = %self.context.buffer,
			"option set"
		);
		Ok(())
	}

	/// Writes an option and tells the presentation layer about it.
	///
	/// Used for options flagged as affecting what is drawn.
	pub fn set_option_and_notify(
		&mut self,
		idx: OptionIndex,
		value: OptionValue,
		scope: AccessScope,
		info: SetInfo,
	) -> Result<(), OptionError> {
		self.set_option(idx, value, scope, info)?;
		let def = self.registry.def(idx);
		let name = def.name;
		if def.flags.contains(OptionFlags::REDRAW)
			&& let Some(effective) = self.option_value(idx, AccessScope::Effective)
		{
			self.presentation.option_changed(name, &effective);
		}
		Ok(())
	}

	/// Drops the local value of a global-local option in the current context.
	///
	/// Returns whether a local value was present.
	pub fn clear_local_option(&mut self, idx: OptionIndex) -> bool {
		let def = *self.registry.def(idx);
		if !def.global_local {
			return false;
		}
		let removed = self
			.local_store_mut(def.scope)
			.and_then(|store| store.remove(idx))
			.is_some();
		debug!(domain = "options", option = def.name, removed, "cleared local value");
		removed
	}
}
