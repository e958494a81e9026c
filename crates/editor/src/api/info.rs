use serde::Serialize;
use vellum_registry::{AccessScope, OptionFlags, OptionIndex, SetInfo};

use super::Object;
use crate::Editor;
use crate::context::Context;

/// Introspection record for one option.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptionInfo {
	pub name: &'static str,
	/// Empty when the option has no short name.
	pub shortname: &'static str,
	#[serde(rename = "type")]
	pub value_type: &'static str,
	pub default: Object,
	pub was_set: bool,
	pub last_set_sid: i64,
	pub last_set_linenr: i64,
	pub last_set_chan: u64,
	/// `"global"`, `"win"` or `"buf"`.
	pub scope: &'static str,
	pub global_local: bool,
	pub commalist: bool,
	pub flaglist: bool,
	pub allows_duplicates: bool,
}

/// Builds the record for `option` as seen from `ctx`.
///
/// With `Effective` scope the last-set information comes from the local slot
/// if it was set there, otherwise from the global slot.
pub(crate) fn option_info(
	editor: &Editor,
	option: OptionIndex,
	scope: AccessScope,
	ctx: Context,
) -> OptionInfo {
	let def = editor.registry.def(option);
	let global = editor.registry.global();
	let local = editor.store_in(def.scope, ctx);

	let set_info = match scope {
		AccessScope::Global => global.set_info(option),
		AccessScope::Local if local.is_none() => global.set_info(option),
		AccessScope::Local => local.and_then(|s| s.set_info(option)),
		AccessScope::Effective => local
			.and_then(|s| s.set_info(option))
			.or_else(|| global.set_info(option)),
	};
	let SetInfo {
		script_id,
		line,
		channel,
	} = set_info.unwrap_or_default();

	OptionInfo {
		name: def.name,
		shortname: def.shortname.unwrap_or_default(),
		value_type: def.value_type.api_name(),
		default: def.default.to_value().into(),
		was_set: set_info.is_some(),
		last_set_sid: script_id,
		last_set_linenr: line,
		last_set_chan: channel,
		scope: def.scope.api_name(),
		global_local: def.global_local,
		commalist: def.flags.contains(OptionFlags::COMMA_LIST),
		flaglist: def.flags.contains(OptionFlags::FLAG_LIST),
		allows_duplicates: !def.flags.contains(OptionFlags::NO_DUPLICATES),
	}
}
