//! Runtime storage for option values.
//!
//! The [`OptionStore`] is the container behind every storage slot: the
//! registry's global values, each window's local values and each buffer's
//! local values. Stores are combined with the
//! [`OptionResolver`](crate::options::OptionResolver) to find the effective
//! value of an option.

use serde::Serialize;

use crate::options::{OptionIndex, OptionValue};


/// Script id recorded for values set through the option API.
pub const API_CLIENT_SID: i64 = -9;

/// Script id recorded for values loaded from the configuration file.
pub const CONFIG_SID: i64 = -10;

/// Where a stored value was last set from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SetInfo {
	/// Script id, negative for internal sources.
	pub script_id: i64,
	/// Line within the script, `0` when not applicable.
	pub line: i64,
	/// Client channel, `0` for local sources.
	pub channel: u64,
}

impl SetInfo {
	/// Origin for a value set by an API client on `channel`.
	pub fn api_client(channel: u64) -> Self {
		Self {
			script_id: API_CLIENT_SID,
			line: 0,
			channel,
		}
	}

	/// Origin for a value read from the configuration file.
	pub fn config() -> Self {
		Self {
			script_id: CONFIG_SID,
			line: 0,
			channel: 0,
		}
	}
}

#[derive(Debug, Clone, PartialEq)]
struct Slot {
	value: OptionValue,
	/// `None` while the slot still holds a default or inherited value.
	set_info: Option<SetInfo>,
}

/// Runtime storage for option values using dense-index slots.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionStore {
	slots: Vec<Option<Slot>>,
}

impl OptionStore {
	/// Creates an empty store.
	pub fn new() -> Self {
		Self::default()
	}

	fn ensure_len(&mut self, idx: OptionIndex) {
		let i = idx.as_usize();
		if i >= self.slots.len() {
			self.slots.resize_with(i + 1, || None);
		}
	}

	/// Stores a value that was explicitly set.
	pub fn set(&mut self, idx: OptionIndex, value: OptionValue, info: SetInfo) {
		self.ensure_len(idx);
		self.slots[idx.as_usize()] = Some(Slot {
			value,
			set_info: Some(info),
		});
	}

	/// Stores a default or inherited value without marking it as set.
	pub fn init(&mut self, idx: OptionIndex, value: OptionValue) {
		self.ensure_len(idx);
		self.slots[idx.as_usize()] = Some(Slot {
			value,
			set_info: None,
		});
	}

	/// Gets an option value, returning `None` if not present.
	pub fn get(&self, idx: OptionIndex) -> Option<&OptionValue> {
		self.slot(idx).map(|s| &s.value)
	}

	/// Returns where the value was last set, if it was set explicitly.
	pub fn set_info(&self, idx: OptionIndex) -> Option<SetInfo> {
		self.slot(idx)?.set_info
	}

	pub fn contains(&self, idx: OptionIndex) -> bool {
		self.slot(idx).is_some()
	}

	fn slot(&self, idx: OptionIndex) -> Option<&Slot> {
		self.slots.get(idx.as_usize())?.as_ref()
	}

	/// Removes an option from the store.
	pub fn remove(&mut self, idx: OptionIndex) -> Option<OptionValue> {
		self.slots
			.get_mut(idx.as_usize())?
			.take()
			.map(|s| s.value)
	}

	/// Returns the number of options present in this store.
	pub fn len(&self) -> usize {
		self.slots.iter().filter(|v| v.is_some()).count()
	}

	/// Returns `true` if the store contains no options.
	pub fn is_empty(&self) -> bool {
		self.slots.iter().all(|v| v.is_none())
	}

	/// Returns an iterator over all present values.
	pub fn iter(&self) -> impl Iterator<Item = (OptionIndex, &OptionValue)> {
		self.slots
			.iter()
			.enumerate()
			.filter_map(|(i, s)| s.as_ref().map(|s| (OptionIndex(i as u32), &s.value)))
	}
}
