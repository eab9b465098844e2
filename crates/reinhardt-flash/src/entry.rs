//! Flash entry bookkeeping
//!
//! Each flash key carries a small counter next to its value. The counters of
//! one session are kept together in a metadata object stored under
//! [`FlashConfig::flash_key`](crate::FlashConfig::flash_key).

use crate::value::FlashValue;
use serde::{Deserialize, Serialize};

/// Expiry state of a flash entry
///
/// Serialized as the counter `-1`, `0` or `1`.
///
/// ```text
/// AwaitingAccess --read--> Expiring --sweep--> (removed)
/// Fresh ---------sweep---> Expiring --sweep--> (removed)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i8", try_from = "i8")]
pub enum FlashState {
	/// Written with `remove_after_access`; kept until it is read
	AwaitingAccess,
	/// Written without `remove_after_access`; has not crossed a request boundary
	Fresh,
	/// Removed by the next sweep
	Expiring,
}

impl FlashState {
	/// Initial state for a write with the given policy
	pub fn for_policy(remove_after_access: bool) -> Self {
		if remove_after_access {
			FlashState::AwaitingAccess
		} else {
			FlashState::Fresh
		}
	}

	/// Stored counter value
	pub fn counter(self) -> i8 {
		match self {
			FlashState::AwaitingAccess => -1,
			FlashState::Fresh => 0,
			FlashState::Expiring => 1,
		}
	}

	/// State after the entry has been read without deleting it
	pub fn after_access(self) -> Self {
		match self {
			FlashState::AwaitingAccess => FlashState::Expiring,
			other => other,
		}
	}
}

impl From<FlashState> for i8 {
	fn from(state: FlashState) -> Self {
		state.counter()
	}
}

impl TryFrom<i8> for FlashState {
	type Error = String;

	fn try_from(counter: i8) -> Result<Self, Self::Error> {
		match counter {
			-1 => Ok(FlashState::AwaitingAccess),
			0 => Ok(FlashState::Fresh),
			1 => Ok(FlashState::Expiring),
			other => Err(format!("invalid flash counter: {}", other)),
		}
	}
}

/// Snapshot of one live flash entry
#[derive(Debug, Clone, PartialEq)]
pub struct FlashEntry {
	pub key: String,
	pub value: FlashValue,
	pub state: FlashState,
	pub remove_after_access: bool,
	/// Request counter at the time of the last write
	pub created_at_request: u64,
}

impl FlashEntry {
	/// Whether the entry has been read since it was written
	pub fn accessed_since_creation(&self) -> bool {
		self.remove_after_access && self.state == FlashState::Expiring
	}
}

/// Bookkeeping record for one key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct EntryMeta {
	pub(crate) key: String,
	pub(crate) state: FlashState,
	pub(crate) remove_after_access: bool,
	#[serde(default)]
	pub(crate) created_at: u64,
}

/// Metadata object stored in the session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub(crate) struct FlashMeta {
	#[serde(default)]
	pub(crate) request: u64,
	#[serde(default)]
	pub(crate) entries: Vec<EntryMeta>,
}

impl FlashMeta {
	pub(crate) fn position(&self, key: &str) -> Option<usize> {
		self.entries.iter().position(|e| e.key == key)
	}

	pub(crate) fn get(&self, key: &str) -> Option<&EntryMeta> {
		self.entries.iter().find(|e| e.key == key)
	}

	/// Reset the record for `key`, keeping its position if present
	pub(crate) fn upsert(&mut self, key: &str, remove_after_access: bool) {
		let state = FlashState::for_policy(remove_after_access);
		let created_at = self.request;
		match self.entries.iter_mut().find(|e| e.key == key) {
			Some(entry) => {
				entry.state = state;
				entry.remove_after_access = remove_after_access;
				entry.created_at = created_at;
			}
			None => self.entries.push(EntryMeta {
				key: key.to_string(),
				state,
				remove_after_access,
				created_at,
			}),
		}
	}

	pub(crate) fn remove(&mut self, key: &str) -> Option<EntryMeta> {
		self.position(key).map(|index| self.entries.remove(index))
	}
}
