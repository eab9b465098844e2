//! Flash store
//!
//! [`FlashStore`] layers one-shot messages on top of a [`SessionStore`].
//! Flash values live under their own keys in the session, next to ordinary
//! session variables, so a flash key and a session variable with the same
//! name overwrite each other. A metadata object under
//! [`FlashConfig::flash_key`] tracks the expiry state of every flash key.
//!
//! Two expiry policies are available per write:
//!
//! - `remove_after_access = true` (default): the entry stays until it is
//!   read; once read, it is removed at the next request boundary.
//! - `remove_after_access = false`: the entry survives exactly one request
//!   boundary, read or not, and is removed at the one after.
//!
//! The store never tracks time itself. The hosting pipeline calls
//! [`FlashStore::sweep`] once per request boundary.

use crate::config::FlashConfig;
use crate::entry::{FlashEntry, FlashMeta, FlashState};
use crate::levels::Level;
use crate::value::{FlashValue, Scalar};
use indexmap::IndexMap;
use reinhardt_sessions::SessionStore;

/// Outcome of a request boundary sweep
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SweepReport {
	/// Request counter after the sweep
	pub request: u64,
	/// Keys removed because they had expired
	pub removed: Vec<String>,
	/// Keys that crossed their one allowed boundary and expire at the next one
	pub aged: Vec<String>,
	/// Metadata records dropped because their session value was gone
	pub stale: Vec<String>,
}

impl SweepReport {
	/// Whether the sweep changed any entry
	pub fn is_empty(&self) -> bool {
		self.removed.is_empty() && self.aged.is_empty() && self.stale.is_empty()
	}
}

/// One-shot key/value messages over a session
///
/// The store either owns its session or borrows it (`FlashStore<&mut S>`).
///
/// # Examples
///
/// ```
/// use reinhardt_flash::FlashStore;
/// use reinhardt_sessions::Session;
///
/// let mut session = Session::new();
///
/// // Request 1: a form handler records the outcome and redirects
/// let mut flash = FlashStore::new(&mut session);
/// flash.set("success", "Your changes were saved");
///
/// // Request 2: the page after the redirect shows it
/// let mut flash = FlashStore::new(&mut session);
/// flash.sweep();
/// assert_eq!(flash.get("success").unwrap().as_str(), Some("Your changes were saved"));
///
/// // Request 3: it has been consumed
/// let mut flash = FlashStore::new(&mut session);
/// flash.sweep();
/// assert!(!flash.has("success"));
/// ```
#[derive(Debug)]
pub struct FlashStore<S> {
	session: S,
	config: FlashConfig,
}

impl<S: SessionStore> FlashStore<S> {
	/// Create a store with the default configuration
	pub fn new(session: S) -> Self {
		Self::with_config(session, FlashConfig::default())
	}

	/// Create a store with the given configuration
	pub fn with_config(session: S, config: FlashConfig) -> Self {
		Self { session, config }
	}

	pub fn config(&self) -> &FlashConfig {
		&self.config
	}

	/// The underlying session
	pub fn session(&self) -> &S {
		&self.session
	}

	/// Mutable access to the underlying session
	pub fn session_mut(&mut self) -> &mut S {
		&mut self.session
	}

	/// Release the underlying session
	pub fn into_inner(self) -> S {
		self.session
	}

	/// Returns the flash value for `key`
	///
	/// A `remove_after_access` entry read here is removed at the next
	/// request boundary; until then it stays readable.
	pub fn get(&mut self, key: &str) -> Option<FlashValue> {
		self.get_with(key, false)
	}

	/// Returns the flash value for `key`, or `default` if there is none
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_flash::{FlashStore, FlashValue};
	/// use reinhardt_sessions::Session;
	///
	/// let mut flash = FlashStore::new(Session::new());
	/// assert_eq!(flash.get_or("notice", "nothing new"), FlashValue::from("nothing new"));
	/// ```
	pub fn get_or(&mut self, key: &str, default: impl Into<FlashValue>) -> FlashValue {
		self.get(key).unwrap_or_else(|| default.into())
	}

	/// Returns the flash value for `key` and removes the entry immediately
	pub fn take(&mut self, key: &str) -> Option<FlashValue> {
		self.get_with(key, true)
	}

	/// Returns the flash value for `key`, deleting the entry when `delete` is set
	pub fn get_with(&mut self, key: &str, delete: bool) -> Option<FlashValue> {
		let mut meta = self.load_meta();
		let index = meta.position(key)?;
		let value = self.value_of(key)?;

		if delete {
			meta.entries.remove(index);
			self.session.remove(key);
			tracing::debug!(key, "flash taken");
		} else {
			let entry = &mut meta.entries[index];
			let next = entry.state.after_access();
			if next == entry.state {
				return Some(value);
			}
			entry.state = next;
			tracing::debug!(key, "flash accessed, expires at next request");
		}

		self.store_meta(&meta);
		Some(value)
	}

	/// Returns every live flash entry in write order
	///
	/// Entries read here follow the same rules as [`FlashStore::get`].
	pub fn get_all(&mut self) -> IndexMap<String, FlashValue> {
		self.collect_all(false)
	}

	/// Returns every live flash entry and removes them all
	pub fn take_all(&mut self) -> IndexMap<String, FlashValue> {
		self.collect_all(true)
	}

	fn collect_all(&mut self, delete: bool) -> IndexMap<String, FlashValue> {
		let mut meta = self.load_meta();
		let mut flashes = IndexMap::with_capacity(meta.entries.len());
		let mut kept = Vec::with_capacity(meta.entries.len());

		for mut entry in std::mem::take(&mut meta.entries) {
			let Some(value) = self.value_of(&entry.key) else {
				tracing::debug!(key = %entry.key, "dropping stale flash record");
				continue;
			};
			if delete {
				self.session.remove(&entry.key);
			} else {
				entry.state = entry.state.after_access();
				kept.push(entry.clone());
			}
			flashes.insert(entry.key, value);
		}

		meta.entries = kept;
		self.store_meta(&meta);
		flashes
	}

	/// Sets a flash value using the configured expiry policy
	///
	/// An existing flash entry or session variable named `key` is overwritten.
	pub fn set(&mut self, key: impl Into<String>, value: impl Into<FlashValue>) {
		let remove_after_access = self.config.remove_after_access;
		self.set_with(key, value, remove_after_access);
	}

	/// Sets a flash value with an explicit expiry policy
	pub fn set_with(
		&mut self,
		key: impl Into<String>,
		value: impl Into<FlashValue>,
		remove_after_access: bool,
	) {
		let key = key.into();
		if self.is_reserved(&key) {
			tracing::warn!(key = %key, "flash key collides with the flash metadata key, set ignored");
			return;
		}
		self.write(key, value.into(), remove_after_access);
	}

	/// Appends a flash value using the configured expiry policy
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_flash::{FlashStore, FlashValue};
	/// use reinhardt_sessions::Session;
	///
	/// let mut flash = FlashStore::new(Session::new());
	/// flash.add("info", "a");
	/// flash.add("info", "b");
	/// assert_eq!(flash.get("info"), Some(FlashValue::from(vec!["a", "b"])));
	/// ```
	pub fn add(&mut self, key: impl Into<String>, value: impl Into<Scalar>) {
		let remove_after_access = self.config.remove_after_access;
		self.add_with(key, value, remove_after_access);
	}

	/// Appends a flash value with an explicit expiry policy
	///
	/// With no existing value a single-element list is stored. An existing
	/// scalar (flash or plain session variable) is promoted to a list first.
	/// The expiry state is reset according to `remove_after_access`.
	pub fn add_with(
		&mut self,
		key: impl Into<String>,
		value: impl Into<Scalar>,
		remove_after_access: bool,
	) {
		let key = key.into();
		if self.is_reserved(&key) {
			tracing::warn!(key = %key, "flash key collides with the flash metadata key, add ignored");
			return;
		}
		let value = value.into();
		let updated = match self.value_of(&key) {
			None | Some(FlashValue::Scalar(Scalar::Null)) => FlashValue::List(vec![value]),
			Some(existing) => existing.appended(value),
		};
		self.write(key, updated, remove_after_access);
	}

	fn write(&mut self, key: String, value: FlashValue, remove_after_access: bool) {
		let mut meta = self.load_meta();
		meta.upsert(&key, remove_after_access);
		tracing::debug!(key = %key, remove_after_access, "flash written");
		self.session.insert(key, value.to_json());
		self.store_meta(&meta);
	}

	/// Removes a flash entry, returning its value
	///
	/// Flash keys share the session namespace: a plain session variable named
	/// `key` is removed as well, but only a flash entry's value is returned.
	pub fn remove(&mut self, key: &str) -> Option<FlashValue> {
		if self.is_reserved(key) {
			tracing::warn!(key, "flash key collides with the flash metadata key, remove ignored");
			return None;
		}
		let mut meta = self.load_meta();
		let was_flash = meta.remove(key).is_some();
		let value = self.session.remove(key);
		if !was_flash {
			return None;
		}
		self.store_meta(&meta);
		value.as_ref().and_then(FlashValue::from_json)
	}

	/// Removes every flash entry, returning how many were removed
	///
	/// Session variables that are not flash entries are left alone.
	pub fn remove_all(&mut self) -> usize {
		let mut meta = self.load_meta();
		let entries = std::mem::take(&mut meta.entries);
		for entry in &entries {
			self.session.remove(&entry.key);
		}
		self.store_meta(&meta);
		tracing::debug!(count = entries.len(), "all flashes removed");
		entries.len()
	}

	/// Whether a flash entry currently exists for `key`
	///
	/// Unlike [`FlashStore::get`], this does not count as reading the entry.
	pub fn has(&self, key: &str) -> bool {
		self.load_meta().get(key).is_some() && self.value_of(key).is_some()
	}

	/// Processes a request boundary
	///
	/// Must be called once at the start of every request on this session,
	/// before any flash is read. Expiring entries are removed, entries that
	/// were written without `remove_after_access` start expiring, and
	/// unread `remove_after_access` entries are kept.
	pub fn sweep(&mut self) -> SweepReport {
		let mut meta = self.load_meta();
		meta.request += 1;
		let mut report = SweepReport {
			request: meta.request,
			..SweepReport::default()
		};
		let mut kept = Vec::with_capacity(meta.entries.len());

		for mut entry in std::mem::take(&mut meta.entries) {
			if !self.session.contains_key(&entry.key) {
				report.stale.push(entry.key);
				continue;
			}
			match entry.state {
				FlashState::Expiring => {
					self.session.remove(&entry.key);
					report.removed.push(entry.key);
				}
				FlashState::Fresh => {
					entry.state = FlashState::Expiring;
					report.aged.push(entry.key.clone());
					kept.push(entry);
				}
				FlashState::AwaitingAccess => kept.push(entry),
			}
		}

		meta.entries = kept;
		self.store_meta(&meta);
		tracing::debug!(
			request = report.request,
			removed = report.removed.len(),
			aged = report.aged.len(),
			stale = report.stale.len(),
			"flash sweep"
		);
		report
	}

	/// Alias of [`FlashStore::sweep`] named after the event it handles
	pub fn advance_request_boundary(&mut self) -> SweepReport {
		self.sweep()
	}

	/// Number of live flash entries
	pub fn len(&self) -> usize {
		self.keys().len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Keys of the live flash entries, in write order
	pub fn keys(&self) -> Vec<String> {
		self.load_meta()
			.entries
			.into_iter()
			.filter(|e| self.value_of(&e.key).is_some())
			.map(|e| e.key)
			.collect()
	}

	/// Expiry state of `key`, without reading it
	pub fn state(&self, key: &str) -> Option<FlashState> {
		self.entry(key).map(|e| e.state)
	}

	/// Snapshot of the entry for `key`, without reading it
	pub fn entry(&self, key: &str) -> Option<FlashEntry> {
		let meta = self.load_meta();
		let record = meta.get(key)?;
		Some(FlashEntry {
			key: record.key.clone(),
			value: self.value_of(key)?,
			state: record.state,
			remove_after_access: record.remove_after_access,
			created_at_request: record.created_at,
		})
	}

	/// Number of request boundaries this session has crossed
	pub fn request_count(&self) -> u64 {
		self.load_meta().request
	}

	/// Appends `text` under the key of `level`
	pub fn add_message(&mut self, level: Level, text: impl Into<String>) {
		self.add(level.as_str(), Scalar::Text(text.into()));
	}

	/// Reads the messages stored under the key of `level`
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_flash::{FlashStore, Level, Scalar};
	/// use reinhardt_sessions::Session;
	///
	/// let mut flash = FlashStore::new(Session::new());
	/// flash.add_message(Level::Warning, "Disk almost full");
	/// flash.add_message(Level::Warning, "Backup overdue");
	///
	/// let warnings = flash.messages(Level::Warning);
	/// assert_eq!(warnings.len(), 2);
	/// assert_eq!(warnings[0], Scalar::Text("Disk almost full".into()));
	/// assert!(flash.messages(Level::Error).is_empty());
	/// ```
	pub fn messages(&mut self, level: Level) -> Vec<Scalar> {
		self.get(level.as_str())
			.map(FlashValue::into_vec)
			.unwrap_or_default()
	}

	fn is_reserved(&self, key: &str) -> bool {
		key == self.config.flash_key
	}

	fn value_of(&self, key: &str) -> Option<FlashValue> {
		let raw = self.session.get(key)?;
		let value = FlashValue::from_json(raw);
		if value.is_none() {
			tracing::warn!(key, "session value is not a flash value");
		}
		value
	}

	fn load_meta(&self) -> FlashMeta {
		let Some(raw) = self.session.get(&self.config.flash_key) else {
			return FlashMeta::default();
		};
		match serde_json::from_value(raw.clone()) {
			Ok(meta) => meta,
			Err(e) => {
				tracing::warn!(
					flash_key = %self.config.flash_key,
					error = %e,
					"malformed flash metadata, treating as empty"
				);
				FlashMeta::default()
			}
		}
	}

	fn store_meta(&mut self, meta: &FlashMeta) {
		match serde_json::to_value(meta) {
			Ok(value) => {
				self.session.insert(self.config.flash_key.clone(), value);
			}
			Err(e) => {
				tracing::error!(error = %e, "failed to encode flash metadata");
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use reinhardt_sessions::Session;
	use rstest::{fixture, rstest};
	use serde_json::{Value, json};
	use std::collections::HashMap;

	#[fixture]
	fn session() -> Session {
		Session::with_id("test-session")
	}

	#[rstest]
	fn test_get_missing_key(mut session: Session) {
		let mut flash = FlashStore::new(&mut session);

		assert_eq!(flash.get("missing"), None);
		assert_eq!(flash.get_or("missing", "fallback"), FlashValue::from("fallback"));
		assert!(!flash.has("missing"));
		assert!(flash.is_empty());
	}

	#[rstest]
	fn test_set_then_get(mut session: Session) {
		// Arrange
		let mut flash = FlashStore::new(&mut session);

		// Act
		flash.set("notice", "saved");

		// Assert
		assert!(flash.has("notice"));
		assert_eq!(flash.get("notice"), Some(FlashValue::from("saved")));
		assert_eq!(session.get("notice"), Some(&json!("saved")));
	}

	#[rstest]
	fn test_get_marks_entry_expiring_but_keeps_it_readable(mut session: Session) {
		let mut flash = FlashStore::new(&mut session);
		flash.set("notice", "saved");
		assert_eq!(flash.state("notice"), Some(FlashState::AwaitingAccess));

		flash.get("notice");

		assert_eq!(flash.state("notice"), Some(FlashState::Expiring));
		assert_eq!(flash.get("notice"), Some(FlashValue::from("saved")));
	}

	#[rstest]
	fn test_has_does_not_mark_access(mut session: Session) {
		let mut flash = FlashStore::new(&mut session);
		flash.set("notice", true);

		assert!(flash.has("notice"));

		assert_eq!(flash.state("notice"), Some(FlashState::AwaitingAccess));
	}

	#[rstest]
	fn test_take_removes_immediately(mut session: Session) {
		let mut flash = FlashStore::new(&mut session);
		flash.set("notice", "once");

		assert_eq!(flash.take("notice"), Some(FlashValue::from("once")));

		assert_eq!(flash.get("notice"), None);
		assert!(!session.contains_key("notice"));
	}

	#[rstest]
	fn test_add_builds_ordered_list(mut session: Session) {
		let mut flash = FlashStore::new(&mut session);

		flash.add("info", "a");
		flash.add("info", "b");
		flash.add("info", 3);

		assert_eq!(
			flash.get("info"),
			Some(FlashValue::List(vec![
				Scalar::Text("a".to_string()),
				Scalar::Text("b".to_string()),
				Scalar::Int(3),
			]))
		);
	}

	#[rstest]
	fn test_add_promotes_existing_scalar(mut session: Session) {
		let mut flash = FlashStore::new(&mut session);
		flash.set("info", "first");

		flash.add("info", "second");

		assert_eq!(flash.get("info"), Some(FlashValue::from(vec!["first", "second"])));
	}

	#[rstest]
	fn test_add_resets_policy(mut session: Session) {
		let mut flash = FlashStore::new(&mut session);
		flash.set("info", "first");
		flash.get("info");

		flash.add_with("info", "second", false);

		let entry = flash.entry("info").unwrap();
		assert_eq!(entry.state, FlashState::Fresh);
		assert!(!entry.remove_after_access);
	}

	#[rstest]
	fn test_set_overwrites_session_variable(mut session: Session) {
		session.insert("greeting".to_string(), json!("plain"));
		let mut flash = FlashStore::new(&mut session);

		flash.set("greeting", "flash");

		assert_eq!(flash.get("greeting"), Some(FlashValue::from("flash")));
	}

	#[rstest]
	fn test_add_appends_to_session_variable(mut session: Session) {
		session.insert("greeting".to_string(), json!("plain"));
		let mut flash = FlashStore::new(&mut session);

		flash.add("greeting", "flash");

		assert_eq!(flash.get("greeting"), Some(FlashValue::from(vec!["plain", "flash"])));
	}

	#[rstest]
	fn test_plain_session_variable_is_not_a_flash(mut session: Session) {
		session.insert("user_id".to_string(), json!(7));
		let mut flash = FlashStore::new(&mut session);

		assert!(!flash.has("user_id"));
		assert_eq!(flash.get("user_id"), None);
	}

	#[rstest]
	fn test_remove_present_and_absent(mut session: Session) {
		let mut flash = FlashStore::new(&mut session);
		flash.set("notice", "bye");

		assert_eq!(flash.remove("notice"), Some(FlashValue::from("bye")));
		assert!(!flash.has("notice"));
		assert_eq!(flash.remove("notice"), None);
	}

	#[rstest]
	fn test_remove_deletes_plain_variable_without_returning_it(mut session: Session) {
		session.insert("user_id".to_string(), json!(7));
		let mut flash = FlashStore::new(&mut session);

		assert_eq!(flash.remove("user_id"), None);

		assert!(!session.contains_key("user_id"));
	}

	#[rstest]
	fn test_remove_all_keeps_session_variables(mut session: Session) {
		// Arrange
		session.insert("user_id".to_string(), json!(7));
		let mut flash = FlashStore::new(&mut session);
		flash.set("a", 1);
		flash.add("b", "x");

		// Act
		let removed = flash.remove_all();

		// Assert
		assert_eq!(removed, 2);
		assert!(!flash.has("a"));
		assert!(!flash.has("b"));
		assert!(flash.is_empty());
		assert_eq!(session.get("user_id"), Some(&json!(7)));
	}

	#[rstest]
	fn test_get_all_in_write_order(mut session: Session) {
		let mut flash = FlashStore::new(&mut session);
		flash.set("zeta", 1);
		flash.set("alpha", 2);
		flash.add("mid", "m");

		let all = flash.get_all();

		let keys: Vec<_> = all.keys().cloned().collect();
		assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
		assert_eq!(all["mid"], FlashValue::from(vec!["m"]));
		assert_eq!(flash.state("zeta"), Some(FlashState::Expiring));
		assert_eq!(flash.len(), 3);
	}

	#[rstest]
	fn test_take_all_clears_entries(mut session: Session) {
		let mut flash = FlashStore::new(&mut session);
		flash.set("a", 1);
		flash.set("b", 2);

		let all = flash.take_all();

		assert_eq!(all.len(), 2);
		assert!(flash.get_all().is_empty());
		assert!(!session.contains_key("a"));
	}

	#[rstest]
	fn test_get_all_drops_stale_records(mut session: Session) {
		let mut flash = FlashStore::new(&mut session);
		flash.set("a", 1);
		flash.set("b", 2);
		flash.session_mut().remove("a");

		let all = flash.get_all();

		assert_eq!(all.len(), 1);
		assert!(flash.entry("a").is_none());
		assert_eq!(flash.keys(), vec!["b".to_string()]);
	}

	#[rstest]
	fn test_sweep_drops_stale_records(mut session: Session) {
		// Arrange
		let mut flash = FlashStore::new(&mut session);
		flash.set("a", 1);
		flash.set_with("b", 2, false);
		flash.session_mut().remove("a");

		// Act
		let report = flash.sweep();

		// Assert
		assert_eq!(report.stale, vec!["a".to_string()]);
		assert!(report.removed.is_empty());
		assert_eq!(report.aged, vec!["b".to_string()]);
		assert!(flash.entry("a").is_none());
		assert_eq!(flash.keys(), vec!["b".to_string()]);
	}

	#[rstest]
	#[case::bool(json!(false))]
	#[case::zero(json!(0))]
	#[case::empty_text(json!(""))]
	fn test_add_promotes_falsy_scalar(mut session: Session, #[case] existing: Value) {
		session.insert("info".to_string(), existing.clone());
		let mut flash = FlashStore::new(&mut session);

		flash.add("info", "x");

		let expected = FlashValue::from_json(&existing).unwrap().appended("x");
		assert_eq!(flash.get("info"), Some(expected));
	}

	#[rstest]
	fn test_add_replaces_null(mut session: Session) {
		session.insert("info".to_string(), Value::Null);
		let mut flash = FlashStore::new(&mut session);

		flash.add("info", "x");

		assert_eq!(flash.get("info"), Some(FlashValue::from(vec!["x"])));
	}

	#[rstest]
	fn test_sweep_lifecycle_remove_after_access(mut session: Session) {
		let mut flash = FlashStore::new(&mut session);
		flash.set("notice", "hi");

		// Unread entries survive any number of boundaries
		flash.sweep();
		flash.sweep();
		assert!(flash.has("notice"));

		flash.get("notice");
		let report = flash.sweep();

		assert_eq!(report.removed, vec!["notice".to_string()]);
		assert!(!flash.has("notice"));
	}

	#[rstest]
	fn test_sweep_lifecycle_next_request(mut session: Session) {
		let mut flash = FlashStore::new(&mut session);
		flash.set_with("banner", "hi", false);

		let first = flash.sweep();
		assert_eq!(first.aged, vec!["banner".to_string()]);
		assert!(flash.has("banner"));

		let second = flash.sweep();
		assert_eq!(second.removed, vec!["banner".to_string()]);
		assert!(!flash.has("banner"));
	}

	#[rstest]
	fn test_sweep_counts_requests(mut session: Session) {
		let mut flash = FlashStore::new(&mut session);
		assert_eq!(flash.request_count(), 0);

		flash.sweep();
		let report = flash.advance_request_boundary();

		assert_eq!(report.request, 2);
		assert!(report.is_empty());
		flash.set("k", true);
		assert_eq!(flash.entry("k").unwrap().created_at_request, 2);
	}

	#[rstest]
	fn test_sweep_leaves_session_variables(mut session: Session) {
		session.insert("user_id".to_string(), json!(7));
		let mut flash = FlashStore::new(&mut session);
		flash.set_with("a", 1, false);

		flash.sweep();
		flash.sweep();

		assert_eq!(session.get("user_id"), Some(&json!(7)));
		assert!(!session.contains_key("a"));
	}

	#[rstest]
	fn test_malformed_metadata_treated_as_empty(mut session: Session) {
		session.insert("__flash".to_string(), json!("garbage"));
		session.insert("notice".to_string(), json!("x"));
		let mut flash = FlashStore::new(&mut session);

		assert!(!flash.has("notice"));
		flash.set("fresh", 1);
		assert!(flash.has("fresh"));
	}

	#[rstest]
	fn test_reserved_key_ignored(mut session: Session) {
		let mut flash = FlashStore::new(&mut session);
		flash.set("a", 1);

		flash.set("__flash", "oops");
		flash.add("__flash", "oops");

		assert_eq!(flash.remove("__flash"), None);
		assert!(flash.has("a"));
	}

	#[rstest]
	fn test_custom_flash_key(mut session: Session) {
		let config = FlashConfig::new().with_flash_key("_messages");
		let mut flash = FlashStore::with_config(&mut session, config);

		flash.set("notice", 1);

		assert!(session.contains_key("_messages"));
		assert!(!session.contains_key("__flash"));
	}

	#[rstest]
	fn test_config_default_policy(mut session: Session) {
		let config = FlashConfig::new().with_remove_after_access(false);
		let mut flash = FlashStore::with_config(&mut session, config);

		flash.set("notice", 1);

		assert_eq!(flash.state("notice"), Some(FlashState::Fresh));
	}

	#[rstest]
	fn test_level_messages() {
		let mut flash = FlashStore::new(Session::new());
		flash.add_message(Level::Success, "Saved");
		flash.add_message(Level::Error, "Upload failed");

		assert_eq!(flash.messages(Level::Success), vec![Scalar::Text("Saved".to_string())]);
		assert_eq!(flash.keys(), vec!["success".to_string(), "error".to_string()]);
	}

	#[rstest]
	fn test_works_on_plain_map() {
		let mut map: HashMap<String, Value> = HashMap::new();
		let mut flash = FlashStore::new(&mut map);

		flash.set("k", "v");

		assert!(flash.has("k"));
		assert_eq!(map.get("k"), Some(&json!("v")));
	}

	#[rstest]
	fn test_owned_store_into_inner() {
		let mut flash = FlashStore::new(Session::with_id("owned"));
		flash.set("k", "v");

		let session = flash.into_inner();

		assert_eq!(session.id(), "owned");
		assert_eq!(session.get("k"), Some(&json!("v")));
	}
}
