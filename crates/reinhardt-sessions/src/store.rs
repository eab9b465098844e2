//! Key/value surface of a session
//!
//! [`SessionStore`] is the view of a session that request code works with:
//! a flat mapping from string keys to JSON values. Every layer built on top
//! of a session (flash messages, authentication state, CSRF secrets) shares
//! this single namespace.

use serde_json::Value;
use std::collections::HashMap;

/// Synchronous key/value access to the data of one session
///
/// Implemented for [`Session`](crate::Session), for plain
/// `HashMap<String, Value>` maps, and for `&mut S` of any implementor so that
/// consumers can either own or borrow the store.
///
/// # Examples
///
/// ```
/// use reinhardt_sessions::{Session, SessionStore};
/// use serde_json::json;
///
/// fn remember_theme<S: SessionStore>(store: &mut S) {
///     store.insert("theme".to_string(), json!("dark"));
/// }
///
/// let mut session = Session::new();
/// remember_theme(&mut session);
/// assert!(session.contains_key("theme"));
/// ```
pub trait SessionStore {
	/// Get the value stored under `key`
	fn get(&self, key: &str) -> Option<&Value>;

	/// Store `value` under `key`, returning the previous value
	fn insert(&mut self, key: String, value: Value) -> Option<Value>;

	/// Remove `key`, returning its value
	fn remove(&mut self, key: &str) -> Option<Value>;

	/// All keys currently present
	fn keys(&self) -> Vec<String>;

	/// Check whether `key` is present
	fn contains_key(&self, key: &str) -> bool {
		self.get(key).is_some()
	}
}

impl<S: SessionStore + ?Sized> SessionStore for &mut S {
	fn get(&self, key: &str) -> Option<&Value> {
		(**self).get(key)
	}

	fn insert(&mut self, key: String, value: Value) -> Option<Value> {
		(**self).insert(key, value)
	}

	fn remove(&mut self, key: &str) -> Option<Value> {
		(**self).remove(key)
	}

	fn keys(&self) -> Vec<String> {
		(**self).keys()
	}

	fn contains_key(&self, key: &str) -> bool {
		(**self).contains_key(key)
	}
}

impl SessionStore for HashMap<String, Value> {
	fn get(&self, key: &str) -> Option<&Value> {
		HashMap::get(self, key)
	}

	fn insert(&mut self, key: String, value: Value) -> Option<Value> {
		HashMap::insert(self, key, value)
	}

	fn remove(&mut self, key: &str) -> Option<Value> {
		HashMap::remove(self, key)
	}

	fn keys(&self) -> Vec<String> {
		HashMap::keys(self).cloned().collect()
	}

	fn contains_key(&self, key: &str) -> bool {
		HashMap::contains_key(self, key)
	}
}
