//! Session data
//!
//! Provides the per-user session map shared by every request of one client

use crate::error::SessionResult;
use crate::store::SessionStore;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use uuid::Uuid;

/// Session ID type
pub type SessionId = String;

/// Session data stored in a backend
///
/// # Examples
///
/// ```
/// use reinhardt_sessions::{Session, SessionStore};
/// use serde_json::json;
///
/// let mut session = Session::new();
/// assert!(session.is_empty());
///
/// session.insert("user_id".to_string(), json!("123"));
/// assert_eq!(session.get("user_id"), Some(&json!("123")));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
	id: SessionId,
	/// Session data as key-value pairs
	pub data: HashMap<String, Value>,
}

impl Session {
	/// Create a new empty session with a random id
	pub fn new() -> Self {
		Self::with_id(Uuid::new_v4().to_string())
	}

	/// Create a new empty session with the given id
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_sessions::Session;
	///
	/// let session = Session::with_id("abc");
	/// assert_eq!(session.id(), "abc");
	/// ```
	pub fn with_id(id: impl Into<SessionId>) -> Self {
		Self {
			id: id.into(),
			data: HashMap::new(),
		}
	}

	/// Session id
	pub fn id(&self) -> &str {
		&self.id
	}

	/// Number of keys in the session
	pub fn len(&self) -> usize {
		self.data.len()
	}

	/// Check if session is empty
	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	/// Clear all session data, keeping the id
	pub fn clear(&mut self) {
		self.data.clear();
	}

	/// Encode the session as JSON, for backends that persist text
	pub fn to_json(&self) -> SessionResult<String> {
		Ok(serde_json::to_string(self)?)
	}

	/// Decode a session previously produced by [`Session::to_json`]
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_sessions::{Session, SessionStore};
	/// use serde_json::json;
	///
	/// let mut session = Session::with_id("s1");
	/// session.insert("k".to_string(), json!([1, 2]));
	///
	/// let restored = Session::from_json(&session.to_json().unwrap()).unwrap();
	/// assert_eq!(restored, session);
	/// ```
	pub fn from_json(data: &str) -> SessionResult<Self> {
		Ok(serde_json::from_str(data)?)
	}
}

impl Default for Session {
	fn default() -> Self {
		Self::new()
	}
}

impl SessionStore for Session {
	fn get(&self, key: &str) -> Option<&Value> {
		self.data.get(key)
	}

	fn insert(&mut self, key: String, value: Value) -> Option<Value> {
		self.data.insert(key, value)
	}

	fn remove(&mut self, key: &str) -> Option<Value> {
		self.data.remove(key)
	}

	fn keys(&self) -> Vec<String> {
		self.data.keys().cloned().collect()
	}

	fn contains_key(&self, key: &str) -> bool {
		self.data.contains_key(key)
	}
}
