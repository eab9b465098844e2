//! Session persistence backends
//!
//! The request pipeline loads a [`Session`] at the start of a request and
//! saves it back once the response is produced. Backends only move whole
//! sessions; key-level access happens through [`SessionStore`](crate::SessionStore).

pub mod memory;

pub use memory::InMemorySessionBackend;

use crate::error::SessionResult;
use crate::session::{Session, SessionId};
use async_trait::async_trait;
use uuid::Uuid;

/// Session backend trait for different storage systems
#[async_trait]
pub trait SessionBackend: Send + Sync {
	/// Load session data by session ID
	///
	/// Returns `Ok(None)` when no session exists for the id.
	async fn load(&self, session_id: &str) -> SessionResult<Option<Session>>;

	/// Save session data under its own id
	async fn save(&self, session: &Session) -> SessionResult<()>;

	/// Delete session data
	async fn delete(&self, session_id: &str) -> SessionResult<()>;

	/// Check whether a session exists
	async fn exists(&self, session_id: &str) -> SessionResult<bool> {
		Ok(self.load(session_id).await?.is_some())
	}

	/// Create a new session ID
	fn create_session_id(&self) -> SessionId {
		Uuid::new_v4().to_string()
	}
}
