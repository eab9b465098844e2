//! In-memory session backend

use super::SessionBackend;
use crate::error::SessionResult;
use crate::session::{Session, SessionId};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

/// In-memory session backend for testing and development
///
/// Cloning the backend yields another handle to the same sessions.
///
/// # Examples
///
/// ```
/// use reinhardt_sessions::{InMemorySessionBackend, SessionBackend};
///
/// #[tokio::main]
/// async fn main() {
///     let backend = InMemorySessionBackend::new();
///     let session_id = backend.create_session_id();
///
///     let session = backend.load(&session_id).await.unwrap();
///     assert!(session.is_none());
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionBackend {
	sessions: Arc<Mutex<HashMap<SessionId, Session>>>,
}

impl InMemorySessionBackend {
	/// Create a new in-memory session backend
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of stored sessions
	pub async fn len(&self) -> usize {
		self.sessions.lock().await.len()
	}

	/// Check if no session is stored
	pub async fn is_empty(&self) -> bool {
		self.sessions.lock().await.is_empty()
	}
}

#[async_trait]
impl SessionBackend for InMemorySessionBackend {
	async fn load(&self, session_id: &str) -> SessionResult<Option<Session>> {
		let sessions = self.sessions.lock().await;
		Ok(sessions.get(session_id).cloned())
	}

	async fn save(&self, session: &Session) -> SessionResult<()> {
		let mut sessions = self.sessions.lock().await;
		sessions.insert(session.id().to_string(), session.clone());
		tracing::debug!(session_id = %session.id(), keys = session.len(), "session saved");
		Ok(())
	}

	async fn delete(&self, session_id: &str) -> SessionResult<()> {
		let mut sessions = self.sessions.lock().await;
		sessions.remove(session_id);
		Ok(())
	}
}
