//! Session error types

/// Errors raised by session backends
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
	/// No session exists for the given id
	#[error("Session not found: {0}")]
	NotFound(String),

	/// The backend failed to read or write session data
	#[error("Storage error: {0}")]
	Storage(String),

	/// Session data could not be encoded or decoded
	#[error("Serialization error: {0}")]
	Serialization(#[from] serde_json::Error),
}

/// Result type for session backend operations
pub type SessionResult<T> = Result<T, SessionError>;
