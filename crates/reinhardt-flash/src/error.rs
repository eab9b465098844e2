//! Flash error types

use reinhardt_sessions::SessionError;

/// Errors raised around the flash store
///
/// Reading or writing flash entries never fails; these errors come from
/// obtaining the session the store works on and from configuration.
#[derive(Debug, thiserror::Error)]
pub enum FlashError {
	/// No active session context exists for the request
	#[error("No active session: {0}")]
	SessionNotFound(String),

	/// The session backend failed
	#[error(transparent)]
	Session(#[from] SessionError),

	/// Configuration could not be parsed
	#[error("Invalid flash configuration: {0}")]
	Config(String),

	/// A message level name was not recognised
	#[error("Unknown message level: {0}")]
	UnknownLevel(String),
}

/// Result type for flash operations that can fail
pub type FlashResult<T> = Result<T, FlashError>;
