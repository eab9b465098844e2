//! # Reinhardt Sessions
//!
//! Per-user session storage for Reinhardt.
//!
//! A [`Session`] is a mapping from string keys to JSON values that survives
//! across requests of one user. Request handling code reads and writes it
//! through the synchronous [`SessionStore`] trait, while the request pipeline
//! loads and persists whole sessions through an asynchronous
//! [`SessionBackend`].
//!
//! ## Quick Start
//!
//! ```rust
//! use reinhardt_sessions::{InMemorySessionBackend, Session, SessionBackend, SessionStore};
//! use serde_json::json;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), reinhardt_sessions::SessionError> {
//! let backend = InMemorySessionBackend::new();
//!
//! let mut session = Session::new();
//! session.insert("user_id".to_string(), json!(42));
//! backend.save(&session).await?;
//!
//! let loaded = backend.load(session.id()).await?.unwrap();
//! assert_eq!(loaded.get("user_id"), Some(&json!(42)));
//! # Ok(())
//! # }
//! ```

pub mod backends;
pub mod error;
pub mod session;
pub mod store;

pub use backends::{InMemorySessionBackend, SessionBackend};
pub use error::{SessionError, SessionResult};
pub use session::{Session, SessionId};
pub use store::SessionStore;
