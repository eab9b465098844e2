//! Request-scoped flash access
//!
//! [`FlashRequest`] is the hook a request pipeline wraps around a handler:
//! it loads the session of the request, processes the request boundary, lends
//! a [`FlashStore`] to the handler and saves the session afterwards.

use crate::config::FlashConfig;
use crate::error::{FlashError, FlashResult};
use crate::store::{FlashStore, SweepReport};
use reinhardt_sessions::{Session, SessionBackend, SessionId};
use std::sync::Arc;

/// Flash access for one request
///
/// # Examples
///
/// ```
/// use reinhardt_flash::{FlashConfig, FlashRequest};
/// use reinhardt_sessions::InMemorySessionBackend;
/// use std::sync::Arc;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), reinhardt_flash::FlashError> {
/// let backend = Arc::new(InMemorySessionBackend::new());
///
/// // POST handler
/// let mut request = FlashRequest::begin(backend.clone(), None, FlashConfig::default()).await?;
/// request.flash().set("success", "Profile updated");
/// let session_id = request.finish().await?;
///
/// // GET handler after the redirect
/// let mut request = FlashRequest::begin(backend.clone(), Some(&session_id), FlashConfig::default()).await?;
/// assert_eq!(request.flash().get("success").unwrap().as_str(), Some("Profile updated"));
/// request.finish().await?;
/// # Ok(())
/// # }
/// ```
pub struct FlashRequest {
	backend: Arc<dyn SessionBackend>,
	session: Session,
	config: FlashConfig,
	sweep: SweepReport,
	is_new: bool,
}

impl FlashRequest {
	/// Load the session for `session_id` and process the request boundary
	///
	/// Without a known session id a new session is started, unless
	/// [`FlashConfig::create_missing_session`] is off, in which case
	/// [`FlashError::SessionNotFound`] is returned.
	pub async fn begin(
		backend: Arc<dyn SessionBackend>,
		session_id: Option<&str>,
		config: FlashConfig,
	) -> FlashResult<Self> {
		let loaded = match session_id {
			Some(id) => backend.load(id).await?,
			None => None,
		};

		let (mut session, is_new) = match loaded {
			Some(session) => (session, false),
			None if config.create_missing_session => {
				let session = Session::with_id(backend.create_session_id());
				tracing::debug!(
					requested = session_id.unwrap_or(""),
					session_id = %session.id(),
					"starting new session"
				);
				(session, true)
			}
			None => {
				let reason = match session_id {
					Some(id) => format!("session {} does not exist", id),
					None => "request carries no session id".to_string(),
				};
				return Err(FlashError::SessionNotFound(reason));
			}
		};

		let sweep = FlashStore::with_config(&mut session, config.clone()).sweep();

		Ok(Self {
			backend,
			session,
			config,
			sweep,
			is_new,
		})
	}

	/// Flash store over this request's session
	pub fn flash(&mut self) -> FlashStore<&mut Session> {
		FlashStore::with_config(&mut self.session, self.config.clone())
	}

	pub fn session_id(&self) -> &str {
		self.session.id()
	}

	/// Whether the session was started by this request
	pub fn is_new(&self) -> bool {
		self.is_new
	}

	/// What the request boundary sweep did
	pub fn sweep_report(&self) -> &SweepReport {
		&self.sweep
	}

	pub fn session(&self) -> &Session {
		&self.session
	}

	pub fn session_mut(&mut self) -> &mut Session {
		&mut self.session
	}

	/// Save the session through the backend and return its id
	pub async fn finish(self) -> FlashResult<SessionId> {
		self.backend.save(&self.session).await?;
		tracing::debug!(session_id = %self.session.id(), "flash request finished");
		Ok(self.session.id().to_string())
	}
}

impl std::fmt::Debug for FlashRequest {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("FlashRequest")
			.field("session", &self.session)
			.field("config", &self.config)
			.field("sweep", &self.sweep)
			.field("is_new", &self.is_new)
			.finish_non_exhaustive()
	}
}
