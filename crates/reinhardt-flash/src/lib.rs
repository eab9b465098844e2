//! # Reinhardt Flash
//!
//! One-shot flash messages layered on Reinhardt sessions.
//!
//! A flash message is a value written during one request and shown during a
//! later one, typically the page a form handler redirects to. Values are kept
//! in the user's session next to ordinary session variables and removed by a
//! sweep at the request boundary after they have served their purpose.
//!
//! ## Features
//!
//! - [`FlashStore`]: `get`, `get_all`, `set`, `add`, `remove`, `remove_all`
//!   and `has` over any [`SessionStore`](reinhardt_sessions::SessionStore)
//! - Per-write expiry policy: remove after the first read, or after exactly
//!   one request boundary
//! - [`FlashRequest`]: loads a session from a
//!   [`SessionBackend`](reinhardt_sessions::SessionBackend), sweeps it and
//!   saves it back
//! - [`Level`] keys for the usual success/warning/error banners
//! - [`FlashConfig`] loadable from TOML
//!
//! ## Lifecycle
//!
//! ```rust
//! use reinhardt_flash::{FlashState, FlashStore};
//! use reinhardt_sessions::Session;
//!
//! let mut session = Session::new();
//! let mut flash = FlashStore::new(&mut session);
//!
//! flash.set("saved", "Changes saved");           // kept until read
//! flash.set_with("tip", "Try the new editor", false); // kept for one boundary
//!
//! flash.sweep();
//! assert_eq!(flash.state("tip"), Some(FlashState::Expiring));
//! assert_eq!(flash.state("saved"), Some(FlashState::AwaitingAccess));
//!
//! assert!(flash.get("saved").is_some());
//! flash.sweep();
//! assert!(!flash.has("saved"));
//! assert!(!flash.has("tip"));
//! ```

pub mod config;
pub mod entry;
pub mod error;
pub mod levels;
pub mod request;
pub mod store;
pub mod value;

pub use config::FlashConfig;
pub use entry::{FlashEntry, FlashState};
pub use error::{FlashError, FlashResult};
pub use levels::Level;
pub use request::FlashRequest;
pub use store::{FlashStore, SweepReport};
pub use value::{FlashValue, Scalar};
