//! Flash configuration

use crate::error::{FlashError, FlashResult};
use serde::{Deserialize, Serialize};

/// Flash store configuration
///
/// Every field has a default, so a settings file only lists what it changes.
///
/// # Examples
///
/// ```
/// use reinhardt_flash::FlashConfig;
///
/// let config = FlashConfig::from_toml_str(r#"
///     flash_key = "_messages"
///     remove_after_access = false
/// "#).unwrap();
///
/// assert_eq!(config.flash_key, "_messages");
/// assert!(!config.remove_after_access);
/// assert!(config.create_missing_session);
/// ```
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlashConfig {
	/// Session key holding the flash metadata
	pub flash_key: String,
	/// Expiry policy used by `set` and `add` when none is given
	pub remove_after_access: bool,
	/// Start a fresh session when a request carries no known session id
	pub create_missing_session: bool,
}

impl FlashConfig {
	/// Default session key for the flash metadata
	pub const DEFAULT_FLASH_KEY: &'static str = "__flash";

	/// Create a configuration with default values
	pub fn new() -> Self {
		Self {
			flash_key: Self::DEFAULT_FLASH_KEY.to_string(),
			remove_after_access: true,
			create_missing_session: true,
		}
	}

	/// Set the session key holding the flash metadata
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_flash::FlashConfig;
	///
	/// let config = FlashConfig::new().with_flash_key("_flashes");
	/// assert_eq!(config.flash_key, "_flashes");
	/// ```
	pub fn with_flash_key(mut self, key: impl Into<String>) -> Self {
		self.flash_key = key.into();
		self
	}

	/// Set the default expiry policy
	pub fn with_remove_after_access(mut self, remove_after_access: bool) -> Self {
		self.remove_after_access = remove_after_access;
		self
	}

	/// Set whether unknown session ids start a fresh session
	pub fn with_create_missing_session(mut self, create: bool) -> Self {
		self.create_missing_session = create;
		self
	}

	/// Parse a configuration from TOML text
	pub fn from_toml_str(source: &str) -> FlashResult<Self> {
		toml::from_str(source).map_err(|e| FlashError::Config(e.to_string()))
	}
}

impl Default for FlashConfig {
	fn default() -> Self {
		Self::new()
	}
}
