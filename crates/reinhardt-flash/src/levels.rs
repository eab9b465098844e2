//! Message level definitions
//!
//! Flash keys are free-form, but view code usually groups messages by a
//! small set of levels and maps them onto alert styles. [`Level`] names
//! those keys.

use crate::error::FlashError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Conventional message levels
#[derive(
	Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Level {
	Debug,
	#[default]
	Info,
	Success,
	Warning,
	Error,
}

impl Level {
	/// All levels, lowest first
	pub const ALL: [Level; 5] = [
		Level::Debug,
		Level::Info,
		Level::Success,
		Level::Warning,
		Level::Error,
	];

	/// Returns the flash key used for this level
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_flash::Level;
	///
	/// assert_eq!(Level::Debug.as_str(), "debug");
	/// assert_eq!(Level::Success.as_str(), "success");
	/// assert_eq!(Level::Error.as_str(), "error");
	/// ```
	pub fn as_str(&self) -> &'static str {
		match self {
			Level::Debug => "debug",
			Level::Info => "info",
			Level::Success => "success",
			Level::Warning => "warning",
			Level::Error => "error",
		}
	}

	/// Bootstrap alert class for this level
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_flash::Level;
	///
	/// assert_eq!(Level::Error.alert_class(), "alert-danger");
	/// assert_eq!(Level::Debug.alert_class(), "alert-secondary");
	/// ```
	pub fn alert_class(&self) -> &'static str {
		match self {
			Level::Debug => "alert-secondary",
			Level::Info => "alert-info",
			Level::Success => "alert-success",
			Level::Warning => "alert-warning",
			Level::Error => "alert-danger",
		}
	}
}

impl fmt::Display for Level {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Level {
	type Err = FlashError;

	/// Parses a level name (case-insensitive); `danger` is accepted for `error`
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_lowercase().as_str() {
			"debug" => Ok(Level::Debug),
			"info" => Ok(Level::Info),
			"success" => Ok(Level::Success),
			"warning" => Ok(Level::Warning),
			"error" | "danger" => Ok(Level::Error),
			_ => Err(FlashError::UnknownLevel(s.to_string())),
		}
	}
}
