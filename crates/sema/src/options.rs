//! Language options consulted by the conformance checks.
//!
//! Options are written in TOML:
//!
//! ```toml
//! reference-type-suppression = true
//! ```
//!
//! Missing keys take their defaults; unknown keys are rejected.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading language options.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing TOML syntax or an unexpected key.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// Error reading an options file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},
}

/// Result type for option loading.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Feature switches of the host language relevant to invertible capabilities.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct LangOptions {
	/// Reference types may suppress capabilities, so classes get the
	/// contradiction check too.
	pub reference_type_suppression: bool,
}

impl LangOptions {
	/// Parses options from TOML text.
	pub fn from_toml_str(text: &str) -> Result<Self> {
		Ok(toml::from_str(text)?)
	}

	/// Reads and parses an options file.
	pub fn load(path: &Path) -> Result<Self> {
		let text = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		let options = Self::from_toml_str(&text)?;
		tracing::debug!(path = %path.display(), ?options, "loaded language options");
		Ok(options)
	}

	/// Returns a copy with reference-type suppression switched on or off.
	pub fn with_reference_type_suppression(mut self, enabled: bool) -> Self {
		self.reference_type_suppression = enabled;
		self
	}
}
