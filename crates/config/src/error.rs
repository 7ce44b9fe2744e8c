//! Error types for configuration loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading or saving editor options.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error reading or writing an options file.
	#[error("I/O error on {path}: {error}")]
	Io {
		/// Path to the file that failed.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// Error parsing TOML.
	#[error("TOML parse error: {0}")]
	Parse(#[from] toml::de::Error),

	/// Error serializing options to TOML.
	#[error("TOML serialize error: {0}")]
	Serialize(#[from] toml::ser::Error),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
