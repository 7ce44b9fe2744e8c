//! Editor options and their TOML form.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Colour theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
	#[default]
	Light,
	Dark,
	System,
	White,
	Black,
	Retro,
}

/// Text size preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextSize {
	Small,
	#[default]
	Medium,
	Large,
}

impl TextSize {
	/// Returns the size in points.
	pub const fn points(self) -> u32 {
		match self {
			Self::Small => 12,
			Self::Medium => 18,
			Self::Large => 24,
		}
	}
}

/// Font family class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Typeface {
	Proportional,
	#[default]
	Mono,
	Serif,
}

/// Explicit document charset. Absent means auto-detect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Charset {
	#[serde(rename = "utf-8")]
	Utf8,
}

impl Charset {
	pub const fn name(self) -> &'static str {
		match self {
			Self::Utf8 => "UTF-8",
		}
	}
}

/// Host configuration fed by the options file and by mode lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct EditorOptions {
	/// Open documents read-only.
	pub view_only: bool,
	/// Soft-wrap long lines.
	pub wrap: bool,
	/// Offer word suggestions while typing.
	pub suggest: bool,
	/// Syntax highlighting.
	pub highlight: bool,
	pub theme: Theme,
	pub text_size: TextSize,
	pub typeface: Typeface,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub charset: Option<Charset>,
	/// Debounce delay for highlighting and word count, in milliseconds.
	pub update_delay_ms: u64,
}

impl Default for EditorOptions {
	fn default() -> Self {
		Self {
			view_only: true,
			wrap: false,
			suggest: true,
			highlight: false,
			theme: Theme::default(),
			text_size: TextSize::default(),
			typeface: Typeface::default(),
			charset: None,
			update_delay_ms: 128,
		}
	}
}

impl EditorOptions {
	/// Parses options from TOML. Missing keys take their defaults.
	pub fn parse(input: &str) -> Result<Self> {
		Ok(toml::from_str(input)?)
	}

	/// Loads options from a TOML file.
	pub fn load(path: &Path) -> Result<Self> {
		let input = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		let options = Self::parse(&input)?;
		tracing::debug!(path = %path.display(), "Loaded editor options");
		Ok(options)
	}

	/// Serializes options to TOML.
	pub fn to_toml(&self) -> Result<String> {
		Ok(toml::to_string(self)?)
	}

	/// Writes options to a TOML file.
	pub fn save(&self, path: &Path) -> Result<()> {
		let output = self.to_toml()?;
		std::fs::write(path, output).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})
	}

	/// Returns the highlight and word count debounce delay.
	pub fn update_delay(&self) -> Duration {
		Duration::from_millis(self.update_delay_ms)
	}
}
