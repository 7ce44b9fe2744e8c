//! Editor options and document mode lines.
//!
//! [`EditorOptions`] is the host configuration. It is persisted as a TOML
//! table and can be overridden per document by a mode line such as
//!
//! ```text
//! # ed: ww th:d ts:l
//! ```
//!
//! placed within the first or last 256 characters of the text. Mode lines are
//! untrusted input: anything unrecognised is ignored, never reported as an
//! error.
//!
//! An options file:
//!
//! ```toml
//! view-only = false
//! wrap = true
//! highlight = true
//! theme = "dark"
//! text-size = "large"
//! typeface = "serif"
//! update-delay-ms = 200
//! ```

mod apply;
pub mod error;
pub mod modeline;
pub mod options;

pub use apply::ApplyReport;
pub use error::{ConfigError, Result};
pub use modeline::{FIRST_SIZE, LAST_SIZE, ModeDirective, ModeKey, Setting, parse_mode_directives};
pub use options::{Charset, EditorOptions, TextSize, Theme, Typeface};
