//! Viewport-scoped syntax highlighting.
//!
//! A refresh only ever touches the lines currently on screen: it clears the
//! spans there, re-runs the grammar over that slice and nudges the selection
//! back into view. Cost follows the viewport, not the document.
//!
//! # Architecture
//!
//! * [`layout`]: The [`TextLayout`] seam mapping pixels to lines and lines to bytes
//! * [`viewport`]: [`Viewport`] and the [`VisibleRegion`] derived from it
//! * [`overlay`]: [`SpanOverlay`], an insertion-ordered span store
//! * [`host`]: [`HighlightHost`], everything a refresh reads and mutates
//! * [`highlighter`]: [`ViewportHighlighter`] and [`refresh`]

pub mod highlighter;
pub mod host;
pub mod layout;
pub mod overlay;
pub mod viewport;

pub use highlighter::{RefreshReport, SelectionMove, ViewportHighlighter, refresh};
pub use host::HighlightHost;
pub use layout::{TextLayout, UniformLayout};
pub use overlay::SpanOverlay;
pub use viewport::{Viewport, VisibleRegion};
