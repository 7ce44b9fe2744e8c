use std::time::Duration;

use quire_worker::{FIND_DELAY, UPDATE_DELAY};

/// Work re-run after the document settles.
///
/// Each consumer has its own debounce slot; they fire independently and in
/// no particular order relative to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Consumer {
	/// Viewport highlighter refresh.
	Highlight,
	/// Word and character count.
	WordCount,
	/// Re-application of the active search query.
	SearchMarker,
}

impl Consumer {
	pub const ALL: [Consumer; 3] = [Self::Highlight, Self::WordCount, Self::SearchMarker];

	/// Returns the stock debounce delay.
	pub const fn default_delay(self) -> Duration {
		match self {
			Self::Highlight | Self::WordCount => UPDATE_DELAY,
			Self::SearchMarker => FIND_DELAY,
		}
	}
}
