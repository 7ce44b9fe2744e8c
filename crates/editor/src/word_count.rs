use std::sync::LazyLock;

use regex::Regex;

static WORD: LazyLock<Option<Regex>> = LazyLock::new(|| {
	Regex::new(r"\w+")
		.inspect_err(|e| tracing::error!(error = %e, "Invalid word pattern"))
		.ok()
});

/// Words and characters in a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WordCount {
	/// Runs of word characters.
	pub words: usize,
	/// Unicode scalar values, line breaks included.
	pub chars: usize,
}

/// Counts the words and characters of `text`.
pub fn count_words(text: &str) -> WordCount {
	WordCount {
		words: WORD.as_ref().map_or(0, |re| re.find_iter(text).count()),
		chars: text.chars().count(),
	}
}
