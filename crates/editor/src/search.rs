//! Regex search with a single match marker.
//!
//! Queries come from the user and are untrusted: a query that does not
//! compile leaves the search as it was, and nothing here returns an error.

use std::ops::Range;

use quire_primitives::ByteIdx;
use quire_primitives::range::shift_offset;
use regex::{Regex, RegexBuilder};

/// A located match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
	pub range: Range<ByteIdx>,
	/// Line holding the start of the match.
	pub line: usize,
}

/// The active query and where it last matched.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
	query: String,
	pattern: Option<Regex>,
	/// Where the next [`SearchState::refresh`] starts looking.
	index: ByteIdx,
	/// Where the next [`SearchState::find_next`] starts looking.
	next_from: Option<ByteIdx>,
	marker: Option<Range<ByteIdx>>,
}

impl SearchState {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn query(&self) -> &str {
		&self.query
	}

	/// Returns true while a query is compiled.
	pub fn is_active(&self) -> bool {
		self.pattern.is_some()
	}

	/// The marked match, if any.
	pub fn marker(&self) -> Option<Range<ByteIdx>> {
		self.marker.clone()
	}

	pub fn index(&self) -> ByteIdx {
		self.index
	}

	/// Replaces the query and finds its first match at or after the
	/// remembered index.
	///
	/// An empty query ends the search. A query that fails to compile is
	/// ignored.
	pub fn set_query(&mut self, query: &str, text: &str) -> Option<Range<ByteIdx>> {
		if query.is_empty() {
			self.clear();
			return None;
		}

		let pattern = match RegexBuilder::new(query).multi_line(true).build() {
			Ok(pattern) => pattern,
			Err(e) => {
				tracing::debug!(query, error = %e, "Ignoring invalid search query");
				return None;
			}
		};

		self.query = query.to_owned();
		self.pattern = Some(pattern);
		self.search_from(self.index, text)
	}

	/// Finds the match following the previous one.
	///
	/// When there is none the search wraps: the index returns to the start
	/// of the document and the next call begins there.
	pub fn find_next(&mut self, text: &str) -> Option<Range<ByteIdx>> {
		let from = self.next_from.unwrap_or(self.index);
		self.search_from(from, text)
	}

	/// Re-applies the query at the remembered index, after the text changed.
	pub fn refresh(&mut self, text: &str) -> Option<Range<ByteIdx>> {
		self.search_from(self.index, text)
	}

	/// Ends the search and drops the marker.
	pub fn clear(&mut self) {
		*self = Self::default();
	}

	/// Shifts the remembered offsets across a text edit.
	pub fn apply_edit(&mut self, at: ByteIdx, removed: usize, inserted: usize) {
		let shift = |pos| shift_offset(pos, at, removed, inserted);
		self.index = shift(self.index);
		self.next_from = self.next_from.map(shift);
		self.marker = self
			.marker
			.take()
			.map(|m| shift(m.start)..shift(m.end))
			.filter(|m| !m.is_empty());
	}

	fn search_from(&mut self, from: ByteIdx, text: &str) -> Option<Range<ByteIdx>> {
		let pattern = self.pattern.as_ref()?;
		let found = (from <= text.len())
			.then(|| pattern.find_at(text, text.floor_char_boundary(from)))
			.flatten();

		let Some(m) = found else {
			tracing::trace!(query = %self.query, from, "Search wrapped");
			self.index = 0;
			self.next_from = None;
			self.marker = None;
			return None;
		};

		let range = m.range();
		self.index = range.start;
		self.next_from = Some(match text[range.end..].chars().next() {
			Some(c) if range.is_empty() => range.end + c.len_utf8(),
			None if range.is_empty() => text.len() + 1,
			_ => range.end,
		});
		self.marker = (!range.is_empty()).then(|| range.clone());
		tracing::trace!(query = %self.query, start = range.start, end = range.end, "Search matched");
		Some(range)
	}
}
