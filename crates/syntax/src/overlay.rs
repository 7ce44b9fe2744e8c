use std::ops::Range;

use quire_primitives::{ByteIdx, StyleSpan, StyleTag};

/// Insertion-ordered store of style spans.
///
/// Spans may overlap. Where they do, the one inserted last decides how the
/// offset is drawn ([`SpanOverlay::style_at`]), which is what lets later
/// grammar rules paint over earlier ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpanOverlay {
	spans: Vec<StyleSpan>,
}

impl SpanOverlay {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn len(&self) -> usize {
		self.spans.len()
	}

	pub fn is_empty(&self) -> bool {
		self.spans.is_empty()
	}

	/// Iterates spans in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = &StyleSpan> {
		self.spans.iter()
	}

	/// Appends a span. Empty spans are dropped.
	pub fn add(&mut self, span: StyleSpan) {
		if !span.is_empty() {
			self.spans.push(span);
		}
	}

	/// Removes every span sharing at least one byte with `range`, returning
	/// how many were removed.
	pub fn remove_intersecting(&mut self, range: Range<ByteIdx>) -> usize {
		let before = self.spans.len();
		self.spans.retain(|span| !span.intersects(&range));
		before - self.spans.len()
	}

	/// Removes every span, returning how many there were.
	pub fn clear(&mut self) -> usize {
		let removed = self.spans.len();
		self.spans.clear();
		removed
	}

	/// Returns the spans intersecting `range`, in insertion order.
	pub fn spans_in(&self, range: Range<ByteIdx>) -> Vec<StyleSpan> {
		self.spans
			.iter()
			.filter(|span| span.intersects(&range))
			.copied()
			.collect()
	}

	/// Returns the style drawn at `offset`: the last inserted span covering it.
	pub fn style_at(&self, offset: ByteIdx) -> Option<StyleTag> {
		self.spans
			.iter()
			.rev()
			.find(|span| span.covers(offset))
			.map(|span| span.style)
	}

	/// Maps every span across a text edit that replaced `removed` bytes at
	/// `at` with `inserted` bytes. Spans that collapse are dropped.
	pub fn apply_edit(&mut self, at: ByteIdx, removed: usize, inserted: usize) {
		self.spans = std::mem::take(&mut self.spans)
			.into_iter()
			.filter_map(|span| span.apply_edit(at, removed, inserted))
			.collect();
	}
}
