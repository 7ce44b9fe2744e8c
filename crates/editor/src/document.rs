use std::ops::Range as ByteRange;

use quire_primitives::{ByteIdx, Range, StyleSpan, StyleTag};
use quire_syntax::{HighlightHost, SpanOverlay, TextLayout, UniformLayout};
use ropey::{Rope, RopeSlice};

/// Line height used when none is configured: one layout unit per line, i.e.
/// terminal rows.
pub const DEFAULT_LINE_HEIGHT: u32 = 1;

/// A replacement applied to a [`Document`], in post-clamping byte offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edit {
	pub at: ByteIdx,
	pub removed: usize,
	pub inserted: usize,
}

/// Rope-backed document with a selection and a span overlay.
///
/// Edits keep both in step with the text: the selection and every span are
/// shifted across each replacement.
#[derive(Debug, Clone)]
pub struct Document {
	rope: Rope,
	selection: Range,
	overlay: SpanOverlay,
	line_height: u32,
}

impl Default for Document {
	fn default() -> Self {
		Self::new("")
	}
}

impl Document {
	pub fn new(text: &str) -> Self {
		Self {
			rope: Rope::from_str(text),
			selection: Range::default(),
			overlay: SpanOverlay::new(),
			line_height: DEFAULT_LINE_HEIGHT,
		}
	}

	/// Sets the height of one line in layout units.
	pub fn with_line_height(mut self, line_height: u32) -> Self {
		self.line_height = line_height.max(1);
		self
	}

	pub fn line_height(&self) -> u32 {
		self.line_height
	}

	pub fn rope(&self) -> &Rope {
		&self.rope
	}

	pub fn len_bytes(&self) -> usize {
		self.rope.len_bytes()
	}

	pub fn selection(&self) -> Range {
		self.selection
	}

	/// Replaces the selection, clamped to the text.
	pub fn select(&mut self, selection: Range) {
		self.selection = selection.clamp(self.rope.len_bytes());
	}

	pub fn overlay(&self) -> &SpanOverlay {
		&self.overlay
	}

	/// Returns the style drawn at `offset`.
	pub fn style_at(&self, offset: ByteIdx) -> Option<StyleTag> {
		self.overlay.style_at(offset)
	}

	/// Returns the line containing `offset`.
	pub fn line_of(&self, offset: ByteIdx) -> usize {
		self.rope.byte_to_line(offset.min(self.rope.len_bytes()))
	}

	/// Replaces `range` with `text`.
	///
	/// The range is clamped to the document and rounded down to character
	/// boundaries. Returns the edit actually applied.
	pub fn replace(&mut self, range: ByteRange<ByteIdx>, text: &str) -> Edit {
		let len = self.rope.len_bytes();
		let end = range.end.min(len);
		let start = range.start.min(end);

		let char_start = self.rope.byte_to_char(start);
		let char_end = self.rope.byte_to_char(end);
		let at = self.rope.char_to_byte(char_start);
		let removed = self.rope.char_to_byte(char_end) - at;

		self.rope.remove(char_start..char_end);
		self.rope.insert(char_start, text);

		let edit = Edit {
			at,
			removed,
			inserted: text.len(),
		};
		self.overlay.apply_edit(edit.at, edit.removed, edit.inserted);
		self.selection = self.selection.apply_edit(edit.at, edit.removed, edit.inserted);
		tracing::trace!(at, removed, inserted = edit.inserted, "Edited document");
		edit
	}

	/// Inserts `text` at `at`.
	pub fn insert(&mut self, at: ByteIdx, text: &str) -> Edit {
		self.replace(at..at, text)
	}

	/// Deletes `range`.
	pub fn delete(&mut self, range: ByteRange<ByteIdx>) -> Edit {
		self.replace(range, "")
	}

	fn layout(&self) -> UniformLayout<'_> {
		UniformLayout::new(self.rope.slice(..), self.line_height)
	}
}

impl TextLayout for Document {
	fn line_count(&self) -> usize {
		self.layout().line_count()
	}

	fn line_for_vertical(&self, y: u32) -> usize {
		self.layout().line_for_vertical(y)
	}

	fn line_start(&self, line: usize) -> ByteIdx {
		self.layout().line_start(line)
	}

	fn line_end(&self, line: usize) -> ByteIdx {
		self.layout().line_end(line)
	}
}

impl HighlightHost for Document {
	fn text(&self) -> RopeSlice<'_> {
		self.rope.slice(..)
	}

	fn selection_start(&self) -> ByteIdx {
		self.selection.start()
	}

	fn set_selection(&mut self, pos: ByteIdx) {
		self.selection = Range::point(pos.min(self.rope.len_bytes()));
	}

	fn add_span(&mut self, span: StyleSpan) {
		self.overlay.add(span);
	}

	fn remove_spans(&mut self, range: ByteRange<ByteIdx>) -> usize {
		self.overlay.remove_intersecting(range)
	}

	fn remove_all_spans(&mut self) -> usize {
		self.overlay.clear()
	}

	fn spans_in(&self, range: ByteRange<ByteIdx>) -> Vec<StyleSpan> {
		self.overlay.spans_in(range)
	}
}
