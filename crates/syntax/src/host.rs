use std::ops::Range;

use quire_primitives::{ByteIdx, StyleSpan};
use ropey::RopeSlice;

use crate::layout::TextLayout;

/// The text buffer side of a refresh.
///
/// Implemented by whatever owns the document, its selection and its span
/// overlay. The highlighter reads only the visible slice of [`text`] and
/// never holds on to it across a mutation.
///
/// [`text`]: HighlightHost::text
pub trait HighlightHost: TextLayout {
	/// Returns the current document text.
	fn text(&self) -> RopeSlice<'_>;

	/// Returns the start of the current selection.
	fn selection_start(&self) -> ByteIdx;

	/// Collapses the selection to a cursor at `pos`.
	fn set_selection(&mut self, pos: ByteIdx);

	/// Adds a span on top of the existing ones.
	fn add_span(&mut self, span: StyleSpan);

	/// Removes every span intersecting `range`, returning the count.
	fn remove_spans(&mut self, range: Range<ByteIdx>) -> usize;

	/// Removes every span in the document, returning the count.
	fn remove_all_spans(&mut self) -> usize;

	/// Returns the spans intersecting `range`.
	fn spans_in(&self, range: Range<ByteIdx>) -> Vec<StyleSpan>;
}
