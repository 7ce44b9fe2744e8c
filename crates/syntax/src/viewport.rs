use std::ops::Range;

use quire_primitives::ByteIdx;

use crate::layout::TextLayout;

/// The visible window of a scrollable view, in layout units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
	/// Vertical scroll offset of the top edge.
	pub scroll_y: u32,
	/// Height of the visible area.
	pub height: u32,
}

impl Viewport {
	pub fn new(scroll_y: u32, height: u32) -> Self {
		Self { scroll_y, height }
	}
}

/// The byte region a refresh works on.
///
/// `start..end` covers every line touched by the viewport, from the start of
/// the top line to the end of the bottom one. `first` and `last` are the
/// selection-safe boundaries: the start of the line after the top one, and
/// the start of the line before the bottom one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleRegion {
	pub start: ByteIdx,
	pub end: ByteIdx,
	pub first: ByteIdx,
	pub last: ByteIdx,
}

impl VisibleRegion {
	/// Computes the region for `viewport`, or `None` when it has no height.
	pub fn compute(layout: &(impl TextLayout + ?Sized), viewport: Viewport) -> Option<Self> {
		if viewport.height == 0 {
			return None;
		}

		let top = layout.line_for_vertical(viewport.scroll_y);
		let bottom = layout.line_for_vertical(viewport.scroll_y.saturating_add(viewport.height));

		let start = layout.line_start(top);
		let end = layout.line_end(bottom).max(start);
		let first = layout.line_start(top + 1);
		let last = match bottom {
			0 => end,
			_ => layout.line_start(bottom - 1),
		};

		Some(Self { start, end, first, last })
	}

	/// Returns `start..end`.
	pub fn range(&self) -> Range<ByteIdx> {
		self.start..self.end
	}

	/// Returns where a selection starting at `pos` must move to stay on
	/// screen, or `None` if it already is.
	///
	/// A selection above the region moves to `first`, one below it to
	/// `last`; both are clamped into `start..=end`.
	pub fn relocate(&self, pos: ByteIdx) -> Option<ByteIdx> {
		if pos < self.start {
			Some(self.first.clamp(self.start, self.end))
		} else if pos > self.end {
			Some(self.last.clamp(self.start, self.end))
		} else {
			None
		}
	}
}
