use crate::range::{ByteIdx, shift_offset};
use crate::style::StyleTag;

/// A half-open byte range `[start, end)` carrying one style tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StyleSpan {
	/// Start byte offset (inclusive).
	pub start: ByteIdx,
	/// End byte offset (exclusive).
	pub end: ByteIdx,
	/// The style to apply.
	pub style: StyleTag,
}

impl StyleSpan {
	pub fn new(start: ByteIdx, end: ByteIdx, style: StyleTag) -> Self {
		Self { start, end, style }
	}

	/// Returns the byte range.
	pub fn range(&self) -> std::ops::Range<ByteIdx> {
		self.start..self.end
	}

	/// Returns the length in bytes.
	pub fn len(&self) -> usize {
		self.end.saturating_sub(self.start)
	}

	/// Returns true if the span is empty.
	pub fn is_empty(&self) -> bool {
		self.start >= self.end
	}

	/// Returns true if the span shares at least one byte with `range`.
	///
	/// Spans that merely touch the range boundary do not intersect it.
	pub fn intersects(&self, range: &std::ops::Range<ByteIdx>) -> bool {
		self.start < range.end && range.start < self.end
	}

	/// Returns true if the span covers `offset`.
	pub fn covers(&self, offset: ByteIdx) -> bool {
		self.start <= offset && offset < self.end
	}

	/// Maps the span across a replacement edit, returning `None` once it
	/// collapses to nothing.
	pub fn apply_edit(self, at: ByteIdx, removed: usize, inserted: usize) -> Option<Self> {
		let start = if self.start < at + removed && self.start >= at {
			// Start swallowed by the removal: keep it at the edit point.
			at
		} else {
			shift_offset(self.start, at, removed, inserted)
		};
		let end = if self.end > at && self.end <= at + removed {
			at
		} else if self.end == at {
			// Exclusive end: text inserted right after the span stays unstyled.
			self.end
		} else {
			shift_offset(self.end, at, removed, inserted)
		};
		(start < end).then_some(Self { start, end, ..self })
	}
}
