/// A position in the text, measured in UTF-8 bytes.
///
/// Every offset the highlighter produces or consumes lives in this space.
pub type ByteIdx = usize;

/// A length in the text, measured in UTF-8 bytes.
pub type ByteLen = usize;

/// A text range defined by anchor and head positions.
///
/// The anchor is the fixed end, and the head moves during selection extension.
/// A zero-width range is a plain cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
	/// The fixed end of the range.
	pub anchor: ByteIdx,
	/// The moving end of the range (cursor position).
	pub head: ByteIdx,
}

impl Range {
	/// Creates a new range from anchor to head.
	pub fn new(anchor: ByteIdx, head: ByteIdx) -> Self {
		Self { anchor, head }
	}

	/// Creates a zero-width range (cursor) at the given position.
	pub fn point(pos: ByteIdx) -> Self {
		Self::new(pos, pos)
	}

	/// Returns the smaller of anchor and head.
	#[inline]
	pub fn min(&self) -> ByteIdx {
		std::cmp::min(self.anchor, self.head)
	}

	/// Returns the larger of anchor and head.
	#[inline]
	pub fn max(&self) -> ByteIdx {
		std::cmp::max(self.anchor, self.head)
	}

	/// Returns the selection start, the offset hosts report as "selection start".
	#[inline]
	pub fn start(&self) -> ByteIdx {
		self.min()
	}

	/// Returns the exclusive selection end.
	#[inline]
	pub fn end(&self) -> ByteIdx {
		self.max()
	}

	/// Returns the length of the range in bytes.
	#[inline]
	pub fn len(&self) -> ByteLen {
		self.max() - self.min()
	}

	/// Returns true if anchor equals head (zero-width cursor).
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.anchor == self.head
	}

	/// Applies a function to both anchor and head.
	pub fn map(self, mut f: impl FnMut(ByteIdx) -> ByteIdx) -> Self {
		Self {
			anchor: f(self.anchor),
			head: f(self.head),
		}
	}

	/// Returns the half-open byte extent of this range.
	pub fn as_std(&self) -> std::ops::Range<ByteIdx> {
		self.min()..self.max()
	}

	/// Clamps anchor and head to `[0, max_byte]`.
	pub fn clamp(&self, max_byte: ByteIdx) -> Self {
		Self {
			anchor: self.anchor.min(max_byte),
			head: self.head.min(max_byte),
		}
	}

	/// Shifts both ends across an edit that replaced `removed` bytes at `at`
	/// with `inserted` bytes.
	///
	/// Positions inside the removed text collapse onto the edit point.
	pub fn apply_edit(self, at: ByteIdx, removed: ByteLen, inserted: ByteLen) -> Self {
		self.map(|pos| shift_offset(pos, at, removed, inserted))
	}
}

impl Default for Range {
	fn default() -> Self {
		Self::point(0)
	}
}

/// Maps a single offset across a replacement edit.
///
/// Offsets before the edit are untouched, offsets inside the removed text
/// land on the end of the inserted text, and offsets after it shift by the
/// length delta.
pub fn shift_offset(pos: ByteIdx, at: ByteIdx, removed: ByteLen, inserted: ByteLen) -> ByteIdx {
	if pos < at {
		pos
	} else if pos < at + removed {
		at + inserted
	} else {
		pos - removed + inserted
	}
}
