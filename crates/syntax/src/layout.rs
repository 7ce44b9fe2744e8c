use ropey::RopeSlice;
use quire_primitives::ByteIdx;

/// Maps vertical positions to lines and lines to byte offsets.
///
/// Vertical positions are in the host's layout units (pixels for a GUI,
/// rows for a terminal). Lines are zero-based.
pub trait TextLayout {
	/// Returns the number of lines, at least 1.
	fn line_count(&self) -> usize;

	/// Returns the line at vertical position `y`, clamped to the last line.
	fn line_for_vertical(&self, y: u32) -> usize;

	/// Returns the byte offset of the first character of `line`.
	///
	/// Lines past the end map to the text length.
	fn line_start(&self, line: usize) -> ByteIdx;

	/// Returns the byte offset just past `line`, line break included.
	///
	/// Lines past the end map to the text length.
	fn line_end(&self, line: usize) -> ByteIdx;
}

/// Layout of unwrapped text where every line has the same height.
#[derive(Debug, Clone, Copy)]
pub struct UniformLayout<'a> {
	text: RopeSlice<'a>,
	line_height: u32,
}

impl<'a> UniformLayout<'a> {
	/// Creates a layout over `text`. A zero line height is treated as 1.
	pub fn new(text: RopeSlice<'a>, line_height: u32) -> Self {
		Self {
			text,
			line_height: line_height.max(1),
		}
	}

	pub fn line_height(&self) -> u32 {
		self.line_height
	}
}

impl TextLayout for UniformLayout<'_> {
	fn line_count(&self) -> usize {
		self.text.len_lines()
	}

	fn line_for_vertical(&self, y: u32) -> usize {
		let line = (y / self.line_height) as usize;
		line.min(self.line_count() - 1)
	}

	fn line_start(&self, line: usize) -> ByteIdx {
		self.text.line_to_byte(line.min(self.text.len_lines()))
	}

	fn line_end(&self, line: usize) -> ByteIdx {
		self.line_start(line.saturating_add(1))
	}
}
