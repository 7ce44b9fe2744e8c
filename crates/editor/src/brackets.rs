//! Selecting the text enclosed by the delimiter pair around a selection.

use std::ops::Range;

use quire_primitives::ByteIdx;

const DELIMITERS: &[u8] = b"()[]{}<>\"'`";
const OPENERS: &[u8] = b"([{<";

fn opener_for(closer: u8) -> u8 {
	match closer {
		b')' => b'(',
		b']' => b'[',
		b'}' => b'{',
		b'>' => b'<',
		quote => quote,
	}
}

/// Returns the range between the delimiters enclosing `selection`.
///
/// The first delimiter at or after the selection end must close the pair;
/// its opener is searched backwards from the selection start, and the
/// document start stands in when there is none. Pairs spanning a line break
/// yield `None`.
pub fn expand_to_delimiters(text: &str, selection: Range<ByteIdx>) -> Option<Range<ByteIdx>> {
	let bytes = text.as_bytes();
	let from = selection.end.min(bytes.len());
	let end = from + bytes[from..].iter().position(|b| DELIMITERS.contains(b))?;

	let closer = bytes[end];
	if OPENERS.contains(&closer) {
		return None;
	}

	let opener = opener_for(closer);
	let limit = selection.start.min(end).saturating_add(1).min(bytes.len());
	let start = bytes[..limit].iter().rposition(|&b| b == opener).map_or(0, |pos| pos + 1);
	let line_break = bytes[..end].iter().rposition(|&b| b == b'\n');

	if line_break.is_some_and(|nl| start <= nl) {
		tracing::trace!(start, end, "Delimiter pair spans lines");
		return None;
	}
	Some(start..end)
}
