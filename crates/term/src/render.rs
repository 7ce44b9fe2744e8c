use std::collections::BTreeSet;
use std::fmt::Write;

use quire_primitives::{ByteIdx, StyleSpan};
use quire_syntax::SpanOverlay;

const RESET: &str = "\x1b[0m";

/// Paints `text`, which starts at document offset `base`, with the
/// foreground colour of whichever span is drawn at each character.
///
/// Span edges are sorted once and swept alongside the text; the live span
/// added last supplies the colour.
pub fn paint(text: &str, base: ByteIdx, overlay: &SpanOverlay) -> String {
	let spans = overlay.spans_in(base..base + text.len());
	let mut edges: Vec<(ByteIdx, usize, bool)> = Vec::with_capacity(spans.len() * 2);
	for (layer, span) in spans.iter().enumerate() {
		edges.push((span.start, layer, true));
		edges.push((span.end, layer, false));
	}
	edges.sort_unstable_by_key(|&(at, ..)| at);
	let mut edges = edges.into_iter().peekable();
	let mut live = BTreeSet::new();

	let mut out = String::with_capacity(text.len());
	let mut current = None;
	for (i, c) in text.char_indices() {
		while let Some((_, layer, opens)) = edges.next_if(|&(at, ..)| at <= base + i) {
			if opens {
				live.insert(layer);
			} else {
				live.remove(&layer);
			}
		}

		let style = live.last().map(|&layer| spans[layer].style);
		if style != current {
			if current.is_some() {
				out.push_str(RESET);
			}
			if let Some(tag) = style {
				let _ = write!(out, "\x1b[{}m", tag.color().ansi_fg());
			}
			current = style;
		}
		out.push(c);
	}
	if current.is_some() {
		out.push_str(RESET);
	}
	out
}

/// Lists spans one per line as `start..end<TAB>style<TAB>text`, where `text`
/// is sliced from `window` starting at document offset `base`.
pub fn list_spans(spans: &[StyleSpan], window: &str, base: ByteIdx) -> String {
	let mut out = String::new();
	for span in spans {
		let covered = window
			.get(span.start.saturating_sub(base)..span.end.saturating_sub(base))
			.unwrap_or_default();
		let _ = writeln!(out, "{}..{}\t{}\t{:?}", span.start, span.end, span.style, covered);
	}
	out
}
