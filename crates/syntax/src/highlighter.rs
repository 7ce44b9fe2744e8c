use std::borrow::Cow;

use quire_language::{Grammar, match_window};
use quire_primitives::ByteIdx;

use crate::host::HighlightHost;
use crate::viewport::{Viewport, VisibleRegion};

/// A selection move performed by a refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionMove {
	pub from: ByteIdx,
	pub to: ByteIdx,
}

/// What a refresh did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshReport {
	/// The region that was processed.
	pub region: VisibleRegion,
	/// Spans removed, including those removed by a full clear.
	pub removed: usize,
	/// Spans added.
	pub added: usize,
	/// Set if the selection was moved back on screen.
	pub selection: Option<SelectionMove>,
	/// True if there was no grammar and the whole document was cleared.
	pub full_clear: bool,
}

/// Re-styles the visible part of a document with one grammar.
///
/// A highlighter without a grammar still runs: it clears every span in the
/// document, which is how turning highlighting off takes effect.
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewportHighlighter<'g> {
	grammar: Option<&'g Grammar>,
}

impl<'g> ViewportHighlighter<'g> {
	pub fn new(grammar: Option<&'g Grammar>) -> Self {
		Self { grammar }
	}

	pub fn grammar(&self) -> Option<&'g Grammar> {
		self.grammar
	}

	/// Refreshes the region visible through `viewport`.
	///
	/// Returns `None` without touching the host when the viewport has no
	/// height. Running it twice on unchanged state leaves the same spans.
	pub fn refresh<H>(&self, host: &mut H, viewport: Viewport) -> Option<RefreshReport>
	where
		H: HighlightHost + ?Sized,
	{
		let region = VisibleRegion::compute(&*host, viewport)?;

		let from = host.selection_start();
		let selection = region.relocate(from).map(|to| {
			host.set_selection(to);
			tracing::debug!(from, to, start = region.start, end = region.end, "Moved selection on screen");
			SelectionMove { from, to }
		});

		let mut removed = host.remove_spans(region.range());

		let Some(grammar) = self.grammar else {
			removed += host.remove_all_spans();
			tracing::trace!(removed, "Cleared all spans");
			return Some(RefreshReport {
				region,
				removed,
				added: 0,
				selection,
				full_clear: true,
			});
		};

		let spans = {
			let text = host.text();
			let end = region.end.min(text.len_bytes());
			let start = region.start.min(end);
			let window: Cow<'_, str> = text.byte_slice(start..end).into();
			match_window(&window, start, grammar)
		};

		let added = spans.len();
		for span in spans {
			host.add_span(span);
		}

		tracing::trace!(
			doc_type = ?grammar.doc_type(),
			start = region.start,
			end = region.end,
			removed,
			added,
			"Refreshed viewport"
		);

		Some(RefreshReport {
			region,
			removed,
			added,
			selection,
			full_clear: false,
		})
	}
}

/// Refreshes the visible region of `host` with `grammar`.
///
/// See [`ViewportHighlighter::refresh`].
pub fn refresh<H>(host: &mut H, viewport: Viewport, grammar: Option<&Grammar>) -> Option<RefreshReport>
where
	H: HighlightHost + ?Sized,
{
	ViewportHighlighter::new(grammar).refresh(host, viewport)
}
