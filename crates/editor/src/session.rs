use std::borrow::Cow;
use std::ops::Range as ByteRange;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use quire_config::{ApplyReport, EditorOptions, parse_mode_directives};
use quire_language::{DocumentType, GrammarTable, TEXT_PLAIN, guess_mime, resolve_document_type};
use quire_primitives::{ByteIdx, Range};
use quire_syntax::{RefreshReport, Viewport, refresh};
use quire_worker::Scheduler;

use crate::brackets::expand_to_delimiters;
use crate::consumer::Consumer;
use crate::document::Document;
use crate::search::{SearchHit, SearchState};
use crate::word_count::{WordCount, count_words};

/// Everything the consumers read and write when they fire.
#[derive(Debug, Default)]
struct SessionState {
	document: Document,
	options: EditorOptions,
	path: Option<PathBuf>,
	mime: Option<String>,
	doc_type: DocumentType,
	viewport: Viewport,
	line_height: u32,
	/// True while the highlighter is armed by scrolls, focus and edits.
	highlight_active: bool,
	/// Set when highlighting stopped and the spans are not cleared yet.
	clear_pending: bool,
	word_count: WordCount,
	search: SearchState,
	last_refresh: Option<RefreshReport>,
}

fn text_of(document: &Document) -> Cow<'_, str> {
	document.rope().slice(..).into()
}

impl SessionState {
	fn filename(&self) -> Option<&str> {
		self.path.as_deref().and_then(Path::file_name).and_then(|name| name.to_str())
	}

	fn refresh_highlight(&mut self) {
		let grammar = GrammarTable::builtin().get(self.doc_type);
		self.last_refresh = refresh(&mut self.document, self.viewport, grammar);
		if let Some(report) = &self.last_refresh
			&& report.full_clear
		{
			self.clear_pending = false;
		}
	}

	fn refresh_word_count(&mut self) {
		self.word_count = count_words(&text_of(&self.document));
		tracing::trace!(words = self.word_count.words, chars = self.word_count.chars, "Counted words");
	}

	fn refresh_search(&mut self) {
		let text = text_of(&self.document);
		self.search.refresh(&text);
	}
}

/// A single open document and the consumers reacting to it.
///
/// The session is the only owner of its document, so edits and consumer
/// runs never interleave.
#[derive(Debug)]
pub struct EditorSession {
	scheduler: Scheduler<Consumer, SessionState>,
	state: SessionState,
}

impl Default for EditorSession {
	fn default() -> Self {
		Self::new(EditorOptions::default(), Viewport::default())
	}
}

impl EditorSession {
	pub fn new(options: EditorOptions, viewport: Viewport) -> Self {
		let mut scheduler = Scheduler::new();
		scheduler.on_fire(Consumer::Highlight, SessionState::refresh_highlight);
		scheduler.on_fire(Consumer::WordCount, SessionState::refresh_word_count);
		scheduler.on_fire(Consumer::SearchMarker, SessionState::refresh_search);

		Self {
			scheduler,
			state: SessionState {
				options,
				viewport,
				line_height: 1,
				..SessionState::default()
			},
		}
	}

	/// Sets the height of one line, in viewport units, for documents opened
	/// from now on.
	pub fn with_line_height(mut self, line_height: u32) -> Self {
		self.state.line_height = line_height.max(1);
		self.state.document = std::mem::take(&mut self.state.document).with_line_height(line_height);
		self
	}

	/// Opens `text` as the file at `path`.
	///
	/// Without a MIME type one is guessed from the file name. Mode lines are
	/// applied to the options before the document is classified.
	pub fn open(&mut self, path: impl Into<PathBuf>, text: &str, mime: Option<&str>, now: Instant) -> ApplyReport {
		let path = path.into();
		let mime = mime.map(str::to_owned).or_else(|| {
			let name = path.file_name()?.to_str()?;
			guess_mime(name).map(str::to_owned)
		});
		self.load(Some(path), mime, text, now)
	}

	/// Opens `text` without a backing file.
	pub fn open_untitled(&mut self, text: &str, now: Instant) -> ApplyReport {
		self.load(None, None, text, now)
	}

	fn load(&mut self, path: Option<PathBuf>, mime: Option<String>, text: &str, now: Instant) -> ApplyReport {
		tracing::debug!(path = ?path, mime = ?mime, len = text.len(), "Opening document");
		let state = &mut self.state;
		state.document = Document::new(text).with_line_height(state.line_height);
		state.path = path;
		state.mime = mime;
		state.search.clear();
		state.last_refresh = None;
		state.clear_pending = false;
		for consumer in Consumer::ALL {
			self.scheduler.cancel(consumer);
		}

		let report = self.state.options.apply_directives(&parse_mode_directives(text));
		self.check_highlight(now);
		self.arm(Consumer::WordCount, now);
		report
	}

	/// Re-classifies the document and starts or stops the highlighter.
	///
	/// Stopping arms it one final time so that its run, finding no grammar,
	/// clears every span. Until a run reports that clear, scrolls and focus
	/// keep arming it.
	fn check_highlight(&mut self, now: Instant) {
		let state = &mut self.state;
		let doc_type = resolve_document_type(state.options.highlight, state.filename(), state.mime.as_deref());
		if doc_type != state.doc_type {
			tracing::debug!(from = ?state.doc_type, to = ?doc_type, "Reclassified document");
		}
		state.doc_type = doc_type;

		if GrammarTable::builtin().get(doc_type).is_some() {
			state.highlight_active = true;
			state.clear_pending = false;
			self.arm(Consumer::Highlight, now);
		} else if state.highlight_active {
			state.highlight_active = false;
			state.clear_pending = true;
			self.arm(Consumer::Highlight, now);
		}
	}

	fn arm(&mut self, consumer: Consumer, now: Instant) {
		let delay = match consumer {
			Consumer::Highlight | Consumer::WordCount => self.state.options.update_delay(),
			Consumer::SearchMarker => consumer.default_delay(),
		};
		if self.scheduler.arm(consumer, delay, now) {
			tracing::trace!(?consumer, "debounce.rearm");
		}
	}

	fn arm_highlight(&mut self, now: Instant) {
		if self.state.highlight_active || self.state.clear_pending {
			self.arm(Consumer::Highlight, now);
		}
	}

	/// Replaces `range` with `text` and arms the consumers that depend on
	/// the content.
	pub fn replace(&mut self, range: ByteRange<ByteIdx>, text: &str, now: Instant) {
		let edit = self.state.document.replace(range, text);
		self.state.search.apply_edit(edit.at, edit.removed, edit.inserted);

		self.arm_highlight(now);
		self.arm(Consumer::WordCount, now);
		if self.state.search.is_active() {
			self.arm(Consumer::SearchMarker, now);
		}
	}

	pub fn insert(&mut self, at: ByteIdx, text: &str, now: Instant) {
		self.replace(at..at, text, now);
	}

	pub fn delete(&mut self, range: ByteRange<ByteIdx>, now: Instant) {
		self.replace(range, "", now);
	}

	/// Moves the viewport.
	pub fn scroll_to(&mut self, viewport: Viewport, now: Instant) {
		self.state.viewport = viewport;
		self.arm_highlight(now);
	}

	/// Called when the view gains or loses focus.
	pub fn focus_changed(&mut self, focused: bool, now: Instant) {
		if focused {
			self.arm_highlight(now);
		}
	}

	/// Called when the view was re-laid out, e.g. after a resize.
	pub fn layout_changed(&mut self, now: Instant) {
		self.arm_highlight(now);
	}

	/// Turns syntax highlighting on or off.
	pub fn set_highlight(&mut self, enabled: bool, now: Instant) {
		self.state.options.highlight = enabled;
		self.check_highlight(now);
	}

	pub fn select(&mut self, selection: Range) {
		self.state.document.select(selection);
	}

	/// Expands the selection to the enclosing delimiter pair.
	///
	/// Only files that are not plain text qualify.
	pub fn select_to_delimiters(&mut self) -> Option<ByteRange<ByteIdx>> {
		let state = &mut self.state;
		if state.path.is_none() || state.mime.as_deref() == Some(TEXT_PLAIN) {
			return None;
		}

		let selection = state.document.selection();
		let range = expand_to_delimiters(&text_of(&state.document), selection.as_std())?;
		state.document.select(Range::new(range.start, range.end));
		Some(range)
	}

	/// Sets the search query and scrolls its match to the middle of the
	/// viewport.
	pub fn set_query(&mut self, query: &str, now: Instant) -> Option<SearchHit> {
		let range = {
			let text = text_of(&self.state.document);
			self.state.search.set_query(query, &text)
		}?;
		Some(self.reveal(range, now))
	}

	/// Moves to the next match of the current query.
	pub fn find_next(&mut self, now: Instant) -> Option<SearchHit> {
		let range = {
			let text = text_of(&self.state.document);
			self.state.search.find_next(&text)
		}?;
		Some(self.reveal(range, now))
	}

	fn reveal(&mut self, range: ByteRange<ByteIdx>, now: Instant) -> SearchHit {
		let line = self.state.document.line_of(range.start);
		let viewport = self.state.viewport;
		let line_y = u32::try_from(line).unwrap_or(u32::MAX).saturating_mul(self.state.line_height);
		let scroll_y = line_y.saturating_sub(viewport.height / 2);
		self.scroll_to(Viewport::new(scroll_y, viewport.height), now);
		SearchHit { range, line }
	}

	/// Runs every consumer whose delay expired at `now`.
	pub fn poll(&mut self, now: Instant) -> usize {
		self.scheduler.run_expired(now, &mut self.state)
	}

	/// Returns when [`EditorSession::poll`] next has work.
	pub fn next_deadline(&self) -> Option<Instant> {
		self.scheduler.next_deadline()
	}

	/// Returns the time left until the next deadline.
	pub fn next_timeout(&self, now: Instant) -> Option<Duration> {
		self.next_deadline().map(|deadline| deadline.saturating_duration_since(now))
	}

	pub fn is_pending(&self, consumer: Consumer) -> bool {
		self.scheduler.is_pending(consumer)
	}

	/// Refreshes the highlighting immediately, superseding a pending run.
	pub fn highlight_now(&mut self) -> Option<RefreshReport> {
		self.scheduler.cancel(Consumer::Highlight);
		self.state.refresh_highlight();
		self.state.last_refresh
	}

	pub fn document(&self) -> &Document {
		&self.state.document
	}

	pub fn options(&self) -> &EditorOptions {
		&self.state.options
	}

	pub fn path(&self) -> Option<&Path> {
		self.state.path.as_deref()
	}

	pub fn mime(&self) -> Option<&str> {
		self.state.mime.as_deref()
	}

	pub fn doc_type(&self) -> DocumentType {
		self.state.doc_type
	}

	pub fn viewport(&self) -> Viewport {
		self.state.viewport
	}

	pub fn is_highlighting(&self) -> bool {
		self.state.highlight_active
	}

	pub fn word_count(&self) -> WordCount {
		self.state.word_count
	}

	pub fn search(&self) -> &SearchState {
		&self.state.search
	}

	/// The outcome of the most recent highlighter run.
	pub fn last_refresh(&self) -> Option<RefreshReport> {
		self.state.last_refresh
	}
}

#[cfg(test)]
mod tests;
