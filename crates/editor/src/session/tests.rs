use std::time::{Duration, Instant};

use pretty_assertions::assert_eq;
use quire_config::{EditorOptions, Setting};
use quire_language::DocumentType;
use quire_primitives::{Range, StyleTag};
use quire_syntax::Viewport;
use quire_worker::{FIND_DELAY, UPDATE_DELAY};

use super::EditorSession;
use crate::consumer::Consumer;
use crate::word_count::WordCount;

const C_SOURCE: &str = "// ed: hs\nint main() { return 0; }\n";

fn highlighting() -> EditorOptions {
	EditorOptions {
		highlight: true,
		..EditorOptions::default()
	}
}

fn session(options: EditorOptions) -> EditorSession {
	EditorSession::new(options, Viewport::new(0, 100))
}

#[test]
fn mode_line_turns_highlighting_on() {
	let t0 = Instant::now();
	let mut session = session(EditorOptions::default());

	let report = session.open("main.c", C_SOURCE, None, t0);
	assert_eq!(report.changed, vec![Setting::Highlight(true)]);
	assert!(report.highlight_changed);
	assert_eq!(session.doc_type(), DocumentType::CLike);
	assert_eq!(session.mime(), Some("text/x-c"));
	assert!(session.is_pending(Consumer::Highlight));

	assert_eq!(session.poll(t0 + UPDATE_DELAY - Duration::from_millis(1)), 0);
	assert_eq!(session.poll(t0 + UPDATE_DELAY), 2);

	let doc = session.document();
	assert_eq!(doc.style_at(0), Some(StyleTag::Comment));
	assert_eq!(doc.style_at(10), Some(StyleTag::Type));
	assert_eq!(doc.style_at(23), Some(StyleTag::Keyword));
	assert_eq!(session.word_count(), WordCount { words: 6, chars: 35 });
	assert!(session.last_refresh().is_some_and(|r| r.added > 0 && !r.full_clear));
}

#[test]
fn edits_coalesce_into_one_run() {
	let t0 = Instant::now();
	let mut session = session(highlighting());
	session.open("main.c", "int x;\n", None, t0);
	session.poll(t0 + UPDATE_DELAY);

	let t1 = t0 + Duration::from_secs(1);
	let mut last = t1;
	for i in 0..5 {
		last = t1 + Duration::from_millis(10 * i);
		session.insert(0, " ", last);
	}

	assert_eq!(session.poll(last + Duration::from_millis(100)), 0);
	assert_eq!(session.poll(last + UPDATE_DELAY), 2);
	assert_eq!(session.poll(last + UPDATE_DELAY * 2), 0);
	assert_eq!(session.document().style_at(5), Some(StyleTag::Type));
}

#[test]
fn disabling_highlighting_clears_once() {
	let t0 = Instant::now();
	let mut session = session(highlighting());
	session.open("main.c", "int x;\n", None, t0);
	session.poll(t0 + UPDATE_DELAY);
	assert!(!session.document().overlay().is_empty());

	let t1 = t0 + Duration::from_secs(1);
	session.set_highlight(false, t1);
	assert_eq!(session.doc_type(), DocumentType::PlainText);
	assert!(!session.is_highlighting());
	assert!(session.is_pending(Consumer::Highlight));

	assert_eq!(session.poll(t1 + UPDATE_DELAY), 1);
	assert!(session.last_refresh().is_some_and(|r| r.full_clear));
	assert!(session.document().overlay().is_empty());

	session.insert(0, "long ", t1 + UPDATE_DELAY);
	assert!(!session.is_pending(Consumer::Highlight));
	assert!(session.is_pending(Consumer::WordCount));

	session.set_highlight(true, t1 + UPDATE_DELAY);
	assert_eq!(session.doc_type(), DocumentType::CLike);
	assert!(session.is_pending(Consumer::Highlight));
}

#[test]
fn clear_survives_a_collapsed_viewport() {
	let t0 = Instant::now();
	let mut session = session(highlighting());
	session.open("main.c", "int x;\n", None, t0);
	session.poll(t0 + UPDATE_DELAY);

	let t1 = t0 + Duration::from_secs(1);
	session.scroll_to(Viewport::new(0, 0), t1);
	session.set_highlight(false, t1);
	session.poll(t1 + UPDATE_DELAY);
	assert_eq!(session.document().style_at(0), Some(StyleTag::Type));

	let t2 = t1 + Duration::from_secs(1);
	session.scroll_to(Viewport::new(0, 100), t2);
	assert!(session.is_pending(Consumer::Highlight));
	session.poll(t2 + UPDATE_DELAY);
	assert!(session.last_refresh().is_some_and(|r| r.full_clear));
	assert!(session.document().overlay().is_empty());

	session.scroll_to(Viewport::new(0, 50), t2 + UPDATE_DELAY);
	assert!(!session.is_pending(Consumer::Highlight));
}

#[test]
fn plain_and_untitled_documents_are_not_highlighted() {
	let now = Instant::now();
	let mut session = session(highlighting());

	session.open("notes.txt", "int x;\n", None, now);
	assert_eq!(session.doc_type(), DocumentType::PlainText);
	assert!(!session.is_pending(Consumer::Highlight));

	session.open_untitled("int x;\n", now);
	assert_eq!(session.doc_type(), DocumentType::PlainText);
	assert_eq!(session.path(), None);

	session.open("Makefile", "all:\n\tcc main.c\n", Some("text/x-makefile"), now);
	assert_eq!(session.doc_type(), DocumentType::GenericCode);
	assert!(session.is_pending(Consumer::Highlight));
}

#[test]
fn view_events_arm_only_while_highlighting() {
	let t0 = Instant::now();
	let mut session = session(highlighting());
	session.open("main.c", "int x;\n", None, t0);
	session.poll(t0 + UPDATE_DELAY);

	let t1 = t0 + Duration::from_secs(1);
	session.focus_changed(false, t1);
	assert!(!session.is_pending(Consumer::Highlight));
	session.focus_changed(true, t1);
	assert!(session.is_pending(Consumer::Highlight));
	session.poll(t1 + UPDATE_DELAY);

	session.layout_changed(t1);
	assert!(session.is_pending(Consumer::Highlight));
	session.scroll_to(Viewport::new(0, 50), t1);
	assert_eq!(session.viewport(), Viewport::new(0, 50));
	assert_eq!(session.next_timeout(t1), Some(UPDATE_DELAY));
}

#[test]
fn highlight_now_supersedes_the_pending_run() {
	let now = Instant::now();
	let mut session = session(highlighting());
	session.open("main.c", "int x;\n", None, now);

	let report = session.highlight_now().expect("viewport has height");
	assert!(report.added > 0);
	assert!(!session.is_pending(Consumer::Highlight));

	let mut hidden = EditorSession::default();
	hidden.open("main.c", "int x;\n", None, now);
	assert_eq!(hidden.highlight_now(), None);
}

fn pond() -> String {
	(0..20)
		.map(|i| if i == 10 { "fish 10\n".to_owned() } else { format!("line {i:02}\n") })
		.collect()
}

#[test]
fn search_scrolls_the_match_to_the_middle() {
	let t0 = Instant::now();
	let mut session = EditorSession::new(EditorOptions::default(), Viewport::new(0, 40)).with_line_height(10);
	session.open("pond.txt", &pond(), None, t0);

	let hit = session.set_query("fish", t0).expect("query matches");
	assert_eq!(hit.range, 80..84);
	assert_eq!(hit.line, 10);
	assert_eq!(session.viewport(), Viewport::new(80, 40));
	assert_eq!(session.search().marker(), Some(80..84));

	assert_eq!(session.find_next(t0), None);
	assert_eq!(session.find_next(t0).map(|hit| hit.range), Some(80..84));
}

#[test]
fn search_marker_follows_edits() {
	let t0 = Instant::now();
	let mut session = session(EditorOptions::default());
	session.open("pond.txt", &pond(), None, t0);
	session.set_query("fish", t0);

	session.insert(0, "x\n", t0);
	assert_eq!(session.search().marker(), Some(82..86));
	assert!(session.is_pending(Consumer::SearchMarker));

	assert_eq!(session.poll(t0 + FIND_DELAY.max(UPDATE_DELAY)), 2);
	assert_eq!(session.search().marker(), Some(82..86));

	session.set_query("", t0);
	session.insert(0, "y", t0);
	assert!(!session.is_pending(Consumer::SearchMarker));
}

#[test]
fn reopening_resets_search() {
	let now = Instant::now();
	let mut session = session(EditorOptions::default());
	session.open("pond.txt", &pond(), None, now);
	session.set_query("fish", now);
	session.open("pond.txt", &pond(), None, now);
	assert!(!session.search().is_active());
}

#[test]
fn delimiter_selection_needs_a_code_file() {
	let now = Instant::now();
	let mut session = session(EditorOptions::default());

	session.open("main.c", "call(a, b);", None, now);
	session.select(Range::point(6));
	assert_eq!(session.select_to_delimiters(), Some(5..9));
	assert_eq!(session.document().selection(), Range::new(5, 9));

	session.open("notes.txt", "call(a, b);", None, now);
	session.select(Range::point(6));
	assert_eq!(session.select_to_delimiters(), None);

	session.open_untitled("call(a, b);", now);
	assert_eq!(session.select_to_delimiters(), None);
}
