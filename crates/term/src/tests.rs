use std::path::{Path, PathBuf};

use clap::{CommandFactory, Parser};
use pretty_assertions::assert_eq;
use quire_config::EditorOptions;
use quire_primitives::{StyleSpan, StyleTag};
use quire_syntax::SpanOverlay;

use crate::cli::{Cli, Command, Source};
use crate::commands::{self, View};
use crate::render::{list_spans, paint};

fn source(file: impl Into<PathBuf>) -> Source {
	Source {
		file: file.into(),
		mime: None,
	}
}

fn write(dir: &Path, name: &str, text: &str) -> Source {
	let path = dir.join(name);
	std::fs::write(&path, text).unwrap();
	source(path)
}

const VIEW: View = View {
	scroll: 0,
	height: 10,
	line_height: 1,
	spans: false,
};

#[test]
fn cli_definition_is_valid() {
	Cli::command().debug_assert();
}

#[test]
fn highlight_flags_parse() {
	let cli = Cli::try_parse_from(["quire", "-v", "highlight", "a.c", "--scroll", "5", "--spans"]).unwrap();
	assert!(cli.verbose);
	match cli.command {
		Command::Highlight {
			source, scroll, height, spans, ..
		} => {
			assert_eq!(source.file, PathBuf::from("a.c"));
			assert_eq!((scroll, height, spans), (5, 40, true));
		}
		other => panic!("unexpected command {other:?}"),
	}
}

#[test]
fn classify_uses_guessed_mime() {
	assert_eq!(commands::classify(&source("src/main.c")).unwrap(), "c-like\ttext/x-c\n");
	assert_eq!(commands::classify(&source("notes.txt")).unwrap(), "plain\ttext/plain\n");
	assert_eq!(
		commands::classify(&source("Makefile")).unwrap(),
		"generic\tapplication/octet-stream\n"
	);
	assert_eq!(commands::classify(&source("data.xyz")).unwrap(), "generic\t-\n");

	let explicit = Source {
		file: PathBuf::from("README"),
		mime: Some("text/plain".to_owned()),
	};
	assert_eq!(commands::classify(&explicit).unwrap(), "plain\ttext/plain\n");
}

#[test]
fn count_reads_the_file() {
	let dir = tempfile::tempdir().unwrap();
	let file = write(dir.path(), "words.txt", "one two\n");
	assert_eq!(commands::count(&file).unwrap(), "2\t8\n");
}

#[test]
fn missing_file_is_reported() {
	let err = commands::count(&source("/nonexistent/quire.txt")).unwrap_err();
	assert!(err.to_string().contains("/nonexistent/quire.txt"));
}

#[test]
fn modeline_prints_resulting_options() {
	let dir = tempfile::tempdir().unwrap();
	let file = write(dir.path(), "doc.txt", "-- ed: ww th:d\nbody\n");
	let out = commands::modeline(&file, EditorOptions::default()).unwrap();

	assert!(out.starts_with("directives: ww th:d\nchanged: 2\nreconfigure: yes\n\n"));
	assert!(out.contains("wrap = true"));
	assert!(out.contains(r#"theme = "dark""#));

	let plain = write(dir.path(), "plain.txt", "nothing here\n");
	assert_eq!(commands::modeline(&plain, EditorOptions::default()).unwrap(), "no mode line\n");
}

#[test]
fn highlight_paints_the_visible_region() {
	let dir = tempfile::tempdir().unwrap();
	let file = write(dir.path(), "main.c", "int x;\n");

	let painted = commands::highlight(&file, EditorOptions::default(), VIEW).unwrap();
	assert!(painted.starts_with("\x1b[35mint\x1b[0m x"));

	let listed = commands::highlight(&file, EditorOptions::default(), View { spans: true, ..VIEW }).unwrap();
	assert!(listed.contains("0..3\ttype\t\"int\"\n"));

	let hidden = commands::highlight(&file, EditorOptions::default(), View { height: 0, ..VIEW }).unwrap();
	assert_eq!(hidden, "");
}

#[test]
fn paint_switches_colours_at_span_edges() {
	let mut overlay = SpanOverlay::new();
	overlay.add(StyleSpan::new(10, 13, StyleTag::Keyword));
	overlay.add(StyleSpan::new(13, 15, StyleTag::Number));

	assert_eq!(paint("for12 x", 10, &overlay), "\x1b[36mfor\x1b[0m\x1b[33m12\x1b[0m x");
	assert_eq!(paint("plain", 0, &SpanOverlay::new()), "plain");
}

#[test]
fn paint_draws_the_last_added_span() {
	let mut overlay = SpanOverlay::new();
	overlay.add(StyleSpan::new(0, 12, StyleTag::Keyword));
	overlay.add(StyleSpan::new(6, 8, StyleTag::Comment));
	overlay.add(StyleSpan::new(2, 6, StyleTag::Number));

	let fg = |tag: StyleTag| format!("\x1b[{}m", tag.color().ansi_fg());
	let expected = format!(
		"{}abcd\x1b[0m{}ef\x1b[0m{}ghij\x1b[0m",
		fg(StyleTag::Number),
		fg(StyleTag::Comment),
		fg(StyleTag::Keyword)
	);
	assert_eq!(paint("abcdefghij", 2, &overlay), expected);
}

#[test]
fn list_spans_slices_the_window() {
	let spans = [StyleSpan::new(4, 6, StyleTag::Comment)];
	assert_eq!(list_spans(&spans, "ab//cd", 2), "4..6\tcomment\t\"//\"\n");
}
