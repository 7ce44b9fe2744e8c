use std::borrow::Cow;
use std::fmt::Write;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use quire_config::{EditorOptions, ModeDirective, parse_mode_directives};
use quire_editor::{EditorSession, count_words};
use quire_language::{classify as classify_document, guess_mime};
use quire_syntax::Viewport;

use crate::cli::Source;
use crate::render::{list_spans, paint};

fn read(path: &Path) -> Result<String> {
	std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

fn file_name(path: &Path) -> Result<&str> {
	path.file_name()
		.and_then(|name| name.to_str())
		.with_context(|| format!("{} has no usable file name", path.display()))
}

impl Source {
	fn mime(&self) -> Option<&str> {
		self.mime
			.as_deref()
			.or_else(|| file_name(&self.file).ok().and_then(guess_mime))
	}
}

/// `quire classify`
pub fn classify(source: &Source) -> Result<String> {
	let name = file_name(&source.file)?;
	let mime = source.mime();
	let doc_type = classify_document(name, mime);
	Ok(format!("{doc_type}\t{}\n", mime.unwrap_or("-")))
}

fn format_directive(directive: &ModeDirective) -> String {
	let mut out = String::new();
	if directive.negated {
		out.push_str("no");
	}
	out.push_str(directive.key.code());
	if let Some(value) = &directive.value {
		out.push(':');
		out.push_str(value);
	}
	out
}

/// `quire modeline`
pub fn modeline(source: &Source, mut options: EditorOptions) -> Result<String> {
	let text = read(&source.file)?;
	let directives = parse_mode_directives(&text);
	let report = options.apply_directives(&directives);

	let mut out = String::new();
	if directives.is_empty() {
		out.push_str("no mode line\n");
		return Ok(out);
	}

	let tokens: Vec<String> = directives.iter().map(format_directive).collect();
	let _ = writeln!(out, "directives: {}", tokens.join(" "));
	let _ = writeln!(out, "changed: {}", report.changed.len());
	if report.needs_reconfigure {
		out.push_str("reconfigure: yes\n");
	}
	out.push('\n');
	out.push_str(&options.to_toml().context("serializing options")?);
	Ok(out)
}

/// Viewport settings for `quire highlight`.
#[derive(Debug, Clone, Copy)]
pub struct View {
	pub scroll: u32,
	pub height: u32,
	pub line_height: u32,
	pub spans: bool,
}

/// `quire highlight`
pub fn highlight(source: &Source, options: EditorOptions, view: View) -> Result<String> {
	let text = read(&source.file)?;
	let options = EditorOptions {
		highlight: true,
		..options
	};

	let mut session =
		EditorSession::new(options, Viewport::new(view.scroll, view.height)).with_line_height(view.line_height);
	session.open(&source.file, &text, source.mime.as_deref(), Instant::now());
	tracing::debug!(doc_type = %session.doc_type(), "Highlighting");

	let Some(report) = session.highlight_now() else {
		return Ok(String::new());
	};

	let document = session.document();
	let region = report.region.range();
	let window: Cow<'_, str> = document.rope().byte_slice(region.clone()).into();
	Ok(if view.spans {
		list_spans(&document.overlay().spans_in(region.clone()), &window, region.start)
	} else {
		paint(&window, region.start, document.overlay())
	})
}

/// `quire count`
pub fn count(source: &Source) -> Result<String> {
	let counts = count_words(&read(&source.file)?);
	Ok(format!("{}\t{}\n", counts.words, counts.chars))
}
