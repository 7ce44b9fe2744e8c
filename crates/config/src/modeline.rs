//! Mode-line parsing.
//!
//! A mode line is any line shaped like `<token> <spaces> ed:<options>` found
//! in the head or tail window of a document. Options are whitespace
//! separated tokens of the form `[no]<code>[:<value>]`.

use std::sync::LazyLock;

use regex::Regex;

use crate::options::{Charset, TextSize, Theme, Typeface};

/// Number of leading characters scanned for a mode line.
pub const FIRST_SIZE: usize = 256;

/// Number of trailing characters scanned for a mode line.
pub const LAST_SIZE: usize = 256;

static MODE: LazyLock<Option<Regex>> = LazyLock::new(|| compile(r"(?m)^\S+\s+ed:(?P<options>.+)$"));

static OPTION: LazyLock<Option<Regex>> =
	LazyLock::new(|| compile(r"^(?P<no>no)?(?P<code>vw|ww|sg|hs|th|ts|tf|cs)(?::(?P<value>\w+))?$"));

fn compile(pattern: &str) -> Option<Regex> {
	Regex::new(pattern)
		.inspect_err(|e| tracing::error!(pattern, error = %e, "Invalid mode-line pattern"))
		.ok()
}

/// The option a directive addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModeKey {
	ViewOnly,
	Wrap,
	Suggest,
	Highlight,
	Theme,
	TextSize,
	Typeface,
	Charset,
}

impl ModeKey {
	/// Looks up a key by its two-letter code.
	pub fn from_code(code: &str) -> Option<Self> {
		Some(match code {
			"vw" => Self::ViewOnly,
			"ww" => Self::Wrap,
			"sg" => Self::Suggest,
			"hs" => Self::Highlight,
			"th" => Self::Theme,
			"ts" => Self::TextSize,
			"tf" => Self::Typeface,
			"cs" => Self::Charset,
			_ => return None,
		})
	}

	pub const fn code(self) -> &'static str {
		match self {
			Self::ViewOnly => "vw",
			Self::Wrap => "ww",
			Self::Suggest => "sg",
			Self::Highlight => "hs",
			Self::Theme => "th",
			Self::TextSize => "ts",
			Self::Typeface => "tf",
			Self::Charset => "cs",
		}
	}

	/// Returns true for on/off options.
	pub const fn is_boolean(self) -> bool {
		matches!(self, Self::ViewOnly | Self::Wrap | Self::Suggest | Self::Highlight)
	}
}

/// A typed option value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setting {
	ViewOnly(bool),
	Wrap(bool),
	Suggest(bool),
	Highlight(bool),
	Theme(Theme),
	TextSize(TextSize),
	Typeface(Typeface),
	Charset(Charset),
}

/// One parsed mode-line option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeDirective {
	pub key: ModeKey,
	/// Set by a `no` prefix.
	pub negated: bool,
	/// The text after `:`, if any.
	pub value: Option<String>,
}

impl ModeDirective {
	/// Parses a single option token. Returns `None` for anything unrecognised.
	pub fn parse(token: &str) -> Option<Self> {
		let caps = OPTION.as_ref()?.captures(token)?;
		let key = ModeKey::from_code(caps.name("code")?.as_str())?;
		Some(Self {
			key,
			negated: caps.name("no").is_some(),
			value: caps.name("value").map(|m| m.as_str().to_owned()),
		})
	}

	/// Resolves the directive to a typed setting.
	///
	/// Boolean options are on unless negated. Enumerated options are chosen by
	/// the first character of the value; a missing or unknown value yields
	/// `None`.
	pub fn setting(&self) -> Option<Setting> {
		let on = !self.negated;
		let initial = self.value.as_deref().and_then(|v| v.chars().next());
		Some(match self.key {
			ModeKey::ViewOnly => Setting::ViewOnly(on),
			ModeKey::Wrap => Setting::Wrap(on),
			ModeKey::Suggest => Setting::Suggest(on),
			ModeKey::Highlight => Setting::Highlight(on),
			ModeKey::Theme => Setting::Theme(match initial? {
				'l' => Theme::Light,
				'd' => Theme::Dark,
				's' => Theme::System,
				'w' => Theme::White,
				'b' => Theme::Black,
				'r' => Theme::Retro,
				_ => return None,
			}),
			ModeKey::TextSize => Setting::TextSize(match initial? {
				'l' => TextSize::Large,
				'm' => TextSize::Medium,
				's' => TextSize::Small,
				_ => return None,
			}),
			ModeKey::Typeface => Setting::Typeface(match initial? {
				'm' => Typeface::Mono,
				'p' => Typeface::Proportional,
				's' => Typeface::Serif,
				_ => return None,
			}),
			ModeKey::Charset => match initial? {
				'u' => Setting::Charset(Charset::Utf8),
				_ => return None,
			},
		})
	}
}

/// Byte offset of the start of the last `count` characters of `text`.
fn tail_start(text: &str, count: usize) -> usize {
	match count {
		0 => text.len(),
		_ => text.char_indices().rev().nth(count - 1).map_or(0, |(i, _)| i),
	}
}

/// Byte offset just past the first `count` characters of `text`.
fn head_end(text: &str, count: usize) -> usize {
	text.char_indices().nth(count).map_or(text.len(), |(i, _)| i)
}

/// Finds the first mode line in `window`, returning the byte offset of the
/// match within the window and the options text.
fn find_mode_line(window: &str) -> Option<(usize, &str)> {
	let caps = MODE.as_ref()?.captures(window)?;
	let whole = caps.get(0)?;
	Some((whole.start(), caps.name("options")?.as_str()))
}

/// Parses the mode directives of a document.
///
/// Only the first [`FIRST_SIZE`] and the last [`LAST_SIZE`] characters are
/// scanned, each for its first mode line. When the document is short enough
/// for both windows to find the same line it is parsed once.
pub fn parse_mode_directives(text: &str) -> Vec<ModeDirective> {
	let head = &text[..head_end(text, FIRST_SIZE)];
	let tail_offset = tail_start(text, LAST_SIZE);
	let tail = &text[tail_offset..];

	let head_line = find_mode_line(head);
	let tail_line = find_mode_line(tail)
		.filter(|&(pos, _)| head_line.is_none_or(|(head_pos, _)| head_pos != tail_offset + pos));

	let directives: Vec<ModeDirective> = [head_line, tail_line]
		.into_iter()
		.flatten()
		.flat_map(|(_, options)| {
			options.split_whitespace().filter_map(|token| {
				let directive = ModeDirective::parse(token);
				if directive.is_none() {
					tracing::trace!(token, "Ignoring mode-line token");
				}
				directive
			})
		})
		.collect();

	if !directives.is_empty() {
		tracing::debug!(count = directives.len(), "Found mode directives");
	}
	directives
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	use super::*;

	fn directive(key: ModeKey, negated: bool, value: Option<&str>) -> ModeDirective {
		ModeDirective {
			key,
			negated,
			value: value.map(str::to_owned),
		}
	}

	#[test]
	fn negation_and_order() {
		let text = "Some prose first.\n-- ed:noww hs\nMore prose after.";
		assert_eq!(
			parse_mode_directives(text),
			vec![
				directive(ModeKey::Wrap, true, None),
				directive(ModeKey::Highlight, false, None),
			]
		);

		let settings: Vec<_> = parse_mode_directives("-- ed:hs noww").iter().filter_map(ModeDirective::setting).collect();
		assert!(settings.contains(&Setting::Wrap(false)));
		assert!(settings.contains(&Setting::Highlight(true)));
	}

	#[test]
	fn values_are_kept() {
		assert_eq!(
			parse_mode_directives("# ed: th:dark ts:s tf:p cs:u"),
			vec![
				directive(ModeKey::Theme, false, Some("dark")),
				directive(ModeKey::TextSize, false, Some("s")),
				directive(ModeKey::Typeface, false, Some("p")),
				directive(ModeKey::Charset, false, Some("u")),
			]
		);
	}

	#[test]
	fn unrecognised_tokens_are_ignored() {
		assert_eq!(
			parse_mode_directives("// ed: xx ww:1:2 hsx vw ~ nosg"),
			vec![directive(ModeKey::ViewOnly, false, None), directive(ModeKey::Suggest, true, None)]
		);
	}

	#[test]
	fn line_shape_is_required() {
		assert!(parse_mode_directives("ed: ww").is_empty());
		assert!(parse_mode_directives("  ed: ww").is_empty());
		assert!(parse_mode_directives("--ed: ww").is_empty());
		assert!(parse_mode_directives("").is_empty());
	}

	#[test]
	fn window_bounds() {
		let filler = "x".repeat(600);
		let middle = format!("{filler}\n-- ed: ww\n{filler}");
		assert!(parse_mode_directives(&middle).is_empty());

		let head = format!("-- ed: ww\n{filler}");
		assert_eq!(parse_mode_directives(&head), vec![directive(ModeKey::Wrap, false, None)]);

		let tail = format!("{filler}\n-- ed: sg");
		assert_eq!(parse_mode_directives(&tail), vec![directive(ModeKey::Suggest, false, None)]);
	}

	#[test]
	fn head_and_tail_lines_both_apply() {
		let filler = "x\n".repeat(300);
		let text = format!("-- ed: ww\n{filler}-- ed: th:d\n");
		assert_eq!(
			parse_mode_directives(&text),
			vec![
				directive(ModeKey::Wrap, false, None),
				directive(ModeKey::Theme, false, Some("d")),
			]
		);
	}

	#[test]
	fn short_document_is_parsed_once() {
		assert_eq!(parse_mode_directives("-- ed: ww\n").len(), 1);
	}

	#[test]
	fn windows_count_characters() {
		// The mode line starts past byte 256 but well inside the first 256 characters.
		let text = format!("{}\n-- ed: ww\n{}", "é".repeat(200), "é".repeat(300));
		assert_eq!(parse_mode_directives(&text).len(), 1);
		assert_eq!(head_end(&text, FIRST_SIZE), 501);
	}

	#[rstest]
	#[case("th:l", Some(Setting::Theme(Theme::Light)))]
	#[case("th:retro", Some(Setting::Theme(Theme::Retro)))]
	#[case("th:q", None)]
	#[case("th", None)]
	#[case("ts:m", Some(Setting::TextSize(TextSize::Medium)))]
	#[case("tf:s", Some(Setting::Typeface(Typeface::Serif)))]
	#[case("cs:utf8", Some(Setting::Charset(Charset::Utf8)))]
	#[case("cs:l", None)]
	#[case("novw", Some(Setting::ViewOnly(false)))]
	#[case("sg", Some(Setting::Suggest(true)))]
	fn settings(#[case] token: &str, #[case] expected: Option<Setting>) {
		assert_eq!(ModeDirective::parse(token).and_then(|d| d.setting()), expected);
	}
}
