//! Region-bounded rule matching.

use std::ops::Range;

use quire_primitives::{ByteIdx, StyleSpan};

use crate::grammar::{Grammar, Rule};

/// Matches every rule of `grammar` inside `range` of `text`.
///
/// The range is clamped to the text and widened to `char` boundaries.
/// Patterns only ever see the region itself: `^` and `$` anchor at its
/// edges and word boundaries do not look past them, so a construct cut by
/// the region edge is styled as if the text ended there.
pub fn match_region(text: &str, grammar: &Grammar, range: Range<ByteIdx>) -> Vec<StyleSpan> {
	let end = text.ceil_char_boundary(range.end.min(text.len()));
	let start = text.floor_char_boundary(range.start.min(end));
	match_window(&text[start..end], start, grammar)
}

/// Matches every rule of `grammar` over `window`, a slice whose first byte
/// sits at document offset `base`.
///
/// Spans come out grouped by rule, in rule order, so a renderer that lets
/// the last span win paints later rules over earlier ones.
pub fn match_window(window: &str, base: ByteIdx, grammar: &Grammar) -> Vec<StyleSpan> {
	let mut spans = Vec::new();
	for rule in grammar.rules() {
		match_rule(window, base, rule, &mut spans);
	}
	tracing::trace!(
		doc_type = ?grammar.doc_type(),
		base,
		len = window.len(),
		spans = spans.len(),
		"Matched region"
	);
	spans
}

/// Appends the spans of a single rule.
///
/// A matching error, such as an exhausted backtrack budget on hostile
/// input, ends this rule's pass. Spans found before it are kept.
pub fn match_rule(window: &str, base: ByteIdx, rule: &Rule, out: &mut Vec<StyleSpan>) {
	for found in rule.pattern.find_iter(window) {
		match found {
			Ok(m) if m.start() < m.end() => {
				out.push(StyleSpan::new(base + m.start(), base + m.end(), rule.style));
			}
			Ok(_) => {}
			Err(e) => {
				tracing::trace!(rule = rule.name, error = %e, "Rule matching aborted");
				break;
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use quire_primitives::StyleTag;

	use super::*;
	use crate::grammar::GrammarTable;
	use crate::language::DocumentType;

	fn grammar(doc_type: DocumentType) -> &'static Grammar {
		GrammarTable::builtin().get(doc_type).unwrap()
	}

	fn styled<'a>(text: &'a str, spans: &[StyleSpan]) -> Vec<(&'a str, StyleTag)> {
		spans.iter().map(|s| (&text[s.range()], s.style)).collect()
	}

	#[test]
	fn c_like_rules_do_not_suppress_each_other() {
		let text = "class Foo { int CONST = 1; }";
		let spans = match_region(text, grammar(DocumentType::CLike), 0..text.len());
		let got = styled(text, &spans);

		let count = |word: &str, style: StyleTag| got.iter().filter(|(t, s)| *t == word && *s == style).count();
		assert_eq!(count("class", StyleTag::Keyword), 1);
		// `int` is not in the keyword list; the type rule paints it.
		assert_eq!(count("int", StyleTag::Type), 1);
		assert_eq!(count("Foo", StyleTag::ClassName), 1);
		assert_eq!(count("CONST", StyleTag::ClassName), 1);
		assert_eq!(count("CONST", StyleTag::Constant), 1);
		assert_eq!(count("1", StyleTag::Number), 1);
	}

	#[test]
	fn spans_are_grouped_in_rule_order() {
		let text = "// if x\nreturn 2;";
		let spans = match_region(text, grammar(DocumentType::CLike), 0..text.len());
		let styles: Vec<_> = spans.iter().map(|s| s.style).collect();
		let last_keyword = styles.iter().rposition(|s| *s == StyleTag::Keyword).unwrap();
		let first_comment = styles.iter().position(|s| *s == StyleTag::Comment).unwrap();
		assert!(last_keyword < first_comment);
		assert_eq!(styled(text, &spans[first_comment..]), vec![("// if x", StyleTag::Comment)]);
	}

	#[test]
	fn offsets_are_document_relative() {
		let text = "xxxx\nreturn";
		let spans = match_region(text, grammar(DocumentType::CLike), 5..text.len());
		assert_eq!(spans, vec![StyleSpan::new(5, 11, StyleTag::Keyword)]);
	}

	#[test]
	fn region_edges_act_as_line_anchors() {
		// The header is cut mid-line, yet still anchors at the region start.
		let text = "ab# Title\n";
		let spans = match_region(text, grammar(DocumentType::Markdown), 2..text.len());
		assert_eq!(styled(text, &spans), vec![("# Title", StyleTag::Header)]);
	}

	#[test]
	fn no_match_crosses_region_end() {
		let text = "/* open comment\nstill comment */";
		let spans = match_region(text, grammar(DocumentType::CLike), 0..16);
		assert!(spans.iter().all(|s| s.end <= 16));
		assert!(!spans.iter().any(|s| s.style == StyleTag::Comment));
	}

	#[test]
	fn range_is_clamped_to_text_and_char_boundaries() {
		let text = "é if";
		// 1 is inside 'é'; 99 is past the end.
		let spans = match_region(text, grammar(DocumentType::CLike), 1..99);
		assert_eq!(styled(text, &spans), vec![("if", StyleTag::Keyword)]);
	}

	#[test]
	fn markdown_emphasis_uses_backreferences() {
		let text = "some **bold** and ~~gone~~ text";
		let spans = match_region(text, grammar(DocumentType::Markdown), 0..text.len());
		assert_eq!(
			styled(text, &spans),
			vec![("**bold**", StyleTag::Emphasis), ("~~gone~~", StyleTag::Emphasis)]
		);
	}

	#[test]
	fn html_tags_are_case_insensitive() {
		let text = "<DIV class=\"x\">";
		let spans = match_region(text, grammar(DocumentType::Html), 0..text.len());
		let got = styled(text, &spans);
		assert!(got.contains(&("DIV", StyleTag::Tag)));
		assert!(got.contains(&("class", StyleTag::Attribute)));
		assert!(got.contains(&("\"x\"", StyleTag::StringLiteral)));
	}

	#[test]
	fn shell_variables_and_comments() {
		let text = "echo ${HOME} # done";
		let spans = match_region(text, grammar(DocumentType::Shell), 0..text.len());
		let got = styled(text, &spans);
		assert!(got.contains(&("${HOME}", StyleTag::Variable)));
		assert!(got.contains(&("# done", StyleTag::Comment)));
	}

	#[test]
	fn empty_region_yields_nothing() {
		assert!(match_region("int x;", grammar(DocumentType::CLike), 3..3).is_empty());
	}
}
