//! Compiled grammars.
//!
//! A grammar is an ordered list of rules. Order matters: the matcher applies
//! rules first to last and every rule's spans are kept, so a later rule paints
//! over an earlier one wherever both match. The C-like comment rule relies on
//! this to recolour keywords that sit inside comments and strings.

use std::sync::LazyLock;

use quire_primitives::StyleTag;
use thiserror::Error;

use crate::language::DocumentType;
use crate::patterns::*;

/// Errors that can occur when compiling a grammar.
#[derive(Error, Debug)]
pub enum GrammarError {
	#[error("rule '{rule}' of the {doc_type:?} grammar failed to compile: {source}")]
	Pattern {
		doc_type: DocumentType,
		rule: &'static str,
		#[source]
		source: Box<fancy_regex::Error>,
	},
}

/// Result type for grammar operations.
pub type Result<T> = std::result::Result<T, GrammarError>;

/// Uncompiled rule definition.
#[derive(Debug, Clone, Copy)]
pub struct RuleDef {
	/// Short rule name, used in diagnostics.
	pub name: &'static str,
	/// Pattern source, without the multi-line flag.
	pub source: &'static str,
	/// Style attached to every match.
	pub style: StyleTag,
}

impl RuleDef {
	pub const fn new(name: &'static str, source: &'static str, style: StyleTag) -> Self {
		Self { name, source, style }
	}
}

/// A compiled `(pattern, style)` pair.
#[derive(Debug, Clone)]
pub struct Rule {
	pub name: &'static str,
	pub pattern: fancy_regex::Regex,
	pub style: StyleTag,
}

/// An ordered set of rules for one document type.
#[derive(Debug, Clone)]
pub struct Grammar {
	doc_type: DocumentType,
	rules: Vec<Rule>,
}

impl Grammar {
	/// Compiles rule definitions in order.
	pub fn compile(doc_type: DocumentType, defs: &[RuleDef]) -> Result<Self> {
		let rules = defs
			.iter()
			.map(|def| {
				fancy_regex::Regex::new(&format!("(?m){}", def.source))
					.map(|pattern| Rule {
						name: def.name,
						pattern,
						style: def.style,
					})
					.map_err(|e| GrammarError::Pattern {
						doc_type,
						rule: def.name,
						source: Box::new(e),
					})
			})
			.collect::<Result<Vec<_>>>()?;
		Ok(Self { doc_type, rules })
	}

	/// Returns the document type this grammar highlights.
	pub fn doc_type(&self) -> DocumentType {
		self.doc_type
	}

	/// Returns the rules in application order.
	pub fn rules(&self) -> &[Rule] {
		&self.rules
	}
}

const CC_RULES: &[RuleDef] = &[
	RuleDef::new("keywords", KEYWORDS, StyleTag::Keyword),
	RuleDef::new("types", TYPES, StyleTag::Type),
	RuleDef::new("class", CLASS, StyleTag::ClassName),
	RuleDef::new("number", NUMBER, StyleTag::Number),
	RuleDef::new("annotation", ANNOTATION, StyleTag::Annotation),
	RuleDef::new("constant", CONSTANT, StyleTag::Constant),
	RuleDef::new("operator", OPERATOR, StyleTag::Operator),
	RuleDef::new("comment", CC_COMMENT, StyleTag::Comment),
];

const HTML_RULES: &[RuleDef] = &[
	RuleDef::new("tags", HTML_TAGS, StyleTag::Tag),
	RuleDef::new("attrs", HTML_ATTRS, StyleTag::Attribute),
	RuleDef::new("quoted", QUOTED, StyleTag::StringLiteral),
	RuleDef::new("comment", HTML_COMMENT, StyleTag::Comment),
];

const CSS_RULES: &[RuleDef] = &[
	RuleDef::new("styles", CSS_STYLES, StyleTag::Keyword),
	RuleDef::new("hex", CSS_HEX, StyleTag::Number),
	RuleDef::new("comment", CC_COMMENT, StyleTag::Comment),
];

const ORG_RULES: &[RuleDef] = &[
	RuleDef::new("header", ORG_HEADER, StyleTag::Header),
	RuleDef::new("emphasis", ORG_EMPH, StyleTag::Emphasis),
	RuleDef::new("link", ORG_LINK, StyleTag::Link),
	RuleDef::new("comment", ORG_COMMENT, StyleTag::Comment),
];

const MD_RULES: &[RuleDef] = &[
	RuleDef::new("header", MD_HEADER, StyleTag::Header),
	RuleDef::new("link", MD_LINK, StyleTag::Link),
	RuleDef::new("emphasis", MD_EMPH, StyleTag::Emphasis),
	RuleDef::new("code", MD_CODE, StyleTag::Code),
];

const SH_RULES: &[RuleDef] = &[
	RuleDef::new("keywords", KEYWORDS, StyleTag::Keyword),
	RuleDef::new("number", NUMBER, StyleTag::Number),
	RuleDef::new("constant", CONSTANT, StyleTag::Constant),
	RuleDef::new("variable", SH_VAR, StyleTag::Variable),
	RuleDef::new("operator", OPERATOR, StyleTag::Operator),
	RuleDef::new("quoted", QUOTED, StyleTag::StringLiteral),
	RuleDef::new("comment", SH_COMMENT, StyleTag::Comment),
];

const GENERIC_RULES: &[RuleDef] = &[
	RuleDef::new("keywords", KEYWORDS, StyleTag::Keyword),
	RuleDef::new("types", TYPES, StyleTag::Type),
	RuleDef::new("class", CLASS, StyleTag::ClassName),
	RuleDef::new("number", NUMBER, StyleTag::Number),
	RuleDef::new("constant", CONSTANT, StyleTag::Constant),
	RuleDef::new("quoted", QUOTED, StyleTag::StringLiteral),
];

/// Returns the rule definitions for a document type, `None` for plain text.
pub fn rule_defs(doc_type: DocumentType) -> Option<&'static [RuleDef]> {
	match doc_type {
		DocumentType::PlainText => None,
		DocumentType::CLike => Some(CC_RULES),
		DocumentType::Html => Some(HTML_RULES),
		DocumentType::Css => Some(CSS_RULES),
		DocumentType::Markdown => Some(MD_RULES),
		DocumentType::OrgMode => Some(ORG_RULES),
		DocumentType::Shell => Some(SH_RULES),
		DocumentType::GenericCode => Some(GENERIC_RULES),
	}
}

static BUILTIN: LazyLock<GrammarTable> = LazyLock::new(|| {
	GrammarTable::load().unwrap_or_else(|e| panic!("built-in grammar table is invalid: {e}"))
});

/// Registry of compiled grammars, one per highlightable document type.
#[derive(Debug)]
pub struct GrammarTable {
	grammars: Vec<Grammar>,
}

impl GrammarTable {
	/// Compiles every built-in grammar.
	///
	/// Grammars are fixed at build time, so a failure here is a defect in the
	/// pattern sources rather than a runtime condition.
	pub fn load() -> Result<Self> {
		let grammars = DocumentType::ALL
			.iter()
			.filter_map(|&doc_type| rule_defs(doc_type).map(|defs| Grammar::compile(doc_type, defs)))
			.collect::<Result<Vec<_>>>()?;
		tracing::debug!(count = grammars.len(), "Compiled built-in grammars");
		Ok(Self { grammars })
	}

	/// Returns the process-wide table, compiling it on first use.
	pub fn builtin() -> &'static GrammarTable {
		&BUILTIN
	}

	/// Looks up the grammar for a document type.
	pub fn get(&self, doc_type: DocumentType) -> Option<&Grammar> {
		self.grammars.iter().find(|g| g.doc_type == doc_type)
	}

	/// Returns the number of compiled grammars.
	pub fn len(&self) -> usize {
		self.grammars.len()
	}

	/// Returns true if the table holds no grammars.
	pub fn is_empty(&self) -> bool {
		self.grammars.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn builtin_table_compiles() {
		let table = GrammarTable::load().expect("built-in grammars compile");
		assert_eq!(table.len(), 7);
	}

	#[test]
	fn plain_text_has_no_grammar() {
		assert!(GrammarTable::builtin().get(DocumentType::PlainText).is_none());
		assert!(rule_defs(DocumentType::PlainText).is_none());
	}

	#[test]
	fn rule_order_is_preserved() {
		let grammar = GrammarTable::builtin().get(DocumentType::CLike).unwrap();
		let names: Vec<_> = grammar.rules().iter().map(|r| r.name).collect();
		assert_eq!(
			names,
			["keywords", "types", "class", "number", "annotation", "constant", "operator", "comment"]
		);
	}

	#[test]
	fn bad_pattern_names_the_rule() {
		let defs = [RuleDef::new("broken", r"(unclosed", StyleTag::Keyword)];
		let err = Grammar::compile(DocumentType::GenericCode, &defs).unwrap_err();
		let msg = err.to_string();
		assert!(msg.contains("broken"), "{msg}");
		assert!(msg.contains("GenericCode"), "{msg}");
	}
}
