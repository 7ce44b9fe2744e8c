// Matching runs on the UI thread: diagnostics go through tracing, never stderr
#![deny(clippy::print_stderr)]

//! Regex syntax grammars for the editor.
//!
//! This crate maps documents to grammars and runs a grammar's ordered rules
//! over a bounded byte region.
//!
//! # Architecture
//!
//! * [`language`]: Document classification by file extension and MIME type
//! * [`patterns`]: Pattern sources shared between grammars
//! * [`grammar`]: Compiled grammars and the built-in [`GrammarTable`]
//! * [`matcher`]: Region-scoped rule matching producing [`StyleSpan`]s
//!
//! [`StyleSpan`]: quire_primitives::StyleSpan

pub mod grammar;
pub mod language;
pub mod matcher;
pub mod patterns;

pub use grammar::{Grammar, GrammarError, GrammarTable, Rule, RuleDef};
pub use language::{DocumentType, OCTET_STREAM, TEXT_PLAIN, classify, guess_mime, resolve_document_type};
pub use matcher::{match_region, match_rule, match_window};
