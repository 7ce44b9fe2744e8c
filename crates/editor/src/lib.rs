#![cfg_attr(test, allow(unused_crate_dependencies))]
//! Editor session wiring.
//!
//! This crate hosts a document for the highlighting core and drives the
//! consumers that react to edits.
//!
//! # Main Types
//!
//! - [`EditorSession`] - Owns the document, options and debounced consumers
//! - [`Document`] - Rope-backed text with a selection and a span overlay
//! - [`SearchState`] - Regex search with a single marker
//!
//! # Architecture
//!
//! ```text
//! EditorSession
//! ├── scheduler: Scheduler<Consumer, _>   // one pending slot per consumer
//! └── state
//!     ├── document: Document              // text, selection, spans
//!     ├── options: EditorOptions          // mode lines feed into these
//!     ├── doc_type: DocumentType          // picks the grammar
//!     ├── word_count: WordCount
//!     └── search: SearchState
//! ```
//!
//! Every method that can arm a consumer takes the current [`Instant`]; the
//! host calls [`EditorSession::poll`] when [`EditorSession::next_deadline`]
//! passes.
//!
//! [`Instant`]: std::time::Instant

pub mod brackets;
pub mod consumer;
pub mod document;
pub mod search;
pub mod session;
pub mod word_count;

pub use brackets::expand_to_delimiters;
pub use consumer::Consumer;
pub use document::Document;
pub use search::{SearchHit, SearchState};
pub use session::EditorSession;
pub use word_count::{WordCount, count_words};
