//! # VXI - Verse Index
//!
//! VXI is a terminal-first Bible verse search engine. It answers keyword
//! queries from a prebuilt inverted index and turns typed citations such as
//! `1 Corinthians 13:4-7` into structured references.
//!
//! ## Architecture
//!
//! - [`bible`] - Canonical book order, text model, in-memory verse store
//! - [`index`] - Search index loading, building and statistics
//! - [`query`] - Search query scoping, the search engine, reference parsing
//! - [`output`] - Terminal formatting
//! - [`utils`] - Tokenization, app config, progress bars
//!
//! ## Quick Start
//!
//! ```
//! use vxi::bible::BibleStore;
//! use vxi::index::SearchIndex;
//! use vxi::query::{SearchEngine, parse_reference};
//!
//! let index = SearchIndex::from_entries([
//!     ("love", vec![("1 John", 4, 8), ("1 John", 4, 7)]),
//!     ("god", vec![("1 John", 4, 8), ("Genesis", 1, 1)]),
//! ]);
//! let store = BibleStore::default();
//!
//! let engine = SearchEngine::new(&index);
//! let results = engine.search("1 John: love god", &store, 10);
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].verse, 8);
//!
//! let reference = parse_reference("Romans 8:28-30").unwrap();
//! assert_eq!(reference.verse_end, Some(30));
//! ```
//!
//! ## Search semantics
//!
//! Every keyword must match (AND). `Book: keywords` restricts results to
//! one book; a colon after anything that is not a book name is treated as
//! punctuation. Results are ordered canonically (Genesis first) and truncated
//! to the requested limit before verse text is looked up.

pub mod bible;
pub mod index;
pub mod output;
pub mod query;
pub mod utils;
