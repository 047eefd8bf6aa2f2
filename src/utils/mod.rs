//! Utility functions shared across the crate.
//!
//! - [`app_data`] - Application data directory and config (XDG-compliant)
//! - [`progress`] - Progress bar shim (`progress` feature)
//! - [`tokenizer`] - Keyword splitting and verse text normalization
//!
//! ```no_run
//! use vxi::utils::{extract_words, split_keywords};
//!
//! // Query side: whitespace split + lowercase
//! let keywords = split_keywords("Faith Hope");
//! // Returns: ["faith", "hope"]
//!
//! // Index side: punctuation stripped, distinct, len >= 2
//! let words = extract_words("Love is patient, love is kind.");
//! // Returns: ["love", "is", "patient", "kind"]
//! ```

pub mod app_data;
pub mod progress;
pub mod tokenizer;

pub use app_data::*;
pub use tokenizer::*;
