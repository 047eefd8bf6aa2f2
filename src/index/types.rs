use serde::{Deserialize, Serialize};
use std::fmt;

/// Address of a single verse. Identity key for results and intersections.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VerseLocation {
    pub book: String,
    pub chapter: u32,
    pub verse: u32,
}

impl VerseLocation {
    pub fn new(book: impl Into<String>, chapter: u32, verse: u32) -> Self {
        Self {
            book: book.into(),
            chapter,
            verse,
        }
    }
}

impl fmt::Display for VerseLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}:{}", self.book, self.chapter, self.verse)
    }
}

/// Posting stored under a token in the search index.
///
/// Same shape as the on-disk JSON (`{"book":..,"chapter":..,"verse":..}`).
/// Unknown fields are rejected so a malformed resource fails closed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IndexEntry {
    pub book: String,
    pub chapter: u32,
    pub verse: u32,
}

impl IndexEntry {
    pub fn location(&self) -> VerseLocation {
        VerseLocation::new(self.book.clone(), self.chapter, self.verse)
    }

    /// Chapter and verse numbers start at 1 and the book is named
    pub fn is_valid(&self) -> bool {
        !self.book.is_empty() && self.chapter >= 1 && self.verse >= 1
    }
}

impl From<(&str, u32, u32)> for IndexEntry {
    fn from((book, chapter, verse): (&str, u32, u32)) -> Self {
        Self {
            book: book.to_string(),
            chapter,
            verse,
        }
    }
}

/// Search hit with display text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerseResult {
    pub book: String,
    pub chapter: u32,
    pub verse: u32,
    /// Looked up from the verse store at query time; empty if the store lacks the verse
    pub text: String,
}

impl VerseResult {
    pub fn id(&self) -> VerseLocation {
        VerseLocation::new(self.book.clone(), self.chapter, self.verse)
    }
}
