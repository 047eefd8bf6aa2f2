use crate::bible::canon::{BOOK_NAMES, sort_rank};
use crate::bible::models::{Bible, BibleReference, Book, Chapter, Verse};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Minimum abbreviation length accepted by [`BibleStore::find_book`]
const MIN_ABBREVIATION_LEN: usize = 3;

/// Verse text lookup used to hydrate search results.
///
/// Implementations must be side-effect free; the search engine calls this
/// once per result after ordering and limiting are complete.
pub trait VerseLookup {
    /// Verses of `book` `chapter` numbered `start..=end`
    fn get_verses(&self, book: &str, chapter: u32, start: u32, end: u32) -> Vec<Verse>;
}

impl<T: VerseLookup + ?Sized> VerseLookup for &T {
    fn get_verses(&self, book: &str, chapter: u32, start: u32, end: u32) -> Vec<Verse> {
        (**self).get_verses(book, chapter, start, end)
    }
}

/// In-memory Bible text with name and abbreviation lookup
#[derive(Debug, Clone, Default)]
pub struct BibleStore {
    bible: Bible,
}

impl BibleStore {
    pub fn new(bible: Bible) -> Self {
        Self { bible }
    }

    /// Load a whole Bible from a single `{"books": [...]}` JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read Bible file {}", path.display()))?;
        let bible: Bible = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse Bible file {}", path.display()))?;
        Ok(Self::new(bible))
    }

    /// Load a directory of per-book JSON files, ordered canonically
    pub fn from_book_dir(dir: &Path) -> Result<Self> {
        let mut books = Vec::new();

        for entry in fs::read_dir(dir)
            .with_context(|| format!("Failed to read book directory {}", dir.display()))?
        {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }

            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            match serde_json::from_str::<Book>(&content) {
                Ok(book) => books.push(book),
                // Other JSON artifacts (e.g. a previously built index) may share the directory
                Err(e) => tracing::debug!("Skipping {}: {}", path.display(), e),
            }
        }

        let missing: Vec<&str> = BOOK_NAMES
            .iter()
            .copied()
            .filter(|name| !books.iter().any(|b| b.name == *name))
            .collect();
        if !missing.is_empty() {
            tracing::warn!(
                "{} of {} books missing from {}",
                missing.len(),
                BOOK_NAMES.len(),
                dir.display()
            );
            tracing::debug!("Missing books: {}", missing.join(", "));
        }

        books.sort_by_key(|b| sort_rank(&b.name));
        Ok(Self::new(Bible { books }))
    }

    pub fn bible(&self) -> &Bible {
        &self.bible
    }

    pub fn books(&self) -> &[Book] {
        &self.bible.books
    }

    /// Find a book by name or abbreviation (case-insensitive).
    ///
    /// An exact name wins; otherwise the first book whose name starts with
    /// the given text (spaces ignored, at least 3 characters) is returned.
    pub fn find_book(&self, name: &str) -> Option<&Book> {
        let lower = name.trim().to_lowercase();
        if lower.is_empty() {
            return None;
        }

        if let Some(book) = self
            .bible
            .books
            .iter()
            .find(|b| b.name.to_lowercase() == lower)
        {
            return Some(book);
        }

        let compact = squash(&lower);
        if compact.chars().count() < MIN_ABBREVIATION_LEN {
            return None;
        }

        self.bible
            .books
            .iter()
            .find(|b| squash(&b.name.to_lowercase()).starts_with(&compact))
    }

    pub fn get_chapter(&self, book: &str, chapter: u32) -> Option<&Chapter> {
        self.find_book(book)?
            .chapters
            .iter()
            .find(|c| c.number == chapter)
    }

    /// Resolve a parsed reference to its verses.
    ///
    /// A whole-chapter reference yields every verse of the chapter.
    pub fn resolve(&self, reference: &BibleReference) -> Vec<Verse> {
        match reference.verse_start {
            None => self
                .get_chapter(&reference.book, reference.chapter)
                .map(|c| c.verses.clone())
                .unwrap_or_default(),
            Some(start) => {
                let end = reference.verse_end.unwrap_or(start);
                self.get_verses(&reference.book, reference.chapter, start, end)
            }
        }
    }
}

impl VerseLookup for BibleStore {
    fn get_verses(&self, book: &str, chapter: u32, start: u32, end: u32) -> Vec<Verse> {
        self.get_chapter(book, chapter)
            .map(|c| {
                c.verses
                    .iter()
                    .filter(|v| v.number >= start && v.number <= end)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }
}

fn squash(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}
