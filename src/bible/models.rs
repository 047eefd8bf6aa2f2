use serde::{Deserialize, Serialize};
use std::fmt;

/// A single verse of text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    pub number: u32,
    pub text: String,
}

/// A chapter and its verses, in order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    pub number: u32,
    pub verses: Vec<Verse>,
}

/// A book and its chapters. Also the shape of a per-book JSON file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub name: String,
    pub chapters: Vec<Chapter>,
}

/// Full Bible text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bible {
    pub books: Vec<Book>,
}

impl Bible {
    /// Total number of verses across all books
    pub fn verse_count(&self) -> usize {
        self.books
            .iter()
            .flat_map(|b| &b.chapters)
            .map(|c| c.verses.len())
            .sum()
    }
}

/// Structured citation such as `Romans 8:28-30`.
///
/// `book` is whatever the user typed; it is not guaranteed to name a real
/// book until resolved against a [`BibleStore`](crate::bible::BibleStore).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BibleReference {
    pub book: String,
    pub chapter: u32,
    pub verse_start: Option<u32>,
    pub verse_end: Option<u32>,
}

impl BibleReference {
    /// True when the reference names a whole chapter
    pub fn is_whole_chapter(&self) -> bool {
        self.verse_start.is_none()
    }
}

impl fmt::Display for BibleReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.verse_start, self.verse_end) {
            (Some(start), Some(end)) if start != end => {
                write!(f, "{} {}:{}-{}", self.book, self.chapter, start, end)
            }
            (Some(start), _) => write!(f, "{} {}:{}", self.book, self.chapter, start),
            (None, _) => write!(f, "{} {}", self.book, self.chapter),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference(start: Option<u32>, end: Option<u32>) -> BibleReference {
        BibleReference {
            book: "Romans".to_string(),
            chapter: 8,
            verse_start: start,
            verse_end: end,
        }
    }

    #[test]
    fn test_display_range() {
        assert_eq!(reference(Some(28), Some(30)).to_string(), "Romans 8:28-30");
    }

    #[test]
    fn test_display_single_verse() {
        assert_eq!(reference(Some(28), None).to_string(), "Romans 8:28");
        // Degenerate range collapses to one verse
        assert_eq!(reference(Some(28), Some(28)).to_string(), "Romans 8:28");
    }

    #[test]
    fn test_display_whole_chapter() {
        let r = reference(None, None);
        assert!(r.is_whole_chapter());
        assert_eq!(r.to_string(), "Romans 8");
    }

    #[test]
    fn test_bible_json_shape() {
        let json = r#"{"books":[{"name":"Jude","chapters":[{"number":1,"verses":[
            {"number":1,"text":"Jude, a servant of Jesus Christ"},
            {"number":2,"text":"May mercy, peace, and love be multiplied to you."}]}]}]}"#;
        let bible: Bible = serde_json::from_str(json).unwrap();
        assert_eq!(bible.books[0].name, "Jude");
        assert_eq!(bible.verse_count(), 2);
    }
}
