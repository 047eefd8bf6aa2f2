use crate::bible::{BibleReference, BibleStore, Book};
use regex::Regex;
use std::sync::OnceLock;

/// `<book> <chapter>[:<verse>[-<verse>]]`, where the book is one to three
/// words with an optional leading digit ("1 Corinthians", "Song of Solomon").
const REFERENCE_PATTERN: &str =
    r"^(\d?\s?[A-Za-z]+(?:\s+[A-Za-z]+(?:\s+[A-Za-z]+)?)?)\s+(\d+)(?::(\d+)(?:-(\d+))?)?$";

static REFERENCE_REGEX: OnceLock<Option<Regex>> = OnceLock::new();

fn reference_regex() -> Option<&'static Regex> {
    REFERENCE_REGEX
        .get_or_init(|| Regex::new(REFERENCE_PATTERN).ok())
        .as_ref()
}

/// Parse a typed citation such as `"Romans 8:28-30"`.
///
/// The book is only checked for shape, not existence: `"Frodo 3:16"`
/// parses. Ranges are passed through as written, even when the end is
/// before the start. Anything that does not match the whole trimmed
/// input returns `None`.
pub fn parse_reference(input: &str) -> Option<BibleReference> {
    let caps = reference_regex()?.captures(input.trim())?;

    let book = caps.get(1)?.as_str().to_string();
    let chapter = caps.get(2)?.as_str().parse().ok()?;
    let verse_start = match caps.get(3) {
        Some(m) => Some(m.as_str().parse().ok()?),
        None => None,
    };
    let verse_end = match caps.get(4) {
        Some(m) => Some(m.as_str().parse().ok()?),
        None => None,
    };

    Some(BibleReference {
        book,
        chapter,
        verse_start,
        verse_end,
    })
}

/// Parse a citation and resolve its book against a store.
///
/// The returned reference carries the store's spelling of the book, so
/// `"gen 1:1"` comes back as `Genesis 1:1`.
pub fn resolve_reference<'a>(input: &str, store: &'a BibleStore) -> Option<(BibleReference, &'a Book)> {
    let mut reference = parse_reference(input)?;
    let book = store.find_book(&reference.book)?;
    reference.book = book.name.clone();
    Some((reference, book))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bible::{Bible, Chapter, Verse};

    fn parts(input: &str) -> Option<(String, u32, Option<u32>, Option<u32>)> {
        parse_reference(input).map(|r| (r.book, r.chapter, r.verse_start, r.verse_end))
    }

    #[test]
    fn test_simple_book_chapter_verse() {
        assert_eq!(parts("John 3:16"), Some(("John".into(), 3, Some(16), None)));
    }

    #[test]
    fn test_book_chapter_only() {
        assert_eq!(parts("Genesis 1"), Some(("Genesis".into(), 1, None, None)));
    }

    #[test]
    fn test_verse_range() {
        assert_eq!(parts("Romans 8:28-30"), Some(("Romans".into(), 8, Some(28), Some(30))));
    }

    #[test]
    fn test_numbered_book() {
        assert_eq!(
            parts("1 Corinthians 13:4"),
            Some(("1 Corinthians".into(), 13, Some(4), None))
        );
        assert_eq!(parts("1Corinthians 13"), Some(("1Corinthians".into(), 13, None, None)));
    }

    #[test]
    fn test_three_word_book() {
        assert_eq!(
            parts("Song of Solomon 2:1"),
            Some(("Song of Solomon".into(), 2, Some(1), None))
        );
    }

    #[test]
    fn test_abbreviation_passes_through() {
        assert_eq!(parts("Gen 1:1"), Some(("Gen".into(), 1, Some(1), None)));
    }

    #[test]
    fn test_unknown_book_is_syntactically_valid() {
        assert_eq!(parts("Frodo 3:16"), Some(("Frodo".into(), 3, Some(16), None)));
    }

    #[test]
    fn test_inverted_range_passes_through() {
        assert_eq!(parts("Romans 8:30-28"), Some(("Romans".into(), 8, Some(30), Some(28))));
    }

    #[test]
    fn test_surrounding_whitespace_trimmed() {
        assert_eq!(parts("  John 3:16 \n"), Some(("John".into(), 3, Some(16), None)));
    }

    #[test]
    fn test_invalid_input() {
        assert!(parse_reference("not a reference").is_none());
        assert!(parse_reference("").is_none());
        assert!(parse_reference("John").is_none());
        assert!(parse_reference("John 3:").is_none());
        assert!(parse_reference("John 3:16-").is_none());
        assert!(parse_reference("John 3:16 and more").is_none());
        assert!(parse_reference("Four Word Book Name 1").is_none());
        assert!(parse_reference("12 Kings 1").is_none());
    }

    #[test]
    fn test_overflowing_numbers_rejected() {
        assert!(parse_reference("John 99999999999:1").is_none());
        assert!(parse_reference("John 3:99999999999").is_none());
    }

    fn store() -> BibleStore {
        BibleStore::new(Bible {
            books: vec![Book {
                name: "Genesis".to_string(),
                chapters: vec![Chapter {
                    number: 1,
                    verses: vec![Verse {
                        number: 1,
                        text: "In the beginning".to_string(),
                    }],
                }],
            }],
        })
    }

    #[test]
    fn test_resolve_reference_canonicalizes_book() {
        let store = store();
        let (reference, book) = resolve_reference("gen 1:1", &store).unwrap();
        assert_eq!(book.name, "Genesis");
        assert_eq!(reference.to_string(), "Genesis 1:1");
    }

    #[test]
    fn test_resolve_reference_unknown_book() {
        let store = store();
        assert!(resolve_reference("Frodo 3:16", &store).is_none());
        assert!(resolve_reference("nonsense", &store).is_none());
    }
}
