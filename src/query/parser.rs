use crate::bible::canon::canonical_form;
use crate::utils::{split_keywords, strip_non_alphanumeric};

/// Search query after scope detection and tokenization
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    /// Canonical book name when the query used `Book: keywords` syntax
    pub book_filter: Option<&'static str>,
    /// Lowercase keywords, all of which must match
    pub keywords: Vec<String>,
}

impl SearchQuery {
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    pub fn is_scoped(&self) -> bool {
        self.book_filter.is_some()
    }
}

/// Parse a raw search box string.
///
/// `"1 John: love"` scopes the search to 1 John. A colon whose left side is
/// not a book is not a scope marker: punctuation is stripped from the whole
/// query instead, so `"love: god"` searches for `love` and `god`.
pub fn parse_search_query(input: &str) -> SearchQuery {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return SearchQuery::default();
    }

    let Some((before, after)) = trimmed.split_once(':') else {
        return SearchQuery {
            book_filter: None,
            keywords: split_keywords(trimmed),
        };
    };

    let before = before.trim();
    let after = after.trim();

    if !before.is_empty() && !after.is_empty() {
        if let Some(book) = canonical_form(before) {
            return SearchQuery {
                book_filter: Some(book),
                keywords: split_keywords(after),
            };
        }
    }

    SearchQuery {
        book_filter: None,
        keywords: split_keywords(&strip_non_alphanumeric(trimmed)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_query() {
        let q = parse_search_query("  Faith HOPE ");
        assert_eq!(q.book_filter, None);
        assert_eq!(q.keywords, vec!["faith", "hope"]);
    }

    #[test]
    fn test_empty_query() {
        assert!(parse_search_query("").is_empty());
        assert!(parse_search_query("   ").is_empty());
        assert!(parse_search_query("\t\n").is_empty());
    }

    #[test]
    fn test_scoped_query() {
        let q = parse_search_query("1 John: love one another");
        assert_eq!(q.book_filter, Some("1 John"));
        assert_eq!(q.keywords, vec!["love", "one", "another"]);
        assert!(q.is_scoped());
    }

    #[test]
    fn test_scope_canonicalizes_case() {
        let q = parse_search_query("song of solomon : Beloved");
        assert_eq!(q.book_filter, Some("Song of Solomon"));
        assert_eq!(q.keywords, vec!["beloved"]);
    }

    #[test]
    fn test_colon_after_non_book_is_stripped() {
        let q = parse_search_query("love: god");
        assert_eq!(q.book_filter, None);
        assert_eq!(q.keywords, vec!["love", "god"]);
        assert_eq!(q, parse_search_query("love god"));
    }

    #[test]
    fn test_trailing_colon() {
        let q = parse_search_query("faith:");
        assert_eq!(q.keywords, vec!["faith"]);
    }

    #[test]
    fn test_book_with_empty_keywords_is_not_a_scope() {
        // "Romans:" has nothing after the colon, so the book name becomes a keyword
        let q = parse_search_query("Romans:");
        assert_eq!(q.book_filter, None);
        assert_eq!(q.keywords, vec!["romans"]);
    }

    #[test]
    fn test_leading_colon() {
        let q = parse_search_query(": grace");
        assert_eq!(q.book_filter, None);
        assert_eq!(q.keywords, vec!["grace"]);
    }

    #[test]
    fn test_only_first_colon_splits() {
        let q = parse_search_query("John: light: darkness");
        assert_eq!(q.book_filter, Some("John"));
        // Scoped keywords are only split on whitespace
        assert_eq!(q.keywords, vec!["light:", "darkness"]);
    }

    #[test]
    fn test_fallback_strips_other_punctuation() {
        let q = parse_search_query("grace, peace: mercy!");
        assert_eq!(q.keywords, vec!["grace", "peace", "mercy"]);
    }

    #[test]
    fn test_only_punctuation() {
        assert!(parse_search_query(":::").is_empty());
    }
}
