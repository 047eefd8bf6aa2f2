use crate::bible::VerseLookup;
use crate::bible::canon::sort_rank;
use crate::index::reader::SearchIndex;
use crate::index::types::{IndexEntry, VerseLocation, VerseResult};
use crate::query::parser::{SearchQuery, parse_search_query};
use rustc_hash::FxHashSet;
use std::cmp::Ordering;

/// Maximum results returned when the caller does not ask for a limit
pub const DEFAULT_LIMIT: usize = 50;

/// Keyword search over a [`SearchIndex`].
///
/// All keywords must match (AND). Results come back in canonical order:
/// book, then chapter, then verse. Searching never fails; anything that
/// cannot match simply yields no results.
pub struct SearchEngine<'a> {
    index: &'a SearchIndex,
}

impl<'a> SearchEngine<'a> {
    pub fn new(index: &'a SearchIndex) -> Self {
        Self { index }
    }

    /// Search and hydrate up to `limit` results with verse text from `lookup`
    pub fn search<L>(&self, query: &str, lookup: &L, limit: usize) -> Vec<VerseResult>
    where
        L: VerseLookup + ?Sized,
    {
        self.locate(query, limit)
            .into_iter()
            .map(|loc| hydrate(loc, lookup))
            .collect()
    }

    /// [`search`](Self::search) with [`DEFAULT_LIMIT`]
    pub fn search_default<L>(&self, query: &str, lookup: &L) -> Vec<VerseResult>
    where
        L: VerseLookup + ?Sized,
    {
        self.search(query, lookup, DEFAULT_LIMIT)
    }

    /// Matching locations in canonical order, without text.
    ///
    /// Which verses are returned is decided entirely here; hydration only
    /// fills in their text.
    pub fn locate(&self, query: &str, limit: usize) -> Vec<VerseLocation> {
        let parsed = parse_search_query(query);
        self.execute(&parsed, limit)
    }

    /// Run an already parsed query
    pub fn execute(&self, query: &SearchQuery, limit: usize) -> Vec<VerseLocation> {
        if query.is_empty() || limit == 0 {
            return Vec::new();
        }

        let Some(mut candidates) = self.intersect(&query.keywords) else {
            tracing::debug!(keywords = query.keywords.len(), "search: unindexed keyword");
            return Vec::new();
        };

        // Filter after intersecting so an unknown keyword still short-circuits
        if let Some(book) = query.book_filter {
            candidates.retain(|entry| entry.book == book);
        }

        let mut hits: Vec<&IndexEntry> = candidates.into_iter().collect();
        hits.sort_by(|a, b| canonical_order(a, b));
        hits.truncate(limit);

        tracing::debug!(
            keywords = query.keywords.len(),
            scoped = query.is_scoped(),
            hits = hits.len(),
            "search"
        );

        hits.into_iter().map(IndexEntry::location).collect()
    }

    /// Locations containing every keyword, or `None` if any keyword is not indexed
    fn intersect(&self, keywords: &[String]) -> Option<FxHashSet<&'a IndexEntry>> {
        let (first, rest) = keywords.split_first()?;

        let mut candidates: FxHashSet<&IndexEntry> =
            self.index.lookup(first)?.iter().collect();

        for keyword in rest {
            let matches: FxHashSet<&IndexEntry> = self.index.lookup(keyword)?.iter().collect();
            candidates.retain(|entry| matches.contains(entry));
        }

        Some(candidates)
    }
}

/// Canonical book rank, then chapter, then verse.
/// Unknown books sort last; the book name only breaks ties at the same chapter:verse.
fn canonical_order(a: &IndexEntry, b: &IndexEntry) -> Ordering {
    sort_rank(&a.book)
        .cmp(&sort_rank(&b.book))
        .then_with(|| a.chapter.cmp(&b.chapter))
        .then_with(|| a.verse.cmp(&b.verse))
        .then_with(|| a.book.cmp(&b.book))
}

/// Attach verse text; a verse missing from the store gets empty text
fn hydrate<L>(loc: VerseLocation, lookup: &L) -> VerseResult
where
    L: VerseLookup + ?Sized,
{
    let text = lookup
        .get_verses(&loc.book, loc.chapter, loc.verse, loc.verse)
        .into_iter()
        .next()
        .map(|v| v.text)
        .unwrap_or_default();

    VerseResult {
        book: loc.book,
        chapter: loc.chapter,
        verse: loc.verse,
        text,
    }
}
