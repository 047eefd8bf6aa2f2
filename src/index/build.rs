use crate::bible::{Bible, BibleStore, Book};
use crate::index::reader::SearchIndex;
use crate::index::types::IndexEntry;
use crate::index::writer::write_index;
use crate::utils::extract_words;
use crate::utils::progress::book_progress;
use anyhow::{Context, Result};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::path::{Path, PathBuf};

/// Extract (word, location) pairs for every verse of a book, in verse order
fn index_book(book: &Book) -> Vec<(String, IndexEntry)> {
    let mut postings = Vec::new();

    for chapter in &book.chapters {
        for verse in &chapter.verses {
            for word in extract_words(&verse.text) {
                postings.push((
                    word,
                    IndexEntry {
                        book: book.name.clone(),
                        chapter: chapter.number,
                        verse: verse.number,
                    },
                ));
            }
        }
    }

    postings
}

/// Build the inverted index for a whole Bible.
///
/// Books are processed in parallel and merged in Bible order, so each
/// token's postings list is in reading order and the output is deterministic.
pub fn build_index(bible: &Bible) -> SearchIndex {
    build_index_with_progress(bible, |_| {})
}

fn build_index_with_progress<F>(bible: &Bible, on_book: F) -> SearchIndex
where
    F: Fn(&Book) + Sync,
{
    let per_book: Vec<Vec<(String, IndexEntry)>> = bible
        .books
        .par_iter()
        .map(|book| {
            let result = index_book(book);
            on_book(book);
            result
        })
        .collect();

    let mut postings: FxHashMap<String, Vec<IndexEntry>> = FxHashMap::default();
    for book in per_book {
        for (word, entry) in book {
            postings.entry(word).or_default().push(entry);
        }
    }

    SearchIndex::new(postings)
}

/// Summary of an index build
#[derive(Debug, Clone)]
pub struct BuildSummary {
    pub books: usize,
    pub verses: usize,
    pub tokens: usize,
    pub output: PathBuf,
    pub bytes: u64,
}

/// Build an index from a directory of per-book JSON files and write it to `output`
pub fn build_index_from_dir(books_dir: &Path, output: &Path) -> Result<BuildSummary> {
    let store = BibleStore::from_book_dir(books_dir)?;
    build_index_to_file(store.bible(), output)
}

/// Build an index for an in-memory Bible and write it to `output`
pub fn build_index_to_file(bible: &Bible, output: &Path) -> Result<BuildSummary> {
    let pb = book_progress(bible.books.len() as u64);
    pb.set_message("indexing");

    let index = build_index_with_progress(bible, |_| pb.inc(1));
    pb.finish_and_clear();

    let bytes = write_index(&index, output)
        .with_context(|| format!("Failed to write index to {}", output.display()))?;

    let summary = BuildSummary {
        books: bible.books.len(),
        verses: bible.verse_count(),
        tokens: index.token_count(),
        output: output.to_path_buf(),
        bytes,
    };

    tracing::info!(
        "Indexed {} books, {} verses, {} unique words",
        summary.books,
        summary.verses,
        summary.tokens
    );

    Ok(summary)
}
