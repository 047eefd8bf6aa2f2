use crate::index::types::IndexEntry;
use rustc_hash::FxHashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use thiserror::Error;

/// Reasons a search index resource could not be used
#[derive(Debug, Error)]
pub enum IndexLoadError {
    #[error("failed to read search index {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse search index: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid entry under token {token:?}: {book:?} {chapter}:{verse}")]
    InvalidEntry {
        token: String,
        book: String,
        chapter: u32,
        verse: u32,
    },
}

/// Immutable token -> verse postings map.
///
/// Keys are lowercase, punctuation-free words. Built once and only read
/// afterwards; share it by reference.
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    postings: FxHashMap<String, Vec<IndexEntry>>,
}

impl SearchIndex {
    pub fn new(postings: FxHashMap<String, Vec<IndexEntry>>) -> Self {
        Self { postings }
    }

    /// Empty index; every search against it yields nothing
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build an index from literal data
    pub fn from_entries<'a, I, T, E>(entries: I) -> Self
    where
        I: IntoIterator<Item = (T, E)>,
        T: Into<String>,
        E: IntoIterator<Item = (&'a str, u32, u32)>,
    {
        let postings = entries
            .into_iter()
            .map(|(token, locs)| {
                (
                    token.into(),
                    locs.into_iter().map(IndexEntry::from).collect(),
                )
            })
            .collect();
        Self { postings }
    }

    /// Strictly decode a JSON index; any malformed entry rejects the whole resource
    pub fn from_json_str(json: &str) -> Result<Self, IndexLoadError> {
        let postings: FxHashMap<String, Vec<IndexEntry>> = serde_json::from_str(json)?;
        Self::validated(postings)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, IndexLoadError> {
        let postings: FxHashMap<String, Vec<IndexEntry>> = serde_json::from_reader(reader)?;
        Self::validated(postings)
    }

    /// Open a JSON index file
    pub fn open(path: &Path) -> Result<Self, IndexLoadError> {
        let file = File::open(path).map_err(|source| IndexLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file))
    }

    fn validated(postings: FxHashMap<String, Vec<IndexEntry>>) -> Result<Self, IndexLoadError> {
        for (token, entries) in &postings {
            if let Some(bad) = entries.iter().find(|e| !e.is_valid()) {
                return Err(IndexLoadError::InvalidEntry {
                    token: token.clone(),
                    book: bad.book.clone(),
                    chapter: bad.chapter,
                    verse: bad.verse,
                });
            }
        }
        Ok(Self { postings })
    }

    /// Postings for a token, if the token is indexed
    pub fn lookup(&self, token: &str) -> Option<&[IndexEntry]> {
        self.postings.get(token).map(Vec::as_slice)
    }

    pub fn tokens(&self) -> impl Iterator<Item = (&str, &[IndexEntry])> {
        self.postings
            .iter()
            .map(|(token, entries)| (token.as_str(), entries.as_slice()))
    }

    /// Number of distinct tokens
    pub fn token_count(&self) -> usize {
        self.postings.len()
    }

    /// Total postings across all tokens
    pub fn entry_count(&self) -> usize {
        self.postings.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }
}

/// Load an index, degrading to an empty one if the resource is missing or malformed.
///
/// The failure is logged once here; callers only ever see an index.
pub fn load(path: &Path) -> SearchIndex {
    match SearchIndex::open(path) {
        Ok(index) => {
            tracing::info!(
                "Loaded search index {} ({} tokens)",
                path.display(),
                index.token_count()
            );
            index
        }
        Err(e) => {
            tracing::warn!("Search index unavailable, searches will return nothing: {}", e);
            SearchIndex::empty()
        }
    }
}

/// Search index loaded lazily, at most once, on first use.
///
/// Safe to share between threads: concurrent first calls block until the
/// single load completes. Each holder is independent of every other.
#[derive(Debug)]
pub struct SharedIndex {
    path: PathBuf,
    index: OnceLock<SearchIndex>,
}

impl SharedIndex {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            index: OnceLock::new(),
        }
    }

    /// Holder that is already populated (no file access)
    pub fn preloaded(index: SearchIndex) -> Self {
        Self {
            path: PathBuf::new(),
            index: OnceLock::from(index),
        }
    }

    /// The index, loading it on the first call
    pub fn get(&self) -> &SearchIndex {
        self.index.get_or_init(|| load(&self.path))
    }

    pub fn is_loaded(&self) -> bool {
        self.index.get().is_some()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
