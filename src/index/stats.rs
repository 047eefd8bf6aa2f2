use crate::bible::canon::sort_rank;
use crate::index::reader::SearchIndex;
use crate::index::types::VerseLocation;
use anyhow::Result;
use std::collections::HashSet;
use std::path::Path;

/// Number of most frequent tokens reported
const TOP_TOKENS: usize = 10;

/// Summary numbers for a loaded index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexStats {
    pub tokens: usize,
    pub entries: usize,
    pub distinct_verses: usize,
    pub books: Vec<String>,
    /// Most frequent tokens with their posting counts, most frequent first
    pub top_tokens: Vec<(String, usize)>,
}

impl IndexStats {
    pub fn from_index(index: &SearchIndex) -> Self {
        let mut verses: HashSet<VerseLocation> = HashSet::new();
        let mut books: HashSet<&str> = HashSet::new();
        let mut counts: Vec<(String, usize)> = Vec::with_capacity(index.token_count());

        for (token, entries) in index.tokens() {
            counts.push((token.to_string(), entries.len()));
            for entry in entries {
                books.insert(entry.book.as_str());
                verses.insert(entry.location());
            }
        }

        // Ties broken alphabetically so the report is stable
        counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        counts.truncate(TOP_TOKENS);

        let mut books: Vec<String> = books.into_iter().map(str::to_string).collect();
        books.sort_by(|a, b| sort_rank(a).cmp(&sort_rank(b)).then_with(|| a.cmp(b)));

        Self {
            tokens: index.token_count(),
            entries: index.entry_count(),
            distinct_verses: verses.len(),
            books,
            top_tokens: counts,
        }
    }
}

/// Display index statistics
pub fn show_stats(index_path: &Path) -> Result<()> {
    let index = SearchIndex::open(index_path)?;
    let stats = IndexStats::from_index(&index);

    println!("Index Statistics");
    println!("================");
    println!();
    println!("Index location:   {}", index_path.display());
    println!("Unique words:     {}", stats.tokens);
    println!("Postings:         {}", stats.entries);
    println!("Verses covered:   {}", stats.distinct_verses);
    println!("Books covered:    {}", stats.books.len());

    if let Ok(meta) = std::fs::metadata(index_path) {
        println!("Index size:       {}", format_size(meta.len()));
    }

    println!();
    println!("Most frequent words:");
    for (token, count) in &stats.top_tokens {
        println!("  {:15} {}", token, count);
    }

    Ok(())
}

/// Format byte size to human readable
fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}
