//! Performance benchmarks for VXI
//!
//! Run with: cargo bench

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use vxi::bible::{Bible, BibleStore, Book, Chapter, Verse, canon::BOOK_NAMES};
use vxi::index::build::build_index;
use vxi::query::{SearchEngine, parse_reference, parse_search_query};

const WORDS: &[&str] = &[
    "lord", "god", "love", "faith", "grace", "peace", "light", "word", "spirit", "heaven",
    "earth", "king", "people", "servant", "mercy", "truth", "life", "death", "water", "bread",
];

/// Synthetic Bible roughly the size of the real one (66 books, ~31k verses)
fn synthetic_bible() -> Bible {
    let mut seed: u32 = 17;
    let mut next = move || {
        seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        (seed >> 16) as usize
    };

    let books = BOOK_NAMES
        .iter()
        .map(|name| Book {
            name: name.to_string(),
            chapters: (1..=20)
                .map(|c| Chapter {
                    number: c,
                    verses: (1..=24)
                        .map(|v| Verse {
                            number: v,
                            text: (0..12)
                                .map(|_| WORDS[next() % WORDS.len()])
                                .collect::<Vec<_>>()
                                .join(" "),
                        })
                        .collect(),
                })
                .collect(),
        })
        .collect();

    Bible { books }
}

fn bench_query_parsing(c: &mut Criterion) {
    let queries = vec!["love", "faith hope love", "1 John: love", "love: god", "   "];

    let mut group = c.benchmark_group("query_parsing");
    for query in queries {
        group.bench_with_input(BenchmarkId::from_parameter(query), &query, |b, &q| {
            b.iter(|| parse_search_query(black_box(q)))
        });
    }
    group.finish();
}

fn bench_reference_parsing(c: &mut Criterion) {
    let inputs = vec!["John 3:16", "1 Corinthians 13:4-7", "Song of Solomon 2:1", "not a reference"];

    let mut group = c.benchmark_group("reference_parsing");
    for input in inputs {
        group.bench_with_input(BenchmarkId::from_parameter(input), &input, |b, &s| {
            b.iter(|| parse_reference(black_box(s)))
        });
    }
    group.finish();
}

fn bench_index_build(c: &mut Criterion) {
    let bible = synthetic_bible();
    c.bench_function("index_build", |b| b.iter(|| build_index(black_box(&bible))));
}

fn bench_search(c: &mut Criterion) {
    let bible = synthetic_bible();
    let index = build_index(&bible);
    let store = BibleStore::new(bible);
    let engine = SearchEngine::new(&index);

    let mut group = c.benchmark_group("search");

    group.bench_function("single_word", |b| {
        b.iter(|| engine.search(black_box("love"), &store, 50))
    });

    group.bench_function("three_words", |b| {
        b.iter(|| engine.search(black_box("love grace truth"), &store, 50))
    });

    group.bench_function("scoped", |b| {
        b.iter(|| engine.search(black_box("Psalms: mercy"), &store, 50))
    });

    group.bench_function("locate_unlimited", |b| {
        b.iter(|| engine.locate(black_box("lord"), usize::MAX))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_query_parsing,
    bench_reference_parsing,
    bench_index_build,
    bench_search,
);

criterion_main!(benches);
