#![no_main]

use libfuzzer_sys::fuzz_target;
use vxi::bible::BibleStore;
use vxi::index::SearchIndex;
use vxi::query::SearchEngine;

fuzz_target!(|data: &str| {
    let index = SearchIndex::from_entries([
        ("love", vec![("1 John", 4, 8), ("Frodo", 1, 1)]),
        ("god", vec![("1 John", 4, 8), ("Genesis", 1, 1)]),
    ]);
    let store = BibleStore::default();
    let results = SearchEngine::new(&index).search(data, &store, 10);
    assert!(results.len() <= 2);
});
