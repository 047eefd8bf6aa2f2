//! Small Bible and matching search index shared by integration tests

#![allow(dead_code)]

use vxi::bible::{Bible, BibleStore, Book, Chapter, Verse};
use vxi::index::SearchIndex;

fn chapter(number: u32, verses: &[(u32, &str)]) -> Chapter {
    Chapter {
        number,
        verses: verses
            .iter()
            .map(|(n, text)| Verse {
                number: *n,
                text: text.to_string(),
            })
            .collect(),
    }
}

pub fn test_bible() -> Bible {
    Bible {
        books: vec![
            Book {
                name: "Genesis".to_string(),
                chapters: vec![
                    chapter(
                        1,
                        &[
                            (1, "In the beginning, God created the heavens and the earth."),
                            (2, "The earth was without form and void."),
                        ],
                    ),
                    chapter(
                        15,
                        &[(
                            6,
                            "And he believed the LORD, and he counted it to him as righteousness.",
                        )],
                    ),
                ],
            },
            Book {
                name: "Hebrews".to_string(),
                chapters: vec![chapter(
                    11,
                    &[
                        (
                            1,
                            "Now faith is the assurance of things hoped for, the conviction of things not seen.",
                        ),
                        (6, "And without faith it is impossible to please him."),
                    ],
                )],
            },
            Book {
                name: "1 John".to_string(),
                chapters: vec![chapter(
                    4,
                    &[
                        (7, "Beloved, let us love one another, for love is from God."),
                        (8, "Anyone who does not love does not know God, because God is love."),
                        (19, "We love because he first loved us."),
                    ],
                )],
            },
            Book {
                name: "John".to_string(),
                chapters: vec![chapter(
                    3,
                    &[(16, "For God so loved the world, that he gave his only Son.")],
                )],
            },
        ],
    }
}

pub fn test_store() -> BibleStore {
    BibleStore::new(test_bible())
}

/// Hand-written index over [`test_bible`]; "faith" also lists Genesis 15:6
pub fn test_index() -> SearchIndex {
    SearchIndex::from_entries([
        ("beginning", vec![("Genesis", 1, 1)]),
        (
            "god",
            vec![
                ("Genesis", 1, 1),
                ("1 John", 4, 7),
                ("1 John", 4, 8),
                ("John", 3, 16),
            ],
        ),
        ("created", vec![("Genesis", 1, 1)]),
        ("earth", vec![("Genesis", 1, 1), ("Genesis", 1, 2)]),
        ("void", vec![("Genesis", 1, 2)]),
        (
            "faith",
            vec![("Genesis", 15, 6), ("Hebrews", 11, 1), ("Hebrews", 11, 6)],
        ),
        ("believed", vec![("Genesis", 15, 6)]),
        ("righteousness", vec![("Genesis", 15, 6)]),
        ("assurance", vec![("Hebrews", 11, 1)]),
        ("impossible", vec![("Hebrews", 11, 6)]),
        (
            "love",
            vec![("1 John", 4, 7), ("1 John", 4, 8), ("1 John", 4, 19)],
        ),
        ("loved", vec![("1 John", 4, 19), ("John", 3, 16)]),
        ("world", vec![("John", 3, 16)]),
        ("son", vec![("John", 3, 16)]),
    ])
}
