/// Number of books in the canon
pub const BOOK_COUNT: usize = 66;

/// Book names in traditional Protestant order.
/// Position in this list is the sort rank used for search results.
pub const BOOK_NAMES: [&str; BOOK_COUNT] = [
    "Genesis",
    "Exodus",
    "Leviticus",
    "Numbers",
    "Deuteronomy",
    "Joshua",
    "Judges",
    "Ruth",
    "1 Samuel",
    "2 Samuel",
    "1 Kings",
    "2 Kings",
    "1 Chronicles",
    "2 Chronicles",
    "Ezra",
    "Nehemiah",
    "Esther",
    "Job",
    "Psalms",
    "Proverbs",
    "Ecclesiastes",
    "Song of Solomon",
    "Isaiah",
    "Jeremiah",
    "Lamentations",
    "Ezekiel",
    "Daniel",
    "Hosea",
    "Joel",
    "Amos",
    "Obadiah",
    "Jonah",
    "Micah",
    "Nahum",
    "Habakkuk",
    "Zephaniah",
    "Haggai",
    "Zechariah",
    "Malachi",
    "Matthew",
    "Mark",
    "Luke",
    "John",
    "Acts",
    "Romans",
    "1 Corinthians",
    "2 Corinthians",
    "Galatians",
    "Ephesians",
    "Philippians",
    "Colossians",
    "1 Thessalonians",
    "2 Thessalonians",
    "1 Timothy",
    "2 Timothy",
    "Titus",
    "Philemon",
    "Hebrews",
    "James",
    "1 Peter",
    "2 Peter",
    "1 John",
    "2 John",
    "3 John",
    "Jude",
    "Revelation",
];

/// Position of a book in the canon (case-insensitive)
pub fn rank(book: &str) -> Option<usize> {
    BOOK_NAMES
        .iter()
        .position(|name| name.eq_ignore_ascii_case(book))
}

/// Rank used for ordering; unknown books sort after every known one
#[inline]
pub fn sort_rank(book: &str) -> usize {
    rank(book).unwrap_or(usize::MAX)
}

/// Resolve a user-typed name to its canonical spelling (case-insensitive, exact)
pub fn canonical_form(name: &str) -> Option<&'static str> {
    rank(name).map(|i| BOOK_NAMES[i])
}

/// Check whether a string names a book of the canon
pub fn is_book_name(name: &str) -> bool {
    canonical_form(name).is_some()
}
