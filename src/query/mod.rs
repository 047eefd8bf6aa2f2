pub mod executor;
pub mod parser;
pub mod reference;

pub use executor::{DEFAULT_LIMIT, SearchEngine};
pub use parser::{SearchQuery, parse_search_query};
pub use reference::{parse_reference, resolve_reference};
