pub mod build;
pub mod reader;
pub mod stats;
pub mod types;
pub mod writer;

pub use reader::{IndexLoadError, SearchIndex, SharedIndex, load};
pub use types::*;
pub use writer::write_index;
