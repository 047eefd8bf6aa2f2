//! Bible text model, canonical book order, and the verse store.
//!
//! - [`canon`] - The 66 book names in canonical order
//! - [`models`] - Verse/chapter/book containers and [`BibleReference`]
//! - [`store`] - In-memory [`BibleStore`] and the [`VerseLookup`] capability

pub mod canon;
pub mod models;
pub mod store;

pub use canon::{BOOK_NAMES, canonical_form, is_book_name, rank, sort_rank};
pub use models::*;
pub use store::{BibleStore, VerseLookup};
