//! Storage Layer - SQLite-backed pictogram hierarchy
//!
//! The database ships bundled with the application and is copied to a
//! writable location before being opened. Tables:
//! - pictograms(id, locale, name, image, sound, thumb)
//! - relationships(parent, child)

pub mod schema;
pub mod sqlite;

pub use sqlite::{PictogramStore, StoreStats, DATABASE_FILE_NAME};
