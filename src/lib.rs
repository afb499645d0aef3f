//! # PictoConnection - pictogram communication board core
//!
//! Users browse a hierarchy of pictograms (images with sounds), drilling
//! down through grids of children until they reach a single pictogram.
//!
//! This crate provides:
//! - SQLite-backed storage of pictograms and parent/child relationships
//! - Locale-aware pictogram resolution
//! - Grid partition and breadcrumb layout for the screens
//! - Navigation as explicit command values
//! - Color themes and user settings

pub mod pictogram;
pub mod storage;
pub mod repository;
pub mod layout;
pub mod navigation;
pub mod plan;
pub mod palette;
pub mod label;
pub mod assets;
pub mod config;
pub mod ui;

// Re-exports for convenient access
pub use pictogram::{BreadcrumbPath, PictogramRecord, ROOT_ID};
pub use repository::PictogramRepository;
pub use storage::PictogramStore;
pub use navigation::{NavCommand, Navigator, Screen};

/// Result type alias for PictoConnection operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for PictoConnection operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database not found: {}", .0.display())]
    DatabaseNotFound(std::path::PathBuf),

    #[error("Database snapshot unavailable: {0}")]
    Snapshot(String),

    #[error("Pictogram not found: {0}")]
    PictogramNotFound(String),

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Unknown theme: {0}")]
    UnknownTheme(u32),
}
