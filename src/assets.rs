//! Asset lookup across search directories
//!
//! Pictogram rows store bare file names. The files live in one of several
//! directories (images, sounds, thumbnails), searched in order.

use std::path::{Path, PathBuf};

use crate::pictogram::PictogramRecord;

/// Directories searched when none are configured
pub const DEFAULT_ASSET_DIRS: &[&str] = &["images", "sounds", "thumbs"];

#[derive(Debug, Clone)]
pub struct AssetResolver {
    search_paths: Vec<PathBuf>,
}

impl AssetResolver {
    pub fn new<I, P>(search_paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            search_paths: search_paths.into_iter().map(Into::into).collect(),
        }
    }

    /// Resolver for `DEFAULT_ASSET_DIRS` under `base`
    pub fn with_defaults(base: &Path) -> Self {
        Self::new(DEFAULT_ASSET_DIRS.iter().map(|dir| base.join(dir)))
    }

    /// First existing file called `name`, or `name` unchanged if none exists
    pub fn resolve(&self, name: &str) -> PathBuf {
        self.search_paths
            .iter()
            .map(|dir| dir.join(name))
            .find(|candidate| candidate.is_file())
            .unwrap_or_else(|| {
                tracing::debug!("Asset {} not found in search paths", name);
                PathBuf::from(name)
            })
    }

    /// Resolved image, sound and thumbnail paths of a record
    pub fn resolve_record(&self, record: &PictogramRecord) -> ResolvedAssets {
        ResolvedAssets {
            image: self.resolve(&record.image),
            sound: self.resolve(&record.sound),
            thumb: record.thumb.as_deref().map(|t| self.resolve(t)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ResolvedAssets {
    pub image: PathBuf,
    pub sound: PathBuf,
    pub thumb: Option<PathBuf>,
}
