//! Pictogram types - the atomic content unit and the path used to reach it
//!
//! A pictogram is a labeled image with a sound. Pictograms form a hierarchy
//! rooted at [`ROOT_ID`]; a [`BreadcrumbPath`] records the identifiers
//! walked from the root down to the pictogram currently on screen.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of the root pictogram (also the home button image)
pub const ROOT_ID: &str = "picto_connection";

/// A pictogram row as stored in the `pictograms` table.
///
/// The `(id, locale)` pair is unique. An empty `locale` marks the default
/// variant used when no row matches the requested locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PictogramRecord {
    /// Identifier shared by every locale variant
    pub id: String,
    /// Locale code ("es", "en", ...) or empty for the default variant
    pub locale: String,
    /// Display name
    pub name: String,
    /// Image file name
    pub image: String,
    /// Sound file name
    pub sound: String,
    /// Thumbnail file name, when the pictogram has one
    pub thumb: Option<String>,
}

impl PictogramRecord {
    /// Create a record with no thumbnail
    pub fn new(
        id: impl Into<String>,
        locale: impl Into<String>,
        name: impl Into<String>,
        image: impl Into<String>,
        sound: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            locale: locale.into(),
            name: name.into(),
            image: image.into(),
            sound: sound.into(),
            thumb: None,
        }
    }

    /// Attach a thumbnail file name
    pub fn with_thumb(mut self, thumb: impl Into<String>) -> Self {
        self.thumb = Some(thumb.into());
        self
    }

    /// Whether this is the default (locale-less) variant
    pub fn is_default_locale(&self) -> bool {
        self.locale.is_empty()
    }
}

/// Ordered identifiers from the root to the current pictogram.
///
/// Never empty: the root entry cannot be popped or truncated away, and an
/// empty list does not deserialize. Serialized as a plain list of ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct BreadcrumbPath {
    ids: Vec<String>,
}

impl BreadcrumbPath {
    /// A path holding only [`ROOT_ID`]
    pub fn root() -> Self {
        Self::starting_at(ROOT_ID)
    }

    /// A path holding only `root`
    pub fn starting_at(root: impl Into<String>) -> Self {
        Self { ids: vec![root.into()] }
    }

    /// Build a path from identifiers, or `None` when there are none
    pub fn from_ids<I, S>(ids: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let ids: Vec<String> = ids.into_iter().map(Into::into).collect();
        if ids.is_empty() { None } else { Some(Self { ids }) }
    }

    /// Drill down into `id`
    pub fn push(&mut self, id: impl Into<String>) {
        self.ids.push(id.into());
    }

    /// Go one level up. Returns the removed identifier, or `None` at the root.
    pub fn pop(&mut self) -> Option<String> {
        if self.ids.len() > 1 { self.ids.pop() } else { None }
    }

    /// Keep only the first `depth` entries (at least the root)
    pub fn truncate(&mut self, depth: usize) {
        self.ids.truncate(depth.max(1));
    }

    /// Replace the current (last) entry, used when swiping between siblings
    pub fn replace_current(&mut self, id: impl Into<String>) {
        let last = self.ids.len() - 1;
        self.ids[last] = id.into();
    }

    /// Identifier of the pictogram on screen
    pub fn current(&self) -> &str {
        &self.ids[self.ids.len() - 1]
    }

    /// Identifier one level above the current one
    pub fn parent(&self) -> Option<&str> {
        if self.ids.len() > 1 {
            Some(self.ids[self.ids.len() - 2].as_str())
        } else {
            None
        }
    }

    /// Number of entries, including the root
    pub fn depth(&self) -> usize {
        self.ids.len()
    }

    pub fn is_root(&self) -> bool {
        self.ids.len() == 1
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }
}

impl Default for BreadcrumbPath {
    fn default() -> Self {
        Self::root()
    }
}

impl TryFrom<Vec<String>> for BreadcrumbPath {
    type Error = &'static str;

    fn try_from(ids: Vec<String>) -> std::result::Result<Self, Self::Error> {
        Self::from_ids(ids).ok_or("a breadcrumb path needs at least the root")
    }
}

impl From<BreadcrumbPath> for Vec<String> {
    fn from(path: BreadcrumbPath) -> Self {
        path.ids
    }
}

impl fmt::Display for BreadcrumbPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ids.join(" > "))
    }
}
