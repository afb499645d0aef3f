//! Pictogram Repository - locale resolution on top of the store
//!
//! Query failures here are data problems, not programmer errors: they are
//! logged and the caller sees an empty result. Opening the store is the
//! only fallible step callers must handle.

use crate::pictogram::{BreadcrumbPath, PictogramRecord};
use crate::storage::PictogramStore;
use crate::{Error, Result};

/// Read access to the pictogram hierarchy for one store handle
pub struct PictogramRepository {
    store: PictogramStore,
}

impl PictogramRepository {
    pub fn new(store: PictogramStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &PictogramStore {
        &self.store
    }

    /// Give the store back, e.g. to close it
    pub fn into_store(self) -> PictogramStore {
        self.store
    }

    /// Resolve `id` for `locale`.
    ///
    /// Preference order: exact locale, then the default (empty) locale, then
    /// the only row if there is exactly one. Several foreign-locale rows with
    /// no default resolve to `None` rather than to whichever comes first.
    pub fn get_pictogram(&self, id: &str, locale: &str) -> Option<PictogramRecord> {
        let rows = match self.store.pictogram_rows(id) {
            Ok(rows) => rows,
            Err(e) => {
                tracing::error!("SQL error resolving pictogram {}: {}", id, e);
                return None;
            }
        };

        resolve_locale(rows, locale)
    }

    /// Like [`Self::get_pictogram`], for callers that cannot do without the record
    pub fn require_pictogram(&self, id: &str, locale: &str) -> Result<PictogramRecord> {
        self.get_pictogram(id, locale)
            .ok_or_else(|| Error::PictogramNotFound(id.to_string()))
    }

    /// Children of `id` in relationship order; unresolvable ones are skipped
    pub fn get_children(&self, id: &str, locale: &str) -> Vec<PictogramRecord> {
        let ids = match self.store.child_ids(id) {
            Ok(ids) => ids,
            Err(e) => {
                tracing::error!("SQL error listing children of {}: {}", id, e);
                return Vec::new();
            }
        };

        ids.iter()
            .filter_map(|child| {
                let record = self.get_pictogram(child, locale);
                if record.is_none() {
                    tracing::debug!("Child {} of {} has no pictogram for locale {:?}", child, id, locale);
                }
                record
            })
            .collect()
    }

    /// Number of relationship rows for `id`; 0 means a leaf
    pub fn count_children(&self, id: &str) -> usize {
        self.store.count_children(id).unwrap_or_else(|e| {
            tracing::error!("SQL error counting children of {}: {}", id, e);
            0
        })
    }

    /// Whether `id` can be drilled into
    pub fn has_children(&self, id: &str) -> bool {
        self.count_children(id) > 0
    }

    /// The current pictogram's siblings (children of its parent), itself included
    pub fn siblings(&self, path: &BreadcrumbPath, locale: &str) -> Vec<PictogramRecord> {
        match path.parent() {
            Some(parent) => self.get_children(parent, locale),
            None => self.get_pictogram(path.current(), locale).into_iter().collect(),
        }
    }
}

fn resolve_locale(rows: Vec<PictogramRecord>, locale: &str) -> Option<PictogramRecord> {
    if let Some(i) = rows.iter().position(|r| r.locale == locale) {
        return rows.into_iter().nth(i);
    }
    if let Some(i) = rows.iter().position(PictogramRecord::is_default_locale) {
        return rows.into_iter().nth(i);
    }
    if rows.len() == 1 {
        return rows.into_iter().next();
    }
    None
}
