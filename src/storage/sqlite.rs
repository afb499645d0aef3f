//! SQLite storage implementation

use std::path::{Path, PathBuf};
use rusqlite::{Connection, OpenFlags, params};
use crate::{Result, Error};
use crate::pictogram::PictogramRecord;
use super::schema;

/// File name of the database, both bundled and installed
pub const DATABASE_FILE_NAME: &str = "picto_connection.db";

/// SQLite-backed storage for pictograms and their relationships
pub struct PictogramStore {
    conn: Connection,
}

impl PictogramStore {
    /// Copy the bundled database into `writable_dir` and return the new path.
    ///
    /// With `overwrite` set, an existing copy is removed first so every
    /// launch starts from the bundled snapshot.
    pub fn install_snapshot(bundled: &Path, writable_dir: &Path, overwrite: bool) -> Result<PathBuf> {
        let target = writable_dir.join(DATABASE_FILE_NAME);
        tracing::debug!("Database path: {}", target.display());

        if overwrite && target.exists() {
            std::fs::remove_file(&target)?;
        }

        if !target.exists() {
            tracing::info!("Copying database from {}", bundled.display());
            let data = std::fs::read(bundled).map_err(|e| {
                Error::Snapshot(format!("cannot read {}: {}", bundled.display(), e))
            })?;
            if data.is_empty() {
                return Err(Error::Snapshot(format!("{} is empty", bundled.display())));
            }
            std::fs::create_dir_all(writable_dir)?;
            std::fs::write(&target, data)?;
        }

        Ok(target)
    }

    /// Open an existing database file.
    ///
    /// A missing file is an error; the store never creates an empty database
    /// in its place.
    pub fn open(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::DatabaseNotFound(path.to_path_buf()));
        }
        let flags = OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_URI | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        let conn = Connection::open_with_flags(path, flags)?;
        let store = Self { conn };
        store.initialize_schema()?;
        tracing::info!("Database opened: {}", path.display());
        Ok(store)
    }

    /// Create (or reuse) a database file and its tables, e.g. to seed a
    /// bundled snapshot
    pub fn create(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize_schema()?;
        tracing::info!("Database created: {}", path.display());
        Ok(store)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Close the connection, reporting any error SQLite returns
    pub fn close(self) -> Result<()> {
        tracing::info!("Closing database");
        self.conn.close().map_err(|(_, e)| e.into())
    }

    /// Initialize the database schema
    fn initialize_schema(&self) -> Result<()> {
        for stmt in schema::all_schema_statements() {
            self.conn.execute(stmt, [])?;
        }
        Ok(())
    }

    // ========== Pictogram Operations ==========

    /// Insert or replace a pictogram variant
    pub fn insert_pictogram(&self, record: &PictogramRecord) -> Result<()> {
        self.conn.execute(
            r#"
            INSERT OR REPLACE INTO pictograms (id, locale, name, image, sound, thumb)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
            params![
                record.id,
                record.locale,
                record.name,
                record.image,
                record.sound,
                record.thumb,
            ],
        )?;
        Ok(())
    }

    /// All locale variants of a pictogram, in storage order.
    ///
    /// Rows missing a required column are skipped.
    pub fn pictogram_rows(&self, id: &str) -> Result<Vec<PictogramRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, locale, name, image, sound, thumb FROM pictograms WHERE id = ?1 ORDER BY rowid"
        )?;

        let rows = stmt
            .query_map([id], row_to_pictogram)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(rows.into_iter().flatten().collect())
    }

    /// Count all pictogram identifiers (not variants)
    pub fn count_pictograms(&self) -> Result<usize> {
        let count: i64 = self.conn.query_row("SELECT COUNT(DISTINCT id) FROM pictograms", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Distinct non-default locales present in the database
    pub fn locales(&self) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare(
            "SELECT DISTINCT locale FROM pictograms WHERE locale != '' ORDER BY locale"
        )?;
        let locales = stmt
            .query_map([], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<String>>>()?;
        Ok(locales)
    }

    // ========== Relationship Operations ==========

    /// Append `child` to the children of `parent`
    pub fn insert_relationship(&self, parent: &str, child: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO relationships (parent, child) VALUES (?1, ?2)",
            params![parent, child],
        )?;
        Ok(())
    }

    /// Child identifiers of `parent`, in insertion order
    pub fn child_ids(&self, parent: &str) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare(
            "SELECT child FROM relationships WHERE parent = ?1 ORDER BY rowid"
        )?;

        let ids = stmt
            .query_map([parent], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<String>>>()?;

        Ok(ids)
    }

    /// Number of relationship rows for `parent`
    pub fn count_children(&self, parent: &str) -> Result<usize> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM relationships WHERE parent = ?1",
            [parent],
            |row| row.get(0),
        )?;
        Ok(count as usize)
    }

    /// Count all relationship rows
    pub fn count_relationships(&self) -> Result<usize> {
        let count: i64 = self.conn.query_row("SELECT COUNT(*) FROM relationships", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Get database statistics
    pub fn stats(&self) -> Result<StoreStats> {
        Ok(StoreStats {
            pictograms: self.count_pictograms()?,
            relationships: self.count_relationships()?,
            locales: self.locales()?,
        })
    }
}

/// Convert a row to a record, or `None` when a required column is NULL
fn row_to_pictogram(row: &rusqlite::Row) -> rusqlite::Result<Option<PictogramRecord>> {
    let id: Option<String> = row.get(0)?;
    let locale: Option<String> = row.get(1)?;
    let name: Option<String> = row.get(2)?;
    let image: Option<String> = row.get(3)?;
    let sound: Option<String> = row.get(4)?;
    let thumb: Option<String> = row.get(5)?;

    match (id, locale, name, image, sound) {
        (Some(id), Some(locale), Some(name), Some(image), Some(sound)) => Ok(Some(PictogramRecord {
            id,
            locale,
            name,
            image,
            sound,
            thumb,
        })),
        (id, locale, name, image, sound) => {
            tracing::warn!(
                "Skipping incomplete pictogram row [id={:?}, locale={:?}, name={:?}, image={:?}, sound={:?}]",
                id, locale, name, image, sound
            );
            Ok(None)
        }
    }
}

/// Database statistics
#[derive(Debug, Clone, serde::Serialize)]
pub struct StoreStats {
    pub pictograms: usize,
    pub relationships: usize,
    pub locales: Vec<String>,
}

impl std::fmt::Display for StoreStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Database Statistics:")?;
        writeln!(f, "  Pictograms: {}", self.pictograms)?;
        writeln!(f, "  Relationships: {}", self.relationships)?;
        writeln!(f, "  Locales: {}", self.locales.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: &str, locale: &str) -> PictogramRecord {
        PictogramRecord::new(id, locale, format!("{id}-{locale}"), format!("{id}.png"), format!("{id}.mp3"))
    }

    #[test]
    fn test_pictogram_rows() {
        let store = PictogramStore::open_in_memory().unwrap();

        store.insert_pictogram(&sample("dog", "")).unwrap();
        store.insert_pictogram(&sample("dog", "es").with_thumb("dog_thumb.png")).unwrap();
        store.insert_pictogram(&sample("cat", "")).unwrap();

        let rows = store.pictogram_rows("dog").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].locale, "");
        assert_eq!(rows[1].thumb.as_deref(), Some("dog_thumb.png"));
        assert!(store.pictogram_rows("cow").unwrap().is_empty());
    }

    #[test]
    fn test_quoted_identifier_is_data() {
        let store = PictogramStore::open_in_memory().unwrap();
        store.insert_pictogram(&sample("it's", "")).unwrap();

        let rows = store.pictogram_rows("it's").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(store.count_children("x' OR '1'='1").unwrap(), 0);
    }

    #[test]
    fn test_incomplete_rows_skipped() {
        let store = PictogramStore::open_in_memory().unwrap();
        store.conn.execute(
            "INSERT INTO pictograms (id, locale, name, image, sound) VALUES ('ghost', '', NULL, 'g.png', 'g.mp3')",
            [],
        ).unwrap();
        store.insert_pictogram(&sample("ghost", "es")).unwrap();

        let rows = store.pictogram_rows("ghost").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].locale, "es");
    }

    #[test]
    fn test_child_ids_keep_insertion_order() {
        let store = PictogramStore::open_in_memory().unwrap();
        for child in ["zebra", "apple", "mango"] {
            store.insert_relationship("root", child).unwrap();
        }
        store.insert_relationship("other", "kiwi").unwrap();

        assert_eq!(store.child_ids("root").unwrap(), vec!["zebra", "apple", "mango"]);
        assert_eq!(store.count_children("root").unwrap(), 3);
        assert_eq!(store.count_children("leaf").unwrap(), 0);
    }

    #[test]
    fn test_stats() {
        let store = PictogramStore::open_in_memory().unwrap();
        store.insert_pictogram(&sample("dog", "")).unwrap();
        store.insert_pictogram(&sample("dog", "es")).unwrap();
        store.insert_pictogram(&sample("cat", "en")).unwrap();
        store.insert_relationship("root", "dog").unwrap();

        let stats = store.stats().unwrap();
        assert_eq!(stats.pictograms, 2);
        assert_eq!(stats.relationships, 1);
        assert_eq!(stats.locales, vec!["en", "es"]);
    }

    #[test]
    fn test_install_snapshot_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let bundled_dir = dir.path().join("bundle");
        let writable = dir.path().join("data");

        std::fs::create_dir_all(&bundled_dir).unwrap();
        let bundled = bundled_dir.join(DATABASE_FILE_NAME);
        {
            let store = PictogramStore::create(&bundled).unwrap();
            store.insert_pictogram(&sample("dog", "")).unwrap();
            store.close().unwrap();
        }

        let installed = PictogramStore::install_snapshot(&bundled, &writable, true).unwrap();
        {
            let store = PictogramStore::open(&installed).unwrap();
            store.insert_pictogram(&sample("cat", "")).unwrap();
            assert_eq!(store.count_pictograms().unwrap(), 2);
            store.close().unwrap();
        }

        // Without overwrite the modified copy survives
        let kept = PictogramStore::install_snapshot(&bundled, &writable, false).unwrap();
        assert_eq!(PictogramStore::open(&kept).unwrap().count_pictograms().unwrap(), 2);

        // With overwrite the bundled snapshot wins again
        let fresh = PictogramStore::install_snapshot(&bundled, &writable, true).unwrap();
        assert_eq!(PictogramStore::open(&fresh).unwrap().count_pictograms().unwrap(), 1);
    }

    #[test]
    fn test_open_missing_file_fails_without_creating_it() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("no_such.db");

        let result = PictogramStore::open(&missing);
        assert!(matches!(result, Err(Error::DatabaseNotFound(ref p)) if p == &missing));
        assert!(!missing.exists());
    }

    #[test]
    fn test_open_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DATABASE_FILE_NAME);
        {
            let store = PictogramStore::create(&path).unwrap();
            store.insert_relationship("root", "dog").unwrap();
            store.close().unwrap();
        }

        let store = PictogramStore::open(&path).unwrap();
        assert_eq!(store.child_ids("root").unwrap(), vec!["dog"]);
    }

    #[test]
    fn test_install_snapshot_rejects_missing_or_empty() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.db");
        assert!(matches!(
            PictogramStore::install_snapshot(&missing, dir.path(), true),
            Err(Error::Snapshot(_))
        ));

        let empty = dir.path().join("empty.db");
        std::fs::write(&empty, b"").unwrap();
        let writable = dir.path().join("data");
        assert!(matches!(
            PictogramStore::install_snapshot(&empty, &writable, true),
            Err(Error::Snapshot(_))
        ));
    }
}
