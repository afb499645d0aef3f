//! Database schema definitions

/// SQL to create the pictograms table
pub const CREATE_PICTOGRAMS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS pictograms (
    id TEXT NOT NULL,
    locale TEXT NOT NULL DEFAULT '',
    name TEXT,
    image TEXT,
    sound TEXT,
    thumb TEXT,
    UNIQUE(id, locale)
)
"#;

/// SQL to create the relationships table
/// Row order (rowid) is the display order of a parent's children
pub const CREATE_RELATIONSHIPS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS relationships (
    parent TEXT NOT NULL,
    child TEXT NOT NULL
)
"#;

/// SQL to create indexes
pub const CREATE_INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_pictograms_id ON pictograms(id)",
    "CREATE INDEX IF NOT EXISTS idx_relationships_parent ON relationships(parent)",
];

/// All schema creation statements
pub fn all_schema_statements() -> Vec<&'static str> {
    let mut stmts = vec![CREATE_PICTOGRAMS_TABLE, CREATE_RELATIONSHIPS_TABLE];
    stmts.extend(CREATE_INDEXES.iter().copied());
    stmts
}
