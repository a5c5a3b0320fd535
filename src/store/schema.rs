//! Table definitions for the item store.

use super::StoreKind;

/// `items` table on PostgreSQL.
pub const POSTGRES_ITEMS_DDL: &str = r#"
CREATE TABLE IF NOT EXISTS items (
    id          BIGSERIAL PRIMARY KEY,
    name        TEXT NOT NULL,
    description TEXT NOT NULL
)
"#;

/// `items` table on SQLite.
///
/// AUTOINCREMENT keeps ids of deleted rows from being handed out again,
/// matching sequence semantics on PostgreSQL.
pub const SQLITE_ITEMS_DDL: &str = r#"
CREATE TABLE IF NOT EXISTS items (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    name        TEXT NOT NULL,
    description TEXT NOT NULL
)
"#;

pub fn items_ddl(kind: StoreKind) -> &'static str {
    match kind {
        StoreKind::Postgres => POSTGRES_ITEMS_DDL,
        StoreKind::Sqlite => SQLITE_ITEMS_DDL,
    }
}
