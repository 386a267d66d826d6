//! SQL schema for the Stockroom SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! the `user_version` number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
///
/// `AUTOINCREMENT` keeps deleted ids from being reused.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS items (
    id     INTEGER PRIMARY KEY AUTOINCREMENT,
    name   TEXT NOT NULL,
    bought INTEGER NOT NULL DEFAULT 0,
    sold   INTEGER NOT NULL DEFAULT 0
);

-- Every list query orders by name.
CREATE INDEX IF NOT EXISTS items_name_idx ON items(name);

PRAGMA user_version = 1;
";
