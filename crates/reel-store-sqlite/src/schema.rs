//! SQL schema for the Reel SQLite store.
//!
//! Executed once at connection startup. `PRAGMA user_version` records the
//! schema revision.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

-- AUTOINCREMENT keeps ids of deleted movies from being handed out again.
CREATE TABLE IF NOT EXISTS movies (
    id     INTEGER PRIMARY KEY AUTOINCREMENT,
    title  TEXT NOT NULL CHECK (length(title) <= 255)
);

CREATE TABLE IF NOT EXISTS opinions (
    id           INTEGER PRIMARY KEY AUTOINCREMENT,
    description  TEXT,
    reviewer     TEXT NOT NULL CHECK (length(reviewer) <= 64),
    score        INTEGER,         -- nullable; range is checked by the service
    movie_id     INTEGER REFERENCES movies(id)
);

CREATE INDEX IF NOT EXISTS opinions_movie_idx ON opinions(movie_id);

PRAGMA user_version = 1;
";
