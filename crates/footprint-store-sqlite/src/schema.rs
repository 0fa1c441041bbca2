//! SQL schema for the footprint SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS users (
    user_id       TEXT PRIMARY KEY,
    name          TEXT NOT NULL,
    email         TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL,   -- argon2 PHC string
    created_at    TEXT NOT NULL
);

-- Calculations are strictly append-only.
-- No UPDATE or DELETE is ever issued against this table.
CREATE TABLE IF NOT EXISTS calculations (
    calculation_id   TEXT PRIMARY KEY,
    user_id          TEXT NOT NULL REFERENCES users(user_id),
    transport_mode   TEXT NOT NULL,
    weekly_distance  REAL NOT NULL,
    electricity_bill REAL NOT NULL,
    diet_type        TEXT NOT NULL,
    home_size        TEXT NOT NULL,
    flights_per_year INTEGER NOT NULL,
    recycling_habits TEXT NOT NULL,
    trees_planted    INTEGER NOT NULL,
    total_score      REAL NOT NULL,
    category         TEXT NOT NULL,   -- 'good' | 'bad'
    tip              TEXT NOT NULL,
    created_at       TEXT NOT NULL    -- RFC 3339 UTC, fixed width; server-assigned
);

CREATE TABLE IF NOT EXISTS contacts (
    contact_id TEXT PRIMARY KEY,
    name       TEXT NOT NULL,
    email      TEXT NOT NULL,
    subject    TEXT NOT NULL,
    message    TEXT NOT NULL,
    created_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS calculations_user_created_idx
    ON calculations(user_id, created_at);

PRAGMA user_version = 1;
";
