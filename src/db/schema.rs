//! SQL DDL for initializing the database schema.
//! SQLite-first design; can be adapted for other RDBMS.

/// SQLite schema: one lookup table per catalog resource.
///
/// `AUTOINCREMENT` keeps ids monotonic and prevents reuse after the highest
/// row is deleted.
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS food_group (
    id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
    name TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS food_moment (
    id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
    name TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS macronutrient_group (
    id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
    name TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS micronutrient_group (
    id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
    name TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS special_condition (
    id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
    name TEXT NOT NULL UNIQUE
);
"#;
