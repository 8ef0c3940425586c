//! SQL DDL for initializing the database schema.
//! Tables are independent: no foreign keys, no cross-table triggers.

/// SQLite schema includes:
/// - `todo_items`
/// - `sleep_entries`, `wellness_entries`, `exercise_entries` (indexed by `date`)
/// - `goals` (indexed by `created_at`)
///
/// `AUTOINCREMENT` keeps ids monotonic and never reused after deletes.
pub const SQLITE_INIT: &str = r#"
-- ---------------------------------------------------------------------------
-- Todo list
-- ---------------------------------------------------------------------------
CREATE TABLE IF NOT EXISTS todo_items (
    id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
    title TEXT NOT NULL,
    description TEXT NULL,
    category TEXT NOT NULL DEFAULT 'today',
    completed INTEGER NOT NULL DEFAULT 0
);

-- ---------------------------------------------------------------------------
-- Sleep log
-- ---------------------------------------------------------------------------
CREATE TABLE IF NOT EXISTS sleep_entries (
    id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
    date TEXT NOT NULL, -- YYYY-MM-DD
    hours REAL NOT NULL,
    notes TEXT NULL
);

CREATE INDEX IF NOT EXISTS idx_sleep_entries_date ON sleep_entries(date);

-- ---------------------------------------------------------------------------
-- Wellness (mood / energy)
-- ---------------------------------------------------------------------------
CREATE TABLE IF NOT EXISTS wellness_entries (
    id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
    date TEXT NOT NULL, -- YYYY-MM-DD
    mood INTEGER NOT NULL,
    energy INTEGER NOT NULL,
    notes TEXT NULL
);

CREATE INDEX IF NOT EXISTS idx_wellness_entries_date ON wellness_entries(date);

-- ---------------------------------------------------------------------------
-- Exercise sessions
-- ---------------------------------------------------------------------------
CREATE TABLE IF NOT EXISTS exercise_entries (
    id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
    date TEXT NOT NULL, -- YYYY-MM-DD
    title TEXT NOT NULL,
    duration INTEGER NOT NULL,
    intensity TEXT NULL,
    notes TEXT NULL
);

CREATE INDEX IF NOT EXISTS idx_exercise_entries_date ON exercise_entries(date);

-- ---------------------------------------------------------------------------
-- Goals
-- ---------------------------------------------------------------------------
CREATE TABLE IF NOT EXISTS goals (
    id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
    text TEXT NOT NULL,
    done INTEGER NOT NULL DEFAULT 0,
    created_at TEXT NOT NULL -- RFC3339, set once at insert
);

CREATE INDEX IF NOT EXISTS idx_goals_created_at ON goals(created_at);
"#;
