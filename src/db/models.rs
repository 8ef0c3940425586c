use chrono::{DateTime, NaiveDate, Utc};
use daybook_schema::{ExerciseEntry, Goal, SleepEntry, Todo, WellnessEntry};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// The five independent tables, used where an operation is shape-agnostic (delete by id).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Todo,
    Sleep,
    Wellness,
    Exercise,
    Goal,
}

impl EntityKind {
    pub const fn table(self) -> &'static str {
        match self {
            EntityKind::Todo => "todo_items",
            EntityKind::Sleep => "sleep_entries",
            EntityKind::Wellness => "wellness_entries",
            EntityKind::Exercise => "exercise_entries",
            EntityKind::Goal => "goals",
        }
    }

    /// Human-readable name used in not-found and delete messages.
    pub const fn label(self) -> &'static str {
        match self {
            EntityKind::Todo => "Todo",
            EntityKind::Sleep => "Sleep entry",
            EntityKind::Wellness => "Wellness entry",
            EntityKind::Exercise => "Exercise entry",
            EntityKind::Goal => "Goal",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct DbTodoItem {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub completed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct DbSleepEntry {
    pub id: i64,
    pub date: NaiveDate,
    pub hours: f64,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct DbWellnessEntry {
    pub id: i64,
    pub date: NaiveDate,
    pub mood: i64,
    pub energy: i64,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct DbExerciseEntry {
    pub id: i64,
    pub date: NaiveDate,
    pub title: String,
    pub duration: i64,
    pub intensity: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct DbGoal {
    pub id: i64,
    pub text: String,
    pub done: bool,
    pub created_at: DateTime<Utc>,
}

impl From<DbTodoItem> for Todo {
    fn from(row: DbTodoItem) -> Self {
        Self {
            id: row.id,
            title: row.title,
            description: row.description,
            category: row.category,
            completed: row.completed,
        }
    }
}

impl From<DbSleepEntry> for SleepEntry {
    fn from(row: DbSleepEntry) -> Self {
        Self {
            id: row.id,
            date: row.date,
            hours: row.hours,
            notes: row.notes,
        }
    }
}

impl From<DbWellnessEntry> for WellnessEntry {
    fn from(row: DbWellnessEntry) -> Self {
        Self {
            id: row.id,
            date: row.date,
            mood: row.mood,
            energy: row.energy,
            notes: row.notes,
        }
    }
}

impl From<DbExerciseEntry> for ExerciseEntry {
    fn from(row: DbExerciseEntry) -> Self {
        Self {
            id: row.id,
            date: row.date,
            title: row.title,
            duration: row.duration,
            intensity: row.intensity,
            notes: row.notes,
        }
    }
}

impl From<DbGoal> for Goal {
    fn from(row: DbGoal) -> Self {
        Self {
            id: row.id,
            text: row.text,
            done: row.done,
            created_at: row.created_at,
        }
    }
}
