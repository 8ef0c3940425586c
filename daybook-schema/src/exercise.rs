use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExerciseEntryCreate {
    pub date: NaiveDate,
    pub title: String,
    /// Minutes.
    pub duration: i64,
    pub intensity: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ExerciseEntry {
    pub id: i64,
    pub date: NaiveDate,
    pub title: String,
    pub duration: i64,
    pub intensity: Option<String>,
    pub notes: Option<String>,
}
