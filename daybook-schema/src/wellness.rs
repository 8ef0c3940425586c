use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Mood and energy are free-form integers; no range is enforced.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WellnessEntryCreate {
    pub date: NaiveDate,
    pub mood: i64,
    pub energy: i64,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct WellnessEntry {
    pub id: i64,
    pub date: NaiveDate,
    pub mood: i64,
    pub energy: i64,
    pub notes: Option<String>,
}
