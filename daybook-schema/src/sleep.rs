use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SleepEntryCreate {
    pub date: NaiveDate,
    pub hours: f64,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SleepEntry {
    pub id: i64,
    pub date: NaiveDate,
    pub hours: f64,
    pub notes: Option<String>,
}

/// Response of `GET /sleep/weekly_average`. Both bounds are inclusive.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct WeeklySleepAverage {
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub average_hours: f64,
}
