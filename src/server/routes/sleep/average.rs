//! Trailing seven-day sleep average.

use crate::db::DbActorHandle;
use crate::error::DaybookError;
use chrono::{Days, NaiveDate};
use daybook_schema::WeeklySleepAverage;

/// Length of the look-back window. The window spans `WINDOW_DAYS + 1` calendar days because both
/// ends are inclusive.
pub const WINDOW_DAYS: u64 = 7;

/// Inclusive `[today - 7 days, today]`.
pub fn window_ending(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    (today - Days::new(WINDOW_DAYS), today)
}

/// Rounds to two decimals, halves away from zero.
pub fn round_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Averages sleep hours over the window ending at `today`. No rows in the window yields `0.0`.
pub async fn weekly_average(
    db: &DbActorHandle,
    today: NaiveDate,
) -> Result<WeeklySleepAverage, DaybookError> {
    let (week_start, week_end) = window_ending(today);
    let average = db
        .average_sleep_hours(week_start, week_end)
        .await?
        .unwrap_or(0.0);

    Ok(WeeklySleepAverage {
        week_start,
        week_end,
        average_hours: round_hundredths(average),
    })
}
