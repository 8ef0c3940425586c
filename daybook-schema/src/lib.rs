//! Wire-format records for the Daybook HTTP API.
//!
//! Each resource has a `*Create` (or `*Update`) shape that inbound JSON is
//! validated against, and a read shape returned to clients. These types are
//! deliberately separate from the stored row structs.

pub mod common;
pub mod exercise;
pub mod goal;
pub mod sleep;
pub mod todo;
pub mod wellness;

pub use common::{DeleteConfirmation, HealthStatus};
pub use exercise::{ExerciseEntry, ExerciseEntryCreate};
pub use goal::{Goal, GoalCreate, GoalUpdate};
pub use sleep::{SleepEntry, SleepEntryCreate, WeeklySleepAverage};
pub use todo::{DEFAULT_TODO_CATEGORY, Todo, TodoCompleteQuery, TodoCreate, TodoUpdate};
pub use wellness::{WellnessEntry, WellnessEntryCreate};
