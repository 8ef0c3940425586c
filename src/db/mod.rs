//! Database module: rows, schema and the actor that owns the SQLite pool.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows, plus conversions into wire records
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `patch.rs`: update payloads applied by id
//! - `actor.rs`: the single owner of the pool; everything else holds a `DbActorHandle`

pub mod actor;
pub mod models;
pub mod patch;
pub mod schema;

mod patch_impl;

pub use actor::{DbActorHandle, spawn};
pub use models::{DbExerciseEntry, DbGoal, DbSleepEntry, DbTodoItem, DbWellnessEntry, EntityKind};
pub use patch::{CompletionChange, DbPatchable, GoalPatch, TodoPatch};
pub use schema::SQLITE_INIT;
