//! Update payloads applied to an existing row by id.

use async_trait::async_trait;
use sqlx::SqliteConnection;

use super::models::EntityKind;
use crate::error::DaybookError;

/// Applies an update to one row inside the caller's transaction and returns the row as stored
/// afterwards. An absent id is reported as [`DaybookError::NotFound`].
#[async_trait]
pub trait DbPatchable {
    type Row;

    const ENTITY: EntityKind;

    async fn apply_patch(
        &self,
        id: i64,
        conn: &mut SqliteConnection,
    ) -> Result<Self::Row, DaybookError>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CompletionChange {
    /// Leave `completed` as is.
    #[default]
    Keep,
    Set(bool),
    Toggle,
}

#[derive(Debug, Clone, Default)]
pub struct TodoPatch {
    pub completed: CompletionChange,
}

/// Full replace of the client-editable goal fields. `id` and `created_at` are never touched.
#[derive(Debug, Clone)]
pub struct GoalPatch {
    pub text: String,
    pub done: bool,
}
