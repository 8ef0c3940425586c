//! `DbPatchable` implementations.
//!
//! This sits in the `db` module because it contains SQL/table knowledge.

use async_trait::async_trait;
use sqlx::SqliteConnection;
use tracing::debug;

use super::models::{DbGoal, DbTodoItem, EntityKind};
use super::patch::{CompletionChange, DbPatchable, GoalPatch, TodoPatch};
use crate::error::DaybookError;

#[async_trait]
impl DbPatchable for TodoPatch {
    type Row = DbTodoItem;

    const ENTITY: EntityKind = EntityKind::Todo;

    async fn apply_patch(
        &self,
        id: i64,
        conn: &mut SqliteConnection,
    ) -> Result<DbTodoItem, DaybookError> {
        let row = match self.completed {
            CompletionChange::Keep => {
                sqlx::query_as::<_, DbTodoItem>(
                    r#"
                    SELECT id, title, description, category, completed
                    FROM todo_items
                    WHERE id = ?
                    "#,
                )
                .bind(id)
                .fetch_optional(&mut *conn)
                .await?
            }
            CompletionChange::Set(completed) => {
                sqlx::query_as::<_, DbTodoItem>(
                    r#"
                    UPDATE todo_items
                    SET completed = ?
                    WHERE id = ?
                    RETURNING id, title, description, category, completed
                    "#,
                )
                .bind(completed)
                .bind(id)
                .fetch_optional(&mut *conn)
                .await?
            }
            CompletionChange::Toggle => {
                sqlx::query_as::<_, DbTodoItem>(
                    r#"
                    UPDATE todo_items
                    SET completed = NOT completed
                    WHERE id = ?
                    RETURNING id, title, description, category, completed
                    "#,
                )
                .bind(id)
                .fetch_optional(&mut *conn)
                .await?
            }
        };

        debug!(
            table = Self::ENTITY.table(),
            id,
            change = ?self.completed,
            found = row.is_some(),
            "db patch applied"
        );

        row.ok_or(DaybookError::NotFound {
            entity: Self::ENTITY.label(),
            id,
        })
    }
}

#[async_trait]
impl DbPatchable for GoalPatch {
    type Row = DbGoal;

    const ENTITY: EntityKind = EntityKind::Goal;

    async fn apply_patch(
        &self,
        id: i64,
        conn: &mut SqliteConnection,
    ) -> Result<DbGoal, DaybookError> {
        let row = sqlx::query_as::<_, DbGoal>(
            r#"
            UPDATE goals
            SET text = ?, done = ?
            WHERE id = ?
            RETURNING id, text, done, created_at
            "#,
        )
        .bind(self.text.as_str())
        .bind(self.done)
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;

        debug!(
            table = Self::ENTITY.table(),
            id,
            done = self.done,
            found = row.is_some(),
            "db patch applied"
        );

        row.ok_or(DaybookError::NotFound {
            entity: Self::ENTITY.label(),
            id,
        })
    }
}
