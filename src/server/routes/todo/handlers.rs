use crate::db::{CompletionChange, EntityKind, TodoPatch};
use crate::error::DaybookError;
use crate::server::extract::{EntityId, ValidJson};
use crate::server::router::DaybookState;
use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
};
use daybook_schema::{DeleteConfirmation, Todo, TodoCompleteQuery, TodoCreate, TodoUpdate};

/// POST /todos
pub(super) async fn create_todo(
    State(state): State<DaybookState>,
    ValidJson(create): ValidJson<TodoCreate>,
) -> Result<(StatusCode, Json<Todo>), DaybookError> {
    let row = state.db.create_todo(create).await?;
    Ok((StatusCode::CREATED, Json(row.into())))
}

/// GET /todos
pub(super) async fn list_todos(
    State(state): State<DaybookState>,
) -> Result<Json<Vec<Todo>>, DaybookError> {
    let rows = state.db.list_todos().await?;
    Ok(Json(rows.into_iter().map(Todo::from).collect()))
}

/// PUT /todos/{id}
///
/// Only `completed` is applied; `{}` returns the row unchanged (still 404 for unknown ids).
pub(super) async fn update_todo(
    State(state): State<DaybookState>,
    EntityId(id): EntityId,
    ValidJson(update): ValidJson<TodoUpdate>,
) -> Result<Json<Todo>, DaybookError> {
    let patch = TodoPatch {
        completed: update
            .completed
            .map_or(CompletionChange::Keep, CompletionChange::Set),
    };
    let row = state.db.patch_todo(id, patch).await?;
    Ok(Json(row.into()))
}

/// PATCH /todos/{id}/complete[?completed=bool]
///
/// Without the query parameter the flag is toggled.
pub(super) async fn complete_todo(
    State(state): State<DaybookState>,
    EntityId(id): EntityId,
    query: Result<Query<TodoCompleteQuery>, QueryRejection>,
) -> Result<Json<Todo>, DaybookError> {
    let Query(query) = query?;
    let patch = TodoPatch {
        completed: query
            .completed
            .map_or(CompletionChange::Toggle, CompletionChange::Set),
    };
    let row = state.db.patch_todo(id, patch).await?;
    Ok(Json(row.into()))
}

/// DELETE /todos/{id}
pub(super) async fn delete_todo(
    State(state): State<DaybookState>,
    EntityId(id): EntityId,
) -> Result<Json<DeleteConfirmation>, DaybookError> {
    state.db.delete(EntityKind::Todo, id).await?;
    Ok(Json(DeleteConfirmation::for_entity(EntityKind::Todo.label())))
}
