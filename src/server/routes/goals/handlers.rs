use crate::db::{EntityKind, GoalPatch};
use crate::error::DaybookError;
use crate::server::extract::{EntityId, ValidJson};
use crate::server::router::DaybookState;
use axum::{Json, extract::State, http::StatusCode};
use daybook_schema::{DeleteConfirmation, Goal, GoalCreate, GoalUpdate};

/// GET /goals, newest first.
pub(super) async fn list_goals(
    State(state): State<DaybookState>,
) -> Result<Json<Vec<Goal>>, DaybookError> {
    let rows = state.db.list_goals().await?;
    Ok(Json(rows.into_iter().map(Goal::from).collect()))
}

/// POST /goals
pub(super) async fn create_goal(
    State(state): State<DaybookState>,
    ValidJson(create): ValidJson<GoalCreate>,
) -> Result<(StatusCode, Json<Goal>), DaybookError> {
    let row = state.db.create_goal(create).await?;
    Ok((StatusCode::CREATED, Json(row.into())))
}

/// PUT /goals/{id}
pub(super) async fn update_goal(
    State(state): State<DaybookState>,
    EntityId(id): EntityId,
    ValidJson(update): ValidJson<GoalUpdate>,
) -> Result<Json<Goal>, DaybookError> {
    let patch = GoalPatch {
        text: update.text,
        done: update.done,
    };
    let row = state.db.patch_goal(id, patch).await?;
    Ok(Json(row.into()))
}

/// DELETE /goals/{id}
pub(super) async fn delete_goal(
    State(state): State<DaybookState>,
    EntityId(id): EntityId,
) -> Result<Json<DeleteConfirmation>, DaybookError> {
    state.db.delete(EntityKind::Goal, id).await?;
    Ok(Json(DeleteConfirmation::for_entity(EntityKind::Goal.label())))
}
