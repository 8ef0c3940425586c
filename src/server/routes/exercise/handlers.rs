use crate::db::EntityKind;
use crate::error::DaybookError;
use crate::server::extract::{EntityId, ValidJson};
use crate::server::router::DaybookState;
use axum::{Json, extract::State, http::StatusCode};
use daybook_schema::{DeleteConfirmation, ExerciseEntry, ExerciseEntryCreate};

pub(super) async fn create_exercise(
    State(state): State<DaybookState>,
    ValidJson(create): ValidJson<ExerciseEntryCreate>,
) -> Result<(StatusCode, Json<ExerciseEntry>), DaybookError> {
    let row = state.db.create_exercise(create).await?;
    Ok((StatusCode::CREATED, Json(row.into())))
}

pub(super) async fn list_exercise(
    State(state): State<DaybookState>,
) -> Result<Json<Vec<ExerciseEntry>>, DaybookError> {
    let rows = state.db.list_exercise().await?;
    Ok(Json(rows.into_iter().map(ExerciseEntry::from).collect()))
}

pub(super) async fn delete_exercise(
    State(state): State<DaybookState>,
    EntityId(id): EntityId,
) -> Result<Json<DeleteConfirmation>, DaybookError> {
    state.db.delete(EntityKind::Exercise, id).await?;
    Ok(Json(DeleteConfirmation::for_entity(
        EntityKind::Exercise.label(),
    )))
}
