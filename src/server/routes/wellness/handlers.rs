use crate::db::EntityKind;
use crate::error::DaybookError;
use crate::server::extract::{EntityId, ValidJson};
use crate::server::router::DaybookState;
use axum::{Json, extract::State, http::StatusCode};
use daybook_schema::{DeleteConfirmation, WellnessEntry, WellnessEntryCreate};

pub(super) async fn create_wellness(
    State(state): State<DaybookState>,
    ValidJson(create): ValidJson<WellnessEntryCreate>,
) -> Result<(StatusCode, Json<WellnessEntry>), DaybookError> {
    let row = state.db.create_wellness(create).await?;
    Ok((StatusCode::CREATED, Json(row.into())))
}

pub(super) async fn list_wellness(
    State(state): State<DaybookState>,
) -> Result<Json<Vec<WellnessEntry>>, DaybookError> {
    let rows = state.db.list_wellness().await?;
    Ok(Json(rows.into_iter().map(WellnessEntry::from).collect()))
}

pub(super) async fn delete_wellness(
    State(state): State<DaybookState>,
    EntityId(id): EntityId,
) -> Result<Json<DeleteConfirmation>, DaybookError> {
    state.db.delete(EntityKind::Wellness, id).await?;
    Ok(Json(DeleteConfirmation::for_entity(
        EntityKind::Wellness.label(),
    )))
}
