use crate::db::EntityKind;
use crate::error::DaybookError;
use crate::server::extract::{EntityId, ValidJson};
use crate::server::router::DaybookState;
use axum::{Json, extract::State, http::StatusCode};
use chrono::Utc;
use daybook_schema::{DeleteConfirmation, SleepEntry, SleepEntryCreate, WeeklySleepAverage};

/// POST /sleep
pub(super) async fn create_sleep(
    State(state): State<DaybookState>,
    ValidJson(create): ValidJson<SleepEntryCreate>,
) -> Result<(StatusCode, Json<SleepEntry>), DaybookError> {
    let row = state.db.create_sleep(create).await?;
    Ok((StatusCode::CREATED, Json(row.into())))
}

/// GET /sleep
pub(super) async fn list_sleep(
    State(state): State<DaybookState>,
) -> Result<Json<Vec<SleepEntry>>, DaybookError> {
    let rows = state.db.list_sleep().await?;
    Ok(Json(rows.into_iter().map(SleepEntry::from).collect()))
}

/// GET /sleep/weekly_average
///
/// "Today" is the UTC calendar date.
pub(super) async fn sleep_weekly_average(
    State(state): State<DaybookState>,
) -> Result<Json<WeeklySleepAverage>, DaybookError> {
    let today = Utc::now().date_naive();
    let avg = super::weekly_average(&state.db, today).await?;
    Ok(Json(avg))
}

/// DELETE /sleep/{id}
pub(super) async fn delete_sleep(
    State(state): State<DaybookState>,
    EntityId(id): EntityId,
) -> Result<Json<DeleteConfirmation>, DaybookError> {
    state.db.delete(EntityKind::Sleep, id).await?;
    Ok(Json(DeleteConfirmation::for_entity(EntityKind::Sleep.label())))
}
