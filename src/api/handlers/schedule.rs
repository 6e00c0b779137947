use axum::{
    Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::responses::GridResponse;
use crate::api::extractors::venue::VenueRef;
use crate::domain::models::schedule::OperatingHours;
use crate::domain::services::editor::{self, BlockSubmission};
use crate::domain::services::grid;
use crate::error::AppError;
use crate::state::AppState;

/// The rendered timeline for one venue. `date` is display metadata only:
/// there is a single schedule regardless of the selected day.
pub async fn get_grid(
    State(state): State<Arc<AppState>>,
    VenueRef(venue): VenueRef,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let date = match params.get("date") {
        Some(raw) => {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .map_err(|_| AppError::Validation("Invalid date format".into()))?;
            Some(raw.clone())
        }
        None => None,
    };

    let hours = state.schedule_store.operating_hours().await?;
    let blocks = state.schedule_store.list_blocks().await?;
    let courts = grid::courts_for_venue(&venue);

    Ok(Json(GridResponse {
        venue_id: venue.id,
        date,
        grid: grid::build_grid(&courts, &hours, &blocks),
    }))
}

/// Resolves a cell click to its editor outcome without mutating anything.
pub async fn resolve_cell(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let court = params
        .get("court")
        .ok_or(AppError::Validation("court is required".into()))?;
    let hour: u32 = params
        .get("hour")
        .ok_or(AppError::Validation("hour is required".into()))?
        .parse()
        .map_err(|_| AppError::Validation("hour must be an integer".into()))?;

    let hours = state.schedule_store.operating_hours().await?;
    let blocks = state.schedule_store.list_blocks().await?;

    Ok(Json(grid::resolve_cell(&blocks, &hours, court, hour)))
}

pub async fn get_hours(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, AppError> {
    let hours = state.schedule_store.operating_hours().await?;
    Ok(Json(hours))
}

/// Replaces the global operating-hours window wholesale.
pub async fn update_hours(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<OperatingHours>,
) -> Result<impl IntoResponse, AppError> {
    editor::validate_hours(&payload)?;
    let saved = state.schedule_store.set_operating_hours(&payload).await?;
    info!(
        "Operating hours updated: {:02}:00-{:02}:00 (closed: {})",
        saved.open, saved.close, saved.is_closed
    );
    Ok(Json(saved))
}

pub async fn list_blocks(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, AppError> {
    let blocks = state.schedule_store.list_blocks().await?;
    Ok(Json(blocks))
}

/// Editor save: replaces the block with a matching id, or appends a draft
/// under a fresh id. The submitted object lands wholesale, no field merge.
pub async fn save_block(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<BlockSubmission>,
) -> Result<impl IntoResponse, AppError> {
    let existing = match &payload.id {
        Some(id) => Some(
            state
                .schedule_store
                .find_block(id)
                .await?
                .ok_or(AppError::NotFound("Schedule block not found".into()))?,
        ),
        None => None,
    };

    let block = editor::prepare_save(&payload, existing.as_ref())?;

    let saved = if existing.is_some() {
        state.schedule_store.replace_block(&block).await?
    } else {
        state.schedule_store.insert_block(&block).await?
    };

    info!(
        "Schedule block saved: {} ({} @ {:02}:00, {}h)",
        saved.id, saved.field_id, saved.start_hour, saved.duration
    );
    Ok(Json(saved))
}

pub async fn delete_block(
    State(state): State<Arc<AppState>>,
    Path(block_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let block = state
        .schedule_store
        .find_block(&block_id)
        .await?
        .ok_or(AppError::NotFound("Schedule block not found".into()))?;

    editor::ensure_deletable(&block)?;
    state.schedule_store.delete_block(&block_id).await?;

    info!("Schedule block deleted: {}", block_id);
    Ok(Json(serde_json::json!({ "status": "deleted" })))
}
