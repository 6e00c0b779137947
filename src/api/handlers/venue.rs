use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::{CreateVenueRequest, UpdateVenueRequest};
use crate::api::extractors::venue::VenueRef;
use crate::domain::models::venue::{NewVenueParams, Venue};
use crate::domain::services::grid::courts_for_venue;
use crate::error::AppError;
use crate::state::AppState;

pub async fn list_venues(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, AppError> {
    let venues = state.venue_repo.list().await?;
    Ok(Json(venues))
}

pub async fn create_venue(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateVenueRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.name.trim().is_empty() {
        return Err(AppError::Validation("Venue name is required".into()));
    }

    let venue = Venue::new(NewVenueParams {
        name: payload.name,
        location: payload.location,
        description: payload.description,
        price_per_hour: payload.price_per_hour,
        image: payload.image,
        facilities: payload.facilities,
        total_courts: payload.total_courts,
        about_venue: payload.about_venue,
        rules: payload.rules,
    });

    let created = state.venue_repo.create(&venue).await?;
    info!("Venue created: {} ({})", created.name, created.id);
    Ok(Json(created))
}

pub async fn get_venue(VenueRef(venue): VenueRef) -> Result<impl IntoResponse, AppError> {
    Ok(Json(venue))
}

pub async fn update_venue(
    State(state): State<Arc<AppState>>,
    VenueRef(mut venue): VenueRef,
    Json(payload): Json<UpdateVenueRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Some(name) = payload.name {
        venue.name = name;
    }
    if let Some(location) = payload.location {
        venue.location = location;
    }
    if let Some(description) = payload.description {
        venue.description = description;
    }
    if let Some(price) = payload.price_per_hour {
        venue.price_per_hour = price;
    }
    if let Some(image) = payload.image {
        venue.image = image;
    }
    if let Some(facilities) = payload.facilities {
        venue.facilities = facilities;
    }
    if let Some(total_courts) = payload.total_courts {
        venue.total_courts = total_courts;
    }
    if let Some(about) = payload.about_venue {
        venue.about_venue = Some(about);
    }
    if let Some(rules) = payload.rules {
        venue.rules = rules;
    }

    let updated = state.venue_repo.update(&venue).await?;
    info!("Venue updated: {}", updated.id);
    Ok(Json(updated))
}

pub async fn delete_venue(
    State(state): State<Arc<AppState>>,
    Path(venue_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.venue_repo.delete(&venue_id).await?;
    info!("Venue deleted: {}", venue_id);
    Ok(Json(serde_json::json!({ "status": "deleted" })))
}

pub async fn list_courts(VenueRef(venue): VenueRef) -> Result<impl IntoResponse, AppError> {
    Ok(Json(courts_for_venue(&venue)))
}
