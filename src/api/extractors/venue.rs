use axum::{
    extract::{FromRequestParts, Path},
    http::{StatusCode, request::Parts},
};
use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::models::venue::Venue;
use crate::state::AppState;

/// Resolves the `{venue_id}` path segment to the venue itself.
pub struct VenueRef(pub Venue);

impl FromRequestParts<Arc<AppState>> for VenueRef {
    type Rejection = StatusCode;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let params: Path<HashMap<String, String>> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| StatusCode::BAD_REQUEST)?;

        let venue_id = params.get("venue_id").ok_or(StatusCode::BAD_REQUEST)?;

        match state.venue_repo.find_by_id(venue_id).await {
            Ok(Some(venue)) => Ok(VenueRef(venue)),
            Ok(None) => Err(StatusCode::NOT_FOUND),
            Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
        }
    }
}
