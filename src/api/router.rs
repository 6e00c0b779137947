use axum::{
    Router,
    body::Body,
    extract::Request,
    routing::{delete, get, post},
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{classify::ServerErrorsFailureClass, trace::TraceLayer};
use tracing::{Span, error, info, info_span};
use uuid::Uuid;

use crate::api::handlers::{booking, health, schedule, theme, venue};
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Venue directory
        .route("/api/v1/venues", get(venue::list_venues).post(venue::create_venue))
        .route(
            "/api/v1/venues/{venue_id}",
            get(venue::get_venue).put(venue::update_venue).delete(venue::delete_venue),
        )
        .route("/api/v1/venues/{venue_id}/courts", get(venue::list_courts))

        // Owner schedule timeline
        .route("/api/v1/venues/{venue_id}/schedule", get(schedule::get_grid))
        .route("/api/v1/schedule/resolve", get(schedule::resolve_cell))
        .route("/api/v1/schedule/hours", get(schedule::get_hours).put(schedule::update_hours))
        .route("/api/v1/schedule/blocks", get(schedule::list_blocks).post(schedule::save_block))
        .route("/api/v1/schedule/blocks/{block_id}", delete(schedule::delete_block))

        // Customer booking flow
        .route("/api/v1/venues/{venue_id}/slots", get(booking::get_slots))
        .route("/api/v1/venues/{venue_id}/book", post(booking::create_booking))
        .route("/api/v1/bookings", get(booking::list_bookings))
        .route("/api/v1/bookings/{booking_id}", get(booking::get_booking))
        .route("/api/v1/bookings/{booking_id}/payment", post(booking::simulate_payment))

        // Brand theming
        .route("/api/v1/theme", get(theme::get_theme).put(theme::update_theme))
        .route("/api/v1/theme/reset", post(theme::reset_theme))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                }),
        )
        .with_state(state)
}
