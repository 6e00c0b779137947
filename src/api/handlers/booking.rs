use axum::{
    Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};
use chrono::{NaiveDate, NaiveTime};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, warn};

use crate::api::dtos::requests::{CreateBookingRequest, PaymentOutcome, SimulatePaymentRequest};
use crate::api::dtos::responses::{BookingCreatedResponse, SlotsResponse};
use crate::api::extractors::venue::VenueRef;
use crate::domain::models::booking::{Booking, NewBookingParams, PaymentMethod, PaymentStatus};
use crate::domain::services::pricing;
use crate::domain::services::slots::generate_time_slots;
use crate::error::AppError;
use crate::state::AppState;

pub async fn get_slots(
    State(state): State<Arc<AppState>>,
    VenueRef(venue): VenueRef,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let date_str = params
        .get("date")
        .ok_or(AppError::Validation("Date required".into()))?;
    let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Invalid date format".into()))?;

    let hours = state.schedule_store.operating_hours().await?;
    let bookings = state.booking_repo.list_by_field_and_date(&venue.id, date).await?;
    let slots = generate_time_slots(&hours, &bookings, &venue.id, date);

    Ok(Json(SlotsResponse { date: date_str.clone(), slots }))
}

pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    VenueRef(venue): VenueRef,
    Json(payload): Json<CreateBookingRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.name.trim().is_empty() {
        return Err(AppError::Validation("Name is required".into()));
    }
    if !is_valid_email(&payload.email) {
        return Err(AppError::Validation("Invalid email format".into()));
    }
    if !is_valid_phone(&payload.phone) {
        return Err(AppError::Validation("Invalid phone number (10-13 digits)".into()));
    }
    if payload.duration == 0 {
        return Err(AppError::Validation("Duration must be at least 1 hour".into()));
    }

    let date = NaiveDate::parse_from_str(&payload.date, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Invalid date format".into()))?;
    let time = NaiveTime::parse_from_str(&payload.time, "%H:%M")
        .map_err(|_| AppError::Validation("Invalid time format (HH:MM)".into()))?;
    let start_hour = chrono::Timelike::hour(&time);

    let hours = state.schedule_store.operating_hours().await?;
    let existing = state.booking_repo.list_by_field_and_date(&venue.id, date).await?;
    let slots = generate_time_slots(&hours, &existing, &venue.id, date);

    for hour in start_hour..start_hour + payload.duration {
        let available = slots
            .iter()
            .any(|s| s.time == format!("{:02}:00", hour) && s.available);
        if !available {
            warn!(
                "Booking rejected: slot {:02}:00 on {} not available for {}",
                hour, date, venue.id
            );
            return Err(AppError::Conflict("Selected time slot is not available".into()));
        }
    }

    let voucher = payload.voucher_code.as_deref().filter(|c| !c.is_empty());
    let summary = pricing::quote(venue.price_per_hour, payload.duration, payload.payment_method, voucher)?;

    // Stored total is the base price, halved for DP; fees and tax live on
    // the quote.
    let total_price = match payload.payment_method {
        PaymentMethod::Dp => summary.base_price / 2,
        PaymentMethod::Full => summary.base_price,
    };

    let booking = Booking::new(NewBookingParams {
        field_id: venue.id.clone(),
        user_name: payload.name,
        user_email: payload.email,
        user_phone: payload.phone,
        date,
        time: payload.time,
        duration: payload.duration,
        total_price,
        payment_method: payload.payment_method,
        payment_type: payload.payment_type,
        payment_detail: payload.payment_detail,
    });

    let created = state.booking_repo.create(&booking).await?;
    info!("Booking created: {} for venue {} (awaiting payment)", created.id, venue.id);

    Ok(Json(BookingCreatedResponse { booking: created, summary }))
}

pub async fn list_bookings(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, AppError> {
    let bookings = state.booking_repo.list().await?;
    Ok(Json(bookings))
}

pub async fn get_booking(
    State(state): State<Arc<AppState>>,
    Path(booking_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let booking = state
        .booking_repo
        .find_by_id(&booking_id)
        .await?
        .ok_or(AppError::NotFound("Booking not found".into()))?;
    Ok(Json(booking))
}

/// Mock payment: the caller chooses the outcome. Failed payments may be
/// retried; completed ones may not.
pub async fn simulate_payment(
    State(state): State<Arc<AppState>>,
    Path(booking_id): Path<String>,
    Json(payload): Json<SimulatePaymentRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut booking = state
        .booking_repo
        .find_by_id(&booking_id)
        .await?
        .ok_or(AppError::NotFound("Booking not found".into()))?;

    match booking.payment_status {
        PaymentStatus::Paid | PaymentStatus::Partial => {
            return Err(AppError::Conflict("Payment has already been completed".into()));
        }
        PaymentStatus::Pending | PaymentStatus::Failed => {}
    }

    match payload.outcome {
        PaymentOutcome::Success => booking.mark_paid(),
        PaymentOutcome::Failure => booking.mark_failed(),
    }

    let updated = state.booking_repo.update(&booking).await?;
    info!("Payment simulated for {}: {:?}", updated.id, updated.payment_status);
    Ok(Json(updated))
}

fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !local.contains(char::is_whitespace)
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains(char::is_whitespace)
}

fn is_valid_phone(phone: &str) -> bool {
    (10..=13).contains(&phone.len()) && phone.chars().all(|c| c.is_ascii_digit())
}
