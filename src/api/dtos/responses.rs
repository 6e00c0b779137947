use crate::domain::models::booking::Booking;
use crate::domain::services::grid::GridView;
use crate::domain::services::pricing::Quote;
use crate::domain::services::slots::TimeSlot;
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotsResponse {
    pub date: String,
    pub slots: Vec<TimeSlot>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridResponse {
    pub venue_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(flatten)]
    pub grid: GridView,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingCreatedResponse {
    pub booking: Booking,
    pub summary: Quote,
}
