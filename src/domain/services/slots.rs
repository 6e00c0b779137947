use crate::domain::models::booking::Booking;
use crate::domain::models::schedule::OperatingHours;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    pub id: String,
    pub time: String,
    pub available: bool,
}

/// Hourly customer-facing slots for one venue and date: every hour of the
/// operating window, marked unavailable where an active booking covers it.
pub fn generate_time_slots(
    hours: &OperatingHours,
    bookings: &[Booking],
    field_id: &str,
    date: NaiveDate,
) -> Vec<TimeSlot> {
    if hours.is_closed {
        return Vec::new();
    }

    (hours.open..hours.close)
        .map(|hour| {
            let taken = bookings
                .iter()
                .any(|b| b.field_id == field_id && b.date == date && b.occupies(hour));
            TimeSlot {
                id: format!("slot-{}", hour),
                time: format!("{:02}:00", hour),
                available: !taken,
            }
        })
        .collect()
}
