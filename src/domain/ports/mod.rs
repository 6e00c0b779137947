use crate::domain::models::{
    booking::Booking,
    schedule::{OperatingHours, ScheduleBlock},
    theme::ThemeColors,
    venue::Venue,
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;

#[async_trait]
pub trait VenueRepository: Send + Sync {
    async fn create(&self, venue: &Venue) -> Result<Venue, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Venue>, AppError>;
    async fn list(&self) -> Result<Vec<Venue>, AppError>;
    async fn update(&self, venue: &Venue) -> Result<Venue, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn create(&self, booking: &Booking) -> Result<Booking, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Booking>, AppError>;
    async fn list(&self) -> Result<Vec<Booking>, AppError>;
    async fn list_by_field_and_date(&self, field_id: &str, date: NaiveDate) -> Result<Vec<Booking>, AppError>;
    async fn update(&self, booking: &Booking) -> Result<Booking, AppError>;
}

/// Owns the schedule grid's block collection and the single global
/// operating-hours window. In-memory only: the collection resets on restart.
#[async_trait]
pub trait ScheduleStore: Send + Sync {
    async fn list_blocks(&self) -> Result<Vec<ScheduleBlock>, AppError>;
    async fn find_block(&self, id: &str) -> Result<Option<ScheduleBlock>, AppError>;
    /// Appends a block that already carries a generated id.
    async fn insert_block(&self, block: &ScheduleBlock) -> Result<ScheduleBlock, AppError>;
    /// Replaces the block with a matching id wholesale. No field merge.
    async fn replace_block(&self, block: &ScheduleBlock) -> Result<ScheduleBlock, AppError>;
    async fn delete_block(&self, id: &str) -> Result<(), AppError>;
    async fn operating_hours(&self) -> Result<OperatingHours, AppError>;
    async fn set_operating_hours(&self, hours: &OperatingHours) -> Result<OperatingHours, AppError>;
}

#[async_trait]
pub trait ThemeRepository: Send + Sync {
    async fn get(&self) -> Result<ThemeColors, AppError>;
    async fn set(&self, theme: &ThemeColors) -> Result<ThemeColors, AppError>;
}
