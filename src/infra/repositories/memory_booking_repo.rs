use crate::domain::{models::booking::Booking, ports::BookingRepository};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;

/// In-memory booking records: demo seed data plus wizard submissions.
/// Never persisted.
pub struct MemoryBookingRepo {
    bookings: RwLock<Vec<Booking>>,
}

impl MemoryBookingRepo {
    pub fn new(initial: Vec<Booking>) -> Self {
        Self { bookings: RwLock::new(initial) }
    }
}

#[async_trait]
impl BookingRepository for MemoryBookingRepo {
    async fn create(&self, booking: &Booking) -> Result<Booking, AppError> {
        let mut bookings = self.bookings.write().await;
        bookings.push(booking.clone());
        Ok(booking.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Booking>, AppError> {
        let bookings = self.bookings.read().await;
        Ok(bookings.iter().find(|b| b.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Booking>, AppError> {
        Ok(self.bookings.read().await.clone())
    }

    async fn list_by_field_and_date(
        &self,
        field_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<Booking>, AppError> {
        let bookings = self.bookings.read().await;
        Ok(bookings
            .iter()
            .filter(|b| b.field_id == field_id && b.date == date)
            .cloned()
            .collect())
    }

    async fn update(&self, booking: &Booking) -> Result<Booking, AppError> {
        let mut bookings = self.bookings.write().await;
        let Some(slot) = bookings.iter_mut().find(|b| b.id == booking.id) else {
            return Err(AppError::NotFound("Booking not found".into()));
        };
        *slot = booking.clone();
        Ok(booking.clone())
    }
}
