use crate::config::Config;
use crate::domain::ports::{BookingRepository, ScheduleStore, ThemeRepository, VenueRepository};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub venue_repo: Arc<dyn VenueRepository>,
    pub booking_repo: Arc<dyn BookingRepository>,
    pub schedule_store: Arc<dyn ScheduleStore>,
    pub theme_repo: Arc<dyn ThemeRepository>,
}
