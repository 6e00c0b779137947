use std::sync::Arc;
use tracing::info;

use crate::config::Config;
use crate::domain::models::schedule::OperatingHours;
use crate::infra::repositories::{
    memory_booking_repo::MemoryBookingRepo, memory_schedule_store::MemoryScheduleStore,
    memory_theme_repo::MemoryThemeRepo, memory_venue_repo::MemoryVenueRepo,
};
use crate::infra::seed;
use crate::infra::storage::local_store::LocalStore;
use crate::state::AppState;

/// Wires the in-memory adapters. Venues and theme are picked up from the
/// local store when present; bookings and schedule blocks start from the
/// demo seed on every boot.
pub fn bootstrap_state(config: &Config) -> AppState {
    info!("Initializing in-memory state (local store: {})...", config.data_file);

    let store = Arc::new(LocalStore::new(&config.data_file));
    let (saved_venues, saved_theme) = store.load();

    let venues = match saved_venues {
        Some(venues) => {
            info!("Loaded {} venue(s) from local store", venues.len());
            venues
        }
        None if config.seed_demo_data => seed::demo_venues(),
        None => Vec::new(),
    };
    let theme = saved_theme.unwrap_or_default();

    let (bookings, blocks) = if config.seed_demo_data {
        (seed::demo_bookings(), seed::demo_blocks())
    } else {
        (Vec::new(), Vec::new())
    };

    AppState {
        config: config.clone(),
        venue_repo: Arc::new(MemoryVenueRepo::new(venues, store.clone())),
        booking_repo: Arc::new(MemoryBookingRepo::new(bookings)),
        schedule_store: Arc::new(MemoryScheduleStore::new(blocks, OperatingHours::default())),
        theme_repo: Arc::new(MemoryThemeRepo::new(theme, store)),
    }
}
