pub mod memory_booking_repo;
pub mod memory_schedule_store;
pub mod memory_theme_repo;
pub mod memory_venue_repo;
