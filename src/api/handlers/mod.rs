pub mod booking;
pub mod health;
pub mod schedule;
pub mod theme;
pub mod venue;
