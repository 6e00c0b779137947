pub mod booking;
pub mod schedule;
pub mod theme;
pub mod venue;
