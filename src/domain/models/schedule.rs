use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Status of a schedule block. `Booked` blocks mirror confirmed customer
/// bookings and are read-only from the admin schedule tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockStatus {
    Booked,
    Blocked,
    Maintenance,
    Pending,
}

impl BlockStatus {
    /// Color token consumed by the grid view. Exhaustive on purpose: adding
    /// a status forces a decision here and in the editor rules.
    pub fn color_token(&self) -> &'static str {
        match self {
            BlockStatus::Booked => "emerald",
            BlockStatus::Blocked => "gray",
            BlockStatus::Maintenance => "orange",
            BlockStatus::Pending => "yellow",
        }
    }

    /// Whether the admin editor may mutate or delete a block in this status.
    pub fn is_editable(&self) -> bool {
        match self {
            BlockStatus::Booked => false,
            BlockStatus::Blocked | BlockStatus::Maintenance | BlockStatus::Pending => true,
        }
    }

    /// Whether the admin editor may assign this status to a block.
    pub fn is_assignable(&self) -> bool {
        match self {
            BlockStatus::Booked => false,
            BlockStatus::Blocked | BlockStatus::Maintenance | BlockStatus::Pending => true,
        }
    }
}

/// A scheduled span of time on one court. Occupies the half-open hour
/// interval `[start_hour, start_hour + duration)`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleBlock {
    pub id: String,
    /// The physical court id within the selected venue, e.g. "court-1".
    pub field_id: String,
    pub title: String,
    /// e.g. 10 for 10:00.
    pub start_hour: u32,
    /// In hours, may be fractional (e.g. 1.5).
    pub duration: f64,
    pub status: BlockStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Set when the block mirrors a real customer booking.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_id: Option<String>,
}

impl ScheduleBlock {
    pub fn end_hour(&self) -> f64 {
        self.start_hour as f64 + self.duration
    }

    /// True when the block starts strictly before `hour` and still extends
    /// over it. The starting cell itself is not "covered": it renders the
    /// block.
    pub fn covers(&self, hour: u32) -> bool {
        self.start_hour < hour && self.end_hour() > hour as f64
    }

    pub fn fresh_id() -> String {
        format!("blk-{}", Uuid::new_v4())
    }
}

/// The daily open/close window, applied uniformly to all courts.
/// `is_closed` overrides open/close and marks the whole day unavailable.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OperatingHours {
    /// 0-23
    pub open: u32,
    /// 0-24
    pub close: u32,
    pub is_closed: bool,
}

impl OperatingHours {
    /// Whether cell interactions and customer slots are allowed at `hour`.
    pub fn allows(&self, hour: u32) -> bool {
        !self.is_closed && hour >= self.open && hour < self.close
    }
}

impl Default for OperatingHours {
    fn default() -> Self {
        Self { open: 8, close: 22, is_closed: false }
    }
}

/// One bookable physical unit within a venue. Synthesized from the venue's
/// configured court count, never independently persisted.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Court {
    pub id: String,
    pub name: String,
}
