use crate::domain::models::schedule::{BlockStatus, Court, OperatingHours, ScheduleBlock};
use crate::domain::models::venue::Venue;
use serde::Serialize;

/// Fixed display range of the timeline: 06:00 up to (not including) 24:00.
pub const DISPLAY_START: u32 = 6;
pub const DISPLAY_END: u32 = 24;

pub fn display_hours() -> Vec<u32> {
    (DISPLAY_START..DISPLAY_END).collect()
}

/// Synthesizes the court list from the venue's configured court count.
/// Courts have no independent identity; a venue with N courts always yields
/// court-1 .. court-N.
pub fn courts_for_venue(venue: &Venue) -> Vec<Court> {
    let count = venue.total_courts.max(1);
    (1..=count)
        .map(|i| Court {
            id: format!("court-{}", i),
            name: format!("Court {}", i),
        })
        .collect()
}

/// The block that starts exactly at (court, hour), if any.
pub fn block_starting_at<'a>(
    blocks: &'a [ScheduleBlock],
    court_id: &str,
    hour: u32,
) -> Option<&'a ScheduleBlock> {
    blocks.iter().find(|b| b.field_id == court_id && b.start_hour == hour)
}

/// The block that started earlier but still spans (court, hour), if any.
pub fn block_covering<'a>(
    blocks: &'a [ScheduleBlock],
    court_id: &str,
    hour: u32,
) -> Option<&'a ScheduleBlock> {
    blocks.iter().find(|b| b.field_id == court_id && b.covers(hour))
}

/// One rendered grid cell, exactly one of four shapes.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum CellView {
    /// Out of the operating window (or the whole day is closed).
    /// Non-interactive.
    Closed { hour: u32 },
    /// A block starts here; the element visually spans `duration` columns.
    #[serde(rename_all = "camelCase")]
    BlockStart {
        hour: u32,
        block: ScheduleBlock,
        label: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        duration_label: Option<String>,
        color: &'static str,
        width: String,
    },
    /// Inside a span that started earlier. No independent surface.
    #[serde(rename_all = "camelCase")]
    Covered { hour: u32, block_id: String },
    /// Empty and in-hours. Interactive.
    Open { hour: u32 },
}

#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CourtRow {
    pub court: Court,
    pub cells: Vec<CellView>,
}

#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GridView {
    pub hours: Vec<u32>,
    pub operating_hours: OperatingHours,
    pub rows: Vec<CourtRow>,
}

/// Pure rendering: (courts, hours, blocks) -> cell view models.
pub fn build_grid(
    courts: &[Court],
    hours: &OperatingHours,
    blocks: &[ScheduleBlock],
) -> GridView {
    let rows = courts
        .iter()
        .map(|court| CourtRow {
            court: court.clone(),
            cells: display_hours()
                .into_iter()
                .map(|hour| render_cell(blocks, hours, &court.id, hour))
                .collect(),
        })
        .collect();

    GridView {
        hours: display_hours(),
        operating_hours: *hours,
        rows,
    }
}

fn render_cell(
    blocks: &[ScheduleBlock],
    hours: &OperatingHours,
    court_id: &str,
    hour: u32,
) -> CellView {
    if !hours.allows(hour) {
        return CellView::Closed { hour };
    }
    if let Some(block) = block_starting_at(blocks, court_id, hour) {
        return CellView::BlockStart {
            hour,
            block: block.clone(),
            label: block_label(block),
            duration_label: (block.duration > 1.0).then(|| format!("{} hr", fmt_num(block.duration))),
            color: block.status.color_token(),
            width: span_width(block.duration),
        };
    }
    if let Some(block) = block_covering(blocks, court_id, hour) {
        return CellView::Covered { hour, block_id: block.id.clone() };
    }
    CellView::Open { hour }
}

/// Customer bookings always render as "Booked" regardless of title.
fn block_label(block: &ScheduleBlock) -> String {
    match block.status {
        BlockStatus::Booked => "Booked".to_string(),
        BlockStatus::Blocked | BlockStatus::Maintenance | BlockStatus::Pending => {
            block.title.clone()
        }
    }
}

/// CSS width of a spanning block element: duration columns plus the 1px
/// inter-column borders it swallows, minus the 8px inset of the element.
fn span_width(duration: f64) -> String {
    format!(
        "calc({}% + {}px - 8px)",
        fmt_num(duration * 100.0),
        fmt_num(duration - 1.0)
    )
}

fn fmt_num(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{}", v as i64)
    } else {
        format!("{}", v)
    }
}

/// Outcome of clicking cell (court, hour).
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum CellResolution {
    /// Closed day or out-of-hours cell: nothing happens, nothing is touched.
    OutOfHours,
    /// An existing block starts at or spans the cell; the editor binds to
    /// the whole block, never a sub-slice of its span.
    #[serde(rename_all = "camelCase")]
    Existing { block: ScheduleBlock },
    /// Empty in-hours cell: the editor opens on an unsaved draft.
    #[serde(rename_all = "camelCase")]
    Draft { draft: BlockDraft },
}

/// An in-progress, unsaved block. Carries no identifier until saved.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BlockDraft {
    pub field_id: String,
    pub start_hour: u32,
    pub duration: f64,
    pub status: BlockStatus,
    pub title: String,
}

pub fn resolve_cell(
    blocks: &[ScheduleBlock],
    hours: &OperatingHours,
    court_id: &str,
    hour: u32,
) -> CellResolution {
    if !hours.allows(hour) {
        return CellResolution::OutOfHours;
    }

    if let Some(block) = block_starting_at(blocks, court_id, hour) {
        return CellResolution::Existing { block: block.clone() };
    }
    if let Some(block) = block_covering(blocks, court_id, hour) {
        return CellResolution::Existing { block: block.clone() };
    }

    CellResolution::Draft {
        draft: BlockDraft {
            field_id: court_id.to_string(),
            start_hour: hour,
            duration: 1.0,
            status: BlockStatus::Blocked,
            title: "Manual Block".to_string(),
        },
    }
}
