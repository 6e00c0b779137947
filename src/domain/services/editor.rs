use crate::domain::models::schedule::{BlockStatus, OperatingHours, ScheduleBlock};
use crate::error::AppError;
use serde::Deserialize;

/// Durations offered by the block editor.
pub const DURATION_CHOICES: [f64; 4] = [1.0, 2.0, 3.0, 4.0];

/// The full block object handed over by the editor on save. `id` is absent
/// for drafts; `field_id`/`start_hour` are optional only because the save
/// guard has to check their presence.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockSubmission {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub field_id: Option<String>,
    #[serde(default)]
    pub start_hour: Option<u32>,
    #[serde(default = "default_duration")]
    pub duration: f64,
    #[serde(default = "default_status")]
    pub status: BlockStatus,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub booking_id: Option<String>,
}

fn default_duration() -> f64 {
    1.0
}

fn default_status() -> BlockStatus {
    BlockStatus::Blocked
}

/// Applies the editor's commit rules and produces the block that replaces
/// (or joins) the collection. `existing` is the stored block when the
/// submission carries an id.
pub fn prepare_save(
    submission: &BlockSubmission,
    existing: Option<&ScheduleBlock>,
) -> Result<ScheduleBlock, AppError> {
    let Some(field_id) = submission.field_id.clone() else {
        return Err(AppError::Validation("fieldId and startHour are required".into()));
    };
    let Some(start_hour) = submission.start_hour else {
        return Err(AppError::Validation("fieldId and startHour are required".into()));
    };

    if let Some(existing) = existing
        && !existing.status.is_editable()
    {
        return Err(AppError::Forbidden(
            "This slot is booked by a customer and cannot be edited".into(),
        ));
    }

    if !submission.status.is_assignable() {
        return Err(AppError::Validation(
            "Status 'booked' is reserved for customer bookings".into(),
        ));
    }
    if !DURATION_CHOICES.contains(&submission.duration) {
        return Err(AppError::Validation("Duration must be 1, 2, 3 or 4 hours".into()));
    }
    if start_hour > 23 {
        return Err(AppError::Validation("startHour must be between 0 and 23".into()));
    }

    let id = match existing {
        Some(existing) => existing.id.clone(),
        None => ScheduleBlock::fresh_id(),
    };

    Ok(ScheduleBlock {
        id,
        field_id,
        title: submission.title.clone(),
        start_hour,
        duration: submission.duration,
        status: submission.status,
        notes: submission.notes.clone(),
        booking_id: submission.booking_id.clone(),
    })
}

/// Delete is only offered for non-booked blocks.
pub fn ensure_deletable(block: &ScheduleBlock) -> Result<(), AppError> {
    if !block.status.is_editable() {
        return Err(AppError::Forbidden(
            "This slot is booked by a customer and cannot be deleted".into(),
        ));
    }
    Ok(())
}

/// Range checks only. An inverted window (open >= close) is accepted and
/// simply renders every cell closed.
pub fn validate_hours(hours: &OperatingHours) -> Result<(), AppError> {
    if hours.open > 23 {
        return Err(AppError::Validation("open must be between 0 and 23".into()));
    }
    if hours.close > 24 {
        return Err(AppError::Validation("close must be between 0 and 24".into()));
    }
    Ok(())
}
