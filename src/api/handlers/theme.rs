use axum::{Json, extract::State, response::IntoResponse};
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::UpdateThemeRequest;
use crate::domain::models::theme::ThemeColors;
use crate::error::AppError;
use crate::state::AppState;

pub async fn get_theme(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, AppError> {
    let theme = state.theme_repo.get().await?;
    Ok(Json(theme))
}

/// Partial update: absent fields keep their current value.
pub async fn update_theme(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<UpdateThemeRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut theme = state.theme_repo.get().await?;

    if let Some(primary) = payload.primary {
        theme.primary = primary;
    }
    if let Some(secondary) = payload.secondary {
        theme.secondary = secondary;
    }
    if let Some(accent) = payload.accent {
        theme.accent = accent;
    }
    if let Some(background) = payload.background {
        theme.background = background;
    }
    if let Some(text_primary) = payload.text_primary {
        theme.text_primary = text_primary;
    }
    if let Some(text_secondary) = payload.text_secondary {
        theme.text_secondary = text_secondary;
    }

    let saved = state.theme_repo.set(&theme).await?;
    info!("Brand theme updated");
    Ok(Json(saved))
}

pub async fn reset_theme(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, AppError> {
    let saved = state.theme_repo.set(&ThemeColors::default()).await?;
    info!("Brand theme reset to defaults");
    Ok(Json(saved))
}
