mod common;

use axum::http::StatusCode;
use common::{TestApp, parse_body};
use serde_json::json;

#[tokio::test]
async fn test_default_theme_is_the_emerald_palette() {
    let app = TestApp::new();

    let theme = parse_body(app.get("/api/v1/theme").await).await;
    assert_eq!(theme["primary"], "#059669");
    assert_eq!(theme["secondary"], "#10b981");
    assert_eq!(theme["accent"], "#f0fdf4");
    assert_eq!(theme["background"], "#ffffff");
    assert_eq!(theme["textPrimary"], "#111827");
    assert_eq!(theme["textSecondary"], "#4b5563");
}

#[tokio::test]
async fn test_partial_update_keeps_other_colors() {
    let app = TestApp::new();

    let res = app
        .put("/api/v1/theme", json!({ "primary": "#7c3aed", "accent": "#f5f3ff" }))
        .await;
    assert_eq!(res.status(), StatusCode::OK);

    let theme = parse_body(app.get("/api/v1/theme").await).await;
    assert_eq!(theme["primary"], "#7c3aed");
    assert_eq!(theme["accent"], "#f5f3ff");
    assert_eq!(theme["secondary"], "#10b981");
}

#[tokio::test]
async fn test_reset_restores_defaults() {
    let app = TestApp::new();

    app.put("/api/v1/theme", json!({ "primary": "#7c3aed" })).await;
    let res = app.request("POST", "/api/v1/theme/reset", None).await;
    assert_eq!(res.status(), StatusCode::OK);

    let theme = parse_body(app.get("/api/v1/theme").await).await;
    assert_eq!(theme["primary"], "#059669");
}

#[tokio::test]
async fn test_theme_survives_restart() {
    let app = TestApp::new();

    app.put("/api/v1/theme", json!({ "primary": "#dc2626" })).await;

    let reloaded = TestApp::with_data_file(&app.data_file);
    let theme = parse_body(reloaded.get("/api/v1/theme").await).await;
    assert_eq!(theme["primary"], "#dc2626");
    assert_eq!(theme["secondary"], "#10b981");
}
