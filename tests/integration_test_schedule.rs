mod common;

use axum::http::StatusCode;
use common::{TestApp, parse_body};
use serde_json::{Value, json};

async fn block_count(app: &TestApp) -> usize {
    let body = parse_body(app.get("/api/v1/schedule/blocks").await).await;
    body.as_array().unwrap().len()
}

async fn resolve(app: &TestApp, court: &str, hour: u32) -> Value {
    let res = app
        .get(&format!("/api/v1/schedule/resolve?court={}&hour={}", court, hour))
        .await;
    assert_eq!(res.status(), StatusCode::OK);
    parse_body(res).await
}

#[tokio::test]
async fn test_out_of_hours_clicks_are_noops() {
    let app = TestApp::new();
    let before = block_count(&app).await;

    // Default window is 08:00-22:00.
    for hour in [5, 6, 7, 22, 23] {
        let outcome = resolve(&app, "court-2", hour).await;
        assert_eq!(outcome["kind"], "outOfHours", "hour {}", hour);
    }

    assert_eq!(block_count(&app).await, before);
}

#[tokio::test]
async fn test_closed_day_ignores_every_cell() {
    let app = TestApp::new();

    let res = app
        .put("/api/v1/schedule/hours", json!({ "open": 8, "close": 22, "isClosed": true }))
        .await;
    assert_eq!(res.status(), StatusCode::OK);

    // Even the hour with an existing block resolves to nothing.
    let outcome = resolve(&app, "court-1", 10).await;
    assert_eq!(outcome["kind"], "outOfHours");
}

#[tokio::test]
async fn test_clicking_anywhere_in_span_edits_the_whole_block() {
    let app = TestApp::new();

    // Seeded b1: court-1, 10:00 for 2 hours.
    for hour in [10, 11] {
        let outcome = resolve(&app, "court-1", hour).await;
        assert_eq!(outcome["kind"], "existing", "hour {}", hour);
        assert_eq!(outcome["block"]["id"], "b1");
        assert_eq!(outcome["block"]["startHour"], 10);
    }
}

#[tokio::test]
async fn test_empty_cell_opens_manual_block_draft() {
    let app = TestApp::new();

    let outcome = resolve(&app, "court-1", 9).await;
    assert_eq!(outcome["kind"], "draft");
    assert_eq!(outcome["draft"]["fieldId"], "court-1");
    assert_eq!(outcome["draft"]["startHour"], 9);
    assert_eq!(outcome["draft"]["duration"], 1.0);
    assert_eq!(outcome["draft"]["status"], "blocked");
    assert_eq!(outcome["draft"]["title"], "Manual Block");
    assert!(outcome["draft"].get("id").is_none());

    // First hour after the seeded span ends is free again.
    let outcome = resolve(&app, "court-1", 12).await;
    assert_eq!(outcome["kind"], "draft");
}

#[tokio::test]
async fn test_saving_draft_appends_exactly_one_block() {
    let app = TestApp::new();
    let before = block_count(&app).await;

    let res = app
        .post(
            "/api/v1/schedule/blocks",
            json!({
                "fieldId": "court-2",
                "startHour": 15,
                "duration": 1,
                "status": "blocked",
                "title": "x"
            }),
        )
        .await;
    assert_eq!(res.status(), StatusCode::OK);
    let saved = parse_body(res).await;

    let id = saved["id"].as_str().unwrap();
    assert!(id.starts_with("blk-"));
    assert_eq!(saved["fieldId"], "court-2");
    assert_eq!(saved["startHour"], 15);

    assert_eq!(block_count(&app).await, before + 1);

    // A second draft gets its own identifier.
    let res = app
        .post(
            "/api/v1/schedule/blocks",
            json!({
                "fieldId": "court-3",
                "startHour": 16,
                "duration": 2,
                "status": "pending",
                "title": "Team practice hold"
            }),
        )
        .await;
    let other = parse_body(res).await;
    assert_ne!(other["id"], saved["id"]);
    assert_eq!(block_count(&app).await, before + 2);
}

#[tokio::test]
async fn test_resaving_replaces_only_the_matching_block() {
    let app = TestApp::new();
    let before = block_count(&app).await;

    // Seeded b2: court-2, 14:00, maintenance.
    let res = app
        .post(
            "/api/v1/schedule/blocks",
            json!({
                "id": "b2",
                "fieldId": "court-2",
                "startHour": 14,
                "duration": 3,
                "status": "pending",
                "title": "Net replacement"
            }),
        )
        .await;
    assert_eq!(res.status(), StatusCode::OK);

    assert_eq!(block_count(&app).await, before);

    let blocks = parse_body(app.get("/api/v1/schedule/blocks").await).await;
    let b2 = blocks
        .as_array()
        .unwrap()
        .iter()
        .find(|b| b["id"] == "b2")
        .unwrap();
    assert_eq!(b2["duration"], 3.0);
    assert_eq!(b2["status"], "pending");
    assert_eq!(b2["title"], "Net replacement");

    // The booked seed block is untouched.
    let b1 = blocks
        .as_array()
        .unwrap()
        .iter()
        .find(|b| b["id"] == "b1")
        .unwrap();
    assert_eq!(b1["status"], "booked");
    assert_eq!(b1["duration"], 2.0);
}

#[tokio::test]
async fn test_save_with_unknown_id_is_rejected() {
    let app = TestApp::new();

    let res = app
        .post(
            "/api/v1/schedule/blocks",
            json!({
                "id": "blk-missing",
                "fieldId": "court-1",
                "startHour": 9,
                "duration": 1,
                "status": "blocked",
                "title": "x"
            }),
        )
        .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_save_guard_requires_field_and_hour() {
    let app = TestApp::new();
    let before = block_count(&app).await;

    let res = app
        .post(
            "/api/v1/schedule/blocks",
            json!({ "duration": 2, "status": "blocked", "title": "x" }),
        )
        .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = app
        .post(
            "/api/v1/schedule/blocks",
            json!({ "fieldId": "court-1", "duration": 2, "status": "blocked", "title": "x" }),
        )
        .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    assert_eq!(block_count(&app).await, before);
}

#[tokio::test]
async fn test_deleting_removes_exactly_one_block() {
    let app = TestApp::new();
    let before = block_count(&app).await;

    let res = app.delete("/api/v1/schedule/blocks/b2").await;
    assert_eq!(res.status(), StatusCode::OK);

    let blocks = parse_body(app.get("/api/v1/schedule/blocks").await).await;
    let blocks = blocks.as_array().unwrap();
    assert_eq!(blocks.len(), before - 1);
    assert!(blocks.iter().any(|b| b["id"] == "b1"));
    assert!(!blocks.iter().any(|b| b["id"] == "b2"));

    let res = app.delete("/api/v1/schedule/blocks/b2").await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_booked_blocks_cannot_be_edited_or_deleted() {
    let app = TestApp::new();

    let res = app
        .post(
            "/api/v1/schedule/blocks",
            json!({
                "id": "b1",
                "fieldId": "court-1",
                "startHour": 10,
                "duration": 3,
                "status": "maintenance",
                "title": "hijack attempt"
            }),
        )
        .await;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let res = app.delete("/api/v1/schedule/blocks/b1").await;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let blocks = parse_body(app.get("/api/v1/schedule/blocks").await).await;
    let b1 = blocks
        .as_array()
        .unwrap()
        .iter()
        .find(|b| b["id"] == "b1")
        .unwrap()
        .clone();
    assert_eq!(b1["status"], "booked");
    assert_eq!(b1["duration"], 2.0);
    assert_eq!(b1["title"], "Booked");
    assert_eq!(b1["bookingId"], "BK-001");
}

#[tokio::test]
async fn test_booked_status_is_not_assignable() {
    let app = TestApp::new();

    let res = app
        .post(
            "/api/v1/schedule/blocks",
            json!({
                "fieldId": "court-1",
                "startHour": 9,
                "duration": 1,
                "status": "booked",
                "title": "fake booking"
            }),
        )
        .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_duration_must_come_from_the_fixed_choices() {
    let app = TestApp::new();

    for duration in [0.5, 5.0, 1.25] {
        let res = app
            .post(
                "/api/v1/schedule/blocks",
                json!({
                    "fieldId": "court-1",
                    "startHour": 9,
                    "duration": duration,
                    "status": "blocked",
                    "title": "x"
                }),
            )
            .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "duration {}", duration);
    }
}

#[tokio::test]
async fn test_grid_renders_spans_covered_and_closed_cells() {
    let app = TestApp::new();

    let res = app.get("/api/v1/venues/field-1/schedule?date=2025-12-23").await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;

    assert_eq!(body["venueId"], "field-1");
    assert_eq!(body["date"], "2025-12-23");
    assert_eq!(body["operatingHours"]["open"], 8);

    // field-1 is configured with three courts.
    let rows = body["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["court"]["id"], "court-1");

    // 18 display columns, 06:00 through 23:00.
    let cells = rows[0]["cells"].as_array().unwrap();
    assert_eq!(cells.len(), 18);
    let cell = |hour: usize| &cells[hour - 6];

    assert_eq!(cell(6)["kind"], "closed");
    assert_eq!(cell(7)["kind"], "closed");
    assert_eq!(cell(9)["kind"], "open");

    assert_eq!(cell(10)["kind"], "blockStart");
    assert_eq!(cell(10)["label"], "Booked");
    assert_eq!(cell(10)["durationLabel"], "2 hr");
    assert_eq!(cell(10)["color"], "emerald");
    assert_eq!(cell(10)["width"], "calc(200% + 1px - 8px)");

    assert_eq!(cell(11)["kind"], "covered");
    assert_eq!(cell(11)["blockId"], "b1");

    assert_eq!(cell(12)["kind"], "open");

    // The maintenance block sits on court-2 only.
    let row2 = rows[1]["cells"].as_array().unwrap();
    assert_eq!(row2[14 - 6]["kind"], "blockStart");
    assert_eq!(row2[14 - 6]["label"], "Repairs");
    assert_eq!(row2[14 - 6]["color"], "orange");
    assert_eq!(rows[0]["cells"][14 - 6]["kind"], "open");
}

#[tokio::test]
async fn test_grid_rejects_malformed_date() {
    let app = TestApp::new();
    let res = app.get("/api/v1/venues/field-1/schedule?date=23-12-2025").await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_operating_hours_replace_wholesale() {
    let app = TestApp::new();

    let hours = parse_body(app.get("/api/v1/schedule/hours").await).await;
    assert_eq!(hours, json!({ "open": 8, "close": 22, "isClosed": false }));

    let res = app
        .put("/api/v1/schedule/hours", json!({ "open": 6, "close": 23, "isClosed": false }))
        .await;
    assert_eq!(res.status(), StatusCode::OK);

    // 06:00 cells become interactive.
    let outcome = resolve(&app, "court-1", 6).await;
    assert_eq!(outcome["kind"], "draft");

    let res = app
        .put("/api/v1/schedule/hours", json!({ "open": 24, "close": 22, "isClosed": false }))
        .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = app
        .put("/api/v1/schedule/hours", json!({ "open": 8, "close": 25, "isClosed": false }))
        .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_inverted_window_is_accepted_and_renders_closed() {
    let app = TestApp::new();

    let res = app
        .put("/api/v1/schedule/hours", json!({ "open": 20, "close": 8, "isClosed": false }))
        .await;
    assert_eq!(res.status(), StatusCode::OK);

    for hour in [8, 12, 20, 23] {
        let outcome = resolve(&app, "court-1", hour).await;
        assert_eq!(outcome["kind"], "outOfHours", "hour {}", hour);
    }
}
