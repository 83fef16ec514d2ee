use axum::http::StatusCode;
use serde_json::json;

use crate::test_support;

fn physics_window() -> serde_json::Value {
    json!({
        "id": 11,
        "name": "Physical Sciences",
        "code": "PHS12",
        "startingTime": "2025-06-01T10:00:00.000Z",
        "dueTime": "2025-06-01T12:00:00.000Z",
        "examDate": null,
        "isScheduled": true,
        "isActive": true
    })
}

#[tokio::test]
async fn status_counts_down_to_normalized_start() {
    let ctx = test_support::setup_test_context().await;

    let (status, body) = test_support::post_json(
        &ctx.app,
        "/api/v1/exams/status",
        json!({ "subject": physics_window(), "now": "2025-06-01T07:58:00Z" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["subject_id"], 11);
    assert_eq!(body["state"], "upcoming");
    assert_eq!(body["remaining_seconds"], 120);
    assert_eq!(body["countdown"], "Starts in 00:02:00");
    assert_eq!(body["window"], "Jun 1, 8:00 AM - 10:00 AM");
    assert_eq!(body["evaluated_at"], "2025-06-01T07:58:00Z");
    assert_eq!(body["poll_interval_seconds"], 1);
}

#[tokio::test]
async fn status_is_available_at_the_closing_instant() {
    let ctx = test_support::setup_test_context().await;

    let (status, body) = test_support::post_json(
        &ctx.app,
        "/api/v1/exams/status",
        json!({ "subject": physics_window(), "now": "2025-06-01T10:00:00Z" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["state"], "available");
    assert_eq!(body["countdown"], "Ends in 00:00:00");

    let (_, body) = test_support::post_json(
        &ctx.app,
        "/api/v1/exams/status",
        json!({ "subject": physics_window(), "now": "2025-06-01T10:00:01Z" }),
    )
    .await;
    assert_eq!(body["state"], "expired");
    assert_eq!(body["countdown"], "Expired");
    assert!(body["remaining_seconds"].is_null());
}

#[tokio::test]
async fn status_without_now_uses_server_clock() {
    let ctx = test_support::setup_test_context().await;

    let (status, body) = test_support::post_json(
        &ctx.app,
        "/api/v1/exams/status",
        json!({ "subject": { "id": "reg-9", "isScheduled": false } }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["state"], "not_scheduled");
    assert_eq!(body["countdown"], "Not scheduled yet");
    assert!(body["evaluated_at"].as_str().is_some_and(|value| value.ends_with('Z')));
}

#[tokio::test]
async fn status_rejects_unparseable_timestamps() {
    let ctx = test_support::setup_test_context().await;

    let (status, body) = test_support::post_json(
        &ctx.app,
        "/api/v1/exams/status",
        json!({ "subject": { "id": 1, "dueTime": "next friday" } }),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["status"], 422);
    assert!(body["detail"].as_str().unwrap_or_default().contains("invalid datetime"));
}

#[tokio::test]
async fn board_buckets_subjects() {
    let ctx = test_support::setup_test_context().await;

    let subjects = json!([
        physics_window(),
        {
            "id": 12,
            "name": "Life Sciences",
            "startingTime": "2025-06-01T08:00:00Z",
            "dueTime": "2025-06-01T09:00:00Z",
            "isScheduled": true,
            "isActive": true
        },
        {
            "id": 13,
            "name": "Geography",
            "startingTime": "2025-06-01T08:00:00Z",
            "dueTime": "2025-06-01T12:00:00Z",
            "isScheduled": true,
            "isActive": false
        },
        { "id": 14, "name": "Accounting", "isScheduled": false }
    ]);

    let (status, body) = test_support::post_json(
        &ctx.app,
        "/api/v1/exams/board",
        json!({ "subjects": subjects, "now": "2025-06-01T08:30:00Z" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let ids = |column: &str| -> Vec<i64> {
        body[column]
            .as_array()
            .expect("column")
            .iter()
            .filter_map(|entry| entry["subject_id"].as_i64())
            .collect()
    };
    assert_eq!(ids("not_available"), vec![13, 14]);
    assert_eq!(ids("in_progress"), vec![11]);
    assert_eq!(ids("completed"), vec![12]);
    assert_eq!(body["next_exam"]["subject_id"], 11);
    assert_eq!(body["next_exam"]["countdown"], "Ends in 01:30:00");
}

#[tokio::test]
async fn calendar_lists_exam_days() {
    let ctx = test_support::setup_test_context().await;

    let (status, body) = test_support::post_json(
        &ctx.app,
        "/api/v1/exams/calendar",
        json!({ "subjects": [physics_window()], "year": 2025, "month": 6 }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["days_in_month"], 30);
    assert_eq!(body["days"][0]["day"], 1);
    assert_eq!(body["days"][0]["exams"][0]["code"], "PHS12");
}

#[tokio::test]
async fn calendar_rejects_invalid_month() {
    let ctx = test_support::setup_test_context().await;

    let (status, body) = test_support::post_json(
        &ctx.app,
        "/api/v1/exams/calendar",
        json!({ "subjects": [], "year": 2025, "month": 13 }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap_or_default().contains("month must be between 1 and 12"));
}
