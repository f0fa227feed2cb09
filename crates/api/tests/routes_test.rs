mod test_utils;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use slotbook_core::models::booking::{Booking, BookingStatus, BookingWithUser};
use uuid::Uuid;

use crate::test_utils::{slot, TestContext};

fn start_date_body() -> Value {
    json!({ "startDate": slot() })
}

#[tokio::test]
async fn test_health_reports_slot_capacity() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server.get("/health").await;

    response.assert_status_ok();
    response.assert_json(&json!({ "status": "ok", "slotCapacity": 30 }));
}

#[tokio::test]
async fn test_verify_endpoint() {
    let ctx = TestContext::new();
    let user = ctx.user().await;
    let server = ctx.server();

    let response = server
        .post(&format!("/api/users/{}/bookings/verify", user.id))
        .json(&start_date_body())
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({ "verify": true, "message": "30 slots available" }));
}

#[tokio::test]
async fn test_booking_lifecycle_over_http() {
    let ctx = TestContext::new();
    let user = ctx.user().await;
    let server = ctx.server();

    // Create
    let response = server
        .post(&format!("/api/users/{}/bookings", user.id))
        .json(&start_date_body())
        .await;
    response.assert_status_ok();
    let created: Booking = response.json();
    assert_eq!(created.status, BookingStatus::Pending);
    assert_eq!(created.start_date, slot());

    let raw: Value = response.json();
    assert_eq!(raw["status"], json!("pending"));
    assert_eq!(raw["user"], json!(user.id));

    // Pending until attendance is recorded
    let pending: Vec<Booking> = server
        .get(&format!("/api/users/{}/bookings/pending", user.id))
        .await
        .json();
    assert_eq!(pending, vec![created.clone()]);

    let settled: Vec<Booking> = server
        .get(&format!("/api/users/{}/bookings", user.id))
        .await
        .json();
    assert!(settled.is_empty());

    // Mark as not attended
    let response = server
        .put(&format!("/api/bookings/{}/no-attended", created.id))
        .await;
    response.assert_status_ok();
    let updated: Booking = response.json();
    assert_eq!(updated.status, BookingStatus::NoConfirmed);

    let settled: Vec<Booking> = server
        .get(&format!("/api/users/{}/bookings", user.id))
        .await
        .json();
    assert_eq!(settled.len(), 1);
    assert_eq!(settled[0].status, BookingStatus::NoConfirmed);

    let history: Vec<Booking> = server
        .get(&format!("/api/users/{}/bookings/history", user.id))
        .await
        .json();
    assert_eq!(history.len(), 1);
}

#[tokio::test]
async fn test_attended_and_cancel_endpoints() {
    let ctx = TestContext::new();
    let user = ctx.user().await;
    let booking = ctx.service.create(user.id, slot()).await.unwrap();
    let server = ctx.server();

    let confirmed: Booking = server
        .put(&format!("/api/bookings/{}/attended", booking.id))
        .await
        .json();
    assert_eq!(confirmed.status, BookingStatus::Confirmed);

    let cancelled: Booking = server
        .put(&format!("/api/bookings/{}/cancel", booking.id))
        .await
        .json();
    assert_eq!(cancelled.status, BookingStatus::Cancelled);
}

#[tokio::test]
async fn test_transition_on_unknown_booking_returns_null() {
    let ctx = TestContext::new();
    let server = ctx.server();

    for action in ["attended", "no-attended", "cancel"] {
        let response = server
            .put(&format!("/api/bookings/{}/{}", Uuid::new_v4(), action))
            .await;

        response.assert_status_ok();
        response.assert_json(&Value::Null);
    }
}

#[tokio::test]
async fn test_slot_listings_embed_users() {
    let ctx = TestContext::new();
    let attending = ctx.user().await;
    let cancelling = ctx.user().await;
    ctx.service.create(attending.id, slot()).await.unwrap();
    let cancelled = ctx.service.create(cancelling.id, slot()).await.unwrap();
    ctx.service.cancel(cancelled.id).await.unwrap();
    let server = ctx.server();

    let history: Vec<BookingWithUser> = server
        .post("/api/slots/history")
        .json(&start_date_body())
        .await
        .json();
    assert_eq!(history.len(), 2);

    let response = server
        .post("/api/slots/attendance")
        .json(&start_date_body())
        .await;
    response.assert_status_ok();
    let raw: Value = response.json();
    assert_eq!(raw[0]["user"]["email"], json!(attending.email));
    assert_eq!(raw[0]["user"]["name"], json!(attending.name));

    let roster: Vec<BookingWithUser> = response.json();
    assert_eq!(roster.len(), 1);
    assert_eq!(roster[0].user.id, attending.id);
}

#[tokio::test]
async fn test_missing_start_date_is_rejected() {
    let ctx = TestContext::new();
    let user = ctx.user().await;
    let server = ctx.server();

    let response = server
        .post(&format!("/api/users/{}/bookings", user.id))
        .json(&json!({}))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("startDate"));
    assert!(ctx.notifier.sent().await.is_empty());
    assert!(ctx.store.bookings().await.is_empty());
}

#[tokio::test]
async fn test_malformed_start_date_is_rejected() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server
        .post("/api/slots/history")
        .json(&json!({ "startDate": "next monday" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_malformed_user_id_is_rejected() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server.get("/api/users/not-a-uuid/bookings").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body.get("error").is_some());
}

#[tokio::test]
async fn test_create_for_unknown_user_is_not_found() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server
        .post(&format!("/api/users/{}/bookings", Uuid::new_v4()))
        .json(&start_date_body())
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}
