use chrono::{Duration, TimeZone, Utc};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{from_str, json, to_string, to_value};
use serde_test::{assert_tokens, Token};
use slotbook_core::{
    errors::BookingError,
    models::{
        booking::{
            Booking, BookingStatus, BookingWithUser, CreateBookingRequest, NewBooking,
            VerifyResponse,
        },
        user::User,
    },
    repository::StatusFilter,
};
use uuid::Uuid;

fn user(personal_id: Option<&str>) -> User {
    User {
        id: Uuid::new_v4(),
        email: "ana@example.com".to_string(),
        name: "Ana".to_string(),
        personal_id: personal_id.map(str::to_string),
        created_at: Utc::now(),
    }
}

#[test]
fn test_status_wire_tokens() {
    assert_tokens(
        &BookingStatus::Pending,
        &[Token::UnitVariant { name: "BookingStatus", variant: "pending" }],
    );
    assert_tokens(
        &BookingStatus::NoConfirmed,
        &[Token::UnitVariant { name: "BookingStatus", variant: "noConfirmed" }],
    );
}

#[rstest]
#[case("pending", BookingStatus::Pending)]
#[case("confirmed", BookingStatus::Confirmed)]
#[case("cancelled", BookingStatus::Cancelled)]
#[case("noConfirmed", BookingStatus::NoConfirmed)]
fn test_status_round_trips_through_str(#[case] raw: &str, #[case] status: BookingStatus) {
    assert_eq!(raw.parse::<BookingStatus>().unwrap(), status);
    assert_eq!(status.to_string(), raw);
}

#[test]
fn test_unknown_status_is_rejected() {
    let err = "attended".parse::<BookingStatus>().unwrap_err();
    assert!(matches!(err, BookingError::Validation(_)));
}

#[test]
fn test_default_status_is_pending() {
    assert_eq!(BookingStatus::default(), BookingStatus::Pending);
}

#[test]
fn test_new_booking_ends_one_hour_after_start() {
    let start = Utc.with_ymd_and_hms(2026, 1, 5, 20, 0, 0).unwrap();
    let booking = NewBooking::pending(Uuid::new_v4(), start);

    assert_eq!(booking.end_date, start + Duration::hours(1));
    assert_eq!(booking.status, BookingStatus::Pending);
}

#[test]
fn test_booking_serializes_camel_case() {
    let start = Utc.with_ymd_and_hms(2026, 1, 5, 20, 0, 0).unwrap();
    let booking = Booking {
        id: Uuid::new_v4(),
        start_date: start,
        end_date: start + Duration::hours(1),
        status: BookingStatus::NoConfirmed,
        user: Uuid::new_v4(),
        created_at: start,
        updated_at: start,
    };

    let value = to_value(&booking).expect("Failed to serialize booking");
    assert_eq!(value["status"], json!("noConfirmed"));
    assert_eq!(value["startDate"], json!("2026-01-05T20:00:00Z"));
    assert_eq!(value["endDate"], json!("2026-01-05T21:00:00Z"));
    assert_eq!(value["user"], json!(booking.user.to_string()));
    assert!(value.get("createdAt").is_some());
    assert!(value.get("updatedAt").is_some());
}

#[test]
fn test_booking_with_user_embeds_owner() {
    let owner = user(Some("2020123"));
    let start = Utc::now();
    let booking = BookingWithUser {
        id: Uuid::new_v4(),
        start_date: start,
        end_date: start + Duration::hours(1),
        status: BookingStatus::Pending,
        user: owner.clone(),
        created_at: start,
        updated_at: start,
    };

    let json = to_string(&booking).expect("Failed to serialize booking");
    let deserialized: BookingWithUser = from_str(&json).expect("Failed to deserialize booking");

    assert_eq!(deserialized.user, owner);
    assert!(json.contains("\"personalId\":\"2020123\""));
}

#[rstest]
#[case(Some("2020123"), true)]
#[case(Some(""), false)]
#[case(None, false)]
fn test_profile_completeness(#[case] personal_id: Option<&str>, #[case] complete: bool) {
    assert_eq!(user(personal_id).has_complete_profile(), complete);
}

#[test]
fn test_create_booking_request_requires_start_date() {
    let request: CreateBookingRequest = from_str("{}").expect("Failed to deserialize request");
    assert!(matches!(
        request.start_date(),
        Err(BookingError::Validation(_))
    ));

    let request: CreateBookingRequest =
        from_str(r#"{"startDate":"2026-01-05T20:00:00Z"}"#).expect("Failed to deserialize request");
    assert_eq!(
        request.start_date().unwrap(),
        Utc.with_ymd_and_hms(2026, 1, 5, 20, 0, 0).unwrap()
    );
}

#[test]
fn test_verify_response_shape() {
    let value = to_value(VerifyResponse::rejected("no slots available")).unwrap();
    assert_eq!(value, json!({ "verify": false, "message": "no slots available" }));
}

#[rstest]
#[case(StatusFilter::Any, BookingStatus::Cancelled, true)]
#[case(StatusFilter::Is(BookingStatus::Pending), BookingStatus::Pending, true)]
#[case(StatusFilter::Is(BookingStatus::Pending), BookingStatus::Confirmed, false)]
#[case(StatusFilter::IsNot(BookingStatus::Cancelled), BookingStatus::Cancelled, false)]
#[case(StatusFilter::IsNot(BookingStatus::Cancelled), BookingStatus::NoConfirmed, true)]
fn test_status_filter(
    #[case] filter: StatusFilter,
    #[case] status: BookingStatus,
    #[case] expected: bool,
) {
    assert_eq!(filter.matches(status), expected);
}
