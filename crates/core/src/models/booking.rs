use std::{fmt, str::FromStr};

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    errors::{BookingError, BookingResult},
    models::user::User,
};

/// Length of every reservation slot.
pub const SLOT_DURATION_HOURS: i64 = 1;

/// Lifecycle status of a booking.
///
/// Bookings start as `Pending`; the other three values are reached through the
/// attendance and cancellation operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
    NoConfirmed,
}

impl BookingStatus {
    pub const ALL: [BookingStatus; 4] = [
        BookingStatus::Pending,
        BookingStatus::Confirmed,
        BookingStatus::Cancelled,
        BookingStatus::NoConfirmed,
    ];

    /// Stored and wire representation of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::NoConfirmed => "noConfirmed",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BookingStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| BookingError::Validation(format!("Unknown booking status: {}", s)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: Uuid,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub status: BookingStatus,
    pub user: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A booking whose `user` reference has been resolved to the full user record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingWithUser {
    pub id: Uuid,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub status: BookingStatus,
    pub user: User,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A booking that has not been persisted yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBooking {
    pub user_id: Uuid,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub status: BookingStatus,
}

impl NewBooking {
    /// Builds a pending booking covering the slot that starts at `start_date`.
    pub fn pending(user_id: Uuid, start_date: DateTime<Utc>) -> Self {
        Self {
            user_id,
            start_date,
            end_date: start_date + Duration::hours(SLOT_DURATION_HOURS),
            status: BookingStatus::Pending,
        }
    }
}

/// Payload shared by every operation keyed by a slot start date.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub start_date: Option<DateTime<Utc>>,
}

impl CreateBookingRequest {
    pub fn new(start_date: DateTime<Utc>) -> Self {
        Self {
            start_date: Some(start_date),
        }
    }

    /// Returns the requested slot, rejecting payloads without one.
    pub fn start_date(&self) -> BookingResult<DateTime<Utc>> {
        self.start_date
            .ok_or_else(|| BookingError::Validation("startDate must not be empty".to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyResponse {
    pub verify: bool,
    pub message: String,
}

impl VerifyResponse {
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            verify: false,
            message: message.into(),
        }
    }
}
