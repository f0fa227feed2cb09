//! Store ports.
//!
//! The booking service only talks to storage through these traits. The
//! PostgreSQL implementations live in `slotbook-db`, as do the mocks and the
//! in-memory store used by tests.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use eyre::Result;
use uuid::Uuid;

use crate::models::{
    booking::{Booking, BookingStatus, BookingWithUser, NewBooking},
    user::User,
};

/// Restricts a booking query by status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    Any,
    Is(BookingStatus),
    IsNot(BookingStatus),
}

impl StatusFilter {
    pub fn matches(&self, status: BookingStatus) -> bool {
        match self {
            StatusFilter::Any => true,
            StatusFilter::Is(expected) => status == *expected,
            StatusFilter::IsNot(excluded) => status != *excluded,
        }
    }
}

#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Bookings owned by `user_id`, oldest first.
    async fn find_by_user(&self, user_id: Uuid, filter: StatusFilter) -> Result<Vec<Booking>>;

    /// Bookings for the slot starting at `start_date`, joined with their owners.
    async fn find_by_start_date(
        &self,
        start_date: DateTime<Utc>,
        filter: StatusFilter,
    ) -> Result<Vec<BookingWithUser>>;

    async fn count_by_start_date(
        &self,
        start_date: DateTime<Utc>,
        filter: StatusFilter,
    ) -> Result<i64>;

    async fn find_one_by_user_and_start_date(
        &self,
        user_id: Uuid,
        start_date: DateTime<Utc>,
        filter: StatusFilter,
    ) -> Result<Option<Booking>>;

    /// Overwrites the status of booking `id`. Returns `None` when no such
    /// booking exists.
    async fn update_status(&self, id: Uuid, status: BookingStatus) -> Result<Option<Booking>>;

    async fn insert(&self, booking: NewBooking) -> Result<Booking>;
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>>;
}
