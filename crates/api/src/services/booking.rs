//! # Booking Service
//!
//! Business rules for creating, verifying, listing and transitioning
//! bookings. Storage and email delivery are reached only through the
//! [`BookingRepository`], [`UserRepository`] and [`Notifier`] ports, so the
//! service runs unchanged against PostgreSQL or the in-memory test store.
//!
//! ## Verification
//!
//! [`BookingService::verify`] is advisory: it reports whether the user could
//! book the slot right now but reserves nothing. [`BookingService::create`]
//! does not repeat the checks, so two callers that verify the same slot
//! concurrently can both create and push the slot past its capacity.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::json;
use slotbook_core::{
    errors::{BookingError, BookingResult},
    models::{
        booking::{Booking, BookingStatus, BookingWithUser, NewBooking, VerifyResponse},
        user::User,
    },
    repository::{BookingRepository, StatusFilter, UserRepository},
};
use slotbook_mailer::{locale, templates, Notification, Notifier};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

/// Default number of non-cancelled bookings a slot accepts.
pub const DEFAULT_SLOT_CAPACITY: i64 = 30;

pub const PROFILE_INCOMPLETE_MESSAGE: &str = "profile incomplete";
pub const DUPLICATE_BOOKING_MESSAGE: &str = "duplicate booking for this date";
pub const NO_SLOTS_MESSAGE: &str = "no slots available";
pub const BOOKING_CREATED_SUBJECT: &str = "Has realizado una reserva";

/// Tunables for [`BookingService`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingConfig {
    /// Maximum number of non-cancelled bookings per slot
    pub slot_capacity: i64,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            slot_capacity: DEFAULT_SLOT_CAPACITY,
        }
    }
}

#[derive(Clone)]
pub struct BookingService {
    bookings: Arc<dyn BookingRepository>,
    users: Arc<dyn UserRepository>,
    notifier: Arc<dyn Notifier>,
    config: BookingConfig,
}

impl BookingService {
    pub fn new(
        bookings: Arc<dyn BookingRepository>,
        users: Arc<dyn UserRepository>,
        notifier: Arc<dyn Notifier>,
        config: BookingConfig,
    ) -> Self {
        Self {
            bookings,
            users,
            notifier,
            config,
        }
    }

    pub fn config(&self) -> BookingConfig {
        self.config
    }

    /// Bookings of `user_id` that have left the pending state.
    #[instrument(skip(self))]
    pub async fn find_all(&self, user_id: Uuid) -> BookingResult<Vec<Booking>> {
        Ok(self
            .bookings
            .find_by_user(user_id, StatusFilter::IsNot(BookingStatus::Pending))
            .await?)
    }

    /// Bookings of `user_id` that are still pending.
    #[instrument(skip(self))]
    pub async fn find_pendings(&self, user_id: Uuid) -> BookingResult<Vec<Booking>> {
        Ok(self
            .bookings
            .find_by_user(user_id, StatusFilter::Is(BookingStatus::Pending))
            .await?)
    }

    /// Every booking of `user_id`, whatever its status.
    #[instrument(skip(self))]
    pub async fn history_by_user(&self, user_id: Uuid) -> BookingResult<Vec<Booking>> {
        Ok(self.bookings.find_by_user(user_id, StatusFilter::Any).await?)
    }

    /// Every booking for the slot, with owners resolved.
    #[instrument(skip(self))]
    pub async fn history(&self, start_date: DateTime<Utc>) -> BookingResult<Vec<BookingWithUser>> {
        Ok(self
            .bookings
            .find_by_start_date(start_date, StatusFilter::Any)
            .await?)
    }

    /// Attendance roster: pending bookings for the slot, with owners resolved.
    #[instrument(skip(self))]
    pub async fn register_attendance(
        &self,
        start_date: DateTime<Utc>,
    ) -> BookingResult<Vec<BookingWithUser>> {
        Ok(self
            .bookings
            .find_by_start_date(start_date, StatusFilter::Is(BookingStatus::Pending))
            .await?)
    }

    /// Checks whether `user_id` may book the slot starting at `start_date`.
    ///
    /// Checks run in a fixed order and the first failing one decides the
    /// message: incomplete profile, then duplicate booking, then capacity.
    ///
    /// # Errors
    ///
    /// Fails with [`BookingError::NotFound`] if the user does not exist, or
    /// with [`BookingError::Database`] on any store failure.
    #[instrument(skip(self))]
    pub async fn verify(
        &self,
        user_id: Uuid,
        start_date: DateTime<Utc>,
    ) -> BookingResult<VerifyResponse> {
        let active = StatusFilter::IsNot(BookingStatus::Cancelled);

        let count = self.bookings.count_by_start_date(start_date, active).await?;
        let user = self.load_user(user_id).await?;

        if !user.has_complete_profile() {
            debug!("Verification rejected: incomplete profile");
            return Ok(VerifyResponse::rejected(PROFILE_INCOMPLETE_MESSAGE));
        }

        let existing = self
            .bookings
            .find_one_by_user_and_start_date(user_id, start_date, active)
            .await?;

        if existing.is_some() {
            debug!("Verification rejected: duplicate booking");
            return Ok(VerifyResponse::rejected(DUPLICATE_BOOKING_MESSAGE));
        }

        let capacity = self.config.slot_capacity;
        if count < capacity {
            Ok(VerifyResponse {
                verify: true,
                message: format!("{} slots available", capacity - count),
            })
        } else {
            debug!(count, capacity, "Verification rejected: slot is full");
            Ok(VerifyResponse::rejected(NO_SLOTS_MESSAGE))
        }
    }

    /// Creates a pending one-hour booking and emails the user about it.
    ///
    /// The email goes out before the booking is stored; if delivery fails the
    /// booking is not persisted. Capacity and duplicates are not re-checked.
    ///
    /// # Errors
    ///
    /// - [`BookingError::NotFound`] if the user does not exist
    /// - [`BookingError::Notification`] if the confirmation email fails
    /// - [`BookingError::Database`] on any store failure
    #[instrument(skip(self))]
    pub async fn create(&self, user_id: Uuid, start_date: DateTime<Utc>) -> BookingResult<Booking> {
        let new_booking = NewBooking::pending(user_id, start_date);
        let user = self.load_user(user_id).await?;

        let notification = Notification {
            to: user.email.clone(),
            subject: BOOKING_CREATED_SUBJECT.to_string(),
            template: templates::BOOKING_DONE.to_string(),
            data: json!({
                "name": user.name,
                "formattedDate": locale::format_booking_date(start_date),
            }),
        };

        self.notifier
            .send_notification(notification)
            .await
            .map_err(|e| {
                warn!(error = %e, "Booking confirmation email failed; booking not stored");
                BookingError::Notification(e.to_string())
            })?;

        let booking = self.bookings.insert(new_booking).await?;
        info!(booking_id = %booking.id, "Booking created");

        Ok(booking)
    }

    /// Marks booking `id` as attended. Returns `None` if it does not exist.
    pub async fn attended(&self, id: Uuid) -> BookingResult<Option<Booking>> {
        self.set_status(id, BookingStatus::Confirmed).await
    }

    /// Marks booking `id` as not attended. Returns `None` if it does not exist.
    pub async fn no_attended(&self, id: Uuid) -> BookingResult<Option<Booking>> {
        self.set_status(id, BookingStatus::NoConfirmed).await
    }

    /// Cancels booking `id`. Returns `None` if it does not exist.
    pub async fn cancel(&self, id: Uuid) -> BookingResult<Option<Booking>> {
        self.set_status(id, BookingStatus::Cancelled).await
    }

    // Unconditional: the current status is not consulted.
    #[instrument(skip(self))]
    async fn set_status(&self, id: Uuid, status: BookingStatus) -> BookingResult<Option<Booking>> {
        let booking = self.bookings.update_status(id, status).await?;

        match &booking {
            Some(_) => info!("Booking status changed"),
            None => debug!("No booking to update"),
        }

        Ok(booking)
    }

    async fn load_user(&self, user_id: Uuid) -> BookingResult<User> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| BookingError::NotFound(format!("User with ID {} not found", user_id)))
    }
}
