//! In-memory store.
//!
//! Implements both store ports over plain vectors so service-level tests can
//! run whole scenarios without PostgreSQL.

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use eyre::{eyre, Result};
use slotbook_core::{
    models::{
        booking::{Booking, BookingStatus, BookingWithUser, NewBooking},
        user::User,
    },
    repository::{BookingRepository, StatusFilter, UserRepository},
};
use tokio::sync::Mutex;
use uuid::Uuid;

#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    bookings: Arc<Mutex<Vec<Booking>>>,
    users: Arc<Mutex<HashMap<Uuid, User>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_user(&self, user: User) {
        self.users.lock().await.insert(user.id, user);
    }

    /// Every stored booking, in insertion order.
    pub async fn bookings(&self) -> Vec<Booking> {
        self.bookings.lock().await.clone()
    }
}

#[async_trait]
impl BookingRepository for InMemoryStore {
    async fn find_by_user(&self, user_id: Uuid, filter: StatusFilter) -> Result<Vec<Booking>> {
        Ok(self
            .bookings
            .lock()
            .await
            .iter()
            .filter(|booking| booking.user == user_id && filter.matches(booking.status))
            .cloned()
            .collect())
    }

    async fn find_by_start_date(
        &self,
        start_date: DateTime<Utc>,
        filter: StatusFilter,
    ) -> Result<Vec<BookingWithUser>> {
        let bookings = self.bookings.lock().await;
        let users = self.users.lock().await;

        bookings
            .iter()
            .filter(|booking| booking.start_date == start_date && filter.matches(booking.status))
            .map(|booking| -> Result<BookingWithUser> {
                let user = users
                    .get(&booking.user)
                    .cloned()
                    .ok_or_else(|| eyre!("Booking {} references missing user {}", booking.id, booking.user))?;

                Ok(BookingWithUser {
                    id: booking.id,
                    start_date: booking.start_date,
                    end_date: booking.end_date,
                    status: booking.status,
                    user,
                    created_at: booking.created_at,
                    updated_at: booking.updated_at,
                })
            })
            .collect()
    }

    async fn count_by_start_date(
        &self,
        start_date: DateTime<Utc>,
        filter: StatusFilter,
    ) -> Result<i64> {
        let count = self
            .bookings
            .lock()
            .await
            .iter()
            .filter(|booking| booking.start_date == start_date && filter.matches(booking.status))
            .count();

        Ok(i64::try_from(count)?)
    }

    async fn find_one_by_user_and_start_date(
        &self,
        user_id: Uuid,
        start_date: DateTime<Utc>,
        filter: StatusFilter,
    ) -> Result<Option<Booking>> {
        Ok(self
            .bookings
            .lock()
            .await
            .iter()
            .find(|booking| {
                booking.user == user_id
                    && booking.start_date == start_date
                    && filter.matches(booking.status)
            })
            .cloned())
    }

    async fn update_status(&self, id: Uuid, status: BookingStatus) -> Result<Option<Booking>> {
        let mut bookings = self.bookings.lock().await;

        Ok(bookings.iter_mut().find(|booking| booking.id == id).map(|booking| {
            booking.status = status;
            booking.updated_at = Utc::now();
            booking.clone()
        }))
    }

    async fn insert(&self, booking: NewBooking) -> Result<Booking> {
        if !self.users.lock().await.contains_key(&booking.user_id) {
            return Err(eyre!("Foreign key violation: user {} does not exist", booking.user_id));
        }

        let now = Utc::now();
        let booking = Booking {
            id: Uuid::new_v4(),
            start_date: booking.start_date,
            end_date: booking.end_date,
            status: booking.status,
            user: booking.user_id,
            created_at: now,
            updated_at: now,
        };

        self.bookings.lock().await.push(booking.clone());
        Ok(booking)
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>> {
        Ok(self.users.lock().await.get(&id).cloned())
    }
}
