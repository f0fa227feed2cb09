use chrono::{DateTime, Utc};
use eyre::{eyre, Result};
use serde::{Deserialize, Serialize};
use slotbook_core::models::{
    booking::{Booking, BookingStatus, BookingWithUser},
    user::User,
};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbUser {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub personal_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbBooking {
    pub id: Uuid,
    pub user_id: Uuid,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A booking row joined with the columns of its owning user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbBookingWithUser {
    pub id: Uuid,
    pub user_id: Uuid,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub user_email: String,
    pub user_name: String,
    pub user_personal_id: Option<String>,
    pub user_created_at: DateTime<Utc>,
}

fn parse_status(raw: &str) -> Result<BookingStatus> {
    raw.parse()
        .map_err(|_| eyre!("Corrupt booking row: unknown status '{}'", raw))
}

impl From<DbUser> for User {
    fn from(row: DbUser) -> Self {
        User {
            id: row.id,
            email: row.email,
            name: row.name,
            personal_id: row.personal_id,
            created_at: row.created_at,
        }
    }
}

impl TryFrom<DbBooking> for Booking {
    type Error = eyre::Report;

    fn try_from(row: DbBooking) -> Result<Self> {
        Ok(Booking {
            id: row.id,
            start_date: row.start_date,
            end_date: row.end_date,
            status: parse_status(&row.status)?,
            user: row.user_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

impl TryFrom<DbBookingWithUser> for BookingWithUser {
    type Error = eyre::Report;

    fn try_from(row: DbBookingWithUser) -> Result<Self> {
        Ok(BookingWithUser {
            id: row.id,
            start_date: row.start_date,
            end_date: row.end_date,
            status: parse_status(&row.status)?,
            user: User {
                id: row.user_id,
                email: row.user_email,
                name: row.user_name,
                personal_id: row.user_personal_id,
                created_at: row.user_created_at,
            },
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}
