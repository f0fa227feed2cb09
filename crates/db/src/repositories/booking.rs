use crate::{
    models::{DbBooking, DbBookingWithUser},
    DbPool,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use eyre::Result;
use slotbook_core::{
    models::booking::{Booking, BookingStatus, BookingWithUser, NewBooking},
    repository::{BookingRepository, StatusFilter},
};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

const BOOKING_COLUMNS: &str = "id, user_id, start_date, end_date, status, created_at, updated_at";

/// Splits a status filter into the `(status = $n, status <> $m)` bind pair
/// used by every filtered query. A `NULL` bind disables that side.
fn status_binds(filter: StatusFilter) -> (Option<&'static str>, Option<&'static str>) {
    match filter {
        StatusFilter::Any => (None, None),
        StatusFilter::Is(status) => (Some(status.as_str()), None),
        StatusFilter::IsNot(status) => (None, Some(status.as_str())),
    }
}

pub async fn insert_booking(pool: &Pool<Postgres>, booking: &NewBooking) -> Result<DbBooking> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let row = sqlx::query_as::<_, DbBooking>(&format!(
        r#"
        INSERT INTO bookings (id, user_id, start_date, end_date, status, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $6)
        RETURNING {BOOKING_COLUMNS}
        "#
    ))
    .bind(id)
    .bind(booking.user_id)
    .bind(booking.start_date)
    .bind(booking.end_date)
    .bind(booking.status.as_str())
    .bind(now)
    .fetch_one(pool)
    .await?;

    tracing::debug!("Booking inserted: id={}, user_id={}", row.id, row.user_id);
    Ok(row)
}

pub async fn get_bookings_by_user_id(
    pool: &Pool<Postgres>,
    user_id: Uuid,
    filter: StatusFilter,
) -> Result<Vec<DbBooking>> {
    let (status_is, status_is_not) = status_binds(filter);

    let rows = sqlx::query_as::<_, DbBooking>(&format!(
        r#"
        SELECT {BOOKING_COLUMNS}
        FROM bookings
        WHERE user_id = $1
          AND ($2::text IS NULL OR status = $2)
          AND ($3::text IS NULL OR status <> $3)
        ORDER BY created_at ASC
        "#
    ))
    .bind(user_id)
    .bind(status_is)
    .bind(status_is_not)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

pub async fn get_bookings_with_user_by_start_date(
    pool: &Pool<Postgres>,
    start_date: DateTime<Utc>,
    filter: StatusFilter,
) -> Result<Vec<DbBookingWithUser>> {
    let (status_is, status_is_not) = status_binds(filter);

    let rows = sqlx::query_as::<_, DbBookingWithUser>(
        r#"
        SELECT b.id, b.user_id, b.start_date, b.end_date, b.status, b.created_at, b.updated_at,
               u.email AS user_email, u.name AS user_name,
               u.personal_id AS user_personal_id, u.created_at AS user_created_at
        FROM bookings b
        JOIN users u ON u.id = b.user_id
        WHERE b.start_date = $1
          AND ($2::text IS NULL OR b.status = $2)
          AND ($3::text IS NULL OR b.status <> $3)
        ORDER BY b.created_at ASC
        "#,
    )
    .bind(start_date)
    .bind(status_is)
    .bind(status_is_not)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

pub async fn count_bookings_by_start_date(
    pool: &Pool<Postgres>,
    start_date: DateTime<Utc>,
    filter: StatusFilter,
) -> Result<i64> {
    let (status_is, status_is_not) = status_binds(filter);

    let count = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*)
        FROM bookings
        WHERE start_date = $1
          AND ($2::text IS NULL OR status = $2)
          AND ($3::text IS NULL OR status <> $3)
        "#,
    )
    .bind(start_date)
    .bind(status_is)
    .bind(status_is_not)
    .fetch_one(pool)
    .await?;

    tracing::debug!("Counted {} bookings for slot {}", count, start_date);
    Ok(count)
}

pub async fn get_booking_by_user_and_start_date(
    pool: &Pool<Postgres>,
    user_id: Uuid,
    start_date: DateTime<Utc>,
    filter: StatusFilter,
) -> Result<Option<DbBooking>> {
    let (status_is, status_is_not) = status_binds(filter);

    let row = sqlx::query_as::<_, DbBooking>(&format!(
        r#"
        SELECT {BOOKING_COLUMNS}
        FROM bookings
        WHERE user_id = $1
          AND start_date = $2
          AND ($3::text IS NULL OR status = $3)
          AND ($4::text IS NULL OR status <> $4)
        LIMIT 1
        "#
    ))
    .bind(user_id)
    .bind(start_date)
    .bind(status_is)
    .bind(status_is_not)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

pub async fn update_booking_status(
    pool: &Pool<Postgres>,
    id: Uuid,
    status: BookingStatus,
) -> Result<Option<DbBooking>> {
    let row = sqlx::query_as::<_, DbBooking>(&format!(
        r#"
        UPDATE bookings
        SET status = $2, updated_at = NOW()
        WHERE id = $1
        RETURNING {BOOKING_COLUMNS}
        "#
    ))
    .bind(id)
    .bind(status.as_str())
    .fetch_optional(pool)
    .await?;

    match &row {
        Some(_) => tracing::debug!("Booking status updated: id={}, status={}", id, status),
        None => tracing::debug!("Booking not found for status update: id={}", id),
    }

    Ok(row)
}

/// PostgreSQL-backed [`BookingRepository`].
#[derive(Debug, Clone)]
pub struct PgBookingRepository {
    pool: DbPool,
}

impl PgBookingRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingRepository for PgBookingRepository {
    async fn find_by_user(&self, user_id: Uuid, filter: StatusFilter) -> Result<Vec<Booking>> {
        get_bookings_by_user_id(&self.pool, user_id, filter)
            .await?
            .into_iter()
            .map(Booking::try_from)
            .collect()
    }

    async fn find_by_start_date(
        &self,
        start_date: DateTime<Utc>,
        filter: StatusFilter,
    ) -> Result<Vec<BookingWithUser>> {
        get_bookings_with_user_by_start_date(&self.pool, start_date, filter)
            .await?
            .into_iter()
            .map(BookingWithUser::try_from)
            .collect()
    }

    async fn count_by_start_date(
        &self,
        start_date: DateTime<Utc>,
        filter: StatusFilter,
    ) -> Result<i64> {
        count_bookings_by_start_date(&self.pool, start_date, filter).await
    }

    async fn find_one_by_user_and_start_date(
        &self,
        user_id: Uuid,
        start_date: DateTime<Utc>,
        filter: StatusFilter,
    ) -> Result<Option<Booking>> {
        get_booking_by_user_and_start_date(&self.pool, user_id, start_date, filter)
            .await?
            .map(Booking::try_from)
            .transpose()
    }

    async fn update_status(&self, id: Uuid, status: BookingStatus) -> Result<Option<Booking>> {
        update_booking_status(&self.pool, id, status)
            .await?
            .map(Booking::try_from)
            .transpose()
    }

    async fn insert(&self, booking: NewBooking) -> Result<Booking> {
        insert_booking(&self.pool, &booking).await?.try_into()
    }
}
