use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use slotbook_core::models::booking::{BookingWithUser, CreateBookingRequest};
use std::sync::Arc;

use crate::{middleware::error_handling::AppError, ApiState};

#[axum::debug_handler]
pub async fn history(
    State(state): State<Arc<ApiState>>,
    payload: Result<Json<CreateBookingRequest>, JsonRejection>,
) -> Result<Json<Vec<BookingWithUser>>, AppError> {
    let Json(payload) = payload?;
    let start_date = payload.start_date()?;

    Ok(Json(state.bookings.history(start_date).await?))
}

#[axum::debug_handler]
pub async fn register_attendance(
    State(state): State<Arc<ApiState>>,
    payload: Result<Json<CreateBookingRequest>, JsonRejection>,
) -> Result<Json<Vec<BookingWithUser>>, AppError> {
    let Json(payload) = payload?;
    let start_date = payload.start_date()?;

    Ok(Json(state.bookings.register_attendance(start_date).await?))
}
