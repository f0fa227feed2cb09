//! # Booking Handlers
//!
//! HTTP bindings for the user-scoped booking operations and the status
//! transitions. Every handler validates its input, delegates to
//! [`BookingService`](crate::services::booking::BookingService) and returns
//! the result as JSON.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Json,
};
use slotbook_core::models::booking::{Booking, CreateBookingRequest, VerifyResponse};
use std::sync::Arc;
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

#[axum::debug_handler]
pub async fn find_all(
    State(state): State<Arc<ApiState>>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Vec<Booking>>, AppError> {
    let Path(user_id) = path?;
    Ok(Json(state.bookings.find_all(user_id).await?))
}

#[axum::debug_handler]
pub async fn find_pendings(
    State(state): State<Arc<ApiState>>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Vec<Booking>>, AppError> {
    let Path(user_id) = path?;
    Ok(Json(state.bookings.find_pendings(user_id).await?))
}

#[axum::debug_handler]
pub async fn history_by_user(
    State(state): State<Arc<ApiState>>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Vec<Booking>>, AppError> {
    let Path(user_id) = path?;
    Ok(Json(state.bookings.history_by_user(user_id).await?))
}

#[axum::debug_handler]
pub async fn verify(
    State(state): State<Arc<ApiState>>,
    path: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<CreateBookingRequest>, JsonRejection>,
) -> Result<Json<VerifyResponse>, AppError> {
    let Path(user_id) = path?;
    let Json(payload) = payload?;
    let start_date = payload.start_date()?;

    Ok(Json(state.bookings.verify(user_id, start_date).await?))
}

#[axum::debug_handler]
pub async fn create(
    State(state): State<Arc<ApiState>>,
    path: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<CreateBookingRequest>, JsonRejection>,
) -> Result<Json<Booking>, AppError> {
    let Path(user_id) = path?;
    let Json(payload) = payload?;
    let start_date = payload.start_date()?;

    Ok(Json(state.bookings.create(user_id, start_date).await?))
}

// Transitions answer `null` rather than 404 when the booking does not exist.

#[axum::debug_handler]
pub async fn attended(
    State(state): State<Arc<ApiState>>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Option<Booking>>, AppError> {
    let Path(id) = path?;
    Ok(Json(state.bookings.attended(id).await?))
}

#[axum::debug_handler]
pub async fn no_attended(
    State(state): State<Arc<ApiState>>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Option<Booking>>, AppError> {
    let Path(id) = path?;
    Ok(Json(state.bookings.no_attended(id).await?))
}

#[axum::debug_handler]
pub async fn cancel(
    State(state): State<Arc<ApiState>>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Option<Booking>>, AppError> {
    let Path(id) = path?;
    Ok(Json(state.bookings.cancel(id).await?))
}
