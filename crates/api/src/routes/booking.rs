use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/users/:user_id/bookings",
            get(handlers::booking::find_all).post(handlers::booking::create),
        )
        .route(
            "/api/users/:user_id/bookings/pending",
            get(handlers::booking::find_pendings),
        )
        .route(
            "/api/users/:user_id/bookings/history",
            get(handlers::booking::history_by_user),
        )
        .route(
            "/api/users/:user_id/bookings/verify",
            post(handlers::booking::verify),
        )
        .route("/api/bookings/:id/attended", put(handlers::booking::attended))
        .route(
            "/api/bookings/:id/no-attended",
            put(handlers::booking::no_attended),
        )
        .route("/api/bookings/:id/cancel", put(handlers::booking::cancel))
}
