use axum::{routing::post, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/slots/history", post(handlers::slot::history))
        .route(
            "/api/slots/attendance",
            post(handlers::slot::register_attendance),
        )
}
