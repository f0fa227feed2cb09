//! # SlotBook API
//!
//! The API crate provides the web server implementation for the SlotBook booking
//! service. It exposes every booking operation as an HTTP endpoint.
//!
//! ## Architecture
//!
//! This crate follows a layered architecture:
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Validate requests and translate results to JSON
//! - **Services**: Booking business rules, written against the store and notifier ports
//! - **Middleware**: Error mapping shared by all handlers
//! - **Config**: Handle environment and application configuration
//!
//! The API uses Axum as the web framework; storage and email delivery are
//! injected through [`ApiState`].

/// Configuration module for API settings
pub mod config;
/// Request handlers that bind HTTP requests to service operations
pub mod handlers;
/// Middleware for error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;
/// Business logic
pub mod services;

use std::{sync::Arc, time::Duration};

use axum::{http::HeaderValue, Router};
use eyre::Result;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

use crate::services::booking::BookingService;

/// Shared application state that is accessible to all request handlers
///
/// # Example
///
/// ```ignore
/// let state = Arc::new(ApiState { bookings: service });
/// let app = slotbook_api::router(state);
/// ```
pub struct ApiState {
    /// Booking service wired to the configured store and notifier
    pub bookings: BookingService,
}

/// Builds the application router with every route attached to `state`
pub fn router(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // User-scoped booking operations and status transitions
        .merge(routes::booking::routes())
        // Slot-scoped listings
        .merge(routes::slot::routes())
        // Attach shared state to all routes
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect::<Vec<_>>();

    CorsLayer::new()
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::PUT,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
        ])
        .allow_origin(origins)
}

/// Starts the API server with the provided configuration and state
///
/// This function sets up logging, configures routes and middleware, and
/// serves HTTP until the listener fails.
///
/// # Arguments
///
/// * `config` - API configuration including host, port, and other settings
/// * `state` - Shared state holding the booking service
///
/// # Errors
///
/// Returns an error if the tracing subscriber cannot be installed or the
/// listener cannot be bound.
pub async fn start_server(config: config::ApiConfig, state: Arc<ApiState>) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let app = router(state);

    // Apply CORS configuration if origins are specified
    let app = match &config.cors_origins {
        Some(origins) => app.layer(cors_layer(origins)),
        None => app,
    };

    // Request tracing and timeout
    let app = app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout))),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!(
        slot_capacity = config.slot_capacity,
        "Server listening on http://{}", addr
    );
    axum::serve(listener, app).await?;

    Ok(())
}
