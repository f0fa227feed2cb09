//! # SlotBook Core
//!
//! Domain types shared by every SlotBook crate: booking and user models,
//! the error taxonomy, and the store ports the booking service is written
//! against.

/// Error types and the crate-wide result alias
pub mod errors;
/// Booking and user models, plus request/response payloads
pub mod models;
/// Store ports implemented by the database crate
pub mod repository;
