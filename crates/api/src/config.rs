//! # API Configuration Module
//!
//! This module handles loading and managing configuration for the SlotBook API server.
//! It retrieves configuration values from environment variables and provides defaults
//! where appropriate.
//!
//! ## Environment Variables
//!
//! The following environment variables are used:
//!
//! - `API_HOST`: The host address to bind the server to (default: "0.0.0.0")
//! - `API_PORT`: The port to listen on (default: 3000)
//! - `DATABASE_URL`: PostgreSQL connection string (required)
//! - `DATABASE_MAX_CONNECTIONS`: Size of the connection pool (default: 5)
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `API_CORS_ORIGINS`: Comma-separated list of allowed CORS origins
//! - `API_REQUEST_TIMEOUT_SECONDS`: Per-request timeout (default: 30)
//! - `BOOKING_SLOT_CAPACITY`: Non-cancelled bookings accepted per slot (default: 30)

use eyre::{Result, WrapErr};
use std::env;
use tracing::Level;

use crate::services::booking::{BookingConfig, DEFAULT_SLOT_CAPACITY};

/// Configuration for the SlotBook API server
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host address for the API server (e.g., "127.0.0.1", "0.0.0.0")
    pub host: String,
    
    /// Port for the API server to listen on
    pub port: u16,
    
    /// PostgreSQL database connection string
    pub database_url: String,

    /// Maximum number of pooled database connections
    pub database_max_connections: u32,
    
    /// Log level for the application
    pub log_level: Level,
    
    /// CORS allowed origins (optional)
    pub cors_origins: Option<Vec<String>>,
    
    /// Request timeout in seconds
    pub request_timeout: u64,

    /// Capacity of every booking slot
    pub slot_capacity: i64,
}

impl ApiConfig {
    /// Creates a new ApiConfig from environment variables
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The DATABASE_URL environment variable is not set
    /// - The API_PORT value cannot be parsed as a u16
    /// - The BOOKING_SLOT_CAPACITY value is not a non-negative integer
    pub fn from_env() -> Result<Self> {
        // Network settings
        let host = env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("API_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .wrap_err("Invalid API_PORT value")?;
        
        // Database settings
        let database_url = env::var("DATABASE_URL")
            .wrap_err("DATABASE_URL environment variable must be set")?;
        let database_max_connections = env::var("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "5".to_string())
            .parse()
            .unwrap_or(5);
        
        // Logging settings
        let log_level = parse_log_level(&env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()));
        
        // CORS settings
        let cors_origins = env::var("API_CORS_ORIGINS").ok().map(|origins| {
            origins.split(',').map(|s| s.trim().to_string()).collect()
        });
        
        // Performance settings
        let request_timeout = env::var("API_REQUEST_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .unwrap_or(30);

        // Booking rules
        let slot_capacity = match env::var("BOOKING_SLOT_CAPACITY") {
            Ok(raw) => parse_slot_capacity(&raw)?,
            Err(_) => DEFAULT_SLOT_CAPACITY,
        };
        
        Ok(Self {
            host,
            port,
            database_url,
            database_max_connections,
            log_level,
            cors_origins,
            request_timeout,
            slot_capacity,
        })
    }
    
    /// Returns the server address as a string (e.g., "127.0.0.1:8080")
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Booking rules derived from this configuration
    pub fn booking_config(&self) -> BookingConfig {
        BookingConfig {
            slot_capacity: self.slot_capacity,
        }
    }
}

pub fn parse_log_level(raw: &str) -> Level {
    match raw {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

pub fn parse_slot_capacity(raw: &str) -> Result<i64> {
    let capacity: i64 = raw
        .trim()
        .parse()
        .wrap_err("Invalid BOOKING_SLOT_CAPACITY value")?;

    if capacity < 0 {
        eyre::bail!("BOOKING_SLOT_CAPACITY must not be negative");
    }

    Ok(capacity)
}
