use std::sync::Arc;

use color_eyre::eyre::Result;
use dotenv::dotenv;
use slotbook_api::{config::ApiConfig, services::booking::BookingService, ApiState};
use slotbook_db::{
    create_pool,
    repositories::{booking::PgBookingRepository, user::PgUserRepository},
    schema::initialize_database,
};
use slotbook_mailer::{config::MailerConfig, notifier_from_config};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ApiConfig::from_env()?;
    let mailer_config = MailerConfig::from_env()?;

    // Create database connection pool
    let db_pool = create_pool(&config.database_url, config.database_max_connections).await?;

    // Initialize database schema
    initialize_database(&db_pool).await?;

    // Wire the booking service
    let bookings = BookingService::new(
        Arc::new(PgBookingRepository::new(db_pool.clone())),
        Arc::new(PgUserRepository::new(db_pool)),
        notifier_from_config(&mailer_config)?,
        config.booking_config(),
    );
    let state = Arc::new(ApiState { bookings });

    // Start API server
    slotbook_api::start_server(config, state).await?;

    Ok(())
}
