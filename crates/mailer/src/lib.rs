use std::sync::Arc;

use async_trait::async_trait;
use eyre::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

pub mod config;
pub mod console;
pub mod locale;
pub mod mock;
pub mod smtp;
pub mod templates;

/// An email waiting to be rendered and delivered.
///
/// `template` names one of the templates in [`templates`]; `data` carries the
/// values it interpolates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub to: String,
    pub subject: String,
    pub template: String,
    pub data: Value,
}

/// Outbound notification channel.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Render and deliver `notification`.
    ///
    /// # Errors
    ///
    /// Returns an error if the template is unknown, its data is incomplete,
    /// or the transport rejects the message.
    async fn send_notification(&self, notification: Notification) -> Result<()>;
}

/// Build the notifier described by `config`.
///
/// Falls back to the console notifier when no SMTP host is configured.
pub fn notifier_from_config(config: &config::MailerConfig) -> Result<Arc<dyn Notifier>> {
    match &config.smtp {
        Some(smtp) => {
            info!("Sending notifications through SMTP relay {}", smtp.host);
            Ok(Arc::new(smtp::SmtpNotifier::new(smtp, &config.from_header())?))
        }
        None => {
            info!("SMTP_HOST not set; notifications will be logged to the console");
            Ok(Arc::new(console::ConsoleNotifier::new()))
        }
    }
}
