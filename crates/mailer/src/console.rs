//! Console notifier for development.

use async_trait::async_trait;
use eyre::Result;
use tracing::info;

use crate::{templates, Notification, Notifier};

/// Renders notifications and logs them instead of sending them.
#[derive(Clone, Debug, Default)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Notifier for ConsoleNotifier {
    async fn send_notification(&self, notification: Notification) -> Result<()> {
        let rendered = templates::render(&notification.template, &notification.data)?;

        info!(
            to = %notification.to,
            subject = %notification.subject,
            template = %notification.template,
            "Email (development mode)\n{}",
            rendered.text
        );
        Ok(())
    }
}
