//! Test doubles for the [`Notifier`] port.

use std::sync::Arc;

use async_trait::async_trait;
use eyre::{eyre, Result};
use mockall::mock;
use tokio::sync::Mutex;

use crate::{templates, Notification, Notifier};

mock! {
    pub Mailer {}

    #[async_trait]
    impl Notifier for Mailer {
        async fn send_notification(&self, notification: Notification) -> eyre::Result<()>;
    }
}

/// Renders every notification it receives and keeps it for inspection.
///
/// Rendering still runs so that tests catch template data mismatches.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    sent: Arc<Mutex<Vec<Notification>>>,
    fail_with: Option<String>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// A notifier whose every delivery fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            sent: Arc::default(),
            fail_with: Some(message.into()),
        }
    }

    pub async fn sent(&self) -> Vec<Notification> {
        self.sent.lock().await.clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send_notification(&self, notification: Notification) -> Result<()> {
        if let Some(message) = &self.fail_with {
            return Err(eyre!("{}", message));
        }

        templates::render(&notification.template, &notification.data)?;
        self.sent.lock().await.push(notification);
        Ok(())
    }
}
