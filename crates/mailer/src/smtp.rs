//! SMTP notifier backed by lettre.

use async_trait::async_trait;
use eyre::{eyre, Result, WrapErr};
use lettre::{
    message::{Mailbox, MultiPart},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use tracing::{debug, info};

use crate::{config::SmtpConfig, templates, Notification, Notifier};

/// Sends notifications through an SMTP relay using STARTTLS.
#[derive(Clone)]
pub struct SmtpNotifier {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpNotifier {
    /// Create a notifier for the relay described by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the relay host is invalid or `from` is not a
    /// valid mailbox.
    pub fn new(config: &SmtpConfig, from: &str) -> Result<Self> {
        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
            .wrap_err_with(|| format!("Invalid SMTP relay {}", config.host))?
            .port(config.port);

        if let (Some(username), Some(password)) = (&config.username, &config.password) {
            builder = builder.credentials(Credentials::new(username.clone(), password.clone()));
        }

        let from = from
            .parse::<Mailbox>()
            .map_err(|e| eyre!("Invalid sender address '{}': {}", from, e))?;

        Ok(Self {
            transport: builder.build(),
            from,
        })
    }

    fn build_message(&self, notification: &Notification) -> Result<Message> {
        let rendered = templates::render(&notification.template, &notification.data)?;
        let to = notification
            .to
            .parse::<Mailbox>()
            .map_err(|e| eyre!("Invalid recipient address '{}': {}", notification.to, e))?;

        Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(notification.subject.as_str())
            .multipart(MultiPart::alternative_plain_html(rendered.text, rendered.html))
            .wrap_err("Failed to build email message")
    }
}

#[async_trait]
impl Notifier for SmtpNotifier {
    async fn send_notification(&self, notification: Notification) -> Result<()> {
        let message = self.build_message(&notification)?;

        debug!(to = %notification.to, template = %notification.template, "Sending email");
        let response = self
            .transport
            .send(message)
            .await
            .wrap_err_with(|| format!("SMTP delivery to {} failed", notification.to))?;

        info!(
            to = %notification.to,
            code = %response.code(),
            "Email delivered"
        );
        Ok(())
    }
}
