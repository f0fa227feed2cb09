use eyre::{eyre, Result};
use std::env;

/// SMTP relay settings.
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Configuration for outbound notifications.
///
/// When `smtp` is `None` the service logs notifications instead of sending
/// them, which is what local development wants.
#[derive(Debug, Clone)]
pub struct MailerConfig {
    /// SMTP relay (optional)
    pub smtp: Option<SmtpConfig>,
    /// Sender address; required once an SMTP relay is configured
    pub from_email: String,
    /// Sender display name (defaults to "Reservas")
    pub from_name: String,
}

impl MailerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let smtp = match env::var("SMTP_HOST").ok() {
            Some(host) => {
                let port = parse_smtp_port(env::var("SMTP_PORT").ok().as_deref())?;

                Some(SmtpConfig {
                    host,
                    port,
                    username: env::var("SMTP_USERNAME").ok(),
                    password: env::var("SMTP_PASSWORD").ok(),
                })
            }
            None => None,
        };

        let from_email = resolve_from_email(env::var("MAIL_FROM").ok(), smtp.is_some())?;

        let from_name = env::var("MAIL_FROM_NAME").unwrap_or_else(|_| "Reservas".to_string());

        Ok(Self {
            smtp,
            from_email,
            from_name,
        })
    }

    /// The `From` header value, e.g. `Reservas <no-reply@example.com>`
    pub fn from_header(&self) -> String {
        format!("{} <{}>", self.from_name, self.from_email)
    }
}

/// Parses `SMTP_PORT`, defaulting to 587 when unset.
pub fn parse_smtp_port(raw: Option<&str>) -> Result<u16> {
    match raw {
        Some(raw) => raw
            .trim()
            .parse::<u16>()
            .map_err(|_| eyre!("SMTP_PORT must be a valid u16")),
        None => Ok(587),
    }
}

/// Picks the sender address. `MAIL_FROM` is mandatory once a relay is
/// configured; the console notifier falls back to a local placeholder.
pub fn resolve_from_email(mail_from: Option<String>, smtp_configured: bool) -> Result<String> {
    match mail_from {
        Some(from) if !from.trim().is_empty() => Ok(from),
        _ if smtp_configured => Err(eyre!("MAIL_FROM environment variable not set")),
        _ => Ok("no-reply@localhost".to_string()),
    }
}
