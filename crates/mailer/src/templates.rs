//! Email templates.
//!
//! Templates are addressed by name and fed a JSON object. Each template
//! declares the fields it needs; rendering fails if any of them is missing.

use eyre::{eyre, Result};
use serde_json::Value;

/// Sent after a booking has been created. Expects `name` and `formattedDate`.
pub const BOOKING_DONE: &str = "booking-done";

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedEmail {
    pub html: String,
    pub text: String,
}

pub fn render(template: &str, data: &Value) -> Result<RenderedEmail> {
    match template {
        BOOKING_DONE => render_booking_done(data),
        other => Err(eyre!("Unknown email template: {}", other)),
    }
}

fn field<'a>(template: &str, data: &'a Value, key: &str) -> Result<&'a str> {
    data.get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| eyre!("Template '{}' requires string field '{}'", template, key))
}

/// Escapes text for interpolation into HTML element content or attributes.
fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            other => escaped.push(other),
        }
    }
    escaped
}

fn render_booking_done(data: &Value) -> Result<RenderedEmail> {
    let name = field(BOOKING_DONE, data, "name")?;
    let date = field(BOOKING_DONE, data, "formattedDate")?;

    let html = format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>Has realizado una reserva</title>
</head>
<body style="font-family: Arial, sans-serif; line-height: 1.6; color: #333;">
    <div style="max-width: 600px; margin: 0 auto; padding: 20px;">
        <h2 style="color: #2563eb;">Hola {html_name},</h2>
        <p>Tu reserva quedó registrada para el <strong>{html_date}</strong>.</p>
        <p>Si no puedes asistir, cancela la reserva para liberar el cupo.</p>
    </div>
</body>
</html>"#,
        html_name = escape_html(name),
        html_date = escape_html(date),
    );

    let text = format!(
        "Hola {name},\n\nTu reserva quedó registrada para el {date}.\n\nSi no puedes asistir, cancela la reserva para liberar el cupo.\n"
    );

    Ok(RenderedEmail { html, text })
}
