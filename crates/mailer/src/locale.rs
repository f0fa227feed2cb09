//! Spanish date formatting for notification bodies.
//!
//! Booking emails show the slot in Bogotá local time using the pattern
//! `EEEE, dd 'de' MMMM 'del' yyyy 'a las' hh:mm a`, for example
//! `lunes, 05 de enero del 2026 a las 03:00 PM`. Templates depend on this
//! exact shape, so the day and month names are spelled out here rather than
//! taken from a locale database.

use chrono::{DateTime, Datelike, Timelike, Utc};
use chrono_tz::{America::Bogota, Tz};

/// Timezone every notification date is rendered in.
pub const NOTIFICATION_TIMEZONE: Tz = Bogota;

const WEEKDAYS: [&str; 7] = [
    "lunes",
    "martes",
    "miércoles",
    "jueves",
    "viernes",
    "sábado",
    "domingo",
];

const MONTHS: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Formats `date` as a Spanish, Bogotá-local sentence fragment.
pub fn format_booking_date(date: DateTime<Utc>) -> String {
    format_in_timezone(date, NOTIFICATION_TIMEZONE)
}

pub fn format_in_timezone(date: DateTime<Utc>, tz: Tz) -> String {
    let local = date.with_timezone(&tz);
    let (is_pm, hour) = local.hour12();

    format!(
        "{}, {:02} de {} del {} a las {:02}:{:02} {}",
        WEEKDAYS[local.weekday().num_days_from_monday() as usize],
        local.day(),
        MONTHS[local.month0() as usize],
        local.year(),
        hour,
        local.minute(),
        if is_pm { "PM" } else { "AM" },
    )
}
