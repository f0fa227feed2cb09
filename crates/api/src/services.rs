/// Booking business rules
pub mod booking;
