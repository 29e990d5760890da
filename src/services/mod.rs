pub mod booking_flows;
pub mod bookings;
pub mod catalog;
