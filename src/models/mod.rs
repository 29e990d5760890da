pub mod booking;
pub mod catalog;

pub use booking::{date_priority, Booking, BookingStatus, NewBooking, BOOKING_DATES};
pub use catalog::{Catalog, DetailingPackage, InteriorService, WashPackage};
