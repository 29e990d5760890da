use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Booking {
    pub id: String,
    pub service: String,
    pub date: String,
    pub time: String,
    pub price: String,
    pub status: BookingStatus,
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub services: Option<Vec<String>>,
    pub created_at: DateTime<Utc>,
}

/// A booking as requested by a booking flow, before the store assigns
/// its id and creation time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewBooking {
    pub service: String,
    pub date: String,
    pub time: String,
    pub price: String,
    pub status: BookingStatus,
    pub icon: String,
    #[serde(default)]
    pub package_name: Option<String>,
    #[serde(default)]
    pub services: Option<Vec<String>>,
}

impl NewBooking {
    pub fn into_booking(self, id: String, created_at: DateTime<Utc>) -> Booking {
        Booking {
            id,
            service: self.service,
            date: self.date,
            time: self.time,
            price: self.price,
            status: self.status,
            icon: self.icon,
            package_name: self.package_name,
            services: self.services,
            created_at,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    /// Completed and cancelled bookings are kept as history.
    pub fn is_past(&self) -> bool {
        matches!(self, BookingStatus::Completed | BookingStatus::Cancelled)
    }
}

/// Relative dates offered by the booking screens.
pub const BOOKING_DATES: [&str; 3] = ["Today", "Tomorrow", "Day After"];

const UNKNOWN_DATE_PRIORITY: u32 = 999;

/// Sort key for upcoming bookings. Dates outside the fixed vocabulary
/// sort after all known ones.
pub fn date_priority(date: &str) -> u32 {
    match date {
        "Today" => 1,
        "Tomorrow" => 2,
        "Day After" => 3,
        _ => UNKNOWN_DATE_PRIORITY,
    }
}
