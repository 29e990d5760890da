use crate::config::AppConfig;
use crate::services::bookings::BookingStore;

/// Shared by every handler. The booking store lives here and nowhere else.
pub struct AppState {
    pub bookings: BookingStore,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            bookings: BookingStore::new(),
            config,
        }
    }
}
