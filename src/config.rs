use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    /// Minutes added to the current time for same-day bookings.
    pub booking_lead_minutes: i64,
    pub cors_allow_any: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            booking_lead_minutes: parse_lead_minutes(env::var("BOOKING_LEAD_MINUTES").ok()),
            cors_allow_any: parse_flag(env::var("CORS_ALLOW_ANY").ok(), true),
        }
    }
}

const DEFAULT_LEAD_MINUTES: i64 = 120;
const MAX_LEAD_MINUTES: i64 = 24 * 60;

/// Same-day leads only; anything outside one day falls back to the default.
fn parse_lead_minutes(raw: Option<String>) -> i64 {
    raw.and_then(|v| v.trim().parse().ok())
        .filter(|m| (0..=MAX_LEAD_MINUTES).contains(m))
        .unwrap_or(DEFAULT_LEAD_MINUTES)
}

fn parse_flag(raw: Option<String>, default: bool) -> bool {
    raw.map(|v| !matches!(v.trim(), "0" | "false" | "no"))
        .unwrap_or(default)
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            booking_lead_minutes: DEFAULT_LEAD_MINUTES,
            cors_allow_any: true,
        }
    }
}
