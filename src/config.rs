use std::env;

const MAX_DURATION_MINUTES: i64 = 24 * 60;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database_url: String,
    pub storage_key: String,
    pub booking_horizon_months: u32,
    pub availability_threshold: u8,
    pub business_name: String,
    pub appointment_duration_minutes: i64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: "bookease.db".to_string(),
            storage_key: "bookedAppointments".to_string(),
            booking_horizon_months: 3,
            availability_threshold: 30,
            business_name: "BookEase".to_string(),
            appointment_duration_minutes: 60,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            database_url: env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            storage_key: env::var("STORAGE_KEY")
                .ok()
                .filter(|k| !k.is_empty())
                .unwrap_or(defaults.storage_key),
            booking_horizon_months: env::var("BOOKING_HORIZON_MONTHS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.booking_horizon_months),
            availability_threshold: env::var("AVAILABILITY_THRESHOLD")
                .ok()
                .and_then(|v| v.parse::<u8>().ok())
                .map(|t| t.min(100))
                .unwrap_or(defaults.availability_threshold),
            business_name: env::var("BUSINESS_NAME")
                .ok()
                .filter(|n| !n.is_empty())
                .unwrap_or(defaults.business_name),
            appointment_duration_minutes: env::var("APPOINTMENT_DURATION_MINUTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|m: &i64| (1..=MAX_DURATION_MINUTES).contains(m))
                .unwrap_or(defaults.appointment_duration_minutes),
        }
    }
}
