pub mod book;
pub mod cancel;
pub mod export;
pub mod list;
pub mod slots;

use chrono::NaiveDate;

use crate::errors::AppError;

pub fn parse_date(s: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::InvalidInput(format!("expected a date like 2025-06-10, got {s:?}")))
}

pub fn long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}
