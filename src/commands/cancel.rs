use chrono::NaiveDate;

use crate::errors::AppError;
use crate::services::booking::{is_upcoming, BookingStore};

/// Only upcoming appointments may be cancelled.
pub fn run(store: &mut BookingStore, id: &str, today: NaiveDate) -> Result<String, AppError> {
    let appointment = store
        .find_appointment(id)
        .ok_or_else(|| AppError::NotFound(format!("appointment {id}")))?;

    if !is_upcoming(appointment, today) {
        return Err(AppError::InvalidInput(format!(
            "appointment {id} on {} has already passed",
            appointment.date
        )));
    }

    let summary = format!("{} at {}", appointment.date, appointment.time);
    store.cancel_booking(id);
    Ok(format!("Cancelled appointment {id} ({summary})\n"))
}
