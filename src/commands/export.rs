use crate::config::AppConfig;
use crate::errors::AppError;
use crate::services::booking::BookingStore;
use crate::services::calendar::generate_ics;
use crate::services::ticket::{share_text, ConfirmationPayload};

pub fn ics(store: &BookingStore, config: &AppConfig, id: &str) -> Result<String, AppError> {
    let appointment = store
        .find_appointment(id)
        .ok_or_else(|| AppError::NotFound(format!("appointment {id}")))?;

    generate_ics(
        appointment,
        &config.business_name,
        config.appointment_duration_minutes,
    )
    .ok_or_else(|| AppError::InvalidInput(format!("unrecognised time slot {:?}", appointment.time)))
}

pub fn ticket(store: &BookingStore, id: &str) -> Result<String, AppError> {
    let appointment = store
        .find_appointment(id)
        .ok_or_else(|| AppError::NotFound(format!("appointment {id}")))?;

    let payload = ConfirmationPayload::from(appointment);
    let qr_data = match payload.qr_data() {
        Ok(data) => data,
        Err(e) => {
            tracing::error!(error = %e, "failed to build QR payload, using fallback");
            payload.fallback_text()
        }
    };

    Ok(format!(
        "QR data: {qr_data}\nShare code: {}\n{}\n",
        payload.share_code()?,
        share_text(appointment)
    ))
}
