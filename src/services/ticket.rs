use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::Appointment;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmationPayload {
    pub id: String,
    pub date: String,
    pub time: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub notes: String,
}

impl From<&Appointment> for ConfirmationPayload {
    fn from(appointment: &Appointment) -> Self {
        Self {
            id: appointment.id.clone(),
            date: appointment.date.format("%Y-%m-%d").to_string(),
            time: appointment.time.clone(),
            name: appointment.form_data.name.clone(),
            email: appointment.form_data.email.clone(),
            phone: appointment.form_data.phone.clone(),
            notes: appointment.form_data.notes.clone(),
        }
    }
}

impl ConfirmationPayload {
    pub fn qr_data(&self) -> Result<String, AppError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn share_code(&self) -> Result<String, AppError> {
        Ok(URL_SAFE_NO_PAD.encode(self.qr_data()?))
    }

    pub fn decode_share_code(code: &str) -> Result<Self, AppError> {
        let bytes = URL_SAFE_NO_PAD
            .decode(code.trim())
            .map_err(|e| AppError::InvalidInput(format!("share code is not base64: {e}")))?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    pub fn fallback_text(&self) -> String {
        format!("BookEase Appointment: {}", self.id)
    }
}

pub fn share_text(appointment: &Appointment) -> String {
    format!(
        "I have booked an appointment for {} at {}",
        appointment.date.format("%A, %B %-d, %Y"),
        appointment.time
    )
}
