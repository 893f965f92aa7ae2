use chrono::Duration;

use crate::models::{parse_slot_time, Appointment};

/// `None` when the time label does not parse or the duration overflows.
pub fn generate_ics(
    appointment: &Appointment,
    business_name: &str,
    duration_minutes: i64,
) -> Option<String> {
    let start = appointment.date.and_time(parse_slot_time(&appointment.time)?);
    let end = start.checked_add_signed(Duration::try_minutes(duration_minutes)?)?;

    let dtstart = start.format("%Y%m%dT%H%M%S").to_string();
    let dtend = end.format("%Y%m%dT%H%M%S").to_string();
    let dtstamp = chrono::Utc::now().format("%Y%m%dT%H%M%SZ").to_string();
    let uid = format!("{}@bookease", appointment.id);

    let summary = escape_text(&format!("Appointment with {business_name}"));
    let description = if appointment.form_data.notes.trim().is_empty() {
        "No additional notes".to_string()
    } else {
        escape_text(&appointment.form_data.notes)
    };

    Some(format!(
        "BEGIN:VCALENDAR\r\n\
         VERSION:2.0\r\n\
         PRODID:-//BookEase//Appointment Booking//EN\r\n\
         BEGIN:VEVENT\r\n\
         UID:{uid}\r\n\
         DTSTAMP:{dtstamp}\r\n\
         DTSTART:{dtstart}\r\n\
         DTEND:{dtend}\r\n\
         SUMMARY:{summary}\r\n\
         DESCRIPTION:{description}\r\n\
         END:VEVENT\r\n\
         END:VCALENDAR\r\n"
    ))
}

fn escape_text(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace(';', "\\;")
        .replace(',', "\\,")
        .replace('\n', "\\n")
}
