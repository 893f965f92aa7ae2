use std::fmt::Write;

use chrono::NaiveDate;

use crate::services::booking::{is_upcoming, BookingStore};

pub fn run(store: &BookingStore, date: Option<NaiveDate>, today: NaiveDate) -> String {
    let appointments: Vec<_> = store
        .sorted_appointments()
        .into_iter()
        .filter(|a| date.map_or(true, |d| a.date == d))
        .collect();

    if appointments.is_empty() {
        return "You don't have any bookings yet.\n".to_string();
    }

    let mut out = String::new();
    for appointment in appointments {
        let marker = if is_upcoming(appointment, today) { "upcoming" } else { "past" };
        let _ = writeln!(
            out,
            "{}  {}  {:<9} {:<8} {}",
            appointment.id,
            appointment.date.format("%a, %b %-d, %Y"),
            appointment.time,
            marker,
            appointment.form_data.name,
        );
    }
    out
}
