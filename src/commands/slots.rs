use std::fmt::Write;

use chrono::NaiveDate;

use crate::models::SlotPeriod;
use crate::services::booking::BookingStore;

use super::long_date;

pub fn run(store: &BookingStore, date: NaiveDate) -> String {
    let slots = store.slots_for(date);
    let mut out = format!("Time slots for {}\n", long_date(date));
    if !store.window().contains(date) {
        let _ = writeln!(
            out,
            "(outside the booking window {} to {})",
            store.window().min,
            store.window().max
        );
    }

    for period in SlotPeriod::ALL {
        let _ = writeln!(out, "\n{}", period.title());
        for slot in slots.group(period) {
            let _ = writeln!(out, "  {:<9} {}", slot.time, slot.status());
        }
    }
    out
}
