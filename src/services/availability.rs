use chrono::{Months, NaiveDate};
use sha1::{Digest, Sha1};

use crate::models::{SlotPeriod, TimeSlot, TimeSlots};

pub const DEFAULT_THRESHOLD: u8 = 30;

pub fn slot_score(date: NaiveDate, label: &str, index: usize) -> u8 {
    let mut hasher = Sha1::new();
    hasher.update(format!("{}|{label}|{index}", date.format("%Y-%m-%d")).as_bytes());
    let digest = hasher.finalize();
    let n = u16::from_be_bytes([digest[0], digest[1]]);
    (n % 100) as u8 + 1
}

#[derive(Debug, Clone, Copy)]
pub struct AvailabilityEngine {
    threshold: u8,
}

impl Default for AvailabilityEngine {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

impl AvailabilityEngine {
    pub fn new(threshold: u8) -> Self {
        Self {
            threshold: threshold.min(100),
        }
    }

    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    pub fn is_open(&self, date: NaiveDate, label: &str, index: usize) -> bool {
        slot_score(date, label, index) > self.threshold
    }

    pub fn slots_for<F>(&self, date: NaiveDate, is_booked: F) -> TimeSlots
    where
        F: Fn(NaiveDate, &str) -> bool,
    {
        let group = |period: SlotPeriod| -> Vec<TimeSlot> {
            period
                .labels()
                .iter()
                .enumerate()
                .map(|(index, label)| {
                    let booked = is_booked(date, *label);
                    TimeSlot {
                        time: label.to_string(),
                        available: !booked && self.is_open(date, *label, index),
                        booked,
                    }
                })
                .collect()
        };

        TimeSlots {
            morning: group(SlotPeriod::Morning),
            afternoon: group(SlotPeriod::Afternoon),
            evening: group(SlotPeriod::Evening),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingWindow {
    pub min: NaiveDate,
    pub max: NaiveDate,
}

impl BookingWindow {
    pub fn starting(today: NaiveDate, horizon_months: u32) -> Self {
        let max = today
            .checked_add_months(Months::new(horizon_months))
            .unwrap_or(NaiveDate::MAX);
        Self { min: today, max }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.min && date <= self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_score_is_deterministic() {
        let date = d("2025-06-10");
        for (index, label) in SlotPeriod::Afternoon.labels().iter().enumerate() {
            assert_eq!(slot_score(date, label, index), slot_score(date, label, index));
        }
    }

    #[test]
    fn test_score_in_range() {
        let mut date = d("2025-01-01");
        for _ in 0..60 {
            for period in SlotPeriod::ALL {
                for (index, label) in period.labels().iter().enumerate() {
                    let score = slot_score(date, label, index);
                    assert!((1..=100).contains(&score));
                }
            }
            date = date.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_roughly_seventy_percent_open() {
        let engine = AvailabilityEngine::default();
        let mut date = d("2025-01-01");
        let (mut open, mut total) = (0usize, 0usize);
        for _ in 0..365 {
            for period in SlotPeriod::ALL {
                for (index, label) in period.labels().iter().enumerate() {
                    total += 1;
                    if engine.is_open(date, label, index) {
                        open += 1;
                    }
                }
            }
            date = date.succ_opt().unwrap();
        }
        let ratio = open as f64 / total as f64;
        assert!((0.62..=0.78).contains(&ratio), "open ratio was {ratio}");
    }

    #[test]
    fn test_slots_for_same_date_identical() {
        let engine = AvailabilityEngine::default();
        let a = engine.slots_for(d("2025-06-10"), |_, _| false);
        let b = engine.slots_for(d("2025-06-10"), |_, _| false);
        assert_eq!(a, b);
        assert_eq!(a.morning.len(), 3);
        assert_eq!(a.afternoon.len(), 4);
        assert_eq!(a.evening.len(), 3);
    }

    #[test]
    fn test_booked_slot_is_never_available() {
        let engine = AvailabilityEngine::new(0);
        let slots = engine.slots_for(d("2025-06-10"), |_, time| time == "9:00 AM");
        let nine = slots.find("9:00 AM").unwrap();
        assert!(nine.booked);
        assert!(!nine.available);
        assert!(slots.find("10:00 AM").unwrap().available);
    }

    #[test]
    fn test_threshold_extremes() {
        let date = d("2025-06-10");
        let all_open = AvailabilityEngine::new(0).slots_for(date, |_, _| false);
        assert!(all_open.iter().all(|s| s.available));
        let none_open = AvailabilityEngine::new(100).slots_for(date, |_, _| false);
        assert!(none_open.iter().all(|s| !s.available && !s.booked));
    }

    #[test]
    fn test_booking_window() {
        let window = BookingWindow::starting(d("2025-06-10"), 3);
        assert_eq!(window.max, d("2025-09-10"));
        assert!(window.contains(d("2025-06-10")));
        assert!(window.contains(d("2025-09-10")));
        assert!(!window.contains(d("2025-06-09")));
        assert!(!window.contains(d("2025-09-11")));
    }

    #[test]
    fn test_booking_window_month_end() {
        let window = BookingWindow::starting(d("2025-11-30"), 3);
        assert_eq!(window.max, d("2026-02-28"));
    }
}
