use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

pub const MORNING_SLOTS: [&str; 3] = ["9:00 AM", "10:00 AM", "11:00 AM"];
pub const AFTERNOON_SLOTS: [&str; 4] = ["1:00 PM", "2:00 PM", "3:00 PM", "4:00 PM"];
pub const EVENING_SLOTS: [&str; 3] = ["5:00 PM", "6:00 PM", "7:00 PM"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotPeriod {
    Morning,
    Afternoon,
    Evening,
}

impl SlotPeriod {
    pub const ALL: [SlotPeriod; 3] = [SlotPeriod::Morning, SlotPeriod::Afternoon, SlotPeriod::Evening];

    pub fn labels(&self) -> &'static [&'static str] {
        match self {
            SlotPeriod::Morning => &MORNING_SLOTS,
            SlotPeriod::Afternoon => &AFTERNOON_SLOTS,
            SlotPeriod::Evening => &EVENING_SLOTS,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            SlotPeriod::Morning => "Morning",
            SlotPeriod::Afternoon => "Afternoon",
            SlotPeriod::Evening => "Evening",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub time: String,
    pub available: bool,
    pub booked: bool,
}

impl TimeSlot {
    pub fn status(&self) -> &'static str {
        if self.booked {
            "Booked"
        } else if self.available {
            "Available"
        } else {
            "Unavailable"
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlots {
    pub morning: Vec<TimeSlot>,
    pub afternoon: Vec<TimeSlot>,
    pub evening: Vec<TimeSlot>,
}

impl TimeSlots {
    pub fn group(&self, period: SlotPeriod) -> &[TimeSlot] {
        match period {
            SlotPeriod::Morning => &self.morning,
            SlotPeriod::Afternoon => &self.afternoon,
            SlotPeriod::Evening => &self.evening,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &TimeSlot> {
        self.morning
            .iter()
            .chain(self.afternoon.iter())
            .chain(self.evening.iter())
    }

    pub fn find(&self, time: &str) -> Option<&TimeSlot> {
        self.iter().find(|slot| slot.time == time)
    }

    pub fn is_empty(&self) -> bool {
        self.morning.is_empty() && self.afternoon.is_empty() && self.evening.is_empty()
    }
}

pub fn parse_slot_time(label: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(label.trim(), "%I:%M %p").ok()
}
