pub mod appointment;
pub mod slot;
pub mod step;

pub use appointment::{Appointment, FormData, FormDataPatch};
pub use slot::{parse_slot_time, SlotPeriod, TimeSlot, TimeSlots};
pub use step::Step;
