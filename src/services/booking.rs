use chrono::{Local, NaiveDate};
use uuid::Uuid;

use crate::config::AppConfig;
use crate::db::AppointmentRepository;
use crate::models::{parse_slot_time, Appointment, FormData, FormDataPatch, Step, TimeSlots};
use crate::services::availability::{AvailabilityEngine, BookingWindow};
use crate::services::validation::{FieldErrors, FormValidator};

const DEFAULT_HORIZON_MONTHS: u32 = 3;

pub struct BookingStore {
    repository: AppointmentRepository,
    engine: AvailabilityEngine,
    window: BookingWindow,
    step: Step,
    selected_date: Option<NaiveDate>,
    selected_time: Option<String>,
    form_data: FormData,
    appointments: Vec<Appointment>,
    current: Option<Appointment>,
}

impl BookingStore {
    pub fn new(repository: AppointmentRepository) -> Self {
        let appointments = repository.load();
        Self {
            repository,
            engine: AvailabilityEngine::default(),
            window: BookingWindow::starting(Local::now().date_naive(), DEFAULT_HORIZON_MONTHS),
            step: Step::FIRST,
            selected_date: None,
            selected_time: None,
            form_data: FormData::default(),
            appointments,
            current: None,
        }
    }

    pub fn from_config(repository: AppointmentRepository, config: &AppConfig) -> Self {
        Self::new(repository)
            .with_engine(AvailabilityEngine::new(config.availability_threshold))
            .with_window(BookingWindow::starting(
                Local::now().date_naive(),
                config.booking_horizon_months,
            ))
    }

    pub fn with_engine(mut self, engine: AvailabilityEngine) -> Self {
        self.engine = engine;
        self
    }

    pub fn with_window(mut self, window: BookingWindow) -> Self {
        self.window = window;
        self
    }

    // ── Read access ──

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected_date
    }

    pub fn selected_time(&self) -> Option<&str> {
        self.selected_time.as_deref()
    }

    pub fn form_data(&self) -> &FormData {
        &self.form_data
    }

    pub fn window(&self) -> BookingWindow {
        self.window
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn current_appointment(&self) -> Option<&Appointment> {
        self.current.as_ref()
    }

    pub fn find_appointment(&self, id: &str) -> Option<&Appointment> {
        self.appointments.iter().find(|a| a.id == id)
    }

    pub fn appointments_on(&self, date: NaiveDate) -> Vec<&Appointment> {
        self.appointments.iter().filter(|a| a.date == date).collect()
    }

    pub fn has_bookings_on(&self, date: NaiveDate) -> bool {
        self.appointments.iter().any(|a| a.date == date)
    }

    pub fn sorted_appointments(&self) -> Vec<&Appointment> {
        let mut sorted: Vec<&Appointment> = self.appointments.iter().collect();
        sorted.sort_by(|a, b| {
            b.date.cmp(&a.date).then_with(|| {
                (parse_slot_time(&a.time), a.time.as_str())
                    .cmp(&(parse_slot_time(&b.time), b.time.as_str()))
            })
        });
        sorted
    }

    pub fn is_time_slot_booked(&self, date: NaiveDate, time: &str) -> bool {
        self.appointments
            .iter()
            .any(|a| a.date == date && a.time == time)
    }

    pub fn time_slots(&self) -> TimeSlots {
        match self.selected_date {
            Some(date) => self.slots_for(date),
            None => TimeSlots::default(),
        }
    }

    pub fn slots_for(&self, date: NaiveDate) -> TimeSlots {
        self.engine
            .slots_for(date, |d, time| self.is_time_slot_booked(d, time))
    }

    // ── Draft mutation ──

    pub fn set_selected_date(&mut self, date: Option<NaiveDate>) {
        self.selected_date = date;
    }

    pub fn set_selected_time(&mut self, time: Option<String>) {
        self.selected_time = time;
    }

    pub fn set_form_data(&mut self, patch: FormDataPatch) {
        self.form_data.merge(patch);
    }

    /// Picks a date inside the booking window. A different date clears the
    /// selected time.
    pub fn select_date(&mut self, date: NaiveDate) -> bool {
        if !self.window.contains(date) {
            tracing::debug!(%date, "date outside booking window");
            return false;
        }
        if self.selected_date != Some(date) {
            self.selected_time = None;
        }
        self.selected_date = Some(date);
        true
    }

    pub fn select_time(&mut self, time: &str) -> bool {
        let available = self
            .time_slots()
            .find(time)
            .map(|slot| slot.available)
            .unwrap_or(false);
        if available {
            self.selected_time = Some(time.to_string());
        }
        available
    }

    // ── Step navigation ──

    pub fn next_step(&mut self) {
        self.step = self.step.next();
    }

    pub fn prev_step(&mut self) {
        self.step = self.step.prev();
    }

    pub fn go_to_step(&mut self, n: u8) {
        if let Some(step) = Step::from_number(n) {
            self.step = step;
        }
    }

    // ── Appointment list ──

    /// Books the draft. Does nothing unless both a date and a time are selected.
    pub fn confirm_appointment(&mut self) -> Option<&Appointment> {
        let (Some(date), Some(time)) = (self.selected_date, self.selected_time.clone()) else {
            return None;
        };

        let appointment = Appointment {
            id: Uuid::new_v4().to_string(),
            date,
            time,
            form_data: self.form_data.clone(),
        };

        tracing::info!(
            id = %appointment.id,
            date = %appointment.date,
            time = %appointment.time,
            "appointment confirmed"
        );

        self.appointments.push(appointment.clone());
        self.persist();
        self.current = Some(appointment);
        self.next_step();

        self.current.as_ref()
    }

    pub fn submit_details(
        &mut self,
        validator: &dyn FormValidator,
    ) -> Result<Option<&Appointment>, FieldErrors> {
        let errors = validator.validate(&self.form_data);
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(self.confirm_appointment())
    }

    pub fn cancel_booking(&mut self, id: &str) -> bool {
        let before = self.appointments.len();
        self.appointments.retain(|a| a.id != id);
        let removed = self.appointments.len() != before;

        if removed {
            tracing::info!(id, "appointment cancelled");
        }
        self.persist();
        removed
    }

    pub fn reset_booking(&mut self) {
        self.selected_date = None;
        self.selected_time = None;
        self.form_data = FormData::default();
        self.current = None;
        self.step = Step::FIRST;
    }

    fn persist(&self) {
        if let Err(e) = self.repository.save(&self.appointments) {
            tracing::error!(error = %e, "failed to persist appointments");
        }
    }
}

pub fn is_upcoming(appointment: &Appointment, today: NaiveDate) -> bool {
    appointment.date >= today
}
