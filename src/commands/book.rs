use anyhow::bail;
use chrono::NaiveDate;

use crate::models::FormData;
use crate::services::booking::BookingStore;
use crate::services::ticket::share_text;
use crate::services::validation::FormValidator;

use super::long_date;

pub struct BookRequest {
    pub date: NaiveDate,
    pub time: String,
    pub form: FormData,
}

pub fn run(
    store: &mut BookingStore,
    validator: &dyn FormValidator,
    request: BookRequest,
) -> anyhow::Result<String> {
    store.reset_booking();
    store.next_step();

    if !store.select_date(request.date) {
        let window = store.window();
        bail!(
            "{} is not bookable; pick a date between {} and {}",
            request.date,
            window.min,
            window.max
        );
    }
    store.next_step();

    if !store.select_time(&request.time) {
        let reason = match store.time_slots().find(&request.time) {
            Some(slot) if slot.booked => "already booked",
            Some(_) => "unavailable",
            None => "not a valid time slot",
        };
        bail!("{} on {} is {reason}", request.time, request.date);
    }
    store.next_step();

    store.set_form_data(request.form.into());

    let appointment = match store.submit_details(validator) {
        Ok(Some(appointment)) => appointment.clone(),
        Ok(None) => bail!("booking is missing a date or time"),
        Err(errors) => {
            let details = errors
                .iter()
                .map(|(field, message)| format!("  {field}: {message}"))
                .collect::<Vec<_>>()
                .join("\n");
            bail!("please fix the following:\n{details}");
        }
    };

    Ok(format!(
        "Booking confirmed!\n\
         Confirmation ID: {}\n\
         Date: {}\n\
         Time: {}\n\
         Name: {}\n\
         {}\n",
        appointment.id,
        long_date(appointment.date),
        appointment.time,
        appointment.form_data.name,
        share_text(&appointment),
    ))
}
