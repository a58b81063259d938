use chrono::NaiveDate;

use crate::config::AppConfig;
use crate::errors::AppError;
use crate::models::catalog::{self, SPECIALISTS, STRIZHKA_TYPES};
use crate::models::{
    BookingRequest, Confirmation, FormEvent, FormFields, FormPhase, SelectOption, Service,
};
use crate::services::backend::BookingBackend;
use crate::services::phone::{self, PhoneFormat};
use crate::services::validation::validate_fields;

/// View-model of the booking form: field values, offered slots and the
/// current phase. Built once and handed to whatever drives the UI.
#[derive(Debug, Clone)]
pub struct BookingForm {
    phone_format: PhoneFormat,
    show_placeholders: bool,
    phase: FormPhase,
    fields: FormFields,
    slots: Vec<String>,
    confirmation: Option<Confirmation>,
}

impl BookingForm {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            phone_format: config.phone_format,
            show_placeholders: config.show_placeholders,
            phase: FormPhase::Idle,
            fields: FormFields::default(),
            slots: Vec::new(),
            confirmation: None,
        }
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn slots(&self) -> &[String] {
        &self.slots
    }

    pub fn confirmation(&self) -> Option<&Confirmation> {
        self.confirmation.as_ref()
    }

    pub fn specialist_options(&self) -> Vec<SelectOption> {
        catalog::specialist_options(self.show_placeholders)
    }

    pub fn service_options(&self) -> Vec<SelectOption> {
        catalog::service_options(self.show_placeholders)
    }

    pub fn strizhka_options(&self) -> Vec<SelectOption> {
        catalog::strizhka_options(self.show_placeholders)
    }

    pub fn time_options(&self) -> Vec<SelectOption> {
        catalog::time_options(self.show_placeholders, &self.slots)
    }

    /// The haircut-type select is shown only while a haircut is selected.
    pub fn strizhka_visible(&self) -> bool {
        Service::parse(&self.fields.service).is_some_and(|s| s.has_strizhka_type())
    }

    fn check(&self, event: FormEvent) -> Result<FormPhase, AppError> {
        self.phase.next(event).ok_or(AppError::InvalidTransition {
            phase: self.phase,
            event,
        })
    }

    fn apply(&mut self, event: FormEvent) -> Result<(), AppError> {
        let next = self.check(event)?;
        tracing::debug!(from = self.phase.as_str(), to = next.as_str(), ?event, "form transition");
        self.phase = next;
        Ok(())
    }

    /// Loads the free slots for `date` (`YYYY-MM-DD`). An empty date is ignored.
    pub async fn change_date(
        &mut self,
        backend: &dyn BookingBackend,
        date: &str,
    ) -> Result<(), AppError> {
        let date = date.trim();
        if date.is_empty() {
            return Ok(());
        }

        let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|_| AppError::InvalidDate(date.to_string()))?;

        self.apply(FormEvent::DateChanged)?;
        self.fields.date = date.to_string();
        self.fields.time.clear();
        self.slots.clear();

        match backend.available_slots(parsed).await {
            Ok(slots) => {
                tracing::info!(date = %date, slots = slots.len(), "loaded available slots");
                self.slots = slots;
                self.apply(FormEvent::SlotsLoaded)
            }
            Err(e) => {
                let reason = format!("{e:#}");
                tracing::error!(date = %date, error = %reason, "failed to load slots");
                self.apply(FormEvent::SlotsFailed)?;
                Err(AppError::SlotsUnavailable(reason))
            }
        }
    }

    /// An empty value picks the placeholder and clears the time.
    pub fn select_time(&mut self, time: &str) -> Result<(), AppError> {
        if !time.is_empty() && !self.slots.iter().any(|s| s == time) {
            return Err(unknown("time", time));
        }
        self.fields.time = time.to_string();
        Ok(())
    }

    pub fn select_specialist(&mut self, specialist: &str) -> Result<(), AppError> {
        if !SPECIALISTS.iter().any(|s| *s == specialist) {
            return Err(unknown("specialist", specialist));
        }
        self.fields.specialist = specialist.to_string();
        Ok(())
    }

    pub fn select_service(&mut self, service: &str) -> Result<(), AppError> {
        let svc = Service::parse(service).ok_or_else(|| unknown("service", service))?;
        self.fields.service = svc.as_str().to_string();
        Ok(())
    }

    pub fn select_strizhka_type(&mut self, strizhka_type: &str) -> Result<(), AppError> {
        if !STRIZHKA_TYPES.iter().any(|t| *t == strizhka_type) {
            return Err(unknown("strizhka type", strizhka_type));
        }
        self.fields.strizhka_type = strizhka_type.to_string();
        Ok(())
    }

    pub fn set_name(&mut self, name: &str) {
        self.fields.name = name.to_string();
    }

    /// Keystroke in the phone input: only digits are kept.
    pub fn phone_input(&mut self, raw: &str) -> &str {
        self.fields.phone = phone::strip_non_digits(raw);
        &self.fields.phone
    }

    /// Phone input lost focus: reformat what is there.
    pub fn phone_blur(&mut self) -> &str {
        self.fields.phone = phone::normalize(&self.fields.phone);
        &self.fields.phone
    }

    /// Validates, posts the booking and moves to `Confirmed`.
    ///
    /// Validation and backend failures leave every field as entered.
    pub async fn submit(
        &mut self,
        backend: &dyn BookingBackend,
    ) -> Result<&Confirmation, AppError> {
        self.check(FormEvent::SubmitStarted)?;
        validate_fields(&self.fields, self.phone_format)?;
        let request = self.build_request()?;

        if request.service.has_strizhka_type() && request.strizhka_type.is_none() {
            tracing::warn!("haircut booked without a haircut type");
        }

        self.apply(FormEvent::SubmitStarted)?;

        match backend.create_appointment(&request).await {
            Ok(resp) => {
                tracing::info!(
                    date = %self.fields.date,
                    time = %request.time,
                    message = resp.message.as_deref().unwrap_or(""),
                    "appointment created"
                );
                self.apply(FormEvent::BookingAccepted)?;
                let confirmation = self.confirmation.insert(Confirmation::new(request));
                Ok(&*confirmation)
            }
            Err(e) => {
                let reason = format!("{e:#}");
                tracing::error!(error = %reason, "failed to create appointment");
                self.apply(FormEvent::BookingFailed)?;
                Err(AppError::BookingFailed(reason))
            }
        }
    }

    /// Closing the confirmation resets the whole form.
    pub fn close_confirmation(&mut self) -> Result<(), AppError> {
        self.apply(FormEvent::ConfirmationClosed)?;
        self.fields = FormFields::default();
        self.slots.clear();
        self.confirmation = None;
        Ok(())
    }

    fn build_request(&self) -> Result<BookingRequest, AppError> {
        let f = &self.fields;
        let date = NaiveDate::parse_from_str(&f.date, "%Y-%m-%d")
            .map_err(|_| AppError::InvalidDate(f.date.clone()))?;
        let service = Service::parse(&f.service).ok_or_else(|| unknown("service", &f.service))?;

        let strizhka_type = service
            .has_strizhka_type()
            .then(|| f.strizhka_type.clone())
            .filter(|t| !t.is_empty());

        Ok(BookingRequest {
            date,
            time: f.time.clone(),
            specialist: f.specialist.clone(),
            service,
            strizhka_type,
            name: f.name.clone(),
            phone: f.phone.clone(),
        })
    }
}

fn unknown(field: &'static str, value: &str) -> AppError {
    AppError::UnknownOption {
        field,
        value: value.to_string(),
    }
}
