use crate::models::form::{FormEvent, FormPhase};
use crate::services::validation::ValidationError;

pub const SLOTS_ALERT: &str = "Произошла ошибка при получении доступных слотов, попробуйте снова.";
pub const BOOKING_ALERT: &str = "Произошла ошибка при записи, попробуйте снова.";
pub const UNKNOWN_OPTION_ALERT: &str = "Пожалуйста, выберите значение из списка.";
pub const BUSY_ALERT: &str = "Подождите, предыдущий запрос ещё выполняется.";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("invalid date: {0}")]
    InvalidDate(String),

    #[error("{field} has no option {value:?}")]
    UnknownOption { field: &'static str, value: String },

    #[error("cannot apply {event:?} while {}", .phase.as_str())]
    InvalidTransition { phase: FormPhase, event: FormEvent },

    #[error("failed to load slots: {0}")]
    SlotsUnavailable(String),

    #[error("booking failed: {0}")]
    BookingFailed(String),
}

impl AppError {
    /// Text shown to the user in a blocking alert.
    pub fn alert_message(&self) -> String {
        match self {
            AppError::Validation(e) => e.to_string(),
            AppError::SlotsUnavailable(_) => SLOTS_ALERT.to_string(),
            AppError::BookingFailed(_) => BOOKING_ALERT.to_string(),
            AppError::InvalidDate(date) => {
                format!("Некорректная дата «{date}». Используйте формат ГГГГ-ММ-ДД.")
            }
            AppError::UnknownOption { .. } => UNKNOWN_OPTION_ALERT.to_string(),
            AppError::InvalidTransition { .. } => BUSY_ALERT.to_string(),
        }
    }
}
