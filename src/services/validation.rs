use std::sync::LazyLock;

use regex::Regex;

use crate::models::form::FormFields;
use crate::services::phone::PhoneFormat;

static CYRILLIC_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[а-яА-ЯёЁ\s]+$").expect("valid regex"));

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Пожалуйста, введите корректный номер телефона.")]
    InvalidPhone,

    #[error("Пожалуйста, введите корректное ФИО (только кириллица).")]
    InvalidName,

    #[error("Пожалуйста, заполните все обязательные поля!")]
    MissingFields,
}

/// Checks the submitted values, reporting only the first rule that fails:
/// phone shape, then Cyrillic-only name, then presence of every field.
///
/// The haircut type is not part of the presence check.
pub fn validate_fields(
    fields: &FormFields,
    phone_format: PhoneFormat,
) -> Result<(), ValidationError> {
    if !phone_format.matches(&fields.phone) {
        return Err(ValidationError::InvalidPhone);
    }

    if !CYRILLIC_NAME.is_match(&fields.name) {
        return Err(ValidationError::InvalidName);
    }

    let required = [
        &fields.date,
        &fields.time,
        &fields.specialist,
        &fields.service,
        &fields.name,
        &fields.phone,
    ];
    if required.iter().any(|v| v.is_empty()) {
        return Err(ValidationError::MissingFields);
    }

    Ok(())
}
