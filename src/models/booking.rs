use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::catalog::Service;

/// Body of `POST /appointment`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BookingRequest {
    #[serde(serialize_with = "date_format::serialize")]
    pub date: NaiveDate,
    pub time: String,
    pub specialist: String,
    pub service: Service,
    #[serde(rename = "strizhkaType")]
    pub strizhka_type: Option<String>,
    pub name: String,
    pub phone: String,
}

/// Text fields the backend may put in its JSON answer. Any other shape is
/// still a valid answer; the fields are then simply absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingResponse {
    pub message: Option<String>,
    pub error: Option<String>,
}

impl BookingResponse {
    pub fn from_json(value: &Value) -> Self {
        let text = |key: &str| value.get(key).and_then(Value::as_str).map(str::to_string);
        Self {
            message: text("message"),
            error: text("error"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SlotsResponse {
    pub slots: Vec<String>,
}

/// What the confirmation view shows after a successful booking.
#[derive(Debug, Clone, PartialEq)]
pub struct Confirmation {
    pub request: BookingRequest,
}

pub const CONFIRMATION_SUCCESS: &str = "Запись успешно создана!";

impl Confirmation {
    pub fn new(request: BookingRequest) -> Self {
        Self { request }
    }

    /// Labelled rows in display order. The haircut type appears only for haircuts.
    pub fn lines(&self) -> Vec<(&'static str, String)> {
        let r = &self.request;
        let mut lines = vec![
            ("Дата", r.date.format("%Y-%m-%d").to_string()),
            ("Время", r.time.clone()),
            ("Специалист", r.specialist.clone()),
            ("Услуга", r.service.as_str().to_string()),
        ];
        if r.service.has_strizhka_type() {
            lines.push(("Тип стрижки", r.strizhka_type.clone().unwrap_or_default()));
        }
        lines.push(("ФИО", r.name.clone()));
        lines.push(("Телефон", r.phone.clone()));
        lines
    }
}

impl fmt::Display for Confirmation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, value) in self.lines() {
            writeln!(f, "{label}: {value}")?;
        }
        write!(f, "\n{CONFIRMATION_SUCCESS}")
    }
}

mod date_format {
    use chrono::NaiveDate;
    use serde::Serializer;

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S: Serializer>(date: &NaiveDate, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&date.format(FORMAT).to_string())
    }
}
