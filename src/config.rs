use std::env;
use std::time::Duration;

use crate::services::phone::PhoneFormat;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub backend_url: String,
    pub phone_format: PhoneFormat,
    pub show_placeholders: bool,
    pub http_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            backend_url: env::var("BOOKING_API_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:5000".to_string()),
            phone_format: env::var("PHONE_FORMAT")
                .map(|v| PhoneFormat::parse(&v))
                .unwrap_or_default(),
            show_placeholders: env::var("FORM_PLACEHOLDERS")
                .ok()
                .map(|v| parse_flag(&v))
                .unwrap_or(true),
            http_timeout: Duration::from_secs(
                env::var("HTTP_TIMEOUT_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(10),
            ),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: "http://127.0.0.1:5000".to_string(),
            phone_format: PhoneFormat::Strict,
            show_placeholders: true,
            http_timeout: Duration::from_secs(10),
        }
    }
}

fn parse_flag(v: &str) -> bool {
    !matches!(
        v.trim().to_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}
