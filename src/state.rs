use crate::config::AppConfig;
use crate::services::backend::BookingBackend;

pub struct AppState {
    pub config: AppConfig,
    pub backend: Box<dyn BookingBackend>,
}
