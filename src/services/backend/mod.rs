pub mod http;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::models::{BookingRequest, BookingResponse};

/// The booking server behind `/available-slots` and `/appointment`.
#[async_trait]
pub trait BookingBackend: Send + Sync {
    async fn available_slots(&self, date: NaiveDate) -> anyhow::Result<Vec<String>>;

    async fn create_appointment(
        &self,
        request: &BookingRequest,
    ) -> anyhow::Result<BookingResponse>;
}
