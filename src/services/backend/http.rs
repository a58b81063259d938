use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::Value;

use super::BookingBackend;
use crate::models::{BookingRequest, BookingResponse, SlotsResponse};

pub struct HttpBookingBackend {
    base_url: String,
    client: reqwest::Client,
}

impl HttpBookingBackend {
    pub fn new(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

#[async_trait]
impl BookingBackend for HttpBookingBackend {
    async fn available_slots(&self, date: NaiveDate) -> anyhow::Result<Vec<String>> {
        let date = date.format("%Y-%m-%d").to_string();

        let data: SlotsResponse = self
            .client
            .get(self.url("/available-slots"))
            .query(&[("date", date.as_str())])
            .send()
            .await
            .context("failed to call /available-slots")?
            .error_for_status()
            .context("/available-slots returned error")?
            .json()
            .await
            .context("failed to parse slots response")?;

        Ok(data.slots)
    }

    async fn create_appointment(
        &self,
        request: &BookingRequest,
    ) -> anyhow::Result<BookingResponse> {
        let resp = self
            .client
            .post(self.url("/appointment"))
            .json(request)
            .send()
            .await
            .context("failed to call /appointment")?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .context("failed to read appointment response")?;

        if !status.is_success() {
            let reason = serde_json::from_str::<Value>(&body)
                .ok()
                .and_then(|v| BookingResponse::from_json(&v).error);
            anyhow::bail!(
                "appointment rejected ({}): {}",
                status,
                reason.as_deref().unwrap_or("no reason given")
            );
        }

        let data: Value =
            serde_json::from_str(&body).context("failed to parse appointment response")?;
        Ok(BookingResponse::from_json(&data))
    }
}
