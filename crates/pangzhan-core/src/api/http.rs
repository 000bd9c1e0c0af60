//! Read-only client for the supervision record REST API (libcurl).

use super::error::ApiError;
use super::retry::RetryPolicy;
use super::{records_from_value, Page, RecordSource};
use crate::config::ApiConfig;
use crate::record::{RecordId, SupervisionRecord};
use std::time::Duration;

/// Record source backed by `GET {base}/pangzhan/...`.
///
/// Requests run on the calling thread; 502 responses and transport failures
/// are retried according to `retry`.
#[derive(Debug, Clone)]
pub struct HttpRecordSource {
    base_url: String,
    retry: RetryPolicy,
    timeout: Duration,
}

impl HttpRecordSource {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            retry: RetryPolicy::default(),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn from_config(cfg: &ApiConfig) -> Self {
        Self::new(&cfg.base_url).with_retry(cfg.retry_policy())
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn get_json(&self, path: &str) -> Result<serde_json::Value, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let body = self.retry.run(|| self.get_once(&url), ApiError::kind)?;
        Ok(serde_json::from_slice(&body)?)
    }

    fn get_once(&self, url: &str) -> Result<Vec<u8>, ApiError> {
        tracing::debug!(url, "GET");
        let mut body = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.get(true)?;
        easy.follow_location(true)?;
        easy.connect_timeout(Duration::from_secs(15))?;
        easy.timeout(self.timeout)?;

        let mut headers = curl::easy::List::new();
        headers.append("accept: application/json")?;
        easy.http_headers(headers)?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        if !(200..300).contains(&code) {
            return Err(ApiError::from_status(code));
        }
        Ok(body)
    }
}

impl RecordSource for HttpRecordSource {
    fn list_records(&self, page: Page) -> Result<Vec<SupervisionRecord>, ApiError> {
        let value = self.get_json(&format!(
            "/pangzhan/?skip={}&limit={}",
            page.skip, page.limit
        ))?;
        records_from_value(value)
    }

    fn get_record(&self, id: RecordId) -> Result<SupervisionRecord, ApiError> {
        let value = self.get_json(&format!("/pangzhan/{id}"))?;
        Ok(serde_json::from_value(value)?)
    }
}
