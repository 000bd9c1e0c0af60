//! Access to supervision records held by the external record store.
//!
//! The store is consumed, not designed here: an HTTP source for the live REST
//! API and a file source for JSON exports share one trait. Failures come back
//! as [`ApiError`] values; presenting them is the caller's job.

mod error;
mod file;
mod http;
mod retry;

pub use error::ApiError;
pub use file::FileRecordSource;
pub use http::HttpRecordSource;
pub use retry::{ErrorKind, RetryDecision, RetryPolicy};

use crate::record::{RecordId, SupervisionRecord};

/// Offset/limit window for listing records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub skip: u32,
    pub limit: u32,
}

impl Default for Page {
    fn default() -> Self {
        Self { skip: 0, limit: 50 }
    }
}

/// Anything that can list and fetch supervision records.
pub trait RecordSource {
    fn list_records(&self, page: Page) -> Result<Vec<SupervisionRecord>, ApiError>;
    fn get_record(&self, id: RecordId) -> Result<SupervisionRecord, ApiError>;
}

/// The list endpoint returns a bare array; anything else is treated as no
/// records rather than an error.
fn records_from_value(value: serde_json::Value) -> Result<Vec<SupervisionRecord>, ApiError> {
    match value {
        serde_json::Value::Array(_) => Ok(serde_json::from_value(value)?),
        other => {
            tracing::debug!(kind = json_kind(&other), "record list payload is not an array");
            Ok(Vec::new())
        }
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
