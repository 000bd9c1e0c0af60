//! Errors returned by record sources.

use super::retry::ErrorKind;

/// Failure to load supervision records. Returned to the caller instead of
/// being reported from inside the data-access layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("supervision record not found")]
    NotFound,
    #[error("record service temporarily unavailable (HTTP 502)")]
    Unavailable,
    #[error("record service returned HTTP {0}")]
    Status(u32),
    #[error("request failed: {0}")]
    Transport(#[from] curl::Error),
    #[error("invalid record payload: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("reading records: {0}")]
    Io(#[from] std::io::Error),
}

impl ApiError {
    /// Maps a non-2xx HTTP status to an error.
    pub fn from_status(code: u32) -> Self {
        match code {
            404 => ApiError::NotFound,
            502 => ApiError::Unavailable,
            other => ApiError::Status(other),
        }
    }

    /// Retry classification for this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Unavailable => ErrorKind::Unavailable,
            ApiError::Transport(e) if e.is_operation_timedout() => ErrorKind::Timeout,
            ApiError::Transport(e)
                if e.is_couldnt_connect()
                    || e.is_couldnt_resolve_host()
                    || e.is_recv_error()
                    || e.is_send_error()
                    || e.is_got_nothing() =>
            {
                ErrorKind::Connection
            }
            _ => ErrorKind::Other,
        }
    }
}
