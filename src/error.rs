//! Unified error types.

use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum PulseError {
    #[cfg(feature = "http")]
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// The exchange answered with a non-zero business error code.
    #[error("exchange error {code}: {msg}")]
    Exchange { code: String, msg: String },

    /// A well-formed response carried no data rows.
    #[error("no data: {0}")]
    NoData(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// HTTP-layer errors.
#[cfg(feature = "http")]
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("rate limited (retry after {retry_after_ms:?}ms)")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("not found: {0}")]
    NotFound(String),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("timeout")]
    Timeout,

    #[error("max retries exceeded after {attempts} attempts: {last_error}")]
    MaxRetriesExceeded { attempts: u32, last_error: String },
}

/// Persistence errors for the disk-backed stores.
///
/// These never propagate out of `record`/`prune` (the store logs and keeps
/// going); they are surfaced only by explicit `flush()` calls and the
/// internal load path.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("corrupt store file: {0}")]
    Corrupt(#[from] serde_json::Error),
}

impl StoreError {
    /// True when the underlying cause is a missing file — the normal
    /// first-run case, as opposed to an actual failure.
    pub fn is_missing_file(&self) -> bool {
        matches!(self, StoreError::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }
}
