//! HTTP client layer — `PulseHttp` with per-endpoint retry policies.

pub mod client;
pub mod retry;

pub use client::PulseHttp;
pub use retry::{RetryConfig, RetryPolicy};
