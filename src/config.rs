//! Application configuration.
//!
//! Centralized configuration for the frontend. The backend base URL can be
//! overridden at build time; everything else is fixed.

/// Backend API base URL.
///
/// Overridden at compile time via the `API_BASE_URL` environment variable.
pub const BACKEND_URL: &str = match option_env!("API_BASE_URL") {
    Some(url) => url,
    None => "http://localhost:8000",
};

/// Interval between job status polls, in milliseconds.
pub const POLL_INTERVAL_MS: u32 = 1_000;

/// Application name, used for the page title.
pub const APP_NAME: &str = "CSV Sales Processor";
