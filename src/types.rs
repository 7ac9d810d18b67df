//! Common types used across the frontend application.
//!
//! This module centralizes the backend API contract and the frontend error
//! type so they are defined in exactly one place.
//!
//! # Categories
//!
//! - **API Types** - Backend request/response structures
//! - **Error Types** - Frontend error handling

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// API Types
// =============================================================================

/// Lifecycle state of a server-side processing job.
///
/// A job moves monotonically from `Processing` to one of the terminal
/// states; the client must stop polling once a terminal state is seen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    /// The backend is still working on the file.
    Processing,
    /// Processing finished and a download is available.
    Completed,
    /// Processing failed; `error_message` carries the reason.
    Error,
}

impl JobStatus {
    /// `true` for statuses after which polling must stop.
    pub fn is_terminal(self) -> bool {
        matches!(self, JobStatus::Completed | JobStatus::Error)
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobStatus::Processing => write!(f, "processing"),
            JobStatus::Completed => write!(f, "completed"),
            JobStatus::Error => write!(f, "error"),
        }
    }
}

/// Metrics reported by the backend for a processed file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProcessingMetrics {
    /// Wall-clock processing time in milliseconds.
    pub processing_time_ms: u64,
    /// Rows successfully aggregated.
    pub rows_processed: u64,
    /// Malformed rows that were skipped.
    pub rows_skipped: u64,
    /// Number of distinct departments in the output.
    pub departments_count: u64,
    /// Peak resident memory during processing, in megabytes.
    pub peak_memory_mb: f64,
}

/// Response from `POST /api/upload`.
///
/// The backend sends `download_url` as an empty string when the job has not
/// completed yet; callers should treat empty strings as absent.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Opaque job identifier.
    pub job_id: String,
    /// Initial job status; may already be terminal for small files.
    pub status: JobStatus,
    #[serde(default)]
    pub download_url: Option<String>,
    /// Optional human-readable progress message.
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub metrics: Option<ProcessingMetrics>,
}

/// Response from `GET /api/status/{job_id}`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct JobStatusResponse {
    pub job_id: String,
    pub status: JobStatus,
    #[serde(default)]
    pub download_url: Option<String>,
    /// Populated (non-empty) only when `status` is `error`.
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub metrics: Option<ProcessingMetrics>,
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Unified error type for all frontend operations.
#[derive(Clone, Debug, PartialEq)]
pub enum AppError {
    /// Client-side validation failed; no request was sent.
    Validation(String),
    /// The upload request was rejected or failed in transit.
    Upload(String),
    /// A status request was rejected by the backend.
    Status(String),
    /// Network/HTTP error.
    Network(String),
    /// The backend sent a payload we could not decode.
    Decode(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(msg) => write!(f, "{}", msg),
            AppError::Upload(msg) => write!(f, "{}", msg),
            AppError::Status(msg) => write!(f, "{}", msg),
            AppError::Network(msg) => write!(f, "Network error: {}", msg),
            AppError::Decode(msg) => write!(f, "Invalid server response: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_deserialization() {
        let json = r#"{
            "job_id": "a1b2c3",
            "status": "completed",
            "download_url": "http://localhost:8000/api/download/a1b2c3",
            "error_message": "",
            "metrics": {
                "processing_time_ms": 1543,
                "rows_processed": 10000,
                "rows_skipped": 12,
                "departments_count": 8,
                "peak_memory_mb": 24.5
            }
        }"#;

        let response: JobStatusResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.job_id, "a1b2c3");
        assert_eq!(response.status, JobStatus::Completed);
        assert_eq!(response.error_message.as_deref(), Some(""));

        let metrics = response.metrics.unwrap();
        assert_eq!(metrics.rows_processed, 10_000);
        assert_eq!(metrics.departments_count, 8);
        assert!((metrics.peak_memory_mb - 24.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_status_deserialization_without_optional_fields() {
        let json = r#"{"job_id": "a1b2c3", "status": "processing"}"#;
        let response: JobStatusResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.status, JobStatus::Processing);
        assert!(response.download_url.is_none());
        assert!(response.metrics.is_none());
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let json = r#"{"job_id": "a1b2c3", "status": "queued"}"#;
        assert!(serde_json::from_str::<JobStatusResponse>(json).is_err());
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(!JobStatus::Processing.is_terminal());
        assert!(JobStatus::Completed.is_terminal());
        assert!(JobStatus::Error.is_terminal());
    }
}
