//! Client-side view of a processing job.
//!
//! [`JobState`] is the plain-data half of the upload hook: it folds backend
//! responses into the fields the UI renders, with no reactive machinery, so
//! the transition logic can be tested on the host target.

use crate::types::{JobStatus, JobStatusResponse, ProcessingMetrics, UploadResponse};

/// Everything the UI knows about the current job.
///
/// `Default` is the idle state: no job, no error.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct JobState {
    pub job_id: Option<String>,
    pub status: Option<JobStatus>,
    pub download_url: Option<String>,
    /// Progress message from the upload response, shown while processing.
    pub message: Option<String>,
    pub metrics: Option<ProcessingMetrics>,
    /// Validation, transport, or backend-reported error to display.
    pub error: Option<String>,
}

impl JobState {
    /// Fold the initial upload response into the state.
    pub fn apply_upload(&mut self, response: UploadResponse) {
        self.job_id = Some(response.job_id);
        self.status = Some(response.status);
        self.message = non_empty(response.message);
        if let Some(url) = non_empty(response.download_url) {
            self.download_url = Some(url);
        }
        if let Some(metrics) = response.metrics {
            self.metrics = Some(metrics);
        }
    }

    /// Fold a poll response into the state.
    ///
    /// The backend sends `download_url` and `error_message` as empty strings
    /// until they are meaningful; empty strings never overwrite anything.
    pub fn apply_status(&mut self, response: JobStatusResponse) {
        self.status = Some(response.status);
        if let Some(url) = non_empty(response.download_url) {
            self.download_url = Some(url);
        }
        if let Some(metrics) = response.metrics {
            self.metrics = Some(metrics);
        }
        if let Some(message) = non_empty(response.error_message) {
            self.error = Some(message);
        }
    }

    /// `true` while the poll loop should keep running.
    pub fn is_processing(&self) -> bool {
        self.status == Some(JobStatus::Processing)
    }

    /// `true` once a terminal status has been observed.
    pub fn is_terminal(&self) -> bool {
        self.status.is_some_and(JobStatus::is_terminal)
    }

    /// Back to idle.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn processing_upload() -> UploadResponse {
        UploadResponse {
            job_id: "job-42".to_string(),
            status: JobStatus::Processing,
            download_url: Some(String::new()),
            message: Some("File queued for processing".to_string()),
            metrics: None,
        }
    }

    fn metrics() -> ProcessingMetrics {
        ProcessingMetrics {
            processing_time_ms: 1_543,
            rows_processed: 10_000,
            rows_skipped: 12,
            departments_count: 8,
            peak_memory_mb: 24.5,
        }
    }

    #[test]
    fn test_upload_response_starts_processing() {
        let mut state = JobState::default();
        state.apply_upload(processing_upload());

        assert_eq!(state.job_id.as_deref(), Some("job-42"));
        assert!(state.is_processing());
        assert_eq!(state.message.as_deref(), Some("File queued for processing"));
        // Empty download_url from the backend must not surface as a link.
        assert!(state.download_url.is_none());
    }

    #[test]
    fn test_immediately_completed_upload_needs_no_polling() {
        let mut state = JobState::default();
        state.apply_upload(UploadResponse {
            job_id: "job-7".to_string(),
            status: JobStatus::Completed,
            download_url: Some("/api/download/job-7".to_string()),
            message: None,
            metrics: Some(metrics()),
        });

        assert!(state.is_terminal());
        assert!(!state.is_processing());
        assert_eq!(state.download_url.as_deref(), Some("/api/download/job-7"));
        assert!(state.metrics.is_some());
    }

    #[test]
    fn test_completion_via_poll() {
        let mut state = JobState::default();
        state.apply_upload(processing_upload());

        state.apply_status(JobStatusResponse {
            job_id: "job-42".to_string(),
            status: JobStatus::Processing,
            download_url: Some(String::new()),
            error_message: Some(String::new()),
            metrics: None,
        });
        assert!(state.is_processing());

        state.apply_status(JobStatusResponse {
            job_id: "job-42".to_string(),
            status: JobStatus::Completed,
            download_url: Some("/api/download/job-42".to_string()),
            error_message: Some(String::new()),
            metrics: Some(metrics()),
        });

        assert!(state.is_terminal());
        assert_eq!(state.download_url.as_deref(), Some("/api/download/job-42"));
        assert_eq!(state.metrics.as_ref().unwrap().rows_skipped, 12);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_failed_job_surfaces_error_message() {
        let mut state = JobState::default();
        state.apply_upload(processing_upload());

        state.apply_status(JobStatusResponse {
            job_id: "job-42".to_string(),
            status: JobStatus::Error,
            download_url: Some(String::new()),
            error_message: Some("bad header".to_string()),
            metrics: None,
        });

        assert!(state.is_terminal());
        assert_eq!(state.error.as_deref(), Some("bad header"));
        assert!(state.download_url.is_none());
    }

    #[test]
    fn test_clear_returns_to_idle() {
        let mut state = JobState::default();
        state.apply_upload(processing_upload());
        state.error = Some("boom".to_string());

        state.clear();
        assert_eq!(state, JobState::default());
    }
}
