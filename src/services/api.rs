//! HTTP client for the sales processing backend.
//!
//! Two calls: a multipart upload and a job status poll. The status poll uses
//! `gloo-net`; the upload goes through `XmlHttpRequest` because the fetch API
//! has no upload-progress events, and the progress bar needs them.

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use gloo_net::http::Request;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{File, FormData, ProgressEvent, XmlHttpRequest};

use crate::types::{AppError, AppResult, JobStatusResponse, UploadResponse};

const UPLOAD_FALLBACK: &str = "Upload failed. Please try again.";
const STATUS_FALLBACK: &str = "Failed to fetch job status.";

/// Upload a CSV file to the backend.
///
/// `on_progress` receives the request-body progress as an integer percentage
/// whenever the browser reports it.
pub async fn upload_csv<F>(file: &File, base_url: &str, on_progress: F) -> AppResult<UploadResponse>
where
    F: Fn(u32) + 'static,
{
    let form = FormData::new()
        .map_err(|e| AppError::Upload(format!("failed to create form data: {:?}", e)))?;
    form.append_with_blob("file", file)
        .map_err(|e| AppError::Upload(format!("failed to append file: {:?}", e)))?;

    let xhr = XmlHttpRequest::new()
        .map_err(|e| AppError::Upload(format!("failed to create request: {:?}", e)))?;
    let url = format!("{}/api/upload", base_url);
    xhr.open("POST", &url)
        .map_err(|e| AppError::Upload(format!("failed to open request: {:?}", e)))?;

    let progress_cb = Closure::<dyn FnMut(ProgressEvent)>::new(move |event: ProgressEvent| {
        if event.length_computable() && event.total() > 0.0 {
            let percent = ((event.loaded() / event.total()) * 100.0).round() as u32;
            on_progress(percent.min(100));
        }
    });
    xhr.upload()
        .map_err(|e| AppError::Upload(format!("failed to access upload stream: {:?}", e)))?
        .set_onprogress(Some(progress_cb.as_ref().unchecked_ref()));

    // loadend fires exactly once, for success, HTTP error, and network
    // failure alike; the sender is consumed on the first call.
    let (done_tx, done_rx) = oneshot::channel::<()>();
    let done_tx = Rc::new(RefCell::new(Some(done_tx)));
    let loadend_cb = {
        let done_tx = Rc::clone(&done_tx);
        Closure::<dyn FnMut(ProgressEvent)>::new(move |_: ProgressEvent| {
            if let Some(tx) = done_tx.borrow_mut().take() {
                let _ = tx.send(());
            }
        })
    };
    xhr.set_onloadend(Some(loadend_cb.as_ref().unchecked_ref()));

    xhr.send_with_opt_form_data(Some(&form))
        .map_err(|e| AppError::Network(format!("{:?}", e)))?;

    done_rx
        .await
        .map_err(|_| AppError::Network("upload interrupted".to_string()))?;

    let status = xhr.status().unwrap_or(0);
    if status == 0 {
        return Err(AppError::Network("could not reach the server".to_string()));
    }

    let body = xhr.response_text().ok().flatten().unwrap_or_default();
    if !(200..300).contains(&status) {
        return Err(AppError::Upload(extract_error(&body, UPLOAD_FALLBACK)));
    }

    serde_json::from_str(&body).map_err(|e| AppError::Decode(e.to_string()))
}

/// Fetch the current status of a job.
pub async fn fetch_job_status(base_url: &str, job_id: &str) -> AppResult<JobStatusResponse> {
    let url = format!("{}/api/status/{}", base_url, job_id);
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| AppError::Network(e.to_string()))?;

    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(AppError::Status(extract_error(&body, STATUS_FALLBACK)));
    }

    response
        .json::<JobStatusResponse>()
        .await
        .map_err(|e| AppError::Decode(e.to_string()))
}

/// Pull the backend's `{"error": "..."}` reason out of an error body,
/// falling back to a generic message for anything else.
fn extract_error(body: &str, fallback: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("error")
                .and_then(|e| e.as_str())
                .map(str::to_owned)
        })
        .unwrap_or_else(|| fallback.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::JobStatus;

    #[test]
    fn test_upload_response_deserialization() {
        let json = r#"{
            "job_id": "123e4567-e89b-12d3-a456-426614174000",
            "status": "processing",
            "download_url": "",
            "message": "File uploaded, processing started"
        }"#;

        let response: UploadResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.job_id, "123e4567-e89b-12d3-a456-426614174000");
        assert_eq!(response.status, JobStatus::Processing);
        assert_eq!(response.download_url.as_deref(), Some(""));
        assert!(response.metrics.is_none());
    }

    #[test]
    fn test_extract_error_from_backend_body() {
        assert_eq!(
            extract_error(r#"{"error": "No file provided"}"#, UPLOAD_FALLBACK),
            "No file provided"
        );
    }

    #[test]
    fn test_extract_error_falls_back() {
        assert_eq!(extract_error("", UPLOAD_FALLBACK), UPLOAD_FALLBACK);
        assert_eq!(
            extract_error("<html>502 Bad Gateway</html>", STATUS_FALLBACK),
            STATUS_FALLBACK
        );
        assert_eq!(
            extract_error(r#"{"detail": "other shape"}"#, UPLOAD_FALLBACK),
            UPLOAD_FALLBACK
        );
    }
}
