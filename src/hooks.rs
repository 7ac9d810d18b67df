//! Upload state machine and polling loop.
//!
//! [`use_file_upload`] owns every piece of client-side state: the selected
//! file, upload progress, and the [`JobState`] folded from backend responses.
//! Components only read the signals and call the handlers.
//!
//! While a job reports `processing`, a `spawn_local` loop polls the status
//! endpoint once per second. An epoch counter invalidates in-flight loops
//! whenever the state is reset, a new file is selected, or the owning
//! component is disposed, so a stale loop can never write into fresh state.

use gloo_timers::future::TimeoutFuture;
use leptos::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::File;

use crate::config::{BACKEND_URL, POLL_INTERVAL_MS};
use crate::format::is_csv_file;
use crate::services::{fetch_job_status, upload_csv};
use crate::state::JobState;

/// Reactive handle returned by [`use_file_upload`].
///
/// Cheap to copy; pass it to child components as a prop.
#[derive(Clone, Copy)]
pub struct FileUpload {
    /// Currently selected file, if any.
    pub file: ReadSignal<Option<File>>,
    /// `true` while the POST request is in flight.
    pub uploading: ReadSignal<bool>,
    /// Upload progress, 0-100.
    pub progress: ReadSignal<u32>,
    /// Job state folded from backend responses.
    pub job: RwSignal<JobState>,
    set_file: WriteSignal<Option<File>>,
    set_uploading: WriteSignal<bool>,
    set_progress: WriteSignal<u32>,
    epoch: StoredValue<u64>,
}

/// Create the upload state for a page.
///
/// Call once from the page component; the polling loop is tied to that
/// component's lifetime.
pub fn use_file_upload() -> FileUpload {
    let (file, set_file) = create_signal(None::<File>);
    let (uploading, set_uploading) = create_signal(false);
    let (progress, set_progress) = create_signal(0u32);
    let job = create_rw_signal(JobState::default());
    let epoch = store_value(0u64);

    // Invalidate any in-flight upload or poll loop on unmount.
    on_cleanup(move || {
        epoch.try_update_value(|e| *e += 1);
    });

    FileUpload {
        file,
        uploading,
        progress,
        job,
        set_file,
        set_uploading,
        set_progress,
        epoch,
    }
}

impl FileUpload {
    /// Select a file, replacing any previous job state.
    ///
    /// A non-CSV name produces an inline validation error and leaves the
    /// previous selection untouched; no request is sent.
    pub fn select_file(&self, file: File) {
        if !is_csv_file(&file.name()) {
            self.job.update(|j| j.error = Some("Please upload a CSV file".to_string()));
            return;
        }
        self.bump_epoch();
        log::info!("selected file: {} ({} bytes)", file.name(), file.size());
        self.set_file.set(Some(file));
        self.set_progress.set(0);
        self.job.update(JobState::clear);
    }

    /// Upload the selected file and start polling if the backend reports
    /// the job as still processing.
    pub fn upload(&self) {
        let this = *self;
        let Some(file) = this.file.get_untracked() else {
            this.job.update(|j| j.error = Some("Please select a file".to_string()));
            return;
        };

        this.bump_epoch();
        let my_epoch = this.current_epoch();

        spawn_local(async move {
            this.set_uploading.set(true);
            this.set_progress.set(0);
            this.job.update(|j| j.error = None);

            let set_progress = this.set_progress;
            let result = upload_csv(&file, BACKEND_URL, move |percent| {
                set_progress.set(percent);
            })
            .await;

            if this.epoch_changed(my_epoch) {
                return;
            }

            match result {
                Ok(response) => {
                    log::info!("upload accepted: job {} is {}", response.job_id, response.status);
                    this.set_progress.set(100);
                    this.job.update(|j| j.apply_upload(response));
                    // A terminal initial status renders directly; only a
                    // still-processing job needs the poll loop.
                    if this.job.with_untracked(JobState::is_processing) {
                        spawn_local(poll_job(this, my_epoch));
                    }
                }
                Err(e) => {
                    log::error!("upload failed: {}", e);
                    this.set_progress.set(0);
                    this.job.update(|j| j.error = Some(e.to_string()));
                }
            }

            this.set_uploading.set(false);
        });
    }

    /// Return everything to the idle state.
    pub fn reset(&self) {
        self.bump_epoch();
        self.set_file.set(None);
        self.set_uploading.set(false);
        self.set_progress.set(0);
        self.job.update(JobState::clear);
    }

    fn bump_epoch(&self) {
        self.epoch.update_value(|e| *e += 1);
    }

    fn current_epoch(&self) -> u64 {
        self.epoch.get_value()
    }

    /// `true` once `my_epoch` is stale, including after disposal.
    fn epoch_changed(&self, my_epoch: u64) -> bool {
        self.epoch.try_get_value() != Some(my_epoch)
    }
}

/// Poll the status endpoint every [`POLL_INTERVAL_MS`] until the job leaves
/// `processing` or the epoch moves on. Poll failures are logged and retried
/// on the next tick.
async fn poll_job(upload: FileUpload, my_epoch: u64) {
    loop {
        TimeoutFuture::new(POLL_INTERVAL_MS).await;
        if upload.epoch_changed(my_epoch) {
            return;
        }
        let Some(job_id) = upload.job.with_untracked(|j| j.job_id.clone()) else {
            return;
        };
        if !upload.job.with_untracked(JobState::is_processing) {
            return;
        }

        match fetch_job_status(BACKEND_URL, &job_id).await {
            Ok(response) => {
                if upload.epoch_changed(my_epoch) {
                    return;
                }
                upload.job.update(|j| j.apply_status(response));
                if !upload.job.with_untracked(JobState::is_processing) {
                    log::info!("job {} reached a terminal status, polling stopped", job_id);
                    return;
                }
            }
            Err(e) => {
                // Transient poll failures are retried on the next tick.
                log::warn!("status poll for job {} failed: {}", job_id, e);
            }
        }
    }
}
