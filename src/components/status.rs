//! Processing status panel and inline error message.

use leptos::*;

use crate::hooks::FileUpload;

/// Shown while the backend reports the job as `processing`.
#[component]
pub fn StatusPanel(upload: FileUpload) -> impl IntoView {
    let job = upload.job;

    view! {
        <Show when=move || job.get().is_processing() fallback=|| view! { }>
            <div class="status-panel processing">
                <div class="spinner"></div>
                <div class="status-body">
                    <h3>"Processing..."</h3>
                    <p>
                        {move || {
                            job.get().message.unwrap_or_else(|| {
                                "Your file is being processed in the background.".to_string()
                            })
                        }}
                    </p>
                    <p class="job-id">
                        "Job ID: " {move || job.get().job_id.unwrap_or_default()}
                    </p>
                </div>
            </div>
        </Show>
    }
}

/// Inline error, for validation failures, upload failures, and
/// backend-reported job errors alike.
#[component]
pub fn ErrorMessage(upload: FileUpload) -> impl IntoView {
    let job = upload.job;

    view! {
        <Show when=move || job.get().error.is_some() fallback=|| view! { }>
            <div class="error-message">
                "❌ " {move || job.get().error.unwrap_or_default()}
            </div>
        </Show>
    }
}
