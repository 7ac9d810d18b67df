//! Terminal success panel: metrics, download link, reset.

use leptos::*;

use crate::format::{format_duration, group_digits};
use crate::hooks::FileUpload;
use crate::state::JobState;
use crate::types::JobStatus;

#[component]
pub fn ResultPanel(upload: FileUpload) -> impl IntoView {
    let job = upload.job;

    let completed = move || {
        let state = job.get();
        state.status == Some(JobStatus::Completed) && state.download_url.is_some()
    };

    view! {
        <Show when=completed fallback=|| view! { }>
            <div class="result-panel success">
                <h3>"Processing Complete!"</h3>
                <p>"Your file has been processed successfully."</p>

                <Show when=move || job.get().metrics.is_some() fallback=|| view! { }>
                    <MetricsDetail job=job/>
                </Show>

                <div class="result-actions">
                    <a
                        class="download-button"
                        href=move || job.get().download_url.unwrap_or_default()
                        download=""
                    >
                        "Download Processed File"
                    </a>
                    <button class="reset-button" on:click=move |_| upload.reset()>
                        "Process Another File"
                    </button>
                </div>

                <p class="job-id">
                    "Job ID: " {move || job.get().job_id.unwrap_or_default()}
                </p>
            </div>
        </Show>
    }
}

/// Metrics grid inside the success panel.
#[component]
fn MetricsDetail(job: RwSignal<JobState>) -> impl IntoView {
    let metric = move |render: fn(&crate::types::ProcessingMetrics) -> String| {
        job.get().metrics.as_ref().map(render).unwrap_or_default()
    };

    view! {
        <div class="metrics">
            <p class="metrics-title">"Processing Details:"</p>
            <div class="metrics-grid">
                <div class="metric">
                    <span class="metric-label">"Processing Time:"</span>
                    <span class="metric-value">
                        {move || metric(|m| format_duration(m.processing_time_ms))}
                    </span>
                </div>
                <div class="metric">
                    <span class="metric-label">"Rows Processed:"</span>
                    <span class="metric-value">
                        {move || metric(|m| group_digits(m.rows_processed))}
                    </span>
                </div>
                <div class="metric">
                    <span class="metric-label">"Rows Skipped:"</span>
                    <span class="metric-value">
                        {move || metric(|m| group_digits(m.rows_skipped))}
                    </span>
                </div>
                <div class="metric">
                    <span class="metric-label">"Departments:"</span>
                    <span class="metric-value">
                        {move || metric(|m| m.departments_count.to_string())}
                    </span>
                </div>
                <Show
                    when=move || job.get().metrics.is_some_and(|m| m.peak_memory_mb > 0.0)
                    fallback=|| view! { }
                >
                    <div class="metric wide">
                        <span class="metric-label">"Peak Memory:"</span>
                        <span class="metric-value">
                            {move || metric(|m| format!("{} MB", m.peak_memory_mb))}
                        </span>
                    </div>
                </Show>
            </div>
        </div>
    }
}
