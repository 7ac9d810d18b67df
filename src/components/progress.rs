//! Upload progress bar.

use leptos::*;

use crate::hooks::FileUpload;

#[component]
pub fn ProgressBar(upload: FileUpload) -> impl IntoView {
    view! {
        <Show when=move || upload.uploading.get() fallback=|| view! { }>
            <div class="progress-section">
                <div class="progress-labels">
                    <span>"⏳ Uploading..."</span>
                    <span class="progress-percent">
                        {move || format!("{}%", upload.progress.get())}
                    </span>
                </div>
                <div class="progress-bar">
                    <div
                        class="progress-fill"
                        style=move || format!("width: {}%", upload.progress.get())
                    ></div>
                </div>
            </div>
        </Show>
    }
}
