//! CSV upload component with drag & drop support.
//!
//! Renders the drop zone, the selected-file summary, and the upload button.
//! All state lives in the [`FileUpload`] hook; this component only wires DOM
//! events to it.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Event, HtmlInputElement};

use crate::format::format_file_size;
use crate::hooks::FileUpload;

#[component]
pub fn UploadSection(upload: FileUpload) -> impl IntoView {
    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(files) = input.files() {
            if let Some(file) = files.get(0) {
                upload.select_file(file);
            }
        }
        // Clear the input so re-selecting the same file fires change again.
        input.set_value("");
    };

    let on_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
    };

    let on_drag_leave = move |ev: DragEvent| {
        ev.prevent_default();
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        if upload.uploading.get_untracked() {
            return;
        }
        if let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) {
            if let Some(file) = files.get(0) {
                upload.select_file(file);
            }
        }
    };

    // Clicking anywhere in the zone opens the browser file dialog.
    let open_file_dialog = move |_| {
        if upload.uploading.get_untracked() {
            return;
        }
        if let Some(element) = gloo_utils::document().get_element_by_id("file-input") {
            if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
                input.click();
            }
        }
    };

    let change_file = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        upload.reset();
    };

    let has_pending_upload = move || {
        upload.file.get().is_some()
            && !upload.uploading.get()
            && upload.job.get().job_id.is_none()
    };

    view! {
        <div
            class="upload-zone"
            class:disabled=move || upload.uploading.get()
            on:click=open_file_dialog
            on:dragover=on_drag_over
            on:dragleave=on_drag_leave
            on:drop=on_drop
        >
            <Show
                when=move || upload.file.get().is_some()
                fallback=|| view! {
                    <div class="upload-icon">"📤"</div>
                    <h3>"Drop your CSV file here"</h3>
                    <p class="upload-hint">"or click to browse"</p>
                    <label for="file-input" class="upload-button" on:click=|ev| ev.stop_propagation()>
                        "Choose File"
                    </label>
                    <p class="upload-hint small">"CSV files only"</p>
                }
            >
                <div class="file-selected">
                    <div class="file-icon">"✅"</div>
                    <p class="file-name">
                        {move || upload.file.get().map(|f| f.name()).unwrap_or_default()}
                    </p>
                    <p class="file-size">
                        {move || {
                            upload
                                .file
                                .get()
                                .map(|f| format_file_size(f.size()))
                                .unwrap_or_default()
                        }}
                    </p>
                    <button class="change-file" on:click=change_file>
                        "Change file"
                    </button>
                </div>
            </Show>

            <input
                type="file"
                id="file-input"
                accept=".csv"
                style="display:none"
                on:change=on_file_change
            />
        </div>

        <Show when=has_pending_upload fallback=|| view! { }>
            <div class="ready-panel">
                <p class="ready-title">"Ready to process"</p>
                <p class="ready-hint">
                    "Click the button below to upload your CSV file. "
                    "The system will aggregate sales by department."
                </p>
                <button class="submit-button" on:click=move |_| upload.upload()>
                    "Upload & Process CSV"
                </button>
            </div>
        </Show>
    }
}
