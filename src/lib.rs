//! CSV Sales Processor - Frontend Rust/Leptos Application
//!
//! A WebAssembly client for uploading CSV sales files to the processing
//! backend, polling the job until it finishes, and downloading the
//! aggregated result.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  UploadPage                                                  │
//! │  ├── Hero (title, description)                              │
//! │  ├── UploadSection (drag & drop, file select)               │
//! │  ├── ProgressBar (while uploading)                          │
//! │  ├── StatusPanel / ErrorMessage                             │
//! │  └── ResultPanel (metrics + download link)                  │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Backend API contract and error types
//! - [`state`] - Job state folded from backend responses
//! - [`hooks`] - Upload state machine and polling loop
//! - [`components`] - UI components
//! - [`services`] - Backend HTTP calls
//! - [`format`] - Byte-size, duration, and filename helpers

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod components;
pub mod config;
pub mod format;
pub mod hooks;
pub mod services;
pub mod state;
pub mod types;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // API
    JobStatus, JobStatusResponse, ProcessingMetrics, UploadResponse,
    // Errors
    AppError, AppResult,
};

// State
pub use state::JobState;

// Hooks
pub use hooks::{use_file_upload, FileUpload};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 CSV Sales Processor - Starting Leptos App");

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Meta
            name="description"
            content="Upload and process CSV files to get department-wise sales aggregation"
        />
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=UploadPage/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn UploadPage() -> impl IntoView {
    // All upload and polling state lives in the hook; the components below
    // only render it.
    let upload = use_file_upload();

    view! {
        <div class="container">
            <Hero/>
            <div class="card">
                <UploadSection upload=upload/>
                <ProgressBar upload=upload/>
                <StatusPanel upload=upload/>
                <ErrorMessage upload=upload/>
                <ResultPanel upload=upload/>
            </div>
        </div>

        <Footer/>
    }
}
