//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <div class="hero-icon">"📊"</div>
            <h1>"CSV Sales Processor"</h1>
            <p class="subtitle">
                "Upload CSV files for department sales aggregation"
            </p>
        </div>
    }
}
