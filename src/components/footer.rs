//! Footer component

use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <div>
                "by " <span class="author">"Abrham Wube"</span>
                " • Powered by " <span class="rust-badge">"🦀 Rust + Leptos"</span>
            </div>
        </footer>
    }
}
