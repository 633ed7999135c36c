//! Loading Overlay Component

use leptos::prelude::*;

use crate::context::use_page_context;

/// Full-page overlay shown while a plan is being generated
#[component]
pub fn LoadingOverlay() -> impl IntoView {
    let ctx = use_page_context();

    view! {
        <div
            id="loading-overlay"
            class="loading-overlay"
            style:display=move || if ctx.loading.get() { "flex" } else { "none" }
        >
            <div class="spinner"></div>
            <p>"Generating your personalized meal plan..."</p>
        </div>
    }
}
