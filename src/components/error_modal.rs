//! Error Modal Component
//!
//! Shared modal for validation and backend errors. Dismissed by the close
//! button or a click on the backdrop.

use leptos::prelude::*;

use crate::context::use_page_context;

#[component]
pub fn ErrorModal() -> impl IntoView {
    let ctx = use_page_context();

    view! {
        <div
            id="error-modal"
            class="modal"
            style:display=move || if ctx.error_message.get().is_some() { "block" } else { "none" }
            on:click=move |_| ctx.dismiss_error()
        >
            <div
                class="modal-content"
                on:click=move |ev| ev.stop_propagation()
            >
                <span class="close-button" on:click=move |_| ctx.dismiss_error()>"×"</span>
                <h3>"Error"</h3>
                <p id="error-message">{move || ctx.error_message.get().unwrap_or_default()}</p>
            </div>
        </div>
    }
}
