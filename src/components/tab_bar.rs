//! Tab Bar Component
//!
//! Page-level tab buttons and the content panels they switch between.

use leptos::prelude::*;

use crate::context::use_page_context;
use crate::tabs::Tab;

/// One button per page tab; exactly one is active
#[component]
pub fn TabBar() -> impl IntoView {
    let ctx = use_page_context();

    view! {
        <div class="tabs">
            {Tab::ALL.into_iter().map(|tab| {
                let is_active = move || ctx.active_tab.get() == tab;
                view! {
                    <button
                        class=move || if is_active() { "tab-button active" } else { "tab-button" }
                        data-tab=tab.id()
                        on:click=move |_| ctx.switch_tab(tab)
                    >
                        {tab.title()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

/// Content for a tab, visible only while that tab is active.
///
/// Panels stay mounted when hidden so chart canvases keep their nodes.
#[component]
pub fn TabPanel(tab: Tab, children: Children) -> impl IntoView {
    let ctx = use_page_context();

    view! {
        <div
            id=tab.id()
            class=move || if ctx.active_tab.get() == tab { "tab-content active" } else { "tab-content" }
        >
            {children()}
        </div>
    }
}
