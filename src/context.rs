//! Page Context
//!
//! Shared page-level state provided via Leptos Context API: the active tab,
//! the error modal and the loading overlay.

use leptos::prelude::*;

use crate::tabs::{Tab, TabEntry};

/// Page-wide signals provided via context
#[derive(Clone, Copy)]
pub struct PageContext {
    /// Currently visible tab - read
    pub active_tab: ReadSignal<Tab>,
    /// Currently visible tab - write
    set_active_tab: WriteSignal<Tab>,
    /// Message in the error modal (None = hidden) - read
    pub error_message: ReadSignal<Option<String>>,
    /// Message in the error modal (None = hidden) - write
    set_error_message: WriteSignal<Option<String>>,
    /// Loading overlay visibility - read
    pub loading: ReadSignal<bool>,
    /// Loading overlay visibility - write
    set_loading: WriteSignal<bool>,
    /// Bumped once per visualization tab entry - read
    pub visualization_requests: ReadSignal<u32>,
    /// Bumped once per visualization tab entry - write
    set_visualization_requests: WriteSignal<u32>,
}

impl PageContext {
    pub fn new() -> Self {
        let (active_tab, set_active_tab) = signal(Tab::Profile);
        let (error_message, set_error_message) = signal::<Option<String>>(None);
        let (loading, set_loading) = signal(false);
        let (visualization_requests, set_visualization_requests) = signal(0u32);
        Self {
            active_tab,
            set_active_tab,
            error_message,
            set_error_message,
            loading,
            set_loading,
            visualization_requests,
            set_visualization_requests,
        }
    }

    /// Activate a tab and start whatever work entering it requires
    pub fn switch_tab(&self, tab: Tab) {
        self.set_active_tab.set(tab);
        match tab.on_enter() {
            TabEntry::FetchVisualizations => self.set_visualization_requests.update(|n| *n += 1),
            TabEntry::Show => {}
        }
    }

    pub fn show_error(&self, message: impl Into<String>) {
        self.set_error_message.set(Some(message.into()));
    }

    pub fn dismiss_error(&self) {
        self.set_error_message.set(None);
    }

    pub fn show_loading(&self) {
        self.set_loading.set(true);
    }

    pub fn hide_loading(&self) {
        self.set_loading.set(false);
    }
}

/// Get the page context
pub fn use_page_context() -> PageContext {
    expect_context::<PageContext>()
}
