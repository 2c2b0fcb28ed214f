//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Bumped to re-run the list fetch - read
    pub reload_trigger: ReadSignal<u32>,
    set_reload_trigger: WriteSignal<u32>,
    /// Error banner text, None while hidden - read
    pub error_message: ReadSignal<Option<String>>,
    set_error_message: WriteSignal<Option<String>>,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        error_message: (ReadSignal<Option<String>>, WriteSignal<Option<String>>),
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            error_message: error_message.0,
            set_error_message: error_message.1,
        }
    }

    /// Trigger a full refetch of the recipe list
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Show a message in the error banner, replacing any previous one
    pub fn show_error(&self, message: impl Into<String>) {
        self.set_error_message.set(Some(message.into()));
    }

    /// Hide the error banner; runs after every successful list fetch
    pub fn clear_error(&self) {
        self.set_error_message.set(None);
    }
}
