//! Error Banner Component
//!
//! Shared error surface. Hidden until an operation fails; the next failure
//! replaces the message, the next successful list fetch clears it.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn ErrorBanner() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <Show when=move || ctx.error_message.get().is_some()>
            <div id="error-message" class="error-message">
                {move || ctx.error_message.get().unwrap_or_default()}
            </div>
        </Show>
    }
}
