//! Error Banner Component
//!
//! Dismissible notice for the most recent failed search.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ErrorBanner() -> impl IntoView {
    let store = use_app_store();
    let message = Memo::new(move |_| store.coordinator().read().last_error().map(str::to_string));

    move || {
        message.get().map(|msg| {
            view! {
                <div class="error-banner" role="alert">
                    <span>"Search failed: " {msg}</span>
                    <button
                        type="button"
                        class="dismiss-btn"
                        aria-label="Dismiss"
                        on:click=move |_| store.coordinator().write().dismiss_error()
                    >
                        "×"
                    </button>
                </div>
            }
        })
    }
}
