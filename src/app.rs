//! Property Service Frontend App
//!
//! Page layout: navbar, search panel and the add-property modal.

use leptos::prelude::*;
use leptos::task::spawn_local;
use property_search::DictionaryKind;
use reactive_stores::Store;

use crate::api;
use crate::components::{PropertyAddModal, PropertySearch};
use crate::config;
use crate::context::AppContext;
use crate::store::{store_set_dictionary, AppState};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    let ctx = AppContext::new(store, config::load_config());

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Load lookup lists once; failures leave the selectors empty
    Effect::new(move |_| {
        let client = ctx.client();
        let timeout_ms = ctx.timeout_ms();
        spawn_local(async move {
            for kind in [DictionaryKind::PropertyType, DictionaryKind::SpaceType] {
                let items = api::load_dictionary(client.clone(), timeout_ms, kind).await;
                log::debug!("Loaded {} {:?} entries", items.len(), kind);
                store_set_dictionary(&store, kind, items);
            }
        });
    });

    view! {
        <div class="page-layout">
            <nav class="navbar">
                <a class="navbar-brand" href="#home">"Property Service"</a>
                <div class="navbar-actions">
                    <button type="button" class="nav-btn" on:click=move |_| ctx.show_add.set(false)>
                        "Search"
                    </button>
                    <button type="button" class="nav-btn" on:click=move |_| ctx.show_add.set(true)>
                        "Add"
                    </button>
                </div>
            </nav>

            <main class="main-content">
                <PropertySearch />
            </main>

            <PropertyAddModal />
        </div>
    }
}
