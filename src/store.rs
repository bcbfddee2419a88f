//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use property_search::{DictionaryItem, DictionaryKind, SearchCoordinator};
use reactive_stores::Store;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Search criteria, paging, the displayed page and the loading flag
    pub coordinator: SearchCoordinator,
    /// Property type lookup list (filters and add form)
    pub property_types: Vec<DictionaryItem>,
    /// Space type lookup list (add form)
    pub space_types: Vec<DictionaryItem>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace one lookup list
pub fn store_set_dictionary(store: &AppStore, kind: DictionaryKind, items: Vec<DictionaryItem>) {
    match kind {
        DictionaryKind::PropertyType => *store.property_types().write() = items,
        DictionaryKind::SpaceType => *store.space_types().write() = items,
    }
}
