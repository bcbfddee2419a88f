//! Application Context
//!
//! Shared handles provided via Leptos Context API, plus the glue that runs
//! coordinator requests in the background.

use leptos::prelude::*;
use leptos::task::spawn_local;
use property_search::{ApiConfig, HttpTransport, PendingFetch, PropertyClient, SearchCriteria, SortSpec};

use crate::api::{self, Client};
use crate::store::{AppStateStoreFields, AppStore};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Global state store
    pub store: AppStore,
    /// Whether the add-property modal is open
    pub show_add: RwSignal<bool>,
    client: StoredValue<Client, LocalStorage>,
    timeout_ms: u32,
}

impl AppContext {
    pub fn new(store: AppStore, config: ApiConfig) -> Self {
        let timeout_ms = config.timeout_ms;
        Self {
            store,
            show_add: RwSignal::new(false),
            client: StoredValue::new_local(PropertyClient::new(HttpTransport::new(config))),
            timeout_ms,
        }
    }

    pub fn client(&self) -> Client {
        self.client.get_value()
    }

    pub fn timeout_ms(&self) -> u32 {
        self.timeout_ms
    }

    /// Whether a search request is in flight (tracked)
    pub fn is_loading(&self) -> bool {
        self.store.coordinator().read().is_loading()
    }

    /// New search from page 1
    pub fn search(&self, criteria: SearchCriteria) {
        let pending = self.store.coordinator().write().search(criteria);
        self.dispatch(pending);
    }

    pub fn change_page(&self, page: u32, page_size: u32) {
        let pending = self.store.coordinator().write().change_page(page, page_size);
        self.dispatch(pending);
    }

    pub fn change_sort(&self, sort: Option<SortSpec>) {
        let pending = self.store.coordinator().write().change_sort(sort);
        self.dispatch(pending);
    }

    /// Re-run the current search (e.g. after a property was added)
    pub fn refresh(&self) {
        let pending = self.store.coordinator().write().refresh();
        self.dispatch(pending);
    }

    fn dispatch(&self, pending: PendingFetch) {
        let store = self.store;
        let client = self.client();
        let timeout_ms = self.timeout_ms;
        spawn_local(async move {
            let response = api::with_timeout(timeout_ms, client.search_properties(&pending.query)).await;
            store.coordinator().write().complete(pending.token, response);
        });
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
