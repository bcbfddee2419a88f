//! Property Search Page
//!
//! Filters, error notice and the results table.

use leptos::prelude::*;

use crate::components::{ErrorBanner, PropertyFilters, PropertyResults};

#[component]
pub fn PropertySearch() -> impl IntoView {
    view! {
        <section class="property-search">
            <PropertyFilters />
            <ErrorBanner />
            <PropertyResults />
        </section>
    }
}
