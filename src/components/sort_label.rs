//! Sort Label Component
//!
//! Clickable column header showing the active sort direction.

use leptos::prelude::*;
use property_search::{SortDirection, SortState};

/// Column header button; clicking reports `column` through `on_sort`
#[component]
pub fn SortLabel<C>(
    column: C,
    label: &'static str,
    #[prop(into)] sort: Signal<SortState<C>>,
    #[prop(into)] on_sort: Callback<C>,
) -> impl IntoView
where
    C: Copy + Eq + Send + Sync + 'static,
{
    let arrow = move || match sort.get().direction_for(column) {
        SortDirection::Ascending => "▲",
        SortDirection::Descending => "▼",
    };

    view! {
        <button
            type="button"
            class=move || if sort.get().is_active(column) { "sort-label active" } else { "sort-label" }
            aria-label=format!("Sort by {}", label.to_lowercase())
            on:click=move |_| on_sort.run(column)
        >
            {label}
            <span class="sort-arrow">{arrow}</span>
        </button>
    }
}
