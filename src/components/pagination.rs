//! Pagination Component
//!
//! Rows-per-page selector, row range and previous/next controls.

use leptos::prelude::*;
use property_search::{PagedResult, Property, PAGE_SIZE_OPTIONS};

/// Pager for the results table. `on_change` receives `(page, page_size)`.
#[component]
pub fn Pagination(
    result: Memo<PagedResult<Property>>,
    #[prop(into)] disabled: Signal<bool>,
    #[prop(into)] on_change: Callback<(u32, u32)>,
) -> impl IntoView {
    let range_text = move || {
        let page = result.get();
        let (start, end) = page.row_range();
        format!("{}–{} of {}", start, end, page.total_count)
    };

    view! {
        <div class="pagination" aria-label="pagination">
            <label class="rows-per-page">
                "Rows per page:"
                <select
                    prop:value=move || result.get().page_size.to_string()
                    disabled=move || disabled.get()
                    on:change=move |ev| {
                        // A new page size restarts at the first page
                        if let Ok(size) = event_target_value(&ev).parse::<u32>() {
                            on_change.run((1, size));
                        }
                    }
                >
                    {PAGE_SIZE_OPTIONS.iter().map(|size| view! {
                        <option value=size.to_string()>{*size}</option>
                    }).collect_view()}
                </select>
            </label>

            <span class="page-range">{range_text}</span>

            <button
                type="button"
                class="page-btn"
                aria-label="Go to previous page"
                disabled=move || disabled.get() || !result.get().has_previous()
                on:click=move |_| {
                    let page = result.get_untracked();
                    on_change.run((page.page - 1, page.page_size));
                }
            >
                "‹"
            </button>
            <button
                type="button"
                class="page-btn"
                aria-label="Go to next page"
                disabled=move || disabled.get() || !result.get().has_next()
                on:click=move |_| {
                    let page = result.get_untracked();
                    on_change.run((page.page + 1, page.page_size));
                }
            >
                "›"
            </button>
        </div>
    }
}
