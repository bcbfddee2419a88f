//! Property Filters Component
//!
//! Address, type and price range inputs. Runs an unfiltered search on mount.

use leptos::prelude::*;
use property_search::{build_query, CriteriaInput};

use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

#[component]
pub fn PropertyFilters() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let (address, set_address) = signal(String::new());
    let (type_id, set_type_id) = signal(String::new());
    let (price_min, set_price_min) = signal(String::new());
    let (price_max, set_price_max) = signal(String::new());

    let run_search = move || {
        let input = CriteriaInput {
            type_id: type_id.get_untracked(),
            address: address.get_untracked(),
            price_min: price_min.get_untracked(),
            price_max: price_max.get_untracked(),
        };
        ctx.search(build_query(&input));
    };

    // First page, no filters, server-default order
    Effect::new(move |_| run_search());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        run_search();
    };

    view! {
        <form class="property-filters" on:submit=on_submit>
            <div class="filter-row">
                <label class="filter-field wide">
                    <span>"Address"</span>
                    <input
                        type="text"
                        aria-label="Property Address"
                        prop:value=move || address.get()
                        on:input=move |ev| set_address.set(event_target_value(&ev))
                    />
                </label>
                <label class="filter-field wide">
                    <span>"Type"</span>
                    <select
                        aria-label="Property Type"
                        prop:value=move || type_id.get()
                        on:change=move |ev| set_type_id.set(event_target_value(&ev))
                    >
                        <option value="">"Any type"</option>
                        <For
                            each=move || store.property_types().get()
                            key=|option| option.id
                            children=move |option| view! {
                                <option value=option.id.to_string() aria-label=option.name.clone()>
                                    {option.name.clone()}
                                </option>
                            }
                        />
                    </select>
                </label>
                <label class="filter-field">
                    <span>"Min Price"</span>
                    <input
                        type="number"
                        min="0"
                        aria-label="Minimum Price"
                        prop:value=move || price_min.get()
                        on:input=move |ev| set_price_min.set(event_target_value(&ev))
                    />
                </label>
                <label class="filter-field">
                    <span>"Max Price"</span>
                    <input
                        type="number"
                        min="0"
                        aria-label="Maximum Price"
                        prop:value=move || price_max.get()
                        on:input=move |ev| set_price_max.set(event_target_value(&ev))
                    />
                </label>
            </div>
            <div class="filter-actions">
                <button
                    type="submit"
                    class="primary-btn"
                    aria-label="Search Properties"
                    disabled=move || ctx.is_loading()
                >
                    "Search"
                </button>
            </div>
        </form>
    }
}
