//! Property Results Component
//!
//! Results table with server-side sorting, expandable spaces sub-rows,
//! average price footer and pagination. Clicking a cell opens the details
//! modal; the expand button only toggles its row.

use leptos::prelude::*;
use property_search::{
    row_action, ExpansionState, Property, PropertyColumn, RowAction, RowClick, SortState, Space,
};
use wasm_bindgen::JsCast;

use crate::components::{Pagination, PropertyDetailsModal, SortLabel};
use crate::context::use_app_context;
use crate::format::{format_money, format_number, format_price};
use crate::store::AppStateStoreFields;

const EXPAND_CONTROL_SELECTOR: &str = "button[aria-label=\"expand row\"]";

/// Hit-test the click target, not just the row it bubbled to
fn classify_click(ev: &web_sys::MouseEvent) -> RowClick {
    let on_control = ev
        .target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .and_then(|el| el.closest(EXPAND_CONTROL_SELECTOR).ok().flatten())
        .is_some();
    if on_control {
        RowClick::ExpandControl
    } else {
        RowClick::Cell
    }
}

/// Read-only spaces table shown under an expanded row
#[component]
fn SpacesTable(spaces: Vec<Space>) -> impl IntoView {
    view! {
        <div class="spaces-detail">
            <h6>"Spaces"</h6>
            <table class="spaces-table" aria-label="spaces">
                <thead>
                    <tr>
                        <th>"Type"</th>
                        <th>"Description"</th>
                        <th class="right">"Size (sq. ft)"</th>
                    </tr>
                </thead>
                <tbody>
                    {spaces.into_iter().map(|space| view! {
                        <tr>
                            <td>{space.space_type.unwrap_or_default()}</td>
                            <td>{space.description.unwrap_or_default()}</td>
                            <td class="right">{space.size}</td>
                        </tr>
                    }).collect_view()}
                </tbody>
            </table>
        </div>
    }
}

/// One property row plus its collapsible spaces row
#[component]
fn PropertyRow(
    property: Property,
    expansion: RwSignal<ExpansionState<u32>>,
    selected: RwSignal<Option<Property>>,
) -> impl IntoView {
    let id = property.id;
    let has_spaces = property.has_spaces();
    let is_open = move || expansion.with(|rows| rows.is_open(&id));

    let for_details = property.clone();
    let handle_click = Callback::new(move |click: RowClick| match row_action(click) {
        RowAction::ToggleExpand => expansion.update(|rows| rows.toggle(id)),
        RowAction::OpenDetails => selected.set(Some(for_details.clone())),
    });
    let on_cell_click = move |ev: web_sys::MouseEvent| handle_click.run(classify_click(&ev));

    let spaces = property.spaces.clone();
    let description = property.description.clone().unwrap_or_default();

    view! {
        <tr class="property-row">
            <td class="expand-cell">
                {has_spaces.then(|| view! {
                    <button
                        type="button"
                        class="expand-btn"
                        aria-label="expand row"
                        on:click=move |ev: web_sys::MouseEvent| {
                            ev.stop_propagation();
                            handle_click.run(RowClick::ExpandControl);
                        }
                    >
                        {move || if is_open() { "▲" } else { "▼" }}
                    </button>
                })}
            </td>
            <td class="clickable" on:click=on_cell_click>{property.address.clone()}</td>
            <td class="clickable" on:click=on_cell_click>{property.type_name.clone()}</td>
            <td class="clickable" on:click=on_cell_click>{description}</td>
            <td class="clickable center" on:click=on_cell_click>{format_price(property.price)}</td>
            <td class="clickable right" on:click=on_cell_click>
                {format_number(property.total_size(), 0, 3)}
            </td>
        </tr>
        {has_spaces.then(|| view! {
            <tr class="spaces-row">
                <td colspan="6">
                    <Show when=is_open>
                        <SpacesTable spaces=spaces.clone() />
                    </Show>
                </td>
            </tr>
        })}
    }
}

#[component]
pub fn PropertyResults() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let result = Memo::new(move |_| store.coordinator().read().result().clone());
    let generation = Memo::new(move |_| store.coordinator().read().generation());
    let loading = Signal::derive(move || ctx.is_loading());

    let expansion = RwSignal::new(ExpansionState::<u32>::default());
    let sort = RwSignal::new(SortState::<PropertyColumn>::default());
    let selected = RwSignal::new(None::<Property>);

    // Every replaced page starts fully collapsed
    Effect::new(move |_| {
        let _ = generation.get();
        let ids = store.coordinator().read_untracked().row_ids();
        expansion.set(ExpansionState::from_ids(ids));
    });

    let on_sort = move |column: PropertyColumn| {
        sort.update(|state| state.click(column));
        ctx.change_sort(sort.get_untracked().to_sort_spec());
    };

    let rows = move || {
        let current = generation.get();
        result
            .get()
            .results
            .into_iter()
            .map(|property| (current, property))
            .collect::<Vec<_>>()
    };

    view! {
        <div class="property-results">
            <div class="table-container">
                <table class="results-table" aria-label="property results table">
                    <thead>
                        <tr>
                            <th></th>
                            <th>
                                <SortLabel column=PropertyColumn::Address label="Address" sort=sort on_sort=on_sort />
                            </th>
                            <th>
                                <SortLabel column=PropertyColumn::Type label="Type" sort=sort on_sort=on_sort />
                            </th>
                            <th>"Description"</th>
                            <th class="center">
                                <SortLabel column=PropertyColumn::Price label="Price" sort=sort on_sort=on_sort />
                            </th>
                            <th class="right">"Total size (sq. ft)"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=rows
                            key=|(generation, property)| (*generation, property.id)
                            children=move |(_, property)| view! {
                                <PropertyRow property=property expansion=expansion selected=selected />
                            }
                        />
                    </tbody>
                </table>
                <Show when=move || result.with(|page| page.is_empty()) && !loading.get()>
                    <div class="no-results">"No properties found"</div>
                </Show>
                <Show when=move || loading.get()>
                    <div class="loading">"Loading..."</div>
                </Show>
            </div>

            <div class="average-price">
                <strong>"Average Price:"</strong>
                <span>{move || format_money(result.with(|page| page.average(|p| p.price)))}</span>
            </div>

            <Pagination
                result=result
                disabled=loading
                on_change=move |(page, page_size): (u32, u32)| ctx.change_page(page, page_size)
            />

            <PropertyDetailsModal selected=selected />
        </div>
    }
}
