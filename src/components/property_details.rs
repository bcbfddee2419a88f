//! Property Details Modal
//!
//! Full property summary with a client-side sortable, filterable spaces table.

use leptos::prelude::*;
use property_search::table::view as table_view;
use property_search::{Property, SortState, Space, SpaceColumn};

use crate::components::SortLabel;
use crate::format::{format_money, format_number};

#[component]
fn SpacesGrid(spaces: Vec<Space>) -> impl IntoView {
    let spaces = StoredValue::new(spaces);
    let (filter, set_filter) = signal(String::new());
    let sort = RwSignal::new(SortState::by(SpaceColumn::Description));

    let on_sort = move |column: SpaceColumn| sort.update(|state| state.click(column));

    let rows = move || {
        let needle = filter.get();
        let state = sort.get();
        spaces.with_value(|all| {
            table_view(all, &needle, SpaceColumn::QUICK_FILTER, &state)
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="spaces-grid">
            <div class="grid-toolbar">
                <input
                    type="search"
                    class="quick-filter"
                    placeholder="Search..."
                    aria-label="Search spaces"
                    prop:value=move || filter.get()
                    on:input=move |ev| set_filter.set(event_target_value(&ev))
                />
            </div>
            <table class="spaces-table" aria-label="property spaces">
                <thead>
                    <tr>
                        <th>
                            <SortLabel column=SpaceColumn::Description label="Description" sort=sort on_sort=on_sort />
                        </th>
                        <th>
                            <SortLabel column=SpaceColumn::Type label="Type" sort=sort on_sort=on_sort />
                        </th>
                        <th class="right">
                            <SortLabel column=SpaceColumn::Size label="Size" sort=sort on_sort=on_sort />
                        </th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let visible = rows();
                        if visible.is_empty() {
                            view! { <tr><td colspan="3" class="no-results">"No spaces"</td></tr> }.into_any()
                        } else {
                            visible.into_iter().map(|space| view! {
                                <tr>
                                    <td>{space.description.unwrap_or_default()}</td>
                                    <td>{space.space_type.unwrap_or_default()}</td>
                                    <td class="right">{format_number(space.size, 0, 3)}</td>
                                </tr>
                            }).collect_view().into_any()
                        }
                    }}
                </tbody>
            </table>
        </div>
    }
}

/// Modal bound to the selected property; closing clears the selection
#[component]
pub fn PropertyDetailsModal(selected: RwSignal<Option<Property>>) -> impl IntoView {
    let close = move || selected.set(None);

    move || {
        selected.get().map(|property| {
            let description = property.description.clone().unwrap_or_default();
            view! {
                <div class="modal-backdrop" on:click=move |_| close()>
                    <div
                        class="modal property-details"
                        role="dialog"
                        aria-label="property details"
                        on:click=|ev: web_sys::MouseEvent| ev.stop_propagation()
                    >
                        <div class="modal-header">
                            <h3>"Property Details"</h3>
                            <button type="button" class="close-btn" aria-label="Close" on:click=move |_| close()>
                                "×"
                            </button>
                        </div>
                        <dl class="property-summary">
                            <dt>"Address"</dt>
                            <dd>{property.address.clone()}</dd>
                            <dt>"Type"</dt>
                            <dd>{property.type_name.clone()}</dd>
                            <dt>"Price"</dt>
                            <dd>{format_money(property.price)}</dd>
                            <dt>"Description"</dt>
                            <dd>{description}</dd>
                            <dt>"Total size (sq. ft)"</dt>
                            <dd>{format_number(property.total_size(), 0, 3)}</dd>
                        </dl>
                        <SpacesGrid spaces=property.spaces.clone() />
                    </div>
                </div>
            }
        })
    }
}
