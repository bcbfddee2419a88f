//! Add Property Modal
//!
//! Form with a dynamic list of spaces. Submission validates before posting
//! and refreshes the current search on success.

use leptos::prelude::*;
use leptos::task::spawn_local;
use property_search::{FieldKey, PropertyDraft, SpaceDraft, SubmitError, ValidationErrors};

use crate::api;
use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

/// Inline message under a form field
#[component]
fn FieldError(errors: RwSignal<ValidationErrors>, field: FieldKey) -> impl IntoView {
    move || {
        errors
            .with(|e| e.get(field))
            .map(|message| view! { <span class="field-error">{message}</span> })
    }
}

#[component]
fn SpaceFields(
    idx: usize,
    draft: RwSignal<PropertyDraft>,
    errors: RwSignal<ValidationErrors>,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let read = move |f: fn(&SpaceDraft) -> String| {
        draft.with(|d| d.spaces.get(idx).map(f).unwrap_or_default())
    };
    let write = move |f: fn(&mut SpaceDraft, String), value: String| {
        draft.update(|d| {
            if let Some(space) = d.space_mut(idx) {
                f(space, value);
            }
        })
    };

    view! {
        <div class="space-fields">
            <label class="form-field">
                <span>"Description"</span>
                <input
                    type="text"
                    aria-label="Space Description"
                    class:invalid=move || errors.with(|e| e.has(FieldKey::SpaceDescription(idx)))
                    prop:value=move || read(|s| s.description.clone())
                    on:input=move |ev| write(|s, v| s.description = v, event_target_value(&ev))
                />
                <FieldError errors=errors field=FieldKey::SpaceDescription(idx) />
            </label>
            <label class="form-field">
                <span>"Size (sq. ft)"</span>
                <input
                    type="number"
                    min="0"
                    aria-label="Space Size"
                    class:invalid=move || errors.with(|e| e.has(FieldKey::SpaceSize(idx)))
                    prop:value=move || read(|s| s.size.clone())
                    on:input=move |ev| write(|s, v| s.size = v, event_target_value(&ev))
                />
                <FieldError errors=errors field=FieldKey::SpaceSize(idx) />
            </label>
            <label class="form-field">
                <span>"Type"</span>
                <select
                    aria-label="Space Type"
                    prop:value=move || read(|s| s.type_id.clone())
                    on:change=move |ev| write(|s, v| s.type_id = v, event_target_value(&ev))
                >
                    <option value="">"Select type"</option>
                    <For
                        each=move || store.space_types().get()
                        key=|option| option.id
                        children=move |option| view! {
                            <option value=option.id.to_string()>{option.name.clone()}</option>
                        }
                    />
                </select>
            </label>
            <button
                type="button"
                class="icon-btn"
                aria-label="Remove space"
                on:click=move |_| {
                    draft.update(|d| d.remove_space(idx));
                    // Indices shift, so per-space messages no longer line up
                    errors.set(ValidationErrors::default());
                }
            >
                "−"
            </button>
        </div>
    }
}

#[component]
pub fn PropertyAddModal() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let show = ctx.show_add;

    let draft = RwSignal::new(PropertyDraft::default());
    let errors = RwSignal::new(ValidationErrors::default());
    let save_error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let reset = move || {
        draft.set(PropertyDraft::default());
        errors.set(ValidationErrors::default());
        save_error.set(None);
    };
    let close = move || {
        show.set(false);
        reset();
    };

    let field = move |f: fn(&PropertyDraft) -> String| draft.with(f);
    let set_field = move |f: fn(&mut PropertyDraft, String), value: String| draft.update(|d| f(d, value));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        errors.set(ValidationErrors::default());
        save_error.set(None);
        saving.set(true);

        let submitted = draft.get_untracked();
        let client = ctx.client();
        let timeout_ms = ctx.timeout_ms();
        spawn_local(async move {
            let response = api::with_timeout(timeout_ms, client.submit(&submitted)).await;
            saving.set(false);
            match response {
                Ok(created) => {
                    log::info!(
                        "Created property {}",
                        created.map(|p| p.id.to_string()).unwrap_or_else(|| "(no body)".into())
                    );
                    close();
                    ctx.refresh();
                }
                Err(SubmitError::Invalid(invalid)) => {
                    log::debug!("Add property form rejected: {}", invalid);
                    errors.set(invalid);
                }
                Err(SubmitError::Api(e)) => {
                    log::error!("Failed to create property: {}", e);
                    save_error.set(Some(e.to_string()));
                }
            }
        });
    };

    let space_indices = move || draft.with(|d| (0..d.spaces.len()).collect::<Vec<_>>());

    view! {
        <Show when=move || show.get()>
            <div class="modal-backdrop">
                <div class="modal property-add" role="dialog" aria-label="add property">
                    <div class="modal-header">
                        <h3>"Add Property"</h3>
                        <button type="button" class="close-btn" aria-label="Close" on:click=move |_| close()>
                            "×"
                        </button>
                    </div>
                    <form on:submit=on_submit>
                        <label class="form-field">
                            <span>"Address"</span>
                            <input
                                type="text"
                                aria-label="Address"
                                class:invalid=move || errors.with(|e| e.has(FieldKey::Address))
                                prop:value=move || field(|d| d.address.clone())
                                on:input=move |ev| set_field(|d, v| d.address = v, event_target_value(&ev))
                            />
                            <FieldError errors=errors field=FieldKey::Address />
                        </label>
                        <label class="form-field">
                            <span>"Type"</span>
                            <select
                                aria-label="Type"
                                class:invalid=move || errors.with(|e| e.has(FieldKey::Type))
                                prop:value=move || field(|d| d.type_id.clone())
                                on:change=move |ev| set_field(|d, v| d.type_id = v, event_target_value(&ev))
                            >
                                <option value="">"Select type"</option>
                                <For
                                    each=move || store.property_types().get()
                                    key=|option| option.id
                                    children=move |option| view! {
                                        <option value=option.id.to_string()>{option.name.clone()}</option>
                                    }
                                />
                            </select>
                            <FieldError errors=errors field=FieldKey::Type />
                        </label>
                        <label class="form-field">
                            <span>"Price"</span>
                            <input
                                type="number"
                                min="0"
                                aria-label="Price"
                                class:invalid=move || errors.with(|e| e.has(FieldKey::Price))
                                prop:value=move || field(|d| d.price.clone())
                                on:input=move |ev| set_field(|d, v| d.price = v, event_target_value(&ev))
                            />
                            <FieldError errors=errors field=FieldKey::Price />
                        </label>
                        <label class="form-field">
                            <span>"Description"</span>
                            <textarea
                                rows="3"
                                aria-label="Description"
                                prop:value=move || field(|d| d.description.clone())
                                on:input=move |ev| set_field(|d, v| d.description = v, event_target_value(&ev))
                            ></textarea>
                        </label>

                        <div class="spaces-section">
                            <div class="section-header">
                                <h4>"Spaces"</h4>
                                <button
                                    type="button"
                                    class="icon-btn"
                                    aria-label="Add space"
                                    on:click=move |_| draft.update(|d| d.add_space())
                                >
                                    "+"
                                </button>
                            </div>
                            <For
                                each=space_indices
                                key=|idx| *idx
                                children=move |idx| view! { <SpaceFields idx=idx draft=draft errors=errors /> }
                            />
                        </div>

                        {move || save_error.get().map(|msg| view! {
                            <div class="error-banner" role="alert">"Could not save property: " {msg}</div>
                        })}

                        <div class="modal-actions">
                            <button type="button" class="secondary-btn" on:click=move |_| close()>
                                "Cancel"
                            </button>
                            <button type="submit" class="primary-btn" disabled=move || saving.get()>
                                {move || if saving.get() { "Saving..." } else { "Save" }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
