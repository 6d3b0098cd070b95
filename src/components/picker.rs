use leptos::*;

use crate::models::{Lookup, NewLookup};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen_futures::spawn_local;

#[cfg(target_arch = "wasm32")]
use crate::api;

/// Which lookup collection a picker works against.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum LookupKind {
    Category,
    Brand,
}

impl LookupKind {
    pub fn label(self) -> &'static str {
        match self {
            LookupKind::Category => "Category",
            LookupKind::Brand => "Brand",
        }
    }

    fn create_error(self) -> &'static str {
        match self {
            LookupKind::Category => "Failed to create category. Please try again.",
            LookupKind::Brand => "Failed to create brand. Please try again.",
        }
    }
}

/// Modal for selecting a category or brand, with search and inline creation.
/// Selecting an entry is reported through `on_select`; a successful inline
/// create is reported through `on_created` with the record the server
/// returned. A blank new-entry name issues no request and changes nothing.
#[component]
pub fn PickerModal(
    kind: LookupKind,
    #[prop(into)] items: Signal<Vec<Lookup>>,
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_select: Callback<Lookup>,
    #[prop(into)] on_created: Callback<Lookup>,
) -> impl IntoView {
    let (search, set_search) = create_signal(String::new());
    let (new_name, set_new_name) = create_signal(String::new());

    let filtered = move || {
        let needle = search.get().to_lowercase();
        items
            .get()
            .into_iter()
            .filter(|entry| entry.name.to_lowercase().contains(&needle))
            .collect::<Vec<_>>()
    };

    let add_entry = move |_| {
        let Some(payload) = NewLookup::from_name(&new_name.get_untracked()) else {
            return;
        };
        #[cfg(target_arch = "wasm32")]
        spawn_local(async move {
            let result = match kind {
                LookupKind::Category => api::create_category(&payload).await,
                LookupKind::Brand => api::create_brand(&payload).await,
            };
            match result {
                Ok(created) => {
                    set_new_name.set(String::new());
                    on_created.call(created);
                }
                Err(err) => {
                    logging::error!("error creating {}: {err}", kind.label());
                    let _ = window().alert_with_message(kind.create_error());
                }
            }
        });
        #[cfg(not(target_arch = "wasm32"))]
        let _ = (payload, on_created);
    };

    let overlay_style = "position: fixed; inset: 0; z-index: 50; display: flex; align-items: center; justify-content: center; background: rgba(0, 0, 0, 0.5);";
    let panel_style = "background: var(--bg-surface); border-radius: var(--radius-lg); border: 1px solid var(--border-subtle); width: min(90vw, 480px); padding: 1.5rem; display: flex; flex-direction: column; gap: 1rem;";
    let input_style = "padding: 0.75rem; border: 1px solid var(--border-input); border-radius: var(--radius-md);";

    view! {
        <Show when=move || open.get()>
            <div style=overlay_style>
                <div style=panel_style>
                    <h2 style="font-size: 1.1rem; font-weight: 600; color: var(--text-heading);">
                        {format!("Select {}", kind.label())}
                    </h2>
                    <input
                        type="text"
                        placeholder=format!("Search {}", kind.label().to_lowercase())
                        prop:value=search
                        on:input=move |ev| set_search.set(event_target_value(&ev))
                        style=input_style
                    />
                    <ul style="list-style: none; margin: 0; padding: 0; max-height: 40vh; overflow-y: auto; display: flex; flex-direction: column; gap: 0.5rem;">
                        <For
                            each=filtered
                            key=|entry| entry.id.clone()
                            children=move |entry| {
                                let selection = entry.clone();
                                view! {
                                    <li
                                        on:click=move |_| on_select.call(selection.clone())
                                        style="padding: 0.5rem 1rem; background: var(--bg-subtle); border-radius: var(--radius-md); cursor: pointer; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;"
                                    >
                                        {entry.name}
                                    </li>
                                }
                            }
                        />
                    </ul>
                    <div style="display: flex; align-items: center; gap: 0.5rem;">
                        <input
                            type="text"
                            placeholder=format!("New {} name", kind.label().to_lowercase())
                            prop:value=new_name
                            on:input=move |ev| set_new_name.set(event_target_value(&ev))
                            style=format!("flex: 1; {input_style}")
                        />
                        <button class="btn-primary" on:click=add_entry>"Add"</button>
                    </div>
                    <div style="text-align: right;">
                        <button class="btn-muted" on:click=move |_| on_close.call(())>"Close"</button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
