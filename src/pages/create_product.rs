use leptos::*;
use leptos_router::A;

use crate::components::input::Field;
use crate::components::picker::{LookupKind, PickerModal};
use crate::components::scanner::BarcodeScanner;
use crate::components::sidebar::{Sidebar, Tab};
use crate::models::{toggle_unit, Lookup, NewProduct, UNIT_TYPES};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen_futures::spawn_local;

#[cfg(target_arch = "wasm32")]
use crate::api;

#[component]
pub fn CreateProductPage() -> impl IntoView {
    #[allow(unused_variables)]
    let (categories, set_categories) = create_signal(Vec::<Lookup>::new());
    #[allow(unused_variables)]
    let (brands, set_brands) = create_signal(Vec::<Lookup>::new());
    let (category_open, set_category_open) = create_signal(false);
    let (brand_open, set_brand_open) = create_signal(false);
    let (selected_category, set_selected_category) = create_signal(None::<Lookup>);
    let (selected_brand, set_selected_brand) = create_signal(None::<Lookup>);
    let (name, set_name) = create_signal(String::new());
    let (image_url, set_image_url) = create_signal(String::new());
    let (barcode, set_barcode) = create_signal(String::new());
    let (units, set_units) = create_signal(Vec::<String>::new());
    let (scanner_open, set_scanner_open) = create_signal(false);

    // Lookup lists are per-mount; a fetch failure only logs, the form still
    // renders with empty pickers.
    create_effect(move |_| {
        #[cfg(target_arch = "wasm32")]
        spawn_local(async move {
            match futures::try_join!(api::get_categories(), api::get_brands()) {
                Ok((category_list, brand_list)) => {
                    set_categories.set(category_list);
                    set_brands.set(brand_list);
                }
                Err(err) => logging::error!("error fetching lookups: {err}"),
            }
        });
    });

    let select_category = Callback::new(move |entry: Lookup| {
        set_selected_category.set(Some(entry));
        set_category_open.set(false);
    });
    let category_created = Callback::new(move |entry: Lookup| {
        set_categories.update(|list| list.push(entry.clone()));
        select_category.call(entry);
    });
    let select_brand = Callback::new(move |entry: Lookup| {
        set_selected_brand.set(Some(entry));
        set_brand_open.set(false);
    });
    let brand_created = Callback::new(move |entry: Lookup| {
        set_brands.update(|list| list.push(entry.clone()));
        select_brand.call(entry);
    });

    let on_scan = Callback::new(move |text: String| {
        set_barcode.set(text);
        set_scanner_open.set(false);
    });

    let submit = move |_| {
        let brand = selected_brand.get_untracked();
        #[allow(unused_variables)]
        let payload = NewProduct::build(
            &name.get_untracked(),
            &image_url.get_untracked(),
            &barcode.get_untracked(),
            &selected_category
                .get_untracked()
                .map(|entry| entry.id)
                .unwrap_or_default(),
            brand.as_ref().map(|entry| entry.id.as_str()),
            &units.get_untracked(),
        );
        #[cfg(target_arch = "wasm32")]
        spawn_local(async move {
            match api::create_product(&payload).await {
                Ok(()) => {
                    if let Ok(history) = window().history() {
                        let _ = history.back();
                    }
                }
                Err(err) => {
                    logging::error!("error creating product: {err}");
                    let _ = window().alert_with_message("Failed to create product. Please try again.");
                }
            }
        });
        #[cfg(not(target_arch = "wasm32"))]
        let _ = payload;
    };

    let picker_button_style = "padding: 0.75rem; border: 1px solid var(--border-input); border-radius: var(--radius-md); background: var(--bg-surface); color: var(--text-muted); text-align: left; cursor: pointer;";

    view! {
        <div style="display: flex; min-height: 100vh; background: var(--bg-page);">
            <Sidebar active=Tab::Products/>
            <section style="flex: 1; padding: 2rem; display: flex; flex-direction: column; align-items: center;">
                <div style="display: flex; justify-content: space-between; align-items: center; width: 100%; max-width: 480px; margin-bottom: 1.5rem;">
                    <A href="/products" class="btn-muted">"←"</A>
                    <h1 style="font-size: 2rem; font-weight: 700; color: var(--text-heading);">"Products"</h1>
                </div>

                <div style="width: 100%; max-width: 480px; display: flex; flex-direction: column; gap: 1rem;">
                    <img
                        src=move || {
                            let url = image_url.get();
                            if url.is_empty() { "/placeholder.svg".to_string() } else { url }
                        }
                        style="height: 5rem; width: 5rem; margin: 0 auto; border-radius: var(--radius-md); object-fit: cover;"
                    />

                    <Field label="Image Link" value=image_url set_value=set_image_url placeholder="https://image.link"/>
                    <Field label="Name" value=name set_value=set_name placeholder="Product name"/>

                    <div style="display: flex; flex-direction: column; gap: 0.35rem;">
                        <span style="font-weight: 500; font-size: 0.85rem; color: var(--text-muted);">"Quantity type"</span>
                        <div style="display: flex; gap: 0.5rem; flex-wrap: wrap;">
                            {UNIT_TYPES.iter().map(|unit| {
                                let unit = *unit;
                                view! {
                                    <button
                                        class=move || {
                                            if units.get().iter().any(|u| u == unit) { "btn-chip active" } else { "btn-chip" }
                                        }
                                        on:click=move |_| set_units.update(|list| toggle_unit(list, unit))
                                    >
                                        <span style="text-transform: capitalize;">{unit}</span>
                                        <span>{move || if units.get().iter().any(|u| u == unit) { " ×" } else { " +" }}</span>
                                    </button>
                                }
                            }).collect::<Vec<_>>()}
                        </div>
                    </div>

                    <div style="display: flex; flex-direction: column; gap: 0.35rem;">
                        <span style="font-weight: 500; font-size: 0.85rem; color: var(--text-muted);">"Category"</span>
                        <button style=picker_button_style on:click=move |_| set_category_open.set(true)>
                            {move || selected_category.get().map(|entry| entry.name).unwrap_or_else(|| "Select Category".to_string())}
                        </button>
                    </div>

                    <div style="display: flex; flex-direction: column; gap: 0.35rem;">
                        <span style="font-weight: 500; font-size: 0.85rem; color: var(--text-muted);">"Brand / Company"</span>
                        <button style=picker_button_style on:click=move |_| set_brand_open.set(true)>
                            {move || selected_brand.get().map(|entry| entry.name).unwrap_or_else(|| "Select Brand".to_string())}
                        </button>
                    </div>

                    <div style="display: flex; flex-direction: column; gap: 0.35rem;">
                        <span style="font-weight: 500; font-size: 0.85rem; color: var(--text-muted);">"Barcode / QR Code (optional)"</span>
                        <div style="display: flex; gap: 0.5rem;">
                            <button class="btn-muted" on:click=move |_| set_scanner_open.update(|open| *open = !*open)>
                                "Scan"
                            </button>
                            <input
                                type="text"
                                placeholder="Enter or scan code"
                                prop:value=barcode
                                on:input=move |ev| set_barcode.set(event_target_value(&ev))
                                style="flex: 1; padding: 0.75rem; border: 1px solid var(--border-input); border-radius: var(--radius-md);"
                            />
                        </div>
                    </div>

                    <Show when=move || scanner_open.get()>
                        <BarcodeScanner on_decode=on_scan/>
                    </Show>

                    <button class="btn-primary" on:click=submit style="margin-top: 1rem;">
                        "Create"
                    </button>
                </div>
            </section>

            <PickerModal
                kind=LookupKind::Category
                items=categories
                open=category_open
                on_close=move |_: ()| set_category_open.set(false)
                on_select=select_category
                on_created=category_created
            />
            <PickerModal
                kind=LookupKind::Brand
                items=brands
                open=brand_open
                on_close=move |_: ()| set_brand_open.set(false)
                on_select=select_brand
                on_created=brand_created
            />
        </div>
    }
}
