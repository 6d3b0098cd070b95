use leptos::*;
use leptos_router::{use_navigate, A};

use crate::components::sidebar::{Sidebar, Tab};
use crate::components::status::{ErrorScreen, LoadingScreen};
use crate::models::Product;
use crate::EditTarget;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen_futures::spawn_local;

#[cfg(target_arch = "wasm32")]
use crate::api;

#[component]
pub fn ProductsPage() -> impl IntoView {
    #[allow(unused_variables)]
    let (products, set_products) = create_signal(Vec::<Product>::new());
    #[allow(unused_variables)]
    let (loading, set_loading) = create_signal(true);
    #[allow(unused_variables)]
    let (error, set_error) = create_signal(None::<&'static str>);

    let edit_target = expect_context::<EditTarget>();
    let navigate = use_navigate();

    create_effect(move |_| {
        #[cfg(target_arch = "wasm32")]
        spawn_local(async move {
            match api::get_products().await {
                Ok(data) => set_products.set(data),
                Err(err) => {
                    logging::error!("error fetching products: {err}");
                    set_error.set(Some("Failed to load products"));
                }
            }
            set_loading.set(false);
        });
    });

    move || {
        if let Some(message) = error.get() {
            return view! { <ErrorScreen message=message/> }.into_view();
        }
        if loading.get() {
            return view! { <LoadingScreen subject="products"/> }.into_view();
        }
        let navigate = navigate.clone();
        view! {
            <div style="display: flex; min-height: 100vh; background: var(--bg-page);">
                <Sidebar active=Tab::Products/>
                <main style="flex: 1; padding: 2rem;">
                    <div style="display: flex; align-items: center; justify-content: space-between; margin-bottom: 2rem;">
                        <h1 style="font-size: 2rem; font-weight: 700; color: var(--text-heading);">"Products"</h1>
                        <A href="/create-products" class="btn-primary">"Add Product"</A>
                    </div>
                    <div style="display: grid; grid-template-columns: repeat(auto-fill, minmax(300px, 1fr)); gap: 1.5rem;">
                        <For
                            each=move || products.get()
                            key=|product| product.id.clone()
                            children=move |product| {
                                let record = product.clone();
                                let navigate = navigate.clone();
                                let edit = move |_| {
                                    edit_target.0.set(Some(record.clone()));
                                    navigate("/edit-product", Default::default());
                                };
                                view! {
                                    <div style="background: var(--bg-surface); border-radius: var(--radius-lg); border: 1px solid var(--border-subtle); overflow: hidden;">
                                        <img
                                            src=product.image.first().cloned().unwrap_or_default()
                                            alt=product.name.clone()
                                            style="width: 100%; height: 12rem; object-fit: cover;"
                                        />
                                        <div style="padding: 1.5rem;">
                                            <h3 style="font-size: 1.25rem; font-weight: 700; color: var(--text-heading); margin-bottom: 0.5rem;">{product.name.clone()}</h3>
                                            {product.description.clone().map(|text| view! {
                                                <p style="color: var(--text-muted); margin-bottom: 1rem;">{text}</p>
                                            })}
                                            <div style="display: flex; flex-wrap: wrap; gap: 0.5rem; margin-bottom: 1rem;">
                                                {product.unit_types.iter().map(|unit| view! {
                                                    <span style="padding: 0.125rem 0.5rem; background: var(--brand-subtle); color: var(--brand-dark); border-radius: var(--radius-full); font-size: 0.8rem;">
                                                        {unit.clone()}
                                                    </span>
                                                }).collect::<Vec<_>>()}
                                            </div>
                                            <div style="display: flex; align-items: center; gap: 0.5rem; font-size: 0.875rem; color: var(--text-muted);">
                                                <span>{format!("Code: {}", product.product_code)}</span>
                                                <span>"•"</span>
                                                <span>{if product.assured { "Assured" } else { "Not Assured" }}</span>
                                                <button
                                                    on:click=edit
                                                    style="margin-left: auto; background: none; border: none; color: var(--brand-primary); cursor: pointer; font-weight: 500;"
                                                >
                                                    "Edit"
                                                </button>
                                            </div>
                                        </div>
                                    </div>
                                }
                            }
                        />
                    </div>
                </main>
            </div>
        }
        .into_view()
    }
}
