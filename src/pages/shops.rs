use leptos::*;

use crate::components::sidebar::{Sidebar, Tab};
use crate::components::status::{ErrorScreen, LoadingScreen};
use crate::models::Shop;
use crate::utils::format_date;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen_futures::spawn_local;

#[cfg(target_arch = "wasm32")]
use crate::api;

#[component]
pub fn ShopsPage() -> impl IntoView {
    #[allow(unused_variables)]
    let (shops, set_shops) = create_signal(Vec::<Shop>::new());
    #[allow(unused_variables)]
    let (loading, set_loading) = create_signal(true);
    #[allow(unused_variables)]
    let (error, set_error) = create_signal(None::<&'static str>);

    create_effect(move |_| {
        #[cfg(target_arch = "wasm32")]
        spawn_local(async move {
            match api::get_shops().await {
                Ok(data) => set_shops.set(data),
                Err(err) => {
                    logging::error!("error fetching shops: {err}");
                    set_error.set(Some("Failed to load shops"));
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
            return view! { <LoadingScreen subject="shops"/> }.into_view();
        }
        view! {
            <div style="display: flex; min-height: 100vh; background: var(--bg-page);">
                <Sidebar active=Tab::Shops/>
                <main style="flex: 1; padding: 2rem;">
                    <h1 style="font-size: 2rem; font-weight: 700; color: var(--text-heading); margin-bottom: 2rem;">"Shops"</h1>
                    <div style="display: grid; grid-template-columns: repeat(auto-fill, minmax(300px, 1fr)); gap: 1.5rem;">
                        <For
                            each=move || shops.get()
                            key=|shop| shop.id.clone()
                            children=move |shop| {
                                view! {
                                    <div style="background: var(--bg-surface); border-radius: var(--radius-lg); border: 1px solid var(--border-subtle); overflow: hidden;">
                                        <img
                                            src=shop.logo.clone()
                                            alt=shop.name.clone()
                                            style="width: 100%; height: 12rem; object-fit: cover;"
                                        />
                                        <div style="padding: 1.5rem;">
                                            <h3 style="font-size: 1.25rem; font-weight: 700; color: var(--text-heading); margin-bottom: 0.5rem;">{shop.name.clone()}</h3>
                                            <p style="color: var(--text-muted); margin-bottom: 0.5rem;">{shop.location.clone()}</p>
                                            <p style="color: var(--text-muted); margin-bottom: 0.5rem;">{format!("Phone: {}", shop.phone)}</p>
                                            <div style="display: flex; align-items: center; gap: 0.5rem; font-size: 0.875rem; color: var(--text-muted);">
                                                <span>{format!("GST: {}", if shop.gst { "Yes" } else { "No" })}</span>
                                                <span>"•"</span>
                                                <span>{format!("Created: {}", format_date(&shop.created_at))}</span>
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
