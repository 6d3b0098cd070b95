use leptos::*;

use crate::components::sidebar::{Sidebar, Tab};
use crate::components::status::{ErrorScreen, LoadingScreen};
use crate::models::Customer;
use crate::utils::format_date;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen_futures::spawn_local;

#[cfg(target_arch = "wasm32")]
use crate::api;

#[component]
pub fn CustomersPage() -> impl IntoView {
    #[allow(unused_variables)]
    let (customers, set_customers) = create_signal(Vec::<Customer>::new());
    #[allow(unused_variables)]
    let (loading, set_loading) = create_signal(true);
    #[allow(unused_variables)]
    let (error, set_error) = create_signal(None::<&'static str>);

    create_effect(move |_| {
        #[cfg(target_arch = "wasm32")]
        spawn_local(async move {
            match api::get_customers().await {
                Ok(data) => set_customers.set(data),
                Err(err) => {
                    logging::error!("error fetching customers: {err}");
                    set_error.set(Some("Failed to load customers"));
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
            return view! { <LoadingScreen subject="customers"/> }.into_view();
        }
        view! {
            <div style="display: flex; min-height: 100vh; background: var(--bg-page);">
                <Sidebar active=Tab::Customers/>
                <main style="flex: 1; padding: 2rem;">
                    <h1 style="font-size: 2rem; font-weight: 700; color: var(--text-heading); margin-bottom: 2rem;">"Customers"</h1>
                    <div style="display: grid; grid-template-columns: repeat(auto-fill, minmax(260px, 1fr)); gap: 1.5rem;">
                        <For
                            each=move || customers.get()
                            key=|customer| customer.id.clone()
                            children=move |customer| {
                                view! {
                                    <div style="background: var(--bg-surface); border-radius: var(--radius-lg); border: 1px solid var(--border-subtle); padding: 1.5rem;">
                                        <div style="display: flex; align-items: center; gap: 1rem; margin-bottom: 1rem;">
                                            <img
                                                src=customer.image.clone()
                                                alt=customer.name.clone()
                                                style="width: 4rem; height: 4rem; border-radius: 50%; object-fit: cover;"
                                            />
                                            <div>
                                                <h3 style="font-size: 1.1rem; font-weight: 600; color: var(--text-heading);">{customer.name.clone()}</h3>
                                                <p style="color: var(--text-muted);">{customer.phone.clone()}</p>
                                            </div>
                                        </div>
                                        <p style="font-size: 0.875rem; color: var(--text-muted);">
                                            {format!("Joined: {}", format_date(&customer.created_at))}
                                        </p>
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
