use leptos::*;

use crate::components::sidebar::{Sidebar, Tab};
use crate::components::status::{ErrorScreen, LoadingScreen};
use crate::models::Sale;
use crate::utils::{format_date, format_money};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen_futures::spawn_local;

#[cfg(target_arch = "wasm32")]
use crate::api;

#[component]
pub fn SalesPage() -> impl IntoView {
    #[allow(unused_variables)]
    let (sales, set_sales) = create_signal(Vec::<Sale>::new());
    #[allow(unused_variables)]
    let (loading, set_loading) = create_signal(true);
    #[allow(unused_variables)]
    let (error, set_error) = create_signal(None::<&'static str>);

    create_effect(move |_| {
        #[cfg(target_arch = "wasm32")]
        spawn_local(async move {
            match api::get_sales().await {
                Ok(data) => set_sales.set(data),
                Err(err) => {
                    logging::error!("error fetching sales: {err}");
                    set_error.set(Some("Failed to load sales"));
                }
            }
            set_loading.set(false);
        });
    });

    let th_style = "padding: 0.75rem 1.5rem; text-align: left; font-size: 0.75rem; font-weight: 600; color: var(--text-muted); text-transform: uppercase; letter-spacing: 0.05em; border-bottom: 1px solid var(--border-subtle);";
    let td_style = "padding: 1rem 1.5rem; white-space: nowrap; font-size: 0.875rem; border-bottom: 1px solid var(--border-subtle);";

    move || {
        if let Some(message) = error.get() {
            return view! { <ErrorScreen message=message/> }.into_view();
        }
        if loading.get() {
            return view! { <LoadingScreen subject="sales"/> }.into_view();
        }
        view! {
            <div style="display: flex; min-height: 100vh; background: var(--bg-page);">
                <Sidebar active=Tab::Sales/>
                <main style="flex: 1; padding: 2rem;">
                    <h1 style="font-size: 2rem; font-weight: 700; color: var(--text-heading); margin-bottom: 2rem;">"Sales"</h1>
                    <div style="overflow-x: auto; background: var(--bg-surface); border-radius: var(--radius-lg); border: 1px solid var(--border-subtle);">
                        <table style="width: 100%; border-collapse: collapse;">
                            <thead>
                                <tr style="background-color: var(--bg-subtle);">
                                    <th style=th_style>"Sale Number"</th>
                                    <th style=th_style>"Amount"</th>
                                    <th style=th_style>"Payment Method"</th>
                                    <th style=th_style>"Sale Type"</th>
                                    <th style=th_style>"Date"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || sales.get()
                                    key=|sale| sale.id.clone()
                                    children=move |sale| {
                                        view! {
                                            <tr>
                                                <td style=td_style>{sale.sale_number.clone()}</td>
                                                <td style=td_style>{format_money(sale.sale_amount)}</td>
                                                <td style=td_style>{sale.payment_method.clone()}</td>
                                                <td style=td_style>{sale.sale_type.clone()}</td>
                                                <td style=td_style>{format_date(&sale.created_at)}</td>
                                            </tr>
                                        }
                                    }
                                />
                            </tbody>
                        </table>
                    </div>
                </main>
            </div>
        }
        .into_view()
    }
}
