use leptos::*;

use crate::components::sidebar::{Sidebar, Tab};
use crate::components::stat_card::StatCard;
use crate::components::status::{ErrorScreen, LoadingScreen};
use crate::models::{Customer, Product, Sale, Shop};
use crate::utils::{format_date, format_money};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen_futures::spawn_local;

#[cfg(target_arch = "wasm32")]
use crate::api;

/// Sum of cash paid across all sales.
pub fn total_cash_sales(sales: &[Sale]) -> f64 {
    sales.iter().map(|sale| sale.cash_paid_amount).sum()
}

/// Up to five most recent sales, newest first.
pub fn recent_sales(sales: &[Sale]) -> Vec<Sale> {
    let mut sorted = sales.to_vec();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted.truncate(5);
    sorted
}

/// One `(date label, cash amount)` point per sale, in fetch order.
pub fn chart_points(sales: &[Sale]) -> Vec<(String, f64)> {
    sales
        .iter()
        .map(|sale| (format_date(&sale.created_at), sale.cash_paid_amount))
        .collect()
}

/// Catmull-Rom style smoothing: a cubic path through every point. Empty for
/// fewer than two points.
pub fn smooth_path(points: &[(f64, f64)]) -> String {
    if points.len() < 2 {
        return String::new();
    }
    let mut d = format!("M {:.2},{:.2}", points[0].0, points[0].1);
    for i in 0..points.len() - 1 {
        let p0 = if i > 0 { points[i - 1] } else { points[i] };
        let p1 = points[i];
        let p2 = points[i + 1];
        let p3 = if i + 2 < points.len() { points[i + 2] } else { p2 };

        let cp1x = p1.0 + (p2.0 - p0.0) / 6.0;
        let cp1y = p1.1 + (p2.1 - p0.1) / 6.0;
        let cp2x = p2.0 - (p3.0 - p1.0) / 6.0;
        let cp2y = p2.1 - (p3.1 - p1.1) / 6.0;

        d.push_str(&format!(
            " C {:.2},{:.2} {:.2},{:.2} {:.2},{:.2}",
            cp1x, cp1y, cp2x, cp2y, p2.0, p2.1
        ));
    }
    d
}

#[component]
pub fn OverviewPage() -> impl IntoView {
    #[allow(unused_variables)]
    let (customers, set_customers) = create_signal(Vec::<Customer>::new());
    #[allow(unused_variables)]
    let (sales, set_sales) = create_signal(Vec::<Sale>::new());
    #[allow(unused_variables)]
    let (products, set_products) = create_signal(Vec::<Product>::new());
    #[allow(unused_variables)]
    let (shops, set_shops) = create_signal(Vec::<Shop>::new());
    #[allow(unused_variables)]
    let (loading, set_loading) = create_signal(true);
    #[allow(unused_variables)]
    let (error, set_error) = create_signal(None::<&'static str>);

    // All four lists load together; one failure fails the whole batch.
    create_effect(move |_| {
        #[cfg(target_arch = "wasm32")]
        spawn_local(async move {
            match futures::try_join!(
                api::get_customers(),
                api::get_sales(),
                api::get_products(),
                api::get_shops(),
            ) {
                Ok((customer_list, sale_list, product_list, shop_list)) => {
                    set_customers.set(customer_list);
                    set_sales.set(sale_list);
                    set_products.set(product_list);
                    set_shops.set(shop_list);
                }
                Err(err) => {
                    logging::error!("error fetching overview data: {err}");
                    set_error.set(Some("Failed to load data. Please try again later."));
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
            return view! { <LoadingScreen subject="data"/> }.into_view();
        }
        let shop_count = shops.get().len().to_string();
        let customer_count = customers.get().len().to_string();
        let product_count = products.get().len().to_string();
        let sales_total = format_money(total_cash_sales(&sales.get()));
        view! {
            <div style="display: flex; min-height: 100vh; background: var(--bg-page);">
                <Sidebar active=Tab::Overview/>
                <main style="flex: 1; padding: 2rem;">
                    <h1 style="font-size: 2rem; font-weight: 700; color: var(--text-heading); margin-bottom: 2rem;">"Dashboard Overview"</h1>

                    <div style="display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 1.5rem; margin-bottom: 2rem;">
                        <StatCard title="Total Shops" value=shop_count>
                            <svg xmlns="http://www.w3.org/2000/svg" width="32" height="32" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M2 7l4.41-4.41A2 2 0 0 1 7.83 2h8.34a2 2 0 0 1 1.42.59L22 7"></path><path d="M4 12v8a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2v-8"></path><path d="M2 7h20"></path></svg>
                        </StatCard>
                        <StatCard title="Total Sales" value=sales_total>
                            <svg xmlns="http://www.w3.org/2000/svg" width="32" height="32" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><line x1="12" y1="1" x2="12" y2="23"></line><path d="M17 5H9.5a3.5 3.5 0 0 0 0 7h5a3.5 3.5 0 0 1 0 7H6"></path></svg>
                        </StatCard>
                        <StatCard title="Total Customers" value=customer_count>
                            <svg xmlns="http://www.w3.org/2000/svg" width="32" height="32" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M17 21v-2a4 4 0 0 0-4-4H5a4 4 0 0 0-4 4v2"></path><circle cx="9" cy="7" r="4"></circle><path d="M23 21v-2a4 4 0 0 0-3-3.87"></path><path d="M16 3.13a4 4 0 0 1 0 7.75"></path></svg>
                        </StatCard>
                        <StatCard title="Total Products" value=product_count>
                            <svg xmlns="http://www.w3.org/2000/svg" width="32" height="32" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M21 16V8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16z"></path><polyline points="3.27 6.96 12 12.01 20.73 6.96"></polyline><line x1="12" y1="22.08" x2="12" y2="12"></line></svg>
                        </StatCard>
                    </div>

                    <div style="display: grid; grid-template-columns: 2fr 1fr; gap: 2rem;">
                        <div style="background: var(--bg-surface); padding: 1.5rem; border-radius: var(--radius-lg); border: 1px solid var(--border-subtle);">
                            <h2 style="font-size: 1.25rem; font-weight: 700; color: var(--text-heading); margin-bottom: 1rem;">"Sales Trend"</h2>
                            <SalesTrendChart sales=sales/>
                        </div>

                        <div style="background: var(--bg-surface); padding: 1.5rem; border-radius: var(--radius-lg); border: 1px solid var(--border-subtle);">
                            <h2 style="font-size: 1.25rem; font-weight: 700; color: var(--text-heading); margin-bottom: 1rem;">"Recent Sales"</h2>
                            {move || {
                                let recent = recent_sales(&sales.get());
                                if recent.is_empty() {
                                    view! {
                                        <p style="color: var(--text-muted); text-align: center;">"No recent sales"</p>
                                    }
                                    .into_view()
                                } else {
                                    recent
                                        .into_iter()
                                        .map(|sale| view! {
                                            <div style="display: flex; justify-content: space-between; align-items: center; margin-bottom: 1rem;">
                                                <div>
                                                    <p style="font-size: 0.8rem; color: var(--text-muted);">{format!("ID: {}", sale.id)}</p>
                                                    <p style="font-weight: 500;">{format_money(sale.cash_paid_amount)}</p>
                                                </div>
                                                <p style="font-size: 0.8rem; color: var(--text-muted);">{format_date(&sale.created_at)}</p>
                                            </div>
                                        })
                                        .collect::<Vec<_>>()
                                        .into_view()
                                }
                            }}
                        </div>
                    </div>
                </main>
            </div>
        }
        .into_view()
    }
}

/// Smoothed SVG line of cash amounts, one point per sale.
#[component]
fn SalesTrendChart(#[prop(into)] sales: Signal<Vec<Sale>>) -> impl IntoView {
    view! {
        <div style="width: 100%; height: 400px; position: relative;">
            {move || {
                let data = chart_points(&sales.get());
                if data.is_empty() {
                    return view! {
                        <div style="height: 100%; display: flex; align-items: center; justify-content: center; color: var(--text-muted);">
                            "No sales data available"
                        </div>
                    }
                    .into_view();
                }

                let max_amount = data.iter().map(|(_, amount)| *amount).fold(0.0_f64, f64::max);
                let max_amount = if max_amount == 0.0 { 100.0 } else { max_amount };
                let span = (data.len() - 1).max(1) as f64;

                // Normalized 0-100 viewBox, 5% margin left/right, 80% vertical range.
                let points: Vec<(f64, f64)> = data
                    .iter()
                    .enumerate()
                    .map(|(i, (_, amount))| {
                        let x = 5.0 + (i as f64 / span) * 90.0;
                        let y = 100.0 - (amount / max_amount) * 80.0;
                        (x, y)
                    })
                    .collect();

                let line_d = smooth_path(&points);
                let fill_d = if points.len() > 1 {
                    format!(
                        "{} L {:.2},100 L {:.2},100 Z",
                        line_d,
                        points.last().unwrap().0,
                        points.first().unwrap().0
                    )
                } else {
                    String::new()
                };

                let labels = data
                    .iter()
                    .zip(&points)
                    .map(|((date, _), (x, _))| view! {
                        <div style=format!("position: absolute; left: {}%; bottom: -25px; transform: translateX(-50%); font-size: 0.7rem; color: var(--text-muted);", x)>
                            {date.clone()}
                        </div>
                    })
                    .collect::<Vec<_>>();

                view! {
                    <div style="position: relative; width: 100%; height: 100%;">
                        <svg width="100%" height="100%" viewBox="0 0 100 100" preserveAspectRatio="none" style="overflow: visible; position: absolute; top: 0; left: 0;">
                            <defs>
                                <linearGradient id="trendGradient" x1="0" x2="0" y1="0" y2="1">
                                    <stop offset="0%" stop-color="var(--brand-primary)" stop-opacity="0.1"/>
                                    <stop offset="100%" stop-color="var(--brand-primary)" stop-opacity="0"/>
                                </linearGradient>
                            </defs>
                            {(0..=4).map(|i| {
                                let y = 20.0 + (i as f64 * 20.0);
                                view! {
                                    <line x1="0" y1=y x2="100" y2=y stroke="var(--border-subtle)" stroke-width="0.5" stroke-dasharray="2"/>
                                }
                            }).collect::<Vec<_>>()}
                            <path d=fill_d fill="url(#trendGradient)"/>
                            <path
                                d=line_d
                                fill="none"
                                stroke="var(--brand-primary)"
                                stroke-width="2"
                                vector-effect="non-scaling-stroke"
                                stroke-linecap="round"
                                stroke-linejoin="round"
                            />
                            {points.iter().map(|(x, y)| view! {
                                <circle cx=*x cy=*y r="1.5" fill="white" stroke="var(--brand-primary)" stroke-width="0.5" vector-effect="non-scaling-stroke"/>
                            }).collect::<Vec<_>>()}
                        </svg>
                        {labels}
                    </div>
                }
                .into_view()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn sale(id: &str, cash: f64, day: u32) -> Sale {
        let ts = Utc.with_ymd_and_hms(2025, 3, day, 0, 0, 0).unwrap();
        Sale {
            id: id.to_string(),
            customer_id: "c1".into(),
            sale_number: format!("SN-{id}"),
            sale_amount: cash,
            balance_amount: 0.0,
            cash_paid_amount: cash,
            upi_paid_amount: 0.0,
            sale_type: "retail".into(),
            payment_method: "cash".into(),
            transaction_code: None,
            shop_id: "sh1".into(),
            created_at: ts,
            updated_at: ts,
        }
    }

    #[test]
    fn total_sums_cash_paid_amounts() {
        let sales = vec![sale("a", 10.5, 1), sale("b", 20.0, 2)];
        let total = total_cash_sales(&sales);
        assert_eq!(crate::utils::format_money(total), "$30.50");
    }

    #[test]
    fn total_of_no_sales_is_zero() {
        assert_eq!(total_cash_sales(&[]), 0.0);
    }

    #[test]
    fn recent_sales_are_newest_first_and_capped_at_five() {
        let sales: Vec<Sale> = (1..=7).map(|day| sale(&day.to_string(), 1.0, day)).collect();
        let recent = recent_sales(&sales);
        assert_eq!(recent.len(), 5);
        let ids: Vec<&str> = recent.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["7", "6", "5", "4", "3"]);
    }

    #[test]
    fn chart_points_keep_fetch_order() {
        let sales = vec![sale("a", 5.0, 9), sale("b", 7.5, 2)];
        let points = chart_points(&sales);
        assert_eq!(
            points,
            vec![
                ("2025-03-09".to_string(), 5.0),
                ("2025-03-02".to_string(), 7.5),
            ]
        );
    }

    #[test]
    fn smooth_path_needs_two_points() {
        assert_eq!(smooth_path(&[]), "");
        assert_eq!(smooth_path(&[(5.0, 50.0)]), "");
        let d = smooth_path(&[(5.0, 50.0), (95.0, 20.0)]);
        assert!(d.starts_with("M 5.00,50.00"));
        assert!(d.contains(" C "));
        assert!(d.ends_with("95.00,20.00"));
    }
}
