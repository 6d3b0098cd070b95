use leptos::*;
use leptos_router::A;

/// Which navigation entry a page belongs to. Each page self-reports its own
/// tab; the sidebar does not derive it from the current location.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Tab {
    Overview,
    Shops,
    Sales,
    Customers,
    Products,
}

#[component]
pub fn Sidebar(active: Tab) -> impl IntoView {
    let sidebar_style = "
        width: 250px;
        background-color: var(--bg-surface);
        border-right: 1px solid var(--border-subtle);
        height: 100vh;
        position: sticky;
        top: 0;
        display: flex;
        flex-direction: column;
        padding: 2rem 1rem;
    ";

    let ul_style = "list-style-type: none; padding: 0; margin: 0; display: flex; flex-direction: column; gap: 0.5rem;";

    let link_class = move |tab: Tab| {
        if active == tab {
            "sidebar-link active"
        } else {
            "sidebar-link"
        }
    };

    view! {
        <aside style=sidebar_style>
            <div style="display: flex; align-items: center; gap: 0.5rem; margin-bottom: 2rem; padding: 0 1rem;">
                <svg xmlns="http://www.w3.org/2000/svg" width="28" height="28" viewBox="0 0 24 24" fill="none" stroke="var(--brand-primary)" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M2 7l4.41-4.41A2 2 0 0 1 7.83 2h8.34a2 2 0 0 1 1.42.59L22 7"></path><path d="M4 12v8a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2v-8"></path><path d="M15 22v-4a2 2 0 0 0-2-2h-2a2 2 0 0 0-2 2v4"></path><path d="M2 7h20"></path></svg>
                <span style="font-weight: 700; font-size: 1.25rem; color: var(--text-heading);">"POS Admin"</span>
            </div>
            <nav style="display: flex; flex-direction: column; gap: 0.5rem;">
                <ul style=ul_style>
                    <li>
                        <A href="/" class=link_class(Tab::Overview)>
                            <svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><rect x="3" y="3" width="7" height="7"></rect><rect x="14" y="3" width="7" height="7"></rect><rect x="14" y="14" width="7" height="7"></rect><rect x="3" y="14" width="7" height="7"></rect></svg>
                            "Overview"
                        </A>
                    </li>
                    <li>
                        <A href="/shops" class=link_class(Tab::Shops)>
                            <svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M2 7l4.41-4.41A2 2 0 0 1 7.83 2h8.34a2 2 0 0 1 1.42.59L22 7"></path><path d="M4 12v8a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2v-8"></path><path d="M2 7h20"></path></svg>
                            "Shops"
                        </A>
                    </li>
                    <li>
                        <A href="/sales" class=link_class(Tab::Sales)>
                            <svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><circle cx="9" cy="21" r="1"></circle><circle cx="20" cy="21" r="1"></circle><path d="M1 1h4l2.68 13.39a2 2 0 0 0 2 1.61h9.72a2 2 0 0 0 2-1.61L23 6H6"></path></svg>
                            "Sales"
                        </A>
                    </li>
                    <li>
                        <A href="/customers" class=link_class(Tab::Customers)>
                            <svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M17 21v-2a4 4 0 0 0-4-4H5a4 4 0 0 0-4 4v2"></path><circle cx="9" cy="7" r="4"></circle><path d="M23 21v-2a4 4 0 0 0-3-3.87"></path><path d="M16 3.13a4 4 0 0 1 0 7.75"></path></svg>
                            "Customers"
                        </A>
                    </li>
                    <li>
                        <A href="/products" class=link_class(Tab::Products)>
                            <svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M21 16V8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16z"></path><polyline points="3.27 6.96 12 12.01 20.73 6.96"></polyline><line x1="12" y1="22.08" x2="12" y2="12"></line></svg>
                            "Products"
                        </A>
                    </li>
                </ul>
            </nav>
        </aside>
    }
}
