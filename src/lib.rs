use leptos::*;
use leptos_meta::{provide_meta_context, Meta, Title};
use leptos_router::{Route, Router, Routes};

pub mod api;
pub mod components;
pub mod models;
pub mod pages;
pub mod utils;

use models::Product;
use pages::create_product::CreateProductPage;
use pages::customers::CustomersPage;
use pages::edit_product::EditProductPage;
use pages::overview::OverviewPage;
use pages::products::ProductsPage;
use pages::sales::SalesPage;
use pages::shops::ShopsPage;

/// In-memory navigation state for the edit flow: the product list stores the
/// record here before navigating to `/edit-product`.
#[derive(Clone, Copy)]
pub struct EditTarget(pub RwSignal<Option<Product>>);

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(EditTarget(create_rw_signal(None)));

    view! {
        <Title text="POS Admin"/>
        <Meta name="description" content="Admin dashboard for the POS platform"/>

        <Router>
            <main>
                <Routes>
                    <Route path="/" view=OverviewPage/>
                    <Route path="/shops" view=ShopsPage/>
                    <Route path="/sales" view=SalesPage/>
                    <Route path="/customers" view=CustomersPage/>
                    <Route path="/products" view=ProductsPage/>
                    <Route path="/create-products" view=CreateProductPage/>
                    <Route path="/edit-product" view=EditProductPage/>
                </Routes>
            </main>
        </Router>
    }
}
