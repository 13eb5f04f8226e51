//! Storefront App
//!
//! Application shell: provides the store and context, owns the cart,
//! and hosts the products page.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{CartBadge, ProductsPage};
use crate::config::AppConfig;
use crate::context::ShopContext;
use crate::models::CartEntry;
use crate::store::{store_add_to_cart, AppState};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);
    provide_context(ShopContext::new(config));

    // The shell is the cart owner; the products page only notifies it
    let on_add = Callback::new(move |entry: CartEntry| store_add_to_cart(&store, entry));

    view! {
        <div class="app-layout">
            <header class="shop-header">
                <h1>"Products"</h1>
                <CartBadge />
            </header>
            <main class="main-content">
                <ProductsPage on_add=on_add />
            </main>
        </div>
    }
}
