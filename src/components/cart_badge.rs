//! Cart Badge Component
//!
//! Header counter for the cart held in the app store.

use leptos::prelude::*;
use crate::store::{cart_quantity, use_app_store, AppStateStoreFields};

#[component]
pub fn CartBadge() -> impl IntoView {
    let store = use_app_store();
    let quantity = move || cart_quantity(&store.cart().read());

    view! {
        <div class="cart-badge" class:empty=move || quantity() == 0>
            <img src="/icons/shopping-cart.svg" alt="cart" />
            <span class="cart-count">{quantity}</span>
        </div>
    }
}
