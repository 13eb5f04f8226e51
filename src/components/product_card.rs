//! Product Card Component
//!
//! A single product tile in the catalog grid.

use leptos::prelude::*;

use crate::context::use_shop_context;
use crate::models::{CartEntry, Item};
use crate::view_model::{card_background, view_badge_class};

#[component]
pub fn ProductCard(
    item: Item,
    on_add: Callback<CartEntry>,
) -> impl IntoView {
    let ctx = use_shop_context();

    let id = item.id.clone();
    let entry = CartEntry::from_item(&item);
    let background = card_background(&ctx.api_base_url(), &item);
    let measure = item.measure_label();
    let views = item.view_count;

    view! {
        <div class="product-card" on:click=move |_| ctx.open_product(&id)>
            <div class="product-img" style=background>
                {measure.map(|label| view! { <div class="product-sale">{label}</div> })}

                // Add to cart without opening the detail page
                <button
                    class="shop-btn"
                    on:click=move |ev: web_sys::MouseEvent| {
                        ev.stop_propagation();
                        log::info!("adding {} to cart", entry.id);
                        on_add.run(entry.clone());
                    }
                >
                    <img src="/icons/shopping-cart.svg" alt="" />
                </button>

                <button class="view-btn">
                    <span class={view_badge_class(views)}>"◉"</span>
                    <span class="view-badge">{views}</span>
                </button>
            </div>
            <div class="product-desc">
                <span class="product-title">{item.name}</span>
                <div class="product-price">
                    <span class="price-icon">"$"</span>
                    {item.price}
                </div>
            </div>
        </div>
    }
}
