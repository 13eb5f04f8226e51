//! Product Grid Component
//!
//! Cards for the current result page, or the empty-state notice.

use leptos::prelude::*;

use crate::models::CartEntry;
use crate::store::{use_app_store, AppStateStoreFields};
use crate::view_model::{grid_content, GridContent};
use super::ProductCard;

#[component]
pub fn ProductGrid(on_add: Callback<CartEntry>) -> impl IntoView {
    let store = use_app_store();
    let has_cards = move || grid_content(&store.products().read()) != GridContent::Empty;

    view! {
        <div class="products-wrapper">
            <Show
                when=has_cards
                fallback=|| view! { <div class="no-data">"Products are not available!"</div> }
            >
                <For
                    each=move || store.products().get()
                    key=|item| item.id.clone()
                    children=move |item| view! { <ProductCard item=item on_add=on_add /> }
                />
            </Show>
        </div>
    }
}
