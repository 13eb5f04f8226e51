//! Category Bar Component
//!
//! One button per product collection; the active one is highlighted.

use leptos::prelude::*;
use crate::models::Category;

#[component]
pub fn CategoryBar(
    active: Signal<Category>,
    on_select: Callback<Category>,
) -> impl IntoView {
    view! {
        <div class="product-category">
            {Category::ALL.iter().map(|&category| {
                let is_active = move || active.get() == category;
                view! {
                    <button
                        class=move || if is_active() { "category-btn active" } else { "category-btn" }
                        on:click=move |_| on_select.run(category)
                    >
                        {category.as_str()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
