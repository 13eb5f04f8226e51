//! Pagination Component

use leptos::prelude::*;
use crate::view_model::{page_slots, PageSlot};

/// Previous / numbered / next page buttons
#[component]
pub fn Pagination(
    count: Signal<u32>,
    page: Signal<u32>,
    on_change: Callback<u32>,
) -> impl IntoView {
    view! {
        <nav class="pagination-section">
            {move || page_slots(count.get(), page.get()).into_iter().map(|slot| match slot {
                PageSlot::Previous { target, disabled } => view! {
                    <button
                        class="page-item page-prev"
                        disabled=disabled
                        on:click=move |_| on_change.run(target)
                    >
                        "‹"
                    </button>
                }.into_any(),
                PageSlot::Page { number, selected } => view! {
                    <button
                        class={if selected { "page-item selected" } else { "page-item" }}
                        on:click=move |_| on_change.run(number)
                    >
                        {number}
                    </button>
                }.into_any(),
                PageSlot::Ellipsis => view! {
                    <span class="page-ellipsis">"…"</span>
                }.into_any(),
                PageSlot::Next { target, disabled } => view! {
                    <button
                        class="page-item page-next"
                        disabled=disabled
                        on:click=move |_| on_change.run(target)
                    >
                        "›"
                    </button>
                }.into_any(),
            }).collect_view()}
        </nav>
    }
}
