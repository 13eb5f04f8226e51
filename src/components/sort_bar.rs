//! Sort Bar Component

use leptos::prelude::*;
use crate::models::SortKey;

/// Recency / price / views ordering buttons
#[component]
pub fn SortBar(
    active: Signal<SortKey>,
    on_select: Callback<SortKey>,
) -> impl IntoView {
    view! {
        <div class="dishes-filter-section">
            {SortKey::ALL.iter().map(|&sort| {
                let is_active = move || active.get() == sort;
                view! {
                    <button
                        class=move || if is_active() { "order active" } else { "order" }
                        on:click=move |_| on_select.run(sort)
                    >
                        {sort.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
