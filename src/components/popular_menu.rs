//! Popular Menu Component
//!
//! Static showcase of featured drinks under the catalog. The photos are
//! deployment assets served from `public/img/`.

use leptos::prelude::*;

const FEATURED: &[(&str, &str)] = &[
    ("/img/watermelon.jpg", "Watermelon Juice"),
    ("/img/unicorn.jpg", "Unicorn Magic Ade"),
    ("/img/cherry.jpg", "Cherry Coke"),
    ("/img/megaade.jpg", "Mega Ade"),
];

#[component]
pub fn PopularMenu() -> impl IntoView {
    view! {
        <div class="brands-logo">
            <div class="brand-text">"Our Popular Menu"</div>
            <div class="brand-cards">
                {FEATURED.iter().map(|(src, name)| view! {
                    <div class="brand-card">
                        <img src={*src} alt={*name} />
                        <div class="brand-img-desc">{*name}</div>
                    </div>
                }).collect_view()}
            </div>
        </div>
    }
}
