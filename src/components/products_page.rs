//! Products Page Component
//!
//! Owns the catalog query, re-fetches whenever a new query is published,
//! and lays out the filter controls, grid and pagination.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{CatalogClient, RequestSequence};
use crate::context::use_shop_context;
use crate::models::{CartEntry, Category, Query, SortKey};
use crate::query::{reduce, QueryAction};
use crate::store::{store_replace_products, use_app_store, AppStateStoreFields};
use crate::view_model::page_count;
use super::{CategoryBar, Pagination, PopularMenu, ProductGrid, SearchBox, SortBar};

#[component]
pub fn ProductsPage(on_add: Callback<CartEntry>) -> impl IntoView {
    let ctx = use_shop_context();
    let store = use_app_store();
    let config = ctx.config();

    let (query, set_query) = signal(Query::new(config.page_limit));
    let client = CatalogClient::new(config.api_base_url);
    let sequence = RequestSequence::default();

    // Load products whenever a query is published
    Effect::new(move |_| {
        let current = query.get();
        let ticket = sequence.issue();
        let client = client.clone();
        let sequence = sequence.clone();
        log::debug!("[PRODUCTS] fetching {:?}", current);
        spawn_local(async move {
            let result = client.fetch_products(&current).await;
            if let Some(items) = sequence.accept(ticket, result) {
                log::debug!("[PRODUCTS] loaded {} products", items.len());
                store_replace_products(&store, items);
            }
        });
    });

    // Every action republishes the query, which re-runs the effect above
    let dispatch = move |action: QueryAction| {
        set_query.set(reduce(&query.get_untracked(), action));
    };

    let active_category = Signal::derive(move || query.with(|q| q.category));
    let active_sort = Signal::derive(move || query.with(|q| q.sort));
    let current_page = Signal::derive(move || query.with(|q| q.page));
    let total_pages = Signal::derive(move || {
        query.with(|q| page_count(q, &store.products().read()))
    });

    view! {
        <div class="products">
            <div class="container">
                <div class="top-title">
                    <CategoryBar
                        active=active_category
                        on_select=Callback::new(move |category: Category| dispatch(QueryAction::SelectCategory(category)))
                    />
                    <SearchBox
                        on_submit=Callback::new(move |text: String| dispatch(QueryAction::SubmitSearch(text)))
                        on_clear=Callback::new(move |_: ()| dispatch(QueryAction::ClearSearch))
                    />
                </div>

                <SortBar
                    active=active_sort
                    on_select=Callback::new(move |sort: SortKey| dispatch(QueryAction::SelectSort(sort)))
                />

                <div class="list-category-section">
                    <ProductGrid on_add=on_add />
                </div>

                <Pagination
                    count=total_pages
                    page=current_page
                    on_change=Callback::new(move |page: u32| dispatch(QueryAction::SetPage(page)))
                />
            </div>

            <PopularMenu />
        </div>
    }
}
