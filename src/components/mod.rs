//! UI Components
//!
//! Leptos components for the storefront page.

mod cart_badge;
mod category_bar;
mod sort_bar;
mod search_box;
mod product_card;
mod product_grid;
mod pagination;
mod popular_menu;
mod products_page;

pub use cart_badge::CartBadge;
pub use category_bar::CategoryBar;
pub use sort_bar::SortBar;
pub use search_box::SearchBox;
pub use product_card::ProductCard;
pub use product_grid::ProductGrid;
pub use pagination::Pagination;
pub use popular_menu::PopularMenu;
pub use products_page::ProductsPage;
