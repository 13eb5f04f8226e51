//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use crate::models::{CartEntry, Item};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Last page of products fetched for the active query
    pub products: Vec<Item>,
    /// Entries the shopper added, owned by the app shell
    pub cart: Vec<CartEntry>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the product list wholesale with a fetch result
pub fn store_replace_products(store: &AppStore, items: Vec<Item>) {
    store.products().set(items);
}

/// Add an entry to the cart, merging with an existing line for the same id
pub fn store_add_to_cart(store: &AppStore, entry: CartEntry) {
    merge_cart_entry(&mut store.cart().write(), entry);
}

/// Total quantity across cart lines
pub fn cart_quantity(cart: &[CartEntry]) -> u32 {
    cart.iter().map(|entry| entry.quantity).sum()
}

pub fn merge_cart_entry(cart: &mut Vec<CartEntry>, entry: CartEntry) {
    match cart.iter_mut().find(|line| line.id == entry.id) {
        Some(line) => line.quantity += entry.quantity,
        None => cart.push(entry),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{make_item, Category};

    #[test]
    fn test_merge_cart_entry() {
        let latte = CartEntry::from_item(&make_item("1", Category::Coffee, 0));
        let tea = CartEntry::from_item(&make_item("2", Category::Tea, 0));

        let mut cart = Vec::new();
        merge_cart_entry(&mut cart, latte.clone());
        merge_cart_entry(&mut cart, tea);
        merge_cart_entry(&mut cart, latte);

        assert_eq!(cart.len(), 2);
        assert_eq!(cart[0].id, "1");
        assert_eq!(cart[0].quantity, 2);
        assert_eq!(cart[1].quantity, 1);
        assert_eq!(cart_quantity(&cart), 3);
    }
}
