//! Frontend Models
//!
//! Catalog records as the product service returns them, plus the query and
//! cart types the storefront builds on top.

use serde::{Deserialize, Serialize};

/// Product collection (category) offered by the shop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Coffee,
    Smoothie,
    Juice,
    Tea,
    Ade,
}

impl Category {
    /// Display order of the category buttons
    pub const ALL: [Category; 5] = [
        Category::Coffee,
        Category::Smoothie,
        Category::Juice,
        Category::Tea,
        Category::Ade,
    ];

    /// Wire value of `productCollection`, also used as the button label
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Coffee => "COFFEE",
            Category::Smoothie => "SMOOTHIE",
            Category::Juice => "JUICE",
            Category::Tea => "TEA",
            Category::Ade => "ADE",
        }
    }
}

/// Result ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortKey {
    #[serde(rename = "createdAt")]
    Recency,
    #[serde(rename = "productPrice")]
    Price,
    #[serde(rename = "productViews")]
    Views,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Recency, SortKey::Price, SortKey::Views];

    /// Wire value of `order`
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Recency => "createdAt",
            SortKey::Price => "productPrice",
            SortKey::Views => "productViews",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Recency => "New",
            SortKey::Price => "Price",
            SortKey::Views => "Views",
        }
    }
}

/// Active filter, sort and pagination parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub page: u32,
    pub limit: u32,
    pub sort: SortKey,
    pub category: Category,
    /// Committed search text (not the input draft)
    pub search: String,
}

impl Query {
    pub fn new(limit: u32) -> Self {
        Self {
            page: 1,
            limit: limit.max(1),
            sort: SortKey::Recency,
            category: Category::Coffee,
            search: String::new(),
        }
    }
}

impl Default for Query {
    fn default() -> Self {
        Self::new(8)
    }
}

/// Product record (matches the catalog service)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "productName")]
    pub name: String,
    #[serde(rename = "productPrice")]
    pub price: f64,
    #[serde(rename = "productViews", default)]
    pub view_count: u64,
    #[serde(rename = "productImages", default)]
    pub images: Vec<String>,
    #[serde(rename = "productCollection")]
    pub category: Category,
    #[serde(default)]
    pub product_size: Option<String>,
    #[serde(default)]
    pub product_volume: Option<f64>,
    #[serde(default)]
    pub product_desc: Option<String>,
}

impl Item {
    /// Size label for most drinks, volume label for tea. `None` when the
    /// record lacks the relevant field.
    pub fn measure_label(&self) -> Option<String> {
        match self.category {
            Category::Tea => self.product_volume.map(|volume| format!("{} litre", volume)),
            _ => self
                .product_size
                .as_deref()
                .filter(|size| !size.is_empty())
                .map(|size| format!("{} SIZE", size)),
        }
    }

    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// Record handed to the cart owner when a shopper adds an item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartEntry {
    pub id: String,
    pub quantity: u32,
    pub name: String,
    pub price: f64,
    pub image: String,
}

impl CartEntry {
    pub fn from_item(item: &Item) -> Self {
        Self {
            id: item.id.clone(),
            quantity: 1,
            name: item.name.clone(),
            price: item.price,
            image: item.primary_image().unwrap_or_default().to_string(),
        }
    }
}

#[cfg(test)]
pub(crate) fn make_item(id: &str, category: Category, view_count: u64) -> Item {
    Item {
        id: id.to_string(),
        name: format!("Drink {}", id),
        price: 4.5,
        view_count,
        images: vec![format!("uploads/{}.png", id), format!("uploads/{}-2.png", id)],
        category,
        product_size: Some("NORMAL".to_string()),
        product_volume: Some(0.5),
        product_desc: None,
    }
}
