//! Catalog Requests
//!
//! Read-only product listing against the catalog service.

use serde::Serialize;
use thiserror::Error;

use crate::models::{Category, Item, Query, SortKey};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("catalog responded with status {0}")]
    Status(reqwest::StatusCode),
    #[error("catalog response could not be decoded: {0}")]
    Decode(#[source] reqwest::Error),
}

// ========================
// Argument Structs
// ========================

/// Query string of `GET /product/all`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInquiry {
    pub page: u32,
    pub limit: u32,
    pub order: SortKey,
    pub product_collection: Category,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub search: String,
}

impl From<&Query> for ProductInquiry {
    fn from(query: &Query) -> Self {
        Self {
            page: query.page,
            limit: query.limit,
            order: query.sort,
            product_collection: query.category,
            search: query.search.clone(),
        }
    }
}

// ========================
// Client
// ========================

#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn products_request(&self, query: &Query) -> reqwest::RequestBuilder {
        let builder = self
            .http
            .get(format!("{}/product/all", self.base_url))
            .query(&ProductInquiry::from(query));
        // Session cookie travels with the request, as the other shop pages expect
        #[cfg(target_arch = "wasm32")]
        let builder = builder.fetch_credentials_include();
        builder
    }

    /// Fetch one page of products. An empty list is a valid answer.
    pub async fn fetch_products(&self, query: &Query) -> Result<Vec<Item>, CatalogError> {
        let response = self
            .products_request(query)
            .send()
            .await
            .map_err(CatalogError::Transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status));
        }
        response.json::<Vec<Item>>().await.map_err(CatalogError::Decode)
    }
}
