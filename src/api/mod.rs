//! Catalog Service Bindings
//!
//! HTTP access to the remote product catalog, organized by concern.

mod catalog;
mod sequence;

pub use catalog::*;
pub use sequence::*;
