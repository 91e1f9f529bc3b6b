//! Show catalog loading: the `CatalogSource` seam and its HTTP implementation.

pub mod http;
pub mod source;

pub use http::HttpCatalog;
pub use source::{CatalogError, CatalogSource};
