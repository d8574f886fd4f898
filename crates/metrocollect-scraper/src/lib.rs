pub mod client;
pub mod directory;
pub mod error;
pub mod normalize;
pub mod query;
pub mod types;

pub use client::CatalogClient;
pub use error::ScraperError;
pub use normalize::normalize_product;
pub use query::CategoryQuery;
pub use types::{CatalogResponse, DirectoryResponse, RawProduct, StoreLocation};
