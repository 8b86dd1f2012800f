pub mod client;
pub mod error;
pub mod normalize;
pub mod pagination;
pub mod query;
pub mod types;

pub use client::ShopifyGraphqlClient;
pub use error::ScraperError;
pub use normalize::normalize_product_node;
pub use types::{GraphqlResponse, PageInfo, ProductNode, ProductsPage};
