//! Response types for the Shopify Admin GraphQL `products` query.
//!
//! ## Observed shape
//!
//! ```text
//! { "data": { "products": {
//!     "pageInfo": { "hasNextPage": true, "endCursor": "eyJsYXN0X2lkIjo..." },
//!     "edges": [ { "node": { "id": "gid://shopify/Product/8123", ... } } ]
//! } } }
//! ```
//!
//! A failed query still comes back as HTTP 200, with a top-level `errors`
//! array (e.g. `[{"message": "Throttled", "extensions": {...}}]`) and `data`
//! either `null` or partially filled.
//!
//! ### Prices
//! `price` and `compareAtPrice` are `Money` scalars, serialized as decimal
//! strings (`"24.99"`). `compareAtPrice` is `null` when no comparison price
//! is set.
//!
//! Every nested field is modelled as optional or defaulted so that a sparse
//! node degrades to empty values instead of failing the whole page.

use serde::{Deserialize, Deserializer};

/// Top-level GraphQL envelope.
#[derive(Debug, Deserialize)]
pub struct GraphqlResponse {
    #[serde(default)]
    pub data: Option<ProductsData>,

    /// Raw `errors` value. `Some` whenever the key is present, even as
    /// `null`; its presence alone marks the response as failed.
    #[serde(default, deserialize_with = "present")]
    pub errors: Option<serde_json::Value>,
}

/// Maps any value of a present key, `null` included, to `Some`.
fn present<'de, D>(deserializer: D) -> Result<Option<serde_json::Value>, D::Error>
where
    D: Deserializer<'de>,
{
    serde_json::Value::deserialize(deserializer).map(Some)
}

impl GraphqlResponse {
    /// Renders the `errors` payload as a single diagnostic line, or `None`
    /// when the response carries no errors.
    ///
    /// Messages are taken from each entry's `message` field; entries without
    /// one are rendered as raw JSON.
    #[must_use]
    pub fn error_summary(&self) -> Option<String> {
        let errors = self.errors.as_ref()?;
        let summary = match errors {
            serde_json::Value::Array(items) => items
                .iter()
                .map(|item| {
                    item.get("message")
                        .and_then(serde_json::Value::as_str)
                        .map_or_else(|| item.to_string(), str::to_owned)
                })
                .collect::<Vec<_>>()
                .join("; "),
            other => other.to_string(),
        };
        Some(summary)
    }

    /// Consumes the envelope and returns the products page, or an empty
    /// final page when `data` or `data.products` is missing.
    #[must_use]
    pub fn into_page(self) -> ProductsPage {
        self.data
            .and_then(|d| d.products)
            .unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
pub struct ProductsData {
    #[serde(default)]
    pub products: Option<ProductsPage>,
}

/// One page of the `products` connection.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductsPage {
    /// Missing `pageInfo` is treated as the last page.
    #[serde(default)]
    pub page_info: PageInfo,

    #[serde(default)]
    pub edges: Vec<Edge<ProductNode>>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    #[serde(default)]
    pub has_next_page: bool,

    /// Opaque cursor of the last edge on this page. `null` on empty pages.
    #[serde(default)]
    pub end_cursor: Option<String>,
}

/// A connection edge wrapping a single node.
#[derive(Debug, Deserialize)]
pub struct Edge<T> {
    pub node: T,
}

/// A nested connection (`variants`, `collections`) where only the nodes matter.
#[derive(Debug, Deserialize)]
pub struct Connection<T> {
    #[serde(default = "Vec::new")]
    pub edges: Vec<Edge<T>>,
}

impl<T> Default for Connection<T> {
    fn default() -> Self {
        Self { edges: Vec::new() }
    }
}

impl<T> Connection<T> {
    /// Iterates over the connection's nodes in API order.
    pub fn nodes(&self) -> impl Iterator<Item = &T> {
        self.edges.iter().map(|e| &e.node)
    }
}

/// A single product node as requested by [`crate::query::PRODUCTS_QUERY`].
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductNode {
    /// Global ID, e.g. `"gid://shopify/Product/8123456789"`.
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub title: Option<String>,

    /// Tags as a JSON array of strings, in the order Shopify returns them.
    #[serde(default)]
    pub tags: Option<Vec<String>>,

    /// At most one variant is requested (`variants(first: 1)`).
    #[serde(default)]
    pub variants: Option<Connection<VariantNode>>,

    #[serde(default)]
    pub collections: Option<Connection<CollectionNode>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantNode {
    /// Current price as a decimal string (e.g. `"30.00"`).
    #[serde(default)]
    pub price: Option<String>,

    /// Pre-sale comparison price, `null` when not set.
    #[serde(default)]
    pub compare_at_price: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CollectionNode {
    #[serde(default)]
    pub title: Option<String>,
}
