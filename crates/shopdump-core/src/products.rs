use serde::Serialize;

/// One exported product row.
///
/// Every field is always populated: missing upstream data degrades to an
/// empty string, `"0"` for the price, or `false` for `sale`. Field order is
/// the column order of the exported CSV.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductRecord {
    /// Trailing segment of the Shopify global ID, e.g. `"8123456789"` for
    /// `"gid://shopify/Product/8123456789"`.
    pub id: String,
    pub title: String,
    /// First variant's price exactly as returned, or `"0"` when the product
    /// has no variants.
    pub price: String,
    /// Tags joined with `", "`, in API order.
    pub tags: String,
    /// Collection titles joined with `", "`, in API order.
    pub collections: String,
    /// `true` when the compare-at price is strictly greater than the price.
    pub sale: bool,
}

/// Column names of the exported file, in order.
pub const PRODUCT_COLUMNS: [&str; 6] = ["id", "title", "price", "tags", "collections", "sale"];
