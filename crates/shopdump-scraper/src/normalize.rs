//! Flattening of GraphQL product nodes into [`shopdump_core::ProductRecord`]s.

use shopdump_core::ProductRecord;

use crate::types::ProductNode;

/// Price written when a product has no variants.
const DEFAULT_PRICE: &str = "0";

/// Separator used for the joined `tags` and `collections` columns.
const LIST_SEPARATOR: &str = ", ";

/// Flattens one product node into a [`ProductRecord`].
///
/// Never fails: missing fields degrade to `""`, `"0"` or `false`.
#[must_use]
pub fn normalize_product_node(node: ProductNode) -> ProductRecord {
    let first_variant = node
        .variants
        .as_ref()
        .and_then(|v| v.nodes().next());

    let price = first_variant
        .and_then(|v| v.price.clone())
        .unwrap_or_else(|| DEFAULT_PRICE.to_owned());
    let compare_at_price = first_variant.and_then(|v| v.compare_at_price.as_deref());

    let sale = is_on_sale(&price, compare_at_price);

    let collections = node
        .collections
        .as_ref()
        .map(|c| {
            c.nodes()
                .filter_map(|c| c.title.as_deref())
                .collect::<Vec<_>>()
                .join(LIST_SEPARATOR)
        })
        .unwrap_or_default();

    let tags = node
        .tags
        .map(|t| t.join(LIST_SEPARATOR))
        .unwrap_or_default();

    ProductRecord {
        id: local_id(node.id.as_deref().unwrap_or_default()).to_owned(),
        title: node.title.unwrap_or_default(),
        price,
        tags,
        collections,
        sale,
    }
}

/// Returns the trailing path segment of a global ID.
///
/// `"gid://shopify/Product/8123456789"` becomes `"8123456789"`; an ID with no
/// `/` is returned unchanged.
#[must_use]
pub fn local_id(global_id: &str) -> &str {
    global_id
        .rsplit_once('/')
        .map_or(global_id, |(_, tail)| tail)
}

/// Returns `true` when `compare_at_price` is present and strictly greater
/// than `price`.
///
/// Both values are parsed as floating point after trimming whitespace. A
/// value that does not parse means "not on sale".
#[must_use]
pub fn is_on_sale(price: &str, compare_at_price: Option<&str>) -> bool {
    let Some(compare_at_price) = compare_at_price.filter(|s| !s.is_empty()) else {
        return false;
    };

    match (
        price.trim().parse::<f64>(),
        compare_at_price.trim().parse::<f64>(),
    ) {
        (Ok(price), Ok(compare_at_price)) => compare_at_price > price,
        _ => false,
    }
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
