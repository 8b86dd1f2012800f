//! The GraphQL document sent for every products page.

/// Fetches one page of 50 active products with the first variant's pricing
/// and up to 50 collection titles per product. `$cursor` is `null` for the
/// first page and the previous page's `endCursor` afterwards.
pub const PRODUCTS_QUERY: &str = r#"
query getProducts($cursor: String) {
  products(first: 50, after: $cursor, query: "status:active") {
    pageInfo {
      hasNextPage
      endCursor
    }
    edges {
      node {
        id
        title
        tags
        variants(first: 1) {
          edges {
            node {
              price
              compareAtPrice
            }
          }
        }
        collections(first: 50) {
          edges {
            node {
              title
            }
          }
        }
      }
    }
  }
}
"#;
