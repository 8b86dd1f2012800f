//! Multi-page product fetch loop for `ShopifyGraphqlClient`.

use shopdump_core::ProductRecord;

use crate::error::ScraperError;
use crate::normalize::normalize_product_node;
use crate::pagination::{next_page, NextPage};

use super::ShopifyGraphqlClient;
use super::MAX_PAGES;

impl ShopifyGraphqlClient {
    /// Fetches every active product, following `endCursor` until
    /// `hasNextPage` is `false`, and returns one [`ProductRecord`] per node in
    /// API order.
    ///
    /// **Best-effort semantics**: a non-success HTTP status or a GraphQL
    /// `errors` payload is logged and ends pagination; the records collected
    /// from earlier pages are returned as `Ok`. The same applies when the
    /// page limit is hit or a page claims more results without a cursor.
    ///
    /// # Errors
    ///
    /// Propagates [`ScraperError::Http`] (network failure) and
    /// [`ScraperError::Deserialize`] (malformed body) from
    /// [`Self::fetch_products_page`].
    pub async fn fetch_all_products(&self) -> Result<Vec<ProductRecord>, ScraperError> {
        let mut records: Vec<ProductRecord> = Vec::new();
        let mut cursor: Option<String> = None;
        let mut page_count = 0usize;

        loop {
            page_count += 1;
            if page_count > MAX_PAGES {
                tracing::warn!(
                    max_pages = MAX_PAGES,
                    records = records.len(),
                    "pagination limit reached; returning products fetched so far"
                );
                break;
            }

            let page = match self.fetch_products_page(cursor.as_deref()).await {
                Ok(page) => page,
                Err(e) if e.stops_pagination() => {
                    tracing::error!(
                        page = page_count,
                        records = records.len(),
                        error = %e,
                        "product fetch failed; returning products fetched so far"
                    );
                    break;
                }
                Err(e) => return Err(e),
            };

            let node_count = page.edges.len();
            records.extend(
                page.edges
                    .into_iter()
                    .map(|edge| normalize_product_node(edge.node)),
            );
            tracing::debug!(
                page = page_count,
                nodes = node_count,
                total = records.len(),
                "fetched products page"
            );

            match next_page(&page.page_info) {
                NextPage::Cursor(next) => cursor = Some(next),
                NextPage::Done => break,
                NextPage::Stalled => {
                    tracing::warn!(
                        page = page_count,
                        "hasNextPage is true but no endCursor was returned; stopping"
                    );
                    break;
                }
            }
        }

        tracing::info!(
            pages = page_count.min(MAX_PAGES),
            products = records.len(),
            endpoint = %self.endpoint,
            "product fetch finished"
        );

        Ok(records)
    }
}
