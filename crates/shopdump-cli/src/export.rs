//! The fetch-then-save pipeline behind the `shopdump` binary.

use std::path::Path;

use anyhow::Context;
use shopdump_scraper::ShopifyGraphqlClient;

/// Fetches every active product through `client` and writes them to
/// `output`. Returns the number of rows written; `0` means nothing was
/// fetched and `output` was left untouched.
///
/// Fetch failures the client absorbs (HTTP status, GraphQL errors) still
/// yield whatever was fetched before them.
///
/// # Errors
///
/// Returns an error on network or decoding failures during the fetch, or if
/// the output file cannot be written.
pub(crate) async fn export_products(
    client: &ShopifyGraphqlClient,
    output: &Path,
) -> anyhow::Result<usize> {
    let records = client
        .fetch_all_products()
        .await
        .with_context(|| format!("failed to fetch products from {}", client.endpoint()))?;

    if records.is_empty() {
        tracing::warn!(output = %output.display(), "no products fetched; skipping export");
    }

    shopdump_export::save(&records, output)
        .with_context(|| format!("failed to write {}", output.display()))
}
