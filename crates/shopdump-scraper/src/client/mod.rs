//! HTTP client for the Shopify Admin GraphQL API.

mod fetch_all;

use std::time::Duration;

use reqwest::{Client, StatusCode, Url};
use serde_json::json;
use shopdump_core::AppConfig;

use crate::error::ScraperError;
use crate::query::PRODUCTS_QUERY;
use crate::types::{GraphqlResponse, ProductsPage};

/// Header carrying the Admin API access token.
const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

/// Maximum number of pages to fetch before giving up.
/// Prevents infinite loops on cycling cursors.
pub(super) const MAX_PAGES: usize = 10_000;

/// Longest slice of an error response body kept in [`ScraperError::UnexpectedStatus`].
const ERROR_BODY_LIMIT: usize = 512;

/// Client for the `products` query of a single store's Admin GraphQL endpoint.
///
/// Requests are sequential: each page is awaited before the next one is
/// built. There is no retry or backoff.
pub struct ShopifyGraphqlClient {
    pub(super) client: Client,
    pub(super) endpoint: Url,
    pub(super) access_token: String,
}

impl ShopifyGraphqlClient {
    /// Creates a client for the store described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ScraperError::InvalidEndpoint`] if the
    /// configured endpoint is not a valid URL.
    pub fn new(config: &AppConfig) -> Result<Self, ScraperError> {
        Self::with_endpoint(
            &config.endpoint(),
            &config.access_token,
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    /// Creates a client pointed at an explicit GraphQL endpoint (for testing
    /// with wiremock, or for a proxy in front of the store).
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ScraperError::InvalidEndpoint`] if
    /// `endpoint` is not a valid URL.
    pub fn with_endpoint(
        endpoint: &str,
        access_token: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, ScraperError> {
        let endpoint = Url::parse(endpoint).map_err(|e| ScraperError::InvalidEndpoint {
            endpoint: endpoint.to_owned(),
            reason: e.to_string(),
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            endpoint,
            access_token: access_token.to_owned(),
        })
    }

    /// The GraphQL endpoint this client posts to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    /// Fetches one page of active products.
    ///
    /// `cursor` is `None` for the first page and the previous page's
    /// `endCursor` afterwards.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::UnexpectedStatus`] — any status other than `200 OK`,
    ///   including other 2xx codes.
    /// - [`ScraperError::Graphql`] — the response carries an `errors` key.
    /// - [`ScraperError::Http`] — network or TLS failure.
    /// - [`ScraperError::Deserialize`] — the body is not valid JSON or does
    ///   not match the expected shape.
    pub async fn fetch_products_page(
        &self,
        cursor: Option<&str>,
    ) -> Result<ProductsPage, ScraperError> {
        let payload = json!({
            "query": PRODUCTS_QUERY,
            "variables": { "cursor": cursor },
        });

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(ACCESS_TOKEN_HEADER, &self.access_token)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&payload)
            .send()
            .await?;
        let status = response.status();

        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url: self.endpoint.to_string(),
                body: truncate_body(&body),
            });
        }

        let body = response.text().await?;
        let parsed = serde_json::from_str::<GraphqlResponse>(&body).map_err(|e| {
            ScraperError::Deserialize {
                context: format!(
                    "products page (cursor={}) from {}",
                    cursor.unwrap_or("<none>"),
                    self.endpoint
                ),
                source: e,
            }
        })?;

        if let Some(summary) = parsed.error_summary() {
            return Err(ScraperError::Graphql(summary));
        }

        Ok(parsed.into_page())
    }
}

/// Keeps at most [`ERROR_BODY_LIMIT`] characters of an error body.
fn truncate_body(body: &str) -> String {
    match body.char_indices().nth(ERROR_BODY_LIMIT) {
        Some((idx, _)) => format!("{}…", &body[..idx]),
        None => body.to_owned(),
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
