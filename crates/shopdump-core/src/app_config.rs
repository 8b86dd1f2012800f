use std::path::PathBuf;

/// Default Admin API version pinned in requests when none is configured.
pub const DEFAULT_API_VERSION: &str = "2026-01";

#[derive(Clone)]
pub struct AppConfig {
    /// Bare store host, e.g. `"my-store.myshopify.com"`.
    pub shop_domain: String,
    pub access_token: String,
    pub api_version: String,
    /// Explicit GraphQL endpoint. When `None`, the endpoint is derived from
    /// `shop_domain` and `api_version`.
    pub graphql_endpoint: Option<String>,
    pub output_path: PathBuf,
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
}

impl AppConfig {
    /// Returns the Admin GraphQL endpoint URL for this store.
    #[must_use]
    pub fn endpoint(&self) -> String {
        self.graphql_endpoint.clone().unwrap_or_else(|| {
            format!(
                "https://{}/admin/api/{}/graphql.json",
                self.shop_domain, self.api_version
            )
        })
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("shop_domain", &self.shop_domain)
            .field("access_token", &"[redacted]")
            .field("api_version", &self.api_version)
            .field("graphql_endpoint", &self.graphql_endpoint)
            .field("output_path", &self.output_path)
            .field("log_level", &self.log_level)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AppConfig {
        AppConfig {
            shop_domain: "acme.myshopify.com".to_string(),
            access_token: "shpat_secret".to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            graphql_endpoint: None,
            output_path: PathBuf::from("products.csv"),
            log_level: "info".to_string(),
            request_timeout_secs: 30,
            user_agent: "shopdump-test".to_string(),
        }
    }

    #[test]
    fn endpoint_is_derived_from_domain_and_version() {
        assert_eq!(
            sample().endpoint(),
            "https://acme.myshopify.com/admin/api/2026-01/graphql.json"
        );
    }

    #[test]
    fn endpoint_override_wins() {
        let mut cfg = sample();
        cfg.graphql_endpoint = Some("http://127.0.0.1:9000/graphql".to_string());
        assert_eq!(cfg.endpoint(), "http://127.0.0.1:9000/graphql");
    }

    #[test]
    fn debug_output_redacts_access_token() {
        let rendered = format!("{:?}", sample());
        assert!(!rendered.contains("shpat_secret"), "token leaked: {rendered}");
        assert!(rendered.contains("[redacted]"));
    }
}
