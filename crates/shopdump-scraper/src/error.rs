use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("unexpected HTTP status {status} from {url}: {body}")]
    UnexpectedStatus {
        status: u16,
        url: String,
        body: String,
    },

    #[error("GraphQL error: {0}")]
    Graphql(String),

    #[error("invalid GraphQL endpoint \"{endpoint}\": {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },
}

impl ScraperError {
    /// Returns `true` for failures the paginator logs and absorbs, keeping
    /// the records fetched so far: a non-success HTTP status or an `errors`
    /// payload from the API.
    #[must_use]
    pub fn stops_pagination(&self) -> bool {
        matches!(
            self,
            ScraperError::UnexpectedStatus { .. } | ScraperError::Graphql(_)
        )
    }
}
