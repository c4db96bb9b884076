pub mod config;
pub mod error;

use reqwest::Client;
use tracing::{debug, info, warn};
use url::Url;

use crate::model::{SearchResponse, SearchResult};

pub use config::ApiConfig;
pub use error::ApiError;

pub struct ApiService {
    pub client: Client,
    config: ApiConfig,
}

impl ApiService {
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let mut builder = Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(ApiError::Client)?;

        Url::parse(&config.endpoint)?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Lookup URL for an already trimmed term.
    pub fn search_url(&self, term: &str) -> Result<Url, ApiError> {
        let limit = self.config.limit.to_string();
        Ok(Url::parse_with_params(
            &self.config.endpoint,
            [
                ("term", term),
                ("media", self.config.media.as_str()),
                ("limit", limit.as_str()),
            ],
        )?)
    }

    pub async fn search(&self, term: &str) -> Result<Vec<SearchResult>, ApiError> {
        let url = self.search_url(term)?;
        debug!(%url, "Searching catalog");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(ApiError::from_request)?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, term, "Catalog search rejected");
            return Err(ApiError::Status(status));
        }

        let body: SearchResponse = response.json().await.map_err(ApiError::from_body)?;
        let results = body.into_results();
        info!(term, count = results.len(), "Catalog search finished");

        Ok(results)
    }

    pub async fn fetch_preview(&self, url: &str) -> Result<Vec<u8>, ApiError> {
        debug!(url, "Downloading preview");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(ApiError::from_request)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }

        let bytes = response.bytes().await.map_err(ApiError::from_body)?;
        Ok(bytes.to_vec())
    }
}
