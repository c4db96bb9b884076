use std::time::Duration;

pub const ITUNES_SEARCH_ENDPOINT: &str = "https://itunes.apple.com/search";
pub const MEDIA_FILTER: &str = "music";
pub const RESULT_LIMIT: u32 = 20;

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub endpoint: String,
    pub media: String,
    pub limit: u32,
    /// `None` leaves requests unbounded.
    pub timeout: Option<Duration>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: ITUNES_SEARCH_ENDPOINT.to_string(),
            media: MEDIA_FILTER.to_string(),
            limit: RESULT_LIMIT,
            timeout: Some(Duration::from_secs(15)),
        }
    }
}

impl ApiConfig {
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }
}
