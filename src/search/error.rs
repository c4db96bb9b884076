use thiserror::Error;

use crate::http::ApiError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("Por favor, ingresa un término de búsqueda")]
    EmptyTerm,

    #[error("Ya hay una búsqueda en curso")]
    InFlight,

    #[error("{0}")]
    Network(String),
}

impl From<ApiError> for SearchError {
    fn from(e: ApiError) -> Self {
        SearchError::Network(e.to_string())
    }
}
