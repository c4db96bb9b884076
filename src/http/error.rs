use reqwest::StatusCode;
use thiserror::Error;

pub const GENERIC_NETWORK_MESSAGE: &str =
    "Ocurrió un error al buscar. Por favor, verifica tu conexión e intenta nuevamente.";

/// Failures of the catalog HTTP layer. `Display` is the message shown to the
/// user; the wrapped sources carry the technical detail for the logs.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Error al conectar con la API de iTunes")]
    Status(StatusCode),

    #[error("La búsqueda tardó demasiado. Por favor, intenta nuevamente.")]
    Timeout(#[source] reqwest::Error),

    #[error("{}", GENERIC_NETWORK_MESSAGE)]
    Transport(#[source] reqwest::Error),

    #[error("La respuesta de la API de iTunes no es válida")]
    Decode(#[source] reqwest::Error),

    #[error("Dirección de la API inválida: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    #[error("No se pudo inicializar el cliente HTTP")]
    Client(#[source] reqwest::Error),
}

impl ApiError {
    pub(crate) fn from_request(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ApiError::Timeout(e)
        } else {
            ApiError::Transport(e)
        }
    }

    pub(crate) fn from_body(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ApiError::Timeout(e)
        } else if e.is_decode() {
            ApiError::Decode(e)
        } else {
            ApiError::Transport(e)
        }
    }
}
