use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum AudioError {
    #[error("Audio output device error: {0}")]
    DeviceError(String),

    #[error("No se pudo descargar la vista previa: {0}")]
    FetchError(String),

    #[error("No se pudo reproducir la vista previa: {0}")]
    DecodingError(String),
}
