use cohorte_catalog::error::CatalogError;
use cohorte_core::error::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("not authenticated: no bearer token")]
    MissingToken,

    #[error("HTTP request failed: {0}")]
    Transport(String),

    #[error("server responded with status {status}")]
    Status { status: u16 },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid question: {0}")]
    InvalidQuestion(#[from] CoreError),

    #[error("catalog rebuild failed: {0}")]
    Catalog(#[from] CatalogError),

    #[error("config error: {0}")]
    Config(String),

    #[error("background task failed: {0}")]
    Join(String),
}

impl From<ureq::Error> for ApiError {
    fn from(e: ureq::Error) -> Self {
        match e {
            ureq::Error::StatusCode(status) => ApiError::Status { status },
            other => ApiError::Transport(other.to_string()),
        }
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(e: tokio::task::JoinError) -> Self {
        ApiError::Join(e.to_string())
    }
}
