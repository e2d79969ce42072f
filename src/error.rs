// Error types for the portfolio site.
// Classifies upstream failures so every call site can pick its fallback.

use thiserror::Error;

/// Coarse failure class used when logging a degraded lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Network,
    Decode,
    Parse,
    Shape,
    Cache,
    Other,
}

#[derive(Error, Debug)]
pub enum PortfolioError {
    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Rate limit exceeded, resets at {reset_at}")]
    RateLimited { reset_at: String },

    #[error("Response body is not valid UTF-8: {0}")]
    Decode(#[from] std::string::FromUtf8Error),

    #[error("Malformed document: {0}")]
    Parse(String),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Missing expected field: {0}")]
    MissingField(&'static str),

    #[error("Unexpected payload shape: expected {expected}")]
    Shape { expected: &'static str },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl PortfolioError {
    pub fn kind(&self) -> FailureKind {
        match self {
            PortfolioError::Network(_)
            | PortfolioError::Status { .. }
            | PortfolioError::RateLimited { .. } => FailureKind::Network,
            PortfolioError::Decode(_) => FailureKind::Decode,
            PortfolioError::Parse(_)
            | PortfolioError::Json(_)
            | PortfolioError::MissingField(_) => FailureKind::Parse,
            PortfolioError::Shape { .. } => FailureKind::Shape,
            PortfolioError::Io(_) => FailureKind::Cache,
            PortfolioError::Other(_) => FailureKind::Other,
        }
    }
}

impl From<roxmltree::Error> for PortfolioError {
    fn from(err: roxmltree::Error) -> Self {
        PortfolioError::Parse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PortfolioError>;
