use thiserror::Error;

/// Errors that can occur while indexing or fetching templates
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Template not found: {url}")]
    NotFound { url: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Rate limited by remote service: {message}")]
    RateLimited { message: String },

    #[error("Unexpected status {status} from {url}")]
    UnexpectedStatus { url: String, status: u16 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for template operations
pub type Result<T> = std::result::Result<T, TemplateError>;
