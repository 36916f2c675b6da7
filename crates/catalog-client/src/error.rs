//! # Client Error Types
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Client Error Categories                            │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │  Configuration  │  │   Transport     │  │     Backend             │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  ConfigError    │  │  Http           │  │  NotFound               │ │
//! │  │  InvalidUrl     │  │                 │  │  Api { status, body }   │ │
//! │  │                 │  │                 │  │  Decode                 │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │  Validation(FieldErrors) - draft rejected, nothing was sent     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use catalog_core::{CoreError, FieldErrors, ProductId};
use thiserror::Error;

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Failures of a backend call.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The draft failed validation; no request was made.
    #[error("Invalid product: {0}")]
    Validation(FieldErrors),

    /// The product id does not exist on the backend.
    #[error("Product not found: {0}")]
    NotFound(ProductId),

    /// The backend answered with a non-success status.
    #[error("Backend returned {status}: {body}")]
    Api { status: u16, body: String },

    /// Connection, timeout, or other transport failure.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body was not the expected JSON.
    #[error("Could not decode backend response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A request URL could not be built.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Client configuration is unusable.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Domain error other than validation.
    #[error(transparent)]
    Core(CoreError),
}

impl ClientError {
    /// Returns the field errors if this is a validation failure.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            ClientError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

impl From<CoreError> for ClientError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(errors) => ClientError::Validation(errors),
            other => ClientError::Core(other),
        }
    }
}

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to write config file: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("API URL must start with http:// or https://, got: {0}")]
    InvalidApiUrl(String),
}

/// Result type alias for config operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
