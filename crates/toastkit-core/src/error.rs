//! Error types for Toastkit Core

use thiserror::Error;

/// Main error type for Toastkit operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Toast error: {0}")]
    Toast(#[from] ToastError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Toast provider errors
#[derive(Error, Debug)]
pub enum ToastError {
    #[error("No tokio runtime available; the toast provider must be started inside a runtime")]
    NoRuntime,

    #[error("Toast provider is not running; create a ToastProvider before using its handle")]
    ProviderClosed,
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl serde::Serialize for Error {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;
