//! Domain error types

use thiserror::Error;

/// Error when an invalid domain tag is provided
#[derive(Debug, Clone, Error)]
#[error("Invalid domain: \"{input}\". Valid domains are: autenticidade, valores, motivacao, relacionamentos, conflitos_internos")]
pub struct InvalidDomainError {
    pub input: String,
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}
