use std::path::PathBuf;
use thiserror::Error;

use crate::awx::api::AwxApiError;

#[derive(Error, Debug)]
pub enum AwxMcpError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("AWX API error: {0}")]
    Api(#[from] AwxApiError),

    #[error("MCP server error: {0}")]
    Server(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(
        "Missing required credentials. Set AWX_URL, AWX_USERNAME, and AWX_PASSWORD environment variables."
    )]
    MissingCredentials,

    #[error("Invalid AWX URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Request timeout must be greater than zero")]
    InvalidTimeout,

    #[error("Failed to read config file {}: {source}", path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration parsing failed: {0}")]
    ParsingFailed(String),
}

pub type Result<T> = std::result::Result<T, AwxMcpError>;
