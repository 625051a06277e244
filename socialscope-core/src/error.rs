use thiserror::Error;

use crate::types::SocialNetwork;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Analytics error: {0}")]
    Analytics(#[from] AnalyticsError),

    #[error("Report error: {0}")]
    Report(#[from] ReportError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("No posts found on {network} for '{keyword}'")]
    EmptyResult {
        network: SocialNetwork,
        keyword: String,
    },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

#[derive(Error, Debug, Clone)]
pub enum FetchError {
    #[error("Authentication failed for {network}")]
    AuthenticationFailed { network: SocialNetwork },

    #[error("Rate limit exceeded. Retry after {retry_after} seconds")]
    RateLimitExceeded { retry_after: u64 },

    #[error("Forbidden access to resource: {resource}")]
    Forbidden { resource: String },

    #[error("Request timeout")]
    RequestTimeout,

    #[error("Invalid API response: {details}")]
    InvalidResponse { details: String },

    #[error("Server error: {status_code}")]
    ServerError { status_code: u16 },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    #[error("Missing credential '{field}' for {network}")]
    MissingCredential {
        network: SocialNetwork,
        field: String,
    },

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    #[error("Environment variable not set: {var_name}")]
    MissingEnvironmentVariable { var_name: String },

    #[error("Configuration parsing error: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Error, Debug, Clone)]
pub enum AnalyticsError {
    /// A post's timestamp cannot be parsed into an hour bucket. Temporal
    /// bucketing cannot proceed, so the aggregation run is aborted with
    /// no partial summary.
    #[error("Malformed post timestamp: '{value}'")]
    MalformedTimestamp { value: String },
}

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to write {artifact}: {source}")]
    WriteFailed {
        artifact: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}
