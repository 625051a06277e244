use crate::error::*;
use std::time::Duration;
use tracing::{error, info, warn};

pub trait ErrorExt {
    fn log_error(&self) -> &Self;
    fn log_warn(&self) -> &Self;
    fn is_retryable(&self) -> bool;
    fn retry_after(&self) -> Option<Duration>;
    fn user_friendly_message(&self) -> String;
    fn error_code(&self) -> String;
}

impl ErrorExt for CoreError {
    fn log_error(&self) -> &Self {
        error!("CoreError: {}", self);
        match self {
            CoreError::Fetch(e) => {
                error!("Fetch error details: {:?}", e);
            }
            CoreError::Config(e) => {
                error!("Configuration error details: {:?}", e);
            }
            CoreError::Analytics(e) => {
                error!("Analytics error details: {:?}", e);
            }
            CoreError::Report(e) => {
                error!("Report error details: {:?}", e);
            }
            _ => {}
        }
        self
    }

    fn log_warn(&self) -> &Self {
        warn!("CoreError (warning): {}", self);
        self
    }

    fn is_retryable(&self) -> bool {
        match self {
            CoreError::Fetch(e) => e.is_retryable(),
            CoreError::Network(_) => true,
            _ => false,
        }
    }

    fn retry_after(&self) -> Option<Duration> {
        match self {
            CoreError::Fetch(e) => e.retry_after(),
            _ if self.is_retryable() => Some(Duration::from_secs(5)), // Default retry delay
            _ => None,
        }
    }

    fn user_friendly_message(&self) -> String {
        match self {
            CoreError::Fetch(e) => e.user_friendly_message(),
            CoreError::Config(e) => e.user_friendly_message(),
            CoreError::Analytics(e) => e.user_friendly_message(),
            CoreError::Report(e) => e.user_friendly_message(),
            CoreError::Network(_) => {
                "Network connection error. Please check your internet connection.".to_string()
            }
            CoreError::EmptyResult { network, keyword } => {
                format!(
                    "No posts found on {} for '{}'. Check your search term and API keys.",
                    network, keyword
                )
            }
            CoreError::Io(_) => "A file operation failed. Please try again.".to_string(),
            CoreError::Serialization(_) => {
                "Data could not be encoded. Please try again.".to_string()
            }
            CoreError::Internal { .. } => {
                "An unexpected error occurred. Please try again later.".to_string()
            }
        }
    }

    fn error_code(&self) -> String {
        match self {
            CoreError::Fetch(_) => "FETCH".to_string(),
            CoreError::Config(_) => "CONFIG".to_string(),
            CoreError::Analytics(_) => "ANALYTICS".to_string(),
            CoreError::Report(_) => "REPORT".to_string(),
            CoreError::Io(_) => "IO".to_string(),
            CoreError::Serialization(_) => "SERIALIZATION".to_string(),
            CoreError::Network(_) => "NETWORK".to_string(),
            CoreError::EmptyResult { .. } => "EMPTY_RESULT".to_string(),
            CoreError::Internal { .. } => "INTERNAL".to_string(),
        }
    }
}

impl ErrorExt for FetchError {
    fn log_error(&self) -> &Self {
        error!("FetchError: {}", self);
        self
    }

    fn log_warn(&self) -> &Self {
        warn!("FetchError (warning): {}", self);
        self
    }

    fn is_retryable(&self) -> bool {
        match self {
            FetchError::RateLimitExceeded { .. } => true,
            FetchError::RequestTimeout => true,
            FetchError::ServerError { status_code } => *status_code >= 500,
            _ => false,
        }
    }

    fn retry_after(&self) -> Option<Duration> {
        match self {
            FetchError::RateLimitExceeded { retry_after } => {
                Some(Duration::from_secs(*retry_after))
            }
            _ if self.is_retryable() => Some(Duration::from_secs(30)),
            _ => None,
        }
    }

    fn user_friendly_message(&self) -> String {
        match self {
            FetchError::AuthenticationFailed { network } => {
                format!(
                    "Authentication failed for {}. Please check your API credentials.",
                    network
                )
            }
            FetchError::RateLimitExceeded { retry_after } => format!(
                "Too many requests. Please wait {} seconds before trying again.",
                retry_after
            ),
            FetchError::Forbidden { resource } => format!(
                "Access denied to {}. You may not have permission to view this content.",
                resource
            ),
            FetchError::RequestTimeout => {
                "The request to the social network timed out. Please try again.".to_string()
            }
            FetchError::InvalidResponse { .. } => {
                "The social network returned an unexpected response. Please try again later."
                    .to_string()
            }
            FetchError::ServerError { .. } => {
                "The social network is having trouble. Please try again later.".to_string()
            }
        }
    }

    fn error_code(&self) -> String {
        match self {
            FetchError::AuthenticationFailed { .. } => "FETCH_AUTH_FAILED".to_string(),
            FetchError::RateLimitExceeded { .. } => "FETCH_RATE_LIMIT".to_string(),
            FetchError::Forbidden { .. } => "FETCH_FORBIDDEN".to_string(),
            FetchError::RequestTimeout => "FETCH_TIMEOUT".to_string(),
            FetchError::InvalidResponse { .. } => "FETCH_INVALID_RESPONSE".to_string(),
            FetchError::ServerError { .. } => "FETCH_SERVER_ERROR".to_string(),
        }
    }
}

impl ErrorExt for ConfigError {
    fn log_error(&self) -> &Self {
        error!("ConfigError: {}", self);
        self
    }

    fn log_warn(&self) -> &Self {
        warn!("ConfigError (warning): {}", self);
        self
    }

    fn is_retryable(&self) -> bool {
        false // Config errors are never retryable
    }

    fn retry_after(&self) -> Option<Duration> {
        None
    }

    fn user_friendly_message(&self) -> String {
        match self {
            ConfigError::FileNotFound { path } => {
                format!("Configuration file not found: {}", path)
            }
            ConfigError::MissingCredential { network, field } => format!(
                "Credential '{}' is required for {}. Please add it to your configuration.",
                field, network
            ),
            ConfigError::InvalidValue { field, .. } => {
                format!("Invalid value for configuration field '{}'.", field)
            }
            ConfigError::MissingEnvironmentVariable { var_name } => format!(
                "Environment variable '{}' is required but not set.",
                var_name
            ),
            ConfigError::Parse(_) => {
                "Configuration file format is invalid. Please check the settings.".to_string()
            }
        }
    }

    fn error_code(&self) -> String {
        match self {
            ConfigError::FileNotFound { .. } => "CONFIG_FILE_NOT_FOUND".to_string(),
            ConfigError::MissingCredential { .. } => "CONFIG_MISSING_CREDENTIAL".to_string(),
            ConfigError::InvalidValue { .. } => "CONFIG_INVALID_VALUE".to_string(),
            ConfigError::MissingEnvironmentVariable { .. } => "CONFIG_MISSING_ENV_VAR".to_string(),
            ConfigError::Parse(_) => "CONFIG_PARSE_ERROR".to_string(),
        }
    }
}

impl ErrorExt for AnalyticsError {
    fn log_error(&self) -> &Self {
        error!("AnalyticsError: {}", self);
        self
    }

    fn log_warn(&self) -> &Self {
        warn!("AnalyticsError (warning): {}", self);
        self
    }

    fn is_retryable(&self) -> bool {
        // Bad input data stays bad; retrying the run cannot help.
        false
    }

    fn retry_after(&self) -> Option<Duration> {
        None
    }

    fn user_friendly_message(&self) -> String {
        match self {
            AnalyticsError::MalformedTimestamp { value } => format!(
                "A post carried an unreadable timestamp ('{}'), so the analysis was aborted.",
                value
            ),
        }
    }

    fn error_code(&self) -> String {
        match self {
            AnalyticsError::MalformedTimestamp { .. } => "ANALYTICS_MALFORMED_TIMESTAMP".to_string(),
        }
    }
}

impl ErrorExt for ReportError {
    fn log_error(&self) -> &Self {
        error!("ReportError: {}", self);
        self
    }

    fn log_warn(&self) -> &Self {
        warn!("ReportError (warning): {}", self);
        self
    }

    fn is_retryable(&self) -> bool {
        false
    }

    fn retry_after(&self) -> Option<Duration> {
        None
    }

    fn user_friendly_message(&self) -> String {
        match self {
            ReportError::WriteFailed { artifact, .. } => {
                format!("Could not write report artifact '{}'.", artifact)
            }
            ReportError::Serialize(_) => "Could not encode the report summary.".to_string(),
        }
    }

    fn error_code(&self) -> String {
        match self {
            ReportError::WriteFailed { .. } => "REPORT_WRITE_FAILED".to_string(),
            ReportError::Serialize(_) => "REPORT_SERIALIZE_FAILED".to_string(),
        }
    }
}

pub struct ErrorReporter {
    report_errors: bool,
    report_warnings: bool,
}

impl ErrorReporter {
    pub fn new() -> Self {
        Self {
            report_errors: true,
            report_warnings: true,
        }
    }

    pub fn with_error_reporting(mut self, enabled: bool) -> Self {
        self.report_errors = enabled;
        self
    }

    pub fn with_warning_reporting(mut self, enabled: bool) -> Self {
        self.report_warnings = enabled;
        self
    }

    pub fn report_error(&self, error: &CoreError) {
        if self.report_errors {
            error.log_error();
            info!("Error code: {}", error.error_code());
            info!("User message: {}", error.user_friendly_message());
            if error.is_retryable() {
                if let Some(retry_after) = error.retry_after() {
                    info!("Error is retryable. Retry after: {:?}", retry_after);
                }
            }
        }
    }

    pub fn report_warning(&self, error: &CoreError) {
        if self.report_warnings {
            error.log_warn();
        }
    }
}

impl Default for ErrorReporter {
    fn default() -> Self {
        Self::new()
    }
}
