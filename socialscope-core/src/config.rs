use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::types::{Credentials, SocialNetwork};

const ENV_TWITTER_BEARER_TOKEN: &str = "SOCIALSCOPE_TWITTER_BEARER_TOKEN";
const ENV_REDDIT_CLIENT_ID: &str = "SOCIALSCOPE_REDDIT_CLIENT_ID";
const ENV_REDDIT_CLIENT_SECRET: &str = "SOCIALSCOPE_REDDIT_CLIENT_SECRET";
const ENV_REDDIT_USER_AGENT: &str = "SOCIALSCOPE_REDDIT_USER_AGENT";
const ENV_OUTPUT_DIR: &str = "SOCIALSCOPE_OUTPUT_DIR";
const ENV_MAX_RESULTS: &str = "SOCIALSCOPE_MAX_RESULTS";

/// Application configuration: credentials per network, fetch size, and
/// the directory report artifacts are written to. The output directory
/// is an explicit value here rather than process-wide state.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub credentials: Credentials,
    #[serde(default = "default_max_results")]
    pub max_results: u32,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_max_results() -> u32 {
    20
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("reports")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            credentials: Credentials::default(),
            max_results: default_max_results(),
            output_dir: default_output_dir(),
        }
    }
}

impl AppConfig {
    /// Load from a TOML file, then apply environment overrides.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let mut config: AppConfig = toml::from_str(&raw)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Build from defaults plus environment variables only.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env_overrides();
        config
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(value) = std::env::var(ENV_TWITTER_BEARER_TOKEN) {
            self.credentials.twitter_bearer_token = Some(value);
        }
        if let Ok(value) = std::env::var(ENV_REDDIT_CLIENT_ID) {
            self.credentials.reddit_client_id = Some(value);
        }
        if let Ok(value) = std::env::var(ENV_REDDIT_CLIENT_SECRET) {
            self.credentials.reddit_client_secret = Some(value);
        }
        if let Ok(value) = std::env::var(ENV_REDDIT_USER_AGENT) {
            self.credentials.reddit_user_agent = Some(value);
        }
        if let Ok(value) = std::env::var(ENV_OUTPUT_DIR) {
            self.output_dir = PathBuf::from(value);
        }
        if let Ok(value) = std::env::var(ENV_MAX_RESULTS) {
            if let Ok(parsed) = value.parse() {
                self.max_results = parsed;
            }
        }
    }

    /// Check that the credentials required for `network` are present,
    /// before any fetch is attempted. Networks without an adapter need no
    /// credentials; their fetch returns an empty sequence.
    pub fn validate_credentials(&self, network: SocialNetwork) -> Result<(), ConfigError> {
        match network {
            SocialNetwork::Twitter => {
                require(network, "twitter_bearer_token", &self.credentials.twitter_bearer_token)
            }
            SocialNetwork::Reddit => {
                require(network, "reddit_client_id", &self.credentials.reddit_client_id)?;
                require(
                    network,
                    "reddit_client_secret",
                    &self.credentials.reddit_client_secret,
                )
            }
            SocialNetwork::Instagram | SocialNetwork::Facebook => Ok(()),
        }
    }
}

fn require(
    network: SocialNetwork,
    field: &str,
    value: &Option<String>,
) -> Result<(), ConfigError> {
    match value.as_deref() {
        Some(v) if !v.is_empty() => Ok(()),
        _ => Err(ConfigError::MissingCredential {
            network,
            field: field.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.max_results, 20);
        assert_eq!(config.output_dir, PathBuf::from("reports"));
        assert!(config.credentials.twitter_bearer_token.is_none());
    }

    #[test]
    fn test_parse_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            max_results = 50
            output_dir = "out"

            [credentials]
            twitter_bearer_token = "token-123"
            "#,
        )
        .unwrap();
        assert_eq!(config.max_results, 50);
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(
            config.credentials.twitter_bearer_token.as_deref(),
            Some("token-123")
        );
    }

    #[test]
    fn test_missing_twitter_credential() {
        let config = AppConfig::default();
        let err = config
            .validate_credentials(SocialNetwork::Twitter)
            .unwrap_err();
        assert!(matches!(err, ConfigError::MissingCredential { .. }));
    }

    #[test]
    fn test_empty_credential_counts_as_missing() {
        let mut config = AppConfig::default();
        config.credentials.twitter_bearer_token = Some(String::new());
        assert!(config.validate_credentials(SocialNetwork::Twitter).is_err());
    }

    #[test]
    fn test_reddit_needs_both_id_and_secret() {
        let mut config = AppConfig::default();
        config.credentials.reddit_client_id = Some("id".to_string());
        assert!(config.validate_credentials(SocialNetwork::Reddit).is_err());

        config.credentials.reddit_client_secret = Some("secret".to_string());
        assert!(config.validate_credentials(SocialNetwork::Reddit).is_ok());
    }

    #[test]
    fn test_unsupported_networks_need_no_credentials() {
        let config = AppConfig::default();
        assert!(config
            .validate_credentials(SocialNetwork::Instagram)
            .is_ok());
        assert!(config.validate_credentials(SocialNetwork::Facebook).is_ok());
    }
}
