//! Configuration handling for the auth client

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default auth API base URL
const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5050/api";
/// Default post-login destination
const DEFAULT_HOME_PATH: &str = "/";
/// Default minimum accepted password length
const DEFAULT_MIN_PASSWORD_LENGTH: usize = 5;

/// Password policy handed to the forms at construction.
#[derive(Debug, Clone)]
pub struct FormPolicy {
    pub min_password_length: usize,
}

impl Default for FormPolicy {
    fn default() -> Self {
        Self {
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
        }
    }
}

/// User configuration for the auth client
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AuthClientConfig {
    /// Auth API base URL
    pub api_base_url: Option<String>,
    /// Route to land on after sign-in
    pub home_path: Option<String>,
    /// Minimum accepted password length
    pub min_password_length: Option<usize>,
}

impl AuthClientConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "authflow", "authflow")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: AuthClientConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    /// Effective API base URL.
    pub fn api_base_url(&self) -> &str {
        self.api_base_url.as_deref().unwrap_or(DEFAULT_API_BASE_URL)
    }

    /// Effective post-login destination.
    pub fn home_path(&self) -> &str {
        self.home_path.as_deref().unwrap_or(DEFAULT_HOME_PATH)
    }

    /// Password policy for the forms.
    pub fn form_policy(&self) -> FormPolicy {
        FormPolicy {
            min_password_length: self
                .min_password_length
                .unwrap_or(DEFAULT_MIN_PASSWORD_LENGTH),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AuthClientConfig::default();
        assert!(config.api_base_url.is_none());
        assert!(config.home_path.is_none());
        assert!(config.min_password_length.is_none());
    }

    #[test]
    fn test_effective_defaults() {
        let config = AuthClientConfig::default();
        assert_eq!(config.api_base_url(), "http://127.0.0.1:5050/api");
        assert_eq!(config.home_path(), "/");
        assert_eq!(config.form_policy().min_password_length, 5);
    }

    #[test]
    fn test_serialization() {
        let config = AuthClientConfig {
            api_base_url: Some("https://auth.example.com/api".to_string()),
            home_path: Some("/dashboard".to_string()),
            min_password_length: Some(8),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: AuthClientConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(
            parsed.api_base_url,
            Some("https://auth.example.com/api".to_string())
        );
        assert_eq!(parsed.home_path, Some("/dashboard".to_string()));
        assert_eq!(parsed.min_password_length, Some(8));
    }

    #[test]
    fn test_partial_serialization() {
        let config = AuthClientConfig {
            api_base_url: Some("https://auth.example.com/api".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: AuthClientConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(
            parsed.api_base_url,
            Some("https://auth.example.com/api".to_string())
        );
        assert!(parsed.home_path.is_none());
        assert_eq!(parsed.form_policy().min_password_length, 5);
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let json = "{}";
        let parsed: AuthClientConfig = serde_json::from_str(json).unwrap();
        assert!(parsed.api_base_url.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"home_path": "/inbox", "unknown_field": "value"}"#;
        let parsed: AuthClientConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.home_path, Some("/inbox".to_string()));
    }

    #[test]
    fn test_config_path_returns_option() {
        // Just test that the function doesn't panic
        let _path = AuthClientConfig::config_path();
    }

    #[test]
    fn test_load_returns_default_when_no_file() {
        let result = AuthClientConfig::load();
        assert!(result.is_ok());
    }

    #[test]
    fn test_config_clone() {
        let config = AuthClientConfig {
            home_path: Some("/inbox".to_string()),
            ..Default::default()
        };
        let cloned = config.clone();
        assert_eq!(config.home_path, cloned.home_path);
    }
}
