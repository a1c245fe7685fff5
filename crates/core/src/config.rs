//! Static application configuration.
//!
//! The table is built once by [`AppConfig::default`] and handed to whoever needs
//! it. Nothing here is loaded from disk and none of the endpoints are contacted;
//! the values exist for display only.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown environment: {0}. Valid environments: development, staging, production")]
    UnknownEnvironment(String),
}

/// Deployment environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Staging,
    Production,
}

impl Environment {
    pub const ALL: [Environment; 3] = [
        Environment::Development,
        Environment::Staging,
        Environment::Production,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "development" => Ok(Environment::Development),
            "staging" => Ok(Environment::Staging),
            "production" => Ok(Environment::Production),
            _ => Err(ConfigError::UnknownEnvironment(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppInfo {
    pub name: String,
    pub version: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    pub debug_mode: bool,
    pub log_level: String,
    /// Seconds
    pub default_timeout: u64,
    pub max_retries: u32,
    pub buffer_size: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub name: String,
    /// Seconds
    pub timeout: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebhookInfo {
    pub supported_events: Vec<String>,
    pub endpoint: String,
    pub content_type: String,
}

/// The complete configuration table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppConfig {
    pub app: AppInfo,
    pub settings: Settings,
    pub default_environment: Environment,
    pub api_endpoints: BTreeMap<Environment, String>,
    pub features: BTreeMap<String, bool>,
    pub database: DatabaseConfig,
    pub webhook: WebhookInfo,
}

impl Default for AppConfig {
    fn default() -> Self {
        let api_endpoints = BTreeMap::from([
            (
                Environment::Development,
                "https://dev-api.example.com".to_string(),
            ),
            (
                Environment::Staging,
                "https://staging-api.example.com".to_string(),
            ),
            (
                Environment::Production,
                "https://api.example.com".to_string(),
            ),
        ]);

        let features = [
            ("user_authentication", true),
            ("data_validation", true),
            ("advanced_logging", false),
            ("experimental_features", false),
        ]
        .into_iter()
        .map(|(name, enabled)| (name.to_string(), enabled))
        .collect();

        Self {
            app: AppInfo {
                name: "GitHub Webhook Test Application".to_string(),
                version: "1.0.0".to_string(),
                description: "Sample application for testing GitHub webhooks".to_string(),
            },
            settings: Settings {
                debug_mode: true,
                log_level: "INFO".to_string(),
                default_timeout: 30,
                max_retries: 3,
                buffer_size: 1024,
            },
            default_environment: Environment::Development,
            api_endpoints,
            features,
            database: DatabaseConfig {
                host: "localhost".to_string(),
                port: 5432,
                name: "webhook_test_db".to_string(),
                timeout: 30,
            },
            webhook: WebhookInfo {
                supported_events: vec![
                    "push".to_string(),
                    "pull_request".to_string(),
                    "merge".to_string(),
                ],
                endpoint: "https://your-webhook-endpoint.ngrok.io/webhook".to_string(),
                content_type: "application/json".to_string(),
            },
        }
    }
}

impl AppConfig {
    pub fn api_endpoint(&self, env: Environment) -> Option<&str> {
        self.api_endpoints.get(&env).map(String::as_str)
    }

    /// Unknown feature names are treated as disabled.
    pub fn feature_enabled(&self, name: &str) -> bool {
        self.features.get(name).copied().unwrap_or(false)
    }

    pub fn supports_event(&self, event: &str) -> bool {
        self.webhook.supported_events.iter().any(|e| e == event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_constants() {
        let config = AppConfig::default();
        assert_eq!(config.app.name, "GitHub Webhook Test Application");
        assert_eq!(config.app.version, "1.0.0");
        assert_eq!(
            config.app.description,
            "Sample application for testing GitHub webhooks"
        );
    }

    #[test]
    fn test_settings() {
        let settings = AppConfig::default().settings;
        assert!(settings.debug_mode);
        assert_eq!(settings.log_level, "INFO");
        assert_eq!(settings.default_timeout, 30);
        assert_eq!(settings.max_retries, 3);
        assert_eq!(settings.buffer_size, 1024);
    }

    #[test]
    fn test_features() {
        let config = AppConfig::default();
        assert_eq!(config.features.len(), 4);
        assert!(config.feature_enabled("user_authentication"));
        assert!(config.feature_enabled("data_validation"));
        assert!(!config.feature_enabled("advanced_logging"));
        assert!(!config.feature_enabled("experimental_features"));
        assert!(!config.feature_enabled("does_not_exist"));
    }

    #[test]
    fn test_api_endpoints_cover_every_environment() {
        let config = AppConfig::default();
        for env in Environment::ALL {
            assert!(config.api_endpoint(env).is_some(), "missing endpoint for {env}");
        }
        assert_eq!(
            config.api_endpoint(Environment::Staging),
            Some("https://staging-api.example.com")
        );
        assert_eq!(config.default_environment, Environment::Development);
    }

    #[test]
    fn test_supported_events() {
        let config = AppConfig::default();
        assert!(config.supports_event("push"));
        assert!(config.supports_event("pull_request"));
        assert!(config.supports_event("merge"));
        assert!(!config.supports_event("release"));
    }

    #[test]
    fn test_database() {
        let db = AppConfig::default().database;
        assert_eq!(db.host, "localhost");
        assert_eq!(db.port, 5432);
        assert_eq!(db.name, "webhook_test_db");
    }

    #[test]
    fn test_environment_parse_and_display() {
        assert_eq!("staging".parse::<Environment>(), Ok(Environment::Staging));
        assert_eq!(" Production ".parse::<Environment>(), Ok(Environment::Production));
        assert_eq!(Environment::Development.to_string(), "development");
        assert_eq!(
            "qa".parse::<Environment>(),
            Err(ConfigError::UnknownEnvironment("qa".to_string()))
        );
    }

    #[test]
    fn test_config_serializes_environment_keys_lowercase() {
        let value = serde_json::to_value(AppConfig::default()).unwrap();
        assert_eq!(
            value["api_endpoints"]["production"],
            "https://api.example.com"
        );
        assert_eq!(value["default_environment"], "development");
        assert_eq!(value["features"]["advanced_logging"], false);
    }
}
