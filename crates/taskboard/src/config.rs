use std::{env, time::Duration};

use clap::ValueEnum;

use crate::storage::dynamodb::{StaticCredentials, StoreConfig, LOCAL_ENDPOINT, LOCAL_REGION};

/// Which `TaskRepository` implementation backs the server.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum StorageBackend {
    #[default]
    Dynamodb,
    Inmemory,
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// DynamoDB table holding tasks (default: "Task")
    pub table_name: String,
    /// AWS region (default: "us-east-1")
    pub region: String,
    /// Custom DynamoDB endpoint
    pub endpoint_url: Option<String>,
    /// Static access key id, used in local mode
    pub access_key_id: Option<String>,
    /// Static secret access key, used in local mode
    pub secret_access_key: Option<String>,
    /// Per-request timeout in seconds (default: 10)
    pub request_timeout_seconds: u64,
    /// Emit logs as JSON lines
    pub log_json: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `TASK_TABLE_NAME` - Table name (default: "Task")
    /// - `AWS_REGION` - Region (default: "us-east-1")
    /// - `AWS_ENDPOINT_URL` - Custom endpoint (default: none)
    /// - `ACCESS_KEY_ID` / `SECRET_ACCESS_KEY` - Local-mode credentials
    /// - `REQUEST_TIMEOUT_SECONDS` - Request timeout (default: 10)
    /// - `LOG_FORMAT` - `json` for JSON logs (default: human readable)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            table_name: lookup("TASK_TABLE_NAME").unwrap_or_else(|| "Task".to_string()),
            region: lookup("AWS_REGION").unwrap_or_else(|| "us-east-1".to_string()),
            endpoint_url: lookup("AWS_ENDPOINT_URL").filter(|v| !v.is_empty()),
            access_key_id: lookup("ACCESS_KEY_ID"),
            secret_access_key: lookup("SECRET_ACCESS_KEY"),
            request_timeout_seconds: lookup("REQUEST_TIMEOUT_SECONDS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            log_json: lookup("LOG_FORMAT").is_some_and(|v| v.eq_ignore_ascii_case("json")),
        }
    }

    /// Get the request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }

    /// Resolve the store settings.
    ///
    /// Local mode targets DynamoDB Local: the endpoint defaults to
    /// `http://localhost:8000`, the region is `local`, and the static key
    /// pair replaces the default credential chain.
    pub fn store_config(&self, local: bool) -> StoreConfig {
        if !local {
            return StoreConfig {
                table_name: self.table_name.clone(),
                region: self.region.clone(),
                endpoint_url: self.endpoint_url.clone(),
                credentials: None,
            };
        }

        StoreConfig {
            table_name: self.table_name.clone(),
            region: LOCAL_REGION.to_string(),
            endpoint_url: Some(
                self.endpoint_url
                    .clone()
                    .unwrap_or_else(|| LOCAL_ENDPOINT.to_string()),
            ),
            credentials: Some(StaticCredentials {
                access_key_id: self.access_key_id.clone().unwrap_or_default(),
                secret_access_key: self.secret_access_key.clone().unwrap_or_default(),
            }),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_default_values() {
        let config = config_from(&[]);

        assert_eq!(config.table_name, "Task");
        assert_eq!(config.region, "us-east-1");
        assert_eq!(config.endpoint_url, None);
        assert_eq!(config.request_timeout_seconds, 10);
        assert!(!config.log_json);
    }

    #[test]
    fn test_values_from_environment() {
        let config = config_from(&[
            ("TASK_TABLE_NAME", "Tasks-prod"),
            ("AWS_REGION", "eu-west-1"),
            ("REQUEST_TIMEOUT_SECONDS", "30"),
            ("LOG_FORMAT", "JSON"),
        ]);

        assert_eq!(config.table_name, "Tasks-prod");
        assert_eq!(config.region, "eu-west-1");
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert!(config.log_json);
    }

    #[test]
    fn test_unparseable_timeout_falls_back() {
        let config = config_from(&[("REQUEST_TIMEOUT_SECONDS", "soon")]);
        assert_eq!(config.request_timeout_seconds, 10);
    }

    #[test]
    fn test_remote_store_config_uses_default_chain() {
        let config = config_from(&[("ACCESS_KEY_ID", "ignored")]);
        let store = config.store_config(false);

        assert_eq!(store.region, "us-east-1");
        assert_eq!(store.endpoint_url, None);
        assert_eq!(store.credentials, None);
    }

    #[test]
    fn test_local_store_config() {
        let config = config_from(&[("ACCESS_KEY_ID", "local"), ("SECRET_ACCESS_KEY", "secret")]);
        let store = config.store_config(true);

        assert_eq!(store.table_name, "Task");
        assert_eq!(store.region, "local");
        assert_eq!(store.endpoint_url.as_deref(), Some("http://localhost:8000"));
        assert_eq!(
            store.credentials,
            Some(StaticCredentials {
                access_key_id: "local".to_string(),
                secret_access_key: "secret".to_string(),
            })
        );
    }

    #[test]
    fn test_local_store_config_keeps_explicit_endpoint() {
        let config = config_from(&[("AWS_ENDPOINT_URL", "http://dynamodb:8000")]);
        let store = config.store_config(true);

        assert_eq!(store.endpoint_url.as_deref(), Some("http://dynamodb:8000"));
    }
}
