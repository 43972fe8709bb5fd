//! DynamoDB client setup.
//!
//! The process builds exactly one SDK client at startup and hands clones of it
//! to whatever needs the store.

use std::fmt;

use aws_config::{BehaviorVersion, Region};
use aws_sdk_dynamodb::config::Credentials;
use aws_sdk_dynamodb::Client;

/// Endpoint used when running against DynamoDB Local.
pub const LOCAL_ENDPOINT: &str = "http://localhost:8000";

/// Region reported to DynamoDB Local.
pub const LOCAL_REGION: &str = "local";

/// Explicit key pair, used instead of the default provider chain.
#[derive(Clone, PartialEq, Eq)]
pub struct StaticCredentials {
    pub access_key_id: String,
    pub secret_access_key: String,
}

impl fmt::Debug for StaticCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticCredentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"<redacted>")
            .finish()
    }
}

/// Everything needed to reach the task table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub table_name: String,
    pub region: String,
    /// Custom endpoint URL (for local DynamoDB).
    pub endpoint_url: Option<String>,
    /// `None` falls back to the SDK's default credential chain.
    pub credentials: Option<StaticCredentials>,
}

impl StoreConfig {
    /// Returns a display string for the target environment.
    pub fn target_display(&self) -> String {
        match &self.endpoint_url {
            Some(url) => format!("Local DynamoDB ({}, table: {})", url, self.table_name),
            None => format!(
                "AWS DynamoDB (region: {}, table: {})",
                self.region, self.table_name
            ),
        }
    }
}

/// Creates a DynamoDB client with the given configuration.
pub async fn connect(config: &StoreConfig) -> Client {
    let mut loader = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(config.region.clone()));

    if let Some(endpoint) = &config.endpoint_url {
        loader = loader.endpoint_url(endpoint);
    }

    if let Some(creds) = &config.credentials {
        loader = loader.credentials_provider(Credentials::new(
            creds.access_key_id.clone(),
            creds.secret_access_key.clone(),
            None,
            None,
            "taskboard-static",
        ));
    }

    let sdk_config = loader.load().await;
    Client::new(&sdk_config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(endpoint_url: Option<&str>) -> StoreConfig {
        StoreConfig {
            table_name: "Task".to_string(),
            region: "us-east-1".to_string(),
            endpoint_url: endpoint_url.map(str::to_string),
            credentials: None,
        }
    }

    #[test]
    fn test_target_display() {
        assert_eq!(
            config(None).target_display(),
            "AWS DynamoDB (region: us-east-1, table: Task)"
        );
        assert_eq!(
            config(Some(LOCAL_ENDPOINT)).target_display(),
            "Local DynamoDB (http://localhost:8000, table: Task)"
        );
    }

    #[test]
    fn test_debug_redacts_secret() {
        let creds = StaticCredentials {
            access_key_id: "AKIDLOCAL".to_string(),
            secret_access_key: "super-secret".to_string(),
        };
        let output = format!("{creds:?}");

        assert!(output.contains("AKIDLOCAL"));
        assert!(!output.contains("super-secret"));
    }

    #[tokio::test]
    async fn test_connect_uses_configured_region() {
        let client = connect(&config(Some(LOCAL_ENDPOINT))).await;

        assert_eq!(
            client.config().region().map(|r| r.as_ref()),
            Some("us-east-1")
        );
    }
}
