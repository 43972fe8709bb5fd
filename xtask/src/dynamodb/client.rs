//! AWS SDK client setup (Imperative Shell).

use aws_sdk_dynamodb::types::{KeyType, TableStatus as SdkTableStatus};
use aws_sdk_dynamodb::Client;
use taskboard::config::Config;
use taskboard::storage::dynamodb::{connect, StoreConfig};

use super::error::{DynamodbError, Result};
use super::planning::{TableState, TableStatus};

/// Resolves the target the same way the server does.
pub fn store_config(local: bool) -> StoreConfig {
    Config::from_env().store_config(local)
}

/// Creates a DynamoDB client for the given target.
pub async fn create_client(config: &StoreConfig) -> Client {
    connect(config).await
}

/// Fetches current table state, returns None if table doesn't exist.
pub async fn get_table_state(client: &Client, table_name: &str) -> Result<Option<TableState>> {
    let response = match client.describe_table().table_name(table_name).send().await {
        Ok(response) => response,
        Err(err) => {
            let not_found = err
                .as_service_error()
                .is_some_and(|e| e.is_resource_not_found_exception());
            if not_found {
                return Ok(None);
            }
            return Err(DynamodbError::AwsSdk(err.to_string()));
        }
    };

    let table = response.table().ok_or_else(|| {
        DynamodbError::AwsSdk(format!("DescribeTable returned no table for '{table_name}'"))
    })?;

    let key_named = |kind: KeyType| {
        table
            .key_schema()
            .iter()
            .find(|k| *k.key_type() == kind)
            .map(|k| k.attribute_name().to_string())
    };

    let status = match table.table_status() {
        Some(SdkTableStatus::Creating) => TableStatus::Creating,
        Some(SdkTableStatus::Updating) => TableStatus::Updating,
        Some(SdkTableStatus::Deleting) => TableStatus::Deleting,
        _ => TableStatus::Active,
    };

    Ok(Some(TableState {
        status,
        partition_key: key_named(KeyType::Hash),
        sort_key: key_named(KeyType::Range),
    }))
}
