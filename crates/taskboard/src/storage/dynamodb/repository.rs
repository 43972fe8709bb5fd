//! DynamoDB repository implementation.
//!
//! Implements `TaskRepository` from `taskboard_core::storage` over the
//! single-table layout: every task lives in the `task` partition, keyed by
//! its id in the sort key.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use aws_sdk_dynamodb::Client;
use chrono::Utc;

use taskboard_core::storage::{RepositoryError, Result, TaskRepository};
use taskboard_core::task::{
    new_task, validate_update, CreateTaskRequest, Task, TaskId, UpdateTaskRequest,
};

use super::client::{connect, StoreConfig};
use super::conversions::{item_to_task, task_to_item};
use super::error::{map_put_item_error, map_query_error, map_update_item_error};
use super::expressions::build_update_expression;
use super::keys;

const ENTITY_TYPE: &str = "Task";

/// DynamoDB-based task repository.
pub struct DynamoDbTaskRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbTaskRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Builds the client from `config` and wraps it.
    pub async fn connect(config: &StoreConfig) -> Self {
        let client = connect(config).await;
        Self::new(client, config.table_name.clone())
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[async_trait]
impl TaskRepository for DynamoDbTaskRepository {
    async fn list_tasks(&self) -> Result<Vec<Task>> {
        let mut tasks = Vec::new();
        let mut start_key = None;

        // A single query page is capped at 1 MB; keep going until the
        // partition is exhausted.
        loop {
            let result = self
                .client
                .query()
                .table_name(&self.table_name)
                .key_condition_expression("#PK = :pk")
                .expression_attribute_names("#PK", keys::PARTITION_KEY)
                .expression_attribute_values(":pk", AttributeValue::S(keys::task_pk()))
                .set_exclusive_start_key(start_key)
                .send()
                .await
                .map_err(map_query_error)?;

            for item in result.items() {
                tasks.push(item_to_task(item)?);
            }

            match result.last_evaluated_key {
                Some(key) if !key.is_empty() => start_key = Some(key),
                _ => break,
            }
        }

        Ok(tasks)
    }

    async fn create_task(&self, request: CreateTaskRequest) -> Result<Task> {
        let task = new_task(request, TaskId::generate(), Utc::now())?;

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(task_to_item(&task)))
            .send()
            .await
            .map_err(map_put_item_error)?;

        Ok(task)
    }

    async fn update_task(&self, request: UpdateTaskRequest) -> Result<Task> {
        validate_update(&request)?;

        let expr = build_update_expression(&request.patch, &Utc::now());

        let result = self
            .client
            .update_item()
            .table_name(&self.table_name)
            .key(keys::PARTITION_KEY, AttributeValue::S(keys::task_pk()))
            .key(keys::SORT_KEY, AttributeValue::S(keys::task_sk(&request.id)))
            .update_expression(expr.update_expression)
            .condition_expression(expr.condition_expression)
            .set_expression_attribute_names(Some(expr.names))
            .set_expression_attribute_values(Some(expr.values))
            .return_values(ReturnValue::AllNew)
            .send()
            .await
            .map_err(|e| map_update_item_error(e, ENTITY_TYPE, request.id.as_str()))?;

        let attributes = result.attributes.ok_or_else(|| {
            RepositoryError::InvalidData(format!(
                "UpdateItem returned no attributes for task {}",
                request.id
            ))
        })?;

        item_to_task(&attributes)
    }
}
