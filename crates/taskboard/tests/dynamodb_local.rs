//! Integration tests against DynamoDB Local.
//!
//! Ignored by default. Start a local store and run:
//!
//! ```bash
//! docker run -p 8000:8000 amazon/dynamodb-local
//! ACCESS_KEY_ID=local SECRET_ACCESS_KEY=local cargo test -p taskboard -- --ignored
//! ```
//!
//! Each test works against its own freshly created table.

use std::time::Duration;

use aws_sdk_dynamodb::types::{
    AttributeDefinition, BillingMode, KeySchemaElement, KeyType, ScalarAttributeType,
};
use aws_sdk_dynamodb::Client;
use taskboard_core::storage::{RepositoryError, TaskRepository};
use taskboard_core::task::{
    CreateTaskRequest, TaskId, TaskPatch, TaskPriority, TaskStatus, UpdateTaskRequest,
};

use taskboard::config::Config;
use taskboard::storage::dynamodb::{connect, task_to_item, StoreConfig};
use taskboard::storage::DynamoDbTaskRepository;

fn store_config() -> StoreConfig {
    let mut store = Config::from_env().store_config(true);
    store.table_name = format!("Task-{}", TaskId::generate());
    store
}

async fn create_table(client: &Client, table_name: &str) {
    let result = client
        .create_table()
        .table_name(table_name)
        .attribute_definitions(
            AttributeDefinition::builder()
                .attribute_name("pk")
                .attribute_type(ScalarAttributeType::S)
                .build()
                .unwrap(),
        )
        .attribute_definitions(
            AttributeDefinition::builder()
                .attribute_name("sk")
                .attribute_type(ScalarAttributeType::S)
                .build()
                .unwrap(),
        )
        .key_schema(
            KeySchemaElement::builder()
                .attribute_name("pk")
                .key_type(KeyType::Hash)
                .build()
                .unwrap(),
        )
        .key_schema(
            KeySchemaElement::builder()
                .attribute_name("sk")
                .key_type(KeyType::Range)
                .build()
                .unwrap(),
        )
        .billing_mode(BillingMode::PayPerRequest)
        .send()
        .await;

    if let Err(err) = result {
        let is_in_use = err
            .as_service_error()
            .is_some_and(|e| e.is_resource_in_use_exception());
        assert!(is_in_use, "failed to create table: {err:?}");
    }
}

async fn setup() -> (Client, DynamoDbTaskRepository) {
    let store = store_config();
    let client = connect(&store).await;
    create_table(&client, &store.table_name).await;
    let repo = DynamoDbTaskRepository::new(client.clone(), store.table_name.clone());
    (client, repo)
}

#[tokio::test]
#[ignore]
async fn test_create_then_list() {
    let (_, repo) = setup().await;

    let task = repo
        .create_task(CreateTaskRequest::new("new task"))
        .await
        .unwrap();

    assert_eq!(task.status, TaskStatus::Todo);
    assert_eq!(task.priority, TaskPriority::Low);
    assert_eq!(task.created, task.modified);

    let all = repo.list_tasks().await.unwrap();
    assert_eq!(all, vec![task]);
}

#[tokio::test]
#[ignore]
async fn test_update_title_and_status() {
    let (_, repo) = setup().await;
    let created = repo
        .create_task(CreateTaskRequest::new("x").with_priority(TaskPriority::High))
        .await
        .unwrap();
    tokio::time::sleep(Duration::from_millis(5)).await;

    let renamed = repo
        .update_task(UpdateTaskRequest::new(
            created.id.clone(),
            TaskPatch::new().with_title("y"),
        ))
        .await
        .unwrap();

    assert_eq!(renamed.title, "y");
    assert_eq!(renamed.status, created.status);
    assert_eq!(renamed.priority, TaskPriority::High);
    assert_eq!(renamed.created, created.created);
    assert!(renamed.modified > created.modified);

    let done = repo
        .update_task(UpdateTaskRequest::new(
            created.id.clone(),
            TaskPatch::new().with_status(TaskStatus::Done),
        ))
        .await
        .unwrap();

    assert_eq!(done.title, "y");
    assert_eq!(done.status, TaskStatus::Done);
    assert_eq!(repo.list_tasks().await.unwrap(), vec![done]);
}

#[tokio::test]
#[ignore]
async fn test_update_unknown_id_creates_nothing() {
    let (_, repo) = setup().await;

    let result = repo
        .update_task(UpdateTaskRequest::new(
            "does-not-exist",
            TaskPatch::new().with_title("y"),
        ))
        .await;

    assert_eq!(
        result,
        Err(RepositoryError::NotFound {
            entity_type: "Task",
            id: "does-not-exist".to_string(),
        })
    );
    assert!(repo.list_tasks().await.unwrap().is_empty());
}

#[tokio::test]
#[ignore]
async fn test_list_follows_pagination() {
    let (client, repo) = setup().await;
    let padding = "p".repeat(100_000);

    // ~1.2 MB in the partition forces at least two query pages.
    for _ in 0..12 {
        let task = taskboard_core::task::new_task(
            CreateTaskRequest::new(padding.clone()),
            TaskId::generate(),
            chrono::Utc::now(),
        )
        .unwrap();
        client
            .put_item()
            .table_name(repo.table_name())
            .set_item(Some(task_to_item(&task)))
            .send()
            .await
            .unwrap();
    }

    assert_eq!(repo.list_tasks().await.unwrap().len(), 12);
}
