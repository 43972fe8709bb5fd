//! DynamoDB storage backend.
//!
//! Item encoding, key layout and expression building are pure and tested in
//! isolation; `repository` is the only part that talks to the service.

mod client;
mod conversions;
mod error;
mod expressions;
mod item;
mod keys;
mod repository;

pub use client::{connect, StaticCredentials, StoreConfig, LOCAL_ENDPOINT, LOCAL_REGION};
pub use conversions::{item_to_task, task_to_item};
pub use expressions::{build_update_expression, UpdateExpression};
pub use item::{
    format_datetime, get_datetime, get_number, get_optional_string, get_parsed, get_string, Item,
    ItemBuilder,
};
pub use keys::{task_pk, task_sk, PARTITION_KEY, SORT_KEY, TASK_PARTITION};
pub use repository::DynamoDbTaskRepository;
