//! Storage backend implementations.
//!
//! Concrete implementations of `taskboard_core::storage::TaskRepository`.
//! The backend is picked at startup (`--storage`), not at compile time.

pub mod dynamodb;
pub mod inmemory;

pub use dynamodb::DynamoDbTaskRepository;
pub use inmemory::InMemoryTaskRepository;
