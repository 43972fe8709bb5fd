//! In-memory storage backend.
//!
//! Used by router tests and for running the server without a store.

mod repository;

pub use repository::InMemoryTaskRepository;
