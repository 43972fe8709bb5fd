//! Task tracking API over a single-table DynamoDB store.
//!
//! The domain types and the `TaskRepository` contract live in
//! `taskboard_core`; this crate provides the storage backends and the HTTP
//! surface on top of them.

pub mod app;
pub mod config;
pub mod handlers;
pub mod state;
pub mod storage;
