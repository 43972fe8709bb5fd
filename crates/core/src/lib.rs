//! Core domain for the taskboard task tracker.
//!
//! Pure data types, validation and repository contracts. Nothing in this
//! crate performs I/O; storage backends live in the `taskboard` crate.

pub mod storage;
pub mod task;
