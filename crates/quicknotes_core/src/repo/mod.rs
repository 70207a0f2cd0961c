//! Persistent slot abstractions and implementations.
//!
//! # Responsibility
//! - Define the string key-value contract the stores persist through.
//! - Isolate SQLite query details from store/business orchestration.

pub mod kv_repo;
