//! FieldLink Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports defined in
//! the application layer: a reqwest-based HTTP transport and the two
//! credential storage backends.

pub mod adapters;
pub mod storage;

pub use adapters::ReqwestTransport;
pub use storage::{FileStorage, MemoryStorage, StorageError};
