//! Credential storage backends.
//!
//! Two implementations of the `CredentialStorage` port: an in-memory
//! map for the session scope and a JSON file for the durable scope.

mod file;
mod memory;

pub use file::{FileStorage, StorageError};
pub use memory::MemoryStorage;
