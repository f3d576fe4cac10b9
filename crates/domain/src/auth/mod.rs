//! Credential types and storage scopes.

mod types;

pub use types::{CredentialPair, StorageScope};
