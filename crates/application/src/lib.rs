//! FieldLink Application - Ports and core client logic
//!
//! This crate defines the ports (traits) that adapters implement, the
//! dual-scope token store, the refresh endpoint caller, and the
//! authenticated request client that coalesces concurrent token
//! refreshes into a single network call.

pub mod api;
pub mod auth;
pub mod client;
pub mod ports;

#[cfg(test)]
pub(crate) mod test_support;

pub use auth::{HttpRefresher, RefreshEndpoint, TokenStore};
pub use client::ApiClient;
pub use ports::{CredentialStorage, HttpTransport, TransportError};
