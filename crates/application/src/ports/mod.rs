//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the application core and external
//! systems. Each port is a trait that can be implemented by adapters in
//! the infrastructure layer, or by test doubles.

mod credential_storage;
mod http_transport;

pub use credential_storage::CredentialStorage;
pub use http_transport::{HttpTransport, TransportError};
