//! Authentication module for the FieldLink client.
//!
//! This module provides:
//! - The dual-scope token store (durable vs session credentials)
//! - The refresh endpoint caller that exchanges a refresh token for a
//!   new access token

mod refresher;
mod token_store;

pub use refresher::{HttpRefresher, RefreshEndpoint};
pub use token_store::TokenStore;
