//! Credential pair and storage scope types

use serde::{Deserialize, Serialize};

use crate::model::UserProfile;

/// A credential pair produced by a successful login or refresh exchange.
///
/// The access token is short-lived and authorizes individual requests;
/// the refresh token, when present, is longer-lived and authorizes
/// obtaining a new access token. An access token only ever comes out of
/// a login or refresh response, never synthesized locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialPair {
    /// Short-lived credential attached to outbound requests.
    pub access_token: String,
    /// Longer-lived credential used only to obtain new access tokens.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    /// The authenticated user record, when the server includes one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserProfile>,
}

impl CredentialPair {
    /// Creates a pair holding only an access token.
    #[must_use]
    pub fn access_only(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: None,
            user: None,
        }
    }

    /// Returns true if a refresh token is present.
    #[must_use]
    pub const fn can_refresh(&self) -> bool {
        self.refresh_token.is_some()
    }
}

/// Storage lifetime for credentials, selected by a "remember me" choice.
///
/// Credentials live in exactly one scope at any time; writing to one
/// scope purges the same keys from the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageScope {
    /// Survives application restarts.
    Durable,
    /// Cleared when the session ends.
    Session,
}

impl StorageScope {
    /// The opposite scope.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Durable => Self::Session,
            Self::Session => Self::Durable,
        }
    }

    /// Scope selected by a "remember me" flag at login.
    #[must_use]
    pub const fn from_remember(remember: bool) -> Self {
        if remember { Self::Durable } else { Self::Session }
    }
}
