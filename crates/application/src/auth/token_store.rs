//! Dual-scope credential storage.
//!
//! Credentials live in exactly one of two scopes: durable (survives
//! restarts, selected by "remember me") or session (process lifetime).
//! Writing to one scope purges the same keys from the other, so a stale
//! copy can never shadow the live one.

use std::sync::Arc;

use fieldlink_domain::{CredentialPair, StorageScope, UserProfile};

use crate::ports::CredentialStorage;

const ACCESS_TOKEN_KEY: &str = "access_token";
const REFRESH_TOKEN_KEY: &str = "refresh_token";
const USER_KEY: &str = "user";
const CREDENTIAL_KEYS: [&str; 3] = [ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, USER_KEY];

/// Store for the credential pair, split across two storage scopes.
///
/// Reads check the durable scope first, then the session scope.
#[derive(Clone)]
pub struct TokenStore {
    durable: Arc<dyn CredentialStorage>,
    session: Arc<dyn CredentialStorage>,
}

impl TokenStore {
    /// Creates a store over the two scope backends.
    pub fn new(durable: Arc<dyn CredentialStorage>, session: Arc<dyn CredentialStorage>) -> Self {
        Self { durable, session }
    }

    fn backend(&self, scope: StorageScope) -> &dyn CredentialStorage {
        match scope {
            StorageScope::Durable => self.durable.as_ref(),
            StorageScope::Session => self.session.as_ref(),
        }
    }

    fn read(&self, key: &str) -> Option<String> {
        self.durable.get(key).or_else(|| self.session.get(key))
    }

    /// Stores a credential pair in the scope selected by `remember`,
    /// purging the same keys from the other scope first.
    pub fn set_auth(&self, pair: &CredentialPair, remember: bool) {
        let scope = StorageScope::from_remember(remember);
        let keep = self.backend(scope);
        let purge = self.backend(scope.other());

        for key in CREDENTIAL_KEYS {
            purge.remove(key);
        }

        keep.set(ACCESS_TOKEN_KEY, &pair.access_token);
        if let Some(refresh_token) = &pair.refresh_token {
            keep.set(REFRESH_TOKEN_KEY, refresh_token);
        }
        if let Some(user) = &pair.user {
            if let Ok(json) = serde_json::to_string(user) {
                keep.set(USER_KEY, &json);
            }
        }
    }

    /// The stored access token, if any.
    #[must_use]
    pub fn access_token(&self) -> Option<String> {
        self.read(ACCESS_TOKEN_KEY)
    }

    /// The stored refresh token, if any.
    #[must_use]
    pub fn refresh_token(&self) -> Option<String> {
        self.read(REFRESH_TOKEN_KEY)
    }

    /// The stored user record, if any.
    #[must_use]
    pub fn user(&self) -> Option<UserProfile> {
        self.read(USER_KEY)
            .and_then(|json| serde_json::from_str(&json).ok())
    }

    /// The scope currently holding a refresh token, if any.
    #[must_use]
    pub fn refresh_scope(&self) -> Option<StorageScope> {
        if self.durable.get(REFRESH_TOKEN_KEY).is_some() {
            Some(StorageScope::Durable)
        } else if self.session.get(REFRESH_TOKEN_KEY).is_some() {
            Some(StorageScope::Session)
        } else {
            None
        }
    }

    /// Writes a freshly refreshed access token into whichever scope holds
    /// the refresh token, falling back to the session scope.
    ///
    /// Only reachable after a successful refresh exchange, which requires
    /// a stored refresh token, so the fallback never orphans a token in
    /// practice.
    pub fn store_refreshed_access_token(&self, access_token: &str) {
        let scope = self.refresh_scope().unwrap_or(StorageScope::Session);
        self.backend(scope).set(ACCESS_TOKEN_KEY, access_token);
    }

    /// Purges all credentials from both scopes. Idempotent.
    pub fn clear_auth(&self) {
        for key in CREDENTIAL_KEYS {
            self.durable.remove(key);
            self.session.remove(key);
        }
    }
}

impl std::fmt::Debug for TokenStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenStore")
            .field("has_access_token", &self.access_token().is_some())
            .field("refresh_scope", &self.refresh_scope())
            .finish()
    }
}
