//! Credential storage port

/// Port for a flat string key/value store holding credentials.
///
/// Two instances back the token store's two scopes: one durable
/// (survives restarts) and one session-scoped (process lifetime).
/// Implementations must tolerate repeated removes of absent keys.
pub trait CredentialStorage: Send + Sync {
    /// Reads the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Writes `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str);

    /// Removes `key`. A no-op when the key is absent.
    fn remove(&self, key: &str);
}
