//! Engineer profile model

use serde::{Deserialize, Serialize};

/// A field-service engineer's profile record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Server-assigned identifier, e.g. `ENG001`.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Contact email; also the login identifier.
    pub email: String,
    /// Contact phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Department the engineer belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    /// Areas of expertise.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub specializations: Vec<String>,
    /// Held certifications.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub certifications: Vec<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_minimal_profile_deserializes() {
        let json = r#"{"id":"ENG001","name":"John Smith","email":"john@example.com"}"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.id, "ENG001");
        assert!(profile.phone.is_none());
        assert!(profile.specializations.is_empty());
    }
}
