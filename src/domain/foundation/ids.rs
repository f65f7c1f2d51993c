//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Maximum accepted length of a caller-supplied user id.
pub const MAX_USER_ID_LENGTH: usize = 256;

/// Identifier of the person a conversation belongs to.
///
/// User ids come from the calling application and are opaque strings;
/// surrounding whitespace is trimmed and blank ids are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Creates a new UserId, returning error if blank or too long.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("userId"));
        }
        if trimmed.chars().count() > MAX_USER_ID_LENGTH {
            return Err(ValidationError::invalid_format(
                "userId",
                format!("must be at most {} characters", MAX_USER_ID_LENGTH),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for UserId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_id_trims_whitespace() {
        let id = UserId::new("  user-42 ").unwrap();
        assert_eq!(id.as_str(), "user-42");
    }

    #[test]
    fn user_id_rejects_blank() {
        assert!(matches!(
            UserId::new("   "),
            Err(ValidationError::EmptyField { .. })
        ));
    }

    #[test]
    fn user_id_rejects_overlong_values() {
        let long = "x".repeat(MAX_USER_ID_LENGTH + 1);
        assert!(matches!(
            UserId::new(long),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn user_id_deserializes_with_validation() {
        let id: UserId = serde_json::from_str("\"abc\"").unwrap();
        assert_eq!(id.to_string(), "abc");

        assert!(serde_json::from_str::<UserId>("\"\"").is_err());
    }
}
