//! User resource model.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A user account.
///
/// All attributes are optional: the server only returns the fields named in
/// the request's field-selection list, and a fresh instance is populated per
/// response. The identity is the server-assigned `id` string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    /// Creation timestamp as returned by the server
    /// (e.g. "2014-10-06T20:30:00").
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub counts: Option<UserCounts>,
    /// Avatar image renditions, keyed by size.
    #[serde(default)]
    pub image: Option<serde_json::Value>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Aggregate counts attached to a user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserCounts {
    #[serde(default)]
    pub pins: Option<i64>,
    #[serde(default)]
    pub boards: Option<i64>,
    #[serde(default)]
    pub followers: Option<i64>,
    #[serde(default)]
    pub following: Option<i64>,
    #[serde(default)]
    pub likes: Option<i64>,
}

impl User {
    /// Requestable field names for users.
    pub const FIELDS: &'static [&'static str] = &[
        "id",
        "username",
        "first_name",
        "last_name",
        "bio",
        "created_at",
        "counts",
        "image",
        "url",
    ];

    /// Parse `created_at` into a timestamp. The server omits the timezone
    /// suffix, so this parses a naive datetime.
    pub fn created_at_parsed(&self) -> Option<NaiveDateTime> {
        let raw = self.created_at.as_deref()?;
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S").ok()
    }

    /// Display name: "first last" when available, otherwise the username.
    pub fn display_name(&self) -> Option<String> {
        match (self.first_name.as_deref(), self.last_name.as_deref()) {
            (Some(first), Some(last)) => Some(format!("{first} {last}")),
            (Some(first), None) => Some(first.to_string()),
            _ => self.username.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_partial_user() {
        let json = r#"{"id":"424242424242424242","username":"alice"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id.as_deref(), Some("424242424242424242"));
        assert_eq!(user.username.as_deref(), Some("alice"));
        assert!(user.bio.is_none());
    }

    #[test]
    fn test_created_at_parsed() {
        let user = User {
            created_at: Some("2014-10-06T20:30:00".into()),
            ..Default::default()
        };
        let ts = user.created_at_parsed().unwrap();
        assert_eq!(ts.format("%Y-%m-%d").to_string(), "2014-10-06");
    }

    #[test]
    fn test_display_name_fallback() {
        let user = User {
            username: Some("bob".into()),
            ..Default::default()
        };
        assert_eq!(user.display_name().unwrap(), "bob");
    }
}
