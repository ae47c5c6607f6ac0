//! Board resource model.

use serde::{Deserialize, Serialize};

use super::user::User;

/// A board: a named collection of pins owned by a user.
///
/// Board identifiers are opaque strings and may exceed the 32-bit integer
/// range; they are never narrowed to a fixed-width numeric type.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Board {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub creator: Option<User>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub counts: Option<BoardCounts>,
    /// Cover image renditions, keyed by size.
    #[serde(default)]
    pub image: Option<serde_json::Value>,
    #[serde(default)]
    pub privacy: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Aggregate counts attached to a board.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoardCounts {
    #[serde(default)]
    pub pins: Option<i64>,
    #[serde(default)]
    pub collaborators: Option<i64>,
    #[serde(default)]
    pub followers: Option<i64>,
}

impl Board {
    /// Requestable field names for boards.
    pub const FIELDS: &'static [&'static str] = &[
        "id",
        "name",
        "description",
        "creator",
        "created_at",
        "counts",
        "image",
        "privacy",
        "url",
    ];

    /// The narrow projection used by interest listings.
    pub const INTEREST_FIELDS: &'static [&'static str] = &["id", "name"];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_board_with_creator() {
        let json = r#"{"id":"5","name":"recipes","creator":{"id":"9","username":"alice"}}"#;
        let board: Board = serde_json::from_str(json).unwrap();
        assert_eq!(board.id.as_deref(), Some("5"));
        assert_eq!(
            board.creator.as_ref().unwrap().username.as_deref(),
            Some("alice")
        );
    }

    #[test]
    fn test_interest_projection_is_subset() {
        for field in Board::INTEREST_FIELDS {
            assert!(Board::FIELDS.contains(field));
        }
    }
}
