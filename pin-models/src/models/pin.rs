//! Pin resource model.

use serde::{Deserialize, Serialize};

use super::board::Board;
use super::user::User;

/// A pin: an image saved to a board with a note and optional source link.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Pin {
    #[serde(default)]
    pub id: Option<String>,
    /// Source link the pin points at.
    #[serde(default)]
    pub link: Option<String>,
    /// Canonical URL of the pin itself.
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub creator: Option<User>,
    #[serde(default)]
    pub board: Option<Board>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
    /// Dominant color as a hex string.
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub counts: Option<PinCounts>,
    #[serde(default)]
    pub media: Option<serde_json::Value>,
    #[serde(default)]
    pub attribution: Option<serde_json::Value>,
    /// Image renditions, keyed by size.
    #[serde(default)]
    pub image: Option<serde_json::Value>,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
}

/// Aggregate counts attached to a pin.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PinCounts {
    #[serde(default)]
    pub likes: Option<i64>,
    #[serde(default)]
    pub comments: Option<i64>,
    #[serde(default)]
    pub repins: Option<i64>,
}

impl Pin {
    /// Requestable field names for pins.
    pub const FIELDS: &'static [&'static str] = &[
        "id",
        "link",
        "url",
        "creator",
        "board",
        "created_at",
        "note",
        "color",
        "counts",
        "media",
        "attribution",
        "image",
        "metadata",
    ];
}
