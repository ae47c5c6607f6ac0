//! Domain object definitions.
//!
//! `ResourceKind` is the explicit tag used wherever the element type of a
//! collection must be known at runtime (paged lists, response mapping);
//! `Resource` is the matching tagged union over the three concrete kinds.

pub mod board;
pub mod pin;
pub mod user;

use serde::{Deserialize, Serialize};

use pin_core::error::{Error, Result};

use board::Board;
use pin::Pin;
use user::User;

/// The three resource kinds exposed by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    User,
    Board,
    Pin,
}

impl ResourceKind {
    /// The full set of requestable field names for this kind.
    pub fn default_fields(&self) -> &'static [&'static str] {
        match self {
            ResourceKind::User => User::FIELDS,
            ResourceKind::Board => Board::FIELDS,
            ResourceKind::Pin => Pin::FIELDS,
        }
    }

    /// Lowercase singular name, as used in log messages.
    pub fn name(&self) -> &'static str {
        match self {
            ResourceKind::User => "user",
            ResourceKind::Board => "board",
            ResourceKind::Pin => "pin",
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A single domain object of any kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Resource {
    User(User),
    Board(Board),
    Pin(Pin),
}

impl Resource {
    /// Deserialize a JSON record into the given kind.
    ///
    /// Declared fields absent from the record stay `None`; undeclared keys
    /// in the record are ignored. Fails with a mapping error when the value
    /// is not an object of the expected shape.
    pub fn from_value(kind: ResourceKind, value: serde_json::Value) -> Result<Self> {
        if !value.is_object() {
            return Err(Error::Mapping(format!(
                "expected a JSON object for {kind}, got {}",
                json_type_name(&value)
            )));
        }
        let resource = match kind {
            ResourceKind::User => Resource::User(
                serde_json::from_value(value)
                    .map_err(|e| Error::Mapping(format!("malformed user record: {e}")))?,
            ),
            ResourceKind::Board => Resource::Board(
                serde_json::from_value(value)
                    .map_err(|e| Error::Mapping(format!("malformed board record: {e}")))?,
            ),
            ResourceKind::Pin => Resource::Pin(
                serde_json::from_value(value)
                    .map_err(|e| Error::Mapping(format!("malformed pin record: {e}")))?,
            ),
        };
        Ok(resource)
    }

    /// The kind tag of this resource.
    pub fn kind(&self) -> ResourceKind {
        match self {
            Resource::User(_) => ResourceKind::User,
            Resource::Board(_) => ResourceKind::Board,
            Resource::Pin(_) => ResourceKind::Pin,
        }
    }

    /// The server-assigned identifier, when populated.
    pub fn id(&self) -> Option<&str> {
        match self {
            Resource::User(u) => u.id.as_deref(),
            Resource::Board(b) => b.id.as_deref(),
            Resource::Pin(p) => p.id.as_deref(),
        }
    }

    /// Borrow as a User, if this resource is one.
    pub fn as_user(&self) -> Option<&User> {
        match self {
            Resource::User(u) => Some(u),
            _ => None,
        }
    }

    /// Borrow as a Board, if this resource is one.
    pub fn as_board(&self) -> Option<&Board> {
        match self {
            Resource::Board(b) => Some(b),
            _ => None,
        }
    }

    /// Borrow as a Pin, if this resource is one.
    pub fn as_pin(&self) -> Option<&Pin> {
        match self {
            Resource::Pin(p) => Some(p),
            _ => None,
        }
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
