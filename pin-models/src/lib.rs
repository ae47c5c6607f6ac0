//! Pinboard Models - Typed domain objects for the boards/pins/users API.
//!
//! Each resource kind declares the fixed set of field names that can be
//! requested from the server, and deserializes leniently: absent JSON keys
//! map to `None`, unknown keys are ignored.

pub mod models;

pub use models::board::Board;
pub use models::pin::Pin;
pub use models::user::User;
pub use models::{Resource, ResourceKind};
