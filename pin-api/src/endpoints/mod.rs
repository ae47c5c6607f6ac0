//! API endpoint modules organized by resource.
//!
//! Each module provides thin typed methods for a group of related endpoints.
//! Required string identifiers are validated before any transport call.

pub mod boards;
pub mod pins;
pub mod users;

use pin_core::error::{Error, Result};

/// Reject empty or blank required identifiers before any network activity.
pub(crate) fn require(value: &str, what: &str) -> Result<()> {
    if value.trim().is_empty() {
        Err(Error::InvalidArgument(format!("{what} must not be empty")))
    } else {
        Ok(())
    }
}
