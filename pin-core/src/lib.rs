//! Pinboard Core - Foundation types, error handling, configuration, and logging.
//!
//! This crate provides the shared foundation used by the other pinboard crates:
//! - Client configuration (API base URL, access token, timeouts)
//! - Unified error type covering all error categories
//! - Structured logging with tracing
//! - Common constants (API version prefix, defaults)

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;

// Re-export commonly used items at the crate root
pub use config::ApiConfig;
pub use error::{Error, Result};
pub use logging::init_logging;
