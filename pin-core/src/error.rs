//! Global error types for the pinboard client.
//!
//! All error categories across the workspace are unified into a single
//! `Error` enum with conversions from underlying library errors.

use thiserror::Error;

/// Convenience type alias for Results using the pinboard Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type covering all error categories in the pinboard client.
#[derive(Error, Debug)]
pub enum Error {
    // -- Caller errors --
    /// A required argument was empty or a call precondition was violated.
    /// Raised before any network activity; always recoverable by the caller.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    // -- Network errors --
    /// HTTP request failed at the transport level.
    #[error("http error: {0}")]
    Http(String),

    /// HTTP request timed out.
    #[error("request timeout: {0}")]
    Timeout(String),

    /// The server classified the response as rate-limited. Carries the
    /// envelope content (status, raw body, Retry-After hint) for inspection.
    /// Never retried automatically.
    #[error("rate limit reached (status {status})")]
    RateLimited {
        /// HTTP status code (usually 429).
        status: u16,
        /// Retry hint from the `Retry-After` header, in seconds.
        retry_after: Option<u64>,
        /// Raw response body.
        body: String,
    },

    // -- Mapping errors --
    /// A response body did not match the expected shape for the target
    /// resource or paged list.
    #[error("mapping error: {0}")]
    Mapping(String),

    /// Serialization/deserialization error outside of response mapping.
    #[error("serialization error: {0}")]
    Serialization(String),

    // -- Configuration errors --
    /// Failed to load or parse client configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// A required configuration value is missing.
    #[error("missing configuration: {0}")]
    MissingConfig(String),

    // -- File/IO errors --
    /// File system operation failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    // -- Generic --
    /// Wrapping anyhow errors for interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Config(e.to_string())
    }
}

impl Error {
    /// Whether this error was raised before any network call was made.
    pub fn is_pre_network(&self) -> bool {
        matches!(
            self,
            Error::InvalidArgument(_) | Error::Config(_) | Error::MissingConfig(_)
        )
    }

    /// The Retry-After hint in seconds, if this is a rate-limit error.
    pub fn retry_after(&self) -> Option<u64> {
        match self {
            Error::RateLimited { retry_after, .. } => *retry_after,
            _ => None,
        }
    }
}
