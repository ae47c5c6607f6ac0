//! Pinboard API - Typed HTTP client for the boards/pins/users REST API.
//!
//! This crate translates typed method calls into authenticated HTTP requests
//! and raw HTTP responses into typed domain objects, including cursor-based
//! pagination. The transport (connection handling, TLS, retry backoff) and
//! the access token are collaborators; this crate shapes data in and out.

pub mod client;
pub mod endpoints;
pub mod mapper;
pub mod paging;
pub mod request;
pub mod response;
pub mod transport;

// Re-export key types
pub use client::ApiClient;
pub use endpoints::pins::PinImage;
pub use paging::PagedList;
pub use request::RequestDescriptor;
pub use response::{ApiResponse, Classification, ResponseResult};
pub use transport::{HttpTransport, RetryConfig, Transport};
