//! Execution core.
//!
//! Every public endpoint method funnels through `ApiClient`: build a
//! descriptor, hand it to the transport collaborator, surface rate limiting
//! as an error, and on success run the requested mapping entry point and
//! attach the result to the envelope. There is no retry loop here; transport
//! backoff is the only retry in the system.

use std::sync::Arc;

use tracing::warn;

use pin_core::config::ApiConfig;
use pin_core::error::{Error, Result};
use pin_models::ResourceKind;

use crate::mapper;
use crate::request::RequestDescriptor;
use crate::response::{ApiResponse, ResponseResult};
use crate::transport::{HttpTransport, Transport};

/// Typed client for the boards/pins/users REST API.
///
/// Calls are synchronous-per-invocation: each operation performs at most one
/// outbound request and completes when its envelope is available. The client
/// holds no mutable state across calls and is cheap to clone.
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    /// API version prefix, threaded into continuation-URL reconstruction.
    api_version: String,
}

impl ApiClient {
    /// Create a client backed by the reqwest transport.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        config.validate()?;
        let transport = HttpTransport::new(config)?;
        Ok(Self {
            transport: Arc::new(transport),
            api_version: config.api_version.clone(),
        })
    }

    /// Create a client with an injected transport. Used for tests and for
    /// callers that own their transport stack.
    pub fn with_transport(transport: Arc<dyn Transport>, api_version: &str) -> Self {
        Self {
            transport,
            api_version: api_version.to_string(),
        }
    }

    /// The configured API version prefix.
    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    /// Execute a descriptor with no mapped result.
    ///
    /// Rate-limited responses fail with `Error::RateLimited`; error-classified
    /// responses are returned as-is for the caller to interpret.
    pub async fn execute(&self, descriptor: RequestDescriptor) -> Result<ApiResponse> {
        let envelope = self.transport.execute(&descriptor).await?;
        if envelope.is_rate_limited() {
            warn!(
                "rate limit reached on {} (retry-after: {:?})",
                descriptor.path, envelope.retry_after
            );
            return Err(Error::RateLimited {
                status: envelope.status,
                retry_after: envelope.retry_after,
                body: envelope.body,
            });
        }
        Ok(envelope)
    }

    /// Execute a descriptor and, on success, map the body into one resource
    /// of the given kind, attached as the envelope's result.
    pub async fn execute_for_single(
        &self,
        descriptor: RequestDescriptor,
        kind: ResourceKind,
    ) -> Result<ApiResponse> {
        let mut envelope = self.execute(descriptor).await?;
        if envelope.is_ok() {
            let resource = mapper::to_single(&envelope, kind)?;
            envelope.result = Some(ResponseResult::Single(resource));
        }
        Ok(envelope)
    }

    /// Execute a descriptor and, on success, map the body into a paged list
    /// of the given kind, attached as the envelope's result.
    pub async fn execute_for_list(
        &self,
        descriptor: RequestDescriptor,
        kind: ResourceKind,
    ) -> Result<ApiResponse> {
        let mut envelope = self.execute(descriptor).await?;
        if envelope.is_ok() {
            let list = mapper::to_list(&envelope, kind)?;
            envelope.result = Some(ResponseResult::List(list));
        }
        Ok(envelope)
    }

    /// GET a list endpoint with the kind's default field projection, or a
    /// caller-supplied override when `fields` is non-empty.
    pub(crate) async fn fetch_list(
        &self,
        path: &str,
        kind: ResourceKind,
        fields: &[&str],
    ) -> Result<ApiResponse> {
        let fields = if fields.is_empty() {
            kind.default_fields()
        } else {
            fields
        };
        let descriptor = RequestDescriptor::get(path).with_fields(fields);
        self.execute_for_list(descriptor, kind).await
    }
}
