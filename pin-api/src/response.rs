//! Response envelopes.
//!
//! Every transport call produces an `ApiResponse`: the raw body plus a
//! one-time classification set by the transport. The execution core only
//! ever reads the classification and, on success, attaches a mapped result.

use pin_models::Resource;

use crate::paging::PagedList;

/// Terminal classification of a response, set once by the transport from
/// the HTTP status code and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// 2xx.
    Ok,
    /// 429 - surfaced as an error by the execution core, never retried.
    RateLimited,
    /// Anything else. Returned to the caller as-is, with no mapped result.
    Error,
}

/// A mapped result attached to a successful response.
#[derive(Debug, Clone)]
pub enum ResponseResult {
    /// One domain object.
    Single(Resource),
    /// A page of same-kind domain objects.
    List(PagedList),
}

/// Classified wrapper around one HTTP response.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body.
    pub body: String,
    /// Retry hint from the `Retry-After` header, in seconds, when present.
    pub retry_after: Option<u64>,
    /// One-time classification set by the transport.
    pub classification: Classification,
    /// Mapped result. Only ever populated when classification is `Ok` and
    /// a mapping entry point was used.
    pub result: Option<ResponseResult>,
}

impl ApiResponse {
    /// Construct an envelope with no mapped result.
    pub fn new(status: u16, body: impl Into<String>, classification: Classification) -> Self {
        Self {
            status,
            body: body.into(),
            retry_after: None,
            classification,
            result: None,
        }
    }

    /// Whether the transport classified this response as successful.
    pub fn is_ok(&self) -> bool {
        self.classification == Classification::Ok
    }

    /// Whether the transport classified this response as rate-limited.
    pub fn is_rate_limited(&self) -> bool {
        self.classification == Classification::RateLimited
    }

    /// Borrow the mapped single object, if one was attached.
    pub fn single(&self) -> Option<&Resource> {
        match self.result {
            Some(ResponseResult::Single(ref r)) => Some(r),
            _ => None,
        }
    }

    /// Borrow the mapped paged list, if one was attached.
    pub fn list(&self) -> Option<&PagedList> {
        match self.result {
            Some(ResponseResult::List(ref l)) => Some(l),
            _ => None,
        }
    }

    /// Take ownership of the mapped single object, if one was attached.
    pub fn into_single(self) -> Option<Resource> {
        match self.result {
            Some(ResponseResult::Single(r)) => Some(r),
            _ => None,
        }
    }

    /// Take ownership of the mapped paged list, if one was attached.
    pub fn into_list(self) -> Option<PagedList> {
        match self.result {
            Some(ResponseResult::List(l)) => Some(l),
            _ => None,
        }
    }
}
