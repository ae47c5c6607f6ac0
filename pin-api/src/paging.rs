//! Paged lists and cursor continuation.
//!
//! List responses carry an opaque `page.next` URL. Continuation rebuilds a
//! request descriptor from that URL by stripping the configured API version
//! prefix and re-parsing the query string, then resubmits through the
//! execution core with the list's stored element kind. Each continuation
//! produces a new list; the original is never mutated.

use tracing::debug;

use pin_core::constants;
use pin_core::error::{Error, Result};
use pin_models::{Resource, ResourceKind};

use crate::client::ApiClient;
use crate::request::RequestDescriptor;
use crate::response::ApiResponse;

/// An ordered page of same-kind resources plus an optional continuation URL.
///
/// The element kind is stored as an explicit tag at creation time, so
/// continuation never needs to inspect the elements themselves.
#[derive(Debug, Clone)]
pub struct PagedList {
    kind: ResourceKind,
    items: Vec<Resource>,
    next: Option<String>,
}

impl PagedList {
    /// Create a list. `next` should already be filtered to a non-empty URL.
    pub fn new(kind: ResourceKind, items: Vec<Resource>, next: Option<String>) -> Self {
        Self { kind, items, next }
    }

    /// The element kind tag.
    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    /// The elements, in server order.
    pub fn items(&self) -> &[Resource] {
        &self.items
    }

    /// Iterate the elements in server order.
    pub fn iter(&self) -> std::slice::Iter<'_, Resource> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether a further page can be requested.
    pub fn has_next(&self) -> bool {
        self.next.as_deref().is_some_and(|n| !n.is_empty())
    }

    /// The raw continuation URL, when present.
    pub fn next_url(&self) -> Option<&str> {
        self.next.as_deref()
    }

    /// Consume the list, yielding its elements.
    pub fn into_items(self) -> Vec<Resource> {
        self.items
    }
}

impl<'a> IntoIterator for &'a PagedList {
    type Item = &'a Resource;
    type IntoIter = std::slice::Iter<'a, Resource>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Rebuild a GET descriptor from an opaque continuation URL.
///
/// Accepts absolute or path-relative URLs. The path must begin with the
/// configured `/{version}/` prefix; anything else fails with a mapping error
/// rather than silently miscomputing a path. The transport's own auth
/// parameter is dropped from the carried query, since it is re-attached on
/// send. No field projection is set: the server already encodes the original
/// projection in the URL.
pub(crate) fn continuation_descriptor(
    next_url: &str,
    api_version: &str,
) -> Result<RequestDescriptor> {
    let url = reqwest::Url::parse(next_url)
        .or_else(|_| {
            // Path-relative form: resolve against a placeholder origin so
            // the query still parses.
            reqwest::Url::parse("https://continuation.invalid")
                .and_then(|base| base.join(next_url))
        })
        .map_err(|e| Error::Mapping(format!("unparseable continuation URL {next_url:?}: {e}")))?;

    let prefix = format!("/{api_version}/");
    let relative = url.path().strip_prefix(&prefix).ok_or_else(|| {
        Error::Mapping(format!(
            "continuation URL path {:?} does not begin with the API version prefix {prefix:?}",
            url.path()
        ))
    })?;

    let mut descriptor = RequestDescriptor::get(relative);
    for (key, value) in url.query_pairs() {
        if key == constants::ACCESS_TOKEN_PARAM {
            continue;
        }
        descriptor = descriptor.with_param(&key, value.into_owned());
    }
    Ok(descriptor)
}

impl ApiClient {
    /// Fetch the next page for a paged list.
    ///
    /// Fails with `InvalidArgument` before any transport call when the list
    /// is empty or has no continuation URL. On success the envelope carries
    /// a fresh `PagedList` of the same kind, itself possibly continuable.
    pub async fn get_next_items(&self, list: &PagedList) -> Result<ApiResponse> {
        if list.is_empty() {
            return Err(Error::InvalidArgument(
                "cannot fetch the next page of an empty list".into(),
            ));
        }
        let Some(next) = list.next_url().filter(|n| !n.is_empty()) else {
            return Err(Error::InvalidArgument(
                "paged list has no further pages".into(),
            ));
        };

        let descriptor = continuation_descriptor(next, self.api_version())?;
        debug!(
            "continuing {} list at {}",
            list.kind().name(),
            descriptor.path
        );
        self.execute_for_list(descriptor, list.kind()).await
    }
}
