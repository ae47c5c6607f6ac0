//! Response body mapping.
//!
//! All API payloads share one wire shape:
//! `{ "data": <object|array>, "page"?: { "next": <url> } }`.
//! The mapper turns an envelope's raw body into either a single typed
//! resource or a paged list. Pure transformation; no side effects.

use serde::Deserialize;

use pin_core::error::{Error, Result};
use pin_models::{Resource, ResourceKind};

use crate::paging::PagedList;
use crate::response::ApiResponse;

/// The common wire envelope around every payload.
#[derive(Debug, Deserialize)]
struct WireBody {
    #[serde(default)]
    data: Option<serde_json::Value>,
    #[serde(default)]
    page: Option<WirePage>,
}

#[derive(Debug, Deserialize)]
struct WirePage {
    #[serde(default)]
    next: Option<String>,
}

fn parse_body(response: &ApiResponse) -> Result<WireBody> {
    serde_json::from_str(&response.body)
        .map_err(|e| Error::Mapping(format!("response body is not valid JSON: {e}")))
}

/// Map a response body's `data` object into one resource of the given kind.
pub fn to_single(response: &ApiResponse, kind: ResourceKind) -> Result<Resource> {
    let body = parse_body(response)?;
    let data = body
        .data
        .ok_or_else(|| Error::Mapping(format!("missing `data` key for {kind} payload")))?;
    Resource::from_value(kind, data)
}

/// Map a response body's `data` array into a paged list of the given kind,
/// attaching the `page.next` continuation URL when present.
///
/// An empty array yields an empty list; the continuation is attached
/// independently of the element count.
pub fn to_list(response: &ApiResponse, kind: ResourceKind) -> Result<PagedList> {
    let body = parse_body(response)?;
    let data = body
        .data
        .ok_or_else(|| Error::Mapping(format!("missing `data` key for {kind} list payload")))?;
    let records = match data {
        serde_json::Value::Array(records) => records,
        other => {
            return Err(Error::Mapping(format!(
                "expected a JSON array of {kind} records, got {}",
                match other {
                    serde_json::Value::Object(_) => "an object",
                    serde_json::Value::Null => "null",
                    _ => "a scalar",
                }
            )))
        }
    };

    let mut items = Vec::with_capacity(records.len());
    for record in records {
        items.push(Resource::from_value(kind, record)?);
    }

    let next = body.page.and_then(|p| p.next).filter(|n| !n.is_empty());
    Ok(PagedList::new(kind, items, next))
}
