//! Integration tests for cursor continuation through the execution core.

mod common;

use reqwest::Method;

use pin_core::error::Error;
use pin_models::{Resource, ResourceKind, User};

use pin_api::paging::PagedList;

fn user(id: &str) -> Resource {
    Resource::User(User {
        id: Some(id.into()),
        ..Default::default()
    })
}

#[tokio::test]
async fn continuation_reconstructs_path_and_cursor() {
    let transport = common::MockTransport::new();
    transport.push(common::ok(&common::list_body(
        vec![serde_json::json!({"id": "1", "note": "first"})],
        Some("https://api.example/v1/boards/5/pins/?cursor=abc"),
    )));
    transport.push(common::ok(&common::list_body(
        vec![serde_json::json!({"id": "2", "note": "second"})],
        None,
    )));
    let client = common::client_with(transport.clone());

    let first = client
        .get_board_pins("5", &[])
        .await
        .unwrap()
        .into_list()
        .unwrap();
    assert!(first.has_next());

    let second = client
        .get_next_items(&first)
        .await
        .unwrap()
        .into_list()
        .unwrap();

    let calls = transport.calls();
    assert_eq!(calls.len(), 2);
    let continuation = &calls[1];
    assert_eq!(continuation.method, Method::GET);
    assert_eq!(continuation.path, "boards/5/pins/");
    assert_eq!(continuation.params["cursor"], "abc");
    // The server already knows the projection from the original request.
    assert!(continuation.fields.is_empty());

    // A new list is produced; the original is untouched.
    assert_eq!(second.kind(), ResourceKind::Pin);
    assert_eq!(second.items()[0].id(), Some("2"));
    assert!(!second.has_next());
    assert_eq!(first.len(), 1);
    assert!(first.has_next());
}

#[tokio::test]
async fn continuation_chains_until_exhausted() {
    let transport = common::MockTransport::new();
    transport.push(common::ok(&common::list_body(
        vec![serde_json::json!({"id": "u2"})],
        Some("/v1/me/followers/?cursor=page3"),
    )));
    transport.push(common::ok(&common::list_body(
        vec![serde_json::json!({"id": "u3"})],
        None,
    )));
    let client = common::client_with(transport.clone());

    let page1 = PagedList::new(
        ResourceKind::User,
        vec![user("u1")],
        Some("/v1/me/followers/?cursor=page2".into()),
    );

    let page2 = client
        .get_next_items(&page1)
        .await
        .unwrap()
        .into_list()
        .unwrap();
    assert!(page2.has_next());

    let page3 = client
        .get_next_items(&page2)
        .await
        .unwrap()
        .into_list()
        .unwrap();
    assert!(!page3.has_next());
    assert_eq!(page3.items()[0].id(), Some("u3"));

    let calls = transport.calls();
    assert_eq!(calls[0].params["cursor"], "page2");
    assert_eq!(calls[1].params["cursor"], "page3");
}

#[tokio::test]
async fn no_next_page_fails_without_transport_call() {
    let transport = common::MockTransport::new();
    let client = common::client_with(transport.clone());

    let list = PagedList::new(ResourceKind::User, vec![user("u1")], None);
    let err = client.get_next_items(&list).await.unwrap_err();

    assert!(matches!(err, Error::InvalidArgument(_)));
    assert!(err.to_string().contains("no further pages"));
    assert_eq!(transport.call_count(), 0);
}

#[tokio::test]
async fn empty_list_fails_with_distinct_message() {
    let transport = common::MockTransport::new();
    let client = common::client_with(transport.clone());

    // Continuation URL present, but the list has no elements.
    let list = PagedList::new(
        ResourceKind::Pin,
        vec![],
        Some("/v1/me/pins/?cursor=abc".into()),
    );
    let err = client.get_next_items(&list).await.unwrap_err();

    assert!(matches!(err, Error::InvalidArgument(_)));
    assert!(err.to_string().contains("empty"));
    assert!(!err.to_string().contains("no further pages"));
    assert_eq!(transport.call_count(), 0);
}

#[tokio::test]
async fn version_prefix_mismatch_fails_without_transport_call() {
    let transport = common::MockTransport::new();
    let client = common::client_with(transport.clone());

    let list = PagedList::new(
        ResourceKind::User,
        vec![user("u1")],
        Some("https://api.example/v3/me/following/users/?cursor=abc".into()),
    );
    let err = client.get_next_items(&list).await.unwrap_err();

    assert!(matches!(err, Error::Mapping(_)));
    assert_eq!(transport.call_count(), 0);
}

#[tokio::test]
async fn rate_limited_continuation_is_surfaced() {
    let transport = common::MockTransport::new();
    transport.push(common::rate_limited(Some(10)));
    let client = common::client_with(transport.clone());

    let list = PagedList::new(
        ResourceKind::User,
        vec![user("u1")],
        Some("/v1/me/followers/?cursor=abc".into()),
    );
    let err = client.get_next_items(&list).await.unwrap_err();
    assert!(matches!(err, Error::RateLimited { .. }));
}
