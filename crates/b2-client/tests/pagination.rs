//! Lazy listing behavior over a scripted transport.

mod common;

use futures_util::{StreamExt, TryStreamExt};
use serde_json::json;

use b2_client::ListFilesQuery;
use b2_core::{ApiErrorKind, Error};
use common::{FakeTransport, body_json, client, file, names_page};

#[tokio::test]
async fn file_names_concatenate_across_pages() {
    let transport = FakeTransport::new();
    transport.push_authorized();
    transport.push_json(
        200,
        names_page(
            vec![file("a", Some("1"), "upload"), file("b", Some("2"), "upload")],
            Some("c"),
        ),
    );
    transport.push_json(200, names_page(vec![file("c", Some("3"), "upload")], None));

    let client = client(&transport);
    let names: Vec<String> = client
        .list_file_names(ListFilesQuery::new("bucket1"))
        .map_ok(|f| f.file_name)
        .try_collect()
        .await
        .unwrap();

    assert_eq!(names, vec!["a", "b", "c"]);
    assert_eq!(
        transport.endpoints(),
        vec!["b2_authorize_account", "b2_list_file_names", "b2_list_file_names"]
    );

    let requests = transport.requests();
    let first = body_json(&requests[1]);
    assert_eq!(first["bucketId"], "bucket1");
    assert_eq!(first["maxFileCount"], 100);
    assert!(first.get("startFileName").is_none());
    assert_eq!(body_json(&requests[2])["startFileName"], "c");
}

#[tokio::test]
async fn empty_listing_issues_one_request() {
    let transport = FakeTransport::new();
    transport.push_authorized();
    transport.push_json(200, names_page(vec![], None));

    let client = client(&transport);
    let files: Vec<_> = client
        .list_file_names(ListFilesQuery::new("bucket1").with_prefix("nothing/"))
        .try_collect()
        .await
        .unwrap();

    assert!(files.is_empty());
    assert_eq!(
        transport.endpoints(),
        vec!["b2_authorize_account", "b2_list_file_names"]
    );
}

#[tokio::test]
async fn version_cursor_forwards_name_and_id() {
    let transport = FakeTransport::new();
    transport.push_authorized();
    transport.push_json(
        200,
        json!({
            "files": [file("a", Some("0"), "upload")],
            "nextFileName": "a",
            "nextFileId": "1"
        }),
    );
    transport.push_json(
        200,
        json!({
            "files": [file("a", Some("1"), "hide")],
            "nextFileName": null,
            "nextFileId": null
        }),
    );

    let client = client(&transport);
    let versions: Vec<_> = client
        .list_file_versions(ListFilesQuery::new("bucket1"))
        .try_collect()
        .await
        .unwrap();

    assert_eq!(versions.len(), 2);
    let second = body_json(&transport.requests()[2]);
    assert_eq!(second["startFileName"], "a");
    assert_eq!(second["startFileId"], "1");
}

#[tokio::test]
async fn query_filters_are_sent_on_every_page() {
    let transport = FakeTransport::new();
    transport.push_authorized();
    transport.push_json(200, names_page(vec![file("p/x", Some("1"), "upload")], Some("p/y")));
    transport.push_json(200, names_page(vec![file("p/y", Some("2"), "upload")], None));

    let client = client(&transport);
    let query = ListFilesQuery::new("bucket1")
        .with_prefix("p/")
        .with_delimiter("/")
        .with_page_size(1);
    let _: Vec<_> = client.list_file_names(query).try_collect().await.unwrap();

    for request in &transport.requests()[1..] {
        let body = body_json(request);
        assert_eq!(body["prefix"], "p/");
        assert_eq!(body["delimiter"], "/");
        assert_eq!(body["maxFileCount"], 1);
    }
}

#[tokio::test]
async fn keys_paginate_by_key_id() {
    let transport = FakeTransport::new();
    transport.push_authorized();
    transport.push_json(
        200,
        json!({
            "keys": [{"accountId": "acct1", "applicationKeyId": "k1", "keyName": "one", "capabilities": []}],
            "nextApplicationKeyId": "k2"
        }),
    );
    transport.push_json(
        200,
        json!({
            "keys": [{"accountId": "acct1", "applicationKeyId": "k2", "keyName": "two", "capabilities": []}],
            "nextApplicationKeyId": null
        }),
    );

    let client = client(&transport);
    let ids: Vec<String> = client
        .list_keys(None)
        .map_ok(|k| k.application_key_id)
        .try_collect()
        .await
        .unwrap();

    assert_eq!(ids, vec!["k1", "k2"]);
    let second = body_json(&transport.requests()[2]);
    assert_eq!(second["accountId"], "acct1");
    assert_eq!(second["startApplicationKeyId"], "k2");
}

#[tokio::test]
async fn failing_page_ends_listing_after_earlier_items() {
    let transport = FakeTransport::new();
    transport.push_authorized();
    transport.push_json(200, names_page(vec![file("a", Some("1"), "upload")], Some("b")));
    transport.push_json(
        500,
        json!({"status": 500, "code": "internal_error", "message": "try again"}),
    );

    let client = client(&transport);
    let mut listing = client.list_file_names(ListFilesQuery::new("bucket1"));

    assert_eq!(listing.next().await.unwrap().unwrap().file_name, "a");
    let err = listing.next().await.unwrap().unwrap_err();
    assert_eq!(err.api_kind(), Some(ApiErrorKind::InternalError));
    assert!(listing.next().await.is_none());
    assert_eq!(transport.request_count(), 3);
}

#[tokio::test]
async fn listing_is_lazy() {
    let transport = FakeTransport::new();
    let client = client(&transport);

    let listing = client.list_file_names(ListFilesQuery::new("bucket1"));
    drop(listing);

    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn invalid_page_size_fails_before_any_request() {
    let transport = FakeTransport::new();
    let client = client(&transport);

    let err = client
        .list_file_names_page(&ListFilesQuery::new("bucket1").with_page_size(0), None)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::InvalidArgument(_)));
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn page_calls_expose_cursor() {
    let transport = FakeTransport::new();
    transport.push_authorized();
    transport.push_json(200, names_page(vec![file("a", Some("1"), "upload")], Some("b")));
    transport.push_json(200, names_page(vec![file("b", Some("2"), "upload")], None));

    let client = client(&transport);
    let query = ListFilesQuery::new("bucket1");

    let first = client.list_file_names_page(&query, None).await.unwrap();
    let cursor = first.next_cursor.clone().unwrap();
    assert_eq!(cursor.as_str(), "b");

    let second = client
        .list_file_names_page(&query, Some(&cursor))
        .await
        .unwrap();
    assert!(second.is_last());
    assert_eq!(second.items[0].file_name, "b");
}
