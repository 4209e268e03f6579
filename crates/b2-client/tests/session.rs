//! Lazy authorization and session reuse.

mod common;

use serde_json::json;

use b2_client::BucketFilter;
use b2_core::{ApiErrorKind, Error};
use common::{ACCOUNT_TOKEN, FakeTransport, authorize_body, body_json, client};

fn buckets() -> serde_json::Value {
    json!({"buckets": [{
        "accountId": "acct1",
        "bucketId": "bucket1",
        "bucketName": "photos",
        "bucketType": "allPrivate"
    }]})
}

#[tokio::test]
async fn authorizes_once_on_first_call() {
    let transport = FakeTransport::new();
    transport.push_authorized();
    transport.push_json(200, buckets());
    transport.push_json(200, buckets());

    let client = client(&transport);
    assert_eq!(transport.request_count(), 0);
    assert!(client.session().await.is_none());

    client.list_buckets(&BucketFilter::default()).await.unwrap();
    client.list_buckets(&BucketFilter::default()).await.unwrap();

    assert_eq!(
        transport.endpoints(),
        vec!["b2_authorize_account", "b2_list_buckets", "b2_list_buckets"]
    );

    let requests = transport.requests();
    assert_eq!(
        requests[0].header_value("authorization"),
        Some("Basic a2V5LWlkOmFwcGxpY2F0aW9uLWtleQ==")
    );
    assert_eq!(
        requests[0].url,
        "https://api.backblazeb2.com/b2api/v2/b2_authorize_account"
    );
    assert_eq!(requests[1].header_value("authorization"), Some(ACCOUNT_TOKEN));
    assert!(requests[1].url.starts_with(common::API_URL));
}

#[tokio::test]
async fn account_id_comes_from_session() {
    let transport = FakeTransport::new();
    transport.push_authorized();
    transport.push_json(200, buckets());

    let client = client(&transport);
    client
        .list_buckets(&BucketFilter::by_name("photos"))
        .await
        .unwrap();

    let body = body_json(&transport.requests()[1]);
    assert_eq!(
        body,
        json!({"accountId": "acct1", "bucketName": "photos", "bucketTypes": ["all"]})
    );
}

#[tokio::test]
async fn failed_authorization_leaves_session_empty() {
    let transport = FakeTransport::new();
    transport.push_json(
        401,
        json!({"status": 401, "code": "bad_auth_token", "message": "invalid key"}),
    );
    transport.push_authorized();
    transport.push_json(200, buckets());

    let client = client(&transport);
    let err = client
        .list_buckets(&BucketFilter::default())
        .await
        .unwrap_err();

    match err {
        Error::AuthorizationFailed(api) => assert_eq!(api.kind, ApiErrorKind::BadAuthToken),
        other => panic!("expected authorization failure, got {other:?}"),
    }
    assert!(client.session().await.is_none());

    client.list_buckets(&BucketFilter::default()).await.unwrap();
    assert_eq!(
        transport.endpoints(),
        vec!["b2_authorize_account", "b2_authorize_account", "b2_list_buckets"]
    );
}

#[tokio::test]
async fn expired_token_is_reported_not_retried() {
    let transport = FakeTransport::new();
    transport.push_authorized();
    transport.push_json(
        401,
        json!({"status": 401, "code": "expired_auth_token", "message": "expired"}),
    );
    transport.push_json(200, authorize_body("4_fresh_token"));
    transport.push_json(200, buckets());

    let client = client(&transport);
    let err = client
        .list_buckets(&BucketFilter::default())
        .await
        .unwrap_err();
    assert!(err.is_expired_token());
    assert_eq!(transport.request_count(), 2);

    client.authorize_account().await.unwrap();
    client.list_buckets(&BucketFilter::default()).await.unwrap();

    let requests = transport.requests();
    assert_eq!(requests[3].header_value("authorization"), Some("4_fresh_token"));
}

#[tokio::test]
async fn concurrent_first_calls_authorize_once() {
    let transport = FakeTransport::new();
    transport.push_authorized();

    let client = client(&transport);
    let (a, b) = tokio::join!(client.ensure_authorized(), client.ensure_authorized());

    assert_eq!(a.unwrap().account_id, "acct1");
    assert_eq!(b.unwrap().account_id, "acct1");
    assert_eq!(transport.request_count(), 1);
}

#[tokio::test]
async fn clear_session_forces_new_authorization() {
    let transport = FakeTransport::new();
    transport.push_authorized();
    transport.push_authorized();

    let client = client(&transport);
    client.ensure_authorized().await.unwrap();
    client.clear_session().await;
    assert!(client.session().await.is_none());

    client.ensure_authorized().await.unwrap();
    assert_eq!(transport.request_count(), 2);
}

#[tokio::test]
async fn find_bucket_by_name_reports_missing_bucket() {
    let transport = FakeTransport::new();
    transport.push_authorized();
    transport.push_json(200, json!({"buckets": []}));

    let client = client(&transport);
    let err = client.find_bucket_by_name("nope").await.unwrap_err();

    assert!(err.is_not_found());
}

#[tokio::test]
async fn unsupported_operations_make_no_requests() {
    let transport = FakeTransport::new();
    let client = client(&transport);

    assert!(matches!(
        client.update_bucket().await,
        Err(Error::NotImplemented("update_bucket"))
    ));
    assert!(matches!(
        client.copy_part().await,
        Err(Error::NotImplemented(_))
    ));
    assert!(matches!(
        client.download_file_by_id("4_z1").await,
        Err(Error::NotImplemented(_))
    ));
    assert!(matches!(
        client.list_unfinished_large_files("bucket1").await,
        Err(Error::NotImplemented(_))
    ));
    assert!(matches!(
        client.update_file_retention().await,
        Err(Error::NotImplemented(_))
    ));
    assert!(matches!(
        client.update_legal_hold().await,
        Err(Error::NotImplemented(_))
    ));
    assert_eq!(transport.request_count(), 0);
}
