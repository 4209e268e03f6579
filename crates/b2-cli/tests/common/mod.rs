//! Helpers for running the `b2` binary against a mock server.

#![allow(dead_code)]

use std::path::Path;
use std::process::Output;

use serde_json::json;
use tokio::process::Command;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TOKEN: &str = "4_cli_token";

/// Run the CLI with credentials pointing at `server`.
pub async fn run_cli(server: &MockServer, args: &[&str], dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_b2"))
        .args(args)
        .current_dir(dir)
        .env("B2_APPLICATION_KEY_ID", "key-id")
        .env("B2_APPLICATION_KEY", "application-key")
        .env("B2_AUTH_URL", server.uri())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .await
        .expect("Failed to execute CLI")
}

/// Run the CLI and expect success, returning stdout.
pub async fn run_cli_success(server: &MockServer, args: &[&str], dir: &Path) -> String {
    let output = run_cli(server, args, dir).await;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub async fn mount_authorize(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/b2api/v2/b2_authorize_account"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "accountId": "acct1",
            "authorizationToken": TOKEN,
            "apiUrl": server.uri(),
            "downloadUrl": server.uri(),
            "recommendedPartSize": 100000000,
            "absoluteMinimumPartSize": 5000000,
            "allowed": {"capabilities": ["listBuckets", "writeFiles"]}
        })))
        .mount(server)
        .await;
}

/// Mount a bucket listing that returns a single bucket named `photos`.
pub async fn mount_photos_bucket(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/b2api/v2/b2_list_buckets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "buckets": [{
                "accountId": "acct1",
                "bucketId": "bucket1",
                "bucketName": "photos",
                "bucketType": "allPrivate"
            }]
        })))
        .mount(server)
        .await;
}

pub fn file(name: &str, id: Option<&str>, action: &str, len: u64) -> serde_json::Value {
    json!({
        "accountId": "acct1",
        "action": action,
        "bucketId": "bucket1",
        "contentLength": len,
        "fileId": id,
        "fileName": name,
        "fileInfo": {},
        "uploadTimestamp": 1533779200000i64
    })
}
