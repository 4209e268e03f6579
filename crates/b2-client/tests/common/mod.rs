//! Shared test helpers: a scripted transport that records every request.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{Value, json};

use b2_client::{B2Client, ClientConfig};
use b2_core::error::TransportError;
use b2_core::{Credentials, HttpRequest, HttpResponse, Transport};

pub const API_URL: &str = "https://api000.backblazeb2.com";
pub const DOWNLOAD_URL: &str = "https://f000.backblazeb2.com";
pub const ACCOUNT_TOKEN: &str = "4_acct_token";

#[derive(Default)]
struct State {
    responses: VecDeque<HttpResponse>,
    requests: Vec<HttpRequest>,
}

/// Transport that replays scripted responses in order.
///
/// Sending with nothing scripted fails with a connection error.
#[derive(Clone, Default)]
pub struct FakeTransport {
    state: Arc<Mutex<State>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, response: HttpResponse) {
        self.state.lock().unwrap().responses.push_back(response);
    }

    pub fn push_json(&self, status: u16, body: Value) {
        self.push(HttpResponse::new(status, body.to_string()));
    }

    pub fn push_authorized(&self) {
        self.push_json(200, authorize_body(ACCOUNT_TOKEN));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn request_count(&self) -> usize {
        self.state.lock().unwrap().requests.len()
    }

    /// Endpoint names or paths of every request, in order.
    pub fn endpoints(&self) -> Vec<String> {
        self.requests()
            .iter()
            .map(|r| {
                r.url
                    .rsplit_once("/b2api/v2/")
                    .map(|(_, endpoint)| endpoint.to_string())
                    .unwrap_or_else(|| r.url.clone())
            })
            .collect()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut state = self.state.lock().unwrap();
        state.requests.push(request);
        state
            .responses
            .pop_front()
            .ok_or_else(|| TransportError::Connection {
                message: "no scripted response".to_string(),
            })
    }
}

pub fn authorize_body(token: &str) -> Value {
    json!({
        "accountId": "acct1",
        "authorizationToken": token,
        "apiUrl": API_URL,
        "downloadUrl": DOWNLOAD_URL,
        "recommendedPartSize": 100000000,
        "absoluteMinimumPartSize": 5000000,
        "allowed": {"capabilities": ["all"], "bucketId": null, "bucketName": null, "namePrefix": null}
    })
}

pub fn client(transport: &FakeTransport) -> B2Client<FakeTransport> {
    client_with_config(transport, ClientConfig::default())
}

pub fn client_with_config(transport: &FakeTransport, config: ClientConfig) -> B2Client<FakeTransport> {
    B2Client::with_transport(
        transport.clone(),
        Credentials::new("key-id", "application-key"),
        config,
    )
    .unwrap()
}

pub fn body_json(request: &HttpRequest) -> Value {
    serde_json::from_slice(&request.body).unwrap()
}

pub fn file(name: &str, id: Option<&str>, action: &str) -> Value {
    json!({
        "accountId": "acct1",
        "action": action,
        "bucketId": "bucket1",
        "contentLength": 0,
        "contentSha1": null,
        "contentType": null,
        "fileId": id,
        "fileInfo": {},
        "fileName": name,
        "uploadTimestamp": 1533779200000i64
    })
}

pub fn names_page(files: Vec<Value>, next_file_name: Option<&str>) -> Value {
    json!({"files": files, "nextFileName": next_file_name})
}

/// A `b2_list_file_versions` response page.
pub fn versions_page(files: Vec<Value>, next: Option<(&str, &str)>) -> Value {
    json!({
        "files": files,
        "nextFileName": next.map(|(name, _)| name),
        "nextFileId": next.map(|(_, id)| id),
    })
}
