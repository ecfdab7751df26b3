//! Common test utilities for entraport-graph integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use secrecy::SecretString;
use serde_json::{json, Value};
use wiremock::{MockServer, Respond, ResponseTemplate};

use entraport_graph::GraphClient;

/// Creates a client pointed at the mock server.
pub fn test_client(server: &MockServer) -> GraphClient {
    GraphClient::with_base_url(SecretString::from("test-token".to_string()), server.uri())
        .expect("client construction")
}

/// Test data factory for directory users.
pub fn create_test_user(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "displayName": name,
        "mail": format!("{}@example.com", id),
        "accountEnabled": true
    })
}

/// Test data factory for membership entries.
pub fn create_group_entry(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "displayName": name
    })
}

/// Wraps items in an OData response format.
pub fn create_odata_response(items: Vec<Value>, next_link: Option<&str>) -> Value {
    let mut response = json!({ "value": items });
    if let Some(link) = next_link {
        response["@odata.nextLink"] = json!(link);
    }
    response
}

/// Creates an OData error response body.
pub fn create_odata_error(code: &str, message: &str) -> Value {
    json!({
        "error": {
            "code": code,
            "message": message
        }
    })
}

/// Responder serving a fixed sequence of pages, one per request.
pub struct PaginatedResponder {
    pages: Vec<Value>,
    current_page: Arc<AtomicU32>,
}

impl PaginatedResponder {
    pub fn new(pages: Vec<Value>) -> Self {
        Self {
            pages,
            current_page: Arc::new(AtomicU32::new(0)),
        }
    }
}

impl Respond for PaginatedResponder {
    fn respond(&self, _request: &wiremock::Request) -> ResponseTemplate {
        let page_idx = self.current_page.fetch_add(1, Ordering::SeqCst) as usize;
        if page_idx < self.pages.len() {
            ResponseTemplate::new(200).set_body_json(self.pages[page_idx].clone())
        } else {
            // Extra requests past the declared sequence get an empty page
            ResponseTemplate::new(200).set_body_json(json!({"value": []}))
        }
    }
}
