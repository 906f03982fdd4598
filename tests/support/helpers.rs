// tests/support/helpers.rs
use super::builders::PASSWORD;
use axum::{
    body::{self, Body},
    http::{Request, header},
};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use campus_portal::domain::audit::{AuditAction, AuditEvent};
use serde_json::Value;

pub fn basic_auth(email: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{email}:{PASSWORD}")))
}

pub fn get_as(uri: &str, email: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header(header::AUTHORIZATION, basic_auth(email))
        .body(Body::empty())
        .unwrap()
}

pub fn json_as(method: &str, uri: &str, email: &str, payload: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, basic_auth(email))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(payload).unwrap()))
        .unwrap()
}

pub async fn body_json(resp: axum::response::Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn count_action(events: &[AuditEvent], action: AuditAction) -> usize {
    events.iter().filter(|e| e.action == action).count()
}
