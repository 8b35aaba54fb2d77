//! # Chat Request Handler
//!
//! File: cli/src/commands/serve/handlers.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Implements `POST /chat`. The request body is parsed permissively: anything
//! that is not a JSON object carrying a string `message` is treated as an empty
//! message, so the handler always answers `200` with `{"reply": "..."}`.
//!
//! A body is only read as JSON when the request declares a JSON content type
//! (`application/json` or an `application/*+json` type). Other content types
//! are treated like an empty payload.
//!
//! The body is read by the handler itself, up to `MAX_BODY_BYTES`. A body that
//! is larger, or that fails mid-read, is treated like malformed input rather
//! than answered with `413`.
//!
use crate::chat::Reply;
use axum::{
    body::{to_bytes, Body, Bytes},
    http::{header::CONTENT_TYPE, HeaderMap},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// Upper bound on how much of a request body is buffered.
pub const MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

/// Incoming chat payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

/// Outgoing chat payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
}

impl ChatRequest {
    /// Builds a request from raw headers and body, never failing.
    ///
    /// A missing, malformed, or non-object body yields an empty message, as
    /// does a `message` field that is absent, `null`, or not a string.
    pub fn from_body(headers: &HeaderMap, body: &[u8]) -> Self {
        if !is_json_content_type(headers) {
            debug!("Request without a JSON content type; treating payload as empty");
            return Self::default();
        }

        let payload = match serde_json::from_slice::<Value>(body) {
            Ok(value) => value,
            Err(e) => {
                debug!("Ignoring malformed JSON body: {}", e);
                return Self::default();
            }
        };

        // Sequences would otherwise deserialize positionally into the struct.
        if !payload.is_object() {
            debug!("Ignoring non-object JSON body");
            return Self::default();
        }

        serde_json::from_value(payload).unwrap_or_else(|e| {
            debug!("Ignoring unusable message field: {}", e);
            Self::default()
        })
    }
}

/// Buffers at most `limit` bytes of `body`; `None` if it is larger or unreadable.
async fn read_body(body: Body, limit: usize) -> Option<Bytes> {
    match to_bytes(body, limit).await {
        Ok(bytes) => Some(bytes),
        Err(e) => {
            debug!("Discarding request body: {}", e);
            None
        }
    }
}

/// Whether the `Content-Type` header names JSON.
fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(value) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };

    let mime = value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}

/// # Chat Handler (`chat`)
///
/// Answers a chat message with a canned reply. Takes the raw `Body` rather
/// than `Json<ChatRequest>` or `Bytes` so that neither a rejection nor the
/// body size limit can turn into a `4xx` response.
pub async fn chat(headers: HeaderMap, body: Body) -> Json<ChatResponse> {
    let request = match read_body(body, MAX_BODY_BYTES).await {
        Some(bytes) => ChatRequest::from_body(&headers, &bytes),
        None => ChatRequest::default(),
    };
    let reply = Reply::classify(&request.message);
    debug!("Message {:?} classified as {:?}", request.message, reply);

    Json(ChatResponse {
        reply: reply.text().to_string(),
    })
}

// --- Unit Tests ---
