//! Request-side types for an HTTP task.
//!
//! # Design
//! These types describe an outbound HTTP request as plain data. The core
//! crate never touches the network — the caller (host transport) is
//! responsible for executing the request and building the corresponding
//! [`Response`](crate::Response). This separation keeps the core
//! deterministic and easy to test.
//!
//! All fields use owned types (`String`, `Vec`) so values can cross thread
//! and FFI boundaries without lifetime concerns.

use serde::{Deserialize, Serialize};

/// A single header pair on a request.
///
/// Duplicate names are permitted within a request's header sequence; see
/// [`to_headers`](crate::to_headers) for how duplicates collapse when the
/// sequence is flattened for a transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub name: String,
    pub value: String,
}

/// How the transport should interpret the response body once received.
///
/// Serialized as `"STRING"` / `"JSON"` in task definitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Expect {
    /// Deliver the body as raw text.
    String,
    /// Parse the body as a JSON document.
    Json,
}

/// An HTTP request described as plain data.
///
/// Built by the task orchestration layer and handed to the transport, which
/// executes it and returns a [`Response`](crate::Response). Nothing in this
/// crate mutates a `Request` after construction; every operation takes
/// `&Request`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    /// Target URI. Not validated at this layer; a malformed URI surfaces as
    /// a `BAD_URL` error from the transport.
    pub url: String,
    /// HTTP verb. Deliberately unrestricted text so custom and non-standard
    /// verbs pass through unchanged.
    pub method: String,
    /// Ordered header sequence. Callers may rely on position for intent.
    pub headers: Vec<Header>,
    /// Declared interpretation of the response body.
    pub expect: Expect,
    /// Arbitrary payload, opaque to this layer. `Null` when the task
    /// definition omits it.
    #[serde(default)]
    pub body: serde_json::Value,
}
