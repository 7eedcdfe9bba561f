//! Response-side types for an HTTP task.
//!
//! # Design
//! A completed task execution is exactly one of two shapes: a success
//! carrying the interpreted body, or an error carrying a failure code plus
//! whatever was received before the failure. There is no pending state at
//! this layer; in-flight bookkeeping lives in the task runner.
//!
//! On the wire the two shapes are discriminated by field presence, not a
//! tag: a record with an `error` field is the error variant no matter which
//! other fields accompany it. The untagged enum lists `Error` first so that
//! rule holds during deserialization.

use serde::{Deserialize, Serialize};

use crate::error::HttpError;

/// An interpreted response payload.
///
/// Which variant the transport constructs is dictated by the request's
/// [`Expect`](crate::Expect) mode, not by inspecting the payload. When
/// deserializing standalone, a JSON string becomes `Text` and anything else
/// becomes `Json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Body {
    /// Raw text, as delivered for `Expect::String`.
    Text(String),
    /// Parsed JSON document, as delivered for `Expect::Json`.
    Json(serde_json::Value),
}

impl Body {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Body::Text(text) => Some(text),
            Body::Json(_) => None,
        }
    }

    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Body::Text(_) => None,
            Body::Json(value) => Some(value),
        }
    }
}

/// The transport received a response and interpreted its body.
///
/// Any received status counts as success at this layer, including 4xx/5xx;
/// status interpretation belongs to the task that issued the request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseSuccess {
    pub body: Body,
    pub status: u16,
    pub status_text: String,
}

/// The transport failed to complete the request.
///
/// `body`, `status` and `status_text` are carried through when the failure
/// occurred after a response was partially received, e.g. a `BAD_BODY` where
/// the status line arrived but the payload would not parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseError {
    pub error: HttpError,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Body>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_text: Option<String>,
}

/// Outcome of a single task execution, built once by the transport and
/// never mutated afterward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Response {
    // Error must stay first: untagged deserialization tries variants in
    // order, and presence of `error` decides the variant.
    Error(ResponseError),
    Success(ResponseSuccess),
}
