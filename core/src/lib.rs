//! Data contract for a single HTTP task inside a task runner.
//!
//! # Overview
//! Declares the shape of an outbound request, the two possible outcomes of
//! executing it, and the header-normalization step a transport applies
//! before serializing headers onto the wire (host-does-IO pattern). The
//! crate itself performs no network I/O: a `Request` is built by the
//! orchestration layer, executed by an external transport, and answered
//! with a `Response` built exactly once by that transport.
//!
//! # Design
//! - All types are owned plain data with public fields; no constructors,
//!   no hidden state, no interior mutability.
//! - The only executable surface is [`to_headers`], a total function —
//!   nothing in this crate returns `Result`.
//! - Failure classification ([`HttpError`]) is data carried on the error
//!   response variant, produced by the transport, never raised here.
//! - Wire mapping (serde) mirrors the runner's task-definition JSON:
//!   `expect` as `"STRING"`/`"JSON"`, error codes as bare strings,
//!   `statusText` in camelCase, error/success discriminated by presence of
//!   the `error` field.

pub mod error;
pub mod headers;
pub mod http;
pub mod response;

pub use error::HttpError;
pub use headers::to_headers;
pub use http::{Expect, Header, Request};
pub use response::{Body, Response, ResponseError, ResponseSuccess};
