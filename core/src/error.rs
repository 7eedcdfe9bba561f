//! Transport failure codes carried on the error response variant.
//!
//! # Design
//! The known codes get dedicated variants because callers branch on them
//! (retry on `TIMEOUT`, give up on `BAD_URL`). Codes outside the known set
//! land in `Other` with the raw text preserved, so transports can introduce
//! new codes without a contract change. The wire form is the bare code
//! string; parsing a known code always yields its named variant, so an
//! `Other` carrying a known code does not survive a round-trip.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Failure classification produced by the external transport.
///
/// Nothing in this crate constructs or raises these; they are data carried
/// inside [`ResponseError`](crate::ResponseError).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum HttpError {
    /// The target URI was malformed or unsupported.
    BadUrl,
    /// Connection-level failure: refused, reset, DNS, TLS.
    NetworkError,
    /// The transport exceeded its time budget.
    Timeout,
    /// The response body could not be interpreted per the request's
    /// `expect` mode.
    BadBody,
    /// A transport-specific code outside the known set, verbatim.
    Other(String),
}

impl HttpError {
    /// The wire code for this error.
    pub fn as_str(&self) -> &str {
        match self {
            HttpError::BadUrl => "BAD_URL",
            HttpError::NetworkError => "NETWORK_ERROR",
            HttpError::Timeout => "TIMEOUT",
            HttpError::BadBody => "BAD_BODY",
            HttpError::Other(code) => code,
        }
    }
}

impl From<String> for HttpError {
    fn from(code: String) -> Self {
        match code.as_str() {
            "BAD_URL" => HttpError::BadUrl,
            "NETWORK_ERROR" => HttpError::NetworkError,
            "TIMEOUT" => HttpError::Timeout,
            "BAD_BODY" => HttpError::BadBody,
            _ => HttpError::Other(code),
        }
    }
}

impl From<&str> for HttpError {
    fn from(code: &str) -> Self {
        HttpError::from(code.to_string())
    }
}

impl From<HttpError> for String {
    fn from(error: HttpError) -> Self {
        error.as_str().to_string()
    }
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::error::Error for HttpError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_parse_to_named_variants() {
        assert_eq!(HttpError::from("BAD_URL"), HttpError::BadUrl);
        assert_eq!(HttpError::from("NETWORK_ERROR"), HttpError::NetworkError);
        assert_eq!(HttpError::from("TIMEOUT"), HttpError::Timeout);
        assert_eq!(HttpError::from("BAD_BODY"), HttpError::BadBody);
    }

    #[test]
    fn unknown_code_is_preserved_verbatim() {
        let error = HttpError::from("DNS_POISONED");
        assert_eq!(error, HttpError::Other("DNS_POISONED".to_string()));
        assert_eq!(error.as_str(), "DNS_POISONED");
    }

    #[test]
    fn serializes_as_bare_code_string() {
        assert_eq!(serde_json::to_value(HttpError::Timeout).unwrap(), "TIMEOUT");
        assert_eq!(
            serde_json::to_value(HttpError::Other("QUOTA".to_string())).unwrap(),
            "QUOTA"
        );
    }

    #[test]
    fn deserializes_known_code_to_named_variant() {
        let error: HttpError = serde_json::from_str(r#""NETWORK_ERROR""#).unwrap();
        assert_eq!(error, HttpError::NetworkError);
    }

    #[test]
    fn other_holding_known_code_normalizes_on_roundtrip() {
        let json = serde_json::to_string(&HttpError::Other("TIMEOUT".to_string())).unwrap();
        let back: HttpError = serde_json::from_str(&json).unwrap();
        assert_eq!(back, HttpError::Timeout);
    }

    #[test]
    fn display_matches_wire_code() {
        assert_eq!(HttpError::BadBody.to_string(), "BAD_BODY");
        assert_eq!(HttpError::Other("X".to_string()).to_string(), "X");
    }
}
