//! Header normalization for transport handoff.

use std::collections::HashMap;

use crate::http::Request;

/// Flatten a request's ordered header sequence into the name→value map a
/// transport expects.
///
/// Later occurrences of a name overwrite earlier ones (last-wins, by input
/// order) — this is specified behavior, not an error. Names and values pass
/// through verbatim: empty strings and non-standard characters are accepted,
/// and this function never fails.
///
/// Runs in linear time over the header count and allocates only the output
/// map; the request is not mutated, so concurrent callers need no
/// coordination.
pub fn to_headers(request: &Request) -> HashMap<String, String> {
    let mut headers = HashMap::with_capacity(request.headers.len());
    for header in &request.headers {
        headers.insert(header.name.clone(), header.value.clone());
    }
    headers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::{Expect, Header};

    fn request_with(headers: Vec<(&str, &str)>) -> Request {
        Request {
            url: "https://example.com".to_string(),
            method: "GET".to_string(),
            headers: headers
                .into_iter()
                .map(|(name, value)| Header {
                    name: name.to_string(),
                    value: value.to_string(),
                })
                .collect(),
            expect: Expect::String,
            body: serde_json::Value::Null,
        }
    }

    #[test]
    fn empty_sequence_yields_empty_map() {
        assert!(to_headers(&request_with(vec![])).is_empty());
    }

    #[test]
    fn distinct_names_map_one_to_one() {
        let request = request_with(vec![
            ("accept", "application/json"),
            ("x-trace", "abc123"),
            ("authorization", "Bearer t"),
        ]);
        let headers = to_headers(&request);
        assert_eq!(headers.len(), 3);
        assert_eq!(headers["accept"], "application/json");
        assert_eq!(headers["x-trace"], "abc123");
        assert_eq!(headers["authorization"], "Bearer t");
    }

    #[test]
    fn later_duplicate_wins() {
        let request = request_with(vec![("A", "1"), ("B", "2"), ("A", "3")]);
        let headers = to_headers(&request);
        assert_eq!(headers.len(), 2);
        assert_eq!(headers["A"], "3");
        assert_eq!(headers["B"], "2");
    }

    #[test]
    fn empty_names_and_values_pass_through() {
        let request = request_with(vec![("", "anonymous"), ("x-blank", "")]);
        let headers = to_headers(&request);
        assert_eq!(headers[""], "anonymous");
        assert_eq!(headers["x-blank"], "");
    }

    #[test]
    fn reinvocation_yields_equal_maps() {
        let request = request_with(vec![("A", "1"), ("A", "2"), ("B", "3")]);
        assert_eq!(to_headers(&request), to_headers(&request));
    }

    #[test]
    fn input_sequence_is_untouched() {
        let request = request_with(vec![("A", "1"), ("B", "2"), ("A", "3")]);
        let before = request.headers.clone();
        let _ = to_headers(&request);
        assert_eq!(request.headers, before);
    }
}
