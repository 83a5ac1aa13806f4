//! HTTP response types for the Twilio API SDK.
//!
//! This module provides the [`HttpResponse`] type for parsing and accessing
//! API response data.

use std::collections::HashMap;

/// An HTTP response from the Twilio API.
///
/// Contains the response status code, headers, parsed JSON body, and the
/// Twilio-specific header values the client cares about.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body.
    pub body: serde_json::Value,
    /// Seconds to wait before retrying (from `Retry-After` header).
    pub retry_request_after: Option<f64>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse` with automatic header parsing.
    ///
    /// The `Retry-After` header, when present, is parsed into
    /// `retry_request_after` for the retry loop.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: serde_json::Value) -> Self {
        let retry_request_after = headers
            .get("retry-after")
            .and_then(|values| values.first())
            .and_then(|value| value.parse::<f64>().ok());

        Self {
            code,
            headers,
            body,
            retry_request_after,
        }
    }

    /// Returns `true` if the response has a 2xx status code.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code < 300
    }

    /// Returns the request ID from the `Twilio-Request-Id` header, if present.
    ///
    /// Useful for support tickets and debugging.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.headers
            .get("twilio-request-id")
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn headers_with(key: &str, value: &str) -> HashMap<String, Vec<String>> {
        let mut headers = HashMap::new();
        headers.insert(key.to_string(), vec![value.to_string()]);
        headers
    }

    #[test]
    fn test_is_ok_for_2xx_codes() {
        for code in [200, 201, 204] {
            let response = HttpResponse::new(code, HashMap::new(), json!({}));
            assert!(response.is_ok(), "{code} should be ok");
        }
    }

    #[test]
    fn test_is_not_ok_for_error_codes() {
        for code in [301, 400, 404, 429, 500] {
            let response = HttpResponse::new(code, HashMap::new(), json!({}));
            assert!(!response.is_ok(), "{code} should not be ok");
        }
    }

    #[test]
    fn test_request_id_parsed_from_header() {
        let response = HttpResponse::new(
            200,
            headers_with("twilio-request-id", "RQaaaabbbb"),
            json!({}),
        );
        assert_eq!(response.request_id(), Some("RQaaaabbbb"));
    }

    #[test]
    fn test_request_id_absent() {
        let response = HttpResponse::new(200, HashMap::new(), json!({}));
        assert_eq!(response.request_id(), None);
    }

    #[test]
    fn test_retry_after_parsed_as_seconds() {
        let response = HttpResponse::new(429, headers_with("retry-after", "2.5"), json!({}));
        assert_eq!(response.retry_request_after, Some(2.5));
    }

    #[test]
    fn test_retry_after_unparseable_is_none() {
        let response =
            HttpResponse::new(429, headers_with("retry-after", "Wed, 21 Oct"), json!({}));
        assert_eq!(response.retry_request_after, None);
    }

    #[test]
    fn test_body_preserved() {
        let response = HttpResponse::new(200, HashMap::new(), json!({"sid": "AP123"}));
        assert_eq!(response.body["sid"], "AP123");
    }
}
