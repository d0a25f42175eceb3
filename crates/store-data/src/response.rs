//! HTTP response handling.

use std::collections::HashMap;

use http::StatusCode;
use serde::de::DeserializeOwned;

use crate::FetchError;

/// An HTTP response.
#[derive(Debug, Clone)]
pub struct Response {
    /// The HTTP status code.
    pub status: u16,
    /// The response headers.
    pub headers: HashMap<String, String>,
    /// The response body.
    pub body: Vec<u8>,
    /// URL the request resolved against, for error context.
    url: String,
}

impl Response {
    /// Create a new response.
    pub fn new(status: u16, headers: HashMap<String, String>, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
            url: String::new(),
        }
    }

    /// Record the request URL for error context.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    fn canonical_status(&self) -> Option<StatusCode> {
        StatusCode::from_u16(self.status).ok()
    }

    /// Check if the response was successful (2xx status).
    pub fn is_success(&self) -> bool {
        self.canonical_status().is_some_and(|s| s.is_success())
    }

    /// Check if the response was a client error (4xx status).
    pub fn is_client_error(&self) -> bool {
        self.canonical_status().is_some_and(|s| s.is_client_error())
    }

    /// Check if the response was a server error (5xx status).
    pub fn is_server_error(&self) -> bool {
        self.canonical_status().is_some_and(|s| s.is_server_error())
    }

    /// Get the response body as text.
    pub fn text(&self) -> Result<String, FetchError> {
        String::from_utf8(self.body.clone())
            .map_err(|e| FetchError::Parse(format!("Invalid UTF-8: {}", e)))
    }

    /// Parse the response body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, FetchError> {
        serde_json::from_slice(&self.body).map_err(|e| FetchError::Parse(e.to_string()))
    }

    /// Get a header value (case-insensitive).
    pub fn header(&self, key: &str) -> Option<&str> {
        let key_lower = key.to_lowercase();
        self.headers
            .iter()
            .find(|(k, _)| k.to_lowercase() == key_lower)
            .map(|(_, v)| v.as_str())
    }

    /// Convert to a Result, returning an error for non-2xx status codes.
    pub fn error_for_status(self) -> Result<Self, FetchError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(FetchError::Http {
                status: self.status,
                url: self.url,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_response(status: u16, body: &[u8]) -> Response {
        Response::new(status, HashMap::new(), body.to_vec())
    }

    #[test]
    fn success_range() {
        assert!(make_response(200, b"").is_success());
        assert!(make_response(204, b"").is_success());
        assert!(!make_response(199, b"").is_success());
        assert!(!make_response(300, b"").is_success());
    }

    #[test]
    fn client_error_range() {
        assert!(make_response(404, b"").is_client_error());
        assert!(make_response(401, b"").is_client_error());
        assert!(!make_response(500, b"").is_client_error());
    }

    #[test]
    fn server_error_range() {
        assert!(make_response(503, b"").is_server_error());
        assert!(!make_response(404, b"").is_server_error());
    }

    #[test]
    fn text_decodes_utf8() {
        assert_eq!(make_response(200, b"ok").text().unwrap(), "ok");
        assert!(make_response(200, &[0xff, 0xfe]).text().is_err());
    }

    #[test]
    fn json_decodes_body() {
        use serde::Deserialize;

        #[derive(Deserialize, Debug, PartialEq)]
        struct Data {
            value: i32,
        }

        let data: Data = make_response(200, br#"{"value": 42}"#).json().unwrap();
        assert_eq!(data, Data { value: 42 });

        let bad: Result<Data, _> = make_response(200, b"not json").json();
        assert!(bad.is_err());
    }

    #[test]
    fn header_lookup_is_case_insensitive() {
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), "text/html".to_string());
        let resp = Response::new(200, headers, Vec::new());
        assert_eq!(resp.header("content-type"), Some("text/html"));
        assert_eq!(resp.header("X-Missing"), None);
    }

    #[test]
    fn error_for_status_carries_url() {
        let resp = make_response(404, b"").with_url("https://api.example.com/p/9");
        match resp.error_for_status() {
            Err(FetchError::Http { status, url }) => {
                assert_eq!(status, 404);
                assert_eq!(url, "https://api.example.com/p/9");
            }
            other => panic!("expected Http error, got {:?}", other.map(|_| ())),
        }
    }
}
