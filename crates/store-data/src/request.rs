//! HTTP request builder.

use std::collections::HashMap;

use crate::{FetchError, Response};

/// HTTP methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
}

impl Method {
    /// Convert to the HTTP method token.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
            Method::Head => "HEAD",
            Method::Options => "OPTIONS",
        }
    }
}

/// A builder for constructing and sending HTTP requests.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    #[allow(dead_code)] // Read in the wasm32 send path
    method: Method,
    url: String,
    headers: HashMap<String, String>,
}

impl RequestBuilder {
    /// Create a new request builder.
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HashMap::new(),
        }
    }

    /// Add a header to the request.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Add a bearer token authorization header.
    pub fn bearer_auth(self, token: impl AsRef<str>) -> Self {
        self.header("Authorization", format!("Bearer {}", token.as_ref()))
    }

    /// Set the Accept header.
    pub fn accept(self, content_type: impl Into<String>) -> Self {
        self.header("Accept", content_type)
    }

    /// The fully-resolved request URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Look up a header set on this request.
    pub fn header_value(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(|v| v.as_str())
    }

    /// Send the request and return the response.
    #[cfg(target_arch = "wasm32")]
    pub async fn send(self) -> Result<Response, FetchError> {
        use spin_sdk::http::Method as SpinMethod;

        let method = match self.method {
            Method::Get => SpinMethod::Get,
            Method::Post => SpinMethod::Post,
            Method::Put => SpinMethod::Put,
            Method::Patch => SpinMethod::Patch,
            Method::Delete => SpinMethod::Delete,
            Method::Head => SpinMethod::Head,
            Method::Options => SpinMethod::Options,
        };

        let mut builder = spin_sdk::http::Request::builder();
        builder.method(method).uri(self.url.as_str());
        for (key, value) in &self.headers {
            builder.header(key.as_str(), value.as_str());
        }
        let request = builder.build();

        let response: spin_sdk::http::Response = spin_sdk::http::send(request)
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        let status = *response.status();
        let headers: HashMap<String, String> = response
            .headers()
            .map(|(k, v)| (k.to_string(), v.as_str().unwrap_or("").to_string()))
            .collect();
        let body = response.into_body();

        Ok(Response::new(status, headers, body).with_url(self.url))
    }

    /// Send the request and return the response (non-WASM stub).
    ///
    /// Off-target builds have no outbound HTTP host; tests construct
    /// [`Response`] values directly instead.
    #[cfg(not(target_arch = "wasm32"))]
    pub async fn send(self) -> Result<Response, FetchError> {
        Ok(Response::new(200, HashMap::new(), Vec::new()).with_url(self.url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_auth_formats_header() {
        let req = RequestBuilder::new(Method::Get, "https://api.example.com/p")
            .bearer_auth("tok123");
        assert_eq!(req.header_value("Authorization"), Some("Bearer tok123"));
    }

    #[test]
    fn method_tokens() {
        assert_eq!(Method::Get.as_str(), "GET");
        assert_eq!(Method::Head.as_str(), "HEAD");
    }
}
