//! Outbound HTTP client for storefront workloads.
//!
//! A thin, ergonomic wrapper over Spin's outbound HTTP with automatic JSON
//! handling. Non-WASM builds get a stub transport so unit tests run
//! off-target.
//!
//! # Example
//!
//! ```rust,ignore
//! use store_data::ApiClient;
//!
//! let client = ApiClient::new().with_base_url("https://api.example.com");
//! let response = client
//!     .get("/products/16")
//!     .bearer_auth(token)
//!     .send()
//!     .await?;
//! ```

mod error;
mod request;
mod response;

pub use error::FetchError;
pub use request::{Method, RequestBuilder};
pub use response::Response;

use std::collections::HashMap;

/// HTTP client for making outbound requests.
pub struct ApiClient {
    base_url: Option<String>,
    default_headers: HashMap<String, String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    /// Create a new HTTP client.
    pub fn new() -> Self {
        Self {
            base_url: None,
            default_headers: HashMap::new(),
        }
    }

    /// Set a base URL that relative request paths are joined onto.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Add a header included in every request from this client.
    pub fn with_default_header(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    /// Create a GET request.
    pub fn get(&self, url: impl Into<String>) -> RequestBuilder {
        self.request(Method::Get, url)
    }

    /// Create a request with an explicit method.
    pub fn request(&self, method: Method, url: impl Into<String>) -> RequestBuilder {
        let url = url.into();
        let full_url = match &self.base_url {
            Some(base) if !url.starts_with("http://") && !url.starts_with("https://") => {
                format!("{}{}", base.trim_end_matches('/'), url)
            }
            _ => url,
        };

        let mut builder = RequestBuilder::new(method, full_url);
        for (key, value) in &self.default_headers {
            builder = builder.header(key.clone(), value.clone());
        }
        builder
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_joined_onto_relative_paths() {
        let client = ApiClient::new().with_base_url("https://api.example.com/");
        let req = client.get("/products/16");
        assert_eq!(req.url(), "https://api.example.com/products/16");
    }

    #[test]
    fn absolute_urls_bypass_base() {
        let client = ApiClient::new().with_base_url("https://api.example.com");
        let req = client.get("https://other.example.com/x");
        assert_eq!(req.url(), "https://other.example.com/x");
    }

    #[test]
    fn default_headers_are_applied() {
        let client = ApiClient::new().with_default_header("Accept", "application/json");
        let req = client.get("https://api.example.com/p");
        assert_eq!(req.header_value("Accept"), Some("application/json"));
    }
}
