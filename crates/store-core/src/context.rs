//! Request context with typed parameters.

use std::collections::HashMap;

use crate::lifecycle::TimingContext;

/// Unique request identifier for tracing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestId(pub String);

impl RequestId {
    /// Generate a new request ID.
    pub fn generate() -> Self {
        let id = format!(
            "{:x}-{:x}-{:x}",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos(),
            rand_simple(),
            rand_simple()
        );
        Self(id)
    }

    /// Create from an existing ID string.
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

fn rand_simple() -> u32 {
    // Linear congruential step, good enough for trace IDs in WASM
    static mut SEED: u32 = 643_781;
    unsafe {
        SEED = SEED.wrapping_mul(1103515245).wrapping_add(12345);
        SEED
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Query string parameters.
pub type QueryParams = HashMap<String, String>;

/// HTTP headers.
pub type Headers = HashMap<String, String>;

/// HTTP method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Head,
    Options,
}

/// Typed request context passed to workload handlers.
#[derive(Debug)]
pub struct RequestContext {
    /// Unique request identifier.
    pub request_id: RequestId,
    /// HTTP method.
    pub method: Method,
    /// Request path without the query string.
    pub path: String,
    /// Query string parameters.
    pub query: QueryParams,
    /// HTTP headers.
    pub headers: Headers,
    /// Timing context for observability.
    pub timing: TimingContext,
}

impl RequestContext {
    /// Create a new request context from a path, splitting off the query string.
    pub fn new(method: Method, path_with_query: impl Into<String>) -> Self {
        let raw = path_with_query.into();
        let (path, query) = match raw.split_once('?') {
            Some((p, q)) => (p.to_string(), parse_query(q)),
            None => (raw, HashMap::new()),
        };
        Self {
            request_id: RequestId::generate(),
            method,
            path,
            query,
            headers: HashMap::new(),
            timing: TimingContext::new(),
        }
    }

    /// Attach headers parsed from the incoming request.
    pub fn with_headers(mut self, headers: Headers) -> Self {
        self.headers = headers;
        self
    }

    /// Get a query parameter by name.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query.get(name).map(|s| s.as_str())
    }

    /// Get a header value by name (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        let name_lower = name.to_lowercase();
        self.headers
            .iter()
            .find(|(k, _)| k.to_lowercase() == name_lower)
            .map(|(_, v)| v.as_str())
    }
}

/// Parse a query string into a parameter map. Keys without `=` map to "".
pub fn parse_query(query: &str) -> QueryParams {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((k, v)) => (k.to_string(), v.to_string()),
            None => (pair.to_string(), String::new()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_splits_query_from_path() {
        let ctx = RequestContext::new(Method::Get, "/products/16?qty=3&step=up");
        assert_eq!(ctx.path, "/products/16");
        assert_eq!(ctx.query_param("qty"), Some("3"));
        assert_eq!(ctx.query_param("step"), Some("up"));
        assert_eq!(ctx.query_param("missing"), None);
    }

    #[test]
    fn context_without_query() {
        let ctx = RequestContext::new(Method::Get, "/products/16");
        assert_eq!(ctx.path, "/products/16");
        assert!(ctx.query.is_empty());
    }

    #[test]
    fn header_lookup_is_case_insensitive() {
        let mut headers = HashMap::new();
        headers.insert("Cookie".to_string(), "jwt_token=abc".to_string());
        let ctx = RequestContext::new(Method::Get, "/").with_headers(headers);
        assert_eq!(ctx.header("cookie"), Some("jwt_token=abc"));
        assert_eq!(ctx.header("COOKIE"), Some("jwt_token=abc"));
    }

    #[test]
    fn request_ids_are_unique() {
        assert_ne!(RequestId::generate(), RequestId::generate());
    }
}
