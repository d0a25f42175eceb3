//! Bearer token sources.

use crate::cookie::cookie_value;
use crate::AuthError;

/// Cookie that carries the storefront session's bearer token.
pub const AUTH_COOKIE: &str = "jwt_token";

/// Capability for reading the current bearer token.
///
/// Implementations must read the backing store on every call rather than
/// caching the value, so a token rotated mid-session is picked up by the
/// next fetch.
pub trait TokenSource {
    /// The bearer token to attach to outbound API requests.
    fn bearer_token(&self) -> Result<String, AuthError>;
}

/// Token source backed by the request's `Cookie` header.
///
/// Holds the raw header and parses it on each lookup.
#[derive(Debug, Clone)]
pub struct CookieTokenSource {
    cookie_header: Option<String>,
}

impl CookieTokenSource {
    /// Create from the raw `Cookie` header of the incoming request, if any.
    pub fn from_header(header: Option<&str>) -> Self {
        Self {
            cookie_header: header.map(|h| h.to_string()),
        }
    }
}

impl TokenSource for CookieTokenSource {
    fn bearer_token(&self) -> Result<String, AuthError> {
        self.cookie_header
            .as_deref()
            .and_then(|h| cookie_value(h, AUTH_COOKIE))
            .filter(|v| !v.is_empty())
            .map(|v| v.to_string())
            .ok_or_else(|| AuthError::MissingToken(AUTH_COOKIE.to_string()))
    }
}

/// Fixed token source for tests and local development.
#[derive(Debug, Clone)]
pub struct StaticTokenSource(pub String);

impl TokenSource for StaticTokenSource {
    fn bearer_token(&self) -> Result<String, AuthError> {
        Ok(self.0.clone())
    }
}
