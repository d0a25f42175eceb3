//! Public SDK for the storefront edge platform.
//!
//! Re-exports the platform crates a workload needs:
//!
//! ```ignore
//! use store_sdk::store_core::{Method, RequestContext};
//! use store_sdk::store_data::ApiClient;
//!
//! let ctx = RequestContext::new(Method::Get, path);
//! let client = ApiClient::new().with_base_url(API_BASE);
//! ```

pub use store_auth;
pub use store_core;
pub use store_data;
pub use store_observability;
pub use store_render;

/// Prelude for convenient imports.
///
/// `store_core::Method` and `store_data::Method` would collide under glob
/// re-exports, so the request-side names are listed explicitly.
pub mod prelude {
    pub use store_auth::{AuthError, CookieTokenSource, StaticTokenSource, TokenSource, AUTH_COOKIE};
    pub use store_core::{
        LifecyclePhase, Method, NavigationMode, Navigator, PendingNavigation, RequestContext,
        RequestId, TimingContext, WorkloadError,
    };
    pub use store_data::{ApiClient, FetchError, Response};
    pub use store_observability::{
        LogFormat, LogLevel, MetricsCollector, RequestMetrics, StructuredLogger,
    };
    pub use store_render::{HeadContent, Shell, StreamingSink};
}
