//! Structured logging and request metrics for storefront workloads.
//!
//! One logger and one metrics collector per request, both carrying the
//! request ID for correlation:
//! - `StructuredLogger` - Leveled, structured logs with fluent field builders
//! - `MetricsCollector` - Shell/section timings finalized into `RequestMetrics`

mod logging;
mod metrics;

pub use logging::*;
pub use metrics::*;

// Re-export for convenience
pub use store_core::{RequestId, TimingContext};
