//! Core abstractions for the storefront edge platform.
//!
//! This crate provides the fundamental types shared by every workload:
//! - `RequestContext` - Typed request parameters
//! - `TimingContext` / `LifecyclePhase` - Request lifecycle tracking
//! - `Navigator` - Navigation capability for redirect-style transitions
//! - `WorkloadError` - Platform error type

mod context;
mod error;
mod lifecycle;
mod navigation;

pub use context::*;
pub use error::*;
pub use lifecycle::*;
pub use navigation::*;
