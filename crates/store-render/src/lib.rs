//! Shell-first HTML streaming for storefront workloads.
//!
//! The page shell is flushed before any data-dependent content, so the
//! client paints immediately while fetches are still in flight:
//! - `Shell` / `HeadContent` - Shell template abstraction
//! - `StreamingSink` - Platform-controlled streaming, shell enforced first

mod shell;
mod sink;

pub use shell::*;
pub use sink::*;
