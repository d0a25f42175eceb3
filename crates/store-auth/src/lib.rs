//! Credential access for storefront workloads.
//!
//! Workloads never read tokens from ambient storage. They take a
//! [`TokenSource`] capability and ask it for the bearer token at the moment
//! a request is issued, so the freshest stored credential is always used.

mod cookie;
mod error;
mod token;

pub use cookie::*;
pub use error::*;
pub use token::*;
