//! Data models for the product detail page.

mod product;

pub use product::*;
