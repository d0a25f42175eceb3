//! Product Detail Page workload.
//!
//! Streams the page shell and loading view immediately, fetches the routed
//! product from the catalog API with the session's bearer token, then
//! streams the view matching the outcome: product detail with similar
//! products, not-found, or error.

mod data;
mod sections;
mod view;

#[cfg(target_arch = "wasm32")]
mod handler;

use store_sdk::store_auth::TokenSource;
use store_sdk::store_data::{ApiClient, Response};

/// Catalog API origin.
pub(crate) const API_BASE: &str = "https://api.trendline.shop";

/// Routes this workload serves.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Route<'a> {
    /// `/products/{id}` - the detail page.
    Detail(&'a str),
    /// `/products/{id}/continue-shopping` - replace-navigation to the listing.
    ContinueShopping(&'a str),
    /// Anything else.
    Unmatched,
}

/// Match a request path (query already stripped) against the served routes.
pub(crate) fn route(path: &str) -> Route<'_> {
    let Some(rest) = path.strip_prefix("/products/") else {
        return Route::Unmatched;
    };
    if rest.is_empty() {
        return Route::Unmatched;
    }
    match rest.strip_suffix("/continue-shopping") {
        Some(id) if !id.is_empty() && !id.contains('/') => Route::ContinueShopping(id),
        _ if !rest.contains('/') => Route::Detail(rest),
        _ => Route::Unmatched,
    }
}

/// Fetch the product detail from the catalog API.
///
/// The bearer token is read from the credential source at call time, so a
/// token rotated between requests is always the one sent.
pub(crate) async fn fetch_product_detail(
    client: &ApiClient,
    tokens: &dyn TokenSource,
    product_id: &str,
) -> anyhow::Result<Response> {
    let token = tokens.bearer_token()?;
    let response = client
        .get(format!("/products/{}", product_id))
        .bearer_auth(token)
        .accept("application/json")
        .send()
        .await?;
    Ok(response)
}
