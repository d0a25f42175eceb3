//! Loading and failure view renderers.

use super::escape_html;

/// Render the loading indicator, flushed before the product fetch resolves.
pub fn render_loading() -> String {
    r#"<div class="detail-status" data-section="status" data-testid="loader">
    <div class="spinner"></div>
    <p class="loading-text">Loading product</p>
</div>"#
        .to_string()
}

/// Style fragment that hides the loading indicator once a terminal view has
/// been streamed after it.
pub fn clear_loading() -> String {
    r#"<style>[data-section="status"]{display:none}</style>"#.to_string()
}

/// Render the not-found view with its continue-shopping action.
pub fn render_not_found(product_id: &str) -> String {
    format!(
        r#"<section class="detail-failure" data-section="detail">
    <h1 class="failure-heading">Product Not Found</h1>
    <p class="failure-text">We could not find the product you were looking for.</p>
    <a class="btn-continue-shopping" href="{href}">Continue Shopping</a>
</section>"#,
        href = continue_shopping_href(product_id)
    )
}

/// Render the error view for non-404 failures (bad gateway, expired session,
/// unparsable body). Shares the continue-shopping escape hatch.
pub fn render_failed(product_id: &str) -> String {
    format!(
        r#"<section class="detail-failure" data-section="detail">
    <h1 class="failure-heading">Something went wrong</h1>
    <p class="failure-text">We could not load this product right now. Please try again.</p>
    <a class="btn-continue-shopping" href="{href}">Continue Shopping</a>
</section>"#,
        href = continue_shopping_href(product_id)
    )
}

fn continue_shopping_href(product_id: &str) -> String {
    format!("/products/{}/continue-shopping", escape_html(product_id))
}
