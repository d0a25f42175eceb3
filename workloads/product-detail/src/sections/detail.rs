//! Product detail section renderer.

use crate::data::ProductRecord;

use super::{escape_html, render_similar_list};

/// Render the success view: product detail plus the similar-products list.
///
/// The quantity controls carry the current selection in the URL so the
/// re-rendered page picks it up; the add-to-cart control is displayed but
/// wired to nothing, since cart logic lives outside this workload.
pub fn render_detail(
    product: &ProductRecord,
    similar_products: &[ProductRecord],
    quantity: u32,
    product_id: &str,
) -> String {
    let id = escape_html(product_id);

    format!(
        r#"<section class="product-detail" data-section="detail">
    <div class="product-main">
        <img src="{image}" alt="product" class="product-image">
        <div class="product-info">
            <h1 class="product-title">{title}</h1>
            <p class="product-price">{price}</p>
            <div class="product-rating-row">
                <span class="rating-badge">{rating} &#9733;</span>
                <p class="product-reviews">{reviews} Reviews</p>
            </div>
            <p class="product-description">{description}</p>
            <p class="product-meta"><span class="meta-label">Available:</span> {availability}</p>
            <p class="product-meta"><span class="meta-label">Brand:</span> {brand}</p>
            <p class="product-meta"><span class="meta-label">Style:</span> {style}</p>
            <hr class="detail-rule">
            <div class="quantity-controls">
                <a class="btn-quantity" data-testid="minus" href="/products/{id}?qty={quantity}&amp;step=down">&#8722;</a>
                <p class="quantity-value">{quantity}</p>
                <a class="btn-quantity" data-testid="plus" href="/products/{id}?qty={quantity}&amp;step=up">&#43;</a>
            </div>
            <button type="button" class="btn-add-to-cart">ADD TO CART</button>
        </div>
    </div>
    {similar}
</section>"#,
        image = escape_html(&product.image_url),
        title = escape_html(&product.title),
        price = product.price_display(),
        rating = product.rating,
        reviews = product.total_reviews,
        description = escape_html(&product.description),
        availability = escape_html(&product.availability),
        brand = escape_html(&product.brand),
        style = escape_html(&product.style),
        id = id,
        quantity = quantity,
        similar = render_similar_list(similar_products)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product() -> ProductRecord {
        ProductRecord {
            id: "16".to_string(),
            title: "Classic Denim Shirt".to_string(),
            brand: "Denim".to_string(),
            price: 999,
            rating: 4.3,
            total_reviews: 1230,
            availability: "In Stock".to_string(),
            description: "A timeless staple.".to_string(),
            style: "Casual".to_string(),
            image_url: "https://img.example/16.png".to_string(),
        }
    }

    #[test]
    fn detail_shows_all_display_fields() {
        let html = render_detail(&product(), &[], 1, "16");
        assert!(html.contains("Classic Denim Shirt"));
        assert!(html.contains("RS 999/-"));
        assert!(html.contains("4.3 &#9733;"));
        assert!(html.contains("1230 Reviews"));
        assert!(html.contains("Available:</span> In Stock"));
        assert!(html.contains("Brand:</span> Denim"));
        assert!(html.contains("Style:</span> Casual"));
    }

    #[test]
    fn quantity_controls_carry_current_selection() {
        let html = render_detail(&product(), &[], 3, "16");
        assert!(html.contains(r#"data-testid="minus""#));
        assert!(html.contains(r#"data-testid="plus""#));
        assert!(html.contains("/products/16?qty=3&amp;step=down"));
        assert!(html.contains("/products/16?qty=3&amp;step=up"));
        assert!(html.contains(r#"<p class="quantity-value">3</p>"#));
    }

    #[test]
    fn add_to_cart_is_a_plain_control() {
        let html = render_detail(&product(), &[], 1, "16");
        // Rendered, but no form/action wiring.
        assert!(html.contains("ADD TO CART"));
        assert!(!html.contains("<form"));
    }

    #[test]
    fn similar_list_is_embedded() {
        let html = render_detail(&product(), &[], 1, "16");
        assert!(html.contains("Similar Products"));
    }
}
