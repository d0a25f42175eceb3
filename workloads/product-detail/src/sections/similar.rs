//! Similar-product row renderer.

use crate::data::ProductRecord;

use super::escape_html;

/// Render the similar-products list with its heading.
pub fn render_similar_list(products: &[ProductRecord]) -> String {
    if products.is_empty() {
        return r#"<div class="similar-products" data-section="similar">
    <h2 class="similar-heading">Similar Products</h2>
    <p class="similar-empty">No similar products for this item.</p>
</div>"#
            .to_string();
    }

    let items: String = products.iter().map(render_similar_item).collect();

    format!(
        r#"<div class="similar-products" data-section="similar">
    <h2 class="similar-heading">Similar Products</h2>
    <ul class="similar-list">
        {items}
    </ul>
</div>"#,
        items = items
    )
}

/// Render one similar-product summary row.
///
/// Total over any well-formed record: image, title, brand line, price,
/// rating badge. No state, no failure path.
pub fn render_similar_item(product: &ProductRecord) -> String {
    format!(
        r#"<li class="similar-product-item">
        <a href="/products/{id}" class="similar-product-link">
            <img src="{image}" alt="similar product" class="similar-product-img">
            <p class="similar-product-title">{title}</p>
            <p class="similar-product-brand">by {brand}</p>
            <div class="similar-product-row">
                <p class="similar-product-price">{price}</p>
                <span class="rating-badge">{rating} &#9733;</span>
            </div>
        </a>
    </li>"#,
        id = escape_html(&product.id),
        image = escape_html(&product.image_url),
        title = escape_html(&product.title),
        brand = escape_html(&product.brand),
        price = product.price_display(),
        rating = product.rating
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, title: &str) -> ProductRecord {
        ProductRecord {
            id: id.to_string(),
            title: title.to_string(),
            brand: "Denim".to_string(),
            price: 800,
            rating: 4.0,
            total_reviews: 40,
            availability: "In Stock".to_string(),
            description: "d".to_string(),
            style: "s".to_string(),
            image_url: "https://img.example/17.png".to_string(),
        }
    }

    #[test]
    fn row_shows_summary_fields() {
        let html = render_similar_item(&record("17", "Shirt II"));
        assert!(html.contains("Shirt II"));
        assert!(html.contains("by Denim"));
        assert!(html.contains("RS 800/-"));
        assert!(html.contains("4 &#9733;"));
        assert!(html.contains(r#"href="/products/17""#));
    }

    #[test]
    fn row_escapes_text_fields() {
        let html = render_similar_item(&record("17", "<script>x</script>"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn list_keeps_input_order() {
        let html = render_similar_list(&[record("17", "First"), record("18", "Second")]);
        let first = html.find("First").unwrap();
        let second = html.find("Second").unwrap();
        assert!(first < second);
        assert!(html.contains("Similar Products"));
    }

    #[test]
    fn empty_list_renders_placeholder() {
        let html = render_similar_list(&[]);
        assert!(html.contains("No similar products"));
    }
}
