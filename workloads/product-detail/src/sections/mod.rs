//! Section renderers for the product detail page.

mod detail;
mod similar;
mod status;

pub use detail::*;
pub use similar::*;
pub use status::*;

/// Escape text for interpolation into HTML.
pub(crate) fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::escape_html;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape_html(r#"<b a="1">&'x'</b>"#),
            "&lt;b a=&quot;1&quot;&gt;&amp;&#39;x&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(escape_html("Classic Denim Shirt"), "Classic Denim Shirt");
    }
}
