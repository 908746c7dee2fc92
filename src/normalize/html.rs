//! Markup-to-text extraction.

use scraper::Html;

/// Converts an HTML string into plain text.
pub trait TextExtractor {
    fn extract_text(&self, html: &str) -> String;
}

/// Strips tags with html5ever (via `scraper`) and concatenates every text
/// node in document order. Entities are decoded; whitespace is kept as
/// authored.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlTextExtractor;

impl TextExtractor for HtmlTextExtractor {
    fn extract_text(&self, html: &str) -> String {
        let fragment = Html::parse_fragment(html);

        // html5ever records how it recovered from sloppy markup. Those notes
        // are not failures for this extraction and stay scoped to this call.
        if !fragment.errors.is_empty() {
            log::trace!(
                "Discarded {} markup recovery notes while extracting text",
                fragment.errors.len()
            );
        }

        fragment.root_element().text().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(html: &str) -> String {
        HtmlTextExtractor.extract_text(html)
    }

    #[test]
    fn test_strips_tags() {
        assert_eq!(extract("<p>Hello <strong>world</strong></p>"), "Hello world");
    }

    #[test]
    fn test_decodes_entities() {
        assert_eq!(extract("<p>Fish &amp; Chips &#8211; daily</p>"), "Fish & Chips \u{2013} daily");
    }

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(extract("no markup here"), "no markup here");
    }

    #[test]
    fn test_unclosed_markup_is_recovered() {
        assert_eq!(extract("<div><p>open <em>tags"), "open tags");
    }

    #[test]
    fn test_comments_are_dropped() {
        assert_eq!(
            extract("<!-- wp:paragraph --><p>Block</p><!-- /wp:paragraph -->"),
            "Block"
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(extract(""), "");
    }
}
