// src/output/paths.rs
//! Pure functions for output filename generation.

use crate::config::OutputFormat;
use crate::types::ValidatedUrl;

/// Default file name for a site's documents, e.g. `wp_docs_example.com.json`.
pub fn default_output_filename(site: &ValidatedUrl, format: OutputFormat) -> String {
    format!(
        "wp_docs_{}.{}",
        sanitize_filename(site.host()),
        format.extension()
    )
}

/// Sanitizes a string to be safe for use as a filename.
pub fn sanitize_filename(name: &str) -> String {
    let mut safe_name = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect::<String>()
        .trim()
        .trim_matches('.')
        .to_string();

    if safe_name.len() > 100 {
        let mut cut = 100;
        while !safe_name.is_char_boundary(cut) {
            cut -= 1;
        }
        safe_name.truncate(cut);
    }

    if safe_name.is_empty() {
        safe_name = "unnamed".to_string();
    }

    safe_name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("Hello/World"), "Hello_World");
        assert_eq!(sanitize_filename("host:8080"), "host_8080");
        assert_eq!(sanitize_filename("   spaces   "), "spaces");
        assert_eq!(sanitize_filename("...dots..."), "dots");
        assert_eq!(sanitize_filename(""), "unnamed");
    }

    #[test]
    fn test_sanitize_respects_char_boundaries() {
        let long = "é".repeat(80);
        let safe = sanitize_filename(&long);
        assert!(safe.len() <= 100);
        assert_eq!(safe.chars().count(), 50);
    }

    #[test]
    fn test_default_output_filename() {
        let site = ValidatedUrl::parse("https://blog.example.com/news/").unwrap();
        assert_eq!(
            default_output_filename(&site, OutputFormat::Json),
            "wp_docs_blog.example.com.json"
        );
        assert_eq!(
            default_output_filename(&site, OutputFormat::Jsonl),
            "wp_docs_blog.example.com.jsonl"
        );
    }
}
