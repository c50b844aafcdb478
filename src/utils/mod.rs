// src/utils/mod.rs

//! Utility functions and helpers.

pub mod http;

use unicode_segmentation::UnicodeSegmentation;
use url::Url;

/// Whether a string is a well-formed http(s) URL.
pub fn is_http_url(s: &str) -> bool {
    Url::parse(s)
        .map(|u| matches!(u.scheme(), "http" | "https"))
        .unwrap_or(false)
}

/// Truncate a string to at most `max` grapheme clusters, appending an
/// ellipsis when anything was cut.
pub fn truncate_graphemes(s: &str, max: usize) -> String {
    let graphemes: Vec<&str> = s.graphemes(true).collect();
    if graphemes.len() <= max {
        return s.to_string();
    }
    let mut out: String = graphemes[..max.saturating_sub(1)].concat();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_and_https_are_urls() {
        assert!(is_http_url("https://example.com/apply?id=1"));
        assert!(is_http_url("http://example.com"));
    }

    #[test]
    fn placeholders_and_other_schemes_are_not() {
        assert!(!is_http_url("No link available"));
        assert!(!is_http_url("ftp://example.com/file"));
        assert!(!is_http_url(""));
    }

    #[test]
    fn short_strings_pass_through() {
        assert_eq!(truncate_graphemes("hello", 10), "hello");
        assert_eq!(truncate_graphemes("hello", 5), "hello");
    }

    #[test]
    fn long_strings_get_ellipsis() {
        let out = truncate_graphemes("abcdefgh", 5);
        assert_eq!(out, "abcd…");
    }

    #[test]
    fn truncation_respects_grapheme_boundaries() {
        // Family emoji is one grapheme built from several code points.
        let family = "👨‍👩‍👧‍👦";
        let s = family.repeat(4);
        let out = truncate_graphemes(&s, 3);
        assert_eq!(out, format!("{}{}…", family, family));
    }
}
