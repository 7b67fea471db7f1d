//! URL helper functions

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::config::SiteConfig;

/// Characters left as-is by JavaScript's `encodeURIComponent`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Encode a query parameter value
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// URL of the generated social preview image for a post
///
/// # Examples
/// ```ignore
/// og_image_url(&config, "Hello World", "2024-01-15")
/// // -> https://www.indragie.com/og?title=Hello%20World&type=blog&date=2024-01-15&author=...
/// ```
pub fn og_image_url(config: &SiteConfig, title: &str, date: &str) -> String {
    format!(
        "{}/og?title={}&type=blog&date={}&author={}",
        config.url.trim_end_matches('/'),
        encode_component(title),
        encode_component(date),
        encode_component(&config.author)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_component() {
        assert_eq!(encode_component("Hello World"), "Hello%20World");
        assert_eq!(encode_component("a&b=c/d?"), "a%26b%3Dc%2Fd%3F");
        assert_eq!(encode_component("it's (fine)!"), "it's%20(fine)!");
        assert_eq!(encode_component("café"), "caf%C3%A9");
    }

    #[test]
    fn test_og_image_url() {
        let mut config = SiteConfig::default();
        config.url = "https://example.com/".to_string();
        config.author = "Jane Doe".to_string();
        assert_eq!(
            og_image_url(&config, "Rust & Swift", "2024-01-15"),
            "https://example.com/og?title=Rust%20%26%20Swift&type=blog&date=2024-01-15&author=Jane%20Doe"
        );
    }
}
