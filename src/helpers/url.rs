//! Route helper functions

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};

use crate::config::BlogConfig;

/// Everything but the RFC 3986 unreserved characters
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Join a route prefix and a segment with exactly one slash
pub fn route(prefix: &str, segment: &str) -> String {
    let prefix = prefix.trim_end_matches('/');
    if prefix.is_empty() {
        format!("/{}", segment)
    } else if prefix.starts_with('/') {
        format!("{}/{}", prefix, segment)
    } else {
        format!("/{}/{}", prefix, segment)
    }
}

/// Route of a single post view
///
/// # Examples
/// ```ignore
/// post_path(&config, "hello-world") // -> "/post/hello-world"
/// ```
pub fn post_path(config: &BlogConfig, slug: &str) -> String {
    route(&config.post_route, slug)
}

/// Route of the posts-by-tag view; the tag is percent-encoded
///
/// # Examples
/// ```ignore
/// tag_path(&config, "web-development") // -> "/category/web-development"
/// ```
pub fn tag_path(config: &BlogConfig, tag: &str) -> String {
    route(&config.tag_route, &encode_url(tag))
}

/// Encode a URL path segment
pub fn encode_url(path: &str) -> String {
    percent_encoding::utf8_percent_encode(path, PATH_SEGMENT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_path() {
        let config = BlogConfig::default();
        assert_eq!(post_path(&config, "hello-world"), "/post/hello-world");
    }

    #[test]
    fn test_custom_routes() {
        let config = BlogConfig {
            post_route: "blog/".to_string(),
            tag_route: String::new(),
            ..Default::default()
        };
        assert_eq!(post_path(&config, "a"), "/blog/a");
        assert_eq!(tag_path(&config, "css"), "/css");
    }

    #[test]
    fn test_tag_path_encodes() {
        let config = BlogConfig::default();
        assert_eq!(tag_path(&config, "react"), "/category/react");
        assert_eq!(tag_path(&config, "c sharp"), "/category/c%20sharp");
        assert_eq!(tag_path(&config, "c#/f#"), "/category/c%23%2Ff%23");
    }

    #[test]
    fn test_unreserved_chars_kept() {
        let config = BlogConfig::default();
        assert_eq!(
            tag_path(&config, "web-development"),
            "/category/web-development"
        );
        assert_eq!(encode_url("a.b_c~d"), "a.b_c~d");
    }
}
