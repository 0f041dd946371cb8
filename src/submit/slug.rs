//! Slug derivation from post titles

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Anything that is neither an ASCII word character nor whitespace
    static ref NON_WORD: Regex = Regex::new(r"[^A-Za-z0-9_\s]").unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Derive a slug from a title
///
/// Lowercases, drops every non-word non-whitespace character, then turns
/// each whitespace run into one hyphen. Leading or trailing whitespace
/// therefore yields a leading or trailing hyphen.
///
/// # Examples
/// ```ignore
/// slugify("Hello, World! 2024") // -> "hello-world-2024"
/// ```
pub fn slugify(title: &str) -> String {
    let lower = title.to_lowercase();
    let stripped = NON_WORD.replace_all(&lower, "");
    WHITESPACE.replace_all(&stripped, "-").into_owned()
}
