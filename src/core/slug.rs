use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Derives the routing key and image filename stem for a project title:
/// lowercase, with every run of whitespace collapsed into one hyphen.
///
/// Leading and trailing whitespace also become hyphens, and no other
/// characters are stripped, so `"C++ & Rust"` yields `"c++-&-rust"`.
pub fn slugify(title: &str) -> String {
    WHITESPACE_RUN.replace_all(title, "-").to_lowercase()
}
