//! Syntax check for the optional image URL.
//!
//! A URL is accepted when it has a scheme and a non-empty host:
//! `scheme "://" [userinfo "@"] host [":" port] [path | "?" query | "#" fragment]`.
//! Whitespace is not allowed anywhere and the port must fit in 16 bits.

use regex::Regex;
use std::sync::LazyLock;

static URL_SYNTAX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z][A-Za-z0-9+.\-]*://(?:[^\s/?#@]*@)?(?P<host>\[[0-9A-Fa-f:.]+\]|[^\s/?#@:\[\]<>^|\\]+)(?::(?P<port>[0-9]*))?(?:[/?#]\S*)?$",
    )
    .expect("url pattern is valid")
});

/// Returns whether `text` is a well-formed absolute URL with a host.
///
/// Leading and trailing whitespace is ignored.
pub fn is_valid_url(text: &str) -> bool {
    let Some(captures) = URL_SYNTAX.captures(text.trim()) else {
        return false;
    };

    match captures.name("port").map(|m| m.as_str()) {
        None | Some("") => true,
        Some(port) => port.parse::<u16>().is_ok(),
    }
}
