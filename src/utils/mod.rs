//! Common utilities and helper functions

pub mod error;

use regex::Regex;
use std::sync::OnceLock;

/// Reduce a user-supplied username to a safe URL path segment
///
/// Trims surrounding whitespace and drops every character other than ASCII
/// letters, digits, `_` and `-`. The result may be empty.
pub fn sanitize_username(username: &str) -> String {
    static UNSAFE_CHARS: OnceLock<Regex> = OnceLock::new();

    let re = UNSAFE_CHARS.get_or_init(|| Regex::new(r"[^A-Za-z0-9_-]").expect("Invalid regex pattern"));

    re.replace_all(username.trim(), "").to_string()
}
