//! Hyperlink extraction from text content
//!
//! Links are found with a deliberately lenient pattern: `http://` or
//! `https://` followed by the longest run of characters from a fixed class.
//! No URL grammar is applied and nothing is validated or resolved, so a match
//! may be incomplete or carry trailing punctuation.

use regex::Regex;

/// Link pattern: the scheme followed by one or more characters from this class:
///
/// - `a-zA-Z0-9`: ASCII letters and digits
/// - `$-_`: the ASCII range `0x24..=0x5F`, which covers
///   `$ % & ' ( ) * + , - . /`, digits, `: ; < = > ? @`, upper-case letters
///   and `[ \ ] ^ _`
/// - `@.&+!*(),`: listed explicitly (some overlap the range above)
///
/// Percent escapes (`%XX`) are matched character by character since `%` is
/// inside the range. Whitespace, `"`, `#`, backtick, `{ | } ~` and non-ASCII
/// characters end a link.
pub const LINK_PATTERN: &str = r"https?://[a-zA-Z0-9$-_@.&+!*\\(),]+";

static LINK_REGEX: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(LINK_PATTERN).unwrap());

/// Extract every link in `text`, left to right.
///
/// Matches are greedy and never overlap. Duplicates are kept.
#[must_use]
pub fn extract_links(text: &str) -> Vec<String> {
    LINK_REGEX
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Whether `c` belongs to the class in [`LINK_PATTERN`].
#[must_use]
pub const fn is_link_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '$'..='_' | '!')
}
