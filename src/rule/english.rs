//! The "looks like English prose" heuristic.

use regex::Regex;
use std::sync::LazyLock;

// A capitalized ASCII word followed by one whitespace character, anchored at
// the start. The whitespace class is spelled out so it matches ECMAScript's
// `\s` exactly (it includes U+FEFF, which Unicode `White_Space` does not, and
// excludes U+0085, which it does).
static ENGLISH_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Z][a-z]+[\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]",
    )
    .unwrap()
});

/// Returns true if `text` starts with a capitalized word followed by whitespace.
///
/// This is deliberately narrow: all-lowercase, all-uppercase, numeric and
/// single-word strings never match.
///
/// # Examples
///
/// ```
/// use no_en::rule::looks_english;
///
/// assert!(looks_english("Some message text"));
/// assert!(!looks_english("some message text"));
/// assert!(!looks_english("Hello"));
/// assert!(!looks_english("42"));
/// ```
pub fn looks_english(text: &str) -> bool {
    ENGLISH_REGEX.is_match(text)
}
