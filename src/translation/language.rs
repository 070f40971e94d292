//! Language code validation.

use regex::Regex;
use std::sync::LazyLock;

// Unanchored: the code may appear anywhere in the input.
#[allow(clippy::expect_used)]
static LANGUAGE_CODE: LazyLock<Regex> = LazyLock::new(|| {
    // expect is safe: the pattern is a compile-time constant
    Regex::new(r"([a-z]{2})(-[a-z]{2})?").expect("language code pattern is valid")
});

/// Returns `true` if `code` contains a language code such as `pt` or `pt-br`.
///
/// The check is a search, not a full match, so `"1pt2"` is accepted while
/// `"12"` and `"PT"` are not.
pub fn is_valid_language(code: &str) -> bool {
    LANGUAGE_CODE.is_match(code)
}
