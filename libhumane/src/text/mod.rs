//! Text humanizing: title case, widow-word prevention and slugs.
//!
//! Input is treated as already escaped for its destination; these functions
//! only ever add the `&nbsp;` entity and never escape anything themselves.

use regex::Regex;
use std::sync::LazyLock;

mod titlecase;

pub use titlecase::title_case;


/// Entity joining the last two words of a widont-ed string.
pub const NON_BREAKING_SPACE: &str = "&nbsp;";

// Allow expect here as the regex is compile-time verified to be valid
#[allow(clippy::expect_used)]
static LAST_GAP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\S\s+\S+)\s+(\S+)\s*$").expect("constant regex pattern is valid")
});

#[allow(clippy::expect_used)]
static NON_WORD_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\W+").expect("constant regex pattern is valid"));

/// Joins the final word to the one before it with a non-breaking space.
///
/// Only strings of three or more words are changed, so a short heading is
/// never glued into a single unbreakable line. Trailing whitespace after the
/// last word is dropped when the join happens.
///
/// # Examples
///
/// ```
/// use libhumane::text::widont;
///
/// assert_eq!(widont("one two three four"), "one two three&nbsp;four");
/// assert_eq!(widont("one two"), "one two");
/// ```
pub fn widont(input: &str) -> String {
    LAST_GAP
        .replace(input, format!("${{1}}{}${{2}}", NON_BREAKING_SPACE))
        .into_owned()
}

/// Reduces a string to a lowercase, hyphen-delimited slug.
///
/// Every run of characters other than letters, digits and underscores
/// becomes one hyphen, and hyphens at either end are trimmed. Letters
/// outside ASCII are kept as they are rather than transliterated.
///
/// # Examples
///
/// ```
/// use libhumane::text::slugged;
///
/// assert_eq!(slugged("Hello, World!"), "hello-world");
/// assert_eq!(slugged("  Déjà vu  "), "déjà-vu");
/// ```
pub fn slugged(input: &str) -> String {
    let lowered = input.to_lowercase();
    NON_WORD_RUN
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}
