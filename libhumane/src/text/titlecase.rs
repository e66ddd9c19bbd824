//! Title case following John Gruber's rules
//! (<http://daringfireball.net/2008/05/title_case>).

use regex::{Captures, Regex};
use std::sync::LazyLock;

#[cfg(test)]
#[path = "titlecase_tests.rs"]
mod tests;

/// Words kept lowercase unless they open or close a title segment.
const SMALL_WORDS: &str = r"a|an|and|as|at|but|by|en|for|if|in|of|on|or|the|to|v\.?|via|vs\.?";

// Allow expect here as the regexes are compile-time verified to be valid
#[allow(clippy::expect_used)]
static HTML_SPACE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&nbsp;|&#160;|&#32;").expect("constant regex pattern is valid")
});

#[allow(clippy::expect_used)]
static SEGMENT_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[:.;?!] |(?: |^)["“]"#).expect("constant regex pattern is valid")
});

// The trailing class also admits the characters of `&#8217;`.
#[allow(clippy::expect_used)]
static WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b\p{Alphabetic}[\p{Lowercase}.'’()&#;1278]*\b")
        .expect("constant regex pattern is valid")
});

#[allow(clippy::expect_used)]
static DOTTED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\p{Alphabetic}\.\p{Alphabetic}").expect("constant regex pattern is valid")
});

#[allow(clippy::expect_used)]
static SMALL_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)\b(?:{})\b", SMALL_WORDS)).expect("constant regex pattern is valid")
});

#[allow(clippy::expect_used)]
static LEADING_SMALL_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"\A([[:punct:]]*)({})\b", SMALL_WORDS))
        .expect("constant regex pattern is valid")
});

#[allow(clippy::expect_used)]
static TRAILING_SMALL_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"\b({})([[:punct:]]*\n?)\z", SMALL_WORDS))
        .expect("constant regex pattern is valid")
});

#[allow(clippy::expect_used)]
static VERSUS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i) V(s?)\. ").expect("constant regex pattern is valid"));

#[allow(clippy::expect_used)]
static POSSESSIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)('|’|&#8217;)S\b").expect("constant regex pattern is valid")
});

#[allow(clippy::expect_used)]
static ACRONYM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:AT&T|Q&A)\b").expect("constant regex pattern is valid"));

#[allow(clippy::expect_used)]
static ING_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)-ing\b").expect("constant regex pattern is valid"));

#[allow(clippy::expect_used)]
static ENTITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&[[:alpha:]]+;").expect("constant regex pattern is valid"));

/// Capitalizes a title.
///
/// Each word gets an uppercase first letter unless it already carries
/// capitals past its first letter (`iPhone`, `NASA`) or is dotted like
/// `del.icio.us`. Articles, short prepositions and conjunctions stay
/// lowercase except as the first or last word of the title or of a
/// sentence-like segment inside it (after `: `, `. `, `? ` and friends, or
/// an opening quote).
///
/// Whitespace entities (`&nbsp;`, `&#160;`, `&#32;`) survive the
/// transformation and are put back at the byte offsets they had in `input`.
///
/// # Examples
///
/// ```
/// use libhumane::text::title_case;
///
/// assert_eq!(title_case("the lord of the rings"), "The Lord of the Rings");
/// assert_eq!(title_case("at&t and q&a"), "AT&T and Q&A");
/// assert_eq!(title_case("del.icio.us bookmarks"), "del.icio.us Bookmarks");
/// ```
pub fn title_case(input: &str) -> String {
    let (spaces, working) = EntitySpaces::extract(input);

    let joined: String = split_segments(&working)
        .into_iter()
        .map(title_case_segment)
        .collect();

    spaces.restore(fix_oddities(&joined))
}

/// Whitespace entities lifted out of the input before word processing.
struct EntitySpaces<'a> {
    found: Vec<(&'a str, usize)>,
}

impl<'a> EntitySpaces<'a> {
    /// Records every whitespace entity with its byte offset and returns the
    /// input with each one replaced by a plain space.
    fn extract(input: &'a str) -> (Self, String) {
        let found = HTML_SPACE
            .find_iter(input)
            .map(|m| (m.as_str(), m.start()))
            .collect();
        let working = HTML_SPACE.replace_all(input, " ").into_owned();
        (Self { found }, working)
    }

    /// Writes the recorded entities back, in order, each overwriting the
    /// single character found at its recorded offset.
    ///
    /// Offsets are those of the original input. Restoring in order makes
    /// them line up again as long as nothing else changed the byte length
    /// of the text before an entity; when something did (an uppercase
    /// letter that is wider than its lowercase form), the entity lands off
    /// target.
    fn restore(self, mut text: String) -> String {
        for (entity, offset) in self.found {
            let mut start = offset.min(text.len());
            while !text.is_char_boundary(start) {
                start -= 1;
            }
            let end = text[start..]
                .chars()
                .next()
                .map_or(start, |c| start + c.len_utf8());
            text.replace_range(start..end, entity);
        }
        text
    }
}

/// Splits at sentence-like boundaries, keeping each boundary as its own piece.
fn split_segments(text: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut last = 0;
    for boundary in SEGMENT_BREAK.find_iter(text) {
        pieces.push(&text[last..boundary.start()]);
        pieces.push(boundary.as_str());
        last = boundary.end();
    }
    pieces.push(&text[last..]);
    pieces
}

fn title_case_segment(segment: &str) -> String {
    let capitalized = WORD.replace_all(segment, |caps: &Captures| {
        let word = &caps[0];
        if DOTTED.is_match(word) {
            word.to_string()
        } else {
            upper_first(word)
        }
    });

    let lowered = SMALL_WORD.replace_all(&capitalized, |caps: &Captures| caps[0].to_lowercase());

    let opened = LEADING_SMALL_WORD.replace(&lowered, |caps: &Captures| {
        format!("{}{}", &caps[1], upper_first(&caps[2]))
    });

    TRAILING_SMALL_WORD
        .replace(&opened, |caps: &Captures| {
            format!("{}{}", upper_first(&caps[1]), &caps[2])
        })
        .into_owned()
}

fn fix_oddities(text: &str) -> String {
    let text = VERSUS.replace_all(text, |caps: &Captures| {
        format!(" v{}. ", caps[1].to_lowercase())
    });
    let text = POSSESSIVE.replace_all(&text, "${1}s");
    let text = ACRONYM.replace_all(&text, |caps: &Captures| caps[0].to_uppercase());
    let text = ING_SUFFIX.replace_all(&text, "-ing");
    ENTITY
        .replace_all(&text, |caps: &Captures| caps[0].to_lowercase())
        .into_owned()
}

fn upper_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
