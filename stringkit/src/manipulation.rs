//! # Structural Manipulation
//!
//! Truncation, capitalization, reversal, whitespace stripping, occurrence
//! counting, palindrome detection and HTML escaping.
//!
//! Lengths and positions count Unicode scalar values (`char`). Nothing here is
//! grapheme-aware: [`reverse`] will split combining sequences.
use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Suffix appended by [`truncate`] unless another one is given.
pub const DEFAULT_ELLIPSIS: &str = "...";

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace regex should compile"));

static HTML_ENTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(?:amp|lt|gt|quot|#x27);").expect("html entity regex should compile")
});

/// Shortens `input` to at most `length` characters, ending with `ellipsis`.
///
/// Input that already fits is returned unchanged. When the ellipsis is longer
/// than `length` nothing of the input is kept and the ellipsis is returned.
///
/// ```rust
/// use stringkit::manipulation::truncate;
///
/// assert_eq!(truncate("hello world", 8, "..."), "hello...");
/// assert_eq!(truncate("hello", 10, "..."), "hello");
/// ```
pub fn truncate(input: &str, length: usize, ellipsis: &str) -> String {
    if input.chars().count() <= length {
        return input.to_string();
    }

    let keep = length.saturating_sub(ellipsis.chars().count());
    input.chars().take(keep).chain(ellipsis.chars()).collect()
}

/// Upper-cases the first character and lower-cases the rest.
pub fn capitalize(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => {
            let rest = chars.as_str().to_lowercase();
            first.to_uppercase().chain(rest.chars()).collect()
        }
        None => String::new(),
    }
}

/// Capitalizes every whitespace-separated word and joins them with one space.
///
/// Leading or trailing whitespace leaves an empty word behind, which shows up
/// as a single leading or trailing space.
pub fn title_case(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    let lowered = input.to_lowercase();
    WHITESPACE_RUN
        .split(&lowered)
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn reverse(input: &str) -> String {
    input.chars().rev().collect()
}

pub fn remove_whitespace(input: &str) -> String {
    input.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Counts non-overlapping occurrences of `needle`, scanning left to right.
///
/// `count_occurrences("aaaa", "aa")` is 2. An empty haystack or needle counts 0.
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    if haystack.is_empty() || needle.is_empty() {
        return 0;
    }

    haystack.matches(needle).count()
}

/// Checks whether the ASCII letters and digits of `input` read the same both ways.
///
/// Case is ignored and every other character is skipped. The empty string is a palindrome.
pub fn is_palindrome(input: &str) -> bool {
    let cleaned: Vec<char> = input
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect();

    cleaned.iter().eq(cleaned.iter().rev())
}

/// Escapes `&`, `<`, `>`, `"` and `'`.
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Reverses [`escape_html`]. Entities other than the five it produces are left verbatim.
pub fn unescape_html(input: &str) -> String {
    HTML_ENTITY
        .replace_all(input, |caps: &Captures| match &caps[0] {
            "&amp;" => "&",
            "&lt;" => "<",
            "&gt;" => ">",
            "&quot;" => "\"",
            _ => "'",
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manipulation_truncate() {
        assert_eq!(truncate("hello world", 8, DEFAULT_ELLIPSIS), "hello...");
        assert_eq!(truncate("hello world", 5, DEFAULT_ELLIPSIS), "he...");
        assert_eq!(truncate("hello", 10, DEFAULT_ELLIPSIS), "hello");
        assert_eq!(truncate("hello", 5, DEFAULT_ELLIPSIS), "hello");
        assert_eq!(truncate("", 5, DEFAULT_ELLIPSIS), "");
    }

    #[test]
    fn test_manipulation_truncate_custom_ellipsis() {
        assert_eq!(truncate("hello world", 8, "***"), "hello***");
        assert_eq!(truncate("hello world", 6, " more"), "h more");
        assert_eq!(truncate("hello world", 4, ""), "hell");
    }

    #[test]
    fn test_manipulation_truncate_clamps_when_ellipsis_is_longer() {
        assert_eq!(truncate("hello world", 2, "..."), "...");
        assert_eq!(truncate("hello world", 0, "..."), "...");
    }

    #[test]
    fn test_manipulation_capitalize() {
        assert_eq!(capitalize("hello"), "Hello");
        assert_eq!(capitalize("HELLO"), "Hello");
        assert_eq!(capitalize("a"), "A");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_manipulation_title_case() {
        assert_eq!(title_case("hello world"), "Hello World");
        assert_eq!(title_case("the quick brown fox"), "The Quick Brown Fox");
        assert_eq!(title_case("HELLO   WORLD"), "Hello World");
        assert_eq!(title_case("WORLD"), "World");
        assert_eq!(title_case("  padded  "), " Padded ");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_manipulation_reverse_and_whitespace() {
        assert_eq!(reverse("hello"), "olleh");
        assert_eq!(reverse("12345"), "54321");
        assert_eq!(reverse(""), "");
        assert_eq!(remove_whitespace("  a  b  c  "), "abc");
        assert_eq!(remove_whitespace("hello\nworld\t"), "helloworld");
    }

    #[test]
    fn test_manipulation_count_occurrences() {
        assert_eq!(count_occurrences("hello world", "l"), 3);
        assert_eq!(count_occurrences("hello world", "ll"), 1);
        assert_eq!(count_occurrences("hello world", "xyz"), 0);
        assert_eq!(count_occurrences("aaaa", "aa"), 2);
        assert_eq!(count_occurrences("abababab", "aba"), 2);
        assert_eq!(count_occurrences("", "a"), 0);
        assert_eq!(count_occurrences("hello", ""), 0);
        assert_eq!(count_occurrences("", ""), 0);
    }

    #[test]
    fn test_manipulation_palindrome() {
        assert!(is_palindrome("racecar"));
        assert!(is_palindrome("A man a plan a canal Panama"));
        assert!(is_palindrome("A@#man@#a@#plan@#a@#canal@#Panama"));
        assert!(!is_palindrome("race a car"));
        assert!(!is_palindrome("hello"));
        assert!(is_palindrome(""));
        assert!(is_palindrome("aa"));
    }

    #[test]
    fn test_manipulation_escape_html() {
        assert_eq!(
            escape_html("<div>Hello & \"world\"</div>"),
            "&lt;div&gt;Hello &amp; &quot;world&quot;&lt;/div&gt;"
        );
        assert_eq!(escape_html("It's <great>"), "It&#x27;s &lt;great&gt;");
        assert_eq!(escape_html("hello world"), "hello world");
    }

    #[test]
    fn test_manipulation_unescape_html() {
        assert_eq!(
            unescape_html("&lt;div&gt;Hello &amp; &quot;world&quot;&lt;/div&gt;"),
            "<div>Hello & \"world\"</div>"
        );
        assert_eq!(unescape_html("It&#x27;s"), "It's");
        assert_eq!(unescape_html("&invalid; &amp;"), "&invalid; &");
        assert_eq!(unescape_html("&amp;lt;"), "&lt;");
    }
}
