#![doc = include_str!("../README.md")]

pub mod category;
pub mod ext;
pub mod index;
pub mod scanner;
pub(crate) mod tables;

pub use category::{Category, classify};
pub use ext::EmojiStr;
pub use index::{IndexUnit, ParseIndexUnitError};
pub use scanner::{Sequences, Span, Spans, Tag, scan, sequences};

use std::{borrow::Cow, ops::Range};

/// Returns the byte ranges of the emoji spans of `text`, in order.
///
/// Ranges are end-exclusive, so each one can slice `text` directly.
/// Consecutive emoji are reported as one range.
///
/// # Examples
///
/// ```
/// # use emoji_spans::prelude::*;
/// let text = "Hi 😀!";
/// let ranges = emoji_ranges(text);
///
/// assert_eq!(ranges, [3..7]);
/// assert_eq!(&text[ranges[0].clone()], "😀");
///
/// assert_eq!(emoji_ranges("👍🏽"), [0..8]);
/// assert!(emoji_ranges("no emoji").is_empty());
/// ```
#[must_use]
pub fn emoji_ranges(text: &str) -> Vec<Range<usize>> {
    scan(text)
        .filter(Span::is_emoji)
        .map(|span| span.range())
        .collect()
}

/// Returns `true` if `text` consists of nothing but emoji.
///
/// The empty string is not emoji-only, and neither is a code point that only
/// has an emoji meaning in combination, like a bare `#` or `5`.
///
/// # Examples
///
/// ```
/// # use emoji_spans::prelude::*;
/// assert!(is_emoji_only("😀🔥"));
/// assert!(is_emoji_only("🇺🇸"));
/// assert!(is_emoji_only("5\u{FE0F}\u{20E3}"));
///
/// assert!(!is_emoji_only(""));
/// assert!(!is_emoji_only("5"));
/// assert!(!is_emoji_only("😀 🔥"));
/// ```
#[must_use]
pub fn is_emoji_only(text: &str) -> bool {
    let mut spans = scan(text);
    matches!((spans.next(), spans.next()), (Some(span), None) if span.is_emoji())
}

/// Returns `text` without its emoji spans.
///
/// Plain text, including whitespace around removed emoji, is kept as is. The
/// input is borrowed when there is nothing to remove.
///
/// # Examples
///
/// ```
/// # use emoji_spans::prelude::*;
/// use std::borrow::Cow;
///
/// assert_eq!(strip_emojis("A😀B🔥C"), "ABC");
/// assert_eq!(strip_emojis("Hi 👋🏾 there"), "Hi  there");
/// assert!(matches!(strip_emojis("no emoji"), Cow::Borrowed("no emoji")));
/// ```
#[must_use]
pub fn strip_emojis(text: &str) -> Cow<'_, str> {
    let mut spans = scan(text);
    match spans.next() {
        None => Cow::Borrowed(text),
        Some(first) if !first.is_emoji() && first.len() == text.len() => Cow::Borrowed(text),
        first => Cow::Owned(
            first
                .into_iter()
                .chain(spans)
                .filter(|span| !span.is_emoji())
                .map(|span| span.as_str())
                .collect(),
        ),
    }
}

/// Commonly used functions, traits and types.
pub mod prelude {
    pub use super::{
        Category, EmojiStr, IndexUnit, Sequences, Span, Spans, Tag, classify, emoji_ranges,
        is_emoji_only, scan, sequences, strip_emojis,
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    const SAMPLES: &[&str] = &[
        "",
        "plain",
        "Hi 😀!",
        "😀🔥",
        "A😀B🔥C",
        "👍🏽",
        "🇺🇸",
        "5",
        "5️⃣",
        "#\u{FE0E}",
        "  😀  😀  ",
        "🏳️\u{200D}🌈 pride",
        "\u{1F3FB}\u{200D}",
    ];

    fn samples() -> impl Iterator<Item = String> {
        SAMPLES
            .iter()
            .map(|text| text.to_string())
            .chain(tables::edge_samples())
    }

    #[test]
    fn test_empty_input() {
        assert!(emoji_ranges("").is_empty());
        assert!(!is_emoji_only(""));
        assert_eq!(strip_emojis(""), "");
    }

    #[test]
    fn test_emoji_ranges_single_emoji_in_text() {
        let text = "Hi 😀!";
        let ranges = emoji_ranges(text);
        assert_eq!(ranges, vec![3..7]);
        assert_eq!(&text[3..7], "😀");
    }

    #[test]
    fn test_emoji_ranges_skin_tone() {
        assert_eq!(emoji_ranges("👍🏽"), vec![0..8]);
    }

    #[rstest]
    #[case("😀🔥", true)]
    #[case("🇺🇸", true)]
    #[case("5", false)]
    #[case("5️⃣", true)]
    #[case("#", false)]
    #[case("#️⃣", true)]
    #[case("\u{1F3FD}", false)]
    #[case("😀 ", false)]
    #[case(" 😀", false)]
    #[case("👨\u{200D}👩\u{200D}👧\u{200D}👦", true)]
    #[case("🇺🇸🇫🇷🇩", true)]
    #[case("✓", false)]
    #[case("❶", false)]
    #[case("➜", false)]
    #[case("✔\u{FE0F}", true)]
    fn test_is_emoji_only(#[case] text: &str, #[case] expected: bool) {
        assert_eq!(is_emoji_only(text), expected);
    }

    #[rstest]
    #[case("A😀B🔥C", "ABC")]
    #[case("😀🔥", "")]
    #[case(" 😀 ", "  ")]
    #[case("tab\t👍🏽\tend", "tab\t\tend")]
    #[case("Press 1️⃣ or #", "Press  or #")]
    #[case("✅ done ✓", " done ✓")]
    fn test_strip_emojis(#[case] text: &str, #[case] expected: &str) {
        assert_eq!(strip_emojis(text), expected);
    }

    #[test]
    fn test_strip_emojis_borrows_when_unchanged() {
        assert!(matches!(strip_emojis("plain"), Cow::Borrowed("plain")));
        assert!(matches!(strip_emojis("😀"), Cow::Owned(_)));
    }

    #[test]
    fn test_strip_emojis_keeps_non_emoji_symbols() {
        let text = "✓ done, ❶ first ➜ next ➔ \u{1F946}";
        assert!(emoji_ranges(text).is_empty());
        assert!(matches!(strip_emojis(text), Cow::Borrowed(_)));
    }

    #[test]
    fn test_strip_emojis_is_idempotent() {
        for text in samples() {
            let once = strip_emojis(&text);
            assert_eq!(strip_emojis(&once), once, "{text:?}");
        }
    }

    #[test]
    fn test_emoji_only_iff_single_full_range() {
        for text in samples() {
            let full = emoji_ranges(&text) == [0..text.len()];
            assert_eq!(is_emoji_only(&text), full, "{text:?}");
        }
    }
}
