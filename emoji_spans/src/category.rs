//! Utilities for the `Category` type.
//!
//! *[See also the `Category` type.](Category)*

use crate::tables::EMOJI_TABLE;
use std::cmp::Ordering;

/// The emoji-relevant class of a single code point.
///
/// Every `char` has exactly one category; code points that play no part in
/// emoji are [`Other`](Category::Other).
///
/// # Examples
///
/// ```
/// # use emoji_spans::prelude::*;
/// assert_eq!(Category::of('😀'), Category::EmojiBase);
/// assert_eq!(Category::of('#'), Category::EmojiTextDefault);
/// assert_eq!(Category::of('\u{1F3FD}'), Category::Modifier);
/// assert_eq!(Category::of('a'), Category::Other);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// A pictograph with emoji presentation, e.g. `😀` or `🔥`.
    EmojiBase,
    /// A code point with text presentation by default that still has an
    /// emoji meaning, e.g. `#`, `*` or an ASCII digit.
    EmojiTextDefault,
    /// One of the five Fitzpatrick skin tone modifiers.
    Modifier,
    /// `U+FE0E` (text presentation) or `U+FE0F` (emoji presentation).
    VariationSelector,
    /// `U+200D ZERO WIDTH JOINER`.
    Zwj,
    /// One of the 26 regional indicator symbols that pair up into flags.
    RegionalIndicator,
    /// `U+20E3 COMBINING ENCLOSING KEYCAP`.
    EnclosingKeycap,
    /// A tag character (`U+E0020..=U+E007F`) as used by subdivision flags.
    TagCharacter,
    /// Anything else.
    Other,
}

impl Category {
    /// Returns the category of `c`.
    ///
    /// Shorthand for [`classify`].
    #[must_use]
    #[inline]
    pub fn of(c: char) -> Self {
        classify(c)
    }

    /// Returns `true` for categories that only modify the emoji before them.
    ///
    /// Attachments never start an emoji sequence on their own, but always
    /// extend one that is in progress.
    ///
    /// # Examples
    ///
    /// ```
    /// # use emoji_spans::prelude::*;
    /// assert!(Category::Modifier.is_attachment());
    /// assert!(Category::Zwj.is_attachment());
    /// assert!(!Category::EmojiBase.is_attachment());
    /// assert!(!Category::Other.is_attachment());
    /// ```
    #[must_use]
    #[inline]
    pub const fn is_attachment(self) -> bool {
        matches!(
            self,
            Self::Modifier
                | Self::VariationSelector
                | Self::Zwj
                | Self::EnclosingKeycap
                | Self::TagCharacter
        )
    }

    /// Returns `true` for categories that begin an emoji sequence regardless
    /// of what follows them.
    #[must_use]
    #[inline]
    pub const fn starts_sequence_alone(self) -> bool {
        matches!(self, Self::EmojiBase | Self::RegionalIndicator)
    }
}

/// Returns the emoji-relevant [`Category`] of a code point.
///
/// The lookup is a binary search over a few dozen ranges.
///
/// # Examples
///
/// ```
/// # use emoji_spans::prelude::*;
/// assert_eq!(classify('\u{200D}'), Category::Zwj);
/// assert_eq!(classify('\u{FE0F}'), Category::VariationSelector);
/// assert_eq!(classify('🇺'), Category::RegionalIndicator);
/// assert_eq!(classify('京'), Category::Other);
/// ```
#[must_use]
pub fn classify(c: char) -> Category {
    EMOJI_TABLE
        .binary_search_by(|&(first, last, _)| {
            if c < first {
                Ordering::Greater
            } else if c > last {
                Ordering::Less
            } else {
                Ordering::Equal
            }
        })
        .map_or(Category::Other, |i| EMOJI_TABLE[i].2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::{
        COMBINING_ENCLOSING_KEYCAP, EMOJI_PRESENTATION_SELECTOR, TEXT_PRESENTATION_SELECTOR,
        ZERO_WIDTH_JOINER,
    };
    use rstest::rstest;
    use ucd::{Codepoint, GraphemeClusterBreak};

    #[test]
    fn test_table_is_sorted_and_disjoint() {
        for &(first, last, _) in EMOJI_TABLE {
            assert!(first <= last, "{first:?} > {last:?}");
        }
        for pair in EMOJI_TABLE.windows(2) {
            assert!(pair[0].1 < pair[1].0, "{:?} overlaps {:?}", pair[0], pair[1]);
        }
    }

    #[rstest]
    #[case('😀', Category::EmojiBase)]
    #[case('🔥', Category::EmojiBase)]
    #[case('👍', Category::EmojiBase)]
    #[case('❤', Category::EmojiBase)]
    #[case('☀', Category::EmojiBase)]
    #[case('⭐', Category::EmojiBase)]
    #[case('🀄', Category::EmojiBase)]
    #[case('🥰', Category::EmojiBase)]
    #[case('🫠', Category::EmojiBase)]
    #[case('🟢', Category::EmojiBase)]
    #[case('✅', Category::EmojiBase)]
    #[case('✔', Category::EmojiBase)]
    #[case('➿', Category::EmojiBase)]
    #[case('🤌', Category::EmojiBase)]
    #[case('#', Category::EmojiTextDefault)]
    #[case('*', Category::EmojiTextDefault)]
    #[case('0', Category::EmojiTextDefault)]
    #[case('9', Category::EmojiTextDefault)]
    #[case('©', Category::EmojiTextDefault)]
    #[case('™', Category::EmojiTextDefault)]
    #[case('\u{1F3FB}', Category::Modifier)]
    #[case('\u{1F3FF}', Category::Modifier)]
    #[case(TEXT_PRESENTATION_SELECTOR, Category::VariationSelector)]
    #[case(EMOJI_PRESENTATION_SELECTOR, Category::VariationSelector)]
    #[case(ZERO_WIDTH_JOINER, Category::Zwj)]
    #[case('\u{1F1E6}', Category::RegionalIndicator)]
    #[case('\u{1F1FF}', Category::RegionalIndicator)]
    #[case(COMBINING_ENCLOSING_KEYCAP, Category::EnclosingKeycap)]
    #[case('\u{E0067}', Category::TagCharacter)]
    #[case('\u{E007F}', Category::TagCharacter)]
    #[case('a', Category::Other)]
    #[case(' ', Category::Other)]
    #[case('!', Category::Other)]
    #[case('\u{0}', Category::Other)]
    #[case('\u{200C}', Category::Other)]
    #[case('\u{1F1E5}', Category::Other)]
    #[case('\u{1F200}', Category::Other)]
    #[case('\u{10FFFF}', Category::Other)]
    #[case('✓', Category::Other)]
    #[case('❶', Category::Other)]
    #[case('➜', Category::Other)]
    #[case('➔', Category::Other)]
    #[case('\u{2606}', Category::Other)]
    #[case('\u{1F900}', Category::Other)]
    #[case('\u{1F93B}', Category::Other)]
    #[case('\u{1F946}', Category::Other)]
    fn test_classify(#[case] c: char, #[case] expected: Category) {
        assert_eq!(classify(c), expected);
    }

    #[test]
    fn test_glue_code_points_extend_grapheme_clusters() {
        assert!(matches!(
            ZERO_WIDTH_JOINER.grapheme_cluster_break(),
            GraphemeClusterBreak::ZWJ
        ));
        for c in [
            TEXT_PRESENTATION_SELECTOR,
            EMOJI_PRESENTATION_SELECTOR,
            COMBINING_ENCLOSING_KEYCAP,
        ] {
            assert!(
                matches!(c.grapheme_cluster_break(), GraphemeClusterBreak::Extend),
                "{:04X}",
                c as u32
            );
        }
    }

    #[test]
    fn test_attachments_never_start_alone() {
        for category in [
            Category::Modifier,
            Category::VariationSelector,
            Category::Zwj,
            Category::EnclosingKeycap,
            Category::TagCharacter,
        ] {
            assert!(category.is_attachment());
            assert!(!category.starts_sequence_alone());
        }
        assert!(!Category::EmojiTextDefault.starts_sequence_alone());
        assert!(!Category::Other.starts_sequence_alone());
    }
}
