//! Utilities for the `EmojiStr` trait.
//!
//! *[See also the `EmojiStr` trait.](EmojiStr)*

use crate::{Sequences, Spans, emoji_ranges, is_emoji_only, strip_emojis};
use std::{borrow::Cow, ops::Range};

/// Methods for finding emoji in string slices.
///
/// Every method is also available as a free function taking `&str`.
///
/// # Examples
///
/// ```
/// # use emoji_spans::prelude::*;
/// let text = "Ship it 🚀🚀";
///
/// assert_eq!(text.emoji_ranges(), [8..16]);
/// assert_eq!(text.emoji_count(), 2);
/// assert_eq!(text.strip_emojis(), "Ship it ");
/// assert!(!text.is_emoji_only());
/// assert!("🚀🚀".is_emoji_only());
/// ```
pub trait EmojiStr {
    /// Returns an iterator over the maximal emoji and plain spans.
    ///
    /// See [`scan`](crate::scan).
    fn emoji_spans(&self) -> Spans<'_>;

    /// Returns an iterator over single emoji sequences and plain runs.
    ///
    /// See [`sequences`](crate::sequences).
    fn emoji_sequences(&self) -> Sequences<'_>;

    /// Returns the byte ranges of all emoji spans.
    ///
    /// See [`emoji_ranges`](crate::emoji_ranges).
    fn emoji_ranges(&self) -> Vec<Range<usize>>;

    /// Returns `true` if the whole text is a single emoji span.
    ///
    /// See [`is_emoji_only`](crate::is_emoji_only).
    fn is_emoji_only(&self) -> bool;

    /// Returns the text with all emoji spans removed.
    ///
    /// See [`strip_emojis`](crate::strip_emojis).
    fn strip_emojis(&self) -> Cow<'_, str>;

    /// Returns the number of emoji sequences, e.g. `2` for `"👍🏽🇺🇸"`.
    fn emoji_count(&self) -> usize {
        self.emoji_sequences().filter(|span| span.is_emoji()).count()
    }
}

impl EmojiStr for str {
    #[inline]
    fn emoji_spans(&self) -> Spans<'_> {
        Spans::new(self)
    }

    #[inline]
    fn emoji_sequences(&self) -> Sequences<'_> {
        Sequences::new(self)
    }

    #[inline]
    fn emoji_ranges(&self) -> Vec<Range<usize>> {
        emoji_ranges(self)
    }

    #[inline]
    fn is_emoji_only(&self) -> bool {
        is_emoji_only(self)
    }

    #[inline]
    fn strip_emojis(&self) -> Cow<'_, str> {
        strip_emojis(self)
    }
}
