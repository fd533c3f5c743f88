//! Utilities for the `Span` type and the iterators producing it.
//!
//! *[See also the `Span` type.](Span)*

use crate::{
    Category, classify,
    tables::{COMBINING_ENCLOSING_KEYCAP, EMOJI_PRESENTATION_SELECTOR},
};
use std::{
    fmt,
    iter::{FusedIterator, Peekable},
    ops::Range,
    str::Chars,
};

/// Whether a [`Span`] holds emoji or ordinary text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "lowercase")
)]
pub enum Tag {
    /// One or more complete emoji sequences.
    Emoji,
    /// Anything that is not part of an emoji sequence.
    Plain,
}

impl Tag {
    /// Returns the lowercase name of the tag.
    #[must_use]
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Emoji => "emoji",
            Self::Plain => "plain",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A contiguous, non-empty piece of a text tagged as [`Emoji`](Tag::Emoji)
/// or [`Plain`](Tag::Plain).
///
/// Positions are byte offsets into the scanned text and ranges are
/// end-exclusive, so a span's [`range`](Span::range) can be used to slice
/// the original string directly:
///
/// ```
/// # use emoji_spans::prelude::*;
/// let text = "Hi 😀!";
/// let spans: Vec<Span> = scan(text).collect();
///
/// assert_eq!(spans.len(), 3);
/// assert_eq!(spans[1].tag(), Tag::Emoji);
/// assert_eq!(spans[1].range(), 3..7);
/// assert_eq!(&text[spans[1].range()], spans[1].as_str());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span<'t> {
    tag: Tag,
    start: usize,
    text: &'t str,
}

impl<'t> Span<'t> {
    #[inline]
    pub(crate) const fn new(tag: Tag, start: usize, text: &'t str) -> Self {
        Self { tag, start, text }
    }

    /// Returns the tag of this span.
    #[must_use]
    #[inline]
    pub const fn tag(&self) -> Tag {
        self.tag
    }

    /// Returns `true` if this span is tagged [`Emoji`](Tag::Emoji).
    #[must_use]
    #[inline]
    pub const fn is_emoji(&self) -> bool {
        matches!(self.tag, Tag::Emoji)
    }

    /// Returns the byte offset at which this span starts.
    #[must_use]
    #[inline]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Returns the byte offset just past the end of this span.
    #[must_use]
    #[inline]
    pub const fn end(&self) -> usize {
        self.start + self.text.len()
    }

    /// Returns the byte range of this span within the scanned text.
    #[must_use]
    #[inline]
    pub const fn range(&self) -> Range<usize> {
        self.start()..self.end()
    }

    /// Returns the length of this span in bytes, which is always greater than 0.
    #[expect(clippy::len_without_is_empty)]
    #[must_use]
    #[inline]
    pub const fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns the slice of the scanned text covered by this span.
    #[must_use]
    #[inline]
    pub const fn as_str(&self) -> &'t str {
        self.text
    }
}

impl AsRef<str> for Span<'_> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl<'t> From<Span<'t>> for &'t str {
    fn from(value: Span<'t>) -> Self {
        value.as_str()
    }
}

impl<'t> From<Span<'t>> for Range<usize> {
    fn from(value: Span<'t>) -> Self {
        value.range()
    }
}

/// Splits `text` into maximal [`Span`]s alternating between emoji and plain
/// text.
///
/// Adjacent emoji sequences are merged, so `"😀🔥"` is a single span. Use
/// [`Sequences`] to see every emoji sequence on its own.
///
/// # Examples
///
/// ```
/// # use emoji_spans::prelude::*;
/// let tags: Vec<(Tag, &str)> = scan("A😀🔥B")
///     .map(|span| (span.tag(), span.as_str()))
///     .collect();
///
/// assert_eq!(
///     tags,
///     [(Tag::Plain, "A"), (Tag::Emoji, "😀🔥"), (Tag::Plain, "B")]
/// );
/// assert_eq!(scan("").next(), None);
/// ```
#[inline]
pub fn scan(text: &str) -> Spans<'_> {
    Spans::new(text)
}

/// Splits `text` into emoji sequences and maximal runs of plain text.
///
/// # Examples
///
/// ```
/// # use emoji_spans::prelude::*;
/// let emoji: Vec<&str> = sequences("🇺🇸🇫🇷 👍🏽")
///     .filter(Span::is_emoji)
///     .map(|span| span.as_str())
///     .collect();
///
/// assert_eq!(emoji, ["🇺🇸", "🇫🇷", "👍🏽"]);
/// ```
#[inline]
pub fn sequences(text: &str) -> Sequences<'_> {
    Sequences::new(text)
}

/// Returns `true` if an emoji sequence begins at the start of `rest`.
fn starts_sequence(mut rest: Chars<'_>) -> bool {
    let Some(c) = rest.next() else {
        return false;
    };

    match classify(c) {
        category if category.starts_sequence_alone() => true,
        Category::EmojiTextDefault => matches!(
            rest.next(),
            Some(EMOJI_PRESENTATION_SELECTOR | COMBINING_ENCLOSING_KEYCAP)
        ),
        _ => false,
    }
}

/// An iterator over the emoji sequences and plain runs of a text.
///
/// Every emoji sequence (one visual emoji such as `👨‍👩‍👧` or `🇺🇸`) is
/// yielded as its own [`Span`]; plain runs are maximal. The spans cover the
/// text without gaps.
///
/// This struct is created by the [`sequences`] function. See its
/// documentation for more.
#[derive(Debug, Clone)]
pub struct Sequences<'t> {
    text: &'t str,
    chars: Chars<'t>,
}

impl<'t> Sequences<'t> {
    /// Creates new `Sequences`.
    pub fn new(text: &'t str) -> Self {
        Self {
            text,
            chars: text.chars(),
        }
    }

    /// Returns the part of the text that has not been scanned yet.
    pub fn as_str(&self) -> &'t str {
        self.chars.as_str()
    }

    #[inline]
    fn offset(&self) -> usize {
        self.text.len() - self.chars.as_str().len()
    }

    #[inline]
    fn peek_category(&self) -> Option<Category> {
        self.chars.clone().next().map(classify)
    }

    fn consume_sequence(&mut self) {
        let Some(first) = self.chars.next() else {
            return;
        };

        // Flags are pairs, a third indicator begins the next flag.
        if classify(first) == Category::RegionalIndicator
            && self.peek_category() == Some(Category::RegionalIndicator)
        {
            self.chars.next();
        }

        while let Some(category) = self.peek_category() {
            if !category.is_attachment() {
                break;
            }
            self.chars.next();

            if category == Category::Zwj && self.peek_category() == Some(Category::EmojiBase) {
                self.chars.next();
            }
        }
    }

    fn consume_plain(&mut self) {
        self.chars.next();
        while !self.chars.as_str().is_empty() && !starts_sequence(self.chars.clone()) {
            self.chars.next();
        }
    }
}

impl<'t> Iterator for Sequences<'t> {
    type Item = Span<'t>;

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.chars.as_str();
        (usize::from(!rest.is_empty()), Some(rest.len()))
    }

    fn next(&mut self) -> Option<Self::Item> {
        if self.chars.as_str().is_empty() {
            return None;
        }

        let start = self.offset();
        let tag = if starts_sequence(self.chars.clone()) {
            self.consume_sequence();
            Tag::Emoji
        } else {
            self.consume_plain();
            Tag::Plain
        };
        let end = self.offset();

        log::trace!("{tag} sequence at {start}..{end}");
        Some(Span::new(tag, start, &self.text[start..end]))
    }
}

impl FusedIterator for Sequences<'_> {}

/// An iterator over the maximal emoji and plain [`Span`]s of a text.
///
/// Consecutive spans always have different tags, and concatenating every
/// span in order reproduces the text.
///
/// This struct is created by the [`scan`] function. See its documentation
/// for more.
#[derive(Debug, Clone)]
pub struct Spans<'t> {
    text: &'t str,
    inner: Peekable<Sequences<'t>>,
}

impl<'t> Spans<'t> {
    /// Creates new `Spans`.
    pub fn new(text: &'t str) -> Self {
        Self {
            text,
            inner: Sequences::new(text).peekable(),
        }
    }

    /// Returns the scanned text.
    pub fn text(&self) -> &'t str {
        self.text
    }
}

impl<'t> Iterator for Spans<'t> {
    type Item = Span<'t>;

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.inner.next()?;
        let mut end = first.end();
        while let Some(next) = self.inner.next_if(|next| next.tag() == first.tag()) {
            end = next.end();
        }

        Some(Span::new(
            first.tag(),
            first.start(),
            &self.text[first.start()..end],
        ))
    }
}

impl FusedIterator for Spans<'_> {}
