//! Utilities for the `IndexUnit` type.
//!
//! *[See also the `IndexUnit` type.](IndexUnit)*

use std::{fmt, ops::Range, str::FromStr};
use thiserror::Error;

/// The unit in which positions inside a text are counted.
///
/// Everything in this crate reports UTF-8 byte offsets, which can be used to
/// slice a `&str` directly. `IndexUnit` re-expresses those offsets for
/// callers that count in code points or in UTF-16 code units.
///
/// # Examples
///
/// ```
/// # use emoji_spans::prelude::*;
/// let text = "Hi 😀!";
/// let range = emoji_ranges(text)[0].clone();
///
/// assert_eq!(IndexUnit::Byte.convert(text, range.clone()), 3..7);
/// assert_eq!(IndexUnit::Char.convert(text, range.clone()), 3..4);
/// assert_eq!(IndexUnit::Utf16.convert(text, range), 3..5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IndexUnit {
    /// UTF-8 bytes.
    #[default]
    Byte,
    /// Unicode scalar values (`char`s).
    Char,
    /// UTF-16 code units.
    Utf16,
}

impl IndexUnit {
    /// Returns the lowercase name of the unit.
    #[must_use]
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Byte => "byte",
            Self::Char => "char",
            Self::Utf16 => "utf16",
        }
    }

    /// Returns the length of `s` counted in this unit.
    ///
    /// # Examples
    ///
    /// ```
    /// # use emoji_spans::prelude::*;
    /// assert_eq!(IndexUnit::Byte.measure("👍🏽"), 8);
    /// assert_eq!(IndexUnit::Char.measure("👍🏽"), 2);
    /// assert_eq!(IndexUnit::Utf16.measure("👍🏽"), 4);
    /// ```
    #[must_use]
    pub fn measure(self, s: &str) -> usize {
        match self {
            Self::Byte => s.len(),
            Self::Char => s.chars().count(),
            Self::Utf16 => s.encode_utf16().count(),
        }
    }

    /// Converts a byte range of `text` into a range counted in this unit.
    ///
    /// # Panics
    ///
    /// Panics if `range` is out of bounds or does not lie on `char`
    /// boundaries of `text`.
    #[must_use]
    pub fn convert(self, text: &str, range: Range<usize>) -> Range<usize> {
        let start = self.measure(&text[..range.start]);
        start..start + self.measure(&text[range])
    }

    /// Converts ascending, non-overlapping byte ranges of `text` in a single
    /// pass over the text.
    ///
    /// # Panics
    ///
    /// Panics if the ranges are out of bounds, not on `char` boundaries, or
    /// not in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use emoji_spans::prelude::*;
    /// let text = "A😀B🔥C";
    ///
    /// assert_eq!(
    ///     IndexUnit::Char.convert_all(text, emoji_ranges(text)),
    ///     [1..2, 3..4]
    /// );
    /// ```
    #[must_use]
    pub fn convert_all<I>(self, text: &str, ranges: I) -> Vec<Range<usize>>
    where
        I: IntoIterator<Item = Range<usize>>,
    {
        let mut byte = 0;
        let mut unit = 0;
        ranges
            .into_iter()
            .map(|range| {
                unit += self.measure(&text[byte..range.start]);
                let start = unit;
                unit += self.measure(&text[range.clone()]);
                byte = range.end;
                start..unit
            })
            .collect()
    }
}

impl fmt::Display for IndexUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The error returned when parsing an [`IndexUnit`] from an unknown name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown index unit `{0}`, expected one of: byte, char, utf16")]
pub struct ParseIndexUnitError(String);

impl FromStr for IndexUnit {
    type Err = ParseIndexUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "byte" | "bytes" | "utf8" => Ok(Self::Byte),
            "char" | "chars" | "scalar" => Ok(Self::Char),
            "utf16" | "utf-16" => Ok(Self::Utf16),
            _ => Err(ParseIndexUnitError(s.to_owned())),
        }
    }
}
