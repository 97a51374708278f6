// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::Range;

use crate::{ColorMarker, ColorString, ColorStringError, ColorStringResult};

impl ColorString {
    /// The part of `self` in the byte `range`. The color active at `range.start` becomes
    /// the leading marker of the result, and the markers inside the range move left by
    /// `range.start`.
    ///
    /// # Errors
    ///
    /// Returns [`ColorStringError::SubstringOutOfRange`] if the range is reversed, runs
    /// past the end of the text, or splits a multi byte char.
    pub fn substring(&self, range: Range<usize>) -> ColorStringResult<ColorString> {
        self.check_range(&range)?;
        Ok(self.slice(range))
    }

    /// `other` spliced into `self` at byte `offset`. The text after the splice point
    /// keeps the color it had before.
    ///
    /// # Errors
    ///
    /// Returns [`ColorStringError::SubstringOutOfRange`] if `offset` is past the end of
    /// the text or splits a multi byte char.
    pub fn insert(&self, offset: usize, other: &ColorString) -> ColorStringResult<ColorString> {
        self.check_range(&(offset..offset))?;
        let before = self.slice(0..offset);
        let after = self.slice(offset..self.len());
        Ok(ColorString::concat_all([&before, other, &after]))
    }

    /// Strips leading and trailing whitespace ([`char::is_whitespace`]).
    #[must_use]
    pub fn trim(&self) -> ColorString { self.trim_matches(char::is_whitespace) }

    /// Strips leading whitespace ([`char::is_whitespace`]).
    #[must_use]
    pub fn trim_start(&self) -> ColorString { self.trim_start_matches(char::is_whitespace) }

    /// Strips trailing whitespace ([`char::is_whitespace`]).
    #[must_use]
    pub fn trim_end(&self) -> ColorString { self.trim_end_matches(char::is_whitespace) }

    /// Strips leading and trailing chars that match `predicate`.
    #[must_use]
    pub fn trim_matches(&self, predicate: impl Fn(char) -> bool) -> ColorString {
        let start = self.len() - self.text().trim_start_matches(&predicate).len();
        let end = self.text().trim_end_matches(&predicate).len().max(start);
        self.slice(start..end)
    }

    /// Strips leading chars that match `predicate`.
    #[must_use]
    pub fn trim_start_matches(&self, predicate: impl Fn(char) -> bool) -> ColorString {
        let start = self.len() - self.text().trim_start_matches(predicate).len();
        self.slice(start..self.len())
    }

    /// Strips trailing chars that match `predicate`.
    #[must_use]
    pub fn trim_end_matches(&self, predicate: impl Fn(char) -> bool) -> ColorString {
        let end = self.text().trim_end_matches(predicate).len();
        self.slice(0..end)
    }

    fn check_range(&self, range: &Range<usize>) -> ColorStringResult<()> {
        let Range { start, end } = *range;
        let is_valid = start <= end
            && end <= self.len()
            && self.text().is_char_boundary(start)
            && self.text().is_char_boundary(end);
        if is_valid {
            Ok(())
        } else {
            Err(ColorStringError::SubstringOutOfRange {
                start,
                end,
                len: self.len(),
            })
        }
    }

    /// Callers guarantee that `range` is valid for the text.
    pub(crate) fn slice(&self, range: Range<usize>) -> ColorString {
        debug_assert!(self.check_range(&range).is_ok(), "invalid slice {range:?}");
        let Range { start, end } = range;
        let text = self.text()[start..end].to_string();

        let leading = self
            .color_at(start)
            .map(|color| ColorMarker::new(color, 0));
        let inside = self
            .markers()
            .iter()
            .filter(|marker| marker.start_index > start && marker.start_index < end)
            .map(|marker| marker.at(marker.start_index - start));

        Self::from_candidates(text, leading.into_iter().chain(inside))
    }
}
