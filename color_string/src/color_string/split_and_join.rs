// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::{BitOr, BitOrAssign, Range};

use smallvec::SmallVec;

use crate::ColorString;

/// Flags that change what [`ColorString::split`] returns. Combine them with `|`.
///
/// ```
/// use r3bl_color_string::SplitOptions;
///
/// let options = SplitOptions::TRIM_ENTRIES | SplitOptions::REMOVE_EMPTY_ENTRIES;
/// assert!(options.trim_entries && options.remove_empty_entries);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SplitOptions {
    /// Leave out segments that are empty (after trimming, if that is also on).
    pub remove_empty_entries: bool,
    /// Strip whitespace from both ends of every segment.
    pub trim_entries: bool,
}

impl SplitOptions {
    pub const NONE: Self = Self {
        remove_empty_entries: false,
        trim_entries: false,
    };
    pub const REMOVE_EMPTY_ENTRIES: Self = Self {
        remove_empty_entries: true,
        trim_entries: false,
    };
    pub const TRIM_ENTRIES: Self = Self {
        remove_empty_entries: false,
        trim_entries: true,
    };
}

impl BitOr for SplitOptions {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self {
            remove_empty_entries: self.remove_empty_entries || rhs.remove_empty_entries,
            trim_entries: self.trim_entries || rhs.trim_entries,
        }
    }
}

impl BitOrAssign for SplitOptions {
    fn bitor_assign(&mut self, rhs: Self) { *self = *self | rhs; }
}

impl ColorString {
    /// Split `self` on any of `separators`, scanning left to right. At each position the
    /// separators are tried in the order given and the first one that matches wins.
    /// Empty separators are ignored; with none left the whole string is one segment.
    ///
    /// Every segment starts with the color that was active at its first byte.
    ///
    /// - `limit`: at most this many segments. Once `limit - 1` segments are produced the
    ///   rest of the text, separators and all, is the last one. `Some(0)` returns no
    ///   segments.
    /// - `options`: see [`SplitOptions`]. Segments left out by
    ///   [`SplitOptions::REMOVE_EMPTY_ENTRIES`] don't count toward `limit`.
    #[must_use]
    pub fn split(
        &self,
        separators: &[&str],
        limit: Option<usize>,
        options: SplitOptions,
    ) -> Vec<ColorString> {
        let mut acc = vec![];
        if limit == Some(0) {
            return acc;
        }

        let separators: SmallVec<[&str; 4]> = separators
            .iter()
            .copied()
            .filter(|separator| !separator.is_empty())
            .collect();

        let text = self.text();
        let mut segment_start = 0;
        let mut index = 0;

        while index < text.len() {
            if limit.is_some_and(|limit| acc.len() + 1 >= limit) {
                break;
            }
            let rest = &text[index..];
            match separators.iter().find(|separator| rest.starts_with(**separator)) {
                Some(separator) => {
                    self.push_segment(&mut acc, segment_start..index, options);
                    index += separator.len();
                    segment_start = index;
                }
                None => {
                    index += rest.chars().next().map_or(1, char::len_utf8);
                }
            }
        }

        self.push_segment(&mut acc, segment_start..text.len(), options);
        acc
    }

    fn push_segment(
        &self,
        acc: &mut Vec<ColorString>,
        range: Range<usize>,
        options: SplitOptions,
    ) {
        let mut segment = self.slice(range);
        if options.trim_entries {
            segment = segment.trim();
        }
        if options.remove_empty_entries && segment.is_empty() {
            return;
        }
        acc.push(segment);
    }

    /// `parts` with `separator` between each pair, concatenated. Joining the result of
    /// splitting on a single separator gives back the original text.
    #[must_use]
    pub fn join<'a>(
        separator: &ColorString,
        parts: impl IntoIterator<Item = &'a ColorString>,
    ) -> ColorString {
        let interleaved = parts.into_iter().enumerate().flat_map(|(index, part)| {
            let leading_separator = (index > 0).then_some(separator);
            leading_separator.into_iter().chain(std::iter::once(part))
        });
        ColorString::concat_all(interleaved)
    }
}
