// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::Deref;

use smallvec::SmallVec;

use crate::{ColorMarker, RgbaColor};

pub(in crate::color_string) mod sizing {
    use super::{ColorMarker, SmallVec};

    /// Most strings carry only a handful of runs.
    pub(crate) const INLINE_MARKER_COUNT: usize = 8;
    pub type InlineVecColorMarkers = SmallVec<[ColorMarker; INLINE_MARKER_COUNT]>;
}

pub use sizing::InlineVecColorMarkers;

/// The markers of a [`crate::ColorString`], always kept in normalized form for the text
/// they belong to:
///
/// 1. Every `start_index` is `< text.len()` and lands on a char boundary.
/// 2. Sorted by `start_index`.
/// 3. No two markers share a `start_index`.
/// 4. No two adjacent markers have the same color.
///
/// The only way to build one is [`MarkerList::normalize`], which repairs any candidate
/// list into this shape. An empty text has no markers.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct MarkerList {
    inner: InlineVecColorMarkers,
}

impl Deref for MarkerList {
    type Target = [ColorMarker];

    fn deref(&self) -> &Self::Target { &self.inner }
}

impl<'a> IntoIterator for &'a MarkerList {
    type Item = &'a ColorMarker;
    type IntoIter = std::slice::Iter<'a, ColorMarker>;

    fn into_iter(self) -> Self::IntoIter { self.inner.iter() }
}

impl MarkerList {
    /// Repair `candidates` so they satisfy the invariants listed on [`MarkerList`] for
    /// `text`.
    ///
    /// 1. Drop markers that are out of range or fall inside a multi byte char.
    /// 2. Stable sort by `start_index`.
    /// 3. For markers sharing a `start_index`, keep the last one given.
    /// 4. Merge adjacent markers of the same color into the earlier one.
    ///
    /// De-duplication runs before merging, so running this on its own output returns the
    /// same list.
    pub fn normalize(
        candidates: impl IntoIterator<Item = ColorMarker>,
        text: &str,
    ) -> Self {
        let mut total = 0;
        let mut acc: InlineVecColorMarkers = candidates
            .into_iter()
            .inspect(|_| total += 1)
            .filter(|marker| is_valid_start(text, marker.start_index))
            .collect();

        let dropped = total - acc.len();
        if dropped > 0 {
            tracing::trace!(
                message = "normalize dropped markers",
                dropped,
                text_len = text.len()
            );
        }

        acc.sort_by_key(|marker| marker.start_index);

        let mut deduped = InlineVecColorMarkers::with_capacity(acc.len());
        for marker in acc {
            match deduped.last_mut() {
                Some(last) if last.start_index == marker.start_index => *last = marker,
                _ => deduped.push(marker),
            }
        }

        deduped.dedup_by(|next, prev| next.color == prev.color);

        Self { inner: deduped }
    }

    /// Checks the invariants listed on [`MarkerList`] against `text`.
    pub fn is_normalized_for(&self, text: &str) -> bool {
        let all_valid = self
            .iter()
            .all(|marker| is_valid_start(text, marker.start_index));
        let strictly_sorted = self
            .windows(2)
            .all(|pair| pair[0].start_index < pair[1].start_index);
        let no_repeated_color = self.windows(2).all(|pair| pair[0].color != pair[1].color);
        all_valid && strictly_sorted && no_repeated_color
    }

    /// The marker that starts exactly at `start_index`, if any.
    pub fn marker_at(&self, start_index: usize) -> Option<ColorMarker> {
        self.binary_search_by_key(&start_index, |marker| marker.start_index)
            .ok()
            .map(|index| self.inner[index])
    }

    /// The color of the last marker at or before `offset`, if any.
    pub fn last_color_until(&self, offset: usize) -> Option<RgbaColor> {
        let count = self.partition_point(|marker| marker.start_index <= offset);
        count.checked_sub(1).map(|index| self.inner[index].color)
    }

    /// Markers with an explicit [`RgbaColor::DEFAULT`] marker at `0` when the text has a
    /// leading region that no marker covers. Each returned marker starts exactly one run.
    pub fn anchored(&self, text_len: usize) -> InlineVecColorMarkers {
        if text_len == 0 {
            return InlineVecColorMarkers::new();
        }
        let mut acc = InlineVecColorMarkers::with_capacity(self.len() + 1);
        match self.first() {
            Some(first) if first.start_index == 0 => acc.extend(self.iter().copied()),
            // The leading region and the first run are the same color.
            Some(first) if first.color == RgbaColor::DEFAULT => {
                acc.push(first.at(0));
                acc.extend(self.iter().skip(1).copied());
            }
            _ => {
                acc.push(ColorMarker::new(RgbaColor::DEFAULT, 0));
                acc.extend(self.iter().copied());
            }
        }
        acc
    }
}

fn is_valid_start(text: &str, start_index: usize) -> bool {
    start_index < text.len() && text.is_char_boundary(start_index)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::color_marker;

    const RED: RgbaColor = RgbaColor::RED;
    const BLUE: RgbaColor = RgbaColor::BLUE;

    fn markers(list: &MarkerList) -> Vec<(usize, RgbaColor)> {
        list.iter()
            .map(|marker| (marker.start_index, marker.color))
            .collect()
    }

    #[test]
    fn test_normalize_sorts() {
        let list = MarkerList::normalize(
            [
                color_marker!(@color: BLUE, @at: 4),
                color_marker!(@color: RED, @at: 0),
            ],
            "abcdef",
        );
        assert_eq!(markers(&list), vec![(0, RED), (4, BLUE)]);
    }

    #[test]
    fn test_normalize_drops_out_of_range() {
        let list = MarkerList::normalize(
            [
                color_marker!(@color: RED, @at: 0),
                color_marker!(@color: BLUE, @at: 3),
                color_marker!(@color: BLUE, @at: 10),
            ],
            "abc",
        );
        assert_eq!(markers(&list), vec![(0, RED)]);
    }

    #[test]
    fn test_normalize_drops_markers_inside_a_char() {
        // "é" is 2 bytes.
        let list = MarkerList::normalize(
            [
                color_marker!(@color: RED, @at: 1),
                color_marker!(@color: BLUE, @at: 2),
            ],
            "éa",
        );
        assert_eq!(markers(&list), vec![(2, BLUE)]);
    }

    #[test]
    fn test_normalize_last_write_wins() {
        let list = MarkerList::normalize(
            [
                color_marker!(@color: RED, @at: 1),
                color_marker!(@color: BLUE, @at: 1),
            ],
            "abc",
        );
        assert_eq!(markers(&list), vec![(1, BLUE)]);
    }

    #[test]
    fn test_normalize_merges_adjacent_same_color() {
        let list = MarkerList::normalize(
            [
                color_marker!(@color: RED, @at: 0),
                color_marker!(@color: RED, @at: 2),
                color_marker!(@color: BLUE, @at: 3),
                color_marker!(@color: RED, @at: 4),
            ],
            "abcdef",
        );
        assert_eq!(markers(&list), vec![(0, RED), (3, BLUE), (4, RED)]);
    }

    #[test]
    fn test_normalize_dedup_before_merge() {
        // Once the RED at 2 is replaced by BLUE, the BLUE at 3 merges into it.
        let list = MarkerList::normalize(
            [
                color_marker!(@color: RED, @at: 0),
                color_marker!(@color: RED, @at: 2),
                color_marker!(@color: BLUE, @at: 2),
                color_marker!(@color: BLUE, @at: 3),
            ],
            "abcdef",
        );
        assert_eq!(markers(&list), vec![(0, RED), (2, BLUE)]);
        assert!(list.is_normalized_for("abcdef"));
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let text = "hello world";
        let once = MarkerList::normalize(
            [
                color_marker!(@color: BLUE, @at: 9),
                color_marker!(@color: RED, @at: 3),
                color_marker!(@color: RED, @at: 5),
                color_marker!(@color: BLUE, @at: 3),
                color_marker!(@color: RED, @at: 30),
            ],
            text,
        );
        let twice = MarkerList::normalize(once.iter().copied(), text);
        assert_eq!(once, twice);
        assert!(once.is_normalized_for(text));
    }

    #[test]
    fn test_empty_text_has_no_markers() {
        let list = MarkerList::normalize([color_marker!(@color: RED, @at: 0)], "");
        assert!(list.is_empty());
        assert!(list.anchored(0).is_empty());
    }

    #[test]
    fn test_lookups() {
        let list = MarkerList::normalize(
            [
                color_marker!(@color: RED, @at: 2),
                color_marker!(@color: BLUE, @at: 5),
            ],
            "abcdefgh",
        );
        assert_eq!(list.marker_at(2), Some(ColorMarker::new(RED, 2)));
        assert_eq!(list.marker_at(3), None);
        assert_eq!(list.last_color_until(1), None);
        assert_eq!(list.last_color_until(4), Some(RED));
        assert_eq!(list.last_color_until(7), Some(BLUE));
    }

    #[test]
    fn test_anchored_adds_default_lead() {
        let list = MarkerList::normalize([color_marker!(@color: RED, @at: 2)], "abcd");
        let anchored: Vec<_> = list.anchored(4).into_iter().collect();
        assert_eq!(
            anchored,
            vec![
                ColorMarker::new(RgbaColor::DEFAULT, 0),
                ColorMarker::new(RED, 2)
            ]
        );
    }

    #[test]
    fn test_anchored_extends_leading_default_run() {
        let list = MarkerList::normalize(
            [
                color_marker!(@color: RgbaColor::DEFAULT, @at: 2),
                color_marker!(@color: RED, @at: 3),
            ],
            "abcd",
        );
        let anchored: Vec<_> = list.anchored(4).into_iter().collect();
        assert_eq!(
            anchored,
            vec![
                ColorMarker::new(RgbaColor::DEFAULT, 0),
                ColorMarker::new(RED, 3)
            ]
        );
    }
}
