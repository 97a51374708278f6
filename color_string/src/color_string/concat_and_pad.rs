// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ColorMarker, ColorString, InlineVecColorMarkers, RgbaColor};

impl ColorString {
    /// `self` followed by `other`. Each operand keeps its appearance: `other`'s markers
    /// are shifted by `self.len()`, and a leading unmarked region in `other` is anchored
    /// to [`RgbaColor::DEFAULT`] instead of inheriting `self`'s last color.
    ///
    /// Concatenating an empty string returns an equal copy.
    #[must_use]
    pub fn concat(&self, other: &ColorString) -> ColorString {
        Self::concat_all([self, other])
    }

    /// Left fold of [`ColorString::concat`] over `parts`, done in a single pass.
    #[must_use]
    pub fn concat_all<'a>(parts: impl IntoIterator<Item = &'a ColorString>) -> ColorString {
        let mut acc_text = String::new();
        let mut candidates = InlineVecColorMarkers::new();

        for (index, part) in parts.into_iter().enumerate() {
            let shift = acc_text.len();
            // The very first operand keeps its own leading region as is.
            if index == 0 {
                candidates.extend(part.markers().iter().copied());
            } else {
                candidates.extend(
                    part.markers()
                        .anchored(part.len())
                        .into_iter()
                        .map(|marker| marker.shifted(shift)),
                );
            }
            acc_text.push_str(part.text());
        }

        Self::from_candidates(acc_text, candidates)
    }

    /// Right align `self` in a field `total_width` chars wide, filling on the left with
    /// `fill` in [`RgbaColor::DEFAULT`]. Returns an equal copy if `self` is already at
    /// least that wide.
    #[must_use]
    pub fn pad_left(&self, total_width: usize, fill: char) -> ColorString {
        let Some(padding) = make_padding(self.text(), total_width, fill) else {
            return self.clone();
        };
        let shift = padding.len();
        let candidates = std::iter::once(ColorMarker::new(RgbaColor::DEFAULT, 0)).chain(
            self.markers()
                .anchored(self.len())
                .into_iter()
                .map(|marker| marker.shifted(shift)),
        );
        Self::from_candidates(padding + self.text(), candidates)
    }

    /// Left align `self` in a field `total_width` chars wide, filling on the right with
    /// `fill` in the last color of `self`, or [`RgbaColor::DEFAULT`] if `self` is empty.
    #[must_use]
    pub fn pad_right(&self, total_width: usize, fill: char) -> ColorString {
        let Some(padding) = make_padding(self.text(), total_width, fill) else {
            return self.clone();
        };
        let mut text = self.to_text();
        text.push_str(&padding);
        let candidates = self.markers().anchored(text.len());
        Self::from_candidates(text, candidates)
    }
}

fn make_padding(text: &str, total_width: usize, fill: char) -> Option<String> {
    let width = text.chars().count();
    (total_width > width).then(|| std::iter::repeat_n(fill, total_width - width).collect())
}
