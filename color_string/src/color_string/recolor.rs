// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::Range;

use crate::{ColorString, ColorStringError, ColorStringResult, RgbaColor};

impl ColorString {
    /// Same markers over `new_text`. Markers that no longer fit are dropped, and text
    /// that no marker covers starts in [`RgbaColor::DEFAULT`]. Useful for edits that keep
    /// byte offsets stable, like ASCII upper casing.
    ///
    /// ```
    /// use r3bl_color_string::*;
    ///
    /// let it = ColorString::from_text("Hello ").concat(&RgbaColor::BLUE.colorize("World!"));
    /// let upper = it.with_text(it.text().to_ascii_uppercase());
    /// assert_eq!(upper.text(), "HELLO WORLD!");
    /// assert_eq!(upper.color_at(6), Some(RgbaColor::BLUE));
    /// ```
    #[must_use]
    pub fn with_text(&self, new_text: impl Into<String>) -> ColorString {
        let new_text = new_text.into();
        let candidates = self.markers().anchored(new_text.len());
        Self::from_candidates(new_text, candidates)
    }

    /// Every run recolored with `mapper`. Text before the first marker is passed to it as
    /// [`RgbaColor::DEFAULT`].
    #[must_use]
    pub fn map_colors(&self, mut mapper: impl FnMut(RgbaColor) -> RgbaColor) -> ColorString {
        let candidates = self
            .markers()
            .anchored(self.len())
            .into_iter()
            .map(|marker| marker.with_color(mapper(marker.color)));
        Self::from_candidates(self.to_text(), candidates)
    }

    /// The run at `run_index` (see [`ColorString::run_at`]) recolored. If the new color
    /// matches a neighbor, the runs merge.
    ///
    /// # Errors
    ///
    /// Returns [`ColorStringError::RunIndexOutOfRange`] if there is no such run.
    pub fn with_run_color(
        &self,
        run_index: usize,
        color: RgbaColor,
    ) -> ColorStringResult<ColorString> {
        let mut markers = self.markers().anchored(self.len());
        let run_count = markers.len();
        let Some(marker) = markers.get_mut(run_index) else {
            return Err(ColorStringError::RunIndexOutOfRange {
                index: run_index,
                run_count,
            });
        };
        marker.color = color;
        Ok(Self::from_candidates(self.to_text(), markers))
    }

    /// The byte `range` redrawn in `color`. The text after the range keeps the color it
    /// had.
    ///
    /// # Errors
    ///
    /// Returns [`ColorStringError::SubstringOutOfRange`] if the range isn't valid for the
    /// text.
    pub fn with_range_color(
        &self,
        range: Range<usize>,
        color: RgbaColor,
    ) -> ColorStringResult<ColorString> {
        let middle = self.substring(range.clone())?;
        let before = self.slice(0..range.start);
        let after = self.slice(range.end..self.len());
        Ok(ColorString::concat_all([
            &before,
            &color.colorize(middle.into_text()),
            &after,
        ]))
    }
}
