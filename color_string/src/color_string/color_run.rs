// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ColorString, ColorStringError, ColorStringResult, RgbaColor};

/// A maximal piece of text drawn in a single color. This is what a [`ColorString`]
/// renders to, and what [`crate::ColoredConsole`] writes out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorRun<'a> {
    pub text: &'a str,
    pub color: RgbaColor,
}

impl ColorString {
    /// The runs of `self`, in order. Concatenating their text gives back
    /// [`ColorString::text`]. A leading region without a marker is one run in
    /// [`RgbaColor::DEFAULT`]. The empty string has no runs.
    pub fn runs(&self) -> impl Iterator<Item = ColorRun<'_>> + '_ {
        let markers = self.markers().anchored(self.len());
        let text = self.text();
        (0..markers.len()).map(move |index| {
            let start = markers[index].start_index;
            let end = markers
                .get(index + 1)
                .map_or(text.len(), |next| next.start_index);
            ColorRun {
                text: &text[start..end],
                color: markers[index].color,
            }
        })
    }

    #[must_use]
    pub fn run_count(&self) -> usize { self.markers().anchored(self.len()).len() }

    /// # Errors
    ///
    /// Returns [`ColorStringError::RunIndexOutOfRange`] if there is no run at `index`.
    pub fn run_at(&self, index: usize) -> ColorStringResult<ColorRun<'_>> {
        let run_count = self.run_count();
        self.runs()
            .nth(index)
            .ok_or(ColorStringError::RunIndexOutOfRange { index, run_count })
    }

    #[must_use]
    pub fn to_runs(&self) -> Vec<ColorRun<'_>> { self.runs().collect() }
}
