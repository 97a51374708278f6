// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

use crate::{ColorMarker, MarkerList, RgbaColor};

/// Text annotated with color markers.
///
/// ```text
/// text:     H e l l o ,   W o r l d !
/// offset:   0 1 2 3 4 5 6 7 8 9 10  12
/// markers:  ^ WHITE       ^ BLUE    ^ WHITE
/// runs:     "Hello, "     "World"   "!"
/// ```
///
/// A [`ColorString`] is an immutable value: every operation returns a new one, and the
/// markers are always normalized for the text (see [`MarkerList`]). Offsets are byte
/// offsets into [`ColorString::text`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ColorString {
    text: String,
    markers: MarkerList,
}

impl ColorString {
    /// The empty string. It has no markers.
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// `text` in [`RgbaColor::DEFAULT`].
    #[must_use]
    pub fn from_text(text: impl Into<String>) -> Self {
        Self::from_color_text(RgbaColor::DEFAULT, text)
    }

    /// `text` drawn entirely in `color`.
    #[must_use]
    pub fn from_color_text(color: RgbaColor, text: impl Into<String>) -> Self {
        Self::from_candidates(text.into(), [ColorMarker::new(color, 0)])
    }

    /// `text` with an explicit marker list, which is normalized for `text`. Markers that
    /// don't fit the text are dropped.
    #[must_use]
    pub fn from_parts(
        text: impl Into<String>,
        markers: impl IntoIterator<Item = ColorMarker>,
    ) -> Self {
        Self::from_candidates(text.into(), markers)
    }

    /// Every operation that derives a new value funnels through here.
    pub(crate) fn from_candidates(
        text: String,
        candidates: impl IntoIterator<Item = ColorMarker>,
    ) -> Self {
        let markers = MarkerList::normalize(candidates, &text);
        debug_assert!(
            markers.is_normalized_for(&text),
            "normalize produced an invalid marker list: {markers:?}"
        );
        Self { text, markers }
    }

    #[must_use]
    pub fn text(&self) -> &str { &self.text }

    /// Plain text, without any color information.
    #[must_use]
    pub fn to_text(&self) -> String { self.text.clone() }

    #[must_use]
    pub fn into_text(self) -> String { self.text }

    #[must_use]
    pub fn markers(&self) -> &MarkerList { &self.markers }

    /// Length of the text in bytes.
    #[must_use]
    pub fn len(&self) -> usize { self.text.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.text.is_empty() }

    /// The color active at byte `offset`, or [`None`] if `offset` is past the end of the
    /// text. Text before the first marker is in [`RgbaColor::DEFAULT`].
    #[must_use]
    pub fn color_at(&self, offset: usize) -> Option<RgbaColor> {
        if offset >= self.text.len() {
            return None;
        }
        Some(self.markers.last_color_until(offset).unwrap_or_default())
    }
}

/// Only the plain text is written. Use [`crate::ColoredConsole`] to render the colors.
impl Display for ColorString {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { write!(f, "{}", self.text) }
}
