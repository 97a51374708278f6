// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::RgbaColor;

/// Macro to make building [`ColorMarker`] easy.
///
/// ```
/// use r3bl_color_string::*;
///
/// let marker = color_marker!(@color: RgbaColor::RED, @at: 6);
/// assert_eq!(marker, ColorMarker::new(RgbaColor::RED, 6));
/// ```
#[macro_export]
macro_rules! color_marker {
    (
        @color: $color_arg: expr,
        @at: $start_index_arg: expr
        $(,)* /* Optional trailing comma https://stackoverflow.com/a/43143459/2085356. */
    ) => {
        $crate::ColorMarker::new($color_arg, $start_index_arg)
    };
}

/// From `start_index` (inclusive, a byte offset into the owning text) until the next
/// marker's `start_index` (exclusive), or the end of the text, the active color is
/// `color`.
///
/// Markers are plain [Copy] values, so every [`crate::ColorString`] owns its own copies
/// and mutating one never affects another.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct ColorMarker {
    pub color: RgbaColor,
    pub start_index: usize,
}

impl ColorMarker {
    #[must_use]
    pub const fn new(color: RgbaColor, start_index: usize) -> Self {
        Self { color, start_index }
    }

    /// Copy of `self` moved `delta` bytes to the right.
    #[must_use]
    pub const fn shifted(self, delta: usize) -> Self {
        Self::new(self.color, self.start_index + delta)
    }

    /// Copy of `self` anchored at a different offset.
    #[must_use]
    pub const fn at(self, start_index: usize) -> Self { Self::new(self.color, start_index) }

    /// Copy of `self` with a different color.
    #[must_use]
    pub const fn with_color(self, color: RgbaColor) -> Self {
        Self::new(color, self.start_index)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_copies_are_independent() {
        let original = color_marker!(@color: RgbaColor::RED, @at: 2);
        let moved = original.shifted(3);
        let recolored = original.with_color(RgbaColor::BLUE);

        assert_eq!(original, ColorMarker::new(RgbaColor::RED, 2));
        assert_eq!(moved, ColorMarker::new(RgbaColor::RED, 5));
        assert_eq!(recolored, ColorMarker::new(RgbaColor::BLUE, 2));
        assert_eq!(original.at(0), ColorMarker::new(RgbaColor::RED, 0));
    }
}
