// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use smallvec::SmallVec;
use strum::{EnumCount, IntoEnumIterator};

use crate::{ConsoleColor, RgbaColor};

/// One console color and the RGB value it is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaletteEntry {
    pub console_color: ConsoleColor,
    pub rgba: RgbaColor,
}

pub type InlineVecPaletteEntries = SmallVec<[PaletteEntry; ConsoleColor::COUNT]>;

/// The target palette for [`crate::ColoredConsole`]. [`Default`] is all 16
/// [`ConsoleColor`]s, each matched against [`ConsoleColor::rgba`].
///
/// Pass a custom palette to match against a terminal theme's real RGB values, or to
/// restrict output to fewer colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsolePalette {
    entries: InlineVecPaletteEntries,
}

impl Default for ConsolePalette {
    fn default() -> Self {
        Self::new(ConsoleColor::iter().map(|console_color| PaletteEntry {
            console_color,
            rgba: console_color.rgba(),
        }))
    }
}

impl ConsolePalette {
    pub fn new(entries: impl IntoIterator<Item = PaletteEntry>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[PaletteEntry] { &self.entries }

    /// The entry closest to `color` by [`RgbaColor::distance`]. On a tie the entry that
    /// comes first in the palette wins. [`None`] only for an empty palette.
    #[must_use]
    pub fn nearest(&self, color: &RgbaColor) -> Option<ConsoleColor> {
        self.entries
            .iter()
            .map(|entry| (entry.console_color, entry.rgba.distance(color)))
            .min_by(|(_, lhs), (_, rhs)| lhs.total_cmp(rhs))
            .map(|(console_color, _)| console_color)
    }
}
