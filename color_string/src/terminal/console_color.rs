// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::{Display, EnumCount, EnumIter, EnumString};

use crate::RgbaColor;

/// The 16 colors of a classic console, in palette order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumCount,
    EnumIter,
    EnumString,
)]
#[strum(serialize_all = "snake_case")]
pub enum ConsoleColor {
    Black,
    DarkBlue,
    DarkGreen,
    DarkCyan,
    DarkRed,
    DarkMagenta,
    DarkYellow,
    Gray,
    DarkGray,
    Blue,
    Green,
    Cyan,
    Red,
    Magenta,
    Yellow,
    White,
}

impl ConsoleColor {
    /// The RGB value this console color stands for.
    #[must_use]
    pub const fn rgba(self) -> RgbaColor {
        match self {
            ConsoleColor::Black => RgbaColor::BLACK,
            ConsoleColor::DarkBlue => RgbaColor::DARK_BLUE,
            ConsoleColor::DarkGreen => RgbaColor::DARK_GREEN,
            ConsoleColor::DarkCyan => RgbaColor::DARK_CYAN,
            ConsoleColor::DarkRed => RgbaColor::DARK_RED,
            ConsoleColor::DarkMagenta => RgbaColor::DARK_MAGENTA,
            ConsoleColor::DarkYellow => RgbaColor::DARK_YELLOW,
            ConsoleColor::Gray => RgbaColor::GRAY,
            ConsoleColor::DarkGray => RgbaColor::DARK_GRAY,
            ConsoleColor::Blue => RgbaColor::BLUE,
            ConsoleColor::Green => RgbaColor::GREEN,
            ConsoleColor::Cyan => RgbaColor::CYAN,
            ConsoleColor::Red => RgbaColor::RED,
            ConsoleColor::Magenta => RgbaColor::MAGENTA,
            ConsoleColor::Yellow => RgbaColor::YELLOW,
            ConsoleColor::White => RgbaColor::WHITE,
        }
    }
}

/// The console's light gray is crossterm's [`crossterm::style::Color::Grey`], and its
/// dark gray is the bright black [`crossterm::style::Color::DarkGrey`].
impl From<ConsoleColor> for crossterm::style::Color {
    fn from(value: ConsoleColor) -> Self {
        match value {
            ConsoleColor::Black => Self::Black,
            ConsoleColor::DarkBlue => Self::DarkBlue,
            ConsoleColor::DarkGreen => Self::DarkGreen,
            ConsoleColor::DarkCyan => Self::DarkCyan,
            ConsoleColor::DarkRed => Self::DarkRed,
            ConsoleColor::DarkMagenta => Self::DarkMagenta,
            ConsoleColor::DarkYellow => Self::DarkYellow,
            ConsoleColor::Gray => Self::Grey,
            ConsoleColor::DarkGray => Self::DarkGrey,
            ConsoleColor::Blue => Self::Blue,
            ConsoleColor::Green => Self::Green,
            ConsoleColor::Cyan => Self::Cyan,
            ConsoleColor::Red => Self::Red,
            ConsoleColor::Magenta => Self::Magenta,
            ConsoleColor::Yellow => Self::Yellow,
            ConsoleColor::White => Self::White,
        }
    }
}
