// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Draw a [`crate::ColorString`] on a 16 color terminal, and read plain lines back in.
//!
//! 1. [`ConsoleColor`] is the fixed set of 16 colors a classic console can show.
//! 2. [`ConsolePalette`] maps any [`crate::RgbaColor`] to the nearest one of them.
//! 3. [`ColoredConsole`] writes each run with [crossterm] in its mapped color.

// Attach.
mod colored_console;
mod console_color;
mod console_palette;

// Re-export.
pub use colored_console::*;
pub use console_color::*;
pub use console_palette::*;
