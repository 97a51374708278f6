// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! RGBA color values.
//!
//! This module provides:
//! - **Value type**: [`RgbaColor`], four 8 bit channels with alpha defaulting to opaque
//! - **Parsing**: hex (`#RRGGBB`, `#RRGGBBAA`) and decimal (`R,G,B`, `R,G,B,A`) patterns
//!   via [`parse_color_pattern`], built on [nom]
//! - **Formatting**: [`ColorFormat`] selects `hex`, `hex4`, `rgb` or `rgba` output
//! - **Math**: [`RgbaColor::distance`] (RGB only) and [`RgbaColor::layer_with`] (alpha
//!   compositing)

// Attach.
mod color_format;
mod color_pattern_parser;
mod rgba_color;

// Re-export.
pub use color_format::*;
pub use color_pattern_parser::*;
pub use rgba_color::*;
