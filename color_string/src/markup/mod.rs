// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Text form of a [`crate::ColorString`].
//!
//! ```text
//! >[#FF0000]Hello>[0,0,255]World>>[not a color]
//! ```
//!
//! - `>[` + color pattern + `]` starts a new run in that color. Any pattern accepted by
//!   [`crate::parse_color_pattern`] works.
//! - `>>[` is an escaped literal `>[`.
//! - Everything else is plain text in the current color.

// Attach.
mod markup_encoder;
mod markup_parser;

// Re-export.
pub use markup_encoder::*;
pub use markup_parser::*;
