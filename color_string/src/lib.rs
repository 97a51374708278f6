// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_color_string
//!
//! A [`ColorString`] is a plain [`String`] overlaid with a sparse list of
//! [`ColorMarker`]s. Each marker says "from this byte offset on, until the next marker,
//! the text is drawn in this [`RgbaColor`]". A maximal span of text drawn in a single
//! color is a *run* ([`ColorRun`]).
//!
//! ```text
//! text    : H e l l o ,   U n i v e r s e !
//! offset  : 0 1 2 3 4 5 6 7 8 9 ...       15
//! markers : ▲ WHITE       ▲ BLUE          ▲ WHITE
//! runs    : ("Hello, ", WHITE) ("Universe", BLUE) ("!", WHITE)
//! ```
//!
//! Every operation that derives a new [`ColorString`] (concatenation, padding, substring,
//! trim, split, join, replace, recolor) funnels its candidate marker list through a
//! single normalize pass (see [`MarkerList`]), which guarantees that:
//!
//! 1. markers are sorted strictly ascending by offset,
//! 2. no two markers share an offset (the one written last wins),
//! 3. no two adjacent markers carry the same color,
//! 4. every offset is inside the text and on a `char` boundary.
//!
//! # Rendering
//!
//! - [`ColorString::runs()`] is the single rendering primitive.
//! - [`ColoredConsole`] maps each run onto the nearest entry of a 16 color
//!   [`ConsolePalette`] and writes it with [crossterm].
//! - [`ColorString::to_markup()`] and [`ColorString::parse_markup()`] convert to and from
//!   the `>[#RRGGBB]text` markup.
//!
//! Encoding to markup can fail for ordinary strings: a run whose text ends in `>`
//! followed by another run has no representation, since `>` + `>[` reads back as the
//! `>>[` escape. [`ColorString::to_markup()`] returns
//! [`ColorStringError::UnencodableRunBoundary`] for these instead of lossy markup.
//!
//! ```
//! use r3bl_color_string::{ColorStringError, RgbaColor};
//!
//! let it = RgbaColor::RED.colorize("a>").concat(&RgbaColor::BLUE.colorize("b"));
//! assert_eq!(
//!     it.to_markup(),
//!     Err(ColorStringError::UnencodableRunBoundary { offset: 1 })
//! );
//! ```
//!
//! ```
//! use r3bl_color_string::{ColorString, RgbaColor};
//!
//! let it = ColorString::from_text("Hello, World!")
//!     .replace("World", &RgbaColor::BLUE.colorize("Universe"));
//! let runs: Vec<_> = it.runs().map(|run| (run.text, run.color)).collect();
//! assert_eq!(
//!     runs,
//!     vec![
//!         ("Hello, ", RgbaColor::WHITE),
//!         ("Universe", RgbaColor::BLUE),
//!         ("!", RgbaColor::WHITE),
//!     ]
//! );
//! ```

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules (re-exported below to provide clean public API).
pub mod color;
pub mod color_string;
pub mod common;
pub mod log;
pub mod markup;
pub mod terminal;

// Re-export.
pub use color::*;
pub use color_string::*;
pub use common::*;
pub use log::*;
pub use markup::*;
pub use terminal::*;
