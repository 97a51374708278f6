// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The annotated string and its string algebra.
//!
//! - [`ColorMarker`]: a `(color, byte offset)` pair where a run starts.
//! - [`MarkerList`]: the sorted, de-duplicated, gap encoded list of markers, and the
//!   normalize pass that every derived list goes through.
//! - [`ColorString`]: text plus markers, with concatenation, padding, substring, trim,
//!   split, join, replace and recolor operations that keep the markers consistent.
//! - [`ColorRun`]: the `(text, color)` pairs that a [`ColorString`] renders to.

// Attach.
mod color_marker;
mod color_run;
mod color_string_struct;
mod concat_and_pad;
mod marker_list;
mod recolor;
mod replace;
mod slice_and_trim;
mod split_and_join;

// Re-export.
pub use color_marker::*;
pub use color_run::*;
pub use color_string_struct::*;
pub use concat_and_pad::*;
pub use marker_list::*;
pub use recolor::*;
pub use replace::*;
pub use slice_and_trim::*;
pub use split_and_join::*;
