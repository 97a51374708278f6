// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl-color-string-cmdr
//!
//! The `cstr` binary, a small command line front end for [`r3bl_color_string`].
//!
//! ```text
//! cstr demo                          # replace, split, recolor and markup demos
//! cstr render 'Hi >[#00FF00]there'   # print markup in color
//! cstr render -c 255,0,0 'all red'   # color of text before the first change
//! cat notes.txt | cstr echo --markup # echo stdin in color until end of input
//! cstr encode 'a>[255,0,0]b'         # print canonical markup
//! cstr -l demo                       # log to `log.txt` at DEBUG level
//! ```

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Include.
pub mod cstr;

// Reexport.
pub use cstr::*;
