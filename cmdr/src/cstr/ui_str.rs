// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use r3bl_color_string::{ColorString, RgbaColor};

pub fn unrecoverable_error_message(report: &miette::Report) -> ColorString {
    RgbaColor::RED.colorize(format!(
        "Could not run cstr due to the following problem:\n{report:?}"
    ))
}

pub fn demo_heading(title: &str) -> ColorString {
    RgbaColor::CYAN
        .colorize("▶ ")
        .concat(&RgbaColor::DARK_GRAY.colorize(title))
}

/// Shown in place of a line that `cstr echo --markup` can't parse.
pub fn invalid_markup_line_message(line: &str, error: &str) -> ColorString {
    ColorString::concat_all([
        &RgbaColor::RED.colorize("✗ "),
        &ColorString::from_text(line),
        &RgbaColor::DARK_YELLOW.colorize(format!(" ({error})")),
    ])
}
