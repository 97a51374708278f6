// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)

/// Type alias for the result of every fallible operation in this crate.
pub type ColorStringResult<T> = Result<T, ColorStringError>;

/// Errors surfaced by color pattern parsing, markup parsing and encoding, and run /
/// substring indexing.
///
/// The variants fall into two families:
///
/// | Family  | Variants                                                                                                                                                                                  | Cause                          |
/// | :------ | :---------------------------------------------------------------------------------------------------------------------------------------------------------------------------------------- | :----------------------------- |
/// | Format  | [`EmptyColorPattern`], [`InvalidPatternStart`], [`InvalidHexLength`], [`InvalidPartCount`], [`InvalidChannel`], [`UnknownColorFormat`], [`UnterminatedMarkupPattern`], [`UnencodableRunBoundary`] | Malformed input text           |
/// | Range   | [`RunIndexOutOfRange`], [`SubstringOutOfRange`]                                                                                                                                           | Caller indexed past the bounds |
///
/// None of these are retryable; inputs are deterministic.
///
/// [`EmptyColorPattern`]: Self::EmptyColorPattern
/// [`InvalidPatternStart`]: Self::InvalidPatternStart
/// [`InvalidHexLength`]: Self::InvalidHexLength
/// [`InvalidPartCount`]: Self::InvalidPartCount
/// [`InvalidChannel`]: Self::InvalidChannel
/// [`UnknownColorFormat`]: Self::UnknownColorFormat
/// [`UnterminatedMarkupPattern`]: Self::UnterminatedMarkupPattern
/// [`UnencodableRunBoundary`]: Self::UnencodableRunBoundary
/// [`RunIndexOutOfRange`]: Self::RunIndexOutOfRange
/// [`SubstringOutOfRange`]: Self::SubstringOutOfRange
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum ColorStringError {
    #[error("Color pattern is empty")]
    #[diagnostic(
        code(r3bl_color_string::color::empty_pattern),
        help("Use hex `#RRGGBB`, `#RRGGBBAA` or decimal `R,G,B`, `R,G,B,A`")
    )]
    EmptyColorPattern,

    #[error("Color pattern '{pattern}' must start with `#` or a digit")]
    #[diagnostic(
        code(r3bl_color_string::color::invalid_pattern_start),
        help("Use hex `#RRGGBB`, `#RRGGBBAA` or decimal `R,G,B`, `R,G,B,A`")
    )]
    InvalidPatternStart { pattern: String },

    #[error("Hex color pattern '{pattern}' is {len} characters long, expected 7 or 9")]
    #[diagnostic(
        code(r3bl_color_string::color::invalid_hex_length),
        help("Use `#FF0000` or `#FF0000FF`")
    )]
    InvalidHexLength { pattern: String, len: usize },

    #[error("Decimal color pattern '{pattern}' has {count} parts, expected 3 or 4")]
    #[diagnostic(
        code(r3bl_color_string::color::invalid_part_count),
        help("Use `100,100,100` or `255,0,0,255`")
    )]
    InvalidPartCount { pattern: String, count: usize },

    #[error("Channel '{channel}' in color pattern '{pattern}' is not a number in 0..=255")]
    #[diagnostic(code(r3bl_color_string::color::invalid_channel))]
    InvalidChannel { pattern: String, channel: String },

    #[error("Unknown color format '{format}'")]
    #[diagnostic(
        code(r3bl_color_string::color::unknown_format),
        help("Use one of `hex`, `hex4`, `rgb`, `rgba`")
    )]
    UnknownColorFormat { format: String },

    #[error("Markup color pattern starting at byte {offset} has no closing `]`")]
    #[diagnostic(
        code(r3bl_color_string::markup::unterminated_pattern),
        help("Close the pattern like `>[#FF0000]`, or escape a literal `>[` as `>>[`")
    )]
    UnterminatedMarkupPattern { offset: usize },

    #[error("Run ending in `>` at byte {offset} can't be followed by a color change in markup")]
    #[diagnostic(
        code(r3bl_color_string::markup::unencodable_run_boundary),
        help("The markup grammar reads `>>[` as an escaped `>[`")
    )]
    UnencodableRunBoundary { offset: usize },

    #[error("Run index {index} is out of range, there are {run_count} runs")]
    #[diagnostic(code(r3bl_color_string::range::run_index))]
    RunIndexOutOfRange { index: usize, run_count: usize },

    #[error("Byte range {start}..{end} is out of range or splits a char, text length is {len}")]
    #[diagnostic(code(r3bl_color_string::range::substring))]
    SubstringOutOfRange { start: usize, end: usize, len: usize },
}

impl ColorStringError {
    /// `true` for malformed color patterns, markup, and unknown format requests.
    #[must_use]
    pub fn is_format_error(&self) -> bool { !self.is_range_error() }

    /// `true` when a run index or byte range was out of bounds.
    #[must_use]
    pub fn is_range_error(&self) -> bool {
        matches!(
            self,
            Self::RunIndexOutOfRange { .. } | Self::SubstringOutOfRange { .. }
        )
    }
}
