// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use nom::{IResult, Parser,
          bytes::complete::{tag, take_until},
          sequence::delimited};

use crate::{ColorMarker, ColorString, ColorStringError, ColorStringResult,
            InlineVecColorMarkers, RgbaColor, parse_color_pattern};

/// Opens a color change, eg: `>[#FF0000]`.
pub const MARKUP_OPEN: &str = ">[";
/// Closes the color pattern of a color change.
pub const MARKUP_CLOSE: &str = "]";
/// Escaped form of a literal [`MARKUP_OPEN`].
pub const MARKUP_ESCAPED_OPEN: &str = ">>[";

impl ColorString {
    /// Parse markup, with text before the first color change in [`RgbaColor::DEFAULT`].
    /// See [`crate::markup`] for the grammar.
    ///
    /// ```
    /// use r3bl_color_string::*;
    ///
    /// let it = ColorString::parse_markup(">[#FF0000]Hello>[#0000FF]World").unwrap();
    /// assert_eq!(it.text(), "HelloWorld");
    /// assert_eq!(it.color_at(5), Some(RgbaColor::BLUE));
    /// ```
    ///
    /// # Errors
    ///
    /// - [`ColorStringError::UnterminatedMarkupPattern`] if a `>[` has no closing `]`.
    /// - Any error from [`parse_color_pattern`] for a malformed pattern between them.
    pub fn parse_markup(input: &str) -> ColorStringResult<ColorString> {
        Self::parse_markup_with_start_color(input, RgbaColor::DEFAULT)
    }

    /// Same as [`ColorString::parse_markup`], with text before the first color change in
    /// `start_color`.
    ///
    /// # Errors
    ///
    /// See [`ColorString::parse_markup`].
    pub fn parse_markup_with_start_color(
        input: &str,
        start_color: RgbaColor,
    ) -> ColorStringResult<ColorString> {
        let mut acc_text = String::with_capacity(input.len());
        let mut candidates = InlineVecColorMarkers::new();
        candidates.push(ColorMarker::new(start_color, 0));

        let mut rest = input;
        while !rest.is_empty() {
            if let Ok((remainder, _)) = parse_escaped_open(rest) {
                acc_text.push_str(MARKUP_OPEN);
                rest = remainder;
                continue;
            }

            if rest.starts_with(MARKUP_OPEN) {
                let offset = input.len() - rest.len();
                let Ok((remainder, pattern)) = parse_color_change(rest) else {
                    return Err(ColorStringError::UnterminatedMarkupPattern { offset });
                };
                let color = parse_color_pattern(pattern)?;
                tracing::trace!(
                    message = "markup color change",
                    %color,
                    offset,
                    text_offset = acc_text.len()
                );
                candidates.push(ColorMarker::new(color, acc_text.len()));
                rest = remainder;
                continue;
            }

            let plain_len = plain_text_len(rest);
            acc_text.push_str(&rest[..plain_len]);
            rest = &rest[plain_len..];
        }

        Ok(Self::from_candidates(acc_text, candidates))
    }
}

/// Matches `>>[`.
pub fn parse_escaped_open(input: &str) -> IResult<&str, &str> {
    tag(MARKUP_ESCAPED_OPEN).parse(input)
}

/// Matches `>[pattern]` and returns the pattern, which isn't validated here.
#[rustfmt::skip]
pub fn parse_color_change(input: &str) -> IResult<&str, &str> {
    delimited(
        tag(MARKUP_OPEN),
        take_until(MARKUP_CLOSE),
        tag(MARKUP_CLOSE),
    ).parse(input)
}

/// Length of the plain text at the start of `input`, up to the next `>[` or `>>[`.
/// `input` must not start with either of them.
fn plain_text_len(input: &str) -> usize {
    match input.find(MARKUP_OPEN) {
        None => input.len(),
        // Leave the `>` of a `>>[` to the escape.
        Some(index) if input[..index].ends_with('>') => index - 1,
        Some(index) => index,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;
    use crate::ColorRun;

    fn runs(it: &ColorString) -> Vec<(&str, RgbaColor)> {
        it.runs().map(|ColorRun { text, color }| (text, color)).collect()
    }

    #[test]
    fn test_parse_two_runs() {
        let it = ColorString::parse_markup(">[#FF0000]Hello>[#0000FF]World").unwrap();
        assert_eq!(
            runs(&it),
            vec![("Hello", RgbaColor::RED), ("World", RgbaColor::BLUE)]
        );
    }

    #[test]
    fn test_parse_escaped_open() {
        let it = ColorString::parse_markup(">>[#FF0000]Hello").unwrap();
        assert_eq!(runs(&it), vec![(">[#FF0000]Hello", RgbaColor::DEFAULT)]);
    }

    #[test]
    fn test_parse_plain_text_and_lone_angle_brackets() {
        let it = ColorString::parse_markup("a > b [c] >").unwrap();
        assert_eq!(runs(&it), vec![("a > b [c] >", RgbaColor::DEFAULT)]);
    }

    #[test_case(">>>[x]", ">>[x]")]
    #[test_case("a>>[b", "a>[b")]
    #[test_case(">>[>>[", ">[>[")]
    fn test_parse_escape_sequences(input: &str, expected: &str) {
        assert_eq!(ColorString::parse_markup(input).unwrap().text(), expected);
    }

    #[test]
    fn test_parse_start_color() {
        let it =
            ColorString::parse_markup_with_start_color("Hi>[0,255,0]there", RgbaColor::RED)
                .unwrap();
        assert_eq!(
            runs(&it),
            vec![("Hi", RgbaColor::RED), ("there", RgbaColor::GREEN)]
        );
    }

    #[test]
    fn test_parse_consecutive_changes_last_wins() {
        let it = ColorString::parse_markup(">[#FF0000]>[#00FF00]go").unwrap();
        assert_eq!(runs(&it), vec![("go", RgbaColor::GREEN)]);
    }

    #[test]
    fn test_parse_repeated_color_merges() {
        let it = ColorString::parse_markup(">[#FF0000]a>[255,0,0]b").unwrap();
        assert_eq!(runs(&it), vec![("ab", RgbaColor::RED)]);
        assert_eq!(it.markers().len(), 1);
    }

    #[test]
    fn test_parse_trailing_change_has_no_run() {
        let it = ColorString::parse_markup(">[#FF0000]a>[#0000FF]").unwrap();
        assert_eq!(runs(&it), vec![("a", RgbaColor::RED)]);
    }

    #[test]
    fn test_parse_empty() {
        let it = ColorString::parse_markup("").unwrap();
        assert_eq!(it, ColorString::new());
    }

    #[test]
    fn test_parse_alpha_and_multi_byte() {
        let it = ColorString::parse_markup("é>[#FF000080]ü").unwrap();
        assert_eq!(
            runs(&it),
            vec![
                ("é", RgbaColor::DEFAULT),
                ("ü", RgbaColor::RED.with_alpha(128))
            ]
        );
    }

    #[test_case(">[#FF0000", 0)]
    #[test_case("abc>[12,", 3)]
    #[test_case(">[#FF0000]ok>[", 12)]
    fn test_parse_unterminated(input: &str, offset: usize) {
        assert_eq!(
            ColorString::parse_markup(input),
            Err(ColorStringError::UnterminatedMarkupPattern { offset })
        );
    }

    #[test]
    fn test_parse_bad_pattern() {
        let error = ColorString::parse_markup(">[red]x").unwrap_err();
        assert_eq!(
            error,
            ColorStringError::InvalidPatternStart {
                pattern: "red".into()
            }
        );
        assert!(error.is_format_error());
        assert_eq!(
            ColorString::parse_markup(">[]x"),
            Err(ColorStringError::EmptyColorPattern)
        );
    }

    #[test]
    fn test_nom_parsers() {
        assert_eq!(parse_color_change(">[#FF0000]rest"), Ok(("rest", "#FF0000")));
        assert!(parse_color_change(">[#FF0000").is_err());
        assert_eq!(parse_escaped_open(">>[x"), Ok(("x", ">>[")));
    }
}
