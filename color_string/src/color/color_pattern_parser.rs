// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! This module contains a parser that turns a color pattern into a [`RgbaColor`]. Two
//! shapes of pattern are accepted:
//!
//! | Shape   | Examples                   | Alpha when omitted |
//! | :------ | :------------------------- | :----------------- |
//! | Hex     | `#FF0000`, `#ff0000cc`     | `255`              |
//! | Decimal | `255,0,0`, `255, 0, 0, 128`| `255`              |
//!
//! The shape is picked by the first character, then its length (hex) or part count
//! (decimal) is validated before [nom] parses the individual channels.

use nom::{IResult, Parser,
          bytes::complete::{tag, take_while_m_n},
          character::complete::{digit1, space0},
          combinator::{all_consuming, map_res, opt},
          sequence::delimited};

use crate::{ColorStringError, ColorStringResult, RgbaColor};

/// Marks the start of a hex pattern.
pub const HEX_PATTERN_PREFIX: char = '#';
/// Separates the channels of a decimal pattern.
pub const DECIMAL_PATTERN_SEPARATOR: char = ',';

/// Parse a hex (`#RRGGBB`, `#RRGGBBAA`) or decimal (`R,G,B`, `R,G,B,A`) color pattern.
///
/// # Errors
///
/// - [`ColorStringError::EmptyColorPattern`] for `""`.
/// - [`ColorStringError::InvalidPatternStart`] if it starts with neither `#` nor a digit.
/// - [`ColorStringError::InvalidHexLength`] if a hex pattern isn't 7 or 9 chars long.
/// - [`ColorStringError::InvalidPartCount`] if a decimal pattern doesn't have 3 or 4
///   parts.
/// - [`ColorStringError::InvalidChannel`] if any channel isn't a number in `0..=255`.
pub fn parse_color_pattern(pattern: &str) -> ColorStringResult<RgbaColor> {
    let Some(first_char) = pattern.chars().next() else {
        return Err(ColorStringError::EmptyColorPattern);
    };

    match first_char {
        HEX_PATTERN_PREFIX => parse_hex_pattern(pattern),
        it if it.is_ascii_digit() => parse_decimal_pattern(pattern),
        _ => Err(ColorStringError::InvalidPatternStart {
            pattern: pattern.to_string(),
        }),
    }
}

fn parse_hex_pattern(pattern: &str) -> ColorStringResult<RgbaColor> {
    let len = pattern.chars().count();
    if len != 7 && len != 9 {
        return Err(ColorStringError::InvalidHexLength {
            pattern: pattern.to_string(),
            len,
        });
    }

    match parse_hex_color(pattern) {
        Ok((_, color)) => Ok(color),
        Err(nom::Err::Error(err) | nom::Err::Failure(err)) => {
            Err(ColorStringError::InvalidChannel {
                pattern: pattern.to_string(),
                channel: err.input.chars().take(2).collect(),
            })
        }
        Err(nom::Err::Incomplete(_)) => Err(ColorStringError::InvalidChannel {
            pattern: pattern.to_string(),
            channel: pattern.to_string(),
        }),
    }
}

fn parse_decimal_pattern(pattern: &str) -> ColorStringResult<RgbaColor> {
    let parts: Vec<&str> = pattern.split(DECIMAL_PATTERN_SEPARATOR).collect();
    if parts.len() != 3 && parts.len() != 4 {
        return Err(ColorStringError::InvalidPartCount {
            pattern: pattern.to_string(),
            count: parts.len(),
        });
    }

    let mut channels = [u8::MAX; 4];
    for (slot, part) in channels.iter_mut().zip(&parts) {
        *slot = match parse_decimal_channel(part) {
            Ok((_, value)) => value,
            Err(_) => {
                return Err(ColorStringError::InvalidChannel {
                    pattern: pattern.to_string(),
                    channel: (*part).to_string(),
                });
            }
        };
    }

    let [red, green, blue, alpha] = channels;
    Ok(RgbaColor::from_rgba(red, green, blue, alpha))
}

/// Parse function that generates a [`RgbaColor`] from a complete hex color string. The
/// alpha segment is optional.
#[rustfmt::skip]
pub fn parse_hex_color(input: &str) -> IResult<&str, RgbaColor> {
    let (input, (_, red, green, blue, alpha)) = all_consuming((
        tag("#"),
        helper_fns::parse_hex_seg,
        helper_fns::parse_hex_seg,
        helper_fns::parse_hex_seg,
        /* optional */ opt(helper_fns::parse_hex_seg),
    ))
    .parse(input)?;
    Ok((input, RgbaColor::from_rgba(red, green, blue, alpha.unwrap_or(u8::MAX))))
}

/// Parse one decimal channel. Surrounding spaces are allowed, eg: `" 128"`.
#[rustfmt::skip]
pub fn parse_decimal_channel(input: &str) -> IResult<&str, u8> {
    all_consuming(
        delimited(
            space0,
            map_res(digit1, helper_fns::parse_str_to_dec_num),
            space0,
        )
    ).parse(input)
}

/// Helper functions to match and parse digits.
mod helper_fns {
    use super::{IResult, Parser, map_res, take_while_m_n};

    /// This function is used by [`map_res`] and it returns a [Result], not [`IResult`].
    pub fn parse_str_to_hex_num(input: &str) -> Result<u8, std::num::ParseIntError> {
        u8::from_str_radix(input, 16)
    }

    /// This function is used by [`map_res`] and it returns a [Result], not [`IResult`].
    pub fn parse_str_to_dec_num(input: &str) -> Result<u8, std::num::ParseIntError> {
        input.parse::<u8>()
    }

    /// This function is used by [`take_while_m_n`] and as long as it returns `true`
    /// items will be taken from the input.
    pub fn match_is_hex_digit(c: char) -> bool { c.is_ascii_hexdigit() }

    pub fn parse_hex_seg(input: &str) -> IResult<&str, u8> {
        map_res(
            take_while_m_n(2, 2, match_is_hex_digit),
            parse_str_to_hex_num,
        )
        .parse(input)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case("#FF0000", RgbaColor::from_rgba(255, 0, 0, 255))]
    #[test_case("#ff0000", RgbaColor::from_rgba(255, 0, 0, 255))]
    #[test_case("#2F14DF80", RgbaColor::from_rgba(47, 20, 223, 128))]
    #[test_case("0,128,0", RgbaColor::from_rgba(0, 128, 0, 255))]
    #[test_case("255,0,0,64", RgbaColor::from_rgba(255, 0, 0, 64))]
    #[test_case("10, 20, 30", RgbaColor::from_rgba(10, 20, 30, 255))]
    fn test_parse_valid_pattern(pattern: &str, expected: RgbaColor) {
        assert_eq!(parse_color_pattern(pattern), Ok(expected));
    }

    #[test]
    fn test_parse_empty_pattern() {
        assert_eq!(
            parse_color_pattern(""),
            Err(ColorStringError::EmptyColorPattern)
        );
    }

    #[test_case("red")]
    #[test_case(" 1,2,3")]
    #[test_case("-1,2,3")]
    fn test_parse_invalid_start(pattern: &str) {
        assert_eq!(
            parse_color_pattern(pattern),
            Err(ColorStringError::InvalidPatternStart {
                pattern: pattern.into()
            })
        );
    }

    #[test_case("#FFF", 4)]
    #[test_case("#FF00000", 8)]
    #[test_case("#FF0000FF00", 11)]
    fn test_parse_invalid_hex_length(pattern: &str, len: usize) {
        assert_eq!(
            parse_color_pattern(pattern),
            Err(ColorStringError::InvalidHexLength {
                pattern: pattern.into(),
                len
            })
        );
    }

    #[test_case("1,2", 2)]
    #[test_case("1,2,3,4,5", 5)]
    fn test_parse_invalid_part_count(pattern: &str, count: usize) {
        assert_eq!(
            parse_color_pattern(pattern),
            Err(ColorStringError::InvalidPartCount {
                pattern: pattern.into(),
                count
            })
        );
    }

    #[test_case("#GG0000", "GG")]
    #[test_case("#FF00Z0", "Z0")]
    #[test_case("#FF0000XY", "XY")]
    #[test_case("1,256,3", "256")]
    #[test_case("1,2,", "")]
    #[test_case("1,2,3,x", "x")]
    fn test_parse_invalid_channel(pattern: &str, channel: &str) {
        assert_eq!(
            parse_color_pattern(pattern),
            Err(ColorStringError::InvalidChannel {
                pattern: pattern.into(),
                channel: channel.into()
            })
        );
    }

    #[test]
    fn test_parse_hex_color_nom() {
        let result = parse_hex_color("#2F14DF");
        let Ok((remainder, color)) = result else {
            panic!("expected a color");
        };
        assert_eq!(remainder, "");
        assert_eq!(color, RgbaColor::from_rgb(47, 20, 223));

        assert!(parse_hex_color("🔅#2F14DF").is_err());
    }
}
