// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Display, Formatter, Result},
          str::FromStr};

use smallstr::SmallString;

use crate::{ColorFormat, ColorString, ColorStringError, ColorStringResult,
            parse_color_pattern};

pub(in crate::color) mod sizing {
    use super::SmallString;

    /// The longest formatted color is `rgba(255, 255, 255, 255)`, which is 24 bytes.
    pub(crate) const MAX_FORMATTED_COLOR_SIZE: usize = 24;
    pub type StringFormattedColor = SmallString<[u8; MAX_FORMATTED_COLOR_SIZE]>;
}

pub use sizing::StringFormattedColor;

/// An immutable RGBA color. All four channels are 8 bit, so they are always in
/// `0..=255`. Equality is exact over all four channels.
///
/// Operations never mutate a color, they return a new one (the type is [Copy]).
///
/// ```
/// use r3bl_color_string::{RgbaColor, ColorFormat};
///
/// let red: RgbaColor = "#FF0000".parse().unwrap();
/// assert_eq!(red, RgbaColor::RED);
/// assert_eq!(red.format(ColorFormat::Rgba).as_str(), "rgba(255, 0, 0, 255)");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct RgbaColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

/// Named colors. These are the 16 colors of the classic console palette.
impl RgbaColor {
    /// `#000000`, `rgb(0, 0, 0)`.
    pub const BLACK: Self = Self::from_rgb(0, 0, 0);
    /// `#000080`, `rgb(0, 0, 128)`.
    pub const DARK_BLUE: Self = Self::from_rgb(0, 0, 128);
    /// `#008000`, `rgb(0, 128, 0)`.
    pub const DARK_GREEN: Self = Self::from_rgb(0, 128, 0);
    /// `#008080`, `rgb(0, 128, 128)`.
    pub const DARK_CYAN: Self = Self::from_rgb(0, 128, 128);
    /// `#800000`, `rgb(128, 0, 0)`.
    pub const DARK_RED: Self = Self::from_rgb(128, 0, 0);
    /// `#800080`, `rgb(128, 0, 128)`.
    pub const DARK_MAGENTA: Self = Self::from_rgb(128, 0, 128);
    /// `#808000`, `rgb(128, 128, 0)`.
    pub const DARK_YELLOW: Self = Self::from_rgb(128, 128, 0);
    /// `#808080`, `rgb(128, 128, 128)`.
    pub const GRAY: Self = Self::from_rgb(128, 128, 128);
    /// `#A9A9A9`, `rgb(169, 169, 169)`.
    pub const DARK_GRAY: Self = Self::from_rgb(169, 169, 169);
    /// `#0000FF`, `rgb(0, 0, 255)`.
    pub const BLUE: Self = Self::from_rgb(0, 0, 255);
    /// `#00FF00`, `rgb(0, 255, 0)`.
    pub const GREEN: Self = Self::from_rgb(0, 255, 0);
    /// `#00FFFF`, `rgb(0, 255, 255)`.
    pub const CYAN: Self = Self::from_rgb(0, 255, 255);
    /// `#FF0000`, `rgb(255, 0, 0)`.
    pub const RED: Self = Self::from_rgb(255, 0, 0);
    /// `#FF00FF`, `rgb(255, 0, 255)`.
    pub const MAGENTA: Self = Self::from_rgb(255, 0, 255);
    /// `#FFFF00`, `rgb(255, 255, 0)`.
    pub const YELLOW: Self = Self::from_rgb(255, 255, 0);
    /// `#FFFFFF`, `rgb(255, 255, 255)`.
    pub const WHITE: Self = Self::from_rgb(255, 255, 255);

    /// Color of text that was never explicitly colored.
    pub const DEFAULT: Self = Self::WHITE;

    /// Fully transparent white, the result of layering two fully transparent colors.
    pub const TRANSPARENT: Self = Self::from_rgba(255, 255, 255, 0);
}

impl Default for RgbaColor {
    fn default() -> Self { Self::DEFAULT }
}

impl From<(u8, u8, u8)> for RgbaColor {
    fn from((red, green, blue): (u8, u8, u8)) -> Self { Self::from_rgb(red, green, blue) }
}

impl From<(u8, u8, u8, u8)> for RgbaColor {
    fn from((red, green, blue, alpha): (u8, u8, u8, u8)) -> Self {
        Self::from_rgba(red, green, blue, alpha)
    }
}

impl FromStr for RgbaColor {
    type Err = ColorStringError;

    fn from_str(pattern: &str) -> ColorStringResult<Self> { parse_color_pattern(pattern) }
}

impl RgbaColor {
    /// Opaque color.
    #[must_use]
    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::from_rgba(red, green, blue, u8::MAX)
    }

    #[must_use]
    pub const fn from_rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// # Errors
    ///
    /// Returns an error if the pattern is not a valid hex or decimal color pattern. See
    /// [`parse_color_pattern`] for the details.
    pub fn try_from_pattern(pattern: &str) -> ColorStringResult<Self> {
        parse_color_pattern(pattern)
    }

    #[must_use]
    pub const fn is_opaque(&self) -> bool { self.alpha == u8::MAX }

    /// Copy of `self` with a different alpha channel.
    #[must_use]
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self::from_rgba(self.red, self.green, self.blue, alpha)
    }

    /// Euclidean distance over red, green and blue. Alpha is ignored. This is meant for
    /// nearest color lookups, not for equality.
    #[must_use]
    pub fn distance(&self, other: &Self) -> f64 {
        let delta_red = f64::from(self.red) - f64::from(other.red);
        let delta_green = f64::from(self.green) - f64::from(other.green);
        let delta_blue = f64::from(self.blue) - f64::from(other.blue);
        (delta_red * delta_red + delta_green * delta_green + delta_blue * delta_blue).sqrt()
    }

    /// Standard "over" alpha compositing, with `self` as the base and `top` drawn on top
    /// of it.
    ///
    /// ```text
    /// alpha   = top.alpha + base.alpha * (1 - top.alpha)
    /// channel = (top.channel * top.alpha
    ///            + base.channel * base.alpha * (1 - top.alpha)) / alpha
    /// ```
    ///
    /// Alphas are normalized to `0..=1` for the computation. Every result channel is
    /// rounded to the nearest integer. When the resulting alpha is `0` the result is
    /// [`RgbaColor::TRANSPARENT`].
    #[must_use]
    pub fn layer_with(&self, top: &Self) -> Self {
        let alpha_base = f64::from(self.alpha) / 255.0;
        let alpha_top = f64::from(top.alpha) / 255.0;
        let alpha_result = alpha_top + alpha_base * (1.0 - alpha_top);

        if alpha_result == 0.0 {
            return Self::TRANSPARENT;
        }

        let blend = |top_channel: u8, base_channel: u8| -> u8 {
            let value = (f64::from(top_channel) * alpha_top
                + f64::from(base_channel) * alpha_base * (1.0 - alpha_top))
                / alpha_result;
            to_channel(value)
        };

        Self {
            red: blend(top.red, self.red),
            green: blend(top.green, self.green),
            blue: blend(top.blue, self.blue),
            alpha: to_channel(alpha_result * 255.0),
        }
    }

    /// Render `self` in the given style. This doesn't allocate a [String], the output is
    /// an inline buffer on the stack.
    #[must_use]
    pub fn format(&self, style: ColorFormat) -> StringFormattedColor {
        use std::fmt::Write as _;

        let Self {
            red,
            green,
            blue,
            alpha,
        } = *self;
        let mut acc = StringFormattedColor::new();
        // Writing into a SmallString can't fail.
        let _ = match style {
            ColorFormat::Hex => write!(acc, "#{red:02X}{green:02X}{blue:02X}"),
            ColorFormat::HexWithAlpha => {
                write!(acc, "#{red:02X}{green:02X}{blue:02X}{alpha:02X}")
            }
            ColorFormat::Rgb => write!(acc, "rgb({red}, {green}, {blue})"),
            ColorFormat::Rgba => write!(acc, "rgba({red}, {green}, {blue}, {alpha})"),
        };
        acc
    }

    /// Same as [`RgbaColor::format`], with the style given by name (`hex`, `hex4`,
    /// `rgb` or `rgba`).
    ///
    /// # Errors
    ///
    /// Returns [`ColorStringError::UnknownColorFormat`] for any other name.
    pub fn format_with_style(&self, style_name: &str) -> ColorStringResult<StringFormattedColor> {
        ColorFormat::try_from_name(style_name).map(|style| self.format(style))
    }

    /// Wrap `text` in a [`ColorString`] drawn entirely in `self`.
    #[must_use]
    pub fn colorize(self, text: impl Into<String>) -> ColorString {
        ColorString::from_color_text(self, text)
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_channel(value: f64) -> u8 { value.round().clamp(0.0, 255.0) as u8 }

/// Same as [`ColorFormat::Hex`].
impl Display for RgbaColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.format(ColorFormat::Hex))
    }
}
