// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ColorFormat, ColorString, ColorStringError, ColorStringResult, MARKUP_CLOSE,
            MARKUP_ESCAPED_OPEN, MARKUP_OPEN, RgbaColor, StringFormattedColor};

impl ColorString {
    /// Markup for `self` that [`ColorString::parse_markup`] reads back into an equal
    /// value, as long as `self` has a marker at offset `0` (true of anything built from
    /// colored pieces).
    ///
    /// Every run is written as `>[pattern]text`, including the first one. Opaque colors
    /// use `#RRGGBB`, others `#RRGGBBAA`. A literal `>[` in the text is escaped as `>>[`.
    ///
    /// ```
    /// use r3bl_color_string::*;
    ///
    /// let it = RgbaColor::RED.colorize("a>[b").concat(&ColorString::from_text("c"));
    /// assert_eq!(it.to_markup().unwrap(), ">[#FF0000]a>>[b>[#FFFFFF]c");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ColorStringError::UnencodableRunBoundary`] if a run ends in `>` and
    /// another run follows it, since `>` + `>[` reads back as an escape.
    pub fn to_markup(&self) -> ColorStringResult<String> {
        let mut acc = String::with_capacity(self.len() * 2);
        let mut text_offset = 0;

        for (index, run) in self.runs().enumerate() {
            if index > 0 && acc.ends_with('>') {
                return Err(ColorStringError::UnencodableRunBoundary {
                    offset: text_offset - 1,
                });
            }
            acc.push_str(MARKUP_OPEN);
            acc.push_str(&format_markup_color(run.color));
            acc.push_str(MARKUP_CLOSE);
            acc.push_str(&run.text.replace(MARKUP_OPEN, MARKUP_ESCAPED_OPEN));
            text_offset += run.text.len();
        }

        Ok(acc)
    }
}

fn format_markup_color(color: RgbaColor) -> StringFormattedColor {
    if color.is_opaque() {
        color.format(ColorFormat::Hex)
    } else {
        color.format(ColorFormat::HexWithAlpha)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{ColorMarker, SplitOptions};

    fn corpus() -> Vec<ColorString> {
        let hello = ColorString::from_text("Hello, World!")
            .replace("World", &RgbaColor::BLUE.colorize("Universe"));
        vec![
            ColorString::new(),
            ColorString::from_text("plain"),
            hello.clone(),
            hello.pad_left(20, ' ').trim_end(),
            hello.split(&[","], None, SplitOptions::NONE)[1].clone(),
            RgbaColor::RED.with_alpha(64).colorize("see-through"),
            RgbaColor::GREEN.colorize("x>[y]>>[z").concat(&RgbaColor::RED.colorize("[q]>")),
            RgbaColor::MAGENTA.colorize(">>>["),
            RgbaColor::CYAN.colorize("héllo ").concat(&RgbaColor::DARK_GRAY.colorize("wörld")),
            ColorString::new().pad_right(3, '.'),
            ColorString::new().pad_left(3, '.'),
            ColorString::new().with_text("x"),
            RgbaColor::RED.colorize("ab").replace(
                "a",
                &ColorString::from_parts("xy", [ColorMarker::new(RgbaColor::BLUE, 1)]),
            ),
        ]
    }

    #[test]
    fn test_to_markup() {
        let it = ColorString::parse_markup(">[#FF0000]Hello>[#0000FF]World").unwrap();
        assert_eq!(it.to_markup().unwrap(), ">[#FF0000]Hello>[#0000FF]World");
    }

    #[test]
    fn test_to_markup_alpha() {
        let it = RgbaColor::from_rgba(1, 2, 3, 4).colorize("x");
        assert_eq!(it.to_markup().unwrap(), ">[#01020304]x");
    }

    #[test]
    fn test_to_markup_escapes() {
        let it = ColorString::from_text(">[#FF0000]Hello");
        assert_eq!(it.to_markup().unwrap(), ">[#FFFFFF]>>[#FF0000]Hello");
        assert_eq!(ColorString::parse_markup(">>[#FF0000]Hello").unwrap(), it);
    }

    #[test]
    fn test_to_markup_empty() {
        assert_eq!(ColorString::new().to_markup().unwrap(), "");
    }

    #[test]
    fn test_round_trip() {
        for it in corpus() {
            let markup = it.to_markup().unwrap();
            assert_eq!(ColorString::parse_markup(&markup).unwrap(), it, "{markup}");
        }
    }

    #[test]
    fn test_unencodable_run_boundary() {
        let it = RgbaColor::RED.colorize("a>").concat(&RgbaColor::BLUE.colorize("b"));
        assert_eq!(
            it.to_markup(),
            Err(ColorStringError::UnencodableRunBoundary { offset: 1 })
        );
        // Fine at the very end.
        assert!(RgbaColor::RED.colorize("a>").to_markup().is_ok());
    }
}
