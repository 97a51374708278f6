// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::{BufRead, Write, stdin, stdout};

use crossterm::{queue,
                style::{Print, ResetColor, SetForegroundColor}};
use miette::IntoDiagnostic;

use crate::{ColorString, ConsolePalette};

/// Writes [`ColorString`]s to any [`Write`] as crossterm color commands, and reads plain
/// lines from any [`BufRead`] as [`ColorString`]s.
///
/// Each run's color is mapped to the nearest entry of the [`ConsolePalette`] this was
/// built with. The color is always reset after the last run.
///
/// ```no_run
/// use r3bl_color_string::*;
///
/// let console = ColoredConsole::default();
/// let it = ColorString::from_text("Hello ").concat(&RgbaColor::BLUE.colorize("World!"));
/// console.println(&it).unwrap();
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColoredConsole {
    palette: ConsolePalette,
}

impl ColoredConsole {
    #[must_use]
    pub fn new(palette: ConsolePalette) -> Self { Self { palette } }

    #[must_use]
    pub fn palette(&self) -> &ConsolePalette { &self.palette }

    /// # Errors
    ///
    /// Returns an error if writing to or flushing `out` fails.
    pub fn write(&self, out: &mut impl Write, it: &ColorString) -> miette::Result<()> {
        for run in it.runs() {
            match self.palette.nearest(&run.color) {
                Some(console_color) => {
                    tracing::trace!(
                        message = "map run color",
                        color = %run.color,
                        %console_color
                    );
                    queue!(out, SetForegroundColor(console_color.into()), Print(run.text))
                        .into_diagnostic()?;
                }
                None => {
                    queue!(out, ResetColor, Print(run.text)).into_diagnostic()?;
                }
            }
        }
        queue!(out, ResetColor).into_diagnostic()?;
        out.flush().into_diagnostic()
    }

    /// Same as [`ColoredConsole::write`], followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to or flushing `out` fails.
    pub fn write_line(&self, out: &mut impl Write, it: &ColorString) -> miette::Result<()> {
        self.write(out, it)?;
        queue!(out, Print("\n")).into_diagnostic()?;
        out.flush().into_diagnostic()
    }

    /// One line from `input` in [`crate::RgbaColor::DEFAULT`], without its line ending.
    /// Returns [`None`] at end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails or the line isn't valid UTF-8.
    pub fn try_read_line(&self, input: &mut impl BufRead) -> miette::Result<Option<ColorString>> {
        let mut line = String::new();
        let bytes_read = input.read_line(&mut line).into_diagnostic()?;
        if bytes_read == 0 {
            return Ok(None);
        }
        let line = line
            .strip_suffix('\n')
            .map(|it| it.strip_suffix('\r').unwrap_or(it))
            .unwrap_or(&line);
        Ok(Some(ColorString::from_text(line)))
    }

    /// Same as [`ColoredConsole::try_read_line`], except that end of input is an empty
    /// [`ColorString`].
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails or the line isn't valid UTF-8.
    pub fn read_line(&self, input: &mut impl BufRead) -> miette::Result<ColorString> {
        Ok(self.try_read_line(input)?.unwrap_or_default())
    }

    /// [`ColoredConsole::write`] to stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to stdout fails.
    pub fn print(&self, it: &ColorString) -> miette::Result<()> {
        self.write(&mut stdout().lock(), it)
    }

    /// [`ColoredConsole::write_line`] to stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to stdout fails.
    pub fn println(&self, it: &ColorString) -> miette::Result<()> {
        self.write_line(&mut stdout().lock(), it)
    }

    /// [`ColoredConsole::read_line`] from stdin.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from stdin fails.
    pub fn read_line_from_stdin(&self) -> miette::Result<ColorString> {
        self.read_line(&mut stdin().lock())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use crossterm::{Command, style::Color};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{ConsoleColor, PaletteEntry, RgbaColor};

    fn ansi(command: impl Command) -> String {
        let mut acc = String::new();
        command.write_ansi(&mut acc).unwrap();
        acc
    }

    fn hello_world() -> ColorString {
        ColorString::from_text("Hello ").concat(&RgbaColor::BLUE.colorize("World!"))
    }

    #[test]
    fn test_write_maps_each_run() {
        let mut out: Vec<u8> = vec![];
        ColoredConsole::default()
            .write(&mut out, &hello_world())
            .unwrap();
        let expected = format!(
            "{}Hello {}World!{}",
            ansi(SetForegroundColor(Color::White)),
            ansi(SetForegroundColor(Color::Blue)),
            ansi(ResetColor)
        );
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn test_write_line_and_empty_string() {
        let mut out: Vec<u8> = vec![];
        let console = ColoredConsole::default();
        console.write_line(&mut out, &ColorString::new()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), format!("{}\n", ansi(ResetColor)));
    }

    #[test]
    fn test_write_with_custom_palette() {
        let console = ColoredConsole::new(ConsolePalette::new([PaletteEntry {
            console_color: ConsoleColor::Yellow,
            rgba: RgbaColor::YELLOW,
        }]));
        let mut out: Vec<u8> = vec![];
        console.write(&mut out, &RgbaColor::BLUE.colorize("x")).unwrap();
        let expected = format!(
            "{}x{}",
            ansi(SetForegroundColor(Color::Yellow)),
            ansi(ResetColor)
        );
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn test_write_with_empty_palette_resets() {
        let console = ColoredConsole::new(ConsolePalette::new([]));
        let mut out: Vec<u8> = vec![];
        console.write(&mut out, &RgbaColor::BLUE.colorize("x")).unwrap();
        let expected = format!("{}x{}", ansi(ResetColor), ansi(ResetColor));
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn test_read_line() {
        let console = ColoredConsole::default();
        let mut input = Cursor::new("first\r\nsecond\nlast");

        let line = console.read_line(&mut input).unwrap();
        assert_eq!(line, ColorString::from_text("first"));
        assert_eq!(line.color_at(0), Some(RgbaColor::DEFAULT));
        assert_eq!(console.read_line(&mut input).unwrap().text(), "second");
        assert_eq!(console.read_line(&mut input).unwrap().text(), "last");

        assert_eq!(console.try_read_line(&mut input).unwrap(), None);
        assert_eq!(console.read_line(&mut input).unwrap(), ColorString::new());
    }

    #[test]
    fn test_read_empty_line_is_not_eof() {
        let console = ColoredConsole::default();
        let mut input = Cursor::new("\n");
        assert_eq!(
            console.try_read_line(&mut input).unwrap(),
            Some(ColorString::new())
        );
    }
}
