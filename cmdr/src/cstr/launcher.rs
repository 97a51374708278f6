// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{io::{BufRead, Write, stderr, stdin, stdout},
          process::ExitCode};

use miette::{IntoDiagnostic, WrapErr};
use r3bl_color_string::{ColorString, ColoredConsole, RgbaColor};

use crate::cstr::{CLIArg, CLICommand, demo_scenarios, ui_str};

/// Run `cli_arg` against the process' stdin and stdout. Errors are logged and printed
/// to stderr in red.
pub fn launch_cstr(cli_arg: &CLIArg) -> ExitCode {
    let console = ColoredConsole::default();
    let result = try_run_command(
        &cli_arg.command,
        &console,
        &mut stdout().lock(),
        &mut stdin().lock(),
    );

    match result {
        Ok(()) => ExitCode::SUCCESS,
        // Handle unrecoverable / unknown errors here.
        Err(error) => {
            // % is Display, ? is Debug.
            tracing::error!(
                message = "Could not run cstr due to the following problem",
                error = ?error
            );
            console
                .write_line(
                    &mut stderr().lock(),
                    &ui_str::unrecoverable_error_message(&error),
                )
                .ok();
            ExitCode::FAILURE
        }
    }
}

/// Run one [`CLICommand`], reading from `input` (only `echo` does) and writing to `out`.
///
/// # Errors
///
/// Returns an error if markup given on the command line is malformed, or reading or
/// writing fails.
pub fn try_run_command(
    command: &CLICommand,
    console: &ColoredConsole,
    out: &mut impl Write,
    input: &mut impl BufRead,
) -> miette::Result<()> {
    match command {
        CLICommand::Demo => run_demo(console, out),
        CLICommand::Render {
            markup,
            start_color,
        } => {
            let start_color = start_color.unwrap_or(RgbaColor::DEFAULT);
            for it in markup {
                let parsed = ColorString::parse_markup_with_start_color(it, start_color)
                    .wrap_err_with(|| format!("Could not render markup {it:?}"))?;
                console.write_line(out, &parsed)?;
            }
            Ok(())
        }
        CLICommand::Echo { markup } => run_echo(*markup, console, out, input),
        CLICommand::Encode { markup } => {
            let canonical = ColorString::parse_markup(markup)
                .and_then(|it| it.to_markup())
                .wrap_err_with(|| format!("Could not encode markup {markup:?}"))?;
            writeln!(out, "{canonical}").into_diagnostic()?;
            out.flush().into_diagnostic()
        }
    }
}

fn run_demo(console: &ColoredConsole, out: &mut impl Write) -> miette::Result<()> {
    for scenario in demo_scenarios()? {
        console.write_line(out, &ui_str::demo_heading(scenario.title))?;
        for line in &scenario.lines {
            console.write_line(out, line)?;
        }
    }
    Ok(())
}

fn run_echo(
    is_markup: bool,
    console: &ColoredConsole,
    out: &mut impl Write,
    input: &mut impl BufRead,
) -> miette::Result<()> {
    let mut line_count = 0_usize;

    while let Some(line) = console.try_read_line(input)? {
        line_count += 1;
        if !is_markup {
            console.write_line(out, &line)?;
            continue;
        }
        match ColorString::parse_markup(line.text()) {
            Ok(parsed) => console.write_line(out, &parsed)?,
            Err(error) => {
                tracing::warn!(
                    message = "Skipping line that isn't valid markup",
                    line_number = line_count,
                    error = %error
                );
                let message =
                    ui_str::invalid_markup_line_message(line.text(), &error.to_string());
                console.write_line(out, &message)?;
            }
        }
    }

    tracing::debug!(message = "echo reached end of input", line_count);
    Ok(())
}
