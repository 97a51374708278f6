// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, Registry, fmt::writer::BoxMakeWriter, registry::LookupSpan};

use crate::{DisplayPreference, TracingConfig, WriterConfig, rolling_file_appender_impl};

/// Compact single line events with their target, and no thread info. Spelled as a
/// macro so that each call site infers its own subscriber type.
macro_rules! compact_fmt_layer {
    () => {
        tracing_subscriber::fmt::layer()
            .compact()
            .with_target(true)
            .with_thread_ids(false)
            .with_thread_names(false)
    };
}

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// The registry wide [`LevelFilter`] followed by one layer per destination in
/// `tracing_config`, or [`None`] if it has no destination. Nothing is installed, see
/// [`TracingConfig::install_global`] and [`TracingConfig::install_thread_local`].
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_create_layers(
    tracing_config: TracingConfig,
) -> miette::Result<Option<Vec<Box<DynLayer<Registry>>>>> {
    let TracingConfig {
        writer_config,
        level_filter,
    } = tracing_config;

    if writer_config == WriterConfig::None {
        return Ok(None);
    }

    let display_layer = try_create_display_layer(level_filter, &writer_config)?;
    let file_layer = try_create_file_layer(level_filter, &writer_config)?;

    let level_layer: Box<DynLayer<Registry>> = Box::new(level_filter);
    Ok(Some(
        std::iter::once(level_layer)
            .chain(display_layer)
            .chain(file_layer)
            .collect(),
    ))
}

/// A layer writing to stdout or stderr, if `writer_config` asks for display output.
/// The concrete writer type is erased so layers can be composed at runtime, see
/// [runtime configuration with layers](https://docs.rs/tracing-subscriber/latest/tracing_subscriber/layer/index.html#runtime-configuration-with-layers).
///
/// # Errors
///
/// Never fails today, the [Result] keeps the signature in line with
/// [`try_create_file_layer`].
pub fn try_create_display_layer<S>(
    level_filter: LevelFilter,
    writer_config: &WriterConfig,
) -> miette::Result<Option<Box<DynLayer<S>>>>
where
    S: tracing_core::Subscriber + for<'a> LookupSpan<'a>,
{
    let Some(display_preference) = writer_config.display_preference() else {
        return Ok(None);
    };

    let writer = match display_preference {
        DisplayPreference::Stdout => BoxMakeWriter::new(std::io::stdout),
        DisplayPreference::Stderr => BoxMakeWriter::new(std::io::stderr),
    };

    Ok(Some(Box::new(
        compact_fmt_layer!()
            .with_writer(writer)
            .with_filter(level_filter),
    )))
}

/// A layer appending plain text (no ANSI escapes) to the log file, if `writer_config`
/// names one.
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_create_file_layer<S>(
    level_filter: LevelFilter,
    writer_config: &WriterConfig,
) -> miette::Result<Option<Box<DynLayer<S>>>>
where
    S: tracing_core::Subscriber + for<'a> LookupSpan<'a>,
{
    let Some(log_file_path) = writer_config.log_file_path() else {
        return Ok(None);
    };

    let appender = rolling_file_appender_impl::try_create(log_file_path)?;

    Ok(Some(Box::new(
        compact_fmt_layer!()
            .with_ansi(false)
            .with_writer(appender)
            .with_filter(level_filter),
    )))
}
