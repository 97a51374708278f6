// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing::dispatcher::DefaultGuard;
use tracing_core::LevelFilter;

use crate::TracingConfig;

/// Global default subscriber, which once set, can't be unset or changed.
/// - This is great for apps, like the `cstr` binary.
/// - Configure it with anything that converts [`Into<TracingConfig>`], see
///   [`crate::tracing_config_options`].
///
/// Logging is **DISABLED** by **default**. Passing [`LevelFilter::OFF`] is a no-op.
///
/// # Errors
///
/// Returns an error if the log file can't be created, or a global subscriber was
/// already installed.
pub fn try_initialize_logging_global(options: impl Into<TracingConfig>) -> miette::Result<()> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    if it.get_level_filter() == LevelFilter::OFF {
        return Ok(());
    }

    it.install_global()
}

/// Thread local subscriber, which lives as long as the returned guard.
/// - This is great for tests.
/// - Configure it with anything that converts [`Into<TracingConfig>`], see
///   [`crate::tracing_config_options`].
///
/// Logging is **DISABLED** by **default**. Passing [`LevelFilter::OFF`] is a no-op and
/// returns [`None`].
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_initialize_logging_thread_local(
    options: impl Into<TracingConfig>,
) -> miette::Result<Option<DefaultGuard>> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    if it.get_level_filter() == LevelFilter::OFF {
        return Ok(None);
    }

    it.install_thread_local()
}
