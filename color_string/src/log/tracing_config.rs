// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::Add;

use miette::IntoDiagnostic;
use tracing::dispatcher::DefaultGuard;
use tracing_core::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::try_create_layers;

/// Configure the tracing logging to suit your needs. You can send the logs to:
/// 1. a file,
/// 2. stdout or stderr,
/// 3. both.
///
/// Fields:
/// - `writer_config`: [`WriterConfig`] to choose where to write the logs.
/// - `level_filter`: [`LevelFilter`] to choose what is logged. [`LevelFilter::OFF`]
///   disables logging.
///
/// See [`tracing_config_options`] for the many ways to build one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level_filter: LevelFilter,
}

/// - `String` is the path of the log file. Eg: `/tmp/cstr.log` or `log.txt`.
/// - [`DisplayPreference`] is the preferred display to use for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    Display(DisplayPreference),
    File(String /* log file path */),
    DisplayAndFile(DisplayPreference, String /* log file path */),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayPreference {
    Stdout,
    Stderr,
}

impl WriterConfig {
    /// Where display output goes, if anywhere.
    #[must_use]
    pub fn display_preference(&self) -> Option<DisplayPreference> {
        match self {
            Self::Display(display) | Self::DisplayAndFile(display, _) => Some(*display),
            Self::None | Self::File(_) => None,
        }
    }

    /// Path of the log file, if any.
    #[must_use]
    pub fn log_file_path(&self) -> Option<&str> {
        match self {
            Self::File(path) | Self::DisplayAndFile(_, path) => Some(path),
            Self::None | Self::Display(_) => None,
        }
    }
}

impl TracingConfig {
    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }

    /// Install this configuration as the global default subscriber. This can only be
    /// done once per process.
    ///
    /// # Errors
    ///
    /// Returns an error if a layer can't be created, or a global subscriber was already
    /// installed.
    pub fn install_global(self) -> miette::Result<()> {
        match try_create_layers(self)? {
            Some(layers) => tracing_subscriber::registry()
                .with(layers)
                .try_init()
                .into_diagnostic(),
            None => Ok(()),
        }
    }

    /// Install this configuration as the default subscriber of the current thread, for
    /// as long as the returned guard lives.
    ///
    /// # Errors
    ///
    /// Returns an error if a layer can't be created.
    pub fn install_thread_local(self) -> miette::Result<Option<DefaultGuard>> {
        Ok(try_create_layers(self)?
            .map(|layers| tracing_subscriber::registry().with(layers).set_default()))
    }
}

/// Instead of having lots of arguments, [`crate::try_initialize_logging_global`] and
/// [`crate::try_initialize_logging_thread_local`] take anything that converts
/// [`Into<TracingConfig>`]. Here's what's possible:
///
/// ```no_run
/// use r3bl_color_string::{
///     TracingConfig, DisplayPreference, WriterConfig,
///     try_initialize_logging_global, try_initialize_logging_thread_local
/// };
///
/// let config_1: TracingConfig = tracing::Level::DEBUG.into();
/// let config_2: TracingConfig = tracing_core::LevelFilter::TRACE.into();
/// let config_3: TracingConfig = DisplayPreference::Stderr.into();
/// let config_4: TracingConfig = WriterConfig::File("cstr.log".to_string()).into();
///
/// let _guard = try_initialize_logging_thread_local(config_1 + config_4);
/// try_initialize_logging_global(config_2 + config_3);
/// ```
pub mod tracing_config_options {
    use super::{Add, DisplayPreference, LevelFilter, TracingConfig, WriterConfig};

    pub const DEFAULT_LOG_FILE_NAME: &str = "log.txt";

    impl From<tracing::Level> for TracingConfig {
        fn from(level: tracing::Level) -> Self { LevelFilter::from_level(level).into() }
    }

    impl From<LevelFilter> for TracingConfig {
        fn from(level_filter: LevelFilter) -> Self {
            Self {
                level_filter,
                writer_config: WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()),
            }
        }
    }

    impl From<DisplayPreference> for TracingConfig {
        fn from(preferred_display: DisplayPreference) -> Self {
            Self {
                level_filter: LevelFilter::DEBUG,
                writer_config: WriterConfig::Display(preferred_display),
            }
        }
    }

    impl From<WriterConfig> for TracingConfig {
        fn from(writer_config: WriterConfig) -> Self {
            Self {
                level_filter: LevelFilter::DEBUG,
                writer_config,
            }
        }
    }

    /// Merge two [`TracingConfig`]s. The more verbose level filter wins, and the writer
    /// configs are merged with [`WriterConfig`]'s [Add].
    impl Add<TracingConfig> for TracingConfig {
        type Output = Self;

        fn add(self, rhs: Self) -> Self::Output {
            Self {
                level_filter: self.level_filter.max(rhs.level_filter),
                writer_config: self.writer_config + rhs.writer_config,
            }
        }
    }

    /// Merge two [`WriterConfig`]s. Where both sides set the same thing, `rhs` wins,
    /// since it has higher specificity.
    ///
    /// - `Display(a) + File(f) = DisplayAndFile(a, f)`.
    /// - `Display(a) + Display(b) = Display(b)`.
    /// - `DisplayAndFile(a, f) + File(g) = DisplayAndFile(a, g)`.
    /// - `x + None = x` and `None + x = x`.
    impl Add<WriterConfig> for WriterConfig {
        type Output = Self;

        fn add(self, rhs: WriterConfig) -> Self::Output {
            use WriterConfig::{Display, DisplayAndFile, File, None};

            match (self, rhs) {
                // No collision merge.
                (None, rhs) => rhs,
                (lhs, None) => lhs,
                (Display(display), File(file)) | (File(file), Display(display)) => {
                    DisplayAndFile(display, file)
                }

                // Collision on the display only.
                (Display(_), Display(display)) => Display(display),
                (DisplayAndFile(_, file), Display(display)) => DisplayAndFile(display, file),

                // Collision on the file only.
                (File(_), File(file)) => File(file),
                (DisplayAndFile(display, _), File(file)) => DisplayAndFile(display, file),

                // Collision on both, or rhs covers everything.
                (Display(_) | File(_) | DisplayAndFile(_, _), DisplayAndFile(display, file)) => {
                    DisplayAndFile(display, file)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{tracing_config_options::DEFAULT_LOG_FILE_NAME, *};

    #[test]
    fn test_add_writer_configs() {
        let file = || WriterConfig::File("a.log".to_string());
        let other_file = || WriterConfig::File("b.log".to_string());
        let stdout = || WriterConfig::Display(DisplayPreference::Stdout);
        let stderr = || WriterConfig::Display(DisplayPreference::Stderr);
        let stdout_and_file =
            || WriterConfig::DisplayAndFile(DisplayPreference::Stdout, "a.log".to_string());
        let stderr_and_other_file =
            || WriterConfig::DisplayAndFile(DisplayPreference::Stderr, "b.log".to_string());

        // No collision merge.
        assert_eq!(WriterConfig::None + WriterConfig::None, WriterConfig::None);
        assert_eq!(stdout() + WriterConfig::None, stdout());
        assert_eq!(WriterConfig::None + file(), file());
        assert_eq!(stdout() + file(), stdout_and_file());
        assert_eq!(file() + stdout(), stdout_and_file());

        // Collision (rhs has higher specificity).
        assert_eq!(stdout() + stderr(), stderr());
        assert_eq!(file() + other_file(), other_file());
        assert_eq!(
            stdout_and_file() + stderr(),
            WriterConfig::DisplayAndFile(DisplayPreference::Stderr, "a.log".to_string())
        );
        assert_eq!(
            stdout_and_file() + other_file(),
            WriterConfig::DisplayAndFile(DisplayPreference::Stdout, "b.log".to_string())
        );
        assert_eq!(stdout() + stderr_and_other_file(), stderr_and_other_file());
        assert_eq!(file() + stderr_and_other_file(), stderr_and_other_file());
        assert_eq!(
            stdout_and_file() + stderr_and_other_file(),
            stderr_and_other_file()
        );
    }

    #[test]
    fn test_writer_config_accessors() {
        let it = WriterConfig::DisplayAndFile(DisplayPreference::Stderr, "a.log".to_string());
        assert_eq!(it.display_preference(), Some(DisplayPreference::Stderr));
        assert_eq!(it.log_file_path(), Some("a.log"));

        assert_eq!(WriterConfig::None.display_preference(), None);
        assert_eq!(WriterConfig::None.log_file_path(), None);
        assert_eq!(
            WriterConfig::File("b.log".to_string()).display_preference(),
            None
        );
    }

    #[test]
    fn test_from_conversions() {
        let it: TracingConfig = tracing::Level::INFO.into();
        assert_eq!(it.get_level_filter(), LevelFilter::INFO);
        assert_eq!(
            it.get_writer_config(),
            WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string())
        );

        let it: TracingConfig = DisplayPreference::Stderr.into();
        assert_eq!(it.level_filter, LevelFilter::DEBUG);
        assert_eq!(
            it.writer_config,
            WriterConfig::Display(DisplayPreference::Stderr)
        );
    }

    #[test]
    fn test_add_tracing_configs() {
        let it = TracingConfig::from(LevelFilter::WARN)
            + TracingConfig::from(DisplayPreference::Stdout);
        assert_eq!(
            it,
            TracingConfig {
                writer_config: WriterConfig::DisplayAndFile(
                    DisplayPreference::Stdout,
                    DEFAULT_LOG_FILE_NAME.to_string()
                ),
                level_filter: LevelFilter::DEBUG,
            }
        );

        let it = TracingConfig::from(LevelFilter::TRACE) + TracingConfig::from(LevelFilter::OFF);
        assert_eq!(it.level_filter, LevelFilter::TRACE);
    }
}
