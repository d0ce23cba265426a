// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::str::FromStr;

use tracing_core::LevelFilter;

/// Configure where (and how verbosely) this crate's `tracing` events are written. Log
/// output is a side channel, it never goes to the sink that rendered segments are
/// written to.
///
/// ```
/// use r3bl_render::{DisplayPreference, TracingConfig, WriterConfig};
/// use tracing_core::LevelFilter;
///
/// let config = TracingConfig {
///     writer_config: WriterConfig::Display(DisplayPreference::Stderr),
///     level_filter: LevelFilter::DEBUG,
/// };
/// assert_eq!(config.get_level_filter(), LevelFilter::DEBUG);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level_filter: LevelFilter,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            writer_config: WriterConfig::None,
            level_filter: LevelFilter::OFF,
        }
    }
}

impl TracingConfig {
    #[must_use]
    pub fn new_file_and_display(
        filename: impl Into<String>,
        preferred_display: DisplayPreference,
    ) -> Self {
        Self {
            writer_config: WriterConfig::DisplayAndFile(
                preferred_display,
                filename.into(),
            ),
            level_filter: LevelFilter::DEBUG,
        }
    }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }

    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayPreference {
    Stdout,
    Stderr,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    Display(DisplayPreference),
    /// The [String] is the log file path, eg: `/tmp/r3bl_render.log`.
    File(String),
    DisplayAndFile(DisplayPreference, String),
}

/// Parse a writer name (eg: from an env var or a command line flag).
impl FromStr for WriterConfig {
    type Err = miette::Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "none" => Ok(WriterConfig::None),
            "stdout" => Ok(WriterConfig::Display(DisplayPreference::Stdout)),
            "stderr" => Ok(WriterConfig::Display(DisplayPreference::Stderr)),
            _ => match s.strip_prefix("file:") {
                Some(path) if !path.is_empty() => Ok(WriterConfig::File(path.to_string())),
                _ => Err(miette::miette!("{s} is not a valid tracing writer")),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use test_case::test_case;

    #[test_case("", WriterConfig::None)]
    #[test_case("none", WriterConfig::None)]
    #[test_case("stderr", WriterConfig::Display(DisplayPreference::Stderr))]
    #[test_case("file:/tmp/x.log", WriterConfig::File("/tmp/x.log".into()))]
    fn test_parse_writer_config(input: &str, expected: WriterConfig) {
        assert_eq2!(input.parse::<WriterConfig>().ok(), Some(expected));
    }

    #[test]
    fn test_parse_invalid_writer_config() {
        assert!("file:".parse::<WriterConfig>().is_err());
        assert!("syslog".parse::<WriterConfig>().is_err());
    }

    #[test]
    fn test_default_is_off() {
        let config = TracingConfig::default();
        assert_eq2!(config.get_writer_config(), WriterConfig::None);
        assert_eq2!(config.get_level_filter(), LevelFilter::OFF);
    }
}
