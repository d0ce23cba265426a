// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::IntoDiagnostic;
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, layer::SubscriberExt, registry::LookupSpan,
                         util::SubscriberInitExt};

use super::{DisplayPreference, TracingConfig, WriterConfig,
            try_create_rolling_file_appender};

/// Avoid gnarly type annotations by using a macro to create the `fmt` layer.
macro_rules! create_fmt {
    () => {
        tracing_subscriber::fmt::layer()
            .compact()
            .without_time()
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_target(false)
            .with_file(false)
            .with_line_number(false)
    };
}

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Initialize the global tracing subscriber from the given config. Returns `Ok(false)`
/// if the config doesn't ask for any writer, in which case nothing is installed.
///
/// # Errors
///
/// Returns an error if the log file can't be created, or if a global subscriber has
/// already been installed.
pub fn try_initialize_logging_global(tracing_config: TracingConfig) -> miette::Result<bool> {
    match try_create_layers(&tracing_config)? {
        Some(layers) => {
            tracing_subscriber::registry()
                .with(layers)
                .try_init()
                .into_diagnostic()?;
            Ok(true)
        }
        None => Ok(false),
    }
}

/// Returns the layers. This does not initialize the tracing system. Don't forget to do
/// this manually, by calling `init` on the returned layers.
///
/// For example, once you have the layers, you can run the following:
/// `try_create_layers(..).map(|layers|
/// tracing_subscriber::registry().with(layers).init());`
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_create_layers(
    tracing_config: &TracingConfig,
) -> miette::Result<Option<Vec<Box<DynLayer<tracing_subscriber::Registry>>>>> {
    let level_filter = tracing_config.get_level_filter();
    let writer_config = tracing_config.get_writer_config();

    if writer_config == WriterConfig::None || level_filter == LevelFilter::OFF {
        return Ok(None);
    }

    let mut return_it: Vec<Box<DynLayer<tracing_subscriber::Registry>>> = vec![];

    if let Some(layer) = try_create_display_layer(level_filter, &writer_config) {
        return_it.push(layer);
    }

    if let Some(layer) = try_create_file_layer(level_filter, &writer_config)? {
        return_it.push(layer);
    }

    Ok(Some(return_it))
}

/// This erases the concrete type of the writer, and returns a boxed layer.
///
/// This is useful for composition of layers. There's more info in the docs
/// [here](https://docs.rs/tracing-subscriber/latest/tracing_subscriber/layer/index.html#runtime-configuration-with-layers).
pub fn try_create_display_layer<S>(
    level_filter: LevelFilter,
    writer_config: &WriterConfig,
) -> Option<Box<DynLayer<S>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    // Shared configuration regardless of where logs are output to.
    let fmt_layer = create_fmt!();

    match writer_config {
        WriterConfig::DisplayAndFile(display_pref, _)
        | WriterConfig::Display(display_pref) => match display_pref {
            DisplayPreference::Stdout => Some(Box::new(
                fmt_layer
                    .with_writer(std::io::stdout)
                    .with_filter(level_filter),
            )),
            DisplayPreference::Stderr => Some(Box::new(
                fmt_layer
                    .with_writer(std::io::stderr)
                    .with_filter(level_filter),
            )),
        },
        WriterConfig::None | WriterConfig::File(_) => None,
    }
}

/// This erases the concrete type of the writer, and returns a boxed layer.
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_create_file_layer<S>(
    level_filter: LevelFilter,
    writer_config: &WriterConfig,
) -> miette::Result<Option<Box<DynLayer<S>>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    // Shared configuration regardless of where logs are output to.
    let fmt_layer = create_fmt!();

    match writer_config {
        WriterConfig::DisplayAndFile(_, path) | WriterConfig::File(path) => {
            let file = try_create_rolling_file_appender(path)?;
            Ok(Some(Box::new(
                fmt_layer
                    .with_ansi(false)
                    .with_writer(file)
                    .with_filter(level_filter),
            )))
        }
        WriterConfig::None | WriterConfig::Display(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_layers_when_off() {
        let layers = try_create_layers(&TracingConfig::default()).unwrap();
        assert!(layers.is_none());
    }

    #[test]
    fn test_display_layer_only() {
        let config = TracingConfig {
            writer_config: WriterConfig::Display(DisplayPreference::Stderr),
            level_filter: LevelFilter::TRACE,
        };
        let layers = try_create_layers(&config).unwrap().unwrap();
        assert_eq!(layers.len(), 1);
    }
}
