// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Install a graphical [miette] report handler, so that a [`crate::MarkupParseError`]
//! that bubbles up to `main() -> miette::Result<_>` is printed with its source snippet
//! and a label pointing at the offending markup.
//!
//! The [`miette::ErrorHook`] is lazily evaluated. The terminal width is only calculated
//! when a report is actually displayed.

use miette::MietteHandlerOpts;
use tracing::debug;

/// Fallback used when the terminal size can't be read (eg: output is piped).
pub const DEFAULT_TERMINAL_WIDTH: usize = 80;

/// Query the terminal for its width in columns, falling back to
/// [`DEFAULT_TERMINAL_WIDTH`].
#[must_use]
pub fn get_terminal_width() -> usize {
    crossterm::terminal::size()
        .map(|(columns, _rows)| usize::from(columns))
        .unwrap_or(DEFAULT_TERMINAL_WIDTH)
}

pub fn setup_default_miette_global_report_handler(issues_url: &'static str) {
    miette::set_hook(Box::new(|_report| {
        let terminal_width = {
            let it = get_terminal_width();
            debug!("miette::set_hook -> terminal_width: {}", it);
            it
        };
        Box::new(
            MietteHandlerOpts::new()
                .width(terminal_width)
                .wrap_lines(true)
                .force_graphical(true)
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .break_words(true)
                .with_cause_chain()
                .footer(issues_url.to_string())
                .build(),
        )
    }))
    .ok();
}
