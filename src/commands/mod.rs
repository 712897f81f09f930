//! Subcommand handlers and the plumbing they share.

pub mod bounce;
pub mod completions;
pub mod config;
pub mod plot;
pub mod run;

use std::io::{self, Write};

use termscribe::cli::{CanvasArgs, OutputArgs};
use termscribe::{
    AnsiFormatter, Canvas, Config, DisplaySink, MarkFormatter, MemorySink, PlainFormatter,
    TerminalSink,
};

/// Sink chosen by the output flags.
pub type BoxedSink = Box<dyn DisplaySink>;

/// Apply command-line overrides on top of the loaded config.
pub fn effective_config(
    mut config: Config,
    canvas: Option<&CanvasArgs>,
    output: &OutputArgs,
) -> Config {
    if let Some(canvas) = canvas {
        if let Some(width) = canvas.width {
            config.canvas.width = width;
        }
        if let Some(height) = canvas.height {
            config.canvas.height = height;
        }
    }
    if let Some(delay) = frame_delay_override(output) {
        config.scribe.frame_delay_ms = delay;
    }
    config
}

/// Frame delay the flags impose on every scribe, program files included.
pub fn frame_delay_override(output: &OutputArgs) -> Option<u64> {
    if output.headless {
        Some(0)
    } else {
        output.delay_ms
    }
}

/// Whether marks should carry ANSI colors.
fn use_color(config: &Config, output: &OutputArgs) -> bool {
    config.display.color
        && !output.no_color
        && std::env::var_os("NO_COLOR").is_none()
        && atty::is(atty::Stream::Stdout)
}

/// Build the display sink for this invocation.
pub fn make_sink(config: &Config, output: &OutputArgs) -> BoxedSink {
    if output.headless {
        // Only the final canvas is printed
        return Box::new(MemorySink::bounded(1));
    }
    let formatter: Box<dyn MarkFormatter> = if use_color(config, output) {
        Box::new(AnsiFormatter)
    } else {
        Box::new(PlainFormatter)
    };
    Box::new(TerminalSink::stdout(formatter).with_hidden_cursor(config.display.hide_cursor))
}

/// Warn on stderr when the canvas cannot fit in the current terminal.
pub fn warn_if_oversized(canvas: &Canvas, output: &OutputArgs) {
    if output.headless {
        return;
    }
    let Some((terminal_size::Width(cols), terminal_size::Height(rows))) =
        terminal_size::terminal_size()
    else {
        return;
    };
    // Cells are separated by one space
    let needed_cols = (canvas.width() * 2).saturating_sub(1);
    if needed_cols > cols as usize || canvas.height() > rows as usize {
        tracing::warn!(
            width = canvas.width(),
            height = canvas.height(),
            cols,
            rows,
            "canvas larger than terminal"
        );
        eprintln!(
            "warning: a {}x{} canvas needs {}x{} characters but the terminal is {}x{}",
            canvas.width(),
            canvas.height(),
            needed_cols,
            canvas.height(),
            cols,
            rows
        );
    }
}

/// Print the final canvas without decoration (headless mode).
pub fn print_final(canvas: &Canvas) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for row in canvas.rows(&PlainFormatter) {
        writeln!(out, "{}", row)?;
    }
    out.flush()
}
