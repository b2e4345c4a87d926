//! Logging utilities with colored output.
//!
//! This module provides:
//! - `log!` macro for progress output on stdout with a colored prefix
//! - `warn!` / `error!` macros for diagnostics on stderr
//! - `debug!` macro gated behind `--verbose`
//!
//! # Example
//!
//! ```ignore
//! log!("feed"; "wrote {}", path.display());
//! warn!("splice"; "markers not found in {}", name);
//! ```

use owo_colors::{OwoColorize, Stream, Style};
use std::{
    io::{Write, stderr, stdout},
    sync::atomic::{AtomicBool, Ordering},
};

/// Global verbose flag (set by --verbose CLI argument)
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set verbose mode globally
pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

/// Check if verbose mode is enabled
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

// ============================================================================
// Log Macros
// ============================================================================

/// Log a message with a colored module prefix to stdout
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a warning to stderr
#[macro_export]
macro_rules! warn {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::warn($module, &format!($($arg)*))
    }};
}

/// Log an error to stderr
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {{
        $crate::logger::warn("error", &format!($($arg)*))
    }};
}

/// Log a debug message (only shown when --verbose is enabled)
///
/// # Usage
/// ```ignore
/// debug!("module"; "debug info: {}", value);
/// ```
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Log a message with a colored module prefix
#[inline]
pub fn log(module: &str, message: &str) {
    let prefix = colorize_prefix(module, Stream::Stdout);
    let mut stdout = stdout().lock();
    writeln!(stdout, "{prefix} {message}").ok();
    stdout.flush().ok();
}

/// Log a diagnostic with a colored module prefix to stderr
#[inline]
pub fn warn(module: &str, message: &str) {
    let prefix = colorize_prefix(module, Stream::Stderr);
    let mut stderr = stderr().lock();
    writeln!(stderr, "{prefix} {message}").ok();
    stderr.flush().ok();
}

/// Print the deferred warnings block collected over a run.
pub fn warnings_block(warnings: &[String]) {
    if warnings.is_empty() {
        return;
    }

    let mut stderr = stderr().lock();
    let title = "Warnings:".if_supports_color(Stream::Stderr, |t| t.style(warn_style()));
    writeln!(stderr, "{title}").ok();
    for warning in warnings {
        writeln!(stderr, "- {warning}").ok();
    }
    stderr.flush().ok();
}

#[inline]
fn warn_style() -> Style {
    Style::new().bright_yellow().bold()
}

/// Apply color to a module prefix based on module type.
///
/// Respects `--color` through `owo_colors::set_override`.
#[inline]
fn colorize_prefix(module: &str, stream: Stream) -> String {
    let prefix = format!("[{module}]");
    let style = match module.to_ascii_lowercase().as_str() {
        "build" => Style::new().bright_blue().bold(),
        "error" => Style::new().bright_red().bold(),
        "warn" | "splice" | "config" => warn_style(),
        _ => Style::new().bright_green().bold(),
    };
    prefix
        .if_supports_color(stream, |p| p.style(style))
        .to_string()
}
