//! Colored, module-prefixed log lines on stderr.
//!
//! stdout is left to command output (`paths` prints JSON there), so every
//! log line goes to stderr.
//!
//! # Example
//!
//! ```ignore
//! log!("sitemap"; "wrote {} urls", count);
//! debug!("pages"; "skipping {}", route);
//! ```

use owo_colors::{OwoColorize, Stream, Style};
use std::{
    io::{Write, stderr},
    sync::atomic::{AtomicBool, Ordering},
};

/// Set once from `build --verbose`.
static VERBOSE: AtomicBool = AtomicBool::new(false);

pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::Relaxed);
}

pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

// ============================================================================
// Log Macro
// ============================================================================

/// Log a message with a colored module prefix
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

/// Write `[module] message` to stderr.
pub fn log(module: &str, message: &str) {
    let prefix = colorize_prefix(module);

    let _ = writeln!(stderr().lock(), "{prefix} {message}");
}

/// Prefix color by module; unknown modules are yellow.
///
/// Colors follow `--color`: `never` and non-terminal stderr give plain text.
fn colorize_prefix(module: &str) -> String {
    let style = if module.eq_ignore_ascii_case("sitemap") || module.eq_ignore_ascii_case("robots")
    {
        Style::new().bright_green()
    } else if module.eq_ignore_ascii_case("integrations") {
        Style::new().bright_blue()
    } else if module.eq_ignore_ascii_case("error") || module.eq_ignore_ascii_case("warning") {
        Style::new().bright_red()
    } else {
        Style::new().bright_yellow()
    };

    let prefix = format!("[{module}]");
    prefix
        .if_supports_color(Stream::Stderr, |p| p.style(style.bold()))
        .to_string()
}
