// src/logger.rs
// =============================================================================
// Diagnostics for the audit run.
//
// The report is the only thing that goes to stdout, so everything here
// writes to stderr:
// - log!  prints progress lines, but only when --verbose is set
// - warn! prints warnings (like an unreadable document) every time
//
// Each line gets a colored "[module]" prefix. owo-colors checks whether
// stderr is a terminal and leaves the prefix plain when it isn't (pipes, CI).
//
// Rust concepts:
// - Atomics: a global flag that is safe to read from anywhere
// - macro_rules!: small macros that forward to format_args!
// =============================================================================

use owo_colors::{OwoColorize, Stream};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

// Global verbose flag (set from the --verbose CLI argument)
static VERBOSE: AtomicBool = AtomicBool::new(false);

pub fn set_verbose(verbose: bool) {
    VERBOSE.store(verbose, Ordering::Relaxed);
}

pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

// Prints a progress line if verbose mode is on
pub fn progress(module: &str, message: fmt::Arguments<'_>) {
    if !is_verbose() {
        return;
    }
    let prefix = format!("[{}]", module);
    eprintln!(
        "{} {}",
        prefix.if_supports_color(Stream::Stderr, |t| t.cyan()),
        message
    );
}

// Prints a warning line, regardless of verbose mode
pub fn warning(module: &str, message: fmt::Arguments<'_>) {
    let prefix = format!("[{}]", module);
    eprintln!(
        "{} {} {}",
        prefix.if_supports_color(Stream::Stderr, |t| t.yellow()),
        "warning:".if_supports_color(Stream::Stderr, |t| t.yellow()),
        message
    );
}

// log!("index"; "found {} documents", count);
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {
        $crate::logger::progress($module, format_args!($($arg)*))
    };
}

// warn!("audit"; "could not read {}: {}", path, err);
macro_rules! warn {
    ($module:expr; $($arg:tt)*) => {
        $crate::logger::warning($module, format_args!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_flag_toggles() {
        set_verbose(true);
        assert!(is_verbose());
        set_verbose(false);
        assert!(!is_verbose());
    }
}
