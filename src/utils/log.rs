//! Logging utilities with colored output.
//!
//! # Example
//!
//! ```ignore
//! log!("icons"; "adding: {}", symbol_id);
//! ```

use colored::{ColoredString, Colorize};
use crossterm::{
    execute,
    terminal::{Clear, ClearType, size},
    tty::IsTty,
};
use std::{
    io::{Write, stdout},
    sync::OnceLock,
};

/// Cached terminal width, `None` when stdout is not a terminal
static TERMINAL_WIDTH: OnceLock<Option<u16>> = OnceLock::new();

/// Length of brackets around module name: "[]"
const BRACKET_LEN: usize = 2;
/// Space after prefix: "[module] " <- this space
const SPACE_AFTER_PREFIX: usize = 1;

/// Calculate total prefix length for a module name.
///
/// Returns: `module.len() + 3` (for "[", "]", and trailing space)
#[inline]
const fn calc_prefix_len(module_len: usize) -> usize {
    module_len + BRACKET_LEN + SPACE_AFTER_PREFIX
}

/// Get terminal width, cached after first call.
///
/// Returns `None` when output is piped or redirected. Falls back to 120
/// columns if a terminal is attached but its size cannot be read.
fn get_terminal_width() -> Option<u16> {
    *TERMINAL_WIDTH.get_or_init(|| {
        stdout()
            .is_tty()
            .then(|| size().map(|(w, _)| w).unwrap_or(120))
    })
}

// ============================================================================
// Log Macro
// ============================================================================

/// Log a message with a colored module prefix.
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::utils::log::log($module, &format!($($arg)*))
    }};
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Log a message with a colored module prefix.
///
/// On a terminal, long messages are truncated to fit its width. Piped
/// output gets the full message and no control sequences.
#[inline]
pub fn log(module: &str, message: &str) {
    let module_lower = module.to_ascii_lowercase();
    let prefix = colorize_prefix(module, &module_lower);
    let width = get_terminal_width();

    let mut stdout = stdout().lock();
    if width.is_some() {
        execute!(stdout, Clear(ClearType::UntilNewLine)).ok();
    }

    let message = fit_message(message, module.len(), width);

    writeln!(stdout, "{prefix} {message}").ok();
    stdout.flush().ok();
}

/// Apply color to a module prefix based on module type.
#[inline]
fn colorize_prefix(module: &str, module_lower: &str) -> ColoredString {
    let prefix = format!("[{module}]");
    match module_lower {
        "hook" => prefix.bright_blue().bold(),
        "icons" => prefix.bright_green().bold(),
        "git" => prefix.bright_magenta().bold(),
        "error" => prefix.bright_red().bold(),
        _ => prefix.bright_yellow().bold(),
    }
}

/// Trim `message` so the prefixed line fits in `width` columns, if any
#[inline]
fn fit_message(message: &str, module_len: usize, width: Option<u16>) -> &str {
    match width {
        Some(width) => {
            let max_msg_len = (width as usize).saturating_sub(calc_prefix_len(module_len));
            truncate_str(message, max_msg_len)
        }
        None => message,
    }
}

/// Truncate a string to fit within max_len bytes.
///
/// Ensures the result is valid UTF-8 by finding the nearest character boundary.
#[inline]
fn truncate_str(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        return s;
    }
    let mut end = max_len;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calc_prefix_len() {
        // "icons" -> "[icons] " = 5 + 2 + 1 = 8
        assert_eq!(calc_prefix_len(5), 8);
        // "" -> "[] "
        assert_eq!(calc_prefix_len(0), 3);
    }

    #[test]
    fn test_truncate_str_fits() {
        assert_eq!(truncate_str("adding: solid-x", 40), "adding: solid-x");
        assert_eq!(truncate_str("hello", 5), "hello");
    }

    #[test]
    fn test_truncate_str_needs_truncation() {
        assert_eq!(truncate_str("hello world", 5), "hello");
        assert_eq!(truncate_str("hello", 0), "");
    }

    #[test]
    fn test_truncate_str_unicode_boundary() {
        // "a你b" = 1 + 3 + 1 bytes
        let s = "a你b";
        assert_eq!(truncate_str(s, 4), "a你");
        assert_eq!(truncate_str(s, 3), "a");
        assert_eq!(truncate_str(s, 2), "a");
    }

    #[test]
    fn test_fit_message_on_terminal() {
        // "[icons] " takes 8 of the 20 columns
        assert_eq!(fit_message("adding: solid-academic-cap", 5, Some(20)), "adding: soli");
        assert_eq!(fit_message("short", 5, Some(20)), "short");
        assert_eq!(fit_message("anything", 5, Some(4)), "");
    }

    #[test]
    fn test_fit_message_when_piped() {
        let long = "sprite generated at ".to_string() + &"x".repeat(300);
        assert_eq!(fit_message(&long, 5, None), long);
    }

    #[test]
    fn test_colorize_prefix_text() {
        colored::control::set_override(false);
        assert_eq!(colorize_prefix("icons", "icons").to_string(), "[icons]");
        assert_eq!(colorize_prefix("Git", "git").to_string(), "[Git]");
        colored::control::unset_override();
    }
}
