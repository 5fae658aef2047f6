//! User-facing messages for CLI output.

use super::quiet;
use crate::error::Error;

const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Yellow warning on stderr, suppressed in quiet mode.
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Red error on stderr. Always shown.
pub fn error(err: &Error) {
    eprintln!("{RED}{err}{RESET}");
    if err.is_invalid_configuration() {
        eprintln!("Enable at least one character class and use a length from 1 to 50.");
    }
}

pub fn clipboard_copied(count: usize) {
    if !quiet::enabled() {
        if count == 1 {
            eprintln!("*** -COPIED TO CLIPBOARD- ***");
        } else {
            eprintln!("*** -{count} PASSWORDS COPIED TO CLIPBOARD- ***");
        }
    }
}

pub fn clipboard_unavailable(err: &Error) {
    warn(&format!("{err}; printing instead"));
}

pub fn settings_saved(path: &std::path::Path) {
    if !quiet::enabled() {
        eprintln!("Settings saved \u{2192} {}", path.display());
    }
}
