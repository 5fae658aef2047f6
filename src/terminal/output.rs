//! Terminal output utilities.
//!
//! Box drawing, the password card, ANSI helpers.

use std::io::{self, Write};

use super::theme::{Palette, strength_badge};
use crate::pass::Strength;

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const GREEN: &str = "\x1b[38;5;35m";

// ============================================================================
// Terminal Control
// ============================================================================

pub fn flush() {
    let _ = io::stdout().flush();
}

// ============================================================================
// Box Drawing
// ============================================================================

pub const BOX_WIDTH: usize = 48;

/// Builds boxed lines. Lines end in `\r\n` so it works in raw mode too.
pub struct BoxWriter<'a> {
    palette: &'a Palette,
    out: String,
}

impl<'a> BoxWriter<'a> {
    pub fn new(palette: &'a Palette) -> Self {
        Self {
            palette,
            out: String::new(),
        }
    }

    /// ┌─ Title ──────┐
    pub fn top(&mut self, title: &str) -> &mut Self {
        let b = self.palette.border;
        if title.is_empty() {
            self.push(format!("{b}┌{}┐{RESET}", "─".repeat(BOX_WIDTH - 2)));
        } else {
            let title_part = format!("─ {} ", title);
            let remaining = (BOX_WIDTH - 2).saturating_sub(title_part.chars().count());
            self.push(format!(
                "{b}┌─ {RESET}{}{BOLD}{title}{RESET}{b} {}┐{RESET}",
                self.palette.accent,
                "─".repeat(remaining)
            ));
        }
        self
    }

    /// │ content          │
    pub fn line(&mut self, content: &str) -> &mut Self {
        self.aligned(content, false)
    }

    /// │     content      │
    pub fn center(&mut self, content: &str) -> &mut Self {
        self.aligned(content, true)
    }

    pub fn rule(&mut self) -> &mut Self {
        let b = self.palette.border;
        self.push(format!("{b}├{}┤{RESET}", "─".repeat(BOX_WIDTH - 2)));
        self
    }

    pub fn bottom(&mut self) -> &mut Self {
        let b = self.palette.border;
        self.push(format!("{b}└{}┘{RESET}", "─".repeat(BOX_WIDTH - 2)));
        self
    }

    pub fn finish(&mut self) -> String {
        std::mem::take(&mut self.out)
    }

    fn aligned(&mut self, content: &str, centered: bool) -> &mut Self {
        let inner_width = BOX_WIDTH - 4;
        let len = console_width(content);
        let pad = inner_width.saturating_sub(len);
        let (left, right) = if centered { (pad / 2, pad - pad / 2) } else { (0, pad) };
        let b = self.palette.border;
        self.push(format!(
            "{b}│{RESET} {}{}{content}{RESET}{} {b}│{RESET}",
            " ".repeat(left),
            self.palette.text,
            " ".repeat(right)
        ));
        self
    }

    fn push(&mut self, line: String) {
        self.out.push_str(&line);
        self.out.push_str("\r\n");
    }
}

/// Display width ignoring ANSI escape sequences.
pub fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

// ============================================================================
// Password Card
// ============================================================================

/// Badge plus the (possibly truncated) password, boxed.
pub fn card(palette: &Palette, strength: Strength, shown: &str, footer: Option<&str>) -> String {
    let mut b = BoxWriter::new(palette);
    b.top("Password")
        .line("")
        .center(&strength_badge(strength))
        .line("")
        .center(&format!("{BOLD}{shown}"))
        .line("");
    if let Some(footer) = footer {
        b.rule().center(&format!("{}{footer}", palette.subtext));
    }
    b.bottom().finish()
}

/// Print a card to stdout.
pub fn print_card(palette: &Palette, strength: Strength, shown: &str, footer: Option<&str>) {
    print!("{}", card(palette, strength, shown, footer));
    flush();
}
