//! Colour palettes and strength badge styling.

use crate::pass::Strength;

use super::RESET;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Theme {
    Dark,
    Light,
}

/// ANSI 256-colour escapes for one theme.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub text: &'static str,
    pub subtext: &'static str,
    pub accent: &'static str,
    pub border: &'static str,
}

const DARK: Palette = Palette {
    text: "\x1b[38;5;255m",
    subtext: "\x1b[38;5;245m",
    accent: "\x1b[38;5;105m",
    border: "\x1b[38;5;238m",
};

const LIGHT: Palette = Palette {
    text: "\x1b[38;5;235m",
    subtext: "\x1b[38;5;244m",
    accent: "\x1b[38;5;62m",
    border: "\x1b[38;5;250m",
};

impl Theme {
    pub fn from_dark(dark: bool) -> Self {
        if dark { Theme::Dark } else { Theme::Light }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn toggled(self) -> Self {
        Theme::from_dark(!self.is_dark())
    }

    pub fn palette(self) -> &'static Palette {
        match self {
            Theme::Dark => &DARK,
            Theme::Light => &LIGHT,
        }
    }
}

/// Background and foreground escape pair for a rating.
pub fn strength_colors(strength: Strength) -> (&'static str, &'static str) {
    match strength {
        Strength::Waiting => ("", "\x1b[38;5;244m"),
        Strength::VeryWeak => ("\x1b[48;5;160m", "\x1b[38;5;231m"),
        Strength::Weak => ("\x1b[48;5;215m", "\x1b[38;5;16m"),
        Strength::Good => ("\x1b[48;5;157m", "\x1b[38;5;16m"),
        Strength::Strong => ("\x1b[48;5;191m", "\x1b[38;5;16m"),
        Strength::VeryStrong => ("\x1b[48;5;29m", "\x1b[38;5;231m"),
    }
}

/// Uppercased label on its colour pair, e.g. ` VERY STRONG `.
pub fn strength_badge(strength: Strength) -> String {
    let (bg, fg) = strength_colors(strength);
    format!("{bg}{fg}\x1b[1m {} {RESET}", strength.label().to_uppercase())
}
