use crate::pass::CharClass;
use crate::pass::config::MAX_LENGTH;
use crate::terminal::{BOLD, BoxWriter, GREEN, RESET, strength_badge};

use super::state::App;

const SLIDER_WIDTH: usize = 25;

/// Full screen contents for the current state.
pub fn render(app: &App) -> String {
    let palette = app.theme().palette();
    let config = app.config();
    let mut b = BoxWriter::new(palette);

    b.top("Random Password Generator")
        .line("")
        .center(&strength_badge(app.strength()))
        .line("")
        .center(&format!("{BOLD}{}", app.display()))
        .line("");

    if app.copied {
        b.center(&format!("{GREEN}\u{2713} Copied to clipboard"));
    } else {
        b.center(&format!("{}[c] copy   [r/Enter] refresh", palette.subtext));
    }

    b.rule()
        .line(&format!(
            "Length {:>2}  {}{}{RESET}  [\u{2190}/\u{2192}]",
            config.length,
            palette.accent,
            slider(config.length)
        ))
        .line("")
        .line(&toggles(app));

    b.rule()
        .line(&format!("{}[t] theme   [s] save   [q] quit", palette.subtext));
    if let Some(notice) = &app.notice {
        b.line(notice);
    }
    b.bottom().finish()
}

fn slider(length: usize) -> String {
    let filled = (length * SLIDER_WIDTH).div_ceil(MAX_LENGTH).min(SLIDER_WIDTH);
    format!("{}{}", "\u{2501}".repeat(filled), "\u{2500}".repeat(SLIDER_WIDTH - filled))
}

fn toggles(app: &App) -> String {
    CharClass::ALL
        .iter()
        .enumerate()
        .map(|(i, &class)| {
            let mark = if app.settings.classes.contains(class) { "\u{25cf}" } else { "\u{25cb}" };
            format!("[{}] {mark} {}", i + 1, class.label())
        })
        .collect::<Vec<_>>()
        .join("  ")
}
