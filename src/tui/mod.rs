//! Interactive full-screen mode.

mod render;
mod state;

use std::process::ExitCode;

use crossterm::event::{self, Event, KeyEventKind};

use crate::clipboard::Clipboard;
use crate::error::{Error, Result};
use crate::rand::OsSource;
use crate::settings::Settings;
use crate::terminal::{ScreenGuard, flush};

pub use render::render;
pub use state::{Action, App};

/// Run interactive mode until the user quits.
pub fn run() -> ExitCode {
    let settings = Settings::load_from_file().unwrap_or_else(|e| {
        log::warn!("failed to load settings: {e}");
        Settings::default()
    });

    match run_with(settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}

fn run_with(settings: Settings) -> Result<()> {
    let mut guard = ScreenGuard::new().map_err(|e| Error::Terminal(e.to_string()))?;
    let mut rng = OsSource;
    let mut clipboard: Option<Clipboard> = None;

    let mut app = App::new(settings);
    app.regenerate(&mut rng);

    loop {
        draw(&app);

        let Event::Key(key) = event::read().map_err(|e| Error::Terminal(e.to_string()))? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match app.handle_key(key, &mut rng) {
            Action::Continue => {}
            Action::Quit => break,
            Action::Copy => copy(&mut app, &mut clipboard),
            Action::Persist => persist(&mut app),
            Action::SaveTheme => save_theme(&mut app),
        }
    }

    guard.restore();
    Ok(())
}

fn draw(app: &App) {
    print!("\x1b[H\x1b[2J{}", render(app));
    flush();
}

fn copy(app: &mut App, clipboard: &mut Option<Clipboard>) {
    let Some(password) = &app.password else {
        return;
    };

    if clipboard.is_none() {
        *clipboard = Clipboard::open()
            .map_err(|e| log::warn!("{e}"))
            .ok();
    }
    let result = match clipboard.as_mut() {
        Some(cb) => cb.copy(password.as_str()),
        None => Err(Error::Clipboard("no clipboard provider".into())),
    };

    match result {
        Ok(()) => app.mark_copied(),
        Err(e) => {
            log::warn!("{e}");
            app.notice = Some("Clipboard unavailable".into());
        }
    }
}

fn persist(app: &mut App) {
    app.notice = Some(match app.settings.save_to_file() {
        Ok(()) => "Settings saved".into(),
        Err(e) => {
            log::warn!("{e}");
            "Could not save settings".into()
        }
    });
}

fn save_theme(app: &mut App) {
    if let Err(e) = Settings::save_theme_to_file(app.settings.dark_theme) {
        log::warn!("{e}");
        app.notice = Some("Could not save theme".into());
    }
}
