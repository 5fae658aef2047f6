//! Interactive screen state and key handling.
//!
//! Key handling is a pure transition on [`App`]; the event loop in `mod.rs`
//! performs the side effects named by the returned [`Action`].

use std::borrow::Cow;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::pass::config::{MAX_LENGTH, MIN_LENGTH};
use crate::pass::display::{DISPLAY_LIMIT, truncate};
use crate::pass::{self, CharClass, Configuration, Password, Strength};
use crate::rand::SecureRandomSource;
use crate::settings::Settings;
use crate::terminal::Theme;

pub const PLACEHOLDER: &str = "\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Continue,
    /// Copy the full password to the clipboard.
    Copy,
    /// Write settings to disk.
    Persist,
    /// Write only the theme flag to disk.
    SaveTheme,
    Quit,
}

pub struct App {
    pub settings: Settings,
    pub password: Option<Password>,
    pub copied: bool,
    pub notice: Option<String>,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            password: None,
            copied: false,
            notice: None,
        }
    }

    pub fn config(&self) -> Configuration {
        self.settings.configuration()
    }

    pub fn theme(&self) -> Theme {
        Theme::from_dark(self.settings.dark_theme)
    }

    pub fn strength(&self) -> Strength {
        pass::classify(self.password.as_ref().map_or("", Password::as_str))
    }

    /// What the screen shows. The copied value is always `password`.
    pub fn display(&self) -> Cow<'_, str> {
        match &self.password {
            Some(p) => truncate(p.as_str(), DISPLAY_LIMIT),
            None => Cow::Borrowed(PLACEHOLDER),
        }
    }

    pub fn regenerate<R: SecureRandomSource + ?Sized>(&mut self, rng: &mut R) {
        self.copied = false;
        match pass::generate(&self.config(), rng) {
            Ok(p) => self.password = Some(p),
            Err(e) => {
                log::warn!("generation failed: {e}");
                self.password = None;
                self.notice = Some(e.to_string());
            }
        }
    }

    pub fn mark_copied(&mut self) {
        self.copied = true;
    }

    pub fn handle_key<R: SecureRandomSource + ?Sized>(
        &mut self,
        key: KeyEvent,
        rng: &mut R,
    ) -> Action {
        self.notice = None;

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') | KeyCode::Char('q') => Action::Quit,
                _ => Action::Continue,
            };
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Action::Quit,
            KeyCode::Enter | KeyCode::Char('r') => {
                self.regenerate(rng);
                Action::Continue
            }
            KeyCode::Left | KeyCode::Char('-') => {
                self.step_length(-1, rng);
                Action::Continue
            }
            KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') => {
                self.step_length(1, rng);
                Action::Continue
            }
            KeyCode::Char(c @ '1'..='4') => {
                let class = CharClass::ALL[(c as u8 - b'1') as usize];
                if self.settings.classes.toggle_keep_one(class) {
                    self.regenerate(rng);
                } else {
                    self.notice = Some("At least one character class must stay on".into());
                }
                Action::Continue
            }
            KeyCode::Char('c') if self.password.is_some() => Action::Copy,
            KeyCode::Char('t') => {
                self.settings.dark_theme = self.theme().toggled().is_dark();
                Action::SaveTheme
            }
            KeyCode::Char('s') => Action::Persist,
            _ => Action::Continue,
        }
    }

    fn step_length<R: SecureRandomSource + ?Sized>(&mut self, delta: isize, rng: &mut R) {
        let next = self
            .settings
            .length
            .saturating_add_signed(delta)
            .clamp(MIN_LENGTH, MAX_LENGTH);
        if next != self.settings.length {
            self.settings.length = next;
            self.regenerate(rng);
        }
    }
}
