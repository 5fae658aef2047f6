//! CLI context - bundles settings, parsed arguments, and output handling.

use std::io::{self, Write};

use zeroize::Zeroize;

use super::{Args, prompts, quiet};
use crate::clipboard::Clipboard;
use crate::error::Result;
use crate::pass::display::{DISPLAY_LIMIT, truncate};
use crate::pass::{self, CharClass, Configuration, Password};
use crate::rand::{OsSource, SecureRandomSource};
use crate::settings::{self, Settings};
use crate::terminal::{Theme, print_card};

pub struct Context {
    pub settings: Settings,
    pub config: Configuration,
    pub theme: Theme,
    args: Args,
}

impl Context {
    pub fn new(args: Args) -> Self {
        let settings = Settings::load_from_file().unwrap_or_else(|e| {
            prompts::warn(&format!("Failed to load settings: {e}"));
            Settings::default()
        });
        Self::with_settings(args, settings)
    }

    /// Saved settings overridden by the command line.
    pub fn with_settings(args: Args, settings: Settings) -> Self {
        let mut config = settings.configuration();

        if let Some(length) = args.length {
            config.length = length;
        }
        if !args.only.is_empty() {
            config.classes = args.only.iter().copied().collect();
        }
        let disabled = [
            (CharClass::Uppercase, args.no_upper),
            (CharClass::Lowercase, args.no_lower),
            (CharClass::Numbers, args.no_numbers),
            (CharClass::Symbols, args.no_symbols),
        ];
        for (class, off) in disabled {
            if off {
                config.classes.remove(class);
            }
        }

        let theme = args
            .theme
            .unwrap_or_else(|| Theme::from_dark(settings.dark_theme));

        Self {
            settings,
            config,
            theme,
            args,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        quiet::set(self.args.quiet);
        let mut rng = OsSource;
        let passwords =
            pass::generate_batch(&self.config, self.args.number as usize, &mut rng)?;

        if self.args.save {
            self.save()?;
        }

        let copied = self.args.clipboard && self.copy(&passwords);
        self.print(&passwords, copied, rng.name())
    }

    fn save(&mut self) -> Result<()> {
        self.settings.apply(&self.config);
        self.settings.dark_theme = self.theme.is_dark();
        self.settings.save_to_file()?;
        prompts::settings_saved(&settings::default_path());
        Ok(())
    }

    fn copy(&self, passwords: &[Password]) -> bool {
        let mut joined = passwords
            .iter()
            .map(Password::as_str)
            .collect::<Vec<_>>()
            .join("\n");
        let result = Clipboard::open().and_then(|mut cb| cb.copy(&joined));
        joined.zeroize();

        match result {
            Ok(()) => {
                prompts::clipboard_copied(passwords.len());
                true
            }
            Err(e) => {
                log::warn!("clipboard copy failed: {e}");
                prompts::clipboard_unavailable(&e);
                false
            }
        }
    }

    fn print(&self, passwords: &[Password], copied: bool, source: &str) -> Result<()> {
        if quiet::plain_output() || passwords.len() > 1 {
            if copied {
                return Ok(());
            }
            let stdout = io::stdout();
            let mut out = stdout.lock();
            for p in passwords {
                writeln!(out, "{}", p.as_str())?;
            }
            return Ok(());
        }

        if let Some(p) = passwords.first() {
            let (shown, footer) = self.card_text(p, copied, source);
            print_card(self.theme.palette(), p.strength(), &shown, Some(&footer));
        }
        Ok(())
    }

    /// Display text and footer for the single-password card. The display is
    /// only truncated when the full value is safely on the clipboard.
    fn card_text(&self, p: &Password, copied: bool, source: &str) -> (String, String) {
        if copied {
            let shown = if self.args.full {
                p.as_str().to_owned()
            } else {
                truncate(p.as_str(), DISPLAY_LIMIT).into_owned()
            };
            (shown, "Full password copied to clipboard".to_owned())
        } else {
            (
                p.as_str().to_owned(),
                format!("{} chars \u{2022} {source}", p.len()),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::ClassSet;
    use clap::Parser;

    fn ctx(args: &[&str], settings: Settings) -> Context {
        let args =
            Args::try_parse_from(std::iter::once("strongpass").chain(args.iter().copied()))
                .unwrap();
        Context::with_settings(args, settings)
    }

    #[test]
    fn uses_saved_settings_without_flags() {
        let saved = Settings {
            length: 30,
            classes: ClassSet::only(CharClass::Lowercase),
            dark_theme: false,
        };
        let c = ctx(&[], saved);
        assert_eq!(c.config.length, 30);
        assert_eq!(c.config.classes, ClassSet::only(CharClass::Lowercase));
        assert_eq!(c.theme, Theme::Light);
    }

    #[test]
    fn flags_override_settings() {
        let c = ctx(
            &["-l", "8", "--no-symbols", "--no-upper", "-t", "dark"],
            Settings::default(),
        );
        assert_eq!(c.config.length, 8);
        let expected: ClassSet = [CharClass::Lowercase, CharClass::Numbers].into_iter().collect();
        assert_eq!(c.config.classes, expected);
        assert_eq!(c.theme, Theme::Dark);
    }

    #[test]
    fn only_then_disable_can_empty_the_pool() {
        let c = ctx(&["--only", "numbers", "--no-numbers"], Settings::default());
        assert!(c.config.classes.is_empty());
        assert!(c.config.validate().unwrap_err().is_invalid_configuration());
    }

    #[test]
    fn card_truncates_only_when_copied() {
        let c = ctx(&["-l", "25"], Settings::default());
        let p = pass::generate(&c.config, &mut OsSource).unwrap();

        let (shown, _) = c.card_text(&p, false, "test");
        assert_eq!(shown, p.as_str());

        let (shown, footer) = c.card_text(&p, true, "test");
        assert_eq!(shown.chars().count(), DISPLAY_LIMIT + 3);
        assert!(shown.ends_with("..."));
        assert!(footer.contains("copied"));
    }

    #[test]
    fn full_flag_disables_truncation() {
        let c = ctx(&["-l", "25", "--full"], Settings::default());
        let p = pass::generate(&c.config, &mut OsSource).unwrap();
        let (shown, _) = c.card_text(&p, true, "test");
        assert_eq!(shown, p.as_str());
    }
}
