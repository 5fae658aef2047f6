//! Persisted user preferences.

mod file;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::pass::config::{DEFAULT_LENGTH, MAX_LENGTH, MIN_LENGTH};
use crate::pass::{ClassSet, Configuration};

pub use file::{ENV_PATH, default_path};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub length: usize,
    pub classes: ClassSet,
    pub dark_theme: bool,
}

impl Settings {
    pub fn load_from_file() -> Result<Self> {
        file::load(&default_path())
    }

    pub fn save_to_file(&self) -> Result<()> {
        file::save(self, &default_path())
    }

    /// Persist the theme flag, leaving the stored length and classes alone.
    pub fn save_theme_to_file(dark: bool) -> Result<()> {
        file::save_theme(dark, &default_path())
    }

    pub fn configuration(&self) -> Configuration {
        Configuration {
            length: self.length,
            classes: self.classes,
        }
    }

    pub fn apply(&mut self, config: &Configuration) {
        self.length = config.length;
        self.classes = config.classes;
    }

    /// Pull hand-edited values back into the supported range.
    pub fn normalize(&mut self) {
        let clamped = self.length.clamp(MIN_LENGTH, MAX_LENGTH);
        if clamped != self.length {
            log::warn!(
                "saved length {} out of range, using {clamped}",
                self.length
            );
            self.length = clamped;
        }
        if self.classes.is_empty() {
            log::warn!("saved settings enable no character class, enabling all");
            self.classes = ClassSet::all();
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            classes: ClassSet::all(),
            dark_theme: true,
        }
    }
}
