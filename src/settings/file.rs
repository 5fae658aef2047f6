//! Settings file persistence.

use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::Settings;
use crate::error::Result;

/// Environment variable overriding the settings file location.
pub const ENV_PATH: &str = "STRONGPASS_SETTINGS";

pub fn default_path() -> PathBuf {
    if let Some(path) = env::var_os(ENV_PATH) {
        return PathBuf::from(path);
    }
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("strongpass")
        .join("settings.json")
}

pub fn save(settings: &Settings, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    let data = serde_json::to_string_pretty(settings)?;
    fs::write(path, data + "\n")?;
    log::debug!("settings saved to {}", path.display());
    Ok(())
}

pub fn save_theme(dark: bool, path: &Path) -> Result<()> {
    let mut stored = load(path)?;
    stored.dark_theme = dark;
    save(&stored, path)
}

/// Missing file yields defaults. A corrupt file is reported and replaced by
/// defaults; it gets overwritten on the next save.
pub fn load(path: &Path) -> Result<Settings> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::debug!("no settings at {}, using defaults", path.display());
            return Ok(Settings::default());
        }
        Err(e) => return Err(e.into()),
    };

    let mut settings = match serde_json::from_str::<Settings>(&data) {
        Ok(s) => s,
        Err(e) => {
            log::warn!("ignoring unreadable settings {}: {e}", path.display());
            Settings::default()
        }
    };
    settings.normalize();
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::{CharClass, ClassSet};

    #[test]
    fn round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let settings = Settings {
            length: 24,
            classes: [CharClass::Uppercase, CharClass::Numbers].into_iter().collect(),
            dark_theme: false,
        };
        save(&settings, &path).unwrap();
        assert_eq!(load(&path).unwrap(), settings);
    }

    #[test]
    fn theme_save_keeps_stored_generation_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let stored = Settings {
            length: 12,
            classes: ClassSet::only(CharClass::Lowercase),
            dark_theme: true,
        };
        save(&stored, &path).unwrap();

        save_theme(false, &path).unwrap();
        let loaded = load(&path).unwrap();
        assert!(!loaded.dark_theme);
        assert_eq!(loaded.length, 12);
        assert_eq!(loaded.classes, ClassSet::only(CharClass::Lowercase));
    }

    #[test]
    fn theme_save_without_file_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        save_theme(false, &path).unwrap();
        let loaded = load(&path).unwrap();
        assert!(!loaded.dark_theme);
        assert_eq!(loaded.length, Settings::default().length);
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load(&dir.path().join("absent.json")).unwrap();
        assert_eq!(loaded, Settings::default());
    }

    #[test]
    fn corrupt_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "length=12,true").unwrap();
        assert_eq!(load(&path).unwrap(), Settings::default());
    }

    #[test]
    fn partial_file_fills_defaults_and_normalizes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "length": 99, "classes": [] }"#).unwrap();
        let loaded = load(&path).unwrap();
        assert_eq!(loaded.length, 50);
        assert_eq!(loaded.classes, ClassSet::all());
        assert!(loaded.dark_theme);
    }
}
