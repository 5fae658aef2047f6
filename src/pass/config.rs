//! Generation parameters.

use super::charset::{self, ClassSet};
use crate::error::{Error, Result};

pub const MIN_LENGTH: usize = 1;
pub const MAX_LENGTH: usize = 50;
pub const DEFAULT_LENGTH: usize = 16;

/// Immutable value handed to the generator on every call.
/// The caller owns it; the core never mutates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Configuration {
    pub length: usize,
    pub classes: ClassSet,
}

impl Configuration {
    /// Build a configuration, rejecting values the generator would refuse.
    pub fn new(length: usize, classes: ClassSet) -> Result<Self> {
        let config = Self { length, classes };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&self.length) {
            return Err(Error::InvalidConfiguration(format!(
                "length {} is outside {MIN_LENGTH}..={MAX_LENGTH}",
                self.length
            )));
        }
        if self.classes.is_empty() {
            return Err(Error::InvalidConfiguration(
                "no character class enabled".into(),
            ));
        }
        Ok(())
    }

    pub fn pool(&self) -> Vec<char> {
        charset::build(self.classes)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            classes: ClassSet::all(),
        }
    }
}
