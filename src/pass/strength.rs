//! Length-based strength rating.
//!
//! Only the length is considered. Character diversity is ignored.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Strength {
    /// No password generated yet.
    Waiting,
    VeryWeak,
    Weak,
    Good,
    Strong,
    VeryStrong,
}

impl Strength {
    pub fn from_length(len: usize) -> Self {
        match len {
            0 => Strength::Waiting,
            1..=3 => Strength::VeryWeak,
            4..=6 => Strength::Weak,
            7..=8 => Strength::Good,
            9..=10 => Strength::Strong,
            _ => Strength::VeryStrong,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Strength::Waiting => "Waiting",
            Strength::VeryWeak => "Very Weak",
            Strength::Weak => "Weak",
            Strength::Good => "Good",
            Strength::Strong => "Strong",
            Strength::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Rate a password by its character count. An empty string is `Waiting`.
pub fn classify(password: &str) -> Strength {
    Strength::from_length(password.chars().count())
}
