//! Generated password value.

use std::fmt;

use zeroize::Zeroize;

use super::strength::{self, Strength};

/// A generated password. The buffer is wiped on drop and `Debug` never
/// prints the contents.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub(crate) fn from_chars(chars: impl Iterator<Item = char>) -> Self {
        Password(chars.collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn strength(&self) -> Strength {
        strength::classify(self.as_str())
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Password(<{} chars>)", self.len())
    }
}

impl Drop for Password {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}
