//! Character classes and pool building.

use std::fmt;

use serde::{Deserialize, Serialize};

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const NUMBERS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CharClass {
    Uppercase,
    Lowercase,
    Numbers,
    Symbols,
}

impl CharClass {
    /// Canonical pool order.
    pub const ALL: [CharClass; 4] = [
        CharClass::Uppercase,
        CharClass::Lowercase,
        CharClass::Numbers,
        CharClass::Symbols,
    ];

    pub fn chars(self) -> &'static str {
        match self {
            CharClass::Uppercase => UPPERCASE,
            CharClass::Lowercase => LOWERCASE,
            CharClass::Numbers => NUMBERS,
            CharClass::Symbols => SYMBOLS,
        }
    }

    /// Toggle label shown in the TUI.
    pub fn label(self) -> &'static str {
        match self {
            CharClass::Uppercase => "ABC",
            CharClass::Lowercase => "abc",
            CharClass::Numbers => "123",
            CharClass::Symbols => "#$&",
        }
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CharClass::Uppercase => "uppercase",
            CharClass::Lowercase => "lowercase",
            CharClass::Numbers => "numbers",
            CharClass::Symbols => "symbols",
        };
        f.write_str(name)
    }
}

/// Set of enabled character classes. Iterates in canonical order.
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<CharClass>", into = "Vec<CharClass>")]
pub struct ClassSet(u8);

impl ClassSet {
    pub const fn empty() -> Self {
        ClassSet(0)
    }

    pub const fn all() -> Self {
        ClassSet(0b1111)
    }

    pub fn only(class: CharClass) -> Self {
        ClassSet(class.bit())
    }

    pub fn contains(&self, class: CharClass) -> bool {
        self.0 & class.bit() != 0
    }

    pub fn insert(&mut self, class: CharClass) {
        self.0 |= class.bit();
    }

    pub fn remove(&mut self, class: CharClass) {
        self.0 &= !class.bit();
    }

    /// Toggle `class`, refusing to disable the last enabled class.
    /// Returns false when the toggle was refused.
    pub fn toggle_keep_one(&mut self, class: CharClass) -> bool {
        if self.contains(class) && self.len() <= 1 {
            return false;
        }
        self.0 ^= class.bit();
        true
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = CharClass> + '_ {
        CharClass::ALL.into_iter().filter(|c| self.contains(*c))
    }
}

impl Default for ClassSet {
    fn default() -> Self {
        ClassSet::all()
    }
}

impl fmt::Debug for ClassSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<CharClass> for ClassSet {
    fn from_iter<I: IntoIterator<Item = CharClass>>(iter: I) -> Self {
        let mut set = ClassSet::empty();
        for class in iter {
            set.insert(class);
        }
        set
    }
}

impl From<Vec<CharClass>> for ClassSet {
    fn from(classes: Vec<CharClass>) -> Self {
        classes.into_iter().collect()
    }
}

impl From<ClassSet> for Vec<CharClass> {
    fn from(set: ClassSet) -> Self {
        set.iter().collect()
    }
}

/// Concatenate the enabled classes in canonical order.
/// Returns an empty pool when nothing is enabled.
pub fn build(classes: ClassSet) -> Vec<char> {
    let mut chars = Vec::with_capacity(size(classes));
    for class in classes.iter() {
        chars.extend(class.chars().chars());
    }
    chars
}

/// Pool size without building it.
pub fn size(classes: ClassSet) -> usize {
    classes.iter().map(|c| c.chars().len()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_sizes() {
        assert_eq!(UPPERCASE.len(), 26);
        assert_eq!(LOWERCASE.len(), 26);
        assert_eq!(NUMBERS.len(), 10);
        assert_eq!(SYMBOLS.len(), 26);
        assert_eq!(size(ClassSet::all()), 88);
    }

    #[test]
    fn pool_is_canonical_order_regardless_of_insertion() {
        let classes: ClassSet = [CharClass::Symbols, CharClass::Numbers, CharClass::Uppercase]
            .into_iter()
            .collect();
        let pool: String = build(classes).into_iter().collect();
        assert_eq!(pool, format!("{UPPERCASE}{NUMBERS}{SYMBOLS}"));
    }

    #[test]
    fn empty_set_builds_empty_pool() {
        assert!(build(ClassSet::empty()).is_empty());
        assert_eq!(size(ClassSet::empty()), 0);
    }

    #[test]
    fn single_class_pool() {
        let pool = build(ClassSet::only(CharClass::Numbers));
        assert_eq!(pool, NUMBERS.chars().collect::<Vec<_>>());
    }

    #[test]
    fn toggle_keeps_last_class() {
        let mut set = ClassSet::only(CharClass::Lowercase);
        assert!(!set.toggle_keep_one(CharClass::Lowercase));
        assert!(set.contains(CharClass::Lowercase));

        assert!(set.toggle_keep_one(CharClass::Numbers));
        assert!(set.toggle_keep_one(CharClass::Lowercase));
        assert_eq!(set, ClassSet::only(CharClass::Numbers));
    }

    #[test]
    fn serializes_as_class_names() {
        let set: ClassSet = [CharClass::Lowercase, CharClass::Symbols].into_iter().collect();
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["lowercase","symbols"]"#);
        let back: ClassSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
    }
}
