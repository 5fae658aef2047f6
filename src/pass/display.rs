//! Display truncation. Only affects what is shown, never what is copied.

use std::borrow::Cow;

pub const DISPLAY_LIMIT: usize = 18;
pub const TRUNCATION_MARKER: &str = "...";

/// First `limit` characters plus a marker, or the input unchanged if it fits.
pub fn truncate(password: &str, limit: usize) -> Cow<'_, str> {
    match password.char_indices().nth(limit) {
        None => Cow::Borrowed(password),
        Some((cut, _)) => {
            let mut shown = String::with_capacity(cut + TRUNCATION_MARKER.len());
            shown.push_str(&password[..cut]);
            shown.push_str(TRUNCATION_MARKER);
            Cow::Owned(shown)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_password_is_cut() {
        let pw = "abcdefghijklmnopqrstuvwxy";
        assert_eq!(pw.len(), 25);
        let shown = truncate(pw, DISPLAY_LIMIT);
        assert_eq!(shown, "abcdefghijklmnopqr...");
        assert!(shown.starts_with(&pw[..18]));
    }

    #[test]
    fn short_password_is_unchanged() {
        let pw = "0123456789";
        assert!(matches!(truncate(pw, DISPLAY_LIMIT), Cow::Borrowed(s) if s == pw));
    }

    #[test]
    fn exact_limit_is_unchanged() {
        let pw = "x".repeat(DISPLAY_LIMIT);
        assert_eq!(truncate(&pw, DISPLAY_LIMIT), pw.as_str());
    }
}
