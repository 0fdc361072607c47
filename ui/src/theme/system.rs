//! Terminal colour scheme detection.

use crate::theme::types::ThemePreference;

/// Interpret a `COLORFGBG` value (`"15;0"`, `"0;default;15"`).
///
/// The last field is the background colour index: the dark half of the
/// 16-colour palette (0-6, 8) means a dark terminal, the rest a light one.
pub fn preference_from_colorfgbg(value: &str) -> Option<ThemePreference> {
    let background: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    match background {
        0..=6 | 8 => Some(ThemePreference::Dark),
        7 | 9..=15 => Some(ThemePreference::Light),
        _ => None,
    }
}

/// The terminal's preference, if it advertises one.
pub fn detect_system_preference() -> Option<ThemePreference> {
    let value = std::env::var("COLORFGBG").ok()?;
    let preference = preference_from_colorfgbg(&value);
    log::debug!("COLORFGBG={value} -> {preference:?}");
    preference
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_backgrounds() {
        assert_eq!(preference_from_colorfgbg("15;0"), Some(ThemePreference::Dark));
        assert_eq!(preference_from_colorfgbg("7;8"), Some(ThemePreference::Dark));
        assert_eq!(
            preference_from_colorfgbg("15;default;4"),
            Some(ThemePreference::Dark)
        );
    }

    #[test]
    fn test_light_backgrounds() {
        assert_eq!(preference_from_colorfgbg("0;15"), Some(ThemePreference::Light));
        assert_eq!(preference_from_colorfgbg("0;7"), Some(ThemePreference::Light));
    }

    #[test]
    fn test_unknown_values() {
        assert_eq!(preference_from_colorfgbg(""), None);
        assert_eq!(preference_from_colorfgbg("15;default"), None);
        assert_eq!(preference_from_colorfgbg("0;200"), None);
    }
}
