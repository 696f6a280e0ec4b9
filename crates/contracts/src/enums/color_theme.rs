use serde::{Deserialize, Serialize};

/// Colour scheme of the site. Dark mode is the `dark` class on `<html>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTheme {
    #[default]
    Light,
    Dark,
}

impl ColorTheme {
    /// Value written to storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorTheme::Light => "light",
            ColorTheme::Dark => "dark",
        }
    }

    /// Theme to start with, given what is stored and the system preference.
    ///
    /// Only an explicit `"dark"` selects dark; any other stored value means
    /// light. With nothing stored the system preference decides.
    pub fn initial(stored: Option<&str>, prefers_dark: bool) -> Self {
        match stored {
            Some("dark") => ColorTheme::Dark,
            Some(_) => ColorTheme::Light,
            None if prefers_dark => ColorTheme::Dark,
            None => ColorTheme::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ColorTheme::Light => ColorTheme::Dark,
            ColorTheme::Dark => ColorTheme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ColorTheme::Dark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_theme() {
        assert_eq!(ColorTheme::initial(Some("dark"), false), ColorTheme::Dark);
        assert_eq!(ColorTheme::initial(Some("light"), true), ColorTheme::Light);
        assert_eq!(ColorTheme::initial(Some("forest"), true), ColorTheme::Light);
        assert_eq!(ColorTheme::initial(None, true), ColorTheme::Dark);
        assert_eq!(ColorTheme::initial(None, false), ColorTheme::Light);
    }

    #[test]
    fn test_toggle_round_trip() {
        assert_eq!(ColorTheme::Light.toggled(), ColorTheme::Dark);
        assert_eq!(ColorTheme::Dark.toggled().as_str(), "light");
    }
}
