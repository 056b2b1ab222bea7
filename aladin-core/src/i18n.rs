//! UI strings for the two supported languages.

use crate::catalog::altitude_height_m;
use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Local storage key holding the language code.
pub const LANGUAGE_STORAGE_KEY: &str = "aladin-viewer.lang";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    English,
    Slovenian,
}

/// Static string table for one language.
pub struct Strings {
    pub title: &'static str,
    pub run: &'static str,
    pub past: &'static str,
    pub loading: &'static str,
    pub no_forecast: &'static str,
    pub clouds_and_rain: &'static str,
    pub wind_10m: &'static str,
    pub hotspots: &'static str,
    pub help_title: &'static str,
    pub help_lines: &'static [&'static str],
    pub close: &'static str,
    pub weekdays: [&'static str; 7],
}

static EN: Strings = Strings {
    title: "ALADIN forecast",
    run: "Run",
    past: "past",
    loading: "Loading...",
    no_forecast: "Forecast data not available.",
    clouds_and_rain: "Clouds & rain",
    wind_10m: "10m",
    hotspots: "Wind hotspots",
    help_title: "How to navigate",
    help_lines: &[
        "Swipe left/right or use ← → to change the forecast hour.",
        "Swipe up/down or use ↑ ↓ to change the altitude layer.",
        "Pinch with two fingers to zoom and pan.",
        "Press H or the wind button for 10m wind hotspots; tap a site to label it.",
    ],
    close: "Close",
    weekdays: ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
};

static SL: Strings = Strings {
    title: "Napoved ALADIN",
    run: "Izračun",
    past: "preteklo",
    loading: "Nalaganje...",
    no_forecast: "Podatki o napovedi niso na voljo.",
    clouds_and_rain: "Oblačnost in padavine",
    wind_10m: "10m",
    hotspots: "Vetrovne točke",
    help_title: "Navigacija",
    help_lines: &[
        "Podrsaj levo/desno ali uporabi ← → za spremembo ure napovedi.",
        "Podrsaj gor/dol ali uporabi ↑ ↓ za spremembo višinskega sloja.",
        "Z dvema prstoma povečaj in premikaj sliko.",
        "Pritisni H ali gumb za veter za veter na 10m; tapni točko za oznako.",
    ],
    close: "Zapri",
    weekdays: ["pon", "tor", "sre", "čet", "pet", "sob", "ned"],
};

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Slovenian => "sl",
        }
    }

    /// Parse a stored code; anything unrecognised falls back to English.
    pub fn from_code(code: &str) -> Language {
        match code.trim().to_ascii_lowercase().as_str() {
            "sl" | "si" => Language::Slovenian,
            _ => Language::English,
        }
    }

    pub fn toggle(&self) -> Language {
        match self {
            Language::English => Language::Slovenian,
            Language::Slovenian => Language::English,
        }
    }

    pub fn strings(&self) -> &'static Strings {
        match self {
            Language::English => &EN,
            Language::Slovenian => &SL,
        }
    }

    pub fn weekday(&self, day: Weekday) -> &'static str {
        self.strings().weekdays[day.num_days_from_monday() as usize]
    }

    /// Display name of an altitude code.
    pub fn altitude_label(&self, code: &str) -> String {
        match altitude_height_m(code) {
            Some(height) => format!("{} m", height),
            None => self.strings().clouds_and_rain.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for lang in [Language::English, Language::Slovenian] {
            assert_eq!(Language::from_code(lang.code()), lang);
        }
        assert_eq!(Language::from_code(" SL "), Language::Slovenian);
        assert_eq!(Language::from_code("de"), Language::English);
        assert_eq!(Language::from_code(""), Language::English);
    }

    #[test]
    fn test_toggle() {
        assert_eq!(Language::English.toggle(), Language::Slovenian);
        assert_eq!(Language::English.toggle().toggle(), Language::English);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Language::English.altitude_label("vf1500m"), "1500 m");
        assert_eq!(Language::Slovenian.altitude_label("tcc-rr"), "Oblačnost in padavine");
        assert_eq!(Language::Slovenian.weekday(Weekday::Sun), "ned");
    }
}
