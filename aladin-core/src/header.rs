//! Header text and "past" status for the current forecast frame.

use crate::catalog::HOTSPOTS;
use crate::i18n::Language;
use crate::navigation::{DisplayMode, Navigator};
use chrono::{DateTime, Datelike, Utc};
use chrono_tz::Tz;

/// Rendered header fields. Compared field by field so unchanged text is not
/// re-rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// e.g. "Run 14.03. 12 UTC"
    pub run: String,
    /// e.g. "Sat 15.03. 03:00"
    pub valid: String,
    /// e.g. "+015h"
    pub offset: String,
    /// Altitude name, or the fixed "10m" label in hotspot mode
    pub layer: String,
    /// Hotspot region label, only in hotspot mode
    pub region: Option<String>,
    /// Valid time lies before the anchor captured at load
    pub past: bool,
}

/// `true` iff `valid` is strictly earlier than `anchor`.
pub fn is_past(valid: DateTime<Utc>, anchor: DateTime<Utc>) -> bool {
    valid < anchor
}

/// Local display of a valid instant: weekday, day, month and clock time.
pub fn format_valid_time(valid: DateTime<Utc>, tz: Tz, lang: Language) -> String {
    let local = valid.with_timezone(&tz);
    format!("{} {}", lang.weekday(local.weekday()), local.format("%d.%m. %H:%M"))
}

pub fn present(nav: &Navigator, anchor: DateTime<Utc>, tz: Tz, lang: Language) -> Header {
    let strings = lang.strings();
    let run = nav.run();
    let valid = nav.valid_time();
    let (layer, region) = match nav.mode() {
        DisplayMode::Normal(_) => (lang.altitude_label(nav.layer_code()), None),
        DisplayMode::Hotspot(index) => (
            strings.wind_10m.to_string(),
            Some(HOTSPOTS[index].label.to_string()),
        ),
    };
    Header {
        run: format!("{} {} {:02} UTC", strings.run, run.date.format("%d.%m."), run.time.hour()),
        valid: format_valid_time(valid, tz, lang),
        offset: format!("+{:03}h", nav.offset()),
        layer,
        region,
        past: is_past(valid, anchor),
    }
}
