//! Viewer configuration.
//!
//! The web app runs with [`ViewerConfig::default`]; the CLI overrides
//! individual fields from flags or loads a JSON file.

use crate::catalog::{BASE_URL, DEFAULT_REGION, MAX_OFFSET, MAX_RUNS};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// Runtime settings shared by the viewer and the CLI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Image server directory, without trailing slash
    pub base_url: String,
    /// Region suffix of regular images
    pub region: String,
    /// Minimum swipe displacement in CSS pixels
    pub swipe_threshold_px: f64,
    /// Upper bound of runs kept after discovery
    pub max_runs: usize,
    /// Largest browsable lead time on the newest run
    pub max_offset: u32,
    /// Delay before the loading indicator is shown
    pub loading_delay_ms: u32,
    /// IANA zone used for the header clock
    pub display_tz: Tz,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            region: DEFAULT_REGION.to_string(),
            swipe_threshold_px: 40.0,
            max_runs: MAX_RUNS,
            max_offset: MAX_OFFSET,
            loading_delay_ms: 150,
            display_tz: chrono_tz::Europe::Ljubljana,
        }
    }
}

impl ViewerConfig {
    /// Parse a JSON document; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let cfg = ViewerConfig::from_json(r#"{ "max_runs": 4, "display_tz": "UTC" }"#).unwrap();
        assert_eq!(cfg.max_runs, 4);
        assert_eq!(cfg.display_tz, chrono_tz::UTC);
        assert_eq!(cfg.base_url, BASE_URL);
        assert_eq!(cfg.swipe_threshold_px, 40.0);
    }

    #[test]
    fn test_with_base_url_strips_slash() {
        let cfg = ViewerConfig::default().with_base_url("http://localhost:8080/field/");
        assert_eq!(cfg.base_url, "http://localhost:8080/field");
    }
}
