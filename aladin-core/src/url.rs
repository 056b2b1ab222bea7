//! Image URL templating.
//!
//! Regular field images:
//! `<base>/as_<yyyymmdd>-<hhmm>_<altitude>_<region>_<ooo>.png`
//!
//! Hotspot wind images carry the sub-region in place of the default region and
//! a run stamp query so a re-published run is not served from cache:
//! `<base>/as_<yyyymmdd>-<hhmm>_vm-va10m_<hotspot>_<ooo>.png?v=<yyyymmdd><hhmm>`

use crate::catalog::{BASE_URL, DEFAULT_REGION, FILE_PREFIX, MIN_OFFSET, PROBE_ALTITUDE, WIND_LAYER};
use crate::config::ViewerConfig;
use crate::run::Run;

/// Which image family to build a URL for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer<'a> {
    /// An altitude code from the catalog
    Altitude(&'a str),
    /// 10 m wind for a hotspot region
    Wind(&'a str),
}

/// Zero-pad a lead time to the 3-digit filename form.
pub fn offset_segment(offset_hours: u32) -> String {
    format!("{:03}", offset_hours)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlBuilder {
    base_url: String,
    region: String,
}

impl Default for UrlBuilder {
    fn default() -> Self {
        UrlBuilder::new(BASE_URL, DEFAULT_REGION)
    }
}

impl UrlBuilder {
    pub fn new(base_url: &str, region: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            region: region.to_string(),
        }
    }

    pub fn from_config(config: &ViewerConfig) -> Self {
        UrlBuilder::new(&config.base_url, &config.region)
    }

    pub fn build(&self, run: &Run, layer: Layer<'_>, offset_hours: u32) -> String {
        let stem = format!(
            "{}/{}_{}-{}",
            self.base_url,
            FILE_PREFIX,
            run.date_stamp(),
            run.time_stamp()
        );
        let offset = offset_segment(offset_hours);
        match layer {
            Layer::Altitude(code) => format!("{}_{}_{}_{}.png", stem, code, self.region, offset),
            Layer::Wind(region) => format!(
                "{}_{}_{}_{}.png?v={}{}",
                stem,
                WIND_LAYER,
                region,
                offset,
                run.date_stamp(),
                run.time_stamp()
            ),
        }
    }

    /// Canonical low-offset image whose presence means the run is published.
    pub fn probe_url(&self, run: &Run) -> String {
        self.build(run, Layer::Altitude(PROBE_ALTITUDE), MIN_OFFSET)
    }
}
