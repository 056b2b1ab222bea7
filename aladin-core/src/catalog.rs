//! Fixed layer catalogs and grid constants for the ALADIN image server.

/// Image server directory holding all rendered fields.
pub const BASE_URL: &str = "https://meteo.arso.gov.si/uploads/probase/www/model/aladin/field";

/// Filename prefix shared by every field image.
pub const FILE_PREFIX: &str = "as";

/// Region suffix of the regular (non-hotspot) images.
pub const DEFAULT_REGION: &str = "si-neighbours";

/// Layer code of the 10 m wind images shown in hotspot mode.
pub const WIND_LAYER: &str = "vm-va10m";

pub const MIN_OFFSET: u32 = 3;
pub const MAX_OFFSET: u32 = 72;
pub const OFFSET_STEP: u32 = 3;

/// Offset at which an older run hands over to the next newer one.
pub const RUN_HANDOVER_OFFSET: u32 = 12;

/// Number of runs kept after discovery.
pub const MAX_RUNS: usize = 6;

/// Altitude layers, ordered bottom-up. Swiping up moves to a higher index.
pub const ALTITUDES: [&str; 9] = [
    "tcc-rr", "vf500m", "vf1000m", "vf1500m", "vf2000m", "vf2500m", "vf3000m", "vf4000m", "vf5500m",
];

/// Altitude layer used when probing whether a run is published.
pub const PROBE_ALTITUDE: &str = "tcc-rr";

/// A named site marked on a hotspot image, in source-image pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub name: &'static str,
    pub x: f64,
    pub y: f64,
}

/// A sub-region with its own 10 m wind image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hotspot {
    /// Region suffix in the wind image filename
    pub region: &'static str,
    /// Short label shown in the header
    pub label: &'static str,
    pub anchors: &'static [Anchor],
}

pub const HOTSPOTS: [Hotspot; 3] = [
    Hotspot {
        region: "si-sw",
        label: "Primorska",
        anchors: &[
            Anchor { name: "Nova Gorica", x: 212.0, y: 268.0 },
            Anchor { name: "Ajdovščina", x: 281.0, y: 291.0 },
            Anchor { name: "Koper", x: 246.0, y: 462.0 },
        ],
    },
    Hotspot {
        region: "si-nw",
        label: "Gorenjska",
        anchors: &[
            Anchor { name: "Bovec", x: 168.0, y: 176.0 },
            Anchor { name: "Lesce", x: 402.0, y: 214.0 },
            Anchor { name: "Kranj", x: 451.0, y: 287.0 },
        ],
    },
    Hotspot {
        region: "si-ne",
        label: "Štajerska",
        anchors: &[
            Anchor { name: "Maribor", x: 438.0, y: 231.0 },
            Anchor { name: "Celje", x: 352.0, y: 352.0 },
            Anchor { name: "Murska Sobota", x: 611.0, y: 184.0 },
        ],
    },
];

/// Position of an altitude code in [`ALTITUDES`].
pub fn altitude_index(code: &str) -> Option<usize> {
    ALTITUDES.iter().position(|a| *a == code)
}

/// Position of a hotspot region in [`HOTSPOTS`].
pub fn hotspot_index(region: &str) -> Option<usize> {
    HOTSPOTS.iter().position(|h| h.region == region)
}

/// Height in metres encoded in a `vfNNNm` code, `None` for the cloud composite.
pub fn altitude_height_m(code: &str) -> Option<u32> {
    code.strip_prefix("vf")?.strip_suffix('m')?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_altitudes_ordered_bottom_up() {
        let heights: Vec<u32> = ALTITUDES.iter().filter_map(|a| altitude_height_m(a)).collect();
        assert_eq!(heights.len(), ALTITUDES.len() - 1);
        assert!(heights.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(altitude_height_m("tcc-rr"), None);
    }

    #[test]
    fn test_lookup_indices() {
        assert_eq!(altitude_index("tcc-rr"), Some(0));
        assert_eq!(altitude_index("vf5500m"), Some(8));
        assert_eq!(altitude_index("vf9000m"), None);
        assert_eq!(hotspot_index("si-nw"), Some(1));
        assert_eq!(hotspot_index("hr"), None);
    }
}
