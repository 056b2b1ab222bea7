//! Image URL construction with argument validation.

use aladin_core::catalog::{altitude_index, hotspot_index, MIN_OFFSET, OFFSET_STEP};
use aladin_core::config::ViewerConfig;
use aladin_core::error::ViewerError;
use aladin_core::run::Run;
use aladin_core::url::{Layer, UrlBuilder};

/// Build the URL of one frame, rejecting values the server never publishes.
pub fn frame_url(
    config: &ViewerConfig,
    date: &str,
    time: &str,
    offset: u32,
    altitude: &str,
    hotspot: Option<&str>,
) -> anyhow::Result<String> {
    let run = Run::from_stamps(date, time)?;
    if offset < MIN_OFFSET || offset > config.max_offset || offset % OFFSET_STEP != 0 {
        return Err(ViewerError::InvalidOffset(offset).into());
    }
    let layer = match hotspot {
        Some(region) => {
            hotspot_index(region).ok_or_else(|| ViewerError::UnknownLayer(region.to_string()))?;
            Layer::Wind(region)
        }
        None => {
            altitude_index(altitude).ok_or_else(|| ViewerError::UnknownLayer(altitude.to_string()))?;
            Layer::Altitude(altitude)
        }
    };
    Ok(UrlBuilder::from_config(config).build(&run, layer, offset))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_url() {
        let config = ViewerConfig::default().with_base_url("http://localhost/field");
        let url = frame_url(&config, "20250314", "1200", 24, "vf3000m", None).unwrap();
        assert_eq!(url, "http://localhost/field/as_20250314-1200_vf3000m_si-neighbours_024.png");

        let url = frame_url(&config, "20250314", "0000", 6, "tcc-rr", Some("si-ne")).unwrap();
        assert_eq!(url, "http://localhost/field/as_20250314-0000_vm-va10m_si-ne_006.png?v=202503140000");
    }

    #[test]
    fn test_frame_url_rejects_bad_input() {
        let config = ViewerConfig::default();
        for offset in [0, 4, 75] {
            let err = frame_url(&config, "20250314", "1200", offset, "tcc-rr", None).unwrap_err();
            assert_eq!(err.downcast_ref::<ViewerError>(), Some(&ViewerError::InvalidOffset(offset)));
        }
        let err = frame_url(&config, "20250314", "1200", 3, "vf9000m", None).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ViewerError>(),
            Some(&ViewerError::UnknownLayer("vf9000m".to_string()))
        );
        assert!(frame_url(&config, "20250314", "0600", 3, "tcc-rr", None).is_err());
        assert!(frame_url(&config, "20250314", "1200", 3, "tcc-rr", Some("hr")).is_err());
    }
}
