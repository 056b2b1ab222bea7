//! Reusable Dioxus RSX components for the ALADIN viewer.

mod error_display;
mod forecast_header;
mod help_overlay;
mod hotspot_overlay;
mod loading_spinner;
mod nav_arrows;
mod toolbar;

pub use error_display::ErrorDisplay;
pub use forecast_header::ForecastHeader;
pub use help_overlay::HelpOverlay;
pub use hotspot_overlay::HotspotOverlay;
pub use loading_spinner::LoadingSpinner;
pub use nav_arrows::NavArrows;
pub use toolbar::Toolbar;
