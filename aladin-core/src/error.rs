use std::fmt;

/// Errors surfaced by the viewer core.
#[derive(Debug, PartialEq, Clone)]
pub enum ViewerError {
    /// None of the candidate runs could be found on the image server.
    NoForecastAvailable,
    /// A run time stamp other than "0000" or "1200".
    InvalidRunTime(String),
    /// A date stamp that is not a valid "YYYYMMDD" calendar date.
    InvalidDate(String),
    /// An offset outside [3, 72] or not a multiple of 3.
    InvalidOffset(u32),
    /// An altitude code or hotspot region that is not in the catalog.
    UnknownLayer(String),
}

impl fmt::Display for ViewerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewerError::NoForecastAvailable => write!(f, "No forecast available"),
            ViewerError::InvalidRunTime(s) => write!(f, "Invalid run time: {}", s),
            ViewerError::InvalidDate(s) => write!(f, "Invalid run date: {}", s),
            ViewerError::InvalidOffset(o) => write!(f, "Invalid offset: {}h", o),
            ViewerError::UnknownLayer(s) => write!(f, "Unknown layer: {}", s),
        }
    }
}

impl std::error::Error for ViewerError {}
