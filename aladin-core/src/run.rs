use crate::error::ViewerError;
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Date stamp format used in image filenames: "YYYYMMDD"
pub const DATE_STAMP_FORMAT: &str = "%Y%m%d";

/// One of the two daily model initializations (UTC).
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum RunTime {
    Midnight,
    Noon,
}

impl RunTime {
    /// Time stamp as used in filenames.
    pub fn stamp(&self) -> &'static str {
        match self {
            RunTime::Midnight => "0000",
            RunTime::Noon => "1200",
        }
    }

    pub fn hour(&self) -> u32 {
        match self {
            RunTime::Midnight => 0,
            RunTime::Noon => 12,
        }
    }

    pub fn parse(stamp: &str) -> Result<RunTime, ViewerError> {
        match stamp {
            "0000" | "00" => Ok(RunTime::Midnight),
            "1200" | "12" => Ok(RunTime::Noon),
            other => Err(ViewerError::InvalidRunTime(other.to_string())),
        }
    }
}

/// A single model initialization. Ordered chronologically.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash, Serialize, Deserialize)]
pub struct Run {
    pub date: NaiveDate,
    pub time: RunTime,
}

impl PartialOrd for RunTime {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RunTime {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.hour().cmp(&other.hour())
    }
}

impl Run {
    pub fn new(date: NaiveDate, time: RunTime) -> Self {
        Run { date, time }
    }

    /// Build a run from its filename stamps, e.g. ("20250314", "1200").
    pub fn from_stamps(date: &str, time: &str) -> Result<Run, ViewerError> {
        let date = NaiveDate::parse_from_str(date, DATE_STAMP_FORMAT)
            .map_err(|_| ViewerError::InvalidDate(date.to_string()))?;
        Ok(Run::new(date, RunTime::parse(time)?))
    }

    pub fn date_stamp(&self) -> String {
        self.date.format(DATE_STAMP_FORMAT).to_string()
    }

    pub fn time_stamp(&self) -> &'static str {
        self.time.stamp()
    }

    /// Initialization instant in UTC.
    pub fn start(&self) -> DateTime<Utc> {
        let time = NaiveTime::from_hms_opt(self.time.hour(), 0, 0).unwrap_or(NaiveTime::MIN);
        Utc.from_utc_datetime(&self.date.and_time(time))
    }

    /// Forecast valid instant for a lead time in hours.
    pub fn valid_at(&self, offset_hours: u32) -> DateTime<Utc> {
        self.start() + Duration::hours(offset_hours as i64)
    }

    /// The run initialized 12 hours earlier.
    pub fn previous(&self) -> Run {
        match self.time {
            RunTime::Noon => Run::new(self.date, RunTime::Midnight),
            RunTime::Midnight => Run::new(
                self.date.pred_opt().unwrap_or(self.date),
                RunTime::Noon,
            ),
        }
    }

    /// Runs that may be the latest published one on `today`, in probe order.
    pub fn latest_candidates(today: NaiveDate) -> [Run; 4] {
        let yesterday = today.pred_opt().unwrap_or(today);
        [
            Run::new(today, RunTime::Noon),
            Run::new(today, RunTime::Midnight),
            Run::new(yesterday, RunTime::Noon),
            Run::new(yesterday, RunTime::Midnight),
        ]
    }
}

impl fmt::Display for Run {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.date_stamp(), self.time_stamp())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_from_stamps() {
        let run = Run::from_stamps("20250314", "1200").unwrap();
        assert_eq!(run, Run::new(date(2025, 3, 14), RunTime::Noon));
        assert_eq!(run.to_string(), "20250314-1200");

        assert_eq!(
            Run::from_stamps("20250314", "0600"),
            Err(ViewerError::InvalidRunTime("0600".to_string()))
        );
        assert_eq!(
            Run::from_stamps("20251340", "0000"),
            Err(ViewerError::InvalidDate("20251340".to_string()))
        );
    }

    #[test]
    fn test_previous_alternates_times() {
        let noon = Run::new(date(2025, 3, 1), RunTime::Noon);
        let midnight = noon.previous();
        assert_eq!(midnight, Run::new(date(2025, 3, 1), RunTime::Midnight));
        // Crosses the month boundary
        assert_eq!(midnight.previous(), Run::new(date(2025, 2, 28), RunTime::Noon));
        assert!(midnight < noon);
    }

    #[test]
    fn test_valid_at() {
        let run = Run::new(date(2025, 12, 31), RunTime::Noon);
        let valid = run.valid_at(15);
        assert_eq!(valid, Utc.with_ymd_and_hms(2026, 1, 1, 3, 0, 0).unwrap());
    }

    #[test]
    fn test_latest_candidates_order() {
        let c = Run::latest_candidates(date(2025, 1, 1));
        assert_eq!(c[0].to_string(), "20250101-1200");
        assert_eq!(c[1].to_string(), "20250101-0000");
        assert_eq!(c[2].to_string(), "20241231-1200");
        assert_eq!(c[3].to_string(), "20241231-0000");
    }
}
