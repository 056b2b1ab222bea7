//! Navigation over (run × offset × layer).
//!
//! Moving forward in time on an older run only goes as far as +12h before
//! handing over to the next newer run at +3h; moving backward from +3h hands
//! over to the next older run at +12h. Only the newest run exposes the full
//! +3h..+72h range.

use crate::catalog::{ALTITUDES, HOTSPOTS, MAX_OFFSET, MIN_OFFSET, OFFSET_STEP, RUN_HANDOVER_OFFSET};
use crate::error::ViewerError;
use crate::run::Run;
use crate::url::{Layer, UrlBuilder};
use chrono::{DateTime, Utc};
use log::debug;

/// What the viewer is showing besides time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// Altitude layer at this index into [`ALTITUDES`]
    Normal(usize),
    /// 10 m wind for the hotspot at this index into [`HOTSPOTS`]
    Hotspot(usize),
}

impl DisplayMode {
    pub fn is_hotspot(&self) -> bool {
        matches!(self, DisplayMode::Hotspot(_))
    }
}

/// Session navigation state. Runs are ordered newest first.
#[derive(Debug, Clone, PartialEq)]
pub struct Navigator {
    runs: Vec<Run>,
    run_index: usize,
    offset: u32,
    max_offset: u32,
    mode: DisplayMode,
    /// Altitude restored when leaving hotspot mode
    resume_altitude: usize,
}

impl Navigator {
    /// Start on the newest run at the first lead time and the lowest layer.
    pub fn new(runs: Vec<Run>) -> Result<Self, ViewerError> {
        if runs.is_empty() {
            return Err(ViewerError::NoForecastAvailable);
        }
        Ok(Self {
            runs,
            run_index: 0,
            offset: MIN_OFFSET,
            max_offset: MAX_OFFSET,
            mode: DisplayMode::Normal(0),
            resume_altitude: 0,
        })
    }

    /// Lower the ceiling of the newest run (multiple of 3, at least +12h).
    pub fn with_max_offset(mut self, max_offset: u32) -> Self {
        let rounded = max_offset - max_offset % OFFSET_STEP;
        self.max_offset = rounded.clamp(RUN_HANDOVER_OFFSET, MAX_OFFSET);
        self
    }

    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    pub fn run_index(&self) -> usize {
        self.run_index
    }

    pub fn run(&self) -> &Run {
        &self.runs[self.run_index]
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn valid_time(&self) -> DateTime<Utc> {
        self.run().valid_at(self.offset)
    }

    /// Move by `delta_hours` in 3 hour steps, handing over between runs.
    ///
    /// Returns `true` if the position changed. Stops silently at either end.
    pub fn change_offset(&mut self, delta_hours: i32) -> bool {
        let steps = delta_hours.unsigned_abs() / OFFSET_STEP;
        let before = (self.run_index, self.offset);
        for _ in 0..steps {
            let moved = if delta_hours > 0 {
                self.step_forward()
            } else {
                self.step_backward()
            };
            if !moved {
                break;
            }
        }
        let changed = before != (self.run_index, self.offset);
        if changed {
            debug!(
                "Offset {:+}h -> run {} (#{}) +{}h",
                delta_hours,
                self.run(),
                self.run_index,
                self.offset
            );
        }
        changed
    }

    fn step_forward(&mut self) -> bool {
        if self.run_index > 0 {
            if self.offset < RUN_HANDOVER_OFFSET {
                self.offset += OFFSET_STEP;
            } else {
                self.run_index -= 1;
                self.offset = MIN_OFFSET;
            }
            true
        } else if self.offset + OFFSET_STEP <= self.max_offset {
            self.offset += OFFSET_STEP;
            true
        } else {
            false
        }
    }

    fn step_backward(&mut self) -> bool {
        if self.offset > MIN_OFFSET {
            self.offset -= OFFSET_STEP;
            true
        } else if self.run_index + 1 < self.runs.len() {
            self.run_index += 1;
            self.offset = RUN_HANDOVER_OFFSET;
            true
        } else {
            false
        }
    }

    /// Move one altitude layer up (`+1`) or down (`-1`), clamped to the catalog.
    ///
    /// Ignored in hotspot mode.
    pub fn change_altitude(&mut self, direction: i32) -> bool {
        let DisplayMode::Normal(index) = self.mode else {
            return false;
        };
        let target = index as i64 + direction.signum() as i64;
        if direction == 0 || target < 0 || target >= ALTITUDES.len() as i64 {
            return false;
        }
        self.mode = DisplayMode::Normal(target as usize);
        debug!("Altitude -> {}", ALTITUDES[target as usize]);
        true
    }

    pub fn enter_hotspot(&mut self) -> bool {
        match self.mode {
            DisplayMode::Hotspot(_) => false,
            DisplayMode::Normal(index) => {
                self.resume_altitude = index;
                self.mode = DisplayMode::Hotspot(0);
                true
            }
        }
    }

    pub fn exit_hotspot(&mut self) -> bool {
        match self.mode {
            DisplayMode::Normal(_) => false,
            DisplayMode::Hotspot(_) => {
                self.mode = DisplayMode::Normal(self.resume_altitude);
                true
            }
        }
    }

    pub fn toggle_hotspot(&mut self) -> bool {
        if self.mode.is_hotspot() {
            self.exit_hotspot()
        } else {
            self.enter_hotspot()
        }
    }

    /// Cycle through the hotspot regions, wrapping at both ends.
    pub fn change_hotspot(&mut self, direction: i32) -> bool {
        let DisplayMode::Hotspot(index) = self.mode else {
            return false;
        };
        if direction == 0 {
            return false;
        }
        let len = HOTSPOTS.len() as i64;
        let next = (index as i64 + direction.signum() as i64).rem_euclid(len) as usize;
        self.mode = DisplayMode::Hotspot(next);
        next != index
    }

    /// Human-readable code of the current layer.
    pub fn layer_code(&self) -> &'static str {
        match self.mode {
            DisplayMode::Normal(index) => ALTITUDES[index],
            DisplayMode::Hotspot(index) => HOTSPOTS[index].region,
        }
    }

    /// Image URL for the current position.
    pub fn current_url(&self, urls: &UrlBuilder) -> String {
        let layer = match self.mode {
            DisplayMode::Normal(index) => Layer::Altitude(ALTITUDES[index]),
            DisplayMode::Hotspot(index) => Layer::Wind(HOTSPOTS[index].region),
        };
        urls.build(self.run(), layer, self.offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    /// Six consecutive runs, newest first.
    fn six_runs() -> Vec<Run> {
        let mut run = Run::from_stamps("20250314", "1200").unwrap();
        let mut runs = Vec::new();
        for _ in 0..6 {
            runs.push(run);
            run = run.previous();
        }
        runs
    }

    fn nav() -> Navigator {
        Navigator::new(six_runs()).unwrap()
    }

    fn position(nav: &Navigator) -> (usize, u32) {
        (nav.run_index(), nav.offset())
    }

    #[test]
    fn test_empty_run_list_rejected() {
        assert_eq!(Navigator::new(Vec::new()), Err(ViewerError::NoForecastAvailable));
    }

    #[test]
    fn test_backward_from_newest_start_hops_to_older_run() {
        let mut nav = nav();
        assert!(nav.change_offset(-3));
        assert_eq!(position(&nav), (1, 12));
    }

    #[test]
    fn test_forward_past_handover_hops_to_newer_run() {
        let mut nav = nav();
        nav.change_offset(-3);
        assert!(nav.change_offset(3));
        assert_eq!(position(&nav), (0, 3));
    }

    #[test]
    fn test_older_run_browses_up_to_handover() {
        let mut nav = nav();
        nav.change_offset(-3);
        nav.change_offset(-9);
        assert_eq!(position(&nav), (1, 3));
        nav.change_offset(6);
        assert_eq!(position(&nav), (1, 9));
        nav.change_offset(3);
        assert_eq!(position(&nav), (1, 12));
        nav.change_offset(3);
        assert_eq!(position(&nav), (0, 3));
    }

    #[test]
    fn test_newest_run_stops_at_ceiling() {
        let mut nav = nav();
        assert!(nav.change_offset(66));
        assert_eq!(position(&nav), (0, 69));
        assert!(nav.change_offset(30));
        assert_eq!(position(&nav), (0, 72));
        assert!(!nav.change_offset(3));
        assert_eq!(position(&nav), (0, 72));
    }

    #[test]
    fn test_oldest_run_stops_at_floor() {
        let mut nav = nav();
        // 1 step to reach run 1, then 4 steps per older run
        assert!(nav.change_offset(-3 * (1 + 4 * 4 + 3)));
        assert_eq!(position(&nav), (5, 3));
        assert!(!nav.change_offset(-3));
        assert_eq!(position(&nav), (5, 3));
    }

    #[test]
    fn test_walk_never_leaves_bounds() {
        let mut nav = nav();
        let deltas = [-300, 3, 9, -6, 300, -3, 33, -72, 15, -15, 6, 0];
        for delta in deltas {
            nav.change_offset(delta);
            assert!(nav.run_index() < nav.runs().len());
            assert!((MIN_OFFSET..=MAX_OFFSET).contains(&nav.offset()));
            assert_eq!(nav.offset() % OFFSET_STEP, 0);
            if nav.run_index() > 0 {
                assert!(nav.offset() <= RUN_HANDOVER_OFFSET);
            }
        }
    }

    #[test]
    fn test_single_run_has_no_handover() {
        let mut nav = Navigator::new(vec![six_runs()[0]]).unwrap();
        assert!(!nav.change_offset(-3));
        assert_eq!(position(&nav), (0, 3));
    }

    #[test]
    fn test_max_offset_override() {
        let mut nav = nav().with_max_offset(50);
        nav.change_offset(300);
        assert_eq!(nav.offset(), 48);
    }

    #[test]
    fn test_altitude_clamped_not_wrapped() {
        let mut nav = nav();
        assert!(!nav.change_altitude(-1));
        assert_eq!(nav.mode(), DisplayMode::Normal(0));
        for _ in 0..ALTITUDES.len() + 3 {
            nav.change_altitude(1);
        }
        assert_eq!(nav.mode(), DisplayMode::Normal(ALTITUDES.len() - 1));
        assert!(!nav.change_altitude(1));
        assert_eq!(nav.mode(), DisplayMode::Normal(ALTITUDES.len() - 1));
    }

    #[test]
    fn test_hotspot_mode_round_trip() {
        let mut nav = nav();
        nav.change_altitude(1);
        nav.change_altitude(1);
        assert!(nav.enter_hotspot());
        assert_eq!(nav.mode(), DisplayMode::Hotspot(0));
        assert!(!nav.enter_hotspot());
        // Altitude changes are ignored while showing wind
        assert!(!nav.change_altitude(1));
        assert!(nav.toggle_hotspot());
        assert_eq!(nav.mode(), DisplayMode::Normal(2));
        assert!(!nav.exit_hotspot());
    }

    #[test]
    fn test_change_hotspot_wraps() {
        let mut nav = nav();
        assert!(!nav.change_hotspot(1));
        nav.enter_hotspot();
        assert!(nav.change_hotspot(-1));
        assert_eq!(nav.mode(), DisplayMode::Hotspot(HOTSPOTS.len() - 1));
        assert!(nav.change_hotspot(1));
        assert_eq!(nav.mode(), DisplayMode::Hotspot(0));
    }

    #[test]
    fn test_current_url_follows_mode() {
        let mut nav = nav();
        nav.change_offset(6);
        let urls = UrlBuilder::default();
        assert!(nav
            .current_url(&urls)
            .ends_with("as_20250314-1200_tcc-rr_si-neighbours_009.png"));
        nav.enter_hotspot();
        nav.change_hotspot(1);
        assert!(nav
            .current_url(&urls)
            .ends_with("as_20250314-1200_vm-va10m_si-nw_009.png?v=202503141200"));
        assert_eq!(nav.layer_code(), "si-nw");
    }

    #[test]
    fn test_valid_time() {
        let mut nav = nav();
        nav.change_offset(-3);
        let expected = NaiveDate::from_ymd_opt(2025, 3, 14)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
            .and_utc();
        // Run 1 is 20250314-0000, +12h
        assert_eq!(nav.valid_time(), expected);
    }
}
