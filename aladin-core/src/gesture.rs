//! Single-finger swipe classification.
//!
//! A touch sequence that ever involves more than one contact belongs to the
//! pinch/pan handler ([`crate::transform::PinchZoom`]) and is ignored here
//! until every finger has lifted.

use crate::catalog::OFFSET_STEP;
use crate::transform::Point;

/// Navigation requested by a completed single-finger gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SwipeAction {
    /// Pass to `Navigator::change_offset`
    Offset(i32),
    /// Pass to `Navigator::change_altitude`
    Altitude(i32),
    /// Finger lifted without moving, at this client position
    Tap(Point),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeTracker {
    threshold: f64,
    start: Point,
    moved: bool,
    multi_touch: bool,
}

impl SwipeTracker {
    pub fn new(threshold_px: f64) -> Self {
        Self {
            threshold: threshold_px,
            start: Point::default(),
            moved: false,
            multi_touch: false,
        }
    }

    pub fn is_multi_touch(&self) -> bool {
        self.multi_touch
    }

    pub fn touch_start(&mut self, touches: &[Point]) {
        match touches {
            [single] => {
                self.multi_touch = false;
                self.moved = false;
                self.start = *single;
            }
            [] => {}
            _ => self.multi_touch = true,
        }
    }

    /// Returns `true` when the caller should suppress default scrolling.
    pub fn touch_move(&mut self, touch_count: usize) -> bool {
        if touch_count == 1 {
            self.moved = true;
            true
        } else {
            if touch_count > 1 {
                self.multi_touch = true;
            }
            false
        }
    }

    /// Classify the gesture once a finger lifts.
    ///
    /// `remaining` is the number of contacts still down, `end` the lifted
    /// contact's position. In hotspot mode vertical swipes are dropped.
    pub fn touch_end(&mut self, remaining: usize, end: Option<Point>, hotspot: bool) -> Option<SwipeAction> {
        if self.multi_touch {
            if remaining == 0 {
                self.multi_touch = false;
            }
            return None;
        }
        let end = end?;
        if !self.moved {
            return Some(SwipeAction::Tap(end));
        }
        self.moved = false;

        let dx = end.x - self.start.x;
        let dy = end.y - self.start.y;
        let step = OFFSET_STEP as i32;

        if dx.abs() > dy.abs() {
            if dx > self.threshold {
                Some(SwipeAction::Offset(-step))
            } else if dx < -self.threshold {
                Some(SwipeAction::Offset(step))
            } else {
                None
            }
        } else if hotspot {
            None
        } else if dy > self.threshold {
            Some(SwipeAction::Altitude(-1))
        } else if dy < -self.threshold {
            Some(SwipeAction::Altitude(1))
        } else {
            None
        }
    }

    pub fn touch_cancel(&mut self) {
        self.multi_touch = false;
        self.moved = false;
    }
}
