//! Viewer session state managed via Dioxus context.
//!
//! `ViewerState` bundles every reactive signal of one viewing session into a
//! single `Copy` struct provided via `use_context_provider`. Event handlers
//! receive it by reference and perform their whole transition before
//! returning to the event loop.

use crate::web_bridge;
use aladin_core::catalog::HOTSPOTS;
use aladin_core::config::ViewerConfig;
use aladin_core::error::ViewerError;
use aladin_core::gesture::{SwipeAction, SwipeTracker};
use aladin_core::i18n::Language;
use aladin_core::load::LoadTracker;
use aladin_core::navigation::{DisplayMode, Navigator};
use aladin_core::transform::{hit_test, project_anchors, Geometry, OverlayMarker, PinchZoom, Point};
use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use log::info;

/// Touch radius for selecting a hotspot site, in CSS pixels.
pub const MARKER_HIT_RADIUS: f64 = 24.0;

/// Shared state of one viewing session.
#[derive(Clone, Copy)]
pub struct ViewerState {
    pub config: Signal<ViewerConfig>,
    /// Discovered runs and the current position (None until discovery finishes)
    pub navigator: Signal<Option<Navigator>>,
    /// Valid time of the first frame shown, fixed for the session
    pub anchor: Signal<Option<DateTime<Utc>>>,
    /// Whether run discovery is still in progress
    pub discovering: Signal<bool>,
    /// Fatal error, shown as a blocking notice
    pub error: Signal<Option<ViewerError>>,
    pub language: Signal<Language>,
    pub swipe: Signal<SwipeTracker>,
    pub pinch: Signal<PinchZoom>,
    /// Last measured viewport and image size
    pub geometry: Signal<Geometry>,
    pub loads: Signal<LoadTracker>,
    /// Loading indicator, raised only after the configured delay
    pub show_spinner: Signal<bool>,
    pub help_open: Signal<bool>,
    /// Hotspot site whose label is shown
    pub selected_marker: Signal<Option<usize>>,
}

impl ViewerState {
    /// Create a new ViewerState with the stored language preference.
    pub fn new(config: ViewerConfig) -> Self {
        let threshold = config.swipe_threshold_px;
        Self {
            config: Signal::new(config),
            navigator: Signal::new(None),
            anchor: Signal::new(None),
            discovering: Signal::new(true),
            error: Signal::new(None),
            language: Signal::new(web_bridge::load_language()),
            swipe: Signal::new(SwipeTracker::new(threshold)),
            pinch: Signal::new(PinchZoom::default()),
            geometry: Signal::new(Geometry::default()),
            loads: Signal::new(LoadTracker::default()),
            show_spinner: Signal::new(false),
            help_open: Signal::new(false),
            selected_marker: Signal::new(None),
        }
    }

    /// Install the discovered navigator and capture the anchor time.
    pub fn start_session(&mut self, navigator: Navigator) {
        info!(
            "Session starts on run {} with {} run(s)",
            navigator.run(),
            navigator.runs().len()
        );
        self.anchor.set(Some(navigator.valid_time()));
        self.navigator.set(Some(navigator));
        self.discovering.set(false);
    }

    pub fn fail_session(&mut self, error: ViewerError) {
        log::error!("Viewer session failed: {}", error);
        self.error.set(Some(error));
        self.discovering.set(false);
    }

    pub fn mode(&self) -> Option<DisplayMode> {
        self.navigator.read().as_ref().map(|n| n.mode())
    }

    pub fn in_hotspot_mode(&self) -> bool {
        self.mode().is_some_and(|m| m.is_hotspot())
    }

    /// Run `f` on the navigator; the signal is only written when it reports a change.
    fn navigate(&mut self, f: impl FnOnce(&mut Navigator) -> bool) -> bool {
        let Some(mut nav) = self.navigator.peek().clone() else {
            return false;
        };
        if !f(&mut nav) {
            return false;
        }
        self.navigator.set(Some(nav));
        true
    }

    pub fn change_offset(&mut self, delta_hours: i32) -> bool {
        self.navigate(|n| n.change_offset(delta_hours))
    }

    pub fn change_altitude(&mut self, direction: i32) -> bool {
        self.navigate(|n| n.change_altitude(direction))
    }

    pub fn toggle_hotspot(&mut self) -> bool {
        let changed = self.navigate(|n| n.toggle_hotspot());
        if changed {
            self.reset_view();
        }
        changed
    }

    pub fn change_hotspot(&mut self, direction: i32) -> bool {
        let changed = self.navigate(|n| n.change_hotspot(direction));
        if changed {
            self.reset_view();
        }
        changed
    }

    fn reset_view(&mut self) {
        self.pinch.write().reset();
        self.selected_marker.set(None);
    }

    pub fn toggle_language(&mut self) {
        let next = self.language.peek().toggle();
        web_bridge::store_language(next);
        self.language.set(next);
    }

    /// Dispatch a classified single-finger gesture.
    pub fn apply_swipe(&mut self, action: SwipeAction, viewport_origin: Point) {
        match action {
            SwipeAction::Offset(delta) => {
                self.change_offset(delta);
            }
            SwipeAction::Altitude(direction) => {
                self.change_altitude(direction);
            }
            SwipeAction::Tap(at) => {
                if self.in_hotspot_mode() {
                    let local = Point::new(at.x - viewport_origin.x, at.y - viewport_origin.y);
                    self.tap_marker(local);
                }
            }
        }
    }

    /// Toggle the label of the site under `at` (viewport coordinates).
    pub fn tap_marker(&mut self, at: Point) {
        let markers = self.markers();
        let hit = hit_test(&markers, at, MARKER_HIT_RADIUS);
        let current = *self.selected_marker.peek();
        self.selected_marker.set(if hit == current { None } else { hit });
    }

    /// Hotspot sites in viewport coordinates; empty outside hotspot mode.
    pub fn markers(&self) -> Vec<OverlayMarker> {
        let Some(DisplayMode::Hotspot(index)) = self.mode() else {
            return Vec::new();
        };
        let geometry = *self.geometry.read();
        let transform = self.pinch.read().transform();
        project_anchors(&transform, &geometry, HOTSPOTS[index].anchors)
    }

    /// Store freshly measured geometry and re-clamp the transform against it.
    pub fn update_geometry(&mut self, geometry: Geometry) {
        if *self.geometry.peek() != geometry {
            self.geometry.set(geometry);
        }
        self.pinch.write().apply(&geometry);
    }
}
