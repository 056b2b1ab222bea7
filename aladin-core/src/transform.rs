//! Pinch-zoom/pan over the forecast image and hotspot overlay projection.
//!
//! The image is laid out with "contain" fitting, centred in its viewport,
//! and transformed with `translate(tx, ty) scale(s)` around its centre.

use crate::catalog::Anchor;

pub const MIN_SCALE: f64 = 1.0;
pub const MAX_SCALE: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn midpoint(&self, other: &Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    pub fn distance(&self, other: &Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Viewport and natural image size, both in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Geometry {
    pub viewport: Size,
    pub natural: Size,
}

impl Geometry {
    pub fn new(viewport: Size, natural: Size) -> Self {
        Self { viewport, natural }
    }

    /// Factor from source pixels to rendered pixels at scale 1.
    pub fn fit(&self) -> f64 {
        if self.viewport.is_empty() || self.natural.is_empty() {
            return 0.0;
        }
        (self.viewport.width / self.natural.width).min(self.viewport.height / self.natural.height)
    }

    /// Rendered image size at scale 1.
    pub fn base_size(&self) -> Size {
        let fit = self.fit();
        Size::new(self.natural.width * fit, self.natural.height * fit)
    }
}

/// Accumulated zoom and pan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    pub scale: f64,
    pub tx: f64,
    pub ty: f64,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            scale: MIN_SCALE,
            tx: 0.0,
            ty: 0.0,
        }
    }
}

impl ViewTransform {
    /// Bound the scale to [1, 5] and the translation so the image cannot be
    /// dragged past its own edges. Axes where the image fits are centred.
    pub fn clamped(&self, geometry: &Geometry) -> ViewTransform {
        let scale = self.scale.clamp(MIN_SCALE, MAX_SCALE);
        let base = geometry.base_size();
        let clamp_axis = |t: f64, rendered: f64, viewport: f64| {
            if rendered > viewport {
                let limit = (rendered - viewport) / 2.0;
                t.clamp(-limit, limit)
            } else {
                0.0
            }
        };
        ViewTransform {
            scale,
            tx: clamp_axis(self.tx, base.width * scale, geometry.viewport.width),
            ty: clamp_axis(self.ty, base.height * scale, geometry.viewport.height),
        }
    }

    /// CSS `transform` value.
    pub fn css(&self) -> String {
        format!("translate({}px, {}px) scale({})", self.tx, self.ty, self.scale)
    }

    /// Map a source-image pixel to viewport coordinates.
    pub fn project(&self, geometry: &Geometry, source: Point) -> Point {
        let k = geometry.fit() * self.scale;
        Point::new(
            geometry.viewport.width / 2.0 + self.tx + (source.x - geometry.natural.width / 2.0) * k,
            geometry.viewport.height / 2.0 + self.ty + (source.y - geometry.natural.height / 2.0) * k,
        )
    }
}

/// An anchor placed in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayMarker {
    pub name: &'static str,
    pub position: Point,
}

/// Project hotspot anchors through the current transform.
pub fn project_anchors(transform: &ViewTransform, geometry: &Geometry, anchors: &[Anchor]) -> Vec<OverlayMarker> {
    if geometry.fit() == 0.0 {
        return Vec::new();
    }
    anchors
        .iter()
        .map(|a| OverlayMarker {
            name: a.name,
            position: transform.project(geometry, Point::new(a.x, a.y)),
        })
        .collect()
}

/// Index of the marker closest to `at`, if within `radius`.
pub fn hit_test(markers: &[OverlayMarker], at: Point, radius: f64) -> Option<usize> {
    markers
        .iter()
        .enumerate()
        .map(|(i, m)| (i, m.position.distance(&at)))
        .filter(|(_, d)| *d <= radius)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(i, _)| i)
}

/// Two-finger gesture state on top of a [`ViewTransform`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PinchZoom {
    transform: ViewTransform,
    last_distance: f64,
    last_midpoint: Point,
}

impl PinchZoom {
    pub fn transform(&self) -> ViewTransform {
        self.transform
    }

    pub fn begin(&mut self, a: Point, b: Point) {
        self.last_distance = a.distance(&b);
        self.last_midpoint = a.midpoint(&b);
    }

    /// Apply one frame of a two-finger move and return the clamped transform.
    pub fn update(&mut self, a: Point, b: Point, geometry: &Geometry) -> ViewTransform {
        let distance = a.distance(&b);
        let midpoint = a.midpoint(&b);

        // After a reset there is no reference distance to scale against
        if self.last_distance > 0.0 {
            let ratio = distance / self.last_distance;
            self.transform.scale = (self.transform.scale * ratio).clamp(MIN_SCALE, MAX_SCALE);
            self.transform.tx += midpoint.x - self.last_midpoint.x;
            self.transform.ty += midpoint.y - self.last_midpoint.y;
        }

        self.last_distance = distance;
        self.last_midpoint = midpoint;
        self.apply(geometry)
    }

    /// Called when a finger lifts; fewer than two contacts ends the pinch.
    pub fn end(&mut self, remaining: usize) {
        if remaining < 2 {
            self.last_distance = 0.0;
        }
    }

    /// Re-clamp against new geometry (e.g. after a resize or image load).
    pub fn apply(&mut self, geometry: &Geometry) -> ViewTransform {
        self.transform = self.transform.clamped(geometry);
        self.transform
    }

    pub fn reset(&mut self) {
        *self = PinchZoom::default();
    }
}
