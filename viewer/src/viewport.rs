#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_SCALE, MIN_FIT_RATIO};
use crate::fit::Fit;
use crate::transform::{VisualTransform, apply_transform};

/// A point in screen space (CSS pixels relative to the container) or in
/// page space (intrinsic page pixels).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The origin, `(0, 0)`.
    #[must_use]
    pub fn zero() -> Self {
        Self::default()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Width and height in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether both dimensions are finite and strictly positive, i.e. the
    /// size came from a real measurement.
    #[must_use]
    pub fn is_measured(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// The size multiplied uniformly by `factor`.
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(self.width * factor, self.height * factor)
    }

    /// The point at the visual center of a box of this size.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.width * 0.5, self.height * 0.5)
    }

    /// Whether `p` lies inside a box of this size anchored at the origin.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0.0 && p.y >= 0.0 && p.x <= self.width && p.y <= self.height
    }
}

/// Pan/zoom state for one viewer instance.
///
/// `pan` is the screen-space translation applied before `scale`
/// (translate-then-scale), so a page point `p` lands on screen at
/// `p * scale + pan`. `fit_scale` is the scale at which the page fits the
/// container and is the baseline for the zoom percentage and the zoom floor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportState {
    pub scale: f64,
    pub fit_scale: f64,
    pub pan: Point,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self { scale: 1.0, fit_scale: 1.0, pan: Point::zero() }
    }
}

impl ViewportState {
    /// Convert a screen-space point to page coordinates.
    #[must_use]
    pub fn screen_to_world(&self, screen: Point) -> Point {
        Point {
            x: (screen.x - self.pan.x) / self.scale,
            y: (screen.y - self.pan.y) / self.scale,
        }
    }

    /// Convert a page-space point to screen coordinates.
    #[must_use]
    pub fn world_to_screen(&self, world: Point) -> Point {
        Point {
            x: world.x * self.scale + self.pan.x,
            y: world.y * self.scale + self.pan.y,
        }
    }

    /// Lower zoom bound: half of the current fit scale.
    #[must_use]
    pub fn min_scale(&self) -> f64 {
        self.fit_scale * MIN_FIT_RATIO
    }

    /// Clamp a candidate scale into `[fit_scale * 0.5, 5.0]`.
    ///
    /// The floor wins when it exceeds the ceiling (fit scales above 10).
    #[must_use]
    pub fn clamp_scale(&self, candidate: f64) -> f64 {
        candidate.min(MAX_SCALE).max(self.min_scale())
    }

    /// Current zoom relative to the fit scale, in percent.
    #[must_use]
    pub fn zoom_percent(&self) -> f64 {
        if self.fit_scale > 0.0 {
            self.scale / self.fit_scale * 100.0
        } else {
            100.0
        }
    }

    /// Adopt a freshly computed fit. Fitting is not advisory: it replaces
    /// both the scale and the pan offset.
    pub fn apply_fit(&mut self, fit: Fit) {
        self.fit_scale = fit.fit_scale;
        self.scale = fit.fit_scale;
        self.pan = fit.centered_offset;
    }

    /// Return to the fit scale with a zeroed pan offset (not re-centered).
    pub fn reset(&mut self) {
        self.scale = self.fit_scale;
        self.pan = Point::zero();
    }

    /// The transform the host should apply for this state.
    #[must_use]
    pub fn transform(&self) -> VisualTransform {
        apply_transform(self)
    }
}
