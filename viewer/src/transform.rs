//! Visual transform output and zoom-anchor math.
//!
//! Two anchor formulas exist and they are intentionally kept apart:
//!
//! - [`anchor_fraction`] is used by the zoom buttons. It works from the
//!   anchor's position as a fraction of the container and the viewer
//!   element's rendered size, and only approximates a fixed anchor.
//! - [`anchor_at_cursor`] is used by ctrl/cmd + wheel. It works in container
//!   pixels and keeps the page point under the cursor exactly fixed.
//!
//! For the same inputs they generally produce different offsets.

#[cfg(test)]
#[path = "transform_test.rs"]
mod transform_test;

use serde::{Deserialize, Serialize};

use crate::viewport::{Point, Size, ViewportState};

/// Translate-then-scale transform for the page surface, with a top-left
/// transform origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VisualTransform {
    pub translate: Point,
    pub scale: f64,
}

impl VisualTransform {
    /// CSS `transform` value, e.g. `translate(10px, 20px) scale(1.5)`.
    #[must_use]
    pub fn css(&self) -> String {
        format!("translate({}px, {}px) scale({})", self.translate.x, self.translate.y, self.scale)
    }
}

/// Produce the transform for the current state. No offset recalculation.
#[must_use]
pub fn apply_transform(state: &ViewportState) -> VisualTransform {
    VisualTransform { translate: state.pan, scale: state.scale }
}

/// Button-zoom anchor adjustment.
///
/// `rel` is the anchor as a fraction of the container size and `viewer` is
/// the viewer element's current rendered size. With `old = viewer / old_scale`
/// and `new = viewer / new_scale`, the offset moves by `(new - old) * rel`.
#[must_use]
pub fn anchor_fraction(pan: Point, old_scale: f64, new_scale: f64, rel: Point, viewer: Size) -> Point {
    let old_width = viewer.width / old_scale;
    let new_width = viewer.width / new_scale;
    let old_height = viewer.height / old_scale;
    let new_height = viewer.height / new_scale;

    Point {
        x: pan.x + (new_width - old_width) * rel.x,
        y: pan.y + (new_height - old_height) * rel.y,
    }
}

/// Wheel-zoom anchor adjustment: the page point under `cursor` stays under
/// `cursor` after the scale changes.
#[must_use]
pub fn anchor_at_cursor(pan: Point, old_scale: f64, new_scale: f64, cursor: Point) -> Point {
    let before = Point {
        x: (cursor.x - pan.x) / old_scale,
        y: (cursor.y - pan.y) / old_scale,
    };
    Point {
        x: cursor.x - before.x * new_scale,
        y: cursor.y - before.y * new_scale,
    }
}
