//! Fit-to-container calculation.
//!
//! The fit scale is the largest uniform scale at which the page fits inside
//! the container minus padding on every side. It is only defined once the page
//! has been rendered at least once, because the intrinsic size comes from that
//! render.

#[cfg(test)]
#[path = "fit_test.rs"]
mod fit_test;

use serde::{Deserialize, Serialize};

use crate::viewport::{Point, Size};

/// Result of a fit computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Fit {
    /// Scale at which the page fits in its binding dimension.
    pub fit_scale: f64,
    /// Offset that centers the page at `fit_scale` in the container.
    pub centered_offset: Point,
}

/// Compute the fit scale and centered offset for `content` inside `container`.
///
/// Returns `None` while the content size is unmeasured. No zoom bounds are
/// applied here; a container smaller than twice the padding yields a
/// non-positive scale, which callers treat as "no usable fit".
#[must_use]
pub fn compute_fit(container: Size, content: Size, padding: f64) -> Option<Fit> {
    if !content.is_measured() {
        return None;
    }

    let scale_x = (container.width - 2.0 * padding) / content.width;
    let scale_y = (container.height - 2.0 * padding) / content.height;
    let fit_scale = scale_x.min(scale_y);

    let centered_offset = Point {
        x: (container.width - content.width * fit_scale) / 2.0,
        y: (container.height - content.height * fit_scale) / 2.0,
    };

    Some(Fit { fit_scale, centered_offset })
}
