//! Shared numeric constants for the viewer crate.

// ── Zoom ────────────────────────────────────────────────────────

/// Multiplicative zoom factor per wheel tick or zoom button press.
pub const ZOOM_STEP: f64 = 1.1;

/// Absolute zoom ceiling. Not relative to the fit scale.
pub const MAX_SCALE: f64 = 5.0;

/// Zoom floor expressed as a fraction of the current fit scale.
pub const MIN_FIT_RATIO: f64 = 0.5;

// ── Layout ──────────────────────────────────────────────────────

/// Padding in CSS pixels kept between the fitted page and the container edge.
pub const DEFAULT_PADDING_PX: f64 = 20.0;

/// Fractional container position used for button zoom (visual center).
pub const CENTER_ANCHOR: f64 = 0.5;
