//! Input model: interaction modes, modifier keys, mouse buttons, and the
//! drag-to-pan gesture state.
//!
//! `InteractionMode` and `Modifiers` capture the user's intent at the time of a
//! host event. `InputState` is the gesture tracked between pointer-down and
//! pointer-up; the only gesture the viewer knows is a pan.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::viewport::Point;

/// Which interaction mode is active. Only the cursor glyph depends on it;
/// measuring and commenting have no tooling behind them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionMode {
    /// Drag to pan (default).
    #[default]
    Drag,
    /// Measure distances on the page.
    Measure,
    /// Place comments on the page.
    Comment,
}

impl InteractionMode {
    /// CSS cursor for this mode while no gesture is active.
    #[must_use]
    pub fn cursor(self) -> &'static str {
        match self {
            Self::Drag => "grab",
            Self::Measure => "crosshair",
            Self::Comment => "text",
        }
    }

    /// CSS cursor while a pan is in progress.
    #[must_use]
    pub fn active_cursor(self) -> &'static str {
        match self {
            Self::Drag => "grabbing",
            other => other.cursor(),
        }
    }
}

/// Modifier keys held during an event. Only the zoom modifiers matter here.
#[derive(Debug, Clone, Copy, Default)]
pub struct Modifiers {
    /// Ctrl key is held.
    pub ctrl: bool,
    /// Meta / Command key is held.
    pub meta: bool,
}

impl Modifiers {
    /// Ctrl, or Command on platforms where that is the zoom modifier.
    #[must_use]
    pub fn zoom_modifier(self) -> bool {
        self.ctrl || self.meta
    }
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger touch).
    Primary,
    /// Middle mouse button.
    Middle,
    /// Right mouse button.
    Secondary,
}

/// A keyboard key as reported by the browser (e.g. `"+"`, `"ArrowLeft"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self(name.to_owned())
    }
}

/// Wheel / trackpad scroll delta. Horizontal scroll never zooms.
#[derive(Debug, Clone, Copy)]
pub struct WheelDelta {
    /// Vertical scroll amount in pixels (negative = scroll up = zoom in).
    pub dy: f64,
}

/// Context captured when a pan starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanSession {
    /// Screen-space pointer position at pointer-down.
    pub start_pointer: Point,
    /// Pan offset at pointer-down; moves are applied relative to it.
    pub baseline_offset: Point,
}

impl PanSession {
    /// Pan offset for the pointer now at `pointer`.
    #[must_use]
    pub fn offset_for(&self, pointer: Point) -> Point {
        self.baseline_offset + (pointer - self.start_pointer)
    }
}

/// Gesture state machine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The user is dragging the page.
    Panning(PanSession),
}

impl InputState {
    #[must_use]
    pub fn is_panning(&self) -> bool {
        matches!(self, Self::Panning(_))
    }
}
