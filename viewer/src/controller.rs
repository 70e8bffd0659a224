use crate::consts::{CENTER_ANCHOR, DEFAULT_PADDING_PX, ZOOM_STEP};
use crate::fit::compute_fit;
use crate::input::{Button, InputState, InteractionMode, Key, Modifiers, PanSession, WheelDelta};
use crate::pages::PageCursor;
use crate::shell::LoadState;
use crate::transform::{VisualTransform, anchor_at_cursor, anchor_fraction};
use crate::viewport::{Point, Size, ViewportState};

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

/// Actions returned from event handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Apply this transform to the page surface.
    TransformChanged(VisualTransform),
    /// Change the container's CSS cursor.
    SetCursor(&'static str),
    /// The current page or page count changed.
    PageChanged(PageCursor),
    /// Show the spinner, the page, or an inline error.
    LoadStateChanged(LoadState),
    /// The user asked to close the viewer; the host owns `is_open`.
    CloseRequested,
}

/// Direction of a single zoom step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ZoomDirection {
    In,
    Out,
}

impl ZoomDirection {
    fn apply(self, scale: f64) -> f64 {
        match self {
            Self::In => scale * ZOOM_STEP,
            Self::Out => scale / ZOOM_STEP,
        }
    }
}

/// Pan/zoom controller for one viewer instance.
///
/// Owns the viewport state and the gesture state, and is the only thing that
/// mutates them. Every handler returns the actions the host must apply.
#[derive(Debug, Clone)]
pub struct InteractionController {
    pub viewport: ViewportState,
    pub input: InputState,
    pub mode: InteractionMode,
    /// Container size in CSS pixels, as last reported by the host.
    pub container: Size,
    /// Intrinsic pixel size of the rendered page; zero until measured.
    pub content: Size,
    pub padding: f64,
}

impl Default for InteractionController {
    fn default() -> Self {
        Self {
            viewport: ViewportState::default(),
            input: InputState::default(),
            mode: InteractionMode::default(),
            container: Size::default(),
            content: Size::default(),
            padding: DEFAULT_PADDING_PX,
        }
    }
}

impl InteractionController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Controller with a non-default fit padding.
    #[must_use]
    pub fn with_padding(padding: f64) -> Self {
        Self { padding, ..Self::default() }
    }

    // --- Layout inputs ---

    /// Host container resized. Refits when the page has been measured.
    pub fn set_container_size(&mut self, size: Size) -> Vec<Action> {
        self.container = size;
        self.refit()
    }

    /// Page measured after its first render. Refits.
    pub fn set_content_size(&mut self, size: Size) -> Vec<Action> {
        self.content = size;
        self.refit()
    }

    /// Record a new page size without refitting (page navigation).
    pub fn update_content_size(&mut self, size: Size) {
        self.content = size;
    }

    /// Recompute the fit and force the view onto it.
    pub fn refit(&mut self) -> Vec<Action> {
        let Some(fit) = compute_fit(self.container, self.content, self.padding) else {
            tracing::debug!("refit skipped: page not measured yet");
            return Vec::new();
        };
        if fit.fit_scale <= 0.0 || !fit.fit_scale.is_finite() {
            tracing::debug!(fit_scale = fit.fit_scale, "refit skipped: container too small");
            return Vec::new();
        }
        self.viewport.apply_fit(fit);
        tracing::debug!(fit_scale = fit.fit_scale, "viewport refit");
        vec![self.transform_action()]
    }

    // --- Pointer ---

    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        if button != Button::Primary || self.input.is_panning() {
            return Vec::new();
        }
        self.input = InputState::Panning(PanSession { start_pointer: screen_pt, baseline_offset: self.viewport.pan });
        vec![Action::SetCursor(self.cursor())]
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Vec<Action> {
        let InputState::Panning(session) = self.input else {
            return Vec::new();
        };
        self.viewport.pan = session.offset_for(screen_pt);
        vec![self.transform_action()]
    }

    pub fn on_pointer_up(&mut self, _screen_pt: Point, _button: Button) -> Vec<Action> {
        self.end_pan()
    }

    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.end_pan()
    }

    fn end_pan(&mut self) -> Vec<Action> {
        if !self.input.is_panning() {
            return Vec::new();
        }
        self.input = InputState::Idle;
        vec![Action::SetCursor(self.cursor())]
    }

    // --- Zoom ---

    /// Ctrl/cmd + wheel zooms about the cursor. Any other wheel is left to
    /// the host (no actions).
    pub fn on_wheel(&mut self, screen_pt: Point, delta: WheelDelta, modifiers: Modifiers) -> Vec<Action> {
        if !modifiers.zoom_modifier() || !self.container.contains(screen_pt) {
            return Vec::new();
        }
        let direction = if delta.dy < 0.0 { ZoomDirection::In } else { ZoomDirection::Out };
        let old_scale = self.viewport.scale;
        let new_scale = self.viewport.clamp_scale(direction.apply(old_scale));
        self.viewport.pan = anchor_at_cursor(self.viewport.pan, old_scale, new_scale, screen_pt);
        self.viewport.scale = new_scale;
        vec![self.transform_action()]
    }

    /// Zoom-in button: one step about the container center.
    pub fn zoom_in(&mut self) -> Vec<Action> {
        self.zoom_about_center(ZoomDirection::In)
    }

    /// Zoom-out button: one step about the container center.
    pub fn zoom_out(&mut self) -> Vec<Action> {
        self.zoom_about_center(ZoomDirection::Out)
    }

    fn zoom_about_center(&mut self, direction: ZoomDirection) -> Vec<Action> {
        let old_scale = self.viewport.scale;
        let new_scale = self.viewport.clamp_scale(direction.apply(old_scale));
        let rel = Point::new(CENTER_ANCHOR, CENTER_ANCHOR);
        let rendered = self.content.scaled(old_scale);
        self.viewport.pan = anchor_fraction(self.viewport.pan, old_scale, new_scale, rel, rendered);
        self.viewport.scale = new_scale;
        vec![self.transform_action()]
    }

    /// Back to the fit scale with a zero offset.
    pub fn reset(&mut self) -> Vec<Action> {
        self.viewport.reset();
        vec![self.transform_action()]
    }

    // --- Keyboard ---

    /// Ctrl/cmd + `+`/`=` zooms in, `-` zooms out, `0` resets.
    pub fn on_key_down(&mut self, key: &Key, modifiers: Modifiers) -> Vec<Action> {
        if !modifiers.zoom_modifier() {
            return Vec::new();
        }
        match key.0.as_str() {
            "+" | "=" => self.zoom_in(),
            "-" => self.zoom_out(),
            "0" => self.reset(),
            _ => Vec::new(),
        }
    }

    // --- Mode ---

    pub fn set_mode(&mut self, mode: InteractionMode) -> Vec<Action> {
        self.mode = mode;
        vec![Action::SetCursor(self.cursor())]
    }

    // --- Queries ---

    /// CSS cursor for the current mode and gesture.
    #[must_use]
    pub fn cursor(&self) -> &'static str {
        if self.input.is_panning() { self.mode.active_cursor() } else { self.mode.cursor() }
    }

    #[must_use]
    pub fn transform(&self) -> VisualTransform {
        self.viewport.transform()
    }

    fn transform_action(&self) -> Action {
        Action::TransformChanged(self.transform())
    }
}
