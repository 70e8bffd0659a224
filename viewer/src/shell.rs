//! Viewer shell: open/close lifecycle, load state, page navigation.
//!
//! DESIGN
//! ======
//! The shell composes the [`InteractionController`] with an external
//! [`RenderCapability`] that decodes and rasterizes pages. Loading is
//! fire-and-forget: the shell hands the renderer a [`LoadTicket`] and the host
//! reports completion through [`ViewerEvent`]s carrying that ticket. Closing
//! bumps the generation, so callbacks from a load started before the close
//! arrive with a stale ticket and are dropped. There is no cancellation.
//!
//! The fit is computed when the first page render reports its size and on
//! every container resize. Navigating pages re-renders but never refits, so a
//! document whose pages differ in size keeps the first page's fit until the
//! next resize.

#[cfg(test)]
#[path = "shell_test.rs"]
mod shell_test;

use serde::{Deserialize, Serialize};

use crate::controller::{Action, InteractionController};
use crate::input::{Button, InteractionMode, Key, Modifiers, WheelDelta};
use crate::pages::PageCursor;
use crate::viewport::{Point, Size, ViewportState};

// =============================================================================
// LOAD STATE
// =============================================================================

/// Document load lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "message", rename_all = "snake_case")]
pub enum LoadState {
    /// Waiting for the renderer; the page is mounted but hidden.
    Loading,
    /// First page rendered and measured.
    Ready,
    /// Load failed. Terminal until the viewer is reopened.
    Error(String),
}

/// A document failed to fetch or decode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("failed to load document: {0}")]
pub struct LoadError(pub String);

/// Identifies one load generation. Callbacks carrying an older ticket are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LoadTicket(pub u64);

// =============================================================================
// RENDER CAPABILITY
// =============================================================================

/// External page renderer.
///
/// Both calls start asynchronous work; results come back as
/// [`ViewerEvent::DocumentLoaded`], [`ViewerEvent::PageRendered`] or
/// [`ViewerEvent::LoadFailed`] tagged with the same ticket.
pub trait RenderCapability {
    /// Begin fetching and decoding the document at `file_url`.
    fn load(&mut self, file_url: &str, ticket: LoadTicket);

    /// Render the page at zero-based `page_index` and report its intrinsic size.
    fn render_page(&mut self, page_index: u32, ticket: LoadTicket);
}

// =============================================================================
// EVENTS / PROPS / VIEW
// =============================================================================

/// Widget props supplied by the page shell.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ViewerProps {
    pub is_open: bool,
    pub file_url: String,
}

/// Every host callback, funnelled through [`ViewerShell::dispatch`].
#[derive(Debug, Clone)]
pub enum ViewerEvent {
    Open { file_url: String },
    Close,
    RequestClose,
    DocumentLoaded { ticket: LoadTicket, page_count: u32 },
    PageRendered { ticket: LoadTicket, page_index: u32, size: Size },
    LoadFailed { ticket: LoadTicket, message: String },
    ContainerResized(Size),
    PointerDown { at: Point, button: Button },
    PointerMove { at: Point },
    PointerUp { at: Point, button: Button },
    PointerLeave,
    Wheel { at: Point, delta: WheelDelta, modifiers: Modifiers },
    KeyDown { key: Key, modifiers: Modifiers },
    ZoomIn,
    ZoomOut,
    Reset,
    SetMode(InteractionMode),
    PreviousPage,
    NextPage,
    GoToPage(u32),
}

/// Snapshot of everything the host's chrome renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewerView {
    pub is_open: bool,
    pub load_state: LoadState,
    pub page: PageCursor,
    pub page_label: String,
    pub zoom_percent: i64,
    pub mode: InteractionMode,
    pub cursor: &'static str,
    pub transform_css: String,
    /// False while loading: the page stays mounted so it can be measured.
    pub content_visible: bool,
}

// =============================================================================
// SHELL
// =============================================================================

/// One viewer instance.
pub struct ViewerShell<R> {
    renderer: R,
    controller: InteractionController,
    pages: PageCursor,
    load_state: LoadState,
    file_url: Option<String>,
    generation: u64,
    measured: bool,
}

impl<R: RenderCapability> ViewerShell<R> {
    /// A closed viewer backed by `renderer`.
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            controller: InteractionController::new(),
            pages: PageCursor::default(),
            load_state: LoadState::Loading,
            file_url: None,
            generation: 0,
            measured: false,
        }
    }

    // --- Lifecycle ---

    /// Reconcile with new props: opening, reopening on a new URL, or closing.
    pub fn set_props(&mut self, props: &ViewerProps) -> Vec<Action> {
        let same_url = self.file_url.as_deref() == Some(props.file_url.as_str());
        match (props.is_open, self.is_open()) {
            (true, true) if same_url => Vec::new(),
            (true, _) => self.open(&props.file_url),
            (false, true) => self.close(),
            (false, false) => Vec::new(),
        }
    }

    /// Reset everything and start loading `file_url`.
    pub fn open(&mut self, file_url: &str) -> Vec<Action> {
        self.reset_state();
        self.file_url = Some(file_url.to_owned());
        let ticket = self.ticket();
        tracing::debug!(ticket = ticket.0, file_url, "viewer opened");
        self.renderer.load(file_url, ticket);
        vec![
            Action::LoadStateChanged(LoadState::Loading),
            Action::PageChanged(self.pages),
            Action::TransformChanged(self.controller.transform()),
            Action::SetCursor(self.controller.cursor()),
        ]
    }

    /// Close and reset. A load still in flight finishes into a stale ticket.
    pub fn close(&mut self) -> Vec<Action> {
        if self.file_url.is_none() {
            return Vec::new();
        }
        tracing::debug!(ticket = self.generation, "viewer closed");
        self.reset_state();
        vec![Action::TransformChanged(self.controller.transform())]
    }

    fn reset_state(&mut self) {
        self.generation += 1;
        let padding = self.controller.padding;
        let container = self.controller.container;
        self.controller = InteractionController::with_padding(padding);
        self.controller.container = container;
        self.pages = PageCursor::default();
        self.load_state = LoadState::Loading;
        self.file_url = None;
        self.measured = false;
    }

    // --- Renderer callbacks ---

    pub fn on_document_loaded(&mut self, ticket: LoadTicket, page_count: u32) -> Vec<Action> {
        if !self.accepts(ticket) {
            return Vec::new();
        }
        self.pages.set_total(page_count);
        tracing::debug!(page_count, "document loaded");
        if self.pages.total == 0 {
            let err = LoadError("document has no pages".to_owned());
            tracing::warn!(error = %err, "nothing to render");
            self.load_state = LoadState::Error(err.0);
            return vec![Action::PageChanged(self.pages), Action::LoadStateChanged(self.load_state.clone())];
        }
        self.renderer.render_page(self.pages.index(), ticket);
        vec![Action::PageChanged(self.pages)]
    }

    pub fn on_page_rendered(&mut self, ticket: LoadTicket, page_index: u32, size: Size) -> Vec<Action> {
        if !self.accepts(ticket) {
            return Vec::new();
        }
        if page_index != self.pages.index() {
            tracing::debug!(page_index, current = self.pages.index(), "dropping render of a page no longer shown");
            return Vec::new();
        }
        if !size.is_measured() {
            tracing::warn!(page_index, "page rendered without a measurable size");
            return Vec::new();
        }
        if self.measured {
            self.controller.update_content_size(size);
            return Vec::new();
        }

        self.measured = true;
        let mut actions = Vec::new();
        if self.load_state == LoadState::Loading {
            self.load_state = LoadState::Ready;
            actions.push(Action::LoadStateChanged(LoadState::Ready));
        }
        actions.extend(self.controller.set_content_size(size));
        actions
    }

    pub fn on_load_error(&mut self, ticket: LoadTicket, message: &str) -> Vec<Action> {
        if !self.accepts(ticket) {
            return Vec::new();
        }
        let err = LoadError(message.to_owned());
        tracing::warn!(error = %err, "document load failed");
        self.load_state = LoadState::Error(err.0);
        vec![Action::LoadStateChanged(self.load_state.clone())]
    }

    fn accepts(&self, ticket: LoadTicket) -> bool {
        if self.file_url.is_none() || ticket != self.ticket() {
            tracing::debug!(ticket = ticket.0, current = self.generation, "ignoring stale renderer callback");
            return false;
        }
        !self.is_failed()
    }

    fn ticket(&self) -> LoadTicket {
        LoadTicket(self.generation)
    }

    // --- Layout ---

    /// Container resized. Safe to call repeatedly with the same size.
    pub fn on_container_resize(&mut self, size: Size) -> Vec<Action> {
        if self.file_url.is_none() {
            self.controller.container = size;
            return Vec::new();
        }
        self.controller.set_container_size(size)
    }

    // --- Navigation ---

    pub fn previous_page(&mut self) -> Vec<Action> {
        if self.is_failed() {
            return Vec::new();
        }
        let moved = self.pages.previous();
        self.after_navigation(moved)
    }

    pub fn next_page(&mut self) -> Vec<Action> {
        if self.is_failed() {
            return Vec::new();
        }
        let moved = self.pages.next();
        self.after_navigation(moved)
    }

    pub fn go_to_page(&mut self, page: u32) -> Vec<Action> {
        if self.is_failed() {
            return Vec::new();
        }
        let moved = self.pages.go_to(page);
        self.after_navigation(moved)
    }

    /// The inline error replaces the page; there is nothing to navigate.
    fn is_failed(&self) -> bool {
        matches!(self.load_state, LoadState::Error(_))
    }

    fn after_navigation(&mut self, moved: bool) -> Vec<Action> {
        if !moved {
            return Vec::new();
        }
        self.renderer.render_page(self.pages.index(), self.ticket());
        vec![Action::PageChanged(self.pages)]
    }

    // --- Dispatch ---

    /// Single transition function for every host callback.
    pub fn dispatch(&mut self, event: ViewerEvent) -> Vec<Action> {
        match event {
            ViewerEvent::Open { file_url } => return self.open(&file_url),
            ViewerEvent::Close => return self.close(),
            ViewerEvent::ContainerResized(size) => return self.on_container_resize(size),
            _ => {}
        }
        if self.file_url.is_none() {
            return Vec::new();
        }

        match event {
            ViewerEvent::RequestClose => vec![Action::CloseRequested],
            ViewerEvent::DocumentLoaded { ticket, page_count } => self.on_document_loaded(ticket, page_count),
            ViewerEvent::PageRendered { ticket, page_index, size } => self.on_page_rendered(ticket, page_index, size),
            ViewerEvent::LoadFailed { ticket, message } => self.on_load_error(ticket, &message),
            ViewerEvent::PointerDown { at, button } => self.controller.on_pointer_down(at, button),
            ViewerEvent::PointerMove { at } => self.controller.on_pointer_move(at),
            ViewerEvent::PointerUp { at, button } => self.controller.on_pointer_up(at, button),
            ViewerEvent::PointerLeave => self.controller.on_pointer_leave(),
            ViewerEvent::Wheel { at, delta, modifiers } => self.controller.on_wheel(at, delta, modifiers),
            ViewerEvent::KeyDown { key, modifiers } => self.on_key_down(&key, modifiers),
            ViewerEvent::ZoomIn => self.controller.zoom_in(),
            ViewerEvent::ZoomOut => self.controller.zoom_out(),
            ViewerEvent::Reset => self.controller.reset(),
            ViewerEvent::SetMode(mode) => self.controller.set_mode(mode),
            ViewerEvent::PreviousPage => self.previous_page(),
            ViewerEvent::NextPage => self.next_page(),
            ViewerEvent::GoToPage(page) => self.go_to_page(page),
            ViewerEvent::Open { .. } | ViewerEvent::Close | ViewerEvent::ContainerResized(_) => Vec::new(),
        }
    }

    fn on_key_down(&mut self, key: &Key, modifiers: Modifiers) -> Vec<Action> {
        match key.0.as_str() {
            "Escape" => vec![Action::CloseRequested],
            "ArrowLeft" | "PageUp" => self.previous_page(),
            "ArrowRight" | "PageDown" => self.next_page(),
            _ => self.controller.on_key_down(key, modifiers),
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.file_url.is_some()
    }

    #[must_use]
    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    #[must_use]
    pub fn pages(&self) -> PageCursor {
        self.pages
    }

    #[must_use]
    pub fn viewport(&self) -> ViewportState {
        self.controller.viewport
    }

    #[must_use]
    pub fn controller(&self) -> &InteractionController {
        &self.controller
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Chrome snapshot for the host.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn view(&self) -> ViewerView {
        let viewport = self.controller.viewport;
        ViewerView {
            is_open: self.is_open(),
            load_state: self.load_state.clone(),
            page: self.pages,
            page_label: self.pages.label(),
            zoom_percent: viewport.zoom_percent().round() as i64,
            mode: self.controller.mode,
            cursor: self.controller.cursor(),
            transform_css: viewport.transform().css(),
            content_visible: self.load_state == LoadState::Ready,
        }
    }

    /// The view serialized as JSON for a JS host.
    ///
    /// # Errors
    ///
    /// Returns the serializer error if the view cannot be encoded.
    pub fn view_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.view())
    }
}
