//! Viewport engine for the paginated document viewer.
//!
//! This crate owns everything the viewer widget does between receiving a raw
//! host event and telling the host what to draw: the pan/zoom state, the
//! fit-to-container math, the drag-to-pan gesture machine, page navigation and
//! the load lifecycle. Decoding and rasterizing pages is not done here; the
//! host plugs in a [`shell::RenderCapability`] and reports back sizes and
//! page counts through [`shell::ViewerEvent`]s.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`shell`] | Open/close lifecycle, load state, page cursor, event dispatch |
//! | [`controller`] | Pointer/wheel/keyboard handling over the viewport state |
//! | [`viewport`] | Points, sizes and the owned [`viewport::ViewportState`] |
//! | [`fit`] | Fit-to-container scale and centered offset |
//! | [`transform`] | Visual transform output and the two zoom-anchor formulas |
//! | [`input`] | Input event types, interaction modes and the gesture state |
//! | [`pages`] | Clamped page cursor |
//! | [`consts`] | Zoom limits, zoom step and padding |

pub mod consts;
pub mod controller;
pub mod fit;
pub mod input;
pub mod pages;
pub mod shell;
pub mod transform;
pub mod viewport;
