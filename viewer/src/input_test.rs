use super::*;

// =============================================================
// InteractionMode
// =============================================================

#[test]
fn mode_default_is_drag() {
    assert_eq!(InteractionMode::default(), InteractionMode::Drag);
}

#[test]
fn mode_cursor_glyphs() {
    assert_eq!(InteractionMode::Drag.cursor(), "grab");
    assert_eq!(InteractionMode::Measure.cursor(), "crosshair");
    assert_eq!(InteractionMode::Comment.cursor(), "text");
}

#[test]
fn mode_active_cursor_only_changes_for_drag() {
    assert_eq!(InteractionMode::Drag.active_cursor(), "grabbing");
    assert_eq!(InteractionMode::Measure.active_cursor(), "crosshair");
    assert_eq!(InteractionMode::Comment.active_cursor(), "text");
}

#[test]
fn mode_serializes_snake_case() {
    assert_eq!(serde_json::to_string(&InteractionMode::Measure).unwrap(), "\"measure\"");
    let parsed: InteractionMode = serde_json::from_str("\"comment\"").unwrap();
    assert_eq!(parsed, InteractionMode::Comment);
}

// =============================================================
// Modifiers
// =============================================================

#[test]
fn modifiers_default_all_false() {
    let m = Modifiers::default();
    assert!(!m.ctrl);
    assert!(!m.meta);
    assert!(!m.zoom_modifier());
}

#[test]
fn zoom_modifier_accepts_ctrl_or_meta() {
    assert!(Modifiers { ctrl: true, ..Modifiers::default() }.zoom_modifier());
    assert!(Modifiers { meta: true, ..Modifiers::default() }.zoom_modifier());
    assert!(!Modifiers::default().zoom_modifier());
}

// =============================================================
// PanSession / InputState
// =============================================================

#[test]
fn input_state_default_is_idle() {
    assert_eq!(InputState::default(), InputState::Idle);
    assert!(!InputState::default().is_panning());
}

#[test]
fn pan_session_offset_is_baseline_plus_delta() {
    let session = PanSession { start_pointer: Point::new(100.0, 100.0), baseline_offset: Point::new(10.0, -5.0) };
    assert_eq!(session.offset_for(Point::new(130.0, 90.0)), Point::new(40.0, -15.0));
    assert_eq!(session.offset_for(Point::new(100.0, 100.0)), Point::new(10.0, -5.0));
}

#[test]
fn key_new_wraps_name() {
    assert_eq!(Key::new("Escape"), Key("Escape".to_owned()));
}
