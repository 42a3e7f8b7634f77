//! Stroke capture driving the bitmap, end to end through the recorder.

use crate::helpers::StrokeSession;

#[test]
fn test_tap_without_movement_leaves_surface_blank() {
    let mut session = StrokeSession::new();
    session.pen_down(140.0, 140.0);
    session.pen_up();

    assert!(session.surface.is_blank());
    assert_eq!(session.export(), StrokeSession::new().export());
}

#[test]
fn test_drag_paints_and_changes_export() {
    let blank_export = StrokeSession::new().export();

    let mut session = StrokeSession::new();
    session.pen_down(50.0, 50.0);
    session.pen_move(150.0, 150.0);
    session.pen_move(200.0, 100.0);
    session.pen_up();

    assert!(!session.surface.is_blank());
    assert_ne!(session.export(), blank_export);
}

#[test]
fn test_movement_without_pen_down_paints_nothing() {
    let mut session = StrokeSession::new();
    session.pen_move(50.0, 50.0);
    session.pen_move(200.0, 200.0);

    assert!(session.surface.is_blank());
}

#[test]
fn test_second_stroke_extends_first() {
    let mut session = StrokeSession::new();
    session.pen_down(30.0, 30.0);
    session.pen_move(100.0, 30.0);
    session.pen_up();

    let after_first = session.export();

    session.pen_down(30.0, 200.0);
    session.pen_move(100.0, 200.0);
    session.pen_up();

    // Both strokes are present
    assert_eq!(session.surface.luma_at(60, 30), 0x00);
    assert_eq!(session.surface.luma_at(60, 200), 0x00);
    assert_ne!(session.export(), after_first);
}

#[test]
fn test_pen_up_then_move_does_not_connect_strokes() {
    let mut session = StrokeSession::new();
    session.pen_down(20.0, 140.0);
    session.pen_move(60.0, 140.0);
    session.pen_up();

    // Hover across the gap, then start a new stroke
    session.pen_move(140.0, 140.0);
    session.pen_down(220.0, 140.0);
    session.pen_move(260.0, 140.0);
    session.pen_up();

    // The midpoint between the strokes stays background
    assert_eq!(session.surface.luma_at(140, 140), 0xff);
}
