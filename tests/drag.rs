//! Dragging gumps: threshold, incremental movement, capture release, write-back.

mod common;

use common::*;
use gump_ui::event::MouseButton;
use gump_ui::geometry::Point;

fn position(ui: &gump_ui::UiManager, id: gump_ui::ControlId) -> Point {
    ui.tree().get(id).unwrap().position()
}

#[test]
fn test_drag_waits_for_threshold() {
    let log = new_log();
    let mut ui = manager();
    assert_eq!(ui.config().min_drag_distance, 4);
    let gump = ui.add_gump(probe_gump(&log, "gump", 0, 0, 100, 100)).unwrap();

    ui.mouse_move(Point::new(5, 5));
    ui.mouse_down(MouseButton::Left);

    ui.mouse_move(Point::new(7, 6));
    assert!(!ui.is_dragging(), "(2,1) stays under the threshold");
    assert_eq!(position(&ui, gump), Point::new(0, 0));

    ui.mouse_move(Point::new(8, 7));
    assert!(ui.is_dragging(), "(3,2) exceeds the threshold");
    assert_eq!(count(&log, "gump", &Call::DragBegin), 1);
    assert_eq!(position(&ui, gump), Point::new(3, 2));
}

#[test]
fn test_drag_applies_incremental_deltas_and_ends_on_release() {
    let log = new_log();
    let mut ui = manager();
    let gump = ui.add_gump(probe_gump(&log, "gump", 0, 0, 100, 100)).unwrap();

    ui.mouse_move(Point::new(10, 10));
    ui.mouse_down(MouseButton::Left);
    ui.mouse_move(Point::new(20, 10));
    assert_eq!(position(&ui, gump), Point::new(10, 0));

    // Something else moved the gump between frames; deltas still compound.
    ui.tree_mut().get_mut(gump).unwrap().y = 40;
    ui.mouse_dragging(Point::new(25, 15));
    assert_eq!(position(&ui, gump), Point::new(15, 45));

    ui.mouse_up(MouseButton::Left);
    assert!(!ui.is_dragging());
    assert_eq!(count(&log, "gump", &Call::DragEnd), 1);

    ui.mouse_move(Point::new(40, 40));
    assert_eq!(position(&ui, gump), Point::new(15, 45));
}

#[test]
fn test_drag_force_releases_other_captures() {
    let log = new_log();
    let mut ui = manager();
    let gump = ui.add_gump(probe_gump(&log, "gump", 0, 0, 100, 100)).unwrap();
    add_child(&mut ui, gump, probe(&log, "handle", 0, 0, 50, 50).movable(true));

    ui.mouse_move(Point::new(10, 10));
    ui.mouse_down(MouseButton::Right);
    ui.mouse_down(MouseButton::Left);
    ui.mouse_move(Point::new(30, 30));

    assert!(ui.is_dragging());
    assert_eq!(count(&log, "handle", &Call::Up(MouseButton::Left)), 1);
    assert_eq!(count(&log, "handle", &Call::Up(MouseButton::Right)), 1);
    assert_eq!(ui.input().capture(MouseButton::Left), None);
    assert_eq!(ui.input().capture(MouseButton::Right), None);

    ui.mouse_up(MouseButton::Left);
    assert_eq!(count(&log, "handle", &Call::Click(MouseButton::Left)), 0);
}

#[test]
fn test_unmovable_controls_and_nomove_gumps_do_not_drag() {
    let log = new_log();
    let mut ui = manager();
    let gump = ui.add_gump(probe_gump(&log, "gump", 0, 0, 100, 100)).unwrap();
    add_child(&mut ui, gump, probe(&log, "fixed", 0, 0, 50, 50));

    ui.mouse_move(Point::new(10, 10));
    ui.mouse_down(MouseButton::Left);
    ui.mouse_move(Point::new(40, 40));
    assert!(!ui.is_dragging());
    ui.mouse_up(MouseButton::Left);

    let mut ui = manager();
    let blocked = ui
        .create_from_layout(1, 9, 0, 0, "{nomove}{resizepic 0 0 2600 100 100}", &[])
        .unwrap();
    ui.mouse_move(Point::new(10, 10));
    ui.mouse_down(MouseButton::Left);
    ui.mouse_move(Point::new(40, 40));
    assert!(!ui.is_dragging());
    assert_eq!(position(&ui, blocked), Point::new(0, 0));
}

#[test]
fn test_forced_drag_starts_immediately() {
    let log = new_log();
    let mut ui = manager();
    let gump = ui.add_gump(probe_gump(&log, "gump", 0, 0, 100, 100)).unwrap();

    ui.mouse_move(Point::new(10, 10));
    ui.attempt_drag(gump, true);
    assert!(ui.is_dragging());
    ui.mouse_move(Point::new(11, 10));
    assert_eq!(position(&ui, gump), Point::new(1, 0));
}

#[test]
fn test_disposing_dragged_gump_aborts_gesture() {
    let log = new_log();
    let mut ui = manager();
    let gump = ui.add_gump(probe_gump(&log, "gump", 0, 0, 100, 100)).unwrap();

    ui.mouse_move(Point::new(10, 10));
    ui.mouse_down(MouseButton::Left);
    ui.mouse_move(Point::new(30, 30));
    assert!(ui.is_dragging());

    ui.dispose(gump);
    assert!(!ui.is_dragging());
    assert_eq!(ui.input().capture(MouseButton::Left), None);

    ui.mouse_up(MouseButton::Left);
    assert_eq!(count(&log, "gump", &Call::DragEnd), 0);
    ui.update(0.0, 16.0);
    assert_eq!(ui.gumps().count(), 0);
}

#[test]
fn test_drag_end_writes_server_gump_position_back() {
    let mut ui = manager();
    let layout = "{resizepic 0 0 2600 100 100}";
    let gump = ui.create_from_layout(1, 7, 50, 50, layout, &[]).unwrap();
    assert_eq!(ui.cached_position(7), Some(Point::new(50, 50)));

    ui.mouse_move(Point::new(60, 60));
    ui.mouse_down(MouseButton::Left);
    ui.mouse_move(Point::new(70, 60));
    ui.mouse_up(MouseButton::Left);

    assert_eq!(position(&ui, gump), Point::new(60, 50));
    assert_eq!(ui.cached_position(7), Some(Point::new(60, 50)));

    ui.dispose(gump);
    let reopened = ui.create_from_layout(1, 7, 0, 0, layout, &[]).unwrap();
    assert_eq!(position(&ui, reopened), Point::new(60, 50));
}
