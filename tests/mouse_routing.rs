//! Button, hover and wheel routing.

mod common;

use common::*;
use gump_ui::event::{MouseButton, WheelDirection};
use gump_ui::geometry::Point;

#[test]
fn test_press_and_release_on_same_control_clicks_once() {
    let log = new_log();
    let mut ui = manager();
    let gump = ui.add_gump(probe_gump(&log, "gump", 0, 0, 200, 100)).unwrap();
    add_child(&mut ui, gump, probe(&log, "a", 10, 10, 50, 50));

    click_at(&mut ui, 20, 20, MouseButton::Left);

    assert_eq!(
        calls(&log, "a"),
        vec![
            Call::Enter,
            Call::Down(MouseButton::Left),
            Call::Click(MouseButton::Left),
            Call::Up(MouseButton::Left),
        ]
    );
    assert!(calls(&log, "gump").iter().all(|c| !matches!(c, Call::Click(_))));
}

#[test]
fn test_release_on_other_control_ups_both_without_click() {
    let log = new_log();
    let mut ui = manager();
    let gump = ui.add_gump(probe_gump(&log, "gump", 0, 0, 200, 100)).unwrap();
    add_child(&mut ui, gump, probe(&log, "a", 10, 10, 50, 50));
    add_child(&mut ui, gump, probe(&log, "b", 100, 10, 50, 50));

    ui.mouse_move(Point::new(20, 20));
    ui.mouse_down(MouseButton::Left);
    ui.mouse_move(Point::new(110, 20));
    ui.mouse_up(MouseButton::Left);

    for name in ["a", "b"] {
        assert_eq!(count(&log, name, &Call::Up(MouseButton::Left)), 1, "{name} gets one up");
        assert_eq!(count(&log, name, &Call::Click(MouseButton::Left)), 0, "{name} gets no click");
    }
    assert_eq!(ui.input().capture(MouseButton::Left), None);
}

#[test]
fn test_captured_control_keeps_receiving_over() {
    let log = new_log();
    let mut ui = manager();
    let gump = ui.add_gump(probe_gump(&log, "gump", 0, 0, 200, 100)).unwrap();
    add_child(&mut ui, gump, probe(&log, "a", 10, 10, 50, 50));

    ui.mouse_move(Point::new(20, 20));
    ui.mouse_down(MouseButton::Left);
    let before = count(&log, "a", &Call::Over);
    ui.mouse_move(Point::new(150, 80));
    assert_eq!(count(&log, "a", &Call::Over), before + 1);
}

#[test]
fn test_enter_exit_propagates_to_root_only_when_root_changes() {
    let log = new_log();
    let mut ui = manager();
    let left = ui.add_gump(probe_gump(&log, "left", 0, 0, 100, 100)).unwrap();
    add_child(&mut ui, left, probe(&log, "a", 10, 10, 20, 20));
    add_child(&mut ui, left, probe(&log, "b", 50, 10, 20, 20));
    let right = ui.add_gump(probe_gump(&log, "right", 200, 0, 100, 100)).unwrap();
    add_child(&mut ui, right, probe(&log, "c", 10, 10, 20, 20));

    ui.mouse_move(Point::new(15, 15));
    assert_eq!(calls(&log, "a"), vec![Call::Enter]);
    assert_eq!(calls(&log, "left"), vec![Call::Enter]);

    ui.mouse_move(Point::new(55, 15));
    assert_eq!(calls(&log, "a"), vec![Call::Enter, Call::Exit]);
    assert_eq!(calls(&log, "b"), vec![Call::Enter]);
    assert_eq!(calls(&log, "left"), vec![Call::Enter], "same root, no transition");

    ui.mouse_move(Point::new(215, 15));
    assert_eq!(calls(&log, "b"), vec![Call::Enter, Call::Exit]);
    assert_eq!(calls(&log, "left"), vec![Call::Enter, Call::Exit]);
    assert_eq!(calls(&log, "c"), vec![Call::Enter]);
    assert_eq!(calls(&log, "right"), vec![Call::Enter]);

    ui.mouse_move(Point::new(500, 500));
    assert_eq!(calls(&log, "right"), vec![Call::Enter, Call::Exit]);
    assert!(ui.tree().get(right).is_some_and(|c| !c.mouse_is_over));
}

#[test]
fn test_press_brings_gump_to_front() {
    let log = new_log();
    let mut ui = manager();
    let back = ui.add_gump(probe_gump(&log, "back", 0, 0, 100, 100)).unwrap();
    let front = ui.add_gump(probe_gump(&log, "front", 50, 50, 100, 100)).unwrap();
    assert_eq!(ui.gumps().next(), Some(front));

    ui.mouse_move(Point::new(10, 10));
    ui.mouse_down(MouseButton::Left);
    assert_eq!(ui.gumps().next(), Some(back));

    // The overlap now belongs to the promoted gump.
    ui.mouse_up(MouseButton::Left);
    ui.mouse_move(Point::new(60, 60));
    assert_eq!(ui.mouse_over(), Some(back));
}

#[test]
fn test_double_click_requires_same_release_target() {
    let log = new_log();
    let mut ui = manager();
    let gump = ui.add_gump(probe_gump(&log, "gump", 0, 0, 200, 100)).unwrap();
    add_child(&mut ui, gump, probe(&log, "a", 10, 10, 50, 50));
    add_child(&mut ui, gump, probe(&log, "b", 100, 10, 50, 50));

    click_at(&mut ui, 20, 20, MouseButton::Left);
    assert!(ui.double_click(MouseButton::Left));
    assert_eq!(count(&log, "a", &Call::DoubleClick(MouseButton::Left)), 1);

    click_at(&mut ui, 110, 20, MouseButton::Left);
    ui.mouse_move(Point::new(20, 20));
    assert!(!ui.double_click(MouseButton::Left));
    assert_eq!(count(&log, "a", &Call::DoubleClick(MouseButton::Left)), 1);

    assert!(!ui.double_click(MouseButton::Right), "no right release recorded");
}

#[test]
fn test_wheel_goes_to_hovered_control() {
    let log = new_log();
    let mut ui = manager();
    let gump = ui.add_gump(probe_gump(&log, "gump", 0, 0, 200, 100)).unwrap();
    add_child(&mut ui, gump, probe(&log, "a", 10, 10, 50, 50));

    ui.mouse_move(Point::new(20, 20));
    ui.mouse_wheel(WheelDirection::Down);
    assert_eq!(count(&log, "a", &Call::Wheel(WheelDirection::Down)), 1);

    ui.mouse_move(Point::new(500, 500));
    ui.mouse_wheel(WheelDirection::Up);
    assert_eq!(count(&log, "a", &Call::Wheel(WheelDirection::Up)), 0);
}

#[test]
fn test_right_click_closes_gump_from_background_only() {
    let mut ui = manager();
    let layout = "{resizepic 0 0 2600 200 200}{button 10 10 100 101 1 0 5}";
    let gump = ui.create_from_layout(1, 0x100, 0, 0, layout, &[]).unwrap();

    click_at(&mut ui, 15, 15, MouseButton::Right);
    assert!(!ui.tree().is_disposed(gump), "buttons refuse right-click close");

    click_at(&mut ui, 150, 150, MouseButton::Right);
    assert!(ui.tree().is_disposed(gump));
}

#[test]
fn test_noclose_blocks_right_click_close() {
    let mut ui = manager();
    let gump = ui
        .create_from_layout(1, 0x101, 0, 0, "{noclose}{resizepic 0 0 2600 200 200}", &[])
        .unwrap();

    click_at(&mut ui, 150, 150, MouseButton::Right);
    assert!(!ui.tree().is_disposed(gump));
}

#[test]
fn test_release_outside_closes_flagged_gumps() {
    let log = new_log();
    let mut ui = manager();
    let mut popup = probe_gump(&log, "popup", 0, 0, 50, 50);
    popup.gump.as_mut().unwrap().close_if_click_outside = true;
    let popup = ui.add_gump(popup).unwrap();

    click_at(&mut ui, 10, 10, MouseButton::Left);
    assert!(!ui.tree().is_disposed(popup));

    click_at(&mut ui, 300, 300, MouseButton::Left);
    assert!(ui.tree().is_disposed(popup));
}

#[test]
fn test_right_release_over_other_gump_closes_both() {
    let mut ui = manager();
    let first = ui.create_from_layout(1, 0x110, 0, 0, "{resizepic 0 0 2600 100 100}", &[]).unwrap();
    let second = ui.create_from_layout(2, 0x111, 200, 0, "{resizepic 0 0 2600 100 100}", &[]).unwrap();

    ui.mouse_move(Point::new(50, 50));
    ui.mouse_down(MouseButton::Right);
    ui.mouse_move(Point::new(250, 50));
    ui.mouse_up(MouseButton::Right);

    assert!(ui.tree().is_disposed(second), "release target");
    assert!(ui.tree().is_disposed(first), "press target");
}
