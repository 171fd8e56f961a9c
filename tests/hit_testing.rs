//! Hit-testing through the manager: paths, modal restriction, pages, disposal.

mod common;

use common::*;
use gump_ui::geometry::Point;
use gump_ui::render::{DrawCommand, RecordingTarget};

#[test]
fn test_hit_path_lists_leaf_and_ancestors() {
    let log = new_log();
    let mut ui = manager();
    let gump = ui.add_gump(probe_gump(&log, "gump", 100, 100, 200, 200)).unwrap();
    let panel = add_child(&mut ui, gump, probe(&log, "panel", 10, 10, 100, 100));
    let leaf = add_child(&mut ui, panel, probe(&log, "leaf", 20, 20, 10, 10));
    add_child(&mut ui, gump, probe(&log, "far", 150, 150, 20, 20));

    let path = ui.tree().hit_test(gump, Point::new(135, 135)).unwrap();
    assert_eq!(path, vec![leaf, panel, gump]);

    ui.mouse_move(Point::new(135, 135));
    assert_eq!(ui.mouse_over(), Some(leaf));
}

#[test]
fn test_target_skips_controls_without_mouse_input() {
    let log = new_log();
    let mut ui = manager();
    let gump = ui.add_gump(probe_gump(&log, "gump", 0, 0, 100, 100)).unwrap();
    let mut label = probe(&log, "label", 10, 10, 30, 30);
    label.accepts_mouse_input = false;
    add_child(&mut ui, gump, label);

    ui.mouse_move(Point::new(15, 15));
    assert_eq!(ui.mouse_over(), Some(gump));
}

#[test]
fn test_modal_gump_restricts_targets() {
    let log = new_log();
    let mut ui = manager();
    let plain = ui.add_gump(probe_gump(&log, "plain", 0, 0, 100, 100)).unwrap();
    let mut modal = probe_gump(&log, "modal", 300, 300, 50, 50);
    modal.gump.as_mut().unwrap().modal = true;
    let modal = ui.add_gump(modal).unwrap();

    ui.mouse_move(Point::new(10, 10));
    assert_eq!(ui.mouse_over(), None, "non-modal gump must not be hit while a modal is open");

    ui.mouse_move(Point::new(310, 310));
    assert_eq!(ui.mouse_over(), Some(modal));

    ui.dispose(modal);
    ui.mouse_move(Point::new(10, 10));
    assert_eq!(ui.mouse_over(), Some(plain));
}

#[test]
fn test_press_outside_closes_flagged_modals() {
    let log = new_log();
    let mut ui = manager();
    ui.add_gump(probe_gump(&log, "plain", 0, 0, 100, 100)).unwrap();
    let mut modal = probe_gump(&log, "modal", 300, 300, 50, 50);
    {
        let info = modal.gump.as_mut().unwrap();
        info.modal = true;
        info.close_modal_on_outside_click = true;
    }
    let modal = ui.add_gump(modal).unwrap();

    ui.mouse_move(Point::new(10, 10));
    ui.mouse_down(gump_ui::event::MouseButton::Left);
    assert!(ui.tree().is_disposed(modal));
    assert!(!ui.is_modal_open());
}

#[test]
fn test_page_zero_always_visible_and_paged_only_when_active() {
    let log = new_log();
    let mut ui = manager();
    let gump = ui.add_gump(probe_gump(&log, "gump", 0, 0, 200, 200)).unwrap();
    let always = add_child(&mut ui, gump, probe(&log, "always", 0, 0, 20, 20));
    let mut paged = probe(&log, "paged", 50, 0, 20, 20);
    paged.page = 3;
    let paged = add_child(&mut ui, gump, paged);

    ui.mouse_move(Point::new(55, 5));
    assert_eq!(ui.mouse_over(), Some(gump));
    ui.mouse_move(Point::new(5, 5));
    assert_eq!(ui.mouse_over(), Some(always));

    ui.switch_page(gump, 3);
    ui.mouse_move(Point::new(55, 5));
    assert_eq!(ui.mouse_over(), Some(paged));
    ui.mouse_move(Point::new(5, 5));
    assert_eq!(ui.mouse_over(), Some(always));
}

#[test]
fn test_disposed_control_leaves_hit_testing_then_arena() {
    let log = new_log();
    let mut ui = manager();
    let gump = ui.add_gump(probe_gump(&log, "gump", 0, 0, 100, 100)).unwrap();
    let leaf = add_child(&mut ui, gump, probe(&log, "leaf", 0, 0, 50, 50));

    ui.mouse_move(Point::new(5, 5));
    assert_eq!(ui.mouse_over(), Some(leaf));

    ui.dispose(leaf);
    assert!(ui.tree().contains(leaf));
    ui.mouse_move(Point::new(6, 6));
    assert_eq!(ui.mouse_over(), Some(gump));

    ui.update(0.0, 16.0);
    assert!(!ui.tree().contains(leaf));
}

#[test]
fn test_disposed_gump_swept_from_live_list_on_update() {
    let log = new_log();
    let mut ui = manager();
    let gump = ui.add_gump(probe_gump(&log, "gump", 0, 0, 100, 100)).unwrap();
    ui.update(0.0, 16.0);

    ui.dispose(gump);
    assert_eq!(ui.gumps().count(), 0);
    assert!(ui.tree().contains(gump), "sweep happens in the update pass");

    ui.update(16.0, 16.0);
    assert!(!ui.tree().contains(gump));
}

#[test]
fn test_draw_skips_inactive_pages_and_uninitialized_gumps() {
    let mut ui = manager();
    let gump = ui
        .create_from_layout(1, 2, 0, 0, "{gumppic 0 0 10}{page 1}{gumppic 0 0 11}{page 2}{gumppic 0 0 12}", &[])
        .unwrap();

    let mut target = RecordingTarget::new();
    assert!(ui.draw(&mut target));
    assert!(target.commands.is_empty(), "not initialized before the first update");

    ui.update(0.0, 16.0);
    ui.draw(&mut target);
    let graphics: Vec<u16> = target.commands.iter().filter_map(DrawCommand::graphic).collect();
    assert_eq!(graphics, vec![10, 11]);

    target.clear();
    ui.switch_page(gump, 2);
    ui.draw(&mut target);
    let graphics: Vec<u16> = target.commands.iter().filter_map(DrawCommand::graphic).collect();
    assert_eq!(graphics, vec![10, 12]);
}

#[test]
fn test_draw_reports_unready_resources() {
    let mut ui = manager();
    ui.create_from_layout(1, 2, 0, 0, "{gumppic 0 0 10}{gumppic 0 0 11}", &[]).unwrap();
    ui.update(0.0, 16.0);

    let mut target = RecordingTarget::new();
    target.refuse(10);
    assert!(!ui.draw(&mut target));
    assert!(target.commands.is_empty());
}
