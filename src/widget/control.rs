//! Control node - the common part of every widget in the tree.

use super::{next_control_id, ControlId, GumpInfo, Widget};
use crate::geometry::{Point, Rect};

/// Tooltip attached by `tooltip` / `itemproperty`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tooltip {
    Text(String),
    /// Properties of a world entity, resolved by the client when shown.
    Entity(u32),
}

/// A node in the control tree.
#[derive(Debug)]
pub struct Control {
    /// Unique control ID.
    pub id: ControlId,
    /// Parent control ID (non-owning).
    pub parent: Option<ControlId>,
    /// Child control IDs, back to front.
    pub children: Vec<ControlId>,
    /// Position relative to the parent.
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub visible: bool,
    pub enabled: bool,
    pub initialized: bool,
    pub disposed: bool,
    pub accepts_mouse_input: bool,
    pub accepts_keyboard_input: bool,
    pub can_move: bool,
    /// Whether a `checkertrans` region may make this control translucent.
    pub can_use_alpha: bool,
    pub is_transparent: bool,
    pub alpha: f32,
    /// Page this control belongs to; 0 means every page.
    pub page: u32,
    pub local_serial: Option<u32>,
    pub tooltip: Option<Tooltip>,
    /// Hit-test by rectangle instead of opaque pixels.
    pub contains_by_bounds: bool,
    pub can_close_with_right_click: bool,
    pub mouse_is_over: bool,
    /// Present only on top-level gumps.
    pub gump: Option<GumpInfo>,
    pub widget: Box<dyn Widget>,
}

impl Control {
    pub fn new(widget: Box<dyn Widget>) -> Self {
        Self {
            id: next_control_id(),
            parent: None,
            children: Vec::new(),
            x: 0,
            y: 0,
            width: 0,
            height: 0,
            visible: true,
            enabled: true,
            initialized: false,
            disposed: false,
            accepts_mouse_input: false,
            accepts_keyboard_input: false,
            can_move: false,
            can_use_alpha: true,
            is_transparent: false,
            alpha: 1.0,
            page: 0,
            local_serial: None,
            tooltip: None,
            contains_by_bounds: false,
            can_close_with_right_click: true,
            mouse_is_over: false,
            gump: None,
            widget,
        }
    }

    pub fn at(mut self, x: i32, y: i32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn sized(mut self, width: i32, height: i32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_mouse_input(mut self, accepts: bool) -> Self {
        self.accepts_mouse_input = accepts;
        self
    }

    pub fn with_keyboard_input(mut self, accepts: bool) -> Self {
        self.accepts_keyboard_input = accepts;
        self
    }

    pub fn movable(mut self, can_move: bool) -> Self {
        self.can_move = can_move;
        self
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Bounds relative to the parent.
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn set_tooltip(&mut self, tooltip: Tooltip) {
        self.tooltip = Some(tooltip);
    }

    pub fn is_gump(&self) -> bool {
        self.gump.is_some()
    }
}
