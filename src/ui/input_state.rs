//! Per-process input session: captures, hover, focus and drag.

use crate::event::MouseButton;
use crate::geometry::Point;
use crate::widget::ControlId;

/// Drag bookkeeping. A candidate exists from the first frame a movable
/// control is held; `active` flips once the pointer has travelled far enough.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragState {
    pub candidate: Option<ControlId>,
    pub active: bool,
    /// Pointer position the next incremental delta is measured from.
    pub origin: Point,
}

/// Everything the input router remembers between events.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub mouse_position: Point,
    /// Control under the pointer as of the last resolution.
    pub mouse_over: Option<ControlId>,
    /// Control that received each button's press.
    pub captures: [Option<ControlId>; MouseButton::COUNT],
    /// Pointer position at each button's press.
    pub press_origin: [Point; MouseButton::COUNT],
    /// Release target of each button's previous release, for double clicks.
    pub last_up: [Option<ControlId>; MouseButton::COUNT],
    pub keyboard_focus: Option<ControlId>,
    pub drag: DragState,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget every gesture. The pointer position survives.
    pub fn reset(&mut self) {
        *self = Self {
            mouse_position: self.mouse_position,
            ..Self::default()
        };
    }

    pub fn capture(&self, button: MouseButton) -> Option<ControlId> {
        self.captures[button.index()]
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.active && self.drag.candidate.is_some()
    }

    /// Displacement since `button` went down.
    pub fn offset_since_press(&self, button: MouseButton) -> Point {
        self.mouse_position - self.press_origin[button.index()]
    }

    /// Drop every reference for which `is_gone` holds.
    pub fn forget(&mut self, is_gone: impl Fn(ControlId) -> bool) {
        let gone = |slot: &mut Option<ControlId>| {
            if slot.is_some_and(&is_gone) {
                *slot = None;
            }
        };
        gone(&mut self.mouse_over);
        gone(&mut self.keyboard_focus);
        self.captures.iter_mut().for_each(gone);
        self.last_up.iter_mut().for_each(gone);
        if self.drag.candidate.is_some_and(&is_gone) {
            self.drag = DragState::default();
        }
    }
}
