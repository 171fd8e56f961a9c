//! The capability set every control kind implements.

use std::fmt;

use super::{ControlId, ControlKind};
use crate::event::{Key, Modifiers, MouseButton, WheelDirection};
use crate::geometry::{Point, Rect};
use crate::render::DrawTarget;

/// Side effects a widget asks the manager to perform after a callback.
///
/// Widgets only see themselves; anything touching the rest of the tree goes
/// through here and is applied once the callback has returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    /// Change the owning gump's active page.
    SwitchPage(u32),
    /// Fire the button-activated side effect for the owning gump.
    Activate(i32),
    /// Uncheck every other radio in `group` under the same gump.
    SelectRadio { group: u32 },
}

/// Passed to every input callback.
#[derive(Debug)]
pub struct EventContext {
    pub control: ControlId,
    pub root: ControlId,
    actions: Vec<UiAction>,
}

impl EventContext {
    pub fn new(control: ControlId, root: ControlId) -> Self {
        Self { control, root, actions: Vec::new() }
    }

    pub fn push(&mut self, action: UiAction) {
        self.actions.push(action);
    }

    pub fn into_actions(self) -> Vec<UiAction> {
        self.actions
    }
}

/// Resolved placement for one draw call.
#[derive(Debug, Clone, Copy)]
pub struct DrawContext {
    /// Absolute screen rectangle of the control.
    pub rect: Rect,
    /// 1.0 unless the control was marked transparent.
    pub alpha: f32,
    pub mouse_over: bool,
}

/// Behaviour of one control kind. Every callback defaults to a no-op.
///
/// `at` arguments are relative to the control's top-left corner.
pub trait Widget: fmt::Debug {
    fn kind(&self) -> ControlKind;

    fn initialize(&mut self) {}

    fn update(&mut self, _total_ms: f64, _frame_ms: f64) {}

    /// Submit draw commands. Returns `false` if a resource was not ready.
    fn draw(&self, _ctx: &DrawContext, _target: &mut dyn DrawTarget) -> bool {
        true
    }

    /// Opaque-pixel test used when the control does not hit-test by bounds.
    fn hit_pixel(&self, _at: Point) -> bool {
        true
    }

    fn on_mouse_down(&mut self, _ctx: &mut EventContext, _at: Point, _button: MouseButton) {}
    fn on_mouse_up(&mut self, _ctx: &mut EventContext, _at: Point, _button: MouseButton) {}
    fn on_mouse_click(&mut self, _ctx: &mut EventContext, _at: Point, _button: MouseButton) {}

    /// Returns `true` if the double click was consumed.
    fn on_mouse_double_click(
        &mut self,
        _ctx: &mut EventContext,
        _at: Point,
        _button: MouseButton,
    ) -> bool {
        false
    }

    fn on_mouse_enter(&mut self, _ctx: &mut EventContext, _at: Point) {}
    fn on_mouse_exit(&mut self, _ctx: &mut EventContext, _at: Point) {}
    fn on_mouse_over(&mut self, _ctx: &mut EventContext, _at: Point) {}
    fn on_mouse_wheel(&mut self, _ctx: &mut EventContext, _direction: WheelDirection) {}

    fn on_key_down(&mut self, _ctx: &mut EventContext, _key: Key, _mods: Modifiers) {}
    fn on_key_up(&mut self, _ctx: &mut EventContext, _key: Key, _mods: Modifiers) {}
    fn on_text_input(&mut self, _ctx: &mut EventContext, _text: &str) {}

    fn on_focus_enter(&mut self, _ctx: &mut EventContext) {}
    fn on_focus_left(&mut self, _ctx: &mut EventContext) {}

    fn on_drag_begin(&mut self, _ctx: &mut EventContext, _offset: Point) {}
    fn on_drag_end(&mut self, _ctx: &mut EventContext, _at: Point) {}

    /// Checked state for checkboxes and radios.
    fn checked(&self) -> Option<bool> {
        None
    }

    fn set_checked(&mut self, _checked: bool) {}

    fn radio_group(&self) -> Option<u32> {
        None
    }

    /// `(entry id, current text)` for editable text fields.
    fn text_entry(&self) -> Option<(u32, &str)> {
        None
    }

    /// Display text, for tree dumps.
    fn text(&self) -> Option<&str> {
        None
    }

    /// Release textures and cached text layout. Called once.
    fn dispose(&mut self) {}
}
