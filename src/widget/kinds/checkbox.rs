//! Two-state toggles: checkboxes and radio buttons.

use crate::event::MouseButton;
use crate::geometry::Point;
use crate::render::{DrawCommand, DrawTarget};
use crate::widget::{ControlKind, DrawContext, EventContext, UiAction, Widget};

fn draw_toggle(ctx: &DrawContext, target: &mut dyn DrawTarget, graphic: u16) -> bool {
    target.submit(DrawCommand::Gump {
        graphic,
        rect: ctx.rect,
        hue: 0,
        alpha: ctx.alpha,
    })
}

#[derive(Debug)]
pub struct Checkbox {
    pub inactive: u16,
    pub active: u16,
    pub is_checked: bool,
}

impl Checkbox {
    pub fn new(inactive: u16, active: u16, is_checked: bool) -> Self {
        Self { inactive, active, is_checked }
    }
}

impl Widget for Checkbox {
    fn kind(&self) -> ControlKind {
        ControlKind::Checkbox
    }

    fn draw(&self, ctx: &DrawContext, target: &mut dyn DrawTarget) -> bool {
        draw_toggle(ctx, target, if self.is_checked { self.active } else { self.inactive })
    }

    fn on_mouse_click(&mut self, _ctx: &mut EventContext, _at: Point, button: MouseButton) {
        if button == MouseButton::Left {
            self.is_checked = !self.is_checked;
        }
    }

    fn checked(&self) -> Option<bool> {
        Some(self.is_checked)
    }

    fn set_checked(&mut self, checked: bool) {
        self.is_checked = checked;
    }
}

/// A checkbox that belongs to a group; selecting one clears the others.
#[derive(Debug)]
pub struct RadioButton {
    pub group: u32,
    pub inactive: u16,
    pub active: u16,
    pub is_checked: bool,
}

impl RadioButton {
    pub fn new(group: u32, inactive: u16, active: u16, is_checked: bool) -> Self {
        Self { group, inactive, active, is_checked }
    }
}

impl Widget for RadioButton {
    fn kind(&self) -> ControlKind {
        ControlKind::RadioButton
    }

    fn draw(&self, ctx: &DrawContext, target: &mut dyn DrawTarget) -> bool {
        draw_toggle(ctx, target, if self.is_checked { self.active } else { self.inactive })
    }

    fn on_mouse_click(&mut self, ctx: &mut EventContext, _at: Point, button: MouseButton) {
        if button == MouseButton::Left && !self.is_checked {
            self.is_checked = true;
            ctx.push(UiAction::SelectRadio { group: self.group });
        }
    }

    fn checked(&self) -> Option<bool> {
        Some(self.is_checked)
    }

    fn set_checked(&mut self, checked: bool) {
        self.is_checked = checked;
    }

    fn radio_group(&self) -> Option<u32> {
        Some(self.group)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::ControlId;

    #[test]
    fn test_checkbox_toggles_on_left_click() {
        let mut cb = Checkbox::new(1, 2, false);
        let mut ctx = EventContext::new(ControlId(2), ControlId(1));
        cb.on_mouse_click(&mut ctx, Point::default(), MouseButton::Left);
        assert_eq!(cb.checked(), Some(true));
        cb.on_mouse_click(&mut ctx, Point::default(), MouseButton::Right);
        assert_eq!(cb.checked(), Some(true));
        cb.on_mouse_click(&mut ctx, Point::default(), MouseButton::Left);
        assert_eq!(cb.checked(), Some(false));
    }

    #[test]
    fn test_radio_selects_once() {
        let mut radio = RadioButton::new(3, 1, 2, false);
        let mut ctx = EventContext::new(ControlId(2), ControlId(1));
        radio.on_mouse_click(&mut ctx, Point::default(), MouseButton::Left);
        radio.on_mouse_click(&mut ctx, Point::default(), MouseButton::Left);
        assert_eq!(radio.checked(), Some(true));
        assert_eq!(ctx.into_actions(), vec![UiAction::SelectRadio { group: 3 }]);
    }
}
