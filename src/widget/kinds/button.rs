//! Push button with normal / pressed / hover art.

use crate::event::MouseButton;
use crate::geometry::Point;
use crate::render::{DrawCommand, DrawTarget};
use crate::widget::{ControlKind, DrawContext, EventContext, UiAction, Widget};

/// What a completed left click does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonAction {
    /// Switch the gump to page `param`.
    #[default]
    SwitchPage,
    /// Report `button_id` back to whoever owns the gump.
    Activate,
}

impl ButtonAction {
    pub fn from_raw(value: u32) -> Self {
        match value {
            1 => Self::Activate,
            _ => Self::SwitchPage,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonState {
    #[default]
    Normal,
    Pressed,
    Over,
}

#[derive(Debug)]
pub struct Button {
    pub button_id: i32,
    pub action: ButtonAction,
    pub param: u32,
    pub normal: u16,
    pub pressed: u16,
    pub over: Option<u16>,
    pub text: String,
    state: ButtonState,
}

impl Button {
    pub fn new(button_id: i32, normal: u16, pressed: u16, over: Option<u16>) -> Self {
        Self {
            button_id,
            action: ButtonAction::SwitchPage,
            param: 0,
            normal,
            pressed,
            over: over.filter(|&g| g > 0),
            text: String::new(),
            state: ButtonState::Normal,
        }
    }

    pub fn with_action(mut self, action: ButtonAction, param: u32) -> Self {
        self.action = action;
        self.param = param;
        self
    }

    pub fn state(&self) -> ButtonState {
        self.state
    }

    fn current_graphic(&self, mouse_over: bool) -> u16 {
        match (self.state, self.over) {
            (ButtonState::Pressed, _) => self.pressed,
            (_, Some(over)) if mouse_over || self.state == ButtonState::Over => over,
            _ => self.normal,
        }
    }
}

impl Widget for Button {
    fn kind(&self) -> ControlKind {
        ControlKind::Button
    }

    fn draw(&self, ctx: &DrawContext, target: &mut dyn DrawTarget) -> bool {
        let mut rect = ctx.rect;
        if self.state == ButtonState::Pressed {
            rect.y = rect.y.saturating_add(1);
        }
        let ok = target.submit(DrawCommand::Gump {
            graphic: self.current_graphic(ctx.mouse_over),
            rect,
            hue: 0,
            alpha: ctx.alpha,
        });
        if ok && !self.text.is_empty() {
            return target.submit(DrawCommand::Text {
                text: self.text.clone(),
                rect,
                hue: 0,
                alpha: ctx.alpha,
            });
        }
        ok
    }

    fn on_mouse_enter(&mut self, _ctx: &mut EventContext, _at: Point) {
        if self.state == ButtonState::Normal {
            self.state = ButtonState::Over;
        }
    }

    fn on_mouse_exit(&mut self, _ctx: &mut EventContext, _at: Point) {
        if self.state == ButtonState::Over {
            self.state = ButtonState::Normal;
        }
    }

    fn on_mouse_down(&mut self, _ctx: &mut EventContext, _at: Point, button: MouseButton) {
        if button == MouseButton::Left {
            self.state = ButtonState::Pressed;
        }
    }

    fn on_mouse_up(&mut self, _ctx: &mut EventContext, _at: Point, button: MouseButton) {
        if button == MouseButton::Left {
            self.state = ButtonState::Normal;
        }
    }

    fn on_mouse_click(&mut self, ctx: &mut EventContext, _at: Point, button: MouseButton) {
        if button != MouseButton::Left {
            return;
        }
        match self.action {
            ButtonAction::SwitchPage => ctx.push(UiAction::SwitchPage(self.param)),
            ButtonAction::Activate => ctx.push(UiAction::Activate(self.button_id)),
        }
    }

    fn text(&self) -> Option<&str> {
        (!self.text.is_empty()).then_some(self.text.as_str())
    }

    fn dispose(&mut self) {
        self.text.clear();
    }
}
