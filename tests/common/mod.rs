//! Shared test helpers.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use gump_ui::assets::StaticAssets;
use gump_ui::config::UiConfig;
use gump_ui::event::{Key, MouseButton, WheelDirection};
use gump_ui::geometry::Point;
use gump_ui::widget::{ControlKind, EventContext, GumpInfo, GumpKind, Widget};
use gump_ui::{Control, ControlId, UiManager};

/// A callback observed by a [`Probe`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Down(MouseButton),
    Up(MouseButton),
    Click(MouseButton),
    DoubleClick(MouseButton),
    Enter,
    Exit,
    Over,
    Wheel(WheelDirection),
    KeyDown(Key),
    KeyUp(Key),
    Text(String),
    FocusEnter,
    FocusLeft,
    DragBegin,
    DragEnd,
}

pub type Log = Rc<RefCell<Vec<(&'static str, Call)>>>;

pub fn new_log() -> Log {
    Rc::new(RefCell::new(Vec::new()))
}

/// Widget that records every callback it receives under `name`.
#[derive(Debug)]
pub struct Probe {
    name: &'static str,
    log: Log,
}

impl Probe {
    pub fn new(name: &'static str, log: &Log) -> Self {
        Self { name, log: log.clone() }
    }

    fn record(&self, call: Call) {
        self.log.borrow_mut().push((self.name, call));
    }
}

impl Widget for Probe {
    fn kind(&self) -> ControlKind {
        ControlKind::Custom
    }

    fn on_mouse_down(&mut self, _ctx: &mut EventContext, _at: Point, button: MouseButton) {
        self.record(Call::Down(button));
    }

    fn on_mouse_up(&mut self, _ctx: &mut EventContext, _at: Point, button: MouseButton) {
        self.record(Call::Up(button));
    }

    fn on_mouse_click(&mut self, _ctx: &mut EventContext, _at: Point, button: MouseButton) {
        self.record(Call::Click(button));
    }

    fn on_mouse_double_click(&mut self, _ctx: &mut EventContext, _at: Point, button: MouseButton) -> bool {
        self.record(Call::DoubleClick(button));
        true
    }

    fn on_mouse_enter(&mut self, _ctx: &mut EventContext, _at: Point) {
        self.record(Call::Enter);
    }

    fn on_mouse_exit(&mut self, _ctx: &mut EventContext, _at: Point) {
        self.record(Call::Exit);
    }

    fn on_mouse_over(&mut self, _ctx: &mut EventContext, _at: Point) {
        self.record(Call::Over);
    }

    fn on_mouse_wheel(&mut self, _ctx: &mut EventContext, direction: WheelDirection) {
        self.record(Call::Wheel(direction));
    }

    fn on_key_down(&mut self, _ctx: &mut EventContext, key: Key, _mods: gump_ui::event::Modifiers) {
        self.record(Call::KeyDown(key));
    }

    fn on_key_up(&mut self, _ctx: &mut EventContext, key: Key, _mods: gump_ui::event::Modifiers) {
        self.record(Call::KeyUp(key));
    }

    fn on_text_input(&mut self, _ctx: &mut EventContext, text: &str) {
        self.record(Call::Text(text.to_string()));
    }

    fn on_focus_enter(&mut self, _ctx: &mut EventContext) {
        self.record(Call::FocusEnter);
    }

    fn on_focus_left(&mut self, _ctx: &mut EventContext) {
        self.record(Call::FocusLeft);
    }

    fn on_drag_begin(&mut self, _ctx: &mut EventContext, _offset: Point) {
        self.record(Call::DragBegin);
    }

    fn on_drag_end(&mut self, _ctx: &mut EventContext, _at: Point) {
        self.record(Call::DragEnd);
    }
}

/// Every recorded call for `name` except the per-frame Over events.
pub fn calls(log: &Log, name: &str) -> Vec<Call> {
    log.borrow()
        .iter()
        .filter(|(n, c)| *n == name && *c != Call::Over)
        .map(|(_, c)| c.clone())
        .collect()
}

pub fn count(log: &Log, name: &str, call: &Call) -> usize {
    log.borrow().iter().filter(|(n, c)| *n == name && c == call).count()
}

/// Manager with 20x20 graphics and 6x10 glyphs.
pub fn manager() -> UiManager {
    manager_with(StaticAssets::new())
}

pub fn manager_with(assets: StaticAssets) -> UiManager {
    let assets = assets.with_default_size(20, 20).with_glyph_size(6, 10);
    UiManager::new(UiConfig::default(), Box::new(assets))
}

/// A named gump whose own callbacks are recorded.
pub fn probe_gump(log: &Log, name: &'static str, x: i32, y: i32, w: i32, h: i32) -> Control {
    let mut control = Control::gump(GumpInfo::new(GumpKind::Named("probe"))).at(x, y).sized(w, h);
    control.widget = Box::new(Probe::new(name, log));
    control
}

/// A leaf accepting mouse input whose callbacks are recorded.
pub fn probe(log: &Log, name: &'static str, x: i32, y: i32, w: i32, h: i32) -> Control {
    Control::new(Box::new(Probe::new(name, log)))
        .at(x, y)
        .sized(w, h)
        .with_mouse_input(true)
}

pub fn add_child(ui: &mut UiManager, parent: ControlId, child: Control) -> ControlId {
    ui.tree_mut().add_child(parent, child).expect("parent is live")
}

pub fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Move to `(x, y)` and press then release `button` there.
pub fn click_at(ui: &mut UiManager, x: i32, y: i32, button: MouseButton) {
    ui.mouse_move(Point::new(x, y));
    ui.mouse_down(button);
    ui.mouse_up(button);
}
