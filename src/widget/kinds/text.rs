//! Text-bearing controls.

use crate::event::{Key, Modifiers};
use crate::render::{DrawCommand, DrawTarget};
use crate::widget::{ControlKind, DrawContext, EventContext, Widget};

fn draw_text(ctx: &DrawContext, target: &mut dyn DrawTarget, text: &str, hue: u16) -> bool {
    if text.is_empty() {
        return true;
    }
    target.submit(DrawCommand::Text {
        text: text.to_string(),
        rect: ctx.rect,
        hue,
        alpha: ctx.alpha,
    })
}

/// Plain text line; `cropped` labels are clipped to their bounds.
#[derive(Debug)]
pub struct Label {
    pub text: String,
    pub hue: u16,
    pub cropped: bool,
}

impl Label {
    pub fn new(text: impl Into<String>, hue: u16) -> Self {
        Self { text: text.into(), hue, cropped: false }
    }

    pub fn cropped(text: impl Into<String>, hue: u16) -> Self {
        Self { text: text.into(), hue, cropped: true }
    }
}

impl Widget for Label {
    fn kind(&self) -> ControlKind {
        if self.cropped { ControlKind::CroppedText } else { ControlKind::Label }
    }

    fn draw(&self, ctx: &DrawContext, target: &mut dyn DrawTarget) -> bool {
        draw_text(ctx, target, &self.text, self.hue)
    }

    fn text(&self) -> Option<&str> {
        Some(&self.text)
    }
}

/// Marked-up text block, optionally on a background with a scrollbar.
#[derive(Debug)]
pub struct HtmlControl {
    pub text: String,
    pub has_background: bool,
    pub has_scrollbar: bool,
    /// 0x00RRGGBB; 0 means the default text colour.
    pub color: u32,
}

/// Background graphic drawn behind html blocks that request one.
const HTML_BACKGROUND: u16 = 0x0BB8;

impl HtmlControl {
    pub fn new(text: impl Into<String>, has_background: bool, has_scrollbar: bool, color: u32) -> Self {
        Self {
            text: text.into(),
            has_background,
            has_scrollbar,
            color,
        }
    }
}

impl Widget for HtmlControl {
    fn kind(&self) -> ControlKind {
        ControlKind::Html
    }

    fn draw(&self, ctx: &DrawContext, target: &mut dyn DrawTarget) -> bool {
        if self.has_background
            && !target.submit(DrawCommand::Resize {
                graphic: HTML_BACKGROUND,
                rect: ctx.rect,
                alpha: ctx.alpha,
            })
        {
            return false;
        }
        draw_text(ctx, target, &self.text, 0)
    }

    fn text(&self) -> Option<&str> {
        Some(&self.text)
    }
}

/// Editable text field reported back in gump responses.
#[derive(Debug)]
pub struct TextEntry {
    pub entry_id: u32,
    pub hue: u16,
    /// Maximum characters; 0 is unlimited.
    pub limit: usize,
    text: String,
    focused: bool,
}

impl TextEntry {
    pub fn new(entry_id: u32, hue: u16, text: impl Into<String>, limit: usize) -> Self {
        let mut entry = Self {
            entry_id,
            hue,
            limit,
            text: String::new(),
            focused: false,
        };
        entry.insert(&text.into());
        entry
    }

    pub fn value(&self) -> &str {
        &self.text
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    fn insert(&mut self, input: &str) {
        for ch in input.chars().filter(|c| !c.is_control()) {
            if self.limit > 0 && self.text.chars().count() >= self.limit {
                break;
            }
            self.text.push(ch);
        }
    }
}

impl Widget for TextEntry {
    fn kind(&self) -> ControlKind {
        ControlKind::TextEntry
    }

    fn draw(&self, ctx: &DrawContext, target: &mut dyn DrawTarget) -> bool {
        draw_text(ctx, target, &self.text, self.hue)
    }

    fn on_key_down(&mut self, _ctx: &mut EventContext, key: Key, _mods: Modifiers) {
        if key == Key::Backspace {
            self.text.pop();
        }
    }

    fn on_text_input(&mut self, _ctx: &mut EventContext, text: &str) {
        self.insert(text);
    }

    fn on_focus_enter(&mut self, _ctx: &mut EventContext) {
        self.focused = true;
    }

    fn on_focus_left(&mut self, _ctx: &mut EventContext) {
        self.focused = false;
    }

    fn text_entry(&self) -> Option<(u32, &str)> {
        Some((self.entry_id, &self.text))
    }

    fn text(&self) -> Option<&str> {
        Some(&self.text)
    }
}
