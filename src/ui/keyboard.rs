//! Keyboard focus and key routing. Keys never hit-test; they go to the focus.

use super::UiManager;
use crate::event::{Key, Modifiers};
use crate::widget::ControlId;

impl UiManager {
    /// Current focus. Without an explicit one, the first keyboard control of
    /// the frontmost live, visible, enabled gump is adopted.
    pub fn keyboard_focus(&mut self) -> Option<ControlId> {
        if self.input.keyboard_focus.is_some_and(|id| self.tree.is_disposed(id)) {
            self.input.keyboard_focus = None;
        }
        if self.input.keyboard_focus.is_none() {
            let found = self
                .gumps()
                .filter(|&id| self.tree.get(id).is_some_and(|c| c.visible && c.enabled))
                .find_map(|id| self.tree.first_keyboard_control(id));
            self.input.keyboard_focus = found;
        }
        self.input.keyboard_focus
    }

    /// Move focus to `id`. Controls that do not take keyboard input are
    /// rejected and the previous focus stays.
    pub fn set_keyboard_focus(&mut self, id: ControlId) -> bool {
        let eligible = self
            .tree
            .get(id)
            .is_some_and(|c| c.accepts_keyboard_input && !c.disposed);
        if !eligible {
            return false;
        }
        let previous = self.input.keyboard_focus;
        if previous == Some(id) {
            return true;
        }
        if let Some(prev) = previous {
            self.invoke(prev, |w, ctx| w.on_focus_left(ctx));
        }
        self.input.keyboard_focus = Some(id);
        self.invoke(id, |w, ctx| w.on_focus_enter(ctx));
        true
    }

    pub fn key_down(&mut self, key: Key, mods: Modifiers) {
        if let Some(focus) = self.keyboard_focus() {
            self.invoke(focus, |w, ctx| w.on_key_down(ctx, key, mods));
        }
    }

    pub fn key_up(&mut self, key: Key, mods: Modifiers) {
        if let Some(focus) = self.keyboard_focus() {
            self.invoke(focus, |w, ctx| w.on_key_up(ctx, key, mods));
        }
    }

    pub fn text_input(&mut self, text: &str) {
        if let Some(focus) = self.keyboard_focus() {
            self.invoke(focus, |w, ctx| w.on_text_input(ctx, text));
        }
    }

    /// Dispose the frontmost gump that allows closing with Escape.
    pub fn close_topmost_with_escape(&mut self) -> Option<ControlId> {
        self.sort_if_needed();
        let target = self.gumps().find(|&id| {
            self.tree
                .get(id)
                .and_then(|c| c.gump.as_ref())
                .is_some_and(|g| g.can_close_with_esc)
        })?;
        self.dispose(target);
        Some(target)
    }
}
