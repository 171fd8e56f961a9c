//! Pointer routing: target resolution, hover transitions and button events.

use super::UiManager;
use crate::event::{MouseButton, WheelDirection};
use crate::geometry::Point;
use crate::widget::ControlId;

impl UiManager {
    /// Pointer moved to `pos`.
    pub fn mouse_move(&mut self, pos: Point) {
        self.input.mouse_position = pos;
        self.handle_mouse_input();
        if self.input.is_dragging() {
            self.do_drag();
        }
    }

    /// Pointer moved with a button held.
    pub fn mouse_dragging(&mut self, pos: Point) {
        self.mouse_move(pos);
    }

    /// Control that would receive input at the current pointer position.
    ///
    /// While a drag is active this is the dragged gump. While a modal gump is
    /// open only modal gumps are considered.
    pub fn resolve_target(&self) -> Option<ControlId> {
        if self.input.is_dragging() {
            return self.input.drag.candidate;
        }
        let modal_only = self.is_modal_open();
        let pos = self.input.mouse_position;
        for id in self.gumps() {
            let Some(c) = self.tree.get(id) else { continue };
            let modal = c.gump.as_ref().is_some_and(|g| g.modal);
            if !c.visible || !c.enabled || (modal_only && !modal) {
                continue;
            }
            let Some(path) = self.tree.hit_test(id, pos) else { continue };
            let hit = path.into_iter().find(|&cid| {
                self.tree
                    .get(cid)
                    .is_some_and(|c| c.accepts_mouse_input && c.enabled)
            });
            if hit.is_some() {
                return hit;
            }
        }
        None
    }

    /// Top-level gump above `id`, or `None` if `id` is itself top-level.
    fn root_parent(&self, id: ControlId) -> Option<ControlId> {
        let parent = self.tree.get(id)?.parent?;
        Some(self.tree.root_of(parent))
    }

    fn set_mouse_is_over(&mut self, id: ControlId, over: bool) {
        if let Some(c) = self.tree.get_mut(id) {
            c.mouse_is_over = over;
        }
    }

    fn fire_exit(&mut self, id: ControlId) {
        self.set_mouse_is_over(id, false);
        let at = self.local_point(id);
        self.invoke(id, |w, ctx| w.on_mouse_exit(ctx, at));
    }

    fn fire_enter(&mut self, id: ControlId) {
        self.set_mouse_is_over(id, true);
        let at = self.local_point(id);
        self.invoke(id, |w, ctx| w.on_mouse_enter(ctx, at));
    }

    /// Re-resolve the target and emit Enter/Exit when it changed.
    fn refresh_target(&mut self) -> Option<ControlId> {
        let target = self.resolve_target();
        let previous = self.input.mouse_over;
        if previous != target {
            let prev_root = previous.and_then(|p| self.root_parent(p));
            let next_root = target.and_then(|t| self.root_parent(t));
            if let Some(prev) = previous {
                self.fire_exit(prev);
                if let Some(root) = prev_root {
                    if target.map(|t| self.tree.root_of(t)) != Some(root) {
                        self.fire_exit(root);
                    }
                }
            }
            if let Some(next) = target {
                self.fire_enter(next);
                if let Some(root) = next_root {
                    if previous.map(|p| self.tree.root_of(p)) != Some(root) {
                        self.fire_enter(root);
                    }
                }
            }
        }
        self.input.mouse_over = target;
        target
    }

    /// Resolve the pointer: hover transitions, Over events, and drag
    /// eligibility for the left-button capture.
    pub(super) fn handle_mouse_input(&mut self) {
        let target = self.refresh_target();

        for button in MouseButton::ALL {
            if let Some(held) = self.input.capture(button) {
                if Some(held) != target {
                    let at = self.local_point(held);
                    self.invoke(held, |w, ctx| w.on_mouse_over(ctx, at));
                }
            }
        }
        if let Some(t) = target {
            let at = self.local_point(t);
            self.invoke(t, |w, ctx| w.on_mouse_over(ctx, at));
        }

        if let Some(t) = target {
            if self.input.capture(MouseButton::Left) == Some(t) {
                self.attempt_drag(t, false);
            }
        }
    }

    pub fn mouse_down(&mut self, button: MouseButton) {
        self.input.press_origin[button.index()] = self.input.mouse_position;
        let Some(target) = self.refresh_target() else {
            if self.is_modal_open() {
                self.close_modals_on_outside_click();
            }
            return;
        };

        self.make_topmost(target);
        let at = self.local_point(target);
        self.invoke(target, |w, ctx| w.on_mouse_down(ctx, at, button));
        if self.tree.get(target).is_some_and(|c| c.accepts_keyboard_input) {
            self.set_keyboard_focus(target);
        }
        if self.tree.is_disposed(target) {
            return;
        }
        self.input.captures[button.index()] = Some(target);
        if button == MouseButton::Left {
            self.attempt_drag(target, false);
        }
    }

    pub fn mouse_up(&mut self, button: MouseButton) {
        self.end_drag();
        let target = self.refresh_target();
        let captured = self.input.captures[button.index()].take();

        if let Some(t) = target {
            let at = self.local_point(t);
            if captured == Some(t) {
                self.invoke(t, |w, ctx| w.on_mouse_click(ctx, at, button));
            }
            self.invoke(t, |w, ctx| w.on_mouse_up(ctx, at, button));
            if button == MouseButton::Right {
                self.close_with_right_click(t);
            }
            self.input.last_up[button.index()] = Some(t);
        }

        if let Some(held) = captured.filter(|&c| Some(c) != target) {
            let at = self.local_point(held);
            self.invoke(held, |w, ctx| w.on_mouse_up(ctx, at, button));
            if button == MouseButton::Right {
                self.close_with_right_click(held);
            }
        }

        self.close_if_click_outside();
    }

    /// Platform-detected double click. Fires only when the control under the
    /// pointer also received this button's previous release. Returns whether
    /// the control consumed it.
    pub fn double_click(&mut self, button: MouseButton) -> bool {
        let Some(target) = self.refresh_target() else { return false };
        if self.input.last_up[button.index()] != Some(target) {
            return false;
        }
        let at = self.local_point(target);
        self.invoke(target, |w, ctx| w.on_mouse_double_click(ctx, at, button))
    }

    pub fn mouse_wheel(&mut self, direction: WheelDirection) {
        let Some(target) = self.input.mouse_over else { return };
        if self.tree.get(target).is_some_and(|c| c.accepts_mouse_input) {
            self.invoke(target, |w, ctx| w.on_mouse_wheel(ctx, direction));
        }
    }

    /// Walk up from `id` toward its gump. The walk stops at the first node
    /// refusing right-click close; reaching the gump closes it.
    pub fn close_with_right_click(&mut self, id: ControlId) {
        let mut current = id;
        loop {
            let Some(c) = self.tree.get(current) else { return };
            if c.disposed || !c.can_close_with_right_click {
                return;
            }
            match c.parent {
                Some(parent) => current = parent,
                None => break,
            }
        }
        tracing::debug!("Closing gump {:?} on right click", current);
        self.dispose(current);
    }

    fn close_modals_on_outside_click(&mut self) {
        let doomed: Vec<ControlId> = self
            .gumps()
            .filter(|&id| {
                self.tree
                    .get(id)
                    .and_then(|c| c.gump.as_ref())
                    .is_some_and(|g| g.modal && g.close_modal_on_outside_click)
            })
            .collect();
        for id in doomed {
            self.dispose(id);
        }
    }

    fn close_if_click_outside(&mut self) {
        let pos = self.input.mouse_position;
        let doomed: Vec<ControlId> = self
            .gumps()
            .filter(|&id| {
                let flagged = self
                    .tree
                    .get(id)
                    .and_then(|c| c.gump.as_ref())
                    .is_some_and(|g| g.close_if_click_outside);
                flagged && !self.tree.absolute_bounds(id).is_some_and(|b| b.contains(pos))
            })
            .collect();
        for id in doomed {
            self.dispose(id);
        }
    }
}
