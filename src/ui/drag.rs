//! Moving gumps with the pointer.

use super::{DragState, UiManager};
use crate::event::MouseButton;
use crate::widget::ControlId;

impl UiManager {
    /// Consider starting a drag of the gump owning `id`.
    ///
    /// The first call for a gump only arms it. Later calls start the drag once
    /// the pointer has moved more than `min_drag_distance` (Manhattan) since
    /// the left press, or at once when `force` is set.
    pub fn attempt_drag(&mut self, id: ControlId, force: bool) {
        if self.input.drag.active {
            return;
        }
        if !self.tree.get(id).is_some_and(|c| c.can_move && !c.disposed) {
            return;
        }
        let root = self.tree.root_of(id);
        let movable = self.tree.get(root).is_some_and(|c| {
            c.can_move && !c.gump.as_ref().is_some_and(|g| g.block_movement)
        });
        if !movable {
            return;
        }

        let pos = self.input.mouse_position;
        if force {
            self.input.drag.candidate = Some(root);
            self.input.drag.origin = pos;
        }
        if self.input.drag.candidate != Some(root) {
            self.input.drag = DragState {
                candidate: Some(root),
                active: false,
                origin: pos,
            };
            return;
        }

        let offset = self.input.offset_since_press(MouseButton::Left);
        if !force && offset.manhattan() <= self.config.min_drag_distance {
            return;
        }

        self.input.drag.active = true;
        tracing::debug!("Drag of {:?} started after {:?}", root, offset);
        self.invoke(root, |w, ctx| w.on_drag_begin(ctx, offset));

        for button in MouseButton::ALL {
            let Some(held) = self.input.captures[button.index()] else { continue };
            if held == root {
                continue;
            }
            self.input.captures[button.index()] = None;
            let at = self.local_point(held);
            self.invoke(held, |w, ctx| w.on_mouse_up(ctx, at, button));
        }
    }

    /// Apply the pointer delta since the last step to the dragged gump.
    pub(super) fn do_drag(&mut self) {
        let Some(root) = self.input.drag.candidate else { return };
        let pos = self.input.mouse_position;
        let delta = pos - self.input.drag.origin;
        if let Some(c) = self.tree.get_mut(root) {
            c.x = c.x.saturating_add(delta.x);
            c.y = c.y.saturating_add(delta.y);
        }
        self.input.drag.origin = pos;
    }

    /// Finish an active drag: final delta, drag-end callback, position
    /// write-back. Any armed candidate is forgotten.
    pub(super) fn end_drag(&mut self) {
        let drag = std::mem::take(&mut self.input.drag);
        let Some(root) = drag.candidate else { return };
        if !drag.active || self.tree.is_disposed(root) {
            return;
        }
        self.input.drag = drag;
        self.do_drag();
        self.input.drag = DragState::default();

        let at = self.local_point(root);
        self.invoke(root, |w, ctx| w.on_drag_end(ctx, at));
        self.remember_position(root);
    }

    pub fn is_dragging(&self) -> bool {
        self.input.is_dragging()
    }
}
