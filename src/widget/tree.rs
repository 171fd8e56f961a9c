//! Arena owning every control, keyed by [`ControlId`].
//!
//! Parents own their children through `Control::children`; the `parent`
//! field is only a back reference. Disposal marks a subtree and the next
//! update pass sweeps it from the arena.

use std::collections::HashMap;

use super::{Control, ControlId, DrawContext, EventContext, UiAction, Widget};
use crate::geometry::{Point, Rect};
use crate::render::DrawTarget;

#[derive(Debug, Default)]
pub struct ControlTree {
    controls: HashMap<ControlId, Control>,
}

impl ControlTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a detached control and return its id.
    pub fn register(&mut self, control: Control) -> ControlId {
        let id = control.id;
        if self.controls.contains_key(&id) {
            tracing::warn!("Re-registering control {:?}", id);
        }
        self.controls.insert(id, control);
        id
    }

    /// Register `child` and attach it to `parent`.
    pub fn add_child(&mut self, parent: ControlId, mut child: Control) -> Option<ControlId> {
        let parent_ctrl = self.controls.get_mut(&parent)?;
        if parent_ctrl.disposed {
            return None;
        }
        let id = child.id;
        parent_ctrl.children.push(id);
        child.parent = Some(parent);
        self.controls.insert(id, child);
        Some(id)
    }

    pub fn get(&self, id: ControlId) -> Option<&Control> {
        self.controls.get(&id)
    }

    pub fn get_mut(&mut self, id: ControlId) -> Option<&mut Control> {
        self.controls.get_mut(&id)
    }

    pub fn contains(&self, id: ControlId) -> bool {
        self.controls.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    /// Missing controls count as disposed.
    pub fn is_disposed(&self, id: ControlId) -> bool {
        self.controls.get(&id).is_none_or(|c| c.disposed)
    }

    pub fn children(&self, id: ControlId) -> &[ControlId] {
        self.controls.get(&id).map(|c| c.children.as_slice()).unwrap_or(&[])
    }

    /// Walk parent links up to the top-level control.
    pub fn root_of(&self, id: ControlId) -> ControlId {
        let mut current = id;
        while let Some(parent) = self.controls.get(&current).and_then(|c| c.parent) {
            current = parent;
        }
        current
    }

    /// Screen position: own offset plus every ancestor's.
    pub fn absolute_position(&self, id: ControlId) -> Point {
        let mut pos = Point::default();
        let mut current = Some(id);
        while let Some(cid) = current {
            let Some(c) = self.controls.get(&cid) else { break };
            pos = pos + c.position();
            current = c.parent;
        }
        pos
    }

    pub fn absolute_bounds(&self, id: ControlId) -> Option<Rect> {
        let c = self.controls.get(&id)?;
        let origin = self.absolute_position(id);
        Some(Rect::new(origin.x, origin.y, c.width, c.height))
    }

    fn active_page(&self, root: ControlId) -> u32 {
        self.controls
            .get(&root)
            .and_then(|c| c.gump.as_ref())
            .map(|g| g.active_page)
            .unwrap_or(0)
    }

    /// `page == 0` or the owning gump is showing that page.
    pub fn is_on_active_page(&self, id: ControlId) -> bool {
        let Some(c) = self.controls.get(&id) else { return false };
        c.page == 0 || c.page == self.active_page(self.root_of(id))
    }

    /// Grow a container to cover all of its children.
    pub fn fit_to_children(&mut self, id: ControlId) {
        let (mut w, mut h) = (0, 0);
        for child in self.children(id) {
            if let Some(c) = self.controls.get(child) {
                let bounds = c.bounds();
                w = w.max(bounds.right());
                h = h.max(bounds.bottom());
            }
        }
        if let Some(c) = self.controls.get_mut(&id) {
            c.width = c.width.max(w);
            c.height = c.height.max(h);
        }
    }

    /// Controls under `point`, deepest first, ending at `id`.
    ///
    /// Children are clipped to their parent and tested last-added first.
    pub fn hit_test(&self, id: ControlId, point: Point) -> Option<Vec<ControlId>> {
        let root = self.root_of(id);
        let parent_origin = self
            .controls
            .get(&id)
            .and_then(|c| c.parent)
            .map(|p| self.absolute_position(p))
            .unwrap_or_default();
        self.hit_test_inner(id, point, parent_origin, self.active_page(root))
    }

    fn hit_test_inner(
        &self,
        id: ControlId,
        point: Point,
        parent_origin: Point,
        active_page: u32,
    ) -> Option<Vec<ControlId>> {
        let c = self.controls.get(&id)?;
        if c.disposed || !c.visible || (c.page != 0 && c.page != active_page) {
            return None;
        }
        let bounds = c.bounds().offset(parent_origin);
        if !bounds.contains(point) {
            return None;
        }
        if !c.contains_by_bounds && !c.widget.hit_pixel(point - bounds.position()) {
            return None;
        }
        for &child in c.children.iter().rev() {
            if let Some(mut path) = self.hit_test_inner(child, point, bounds.position(), active_page) {
                path.push(id);
                return Some(path);
            }
        }
        Some(vec![id])
    }

    /// Depth-first search for the first visible, enabled control accepting keyboard input.
    pub fn first_keyboard_control(&self, id: ControlId) -> Option<ControlId> {
        let c = self.controls.get(&id)?;
        if c.disposed || !c.visible || !c.enabled {
            return None;
        }
        if c.accepts_keyboard_input {
            return Some(id);
        }
        c.children.iter().find_map(|&child| self.first_keyboard_control(child))
    }

    /// Every live descendant of `id`, depth-first, excluding `id`.
    pub fn descendants(&self, id: ControlId) -> Vec<ControlId> {
        let mut out = Vec::new();
        let mut stack: Vec<ControlId> = self.children(id).iter().rev().copied().collect();
        while let Some(cid) = stack.pop() {
            if self.is_disposed(cid) {
                continue;
            }
            out.push(cid);
            stack.extend(self.children(cid).iter().rev().copied());
        }
        out
    }

    /// Mark `id` and its subtree disposed. Idempotent.
    pub fn dispose(&mut self, id: ControlId) {
        let Some(c) = self.controls.get_mut(&id) else { return };
        if c.disposed {
            return;
        }
        c.disposed = true;
        c.widget.dispose();
        let children = c.children.clone();
        for child in children {
            self.dispose(child);
        }
    }

    /// Drop `id` and everything below it from the arena.
    pub fn remove_subtree(&mut self, id: ControlId) {
        let Some(c) = self.controls.remove(&id) else { return };
        if let Some(parent) = c.parent.and_then(|p| self.controls.get_mut(&p)) {
            parent.children.retain(|&cid| cid != id);
        }
        for child in c.children {
            self.remove_subtree(child);
        }
    }

    /// Drop every disposed descendant of `id` from the arena.
    pub fn sweep(&mut self, id: ControlId) {
        for child in self.children(id).to_vec() {
            if self.is_disposed(child) {
                self.remove_subtree(child);
            } else {
                self.sweep(child);
            }
        }
    }

    /// Initialize and advance `id`, recursing into visible children.
    /// Disposed children are swept here.
    pub fn update(&mut self, id: ControlId, total_ms: f64, frame_ms: f64) {
        let children = {
            let Some(c) = self.controls.get_mut(&id) else { return };
            if c.disposed {
                return;
            }
            if !c.initialized {
                c.widget.initialize();
                c.initialized = true;
            }
            c.widget.update(total_ms, frame_ms);
            c.children.clone()
        };
        for child in children {
            if self.is_disposed(child) {
                self.remove_subtree(child);
            } else if self.controls.get(&child).is_some_and(|c| c.visible) {
                self.update(child, total_ms, frame_ms);
            }
        }
    }

    /// Draw `id` then its visible children. `parent_origin` is the parent's
    /// screen position. Returns `false` as soon as a resource is missing.
    pub fn draw(&self, id: ControlId, target: &mut dyn DrawTarget, parent_origin: Point) -> bool {
        let Some(c) = self.controls.get(&id) else { return true };
        if c.disposed || !c.visible || !self.is_on_active_page(id) {
            return true;
        }
        let rect = c.bounds().offset(parent_origin);
        let ctx = DrawContext {
            rect,
            alpha: if c.is_transparent { c.alpha } else { 1.0 },
            mouse_over: c.mouse_is_over,
        };
        if !c.widget.draw(&ctx, target) {
            return false;
        }
        c.children
            .iter()
            .all(|&child| self.draw(child, target, rect.position()))
    }

    /// Run a widget callback. Disposed or missing controls are a silent no-op.
    pub fn dispatch<R: Default>(
        &mut self,
        id: ControlId,
        f: impl FnOnce(&mut dyn Widget, &mut EventContext) -> R,
    ) -> (R, Vec<UiAction>) {
        let root = self.root_of(id);
        let Some(c) = self.controls.get_mut(&id) else {
            return (R::default(), Vec::new());
        };
        if c.disposed {
            return (R::default(), Vec::new());
        }
        let mut ctx = EventContext::new(id, root);
        let result = f(c.widget.as_mut(), &mut ctx);
        (result, ctx.into_actions())
    }
}
