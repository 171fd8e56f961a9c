//! The UI manager: owns every top-level gump, orders them, and routes input.
//!
//! `UiManager` is split across files the same way the input concerns are:
//! `registry` (adding, looking up and removing gumps), `layers` (z-order),
//! `mouse` and `drag` (pointer routing) and `keyboard` (focus and keys).

mod drag;
mod input_state;
mod keyboard;
mod layers;
mod mouse;
mod registry;

pub use input_state::{DragState, InputState};

use std::collections::HashMap;

use crate::assets::AssetSource;
use crate::config::UiConfig;
use crate::event::{EventQueue, UiEvent};
use crate::geometry::Point;
use crate::render::DrawTarget;
use crate::widget::{ControlId, ControlTree, EventContext, GumpKind, UiAction, Widget};

pub struct UiManager {
    tree: ControlTree,
    /// Live top-level gumps, frontmost first.
    gumps: Vec<ControlId>,
    needs_sort: bool,
    /// Last known position of server gumps, keyed by server gump id.
    position_cache: HashMap<u32, Point>,
    input: InputState,
    events: EventQueue,
    config: UiConfig,
    assets: Box<dyn AssetSource>,
}

impl UiManager {
    pub fn new(config: UiConfig, assets: Box<dyn AssetSource>) -> Self {
        Self {
            tree: ControlTree::new(),
            gumps: Vec::new(),
            needs_sort: false,
            position_cache: HashMap::new(),
            input: InputState::new(),
            events: EventQueue::new(),
            config,
            assets,
        }
    }

    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    pub fn tree(&self) -> &ControlTree {
        &self.tree
    }

    /// Direct tree access for client subsystems building their own gumps.
    pub fn tree_mut(&mut self) -> &mut ControlTree {
        &mut self.tree
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn mouse_position(&self) -> Point {
        self.input.mouse_position
    }

    /// Control under the pointer as of the last resolution.
    pub fn mouse_over(&self) -> Option<ControlId> {
        self.input.mouse_over
    }

    /// Events produced since the last call.
    pub fn drain_events(&mut self) -> Vec<UiEvent> {
        self.events.drain()
    }

    /// One logic tick: resort, update every gump, sweep disposed ones, then
    /// re-resolve the pointer.
    pub fn update(&mut self, total_ms: f64, frame_ms: f64) {
        self.sort_if_needed();

        let mut i = 0;
        while i < self.gumps.len() {
            let id = self.gumps[i];
            if !self.tree.is_disposed(id) {
                self.tree.update(id, total_ms, frame_ms);
                // Hidden subtrees are skipped by update.
                self.tree.sweep(id);
            }
            if self.tree.is_disposed(id) {
                self.gumps.remove(i);
                self.remember_position(id);
                self.tree.remove_subtree(id);
                tracing::debug!("Swept gump {:?}", id);
            } else {
                i += 1;
            }
        }

        self.validate_input_state();
        self.handle_mouse_input();
        if self.input.is_dragging() {
            self.do_drag();
        }
    }

    /// Draw initialized gumps back to front. Returns `false` if any
    /// resource was not ready this frame.
    pub fn draw(&mut self, target: &mut dyn DrawTarget) -> bool {
        self.sort_if_needed();
        let mut ready = true;
        for &id in self.gumps.iter().rev() {
            let Some(c) = self.tree.get(id) else { continue };
            if c.disposed || !c.initialized {
                continue;
            }
            ready &= self.tree.draw(id, target, Point::default());
        }
        ready
    }

    /// Dispose `id` and its subtree. Gestures targeting it are aborted.
    pub fn dispose(&mut self, id: ControlId) {
        if self.tree.is_disposed(id) {
            return;
        }
        self.remember_position(id);
        self.tree.dispose(id);
        self.validate_input_state();
    }

    /// Write a server gump's current position back to the cache.
    fn remember_position(&mut self, id: ControlId) {
        let Some(c) = self.tree.get(id) else { return };
        if let Some(info) = c.gump.as_ref().filter(|g| g.kind == GumpKind::Server) {
            self.position_cache.insert(info.server_id, c.position());
        }
    }

    /// Forget captures, hover, focus and drag state pointing at disposed controls.
    fn validate_input_state(&mut self) {
        let tree = &self.tree;
        self.input.forget(|id| tree.is_disposed(id));
    }

    /// Pointer position relative to `id`.
    fn local_point(&self, id: ControlId) -> Point {
        self.input.mouse_position - self.tree.absolute_position(id)
    }

    /// Run a widget callback and apply whatever it asked for.
    fn invoke<R: Default>(
        &mut self,
        id: ControlId,
        f: impl FnOnce(&mut dyn Widget, &mut EventContext) -> R,
    ) -> R {
        let (result, actions) = self.tree.dispatch(id, f);
        self.apply_actions(id, actions);
        result
    }

    fn apply_actions(&mut self, source: ControlId, actions: Vec<UiAction>) {
        if actions.is_empty() {
            return;
        }
        let root = self.tree.root_of(source);
        for action in actions {
            match action {
                UiAction::SwitchPage(page) => self.switch_page(root, page),
                UiAction::Activate(button_id) => self.activate(root, button_id),
                UiAction::SelectRadio { group } => self.select_radio(root, source, group),
            }
        }
    }

    /// Show `page` on gump `root`.
    pub fn switch_page(&mut self, root: ControlId, page: u32) {
        if self.tree.is_disposed(root) {
            return;
        }
        let Some(info) = self.tree.get_mut(root).and_then(|c| c.gump.as_mut()) else {
            return;
        };
        info.active_page = page;
        self.events.push(UiEvent::PageChanged { gump: root.0, page });
    }

    fn activate(&mut self, root: ControlId, button_id: i32) {
        if self.tree.is_disposed(root) {
            return;
        }
        let Some(info) = self.tree.get(root).and_then(|c| c.gump.clone()) else {
            return;
        };
        if info.kind != GumpKind::Server {
            self.events.push(UiEvent::ButtonActivated { gump: root.0, button_id });
            return;
        }

        let mut switches = Vec::new();
        let mut entries = Vec::new();
        for id in self.tree.descendants(root) {
            let Some(c) = self.tree.get(id) else { continue };
            if c.widget.checked() == Some(true) {
                if let Some(serial) = c.local_serial {
                    switches.push(serial);
                }
            }
            if let Some((entry_id, text)) = c.widget.text_entry() {
                entries.push((entry_id, text.to_string()));
            }
        }
        tracing::debug!(
            "Gump 0x{:08X} answered with button {} ({} switches, {} entries)",
            info.server_id,
            button_id,
            switches.len(),
            entries.len()
        );
        self.events.push(UiEvent::GumpResponse {
            sender: info.sender,
            gump_id: info.server_id,
            button_id,
            switches,
            entries,
        });
        self.dispose(root);
    }

    fn select_radio(&mut self, root: ControlId, selected: ControlId, group: u32) {
        for id in self.tree.descendants(root) {
            if id == selected {
                continue;
            }
            if let Some(c) = self.tree.get_mut(id) {
                if c.widget.radio_group() == Some(group) {
                    c.widget.set_checked(false);
                }
            }
        }
    }
}
