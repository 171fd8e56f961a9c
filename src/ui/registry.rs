//! Adding, looking up and removing top-level gumps, plus the position cache.

use super::UiManager;
use crate::error::{Error, Result};
use crate::geometry::Point;
use crate::layout::build_gump;
use crate::widget::{Control, ControlId, GumpKind};

impl UiManager {
    /// Register a detached gump control and put it in front.
    pub fn add_gump(&mut self, control: Control) -> Result<ControlId> {
        if !control.is_gump() {
            return Err(Error::Other(format!("control {:?} is not a gump", control.id)));
        }
        let id = self.tree.register(control);
        self.add(id)?;
        Ok(id)
    }

    /// Put an already registered gump in front of the live list.
    pub fn add(&mut self, id: ControlId) -> Result<()> {
        let Some(c) = self.tree.get(id) else {
            return Err(Error::ControlNotFound(id));
        };
        if c.disposed {
            return Err(Error::Disposed(id));
        }
        if self.gumps.contains(&id) {
            return Ok(());
        }
        self.gumps.insert(0, id);
        self.needs_sort = true;
        Ok(())
    }

    /// Build a server gump from `layout` and add it.
    ///
    /// A cached position for `gump_id` overrides `(x, y)`; otherwise `(x, y)`
    /// is remembered as the gump's position.
    pub fn create_from_layout(
        &mut self,
        sender: u32,
        gump_id: u32,
        x: i32,
        y: i32,
        layout: &str,
        lines: &[String],
    ) -> Result<ControlId> {
        let pos = *self
            .position_cache
            .entry(gump_id)
            .or_insert_with(|| Point::new(x, y));
        let id = build_gump(
            &mut self.tree,
            self.assets.as_ref(),
            &self.config,
            sender,
            gump_id,
            pos.x,
            pos.y,
            layout,
            lines,
        );
        self.add(id)?;
        Ok(id)
    }

    /// Live gump whose local serial is `serial`.
    pub fn get_gump(&self, serial: u32) -> Option<ControlId> {
        self.gumps.iter().copied().find(|&id| {
            self.tree
                .get(id)
                .is_some_and(|c| !c.disposed && c.local_serial == Some(serial))
        })
    }

    /// First live gump of `kind`, optionally restricted to a local serial.
    pub fn first_of_kind(&self, kind: GumpKind, serial: Option<u32>) -> Option<ControlId> {
        self.gumps.iter().copied().find(|&id| {
            self.tree.get(id).is_some_and(|c| {
                !c.disposed
                    && c.gump.as_ref().is_some_and(|g| g.kind == kind)
                    && serial.is_none_or(|s| c.local_serial == Some(s))
            })
        })
    }

    /// Dispose the first live gump matching `kind` and `serial`. Returns
    /// whether one was found.
    pub fn remove(&mut self, kind: GumpKind, serial: Option<u32>) -> bool {
        match self.first_of_kind(kind, serial) {
            Some(id) => {
                self.dispose(id);
                true
            }
            None => false,
        }
    }

    /// Dispose every gump and reset the input session.
    pub fn clear(&mut self) {
        for id in self.gumps.clone() {
            self.dispose(id);
        }
        self.input.reset();
    }

    /// Live gumps, frontmost first.
    pub fn gumps(&self) -> impl Iterator<Item = ControlId> + '_ {
        self.gumps.iter().copied().filter(|&id| !self.tree.is_disposed(id))
    }

    pub fn is_modal_open(&self) -> bool {
        self.gumps().any(|id| {
            self.tree
                .get(id)
                .and_then(|c| c.gump.as_ref())
                .is_some_and(|g| g.modal)
        })
    }

    pub fn save_position(&mut self, gump_id: u32, pos: Point) {
        self.position_cache.insert(gump_id, pos);
    }

    pub fn cached_position(&self, gump_id: u32) -> Option<Point> {
        self.position_cache.get(&gump_id).copied()
    }
}
