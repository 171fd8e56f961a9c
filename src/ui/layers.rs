//! Z-order of top-level gumps.

use super::UiManager;
use crate::widget::{ControlId, UiLayer};

impl UiManager {
    fn layer_of(&self, id: ControlId) -> UiLayer {
        self.tree
            .get(id)
            .and_then(|c| c.gump.as_ref())
            .map(|g| g.layer)
            .unwrap_or_default()
    }

    /// Regroup the list into Over, Default and Under bands. Order inside a
    /// band is kept. Only runs after the list changed.
    pub(super) fn sort_if_needed(&mut self) {
        if !self.needs_sort {
            return;
        }
        let mut keyed: Vec<(UiLayer, ControlId)> =
            self.gumps.iter().map(|&id| (self.layer_of(id), id)).collect();
        keyed.sort_by_key(|&(layer, _)| layer);
        self.gumps = keyed.into_iter().map(|(_, id)| id).collect();
        self.needs_sort = false;
    }

    /// Move the gump owning `id` to the front of the list.
    pub fn make_topmost(&mut self, id: ControlId) {
        let root = self.tree.root_of(id);
        let Some(index) = self.gumps.iter().position(|&g| g == root) else {
            return;
        };
        if index != 0 {
            self.gumps.remove(index);
            self.gumps.insert(0, root);
        }
        self.needs_sort = true;
    }

    /// Move the gump owning `id` directly behind the gump owning `reference`.
    /// The reference keeps its index unless `id` started in front of it.
    pub fn make_topmost_over_another(&mut self, id: ControlId, reference: ControlId) {
        let root = self.tree.root_of(id);
        let other = self.tree.root_of(reference);
        if root == other || !self.gumps.contains(&other) {
            return;
        }
        let Some(index) = self.gumps.iter().position(|&g| g == root) else {
            return;
        };
        self.gumps.remove(index);
        let Some(target) = self.gumps.iter().position(|&g| g == other) else {
            return;
        };
        self.gumps.insert(target + 1, root);
        self.needs_sort = true;
    }
}
