//! Builds a gump's control tree from a layout string.

use super::{tokenize_commands, Params, COMMANDS};
use crate::assets::AssetSource;
use crate::config::UiConfig;
use crate::error::LayoutError;
use crate::geometry::Size;
use crate::widget::{Control, ControlId, ControlTree, GumpInfo};

/// Interpreter state while one layout is processed.
pub struct LayoutBuilder<'a> {
    pub tree: &'a mut ControlTree,
    pub assets: &'a dyn AssetSource,
    pub config: &'a UiConfig,
    pub lines: &'a [String],
    pub gump: ControlId,
    /// Page new controls are assigned to.
    pub page: u32,
    /// Radio group counter; bumped by both `group` and `endgroup`.
    pub group: u32,
}

impl<'a> LayoutBuilder<'a> {
    /// Attach `control` to the gump on the current page.
    pub fn add(&mut self, mut control: Control) -> ControlId {
        control.page = self.page;
        let id = control.id;
        // The gump was registered by `build_gump` and is never disposed mid-parse.
        self.tree.add_child(self.gump, control).unwrap_or(id)
    }

    pub fn gump_info(&mut self) -> Option<&mut GumpInfo> {
        self.tree.get_mut(self.gump).and_then(|c| c.gump.as_mut())
    }

    /// Most recently added child on the current page.
    pub fn last_on_page(&self) -> Option<ControlId> {
        self.tree
            .children(self.gump)
            .iter()
            .rev()
            .copied()
            .find(|&id| self.tree.get(id).is_some_and(|c| c.page == self.page))
    }

    /// Entry of the text array, or empty with a warning if out of range.
    pub fn line(&self, index: usize) -> String {
        match self.lines.get(index) {
            Some(line) => line.clone(),
            None => {
                tracing::warn!("Layout text index {} out of range ({} lines)", index, self.lines.len());
                String::new()
            }
        }
    }

    pub fn gump_size(&self, graphic: u16) -> Size {
        self.assets.gump_size(graphic).unwrap_or_else(|| {
            tracing::debug!("Unknown gump graphic 0x{:04X}", graphic);
            Size::default()
        })
    }

    pub fn art_size(&self, graphic: u16) -> Size {
        self.assets.art_size(graphic).unwrap_or_else(|| {
            tracing::debug!("Unknown art graphic 0x{:04X}", graphic);
            Size::default()
        })
    }

    pub fn localized(&self, id: u32) -> String {
        self.assets.localized(id).unwrap_or_else(|| {
            tracing::debug!("Missing localized string {}", id);
            String::new()
        })
    }

    /// Process one command. Failures affect only this command.
    pub fn run_command(&mut self, command: &str) -> Result<(), LayoutError> {
        let params = Params::parse(command);
        if params.is_empty() {
            return Ok(());
        }
        let name = params.name().to_ascii_lowercase();
        let handler = COMMANDS
            .get(name.as_str())
            .ok_or_else(|| LayoutError::UnknownCommand(name.clone()))?;
        handler(self, &params)
    }
}

/// Build a server gump at `(x, y)` from `layout`, registering every control
/// in `tree`. Malformed or unknown commands are logged and skipped.
#[allow(clippy::too_many_arguments)]
pub fn build_gump(
    tree: &mut ControlTree,
    assets: &dyn AssetSource,
    config: &UiConfig,
    sender: u32,
    gump_id: u32,
    x: i32,
    y: i32,
    layout: &str,
    lines: &[String],
) -> ControlId {
    let mut root = Control::gump(GumpInfo::server(sender, gump_id)).at(x, y);
    root.local_serial = Some(sender);
    let gump = tree.register(root);

    let mut builder = LayoutBuilder {
        tree,
        assets,
        config,
        lines,
        gump,
        page: 0,
        group: 0,
    };

    for command in tokenize_commands(layout) {
        if let Err(e) = builder.run_command(command) {
            tracing::warn!("Gump 0x{:08X}: skipped command: {}", gump_id, e);
        }
    }

    builder.tree.fit_to_children(gump);
    tracing::debug!(
        "Built gump 0x{:08X} from 0x{:08X} with {} controls",
        gump_id,
        sender,
        builder.tree.children(gump).len()
    );
    gump
}
