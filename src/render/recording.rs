use std::collections::HashSet;

use super::{DrawCommand, DrawTarget};

/// Draw target that keeps every accepted command, used by tests and `gump-cli draw`.
#[derive(Debug, Default)]
pub struct RecordingTarget {
    pub commands: Vec<DrawCommand>,
    not_ready: HashSet<u16>,
}

impl RecordingTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `graphic` report as not yet loaded.
    pub fn refuse(&mut self, graphic: u16) {
        self.not_ready.insert(graphic);
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl DrawTarget for RecordingTarget {
    fn submit(&mut self, command: DrawCommand) -> bool {
        if command.graphic().is_some_and(|g| self.not_ready.contains(&g)) {
            return false;
        }
        self.commands.push(command);
        true
    }
}
