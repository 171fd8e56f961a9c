//! Draw submission contract.
//!
//! Controls describe what they want drawn as [`DrawCommand`]s; the client's
//! renderer implements [`DrawTarget`] and batches them. A target answers
//! `false` when a texture is not resident yet, which aborts that branch of
//! the tree for the current frame only.

mod recording;

pub use recording::RecordingTarget;

use crate::geometry::{Point, Rect};

/// A single draw request in screen coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Gump graphic stretched to `rect`.
    Gump { graphic: u16, rect: Rect, hue: u16, alpha: f32 },
    /// Gump graphic repeated to fill `rect`.
    GumpTiled { graphic: u16, rect: Rect, hue: u16, alpha: f32 },
    /// Nine-slice background built from `graphic` .. `graphic + 8`.
    Resize { graphic: u16, rect: Rect, alpha: f32 },
    /// Static art tile.
    Art { graphic: u16, at: Point, hue: u16, alpha: f32 },
    /// Text laid out inside `rect`.
    Text { text: String, rect: Rect, hue: u16, alpha: f32 },
    /// Checkered translucency overlay.
    Checker { rect: Rect },
}

impl DrawCommand {
    /// The gump or art graphic this command needs resident, if any.
    pub fn graphic(&self) -> Option<u16> {
        match self {
            Self::Gump { graphic, .. }
            | Self::GumpTiled { graphic, .. }
            | Self::Resize { graphic, .. }
            | Self::Art { graphic, .. } => Some(*graphic),
            Self::Text { .. } | Self::Checker { .. } => None,
        }
    }
}

/// Renderer side of the draw pass.
pub trait DrawTarget {
    /// Queue a command. Returns `false` if its resources are not ready.
    fn submit(&mut self, command: DrawCommand) -> bool;
}
