//! Control tree: nodes, the arena that owns them, and leaf widget kinds.

mod behavior;
mod control;
mod gump;
pub mod kinds;
mod tree;

pub use behavior::{DrawContext, EventContext, UiAction, Widget};
pub use control::{Control, Tooltip};
pub use gump::{GumpInfo, GumpKind, GumpRoot, UiLayer};
pub use tree::ControlTree;

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_CONTROL_ID: AtomicU64 = AtomicU64::new(1);

/// Handle to a control in a [`ControlTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ControlId(pub u64);

/// Generate a unique control ID.
pub fn next_control_id() -> ControlId {
    ControlId(NEXT_CONTROL_ID.fetch_add(1, Ordering::Relaxed))
}

/// Control kinds known to the layout interpreter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlKind {
    Gump,
    Button,
    Checkbox,
    RadioButton,
    Label,
    CroppedText,
    Html,
    GumpPic,
    GumpPicTiled,
    ResizePic,
    StaticPic,
    TextEntry,
    CheckerTrans,
    Custom,
}

impl ControlKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gump => "Gump",
            Self::Button => "Button",
            Self::Checkbox => "Checkbox",
            Self::RadioButton => "RadioButton",
            Self::Label => "Label",
            Self::CroppedText => "CroppedText",
            Self::Html => "HtmlControl",
            Self::GumpPic => "GumpPic",
            Self::GumpPicTiled => "GumpPicTiled",
            Self::ResizePic => "ResizePic",
            Self::StaticPic => "StaticPic",
            Self::TextEntry => "TextEntry",
            Self::CheckerTrans => "CheckerTrans",
            Self::Custom => "Custom",
        }
    }
}
