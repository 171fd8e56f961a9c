//! Top-level gump data.

use super::{Control, ControlKind, Widget};

/// Layering hint for a top-level gump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum UiLayer {
    /// Always in front of default gumps.
    Over,
    #[default]
    Default,
    /// Always behind default gumps.
    Under,
}

impl UiLayer {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Over => "OVER",
            Self::Default => "DEFAULT",
            Self::Under => "UNDER",
        }
    }
}

/// What created a gump. Lookup and removal by kind match on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GumpKind {
    /// Built from a server layout string.
    Server,
    /// Built programmatically by some other client subsystem.
    Named(&'static str),
}

/// Attributes only top-level gumps carry.
#[derive(Debug, Clone)]
pub struct GumpInfo {
    pub kind: GumpKind,
    /// Remote entity that created the gump.
    pub sender: u32,
    /// Server-assigned gump type id; keys the position cache.
    pub server_id: u32,
    pub modal: bool,
    /// Dispose this modal gump when a press lands outside every modal gump.
    pub close_modal_on_outside_click: bool,
    /// Dispose on any release whose pointer is outside this gump.
    pub close_if_click_outside: bool,
    pub can_close_with_esc: bool,
    /// Set by `nomove`; overrides `can_move`.
    pub block_movement: bool,
    pub layer: UiLayer,
    pub active_page: u32,
}

impl GumpInfo {
    pub fn new(kind: GumpKind) -> Self {
        Self {
            kind,
            sender: 0,
            server_id: 0,
            modal: false,
            close_modal_on_outside_click: false,
            close_if_click_outside: false,
            can_close_with_esc: true,
            block_movement: false,
            layer: UiLayer::Default,
            active_page: 0,
        }
    }

    /// Server gumps open on page 1.
    pub fn server(sender: u32, server_id: u32) -> Self {
        Self {
            sender,
            server_id,
            active_page: 1,
            ..Self::new(GumpKind::Server)
        }
    }
}

/// Container behaviour of a gump root; draws nothing itself.
#[derive(Debug, Default)]
pub struct GumpRoot;

impl Widget for GumpRoot {
    fn kind(&self) -> ControlKind {
        ControlKind::Gump
    }
}

impl Control {
    /// A movable top-level gump accepting mouse input.
    pub fn gump(info: GumpInfo) -> Self {
        let mut control = Control::new(Box::new(GumpRoot));
        control.gump = Some(info);
        control.accepts_mouse_input = true;
        control.can_move = true;
        control.contains_by_bounds = true;
        control
    }
}
