//! Input vocabulary and the outgoing UI event queue.

/// Mouse buttons tracked by the input router. The discriminant indexes the
/// per-button capture arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left = 0,
    Middle = 1,
    Right = 2,
    XButton1 = 3,
    XButton2 = 4,
}

impl MouseButton {
    pub const COUNT: usize = 5;

    pub const ALL: [MouseButton; Self::COUNT] = [
        Self::Left,
        Self::Middle,
        Self::Right,
        Self::XButton1,
        Self::XButton2,
    ];

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Wheel direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelDirection {
    Up,
    Down,
}

/// Keys the control layer cares about; everything else arrives as `Other`
/// with the platform key code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Backspace,
    Delete,
    Enter,
    Escape,
    Tab,
    Left,
    Right,
    Home,
    End,
    Other(u32),
}

/// Modifier state accompanying a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

/// Something the rest of the client has to act on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// A server gump was answered by activating one of its buttons.
    GumpResponse {
        sender: u32,
        gump_id: u32,
        button_id: i32,
        /// Serials of checked checkboxes and radios.
        switches: Vec<u32>,
        /// `(entry id, text)` for every text entry.
        entries: Vec<(u32, String)>,
    },
    /// A button with an activate action was clicked on a gump without a server id.
    ButtonActivated { gump: u64, button_id: i32 },
    /// A gump changed its active page.
    PageChanged { gump: u64, page: u32 },
}

/// Event queue drained by the client once per frame.
#[derive(Debug, Default)]
pub struct EventQueue {
    pending: Vec<UiEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: UiEvent) {
        self.pending.push(event);
    }

    pub fn drain(&mut self) -> Vec<UiEvent> {
        std::mem::take(&mut self.pending)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }
}
