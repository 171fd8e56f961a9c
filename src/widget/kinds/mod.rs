//! Leaf widgets built by the layout interpreter.

mod button;
mod checkbox;
mod pic;
mod text;

pub use button::{Button, ButtonAction, ButtonState};
pub use checkbox::{Checkbox, RadioButton};
pub use pic::{CheckerTrans, GumpPic, GumpPicTiled, ResizePic, StaticPic};
pub use text::{HtmlControl, Label, TextEntry};
