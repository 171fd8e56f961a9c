//! Art-backed controls and the checker translucency marker.

use crate::geometry::Point;
use crate::render::{DrawCommand, DrawTarget};
use crate::widget::{ControlKind, DrawContext, Widget};

/// A single gump graphic.
#[derive(Debug)]
pub struct GumpPic {
    pub graphic: u16,
    pub hue: u16,
    /// Virtue gump items report their clicks by bounds.
    pub is_virtue: bool,
}

impl GumpPic {
    pub fn new(graphic: u16, hue: u16) -> Self {
        Self { graphic, hue, is_virtue: false }
    }
}

impl Widget for GumpPic {
    fn kind(&self) -> ControlKind {
        ControlKind::GumpPic
    }

    fn draw(&self, ctx: &DrawContext, target: &mut dyn DrawTarget) -> bool {
        target.submit(DrawCommand::Gump {
            graphic: self.graphic,
            rect: ctx.rect,
            hue: self.hue,
            alpha: ctx.alpha,
        })
    }
}

#[derive(Debug)]
pub struct GumpPicTiled {
    pub graphic: u16,
}

impl Widget for GumpPicTiled {
    fn kind(&self) -> ControlKind {
        ControlKind::GumpPicTiled
    }

    fn draw(&self, ctx: &DrawContext, target: &mut dyn DrawTarget) -> bool {
        target.submit(DrawCommand::GumpTiled {
            graphic: self.graphic,
            rect: ctx.rect,
            hue: 0,
            alpha: ctx.alpha,
        })
    }
}

/// Nine-slice background.
#[derive(Debug)]
pub struct ResizePic {
    pub graphic: u16,
}

impl Widget for ResizePic {
    fn kind(&self) -> ControlKind {
        ControlKind::ResizePic
    }

    fn draw(&self, ctx: &DrawContext, target: &mut dyn DrawTarget) -> bool {
        target.submit(DrawCommand::Resize {
            graphic: self.graphic,
            rect: ctx.rect,
            alpha: ctx.alpha,
        })
    }
}

/// Static (tile) art.
#[derive(Debug)]
pub struct StaticPic {
    pub graphic: u16,
    pub hue: u16,
}

impl Widget for StaticPic {
    fn kind(&self) -> ControlKind {
        ControlKind::StaticPic
    }

    fn draw(&self, ctx: &DrawContext, target: &mut dyn DrawTarget) -> bool {
        target.submit(DrawCommand::Art {
            graphic: self.graphic,
            at: ctx.rect.position(),
            hue: self.hue,
            alpha: ctx.alpha,
        })
    }
}

/// Region marker for `checkertrans`; the layout interpreter does the marking.
#[derive(Debug, Default)]
pub struct CheckerTrans;

impl Widget for CheckerTrans {
    fn kind(&self) -> ControlKind {
        ControlKind::CheckerTrans
    }

    fn draw(&self, ctx: &DrawContext, target: &mut dyn DrawTarget) -> bool {
        target.submit(DrawCommand::Checker { rect: ctx.rect })
    }

    fn hit_pixel(&self, _at: Point) -> bool {
        false
    }
}
