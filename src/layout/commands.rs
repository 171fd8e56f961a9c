//! Command table: one constructor per layout command name.

use phf::phf_map;

use super::{parse_number, LayoutBuilder, Params};
use crate::assets::translate;
use crate::error::LayoutError;
use crate::geometry::Rect;
use crate::widget::kinds::{
    Button, ButtonAction, CheckerTrans, Checkbox, GumpPic, GumpPicTiled, HtmlControl, Label,
    RadioButton, ResizePic, StaticPic, TextEntry,
};
use crate::widget::{Control, ControlKind, Tooltip};

pub type CommandHandler = fn(&mut LayoutBuilder<'_>, &Params<'_>) -> Result<(), LayoutError>;

/// Lowercase command name -> constructor.
pub static COMMANDS: phf::Map<&'static str, CommandHandler> = phf_map! {
    "button" => button as CommandHandler,
    "buttontileart" => button_tile_art as CommandHandler,
    "checkertrans" => checker_trans as CommandHandler,
    "croppedtext" => cropped_text as CommandHandler,
    "gumppic" => gump_pic as CommandHandler,
    "gumppictiled" => gump_pic_tiled as CommandHandler,
    "htmlgump" => html_gump as CommandHandler,
    "xmfhtmlgump" => xmf_html_gump as CommandHandler,
    "xmfhtmlgumpcolor" => xmf_html_gump_color as CommandHandler,
    "xmfhtmltok" => xmf_html_tok as CommandHandler,
    "page" => page as CommandHandler,
    "resizepic" => resize_pic as CommandHandler,
    "text" => text as CommandHandler,
    "textentry" => text_entry as CommandHandler,
    "textentrylimited" => text_entry as CommandHandler,
    "tilepic" => tile_pic as CommandHandler,
    "tilepichue" => tile_pic as CommandHandler,
    "noclose" => no_close as CommandHandler,
    "nodispose" => no_dispose as CommandHandler,
    "nomove" => no_move as CommandHandler,
    "group" => group as CommandHandler,
    "endgroup" => group as CommandHandler,
    "radio" => radio as CommandHandler,
    "checkbox" => checkbox as CommandHandler,
    "tooltip" => tooltip as CommandHandler,
    "itemproperty" => item_property as CommandHandler,
    "noresize" => no_resize as CommandHandler,
    "mastergump" => master_gump as CommandHandler,
};

/// Html colour sent for "default white".
const HTML_DEFAULT_COLOR: u32 = 0x7FFF;

fn html_color(raw: u32) -> u32 {
    if raw == HTML_DEFAULT_COLOR { 0x00FF_FFFF } else { raw }
}

/// `button x y normal pressed action param [id]`
fn make_button(b: &LayoutBuilder<'_>, p: &Params<'_>) -> Result<Control, LayoutError> {
    let x: i32 = p.num(1)?;
    let y: i32 = p.num(2)?;
    let normal: u16 = p.num(3)?;
    let pressed: u16 = p.num(4)?;
    let action: u32 = p.num(5)?;
    let param: u32 = p.num(6)?;
    let id: i32 = p.opt_num(7)?.unwrap_or(0);

    let size = b.gump_size(normal);
    let widget = Button::new(id, normal, pressed, None).with_action(ButtonAction::from_raw(action), param);
    let mut control = Control::new(Box::new(widget))
        .at(x, y)
        .sized(size.width, size.height)
        .with_mouse_input(true);
    control.can_close_with_right_click = false;
    Ok(control)
}

fn button(b: &mut LayoutBuilder<'_>, p: &Params<'_>) -> Result<(), LayoutError> {
    let control = make_button(b, p)?;
    b.add(control);
    Ok(())
}

/// `buttontileart x y normal pressed action param id graphic hue tx ty`
fn button_tile_art(b: &mut LayoutBuilder<'_>, p: &Params<'_>) -> Result<(), LayoutError> {
    let mut control = make_button(b, p)?;
    let graphic: u16 = p.num(8)?;
    let hue: u16 = p.num(9)?;
    let tx: i32 = p.num(10)?;
    let ty: i32 = p.num(11)?;
    control.contains_by_bounds = true;
    let (x, y) = (control.x, control.y);

    let size = b.art_size(graphic);
    let art = Control::new(Box::new(StaticPic { graphic, hue }))
        .at(x.saturating_add(tx), y.saturating_add(ty))
        .sized(size.width, size.height)
        .with_mouse_input(true);
    b.add(control);
    b.add(art);
    Ok(())
}

/// `checkertrans x y w h`: mark earlier overlapping siblings translucent,
/// back to the previous `checkertrans`.
fn checker_trans(b: &mut LayoutBuilder<'_>, p: &Params<'_>) -> Result<(), LayoutError> {
    let region = Rect::new(p.num(1)?, p.num(2)?, p.num(3)?, p.num(4)?);
    let alpha = b.config.checker_alpha;

    let siblings: Vec<_> = b.tree.children(b.gump).iter().rev().copied().collect();
    for id in siblings {
        let Some(c) = b.tree.get_mut(id) else { continue };
        if c.widget.kind() == ControlKind::CheckerTrans {
            break;
        }
        if c.can_use_alpha && region.intersects(&c.bounds()) {
            c.is_transparent = true;
            c.alpha = alpha;
        }
    }

    let mut marker = Control::new(Box::new(CheckerTrans))
        .at(region.x, region.y)
        .sized(region.width, region.height);
    marker.can_use_alpha = false;
    b.add(marker);
    Ok(())
}

/// `croppedtext x y w h hue text-index`
fn cropped_text(b: &mut LayoutBuilder<'_>, p: &Params<'_>) -> Result<(), LayoutError> {
    let (x, y, w, h): (i32, i32, i32, i32) = (p.num(1)?, p.num(2)?, p.num(3)?, p.num(4)?);
    let hue: u16 = p.num(5)?;
    let text = b.line(p.num(6)?);
    b.add(Control::new(Box::new(Label::cropped(text, hue))).at(x, y).sized(w, h));
    Ok(())
}

/// `gumppic x y graphic [hue=N] [class=VirtueGumpItem]`
fn gump_pic(b: &mut LayoutBuilder<'_>, p: &Params<'_>) -> Result<(), LayoutError> {
    let x: i32 = p.num(1)?;
    let y: i32 = p.num(2)?;
    let graphic: u16 = p.num(3)?;

    let mut hue = 0u16;
    let mut is_virtue = false;
    for extra in p.tokens().iter().skip(4) {
        if let Some(value) = extra.strip_prefix("hue=") {
            hue = parse_number(value).and_then(|v| u16::try_from(v).ok()).unwrap_or_else(|| {
                tracing::warn!("gumppic: bad hue {:?}", value);
                0
            });
        } else if extra.to_ascii_lowercase().contains("virtuegumpitem") {
            is_virtue = true;
        }
    }

    let size = b.gump_size(graphic);
    let mut pic = GumpPic::new(graphic, hue);
    pic.is_virtue = is_virtue;
    let mut control = Control::new(Box::new(pic))
        .at(x, y)
        .sized(size.width, size.height)
        .with_mouse_input(true)
        .movable(true);
    control.contains_by_bounds = is_virtue;
    b.add(control);
    Ok(())
}

/// `gumppictiled x y w h graphic`
fn gump_pic_tiled(b: &mut LayoutBuilder<'_>, p: &Params<'_>) -> Result<(), LayoutError> {
    let (x, y, w, h): (i32, i32, i32, i32) = (p.num(1)?, p.num(2)?, p.num(3)?, p.num(4)?);
    let graphic: u16 = p.num(5)?;
    let control = Control::new(Box::new(GumpPicTiled { graphic }))
        .at(x, y)
        .sized(w, h)
        .with_mouse_input(true)
        .movable(true);
    b.add(control);
    Ok(())
}

fn add_html(b: &mut LayoutBuilder<'_>, rect: Rect, html: HtmlControl) {
    let scrollable = html.has_scrollbar;
    let control = Control::new(Box::new(html))
        .at(rect.x, rect.y)
        .sized(rect.width, rect.height)
        .with_mouse_input(scrollable)
        .movable(true);
    b.add(control);
}

fn html_rect(p: &Params<'_>) -> Result<Rect, LayoutError> {
    Ok(Rect::new(p.num(1)?, p.num(2)?, p.num(3)?, p.num(4)?))
}

/// `htmlgump x y w h text-index background scrollbar`
fn html_gump(b: &mut LayoutBuilder<'_>, p: &Params<'_>) -> Result<(), LayoutError> {
    let rect = html_rect(p)?;
    let text = b.line(p.num(5)?);
    let background = p.num::<i32>(6)? == 1;
    let scrollbar = p.num::<i32>(7)? != 0;
    add_html(b, rect, HtmlControl::new(text, background, scrollbar, 0));
    Ok(())
}

/// `xmfhtmlgump x y w h cliloc background scrollbar`
fn xmf_html_gump(b: &mut LayoutBuilder<'_>, p: &Params<'_>) -> Result<(), LayoutError> {
    let rect = html_rect(p)?;
    let text = b.localized(p.num(5)?);
    let background = p.num::<i32>(6)? == 1;
    let scrollbar = p.num::<i32>(7)? != 0;
    add_html(b, rect, HtmlControl::new(text, background, scrollbar, 0));
    Ok(())
}

/// `xmfhtmlgumpcolor x y w h cliloc background scrollbar color`
fn xmf_html_gump_color(b: &mut LayoutBuilder<'_>, p: &Params<'_>) -> Result<(), LayoutError> {
    let rect = html_rect(p)?;
    let text = b.localized(p.num(5)?);
    let background = p.num::<i32>(6)? == 1;
    let scrollbar = p.num::<i32>(7)? != 0;
    let color = html_color(p.num(8)?);
    add_html(b, rect, HtmlControl::new(text, background, scrollbar, color));
    Ok(())
}

/// `xmfhtmltok x y w h background scrollbar color cliloc [@args@]`
fn xmf_html_tok(b: &mut LayoutBuilder<'_>, p: &Params<'_>) -> Result<(), LayoutError> {
    let rect = html_rect(p)?;
    let background = p.num::<i32>(5)? == 1;
    let scrollbar = p.num::<i32>(6)? != 0;
    let color = html_color(p.num(7)?);
    let template = b.localized(p.num(8)?);

    let text = if p.len() > 9 {
        let args = p.tokens()[9..].join(" ");
        translate(&template, args.trim_matches('@'))
    } else {
        template
    };
    add_html(b, rect, HtmlControl::new(text, background, scrollbar, color));
    Ok(())
}

/// `page n`
fn page(b: &mut LayoutBuilder<'_>, p: &Params<'_>) -> Result<(), LayoutError> {
    b.page = p.num(1)?;
    Ok(())
}

/// `resizepic x y graphic w h`
fn resize_pic(b: &mut LayoutBuilder<'_>, p: &Params<'_>) -> Result<(), LayoutError> {
    let x: i32 = p.num(1)?;
    let y: i32 = p.num(2)?;
    let graphic: u16 = p.num(3)?;
    let w: i32 = p.num(4)?;
    let h: i32 = p.num(5)?;
    let control = Control::new(Box::new(ResizePic { graphic }))
        .at(x, y)
        .sized(w, h)
        .with_mouse_input(true)
        .movable(true);
    b.add(control);
    Ok(())
}

/// `text x y hue text-index`
fn text(b: &mut LayoutBuilder<'_>, p: &Params<'_>) -> Result<(), LayoutError> {
    let x: i32 = p.num(1)?;
    let y: i32 = p.num(2)?;
    let hue: u16 = p.num(3)?;
    let text = b.line(p.num(4)?);
    let size = b.assets.text_size(&text);
    b.add(Control::new(Box::new(Label::new(text, hue))).at(x, y).sized(size.width, size.height));
    Ok(())
}

/// `textentry x y w h hue entry-id text-index` and
/// `textentrylimited x y w h hue entry-id text-index limit`
fn text_entry(b: &mut LayoutBuilder<'_>, p: &Params<'_>) -> Result<(), LayoutError> {
    let (x, y, w, h): (i32, i32, i32, i32) = (p.num(1)?, p.num(2)?, p.num(3)?, p.num(4)?);
    let hue: u16 = p.num(5)?;
    let entry_id: u32 = p.num(6)?;
    let text = b.line(p.num(7)?);
    let limit: usize = if p.name().eq_ignore_ascii_case("textentrylimited") {
        p.num(8)?
    } else {
        0
    };
    let mut control = Control::new(Box::new(TextEntry::new(entry_id, hue, text, limit)))
        .at(x, y)
        .sized(w, h)
        .with_mouse_input(true)
        .with_keyboard_input(true);
    control.local_serial = Some(entry_id);
    b.add(control);
    Ok(())
}

/// `tilepic x y graphic` and `tilepichue x y graphic hue`
fn tile_pic(b: &mut LayoutBuilder<'_>, p: &Params<'_>) -> Result<(), LayoutError> {
    let x: i32 = p.num(1)?;
    let y: i32 = p.num(2)?;
    let graphic: u16 = p.num(3)?;
    let hue: u16 = p.opt_num(4)?.unwrap_or(0);
    let size = b.art_size(graphic);
    let control = Control::new(Box::new(StaticPic { graphic, hue }))
        .at(x, y)
        .sized(size.width, size.height)
        .movable(true);
    b.add(control);
    Ok(())
}

fn no_close(b: &mut LayoutBuilder<'_>, _p: &Params<'_>) -> Result<(), LayoutError> {
    if let Some(root) = b.tree.get_mut(b.gump) {
        root.can_close_with_right_click = false;
    }
    Ok(())
}

fn no_dispose(b: &mut LayoutBuilder<'_>, _p: &Params<'_>) -> Result<(), LayoutError> {
    if let Some(info) = b.gump_info() {
        info.can_close_with_esc = false;
    }
    Ok(())
}

fn no_move(b: &mut LayoutBuilder<'_>, _p: &Params<'_>) -> Result<(), LayoutError> {
    if let Some(info) = b.gump_info() {
        info.block_movement = true;
    }
    Ok(())
}

fn group(b: &mut LayoutBuilder<'_>, _p: &Params<'_>) -> Result<(), LayoutError> {
    b.group = b.group.saturating_add(1);
    Ok(())
}

/// `x y inactive active checked serial`, shared by radio and checkbox.
fn toggle_params(p: &Params<'_>) -> Result<(i32, i32, u16, u16, bool, u32), LayoutError> {
    Ok((
        p.num(1)?,
        p.num(2)?,
        p.num(3)?,
        p.num(4)?,
        p.num::<i32>(5)? == 1,
        p.num(6)?,
    ))
}

fn radio(b: &mut LayoutBuilder<'_>, p: &Params<'_>) -> Result<(), LayoutError> {
    let (x, y, inactive, active, checked, serial) = toggle_params(p)?;
    let size = b.gump_size(inactive);
    let mut control = Control::new(Box::new(RadioButton::new(b.group, inactive, active, checked)))
        .at(x, y)
        .sized(size.width, size.height)
        .with_mouse_input(true);
    control.local_serial = Some(serial);
    b.add(control);
    Ok(())
}

fn checkbox(b: &mut LayoutBuilder<'_>, p: &Params<'_>) -> Result<(), LayoutError> {
    let (x, y, inactive, active, checked, serial) = toggle_params(p)?;
    let size = b.gump_size(inactive);
    let mut control = Control::new(Box::new(Checkbox::new(inactive, active, checked)))
        .at(x, y)
        .sized(size.width, size.height)
        .with_mouse_input(true);
    control.local_serial = Some(serial);
    b.add(control);
    Ok(())
}

/// `tooltip cliloc [@arg1@arg2@]`
fn tooltip(b: &mut LayoutBuilder<'_>, p: &Params<'_>) -> Result<(), LayoutError> {
    if !b.config.tooltips_enabled {
        return Ok(());
    }
    let mut text = b.localized(p.num(1)?);
    if let Some(raw) = p.get(2).filter(|a| a.starts_with('@')) {
        let args = raw.trim_matches('@').replace('@', "\t");
        if args.len() > 1 {
            text = translate(&text, &args);
        } else {
            tracing::warn!("tooltip: argument string {:?} too short for {:?}", raw, text);
        }
    }
    let target = b
        .last_on_page()
        .ok_or_else(|| LayoutError::NoAnnotationTarget("tooltip".into()))?;
    if let Some(c) = b.tree.get_mut(target) {
        c.set_tooltip(Tooltip::Text(text));
    }
    Ok(())
}

/// `itemproperty serial`
fn item_property(b: &mut LayoutBuilder<'_>, p: &Params<'_>) -> Result<(), LayoutError> {
    if !b.config.tooltips_enabled {
        return Ok(());
    }
    let serial: u32 = p.num(1)?;
    let target = b
        .last_on_page()
        .ok_or_else(|| LayoutError::NoAnnotationTarget("itemproperty".into()))?;
    if let Some(c) = b.tree.get_mut(target) {
        c.set_tooltip(Tooltip::Entity(serial));
    }
    Ok(())
}

fn no_resize(_b: &mut LayoutBuilder<'_>, _p: &Params<'_>) -> Result<(), LayoutError> {
    Ok(())
}

fn master_gump(_b: &mut LayoutBuilder<'_>, _p: &Params<'_>) -> Result<(), LayoutError> {
    tracing::warn!("Gump part 'mastergump' not handled.");
    Ok(())
}
